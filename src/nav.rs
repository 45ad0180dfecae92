/// Mobile navigation panel state. Every attribute the page shows is derived
/// from this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Collapsed,
    Expanded,
}

impl NavState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    pub fn view(self) -> NavView {
        match self {
            Self::Expanded => NavView {
                aria_expanded: "true",
                aria_hidden: "false",
                data_open: true,
                transform: "translateY(0)",
                opacity: "1",
            },
            Self::Collapsed => NavView {
                aria_expanded: "false",
                aria_hidden: "true",
                data_open: false,
                transform: "translateY(-8px)",
                opacity: "0",
            },
        }
    }
}

/// Attribute and style values for the trigger button and the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavView {
    /// `aria-expanded` on the menu button.
    pub aria_expanded: &'static str,
    pub aria_hidden: &'static str,
    pub data_open: bool,
    pub transform: &'static str,
    pub opacity: &'static str,
}

#[derive(Debug, Default)]
pub struct Navigation {
    state: NavState,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn toggle(&mut self) -> NavView {
        self.state = self.state.toggled();
        self.state.view()
    }

    pub fn collapse(&mut self) -> NavView {
        self.state = NavState::Collapsed;
        self.state.view()
    }
}
