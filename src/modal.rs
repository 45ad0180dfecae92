//! Video overlay state.

use crate::error::SiteError;
use crate::escape::escape_html;
use crate::portfolio::{Portfolio, WorkItem, WorkItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(WorkItemId),
}

/// What the overlay, its holder and `<body>` should look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub hidden: bool,
    pub aria_hidden: &'static str,
    /// Inline `overflow` for `<body>`; empty restores the stylesheet value.
    pub body_overflow: &'static str,
    pub holder_markup: String,
}

#[derive(Debug)]
pub struct VideoModal {
    portfolio: Portfolio,
    state: ModalState,
}

impl VideoModal {
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Shows `id`, replacing whatever was showing. An unknown id leaves the
    /// state untouched.
    pub fn open(&mut self, id: WorkItemId) -> Result<&WorkItem, SiteError> {
        let item = self
            .portfolio
            .get(id)
            .ok_or(SiteError::UnknownWorkItem(id))?;
        self.state = ModalState::Open(id);
        Ok(item)
    }

    /// Returns whether anything was showing.
    pub fn close(&mut self) -> bool {
        let was_open = self.state != ModalState::Closed;
        self.state = ModalState::Closed;
        was_open
    }

    pub fn view(&self) -> ModalView {
        match self.state {
            ModalState::Open(id) => ModalView {
                hidden: false,
                aria_hidden: "false",
                body_overflow: "hidden",
                holder_markup: self.portfolio.get(id).map(embed_markup).unwrap_or_default(),
            },
            ModalState::Closed => ModalView {
                hidden: true,
                aria_hidden: "true",
                body_overflow: "",
                holder_markup: String::new(),
            },
        }
    }
}

pub fn embed_markup(item: &WorkItem) -> String {
    format!(
        concat!(
            r#"<iframe src="{}" frameborder="0" allow="autoplay; encrypted-media" "#,
            "allowfullscreen></iframe>",
        ),
        escape_html(&item.autoplay_src())
    )
}
