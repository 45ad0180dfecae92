use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

use crate::nav::{NavState, NavView, Navigation};
use super::dom::{listen, report};

/// Menu button plus the mobile panel it opens.
pub struct NavController {
    button: Element,
    panel: HtmlElement,
    nav: Navigation,
}

impl NavController {
    /// Starts collapsed and writes that state to the page.
    pub fn new(button: Element, panel: HtmlElement) -> Result<Self, JsValue> {
        let controller = Self {
            button,
            panel,
            nav: Navigation::new(),
        };
        controller.apply(controller.nav.state().view())?;
        Ok(controller)
    }

    pub fn state(&self) -> NavState {
        self.nav.state()
    }

    pub fn toggle(&mut self) -> Result<(), JsValue> {
        let view = self.nav.toggle();
        self.apply(view)
    }

    pub fn collapse(&mut self) -> Result<(), JsValue> {
        let view = self.nav.collapse();
        self.apply(view)
    }

    fn apply(&self, view: NavView) -> Result<(), JsValue> {
        self.button.set_attribute("aria-expanded", view.aria_expanded)?;
        self.panel.toggle_attribute_with_force("data-open", view.data_open)?;
        self.panel.set_attribute("aria-hidden", view.aria_hidden)?;
        let style = self.panel.style();
        style.set_property("transform", view.transform)?;
        style.set_property("opacity", view.opacity)?;
        Ok(())
    }

    /// Wires the button and every link inside the panel.
    pub fn attach(self) -> Result<Rc<RefCell<Self>>, JsValue> {
        let button = self.button.clone();
        let links = self.panel.query_selector_all("a")?;
        let controller = Rc::new(RefCell::new(self));

        {
            let controller = controller.clone();
            listen(&button, "click", move |_| {
                report("menu toggle", controller.borrow_mut().toggle());
            })?;
        }

        // close mobile nav on link click
        for i in 0..links.length() {
            let Some(link) = links.get(i) else {
                continue;
            };
            let controller = controller.clone();
            listen(&link, "click", move |_| {
                report("menu collapse", controller.borrow_mut().collapse());
            })?;
        }
        Ok(controller)
    }
}
