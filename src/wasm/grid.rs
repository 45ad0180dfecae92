use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::StaggerConfig;
use crate::portfolio::{Portfolio, WorkItemId};
use super::dom::{add_class_later, listen, report};
use super::modal::ModalController;
use super::reveal::IN_VIEW;

/// Renders the portfolio into the grid container.
pub struct GridBuilder {
    window: Window,
    document: Document,
    grid: Element,
    stagger: StaggerConfig,
}

impl GridBuilder {
    pub fn new(window: Window, document: Document, grid: Element, stagger: StaggerConfig) -> Self {
        Self {
            window,
            document,
            grid,
            stagger,
        }
    }

    /// Appends one `.work-card` per item in order. Each card opens its video
    /// on click and animates in after its stagger delay.
    pub fn build(
        &self,
        portfolio: &Portfolio,
        modal: &Rc<RefCell<ModalController>>,
    ) -> Result<Vec<HtmlElement>, JsValue> {
        let mut cards = Vec::with_capacity(portfolio.len());
        for plan in portfolio.card_plans(&self.stagger) {
            let card: HtmlElement = self.document.create_element("div")?.dyn_into()?;
            card.set_class_name("work-card");
            card.style().set_property("--delay", &plan.css_delay)?;
            card.set_attribute("data-work-id", &plan.id.to_string())?;
            card.set_inner_html(&plan.markup);

            let id = plan.id;
            let modal = modal.clone();
            listen(&card, "click", move |_| {
                report("open video", modal.borrow_mut().open(id));
            })?;

            self.grid.append_child(&card)?;
            // stagger reveal
            add_class_later(&self.window, &card, IN_VIEW, plan.reveal_after_ms)?;
            cards.push(card);
        }
        log::debug!("portfolio grid: {} cards", cards.len());
        Ok(cards)
    }
}

/// The hero's showreel button always plays the same item.
pub fn wire_showreel(
    button: &Element,
    id: WorkItemId,
    modal: &Rc<RefCell<ModalController>>,
) -> Result<(), JsValue> {
    let modal = modal.clone();
    listen(button, "click", move |_| {
        report("showreel", modal.borrow_mut().open(id));
    })
}
