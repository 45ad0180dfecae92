use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::modal::{ModalState, VideoModal};
use crate::portfolio::{Portfolio, WorkItemId};
use super::dom::{listen, report};

/// Overlay that plays a work item's video.
pub struct ModalController {
    overlay: HtmlElement,
    holder: Element,
    body: HtmlElement,
    modal: VideoModal,
}

impl ModalController {
    /// `body` is the element whose scrolling is locked while a video plays.
    /// Starts closed and writes that state to the page.
    pub fn new(
        overlay: HtmlElement,
        holder: Element,
        body: HtmlElement,
        portfolio: Portfolio,
    ) -> Result<Self, JsValue> {
        let controller = Self {
            overlay,
            holder,
            body,
            modal: VideoModal::new(portfolio),
        };
        controller.render()?;
        Ok(controller)
    }

    pub fn state(&self) -> ModalState {
        self.modal.state()
    }

    /// Unknown ids are logged and otherwise ignored.
    pub fn open(&mut self, id: WorkItemId) -> Result<(), JsValue> {
        match self.modal.open(id) {
            Ok(item) => log::debug!("playing {:?}", item.title),
            Err(err) => {
                log::warn!("video modal: {err}");
                return Ok(());
            }
        }
        self.render()
    }

    pub fn close(&mut self) -> Result<(), JsValue> {
        if self.modal.close() {
            log::debug!("video modal closed");
        }
        self.render()
    }

    fn render(&self) -> Result<(), JsValue> {
        let view = self.modal.view();
        // Dropping the iframe is what stops playback.
        self.holder.set_inner_html(&view.holder_markup);
        self.overlay.class_list().toggle_with_force("hidden", view.hidden)?;
        self.overlay.set_attribute("aria-hidden", view.aria_hidden)?;
        self.body.style().set_property("overflow", view.body_overflow)?;
        Ok(())
    }

    /// Closes on the close button, a click on the backdrop itself, or Escape.
    pub fn attach(
        self,
        close_button: Option<Element>,
        document: &Document,
    ) -> Result<Rc<RefCell<Self>>, JsValue> {
        let overlay = self.overlay.clone();
        let controller = Rc::new(RefCell::new(self));

        if let Some(button) = close_button {
            let controller = controller.clone();
            listen(&button, "click", move |_| {
                report("modal close", controller.borrow_mut().close());
            })?;
        }

        {
            let controller = controller.clone();
            let backdrop: Element = overlay.clone().into();
            listen(&overlay, "click", move |event| {
                let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
                if target.as_ref() == Some(&backdrop) {
                    report("modal close", controller.borrow_mut().close());
                }
            })?;
        }

        {
            let controller = controller.clone();
            listen(document, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Escape");
                if !is_escape {
                    return;
                }
                let open = controller.borrow().state() != ModalState::Closed;
                if open {
                    report("modal close", controller.borrow_mut().close());
                }
            })?;
        }

        Ok(controller)
    }
}
