use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::contact::{handle_submission, FormOutcome};
use super::dom::{listen, Notifier};

/// Local-only contact form: validates, answers, clears. Nothing is sent.
pub struct ContactController<N> {
    form: HtmlFormElement,
    name: HtmlInputElement,
    notifier: N,
}

impl<N: Notifier + 'static> ContactController<N> {
    pub fn new(form: HtmlFormElement, name: HtmlInputElement, notifier: N) -> Self {
        Self { form, name, notifier }
    }

    pub fn submit(&self) -> FormOutcome {
        let outcome = handle_submission(&self.name.value());
        self.notifier.notify(&outcome.message);
        if outcome.reset {
            self.form.reset();
        }
        log::debug!("contact form submitted, accepted: {}", outcome.reset);
        outcome
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn attach(self) -> Result<Rc<Self>, JsValue> {
        let form = self.form.clone();
        let controller = Rc::new(self);
        {
            let controller = controller.clone();
            listen(&form, "submit", move |event| {
                event.prevent_default();
                controller.submit();
            })?;
        }
        Ok(controller)
    }
}
