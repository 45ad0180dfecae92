use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, Window};

use crate::error::SiteError;

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Looks up a required element and casts it to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_owned()))?
        .dyn_into::<T>()
        .map_err(|_| SiteError::ElementType {
            id: id.to_owned(),
            expected: std::any::type_name::<T>(),
        })
}

/// Like [`by_id`] for elements a page may leave out.
pub fn optional_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Registers `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Adds `class` to `element` once `delay_ms` has passed.
pub fn add_class_later(
    window: &Window,
    element: &web_sys::Element,
    class: &'static str,
    delay_ms: u32,
) -> Result<(), JsValue> {
    let element = element.clone();
    let callback = Closure::once_into_js(move || {
        if let Err(err) = element.class_list().add_1(class) {
            log::warn!("could not add .{class}: {err:?}");
        }
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    )?;
    Ok(())
}

/// Logs a failed event handler; handlers have nowhere to return errors to.
pub fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{what} failed: {err:?}");
    }
}

/// Blocking user-facing messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
}
