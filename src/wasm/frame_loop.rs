use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Window;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A self-rescheduling `requestAnimationFrame` task. Dropping the handle (or
/// calling [`FrameLoop::cancel`]) revokes the pending frame and frees the
/// callback.
pub struct FrameLoop {
    window: Window,
    // The callback only holds a weak reference to its own slot, so the
    // handle is the single owner.
    slot: Rc<RefCell<Option<FrameCallback>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start<F>(window: Window, mut step: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let callback = {
            let slot = Rc::downgrade(&slot);
            let pending = pending.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                step(timestamp);

                // schedule next
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                let slot = slot.borrow();
                if let Some(callback) = slot.as_ref() {
                    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(err) => log::error!("frame loop stopped: {err:?}"),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let first = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        *slot.borrow_mut() = Some(callback);
        pending.set(Some(first));

        Ok(Self {
            window,
            slot,
            pending,
        })
    }

    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Stops the loop. Must not be called from inside the frame step.
    pub fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancel_animation_frame failed: {err:?}");
            }
        }
        self.slot.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
