use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList,
};

use crate::reveal::{RevealChange, RevealTracker};

/// Marker class the stylesheet animates in.
pub const IN_VIEW: &str = "in-view";

struct Group {
    tracker: RevealTracker,
    elements: Vec<Element>,
}

impl Group {
    fn slot_of(&self, element: &Element) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }
}

/// `IntersectionObserver` that adds [`IN_VIEW`] once and then stops watching.
pub struct RevealObserver {
    observer: IntersectionObserver,
    group: Rc<RefCell<Group>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn new(threshold: f64) -> Result<Self, JsValue> {
        let group = Rc::new(RefCell::new(Group {
            tracker: RevealTracker::new(threshold)?,
            elements: Vec::new(),
        }));

        let callback = {
            let group = group.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                let mut group = group.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(slot) = group.slot_of(&target) else {
                        continue;
                    };
                    let change = group
                        .tracker
                        .report(slot, entry.is_intersecting(), entry.intersection_ratio());
                    if change == RevealChange::Revealed {
                        if let Err(err) = target.class_list().add_1(IN_VIEW) {
                            log::warn!("reveal: {err:?}");
                        }
                        observer.unobserve(&target);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            group,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        let mut group = self.group.borrow_mut();
        group.tracker.track();
        group.elements.push(element.clone());
        self.observer.observe(element);
    }

    pub fn observe_all(&self, nodes: &NodeList) {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                self.observe(&element);
            }
        }
    }

    pub fn is_revealed(&self, element: &Element) -> bool {
        let group = self.group.borrow();
        group
            .slot_of(element)
            .is_some_and(|slot| group.tracker.is_revealed(slot))
    }

    pub fn threshold(&self) -> f64 {
        self.group.borrow().tracker.threshold()
    }

    pub fn revealed_count(&self) -> usize {
        self.group.borrow().tracker.revealed_count()
    }

    pub fn len(&self) -> usize {
        self.group.borrow().tracker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
