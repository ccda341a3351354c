use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    AddEventListenerOptions, Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::lazy_image::{self, IMAGE_SELECTOR};
use super::reveal::{self, SECTION_SELECTOR};
use super::{ElementHandle, ObserverOptions, ViewportTrigger, VisibilityChange, VisibilityNotifier};

impl ElementHandle for Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            warn!("failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            warn!("failed to remove class {}: {:?}", class, e);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = Element::set_attribute(self, name, value) {
            warn!("failed to set {}: {:?}", name, e);
        }
    }

    fn on_load_once(&self, callback: Box<dyn FnOnce()>) {
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        // once_into_js frees the closure after its single call
        let listener = Closure::once_into_js(move || callback());
        if let Err(e) = self.add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            listener.unchecked_ref(),
            &options,
        ) {
            warn!("failed to listen for load: {:?}", e);
        }
    }
}

impl VisibilityNotifier<Element> for IntersectionObserver {
    fn observe(&self, target: &Element) {
        IntersectionObserver::observe(self, target);
    }

    fn unobserve(&self, target: &Element) {
        IntersectionObserver::unobserve(self, target);
    }
}

impl From<&IntersectionObserverEntry> for VisibilityChange<Element> {
    fn from(entry: &IntersectionObserverEntry) -> Self {
        Self {
            target: entry.target(),
            is_intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
        }
    }
}

/// A live `IntersectionObserver` subscription that hands every change to a
/// callback. Disconnects when dropped.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl VisibilityWatcher {
    pub fn new(
        options: ObserverOptions,
        mut on_change: impl FnMut(VisibilityChange<Element>) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(VisibilityChange::from(&entry));
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn watch(&self, target: &Element) {
        self.observer.observe(target);
    }

    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

type DomViewportTrigger = ViewportTrigger<Element, IntersectionObserver>;

pub struct DomTrigger {
    _watcher: VisibilityWatcher,
    trigger: Rc<RefCell<Option<DomViewportTrigger>>>,
}

impl DomTrigger {
    fn install(
        options: ObserverOptions,
        build: impl FnOnce(IntersectionObserver) -> DomViewportTrigger,
    ) -> Result<Self, JsValue> {
        let slot: Rc<RefCell<Option<DomViewportTrigger>>> = Rc::default();
        let handler = slot.clone();
        let watcher = VisibilityWatcher::new(options, move |change| {
            if let Some(trigger) = handler.borrow_mut().as_mut() {
                trigger.handle(&change);
            }
        })?;
        // Observer callbacks are queued, so nothing fires before the slot is filled.
        *slot.borrow_mut() = Some(build(watcher.observer().clone()));
        Ok(Self {
            _watcher: watcher,
            trigger: slot,
        })
    }

    pub fn pending(&self) -> usize {
        self.trigger
            .borrow()
            .as_ref()
            .map(|trigger| trigger.pending())
            .unwrap_or(0)
    }
}

fn query_elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn arm_section_reveal(document: &Document) -> Result<DomTrigger, JsValue> {
    let sections = query_elements(document, SECTION_SELECTOR)?;
    let trigger = DomTrigger::install(crate::config::REVEAL_OPTIONS, |observer| {
        reveal::section_reveal(observer, sections)
    })?;
    info!("Armed section reveal on {} sections", trigger.pending());
    Ok(trigger)
}

pub fn arm_lazy_images(document: &Document) -> Result<DomTrigger, JsValue> {
    let images = query_elements(document, IMAGE_SELECTOR)?;
    let trigger = DomTrigger::install(crate::config::LAZY_IMAGE_OPTIONS, |observer| {
        lazy_image::lazy_images(observer, images)
    })?;
    debug!("Armed lazy loading on {} images", trigger.pending());
    Ok(trigger)
}
