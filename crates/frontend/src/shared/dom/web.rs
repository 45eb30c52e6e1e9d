//! Browser implementations backed by web-sys.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Storage};

use super::{ElementRegistry, Region, SessionStore, ShownHandler, TabActivator, TabStrip};
use crate::shared::error::DomError;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Elements of the current document, looked up by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRegistry;

impl ElementRegistry for DocumentRegistry {
    type Element = HtmlElement;

    fn find(&self, id: &str) -> Option<HtmlElement> {
        document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Region for HtmlElement {
    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(err) = self.style().set_property("display", display) {
            log::warn!("failed to set display on #{}: {:?}", self.id(), err);
        }
    }
}

/// `window.sessionStorage`, resolved on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Result<Storage, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        window.session_storage()?.ok_or(DomError::NoSessionStorage)
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        Self::storage()?.set_item(key, value)?;
        Ok(())
    }
}

/// Tab triggers matched by a selector such as `#cipherTabs a`.
#[derive(Debug, Clone)]
pub struct DocumentTabStrip {
    selector: String,
    attribute: String,
    shown_event: String,
}

impl DocumentTabStrip {
    pub fn new(
        selector: impl Into<String>,
        attribute: impl Into<String>,
        shown_event: impl Into<String>,
    ) -> Self {
        Self {
            selector: selector.into(),
            attribute: attribute.into(),
            shown_event: shown_event.into(),
        }
    }
}

impl TabStrip for DocumentTabStrip {
    type Trigger = Element;

    fn triggers(&self) -> Vec<Element> {
        let Some(document) = document() else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all(&self.selector) else {
            log::warn!("invalid tab selector `{}`", self.selector);
            return Vec::new();
        };

        let mut triggers = Vec::new();
        for i in 0..nodes.length() {
            if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                triggers.push(element);
            }
        }
        triggers
    }

    fn target(&self, trigger: &Element) -> Option<String> {
        trigger.get_attribute(&self.attribute)
    }

    fn on_shown(&self, trigger: &Element, handler: ShownHandler) -> bool {
        let attribute = self.attribute.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute(&attribute));
            handler(target);
        }) as Box<dyn FnMut(_)>);

        match trigger
            .add_event_listener_with_callback(&self.shown_event, closure.as_ref().unchecked_ref())
        {
            // Triggers live as long as the page; keep the closure alive.
            Ok(()) => {
                closure.forget();
                true
            }
            Err(err) => {
                log::warn!("failed to listen for {}: {:?}", self.shown_event, err);
                false
            }
        }
    }
}

/// Bootstrap's `Tab` plugin, used when `window.bootstrap` is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapTabActivator;

impl BootstrapTabActivator {
    fn bootstrap() -> Option<JsValue> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str("bootstrap")).ok()?;
        if value.is_undefined() || value.is_null() {
            None
        } else {
            Some(value)
        }
    }
}

impl TabActivator<Element> for BootstrapTabActivator {
    fn is_available(&self) -> bool {
        Self::bootstrap().is_some()
    }

    fn activate(&self, trigger: &Element) -> Result<(), DomError> {
        let bootstrap = Self::bootstrap().ok_or(DomError::ActivatorMissing("bootstrap"))?;
        let tab_class = Reflect::get(&bootstrap, &JsValue::from_str("Tab"))?
            .dyn_into::<Function>()
            .map_err(|_| DomError::ActivatorMissing("bootstrap.Tab"))?;

        let tab = Reflect::construct(&tab_class, &Array::of1(trigger))?;
        let show = Reflect::get(&tab, &JsValue::from_str("show"))?
            .dyn_into::<Function>()
            .map_err(|_| DomError::ActivatorMissing("bootstrap.Tab.show"))?;
        show.call0(&tab)?;
        Ok(())
    }
}
