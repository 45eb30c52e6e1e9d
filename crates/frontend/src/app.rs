use std::rc::Rc;

use contracts::PageConfig;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, Window};

use crate::cipher_tabs::{InputModeToggler, TabPersistence};
use crate::shared::dom::web::{
    BootstrapTabActivator, BrowserSessionStore, DocumentRegistry, DocumentTabStrip,
};
use crate::shared::dom::{ElementRegistry, SessionStore, TabActivator, TabStrip};
use crate::shared::error::DomError;

/// Global looked up by the template's inline `onchange` handlers
const TOGGLE_GLOBAL: &str = "toggleInputType";

/// Which startup steps are already due when the module starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupSteps {
    /// `DOMContentLoaded` has fired
    pub ready_now: bool,
    /// `load` has fired
    pub load_now: bool,
}

impl StartupSteps {
    pub fn for_ready_state(ready_state: &str) -> Self {
        match ready_state {
            "loading" => Self {
                ready_now: false,
                load_now: false,
            },
            "interactive" => Self {
                ready_now: true,
                load_now: false,
            },
            _ => Self {
                ready_now: true,
                load_now: true,
            },
        }
    }
}

/// Behaviour of the cipher form page.
pub struct CipherPage<R, S, A> {
    toggler: InputModeToggler<R>,
    tabs: TabPersistence<S, A>,
}

pub type BrowserCipherPage =
    CipherPage<DocumentRegistry, DocumentTabStrip, BootstrapTabActivator>;

impl<R, S, A> CipherPage<R, S, A>
where
    R: ElementRegistry,
    S: TabStrip,
    A: TabActivator<S::Trigger>,
{
    pub fn new(toggler: InputModeToggler<R>, tabs: TabPersistence<S, A>) -> Self {
        Self { toggler, tabs }
    }

    pub fn toggler(&self) -> &InputModeToggler<R> {
        &self.toggler
    }

    pub fn tabs(&self) -> &TabPersistence<S, A> {
        &self.tabs
    }

    /// Document parsed: reset input modes, then start tracking the tabs.
    pub fn on_ready(&self) {
        self.toggler.initialize_all_modes();
        let wired = self.tabs.wire_tab_listeners();
        log::debug!("wired {wired} tab triggers");
    }

    /// Page fully loaded, tab toolkit included.
    pub fn on_load(&self) {
        if let Some(tab) = self.tabs.restore_active_tab() {
            match tab.cipher() {
                Some(cipher) => log::info!("restored {} tab", cipher.display_name()),
                None => log::info!("restored tab {tab}"),
            }
        }
    }

    /// Runs the steps whose signal has already passed, ready before load.
    pub fn run_due(&self, steps: StartupSteps) {
        if steps.ready_now {
            self.on_ready();
        }
        if steps.load_now {
            self.on_load();
        }
    }
}

impl BrowserCipherPage {
    pub fn for_browser(config: &PageConfig) -> Self {
        let strip = DocumentTabStrip::new(
            config.trigger_selector(),
            config.target_attribute.clone(),
            config.shown_event.clone(),
        );
        let store: Rc<dyn SessionStore> = Rc::new(BrowserSessionStore);

        Self::new(
            InputModeToggler::new(DocumentRegistry, config.ciphers.clone()),
            TabPersistence::new(store, strip, BootstrapTabActivator, config),
        )
    }

    /// Schedules startup against the document lifecycle.
    ///
    /// The wasm module may start after `DOMContentLoaded` or even `load`
    /// has fired, so steps whose signal is already past run immediately.
    pub fn mount(config: &PageConfig) -> Result<(), DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let page = Rc::new(Self::for_browser(config));

        let steps = StartupSteps::for_ready_state(&document.ready_state());
        page.run_due(steps);

        if !steps.ready_now {
            let ready = Rc::clone(&page);
            listen(&document, "DOMContentLoaded", move || ready.on_ready())?;
        }
        if !steps.load_now {
            let loaded = Rc::clone(&page);
            listen(&window, "load", move || loaded.on_load())?;
        }
        Ok(())
    }
}

/// Publishes `window.toggleInputType` for the template's radio buttons.
pub fn expose_toggle_input_type(window: &Window) -> Result<(), DomError> {
    let closure = Closure::wrap(Box::new(|cipher: String, input_type: String| {
        InputModeToggler::new(DocumentRegistry, Vec::new())
            .toggle_from_template(&cipher, &input_type);
    }) as Box<dyn Fn(String, String)>);

    Reflect::set(window, &JsValue::from_str(TOGGLE_GLOBAL), closure.as_ref())?;
    // Page-lifetime global
    closure.forget();
    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &str,
    mut callback: impl FnMut() + 'static,
) -> Result<(), DomError> {
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        callback();
    }) as Box<dyn FnMut(_)>);

    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener
    closure.forget();
    Ok(())
}
