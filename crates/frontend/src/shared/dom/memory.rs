//! In-memory stand-ins for the document, session storage and tab toolkit.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{ElementRegistry, Region, SessionStore, ShownHandler, TabActivator, TabStrip};
use crate::shared::error::DomError;

/// Element with an inline display state. `None` until first set.
#[derive(Debug, Default)]
pub struct MemoryElement {
    visible: Cell<Option<bool>>,
}

impl MemoryElement {
    pub fn visible(&self) -> Option<bool> {
        self.visible.get()
    }
}

impl Region for Rc<MemoryElement> {
    fn set_visible(&self, visible: bool) {
        self.visible.set(Some(visible));
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RefCell<HashMap<String, Rc<MemoryElement>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: &str) -> Rc<MemoryElement> {
        let element = Rc::new(MemoryElement::default());
        self.elements
            .borrow_mut()
            .insert(id.to_string(), Rc::clone(&element));
        element
    }

    /// Display state of `id`, `None` when missing or never set
    pub fn visible(&self, id: &str) -> Option<bool> {
        self.elements.borrow().get(id).and_then(|el| el.visible())
    }

    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }
}

impl ElementRegistry for MemoryDocument {
    type Element = Rc<MemoryElement>;

    fn find(&self, id: &str) -> Option<Self::Element> {
        self.elements.borrow().get(id).cloned()
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

pub struct MemoryTrigger {
    target: Option<String>,
    handlers: RefCell<Vec<ShownHandler>>,
}

impl MemoryTrigger {
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Dispatches the shown event to every registered handler
    pub fn fire_shown(&self) {
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler(self.target.clone());
        }
    }
}

pub struct MemoryTabStrip {
    triggers: Vec<Rc<MemoryTrigger>>,
    accepts_listeners: Cell<bool>,
}

impl Default for MemoryTabStrip {
    fn default() -> Self {
        Self {
            triggers: Vec::new(),
            accepts_listeners: Cell::new(true),
        }
    }
}

impl MemoryTabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// When false, `on_shown` refuses every listener
    pub fn set_accepts_listeners(&self, accepts: bool) {
        self.accepts_listeners.set(accepts);
    }

    pub fn with_targets(targets: &[&str]) -> Self {
        let mut strip = Self::new();
        for &target in targets {
            strip.push(Some(target));
        }
        strip
    }

    pub fn push(&mut self, target: Option<&str>) -> Rc<MemoryTrigger> {
        let trigger = Rc::new(MemoryTrigger {
            target: target.map(str::to_string),
            handlers: RefCell::new(Vec::new()),
        });
        self.triggers.push(Rc::clone(&trigger));
        trigger
    }

    /// Simulates the toolkit showing the tab with this target.
    /// Returns false when no trigger matches.
    pub fn fire_shown(&self, target: &str) -> bool {
        match self.find_trigger(target) {
            Some(trigger) => {
                trigger.fire_shown();
                true
            }
            None => false,
        }
    }

    pub fn handler_count(&self) -> usize {
        self.triggers.iter().map(|t| t.handler_count()).sum()
    }
}

impl TabStrip for MemoryTabStrip {
    type Trigger = Rc<MemoryTrigger>;

    fn triggers(&self) -> Vec<Self::Trigger> {
        self.triggers.clone()
    }

    fn target(&self, trigger: &Self::Trigger) -> Option<String> {
        trigger.target.clone()
    }

    fn on_shown(&self, trigger: &Self::Trigger, handler: ShownHandler) -> bool {
        if !self.accepts_listeners.get() {
            return false;
        }
        trigger.handlers.borrow_mut().push(handler);
        true
    }
}

/// Records activations and, like a real toolkit, fires the shown event.
#[derive(Debug)]
pub struct MemoryTabActivator {
    available: bool,
    activated: RefCell<Vec<Option<String>>>,
}

impl MemoryTabActivator {
    pub fn available() -> Self {
        Self {
            available: true,
            activated: RefCell::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            activated: RefCell::new(Vec::new()),
        }
    }

    pub fn activated(&self) -> Vec<Option<String>> {
        self.activated.borrow().clone()
    }
}

impl TabActivator<Rc<MemoryTrigger>> for MemoryTabActivator {
    fn is_available(&self) -> bool {
        self.available
    }

    fn activate(&self, trigger: &Rc<MemoryTrigger>) -> Result<(), DomError> {
        if !self.available {
            return Err(DomError::ActivatorMissing("memory"));
        }
        self.activated.borrow_mut().push(trigger.target.clone());
        trigger.fire_shown();
        Ok(())
    }
}
