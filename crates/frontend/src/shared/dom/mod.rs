//! Seams between the page logic and the browser.
//!
//! The page code only talks to these traits. `web` backs them with the real
//! document, `memory` with plain Rust state for tests.

pub mod memory;
pub mod web;

use std::rc::Rc;

use crate::shared::error::DomError;

/// An element whose visibility can be switched.
pub trait Region {
    fn set_visible(&self, visible: bool);
}

/// Lookup of elements by id.
pub trait ElementRegistry {
    type Element: Region;

    fn find(&self, id: &str) -> Option<Self::Element>;
}

/// Session-scoped key/value storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomError>;
}

/// Called once a tab is shown, with the trigger's target attribute as read
/// at that moment.
pub type ShownHandler = Rc<dyn Fn(Option<String>)>;

/// The tab triggers inside the tab container.
pub trait TabStrip {
    type Trigger;

    fn triggers(&self) -> Vec<Self::Trigger>;

    /// Target reference of a trigger, e.g. `#vig-tab`
    fn target(&self, trigger: &Self::Trigger) -> Option<String>;

    /// Returns false when the listener could not be attached.
    fn on_shown(&self, trigger: &Self::Trigger, handler: ShownHandler) -> bool;

    fn find_trigger(&self, token: &str) -> Option<Self::Trigger> {
        self.triggers()
            .into_iter()
            .find(|trigger| self.target(trigger).as_deref() == Some(token))
    }
}

/// Programmatic tab activation, supplied by a UI toolkit when one is loaded.
pub trait TabActivator<T> {
    fn is_available(&self) -> bool;
    fn activate(&self, trigger: &T) -> Result<(), DomError>;
}

/// Activator for environments without a tab toolkit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTabActivator;

impl<T> TabActivator<T> for NoopTabActivator {
    fn is_available(&self) -> bool {
        false
    }

    fn activate(&self, _trigger: &T) -> Result<(), DomError> {
        Ok(())
    }
}
