//! Keeps the active cipher tab across reloads within one browser session.

use std::cell::Cell;
use std::rc::Rc;

use contracts::{PageConfig, TabToken};

use crate::shared::dom::{SessionStore, ShownHandler, TabActivator, TabStrip};

pub struct TabPersistence<S, A> {
    store: Rc<dyn SessionStore>,
    strip: S,
    activator: A,
    storage_key: Rc<str>,
    default_tab: TabToken,
    wired: Cell<bool>,
}

impl<S, A> TabPersistence<S, A>
where
    S: TabStrip,
    A: TabActivator<S::Trigger>,
{
    pub fn new(store: Rc<dyn SessionStore>, strip: S, activator: A, config: &PageConfig) -> Self {
        Self {
            store,
            strip,
            activator,
            storage_key: Rc::from(config.storage_key.as_str()),
            default_tab: config.default_tab.clone(),
            wired: Cell::new(false),
        }
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    pub fn activator(&self) -> &A {
        &self.activator
    }

    pub fn record_active_tab(&self, token: &TabToken) {
        record(self.store.as_ref(), &self.storage_key, token);
    }

    /// Stored tab, or the default when nothing (or an empty value) is stored.
    pub fn stored_tab(&self) -> TabToken {
        self.store
            .get(&self.storage_key)
            .map(TabToken::from)
            .filter(|token| !token.is_empty())
            .unwrap_or_else(|| self.default_tab.clone())
    }

    /// Activates the stored tab. Returns the token when a tab was activated.
    pub fn restore_active_tab(&self) -> Option<TabToken> {
        let token = self.stored_tab();

        let Some(trigger) = self.strip.find_trigger(token.as_str()) else {
            log::debug!("no tab trigger for {token}");
            return None;
        };
        if !self.activator.is_available() {
            log::debug!("no tab activator loaded, {token} not restored");
            return None;
        }

        match self.activator.activate(&trigger) {
            Ok(()) => Some(token),
            Err(err) => {
                log::warn!("failed to activate {token}: {err}");
                None
            }
        }
    }

    /// Records the tab on every shown event. Returns the number of listeners
    /// attached; once any are attached, further calls register nothing.
    pub fn wire_tab_listeners(&self) -> usize {
        if self.wired.get() {
            log::debug!("tab listeners already wired");
            return 0;
        }

        let store = Rc::clone(&self.store);
        let key = Rc::clone(&self.storage_key);
        let handler: ShownHandler = Rc::new(move |target: Option<String>| match target {
            Some(target) => record(store.as_ref(), &key, &TabToken::from(target)),
            None => log::debug!("shown tab has no target, not recorded"),
        });

        let attached = self
            .strip
            .triggers()
            .iter()
            .filter(|trigger| self.strip.on_shown(*trigger, Rc::clone(&handler)))
            .count();

        self.wired.set(attached > 0);
        attached
    }
}

fn record(store: &dyn SessionStore, key: &str, token: &TabToken) {
    match store.set(key, token.as_str()) {
        Ok(()) => log::debug!("active tab {token}"),
        Err(err) => log::warn!("failed to save active tab {token}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::memory::{MemorySessionStore, MemoryTabActivator, MemoryTabStrip};
    use crate::shared::dom::NoopTabActivator;
    use contracts::CipherKind;

    fn all_tabs() -> MemoryTabStrip {
        let anchors: Vec<String> = CipherKind::all().iter().map(|c| c.tab_anchor()).collect();
        let anchors: Vec<&str> = anchors.iter().map(String::as_str).collect();
        MemoryTabStrip::with_targets(&anchors)
    }

    fn persistence<A>(
        store: &Rc<MemorySessionStore>,
        activator: A,
    ) -> TabPersistence<MemoryTabStrip, A>
    where
        A: TabActivator<<MemoryTabStrip as TabStrip>::Trigger>,
    {
        let store: Rc<dyn SessionStore> = store.clone();
        TabPersistence::new(store, all_tabs(), activator, &PageConfig::default())
    }

    fn stored(store: &MemorySessionStore) -> Option<String> {
        store.get("activeTab")
    }

    #[test]
    fn test_restore_defaults_to_shift_tab() {
        let store = Rc::new(MemorySessionStore::new());
        let tabs = persistence(&store, MemoryTabActivator::available());

        let restored = tabs.restore_active_tab();

        assert_eq!(restored, Some(TabToken::from("#shift-tab")));
        assert_eq!(
            tabs.activator().activated(),
            vec![Some("#shift-tab".to_string())]
        );
    }

    #[test]
    fn test_restore_recorded_tab_after_reload() {
        let store = Rc::new(MemorySessionStore::new());
        let before = persistence(&store, MemoryTabActivator::available());
        before.record_active_tab(&TabToken::from("#vig-tab"));

        // Same session, fresh page
        let after = persistence(&store, MemoryTabActivator::available());
        assert_eq!(after.restore_active_tab(), Some(TabToken::from("#vig-tab")));
        assert_eq!(
            after.activator().activated(),
            vec![Some("#vig-tab".to_string())]
        );
    }

    #[test]
    fn test_shown_event_records_tab() {
        let store = Rc::new(MemorySessionStore::new());
        let tabs = persistence(&store, MemoryTabActivator::available());

        assert_eq!(tabs.wire_tab_listeners(), 8);
        assert!(tabs.strip().fire_shown("#affine-tab"));

        assert_eq!(stored(&store).as_deref(), Some("#affine-tab"));
    }

    #[test]
    fn test_wiring_twice_registers_once() {
        let store = Rc::new(MemorySessionStore::new());
        let tabs = persistence(&store, MemoryTabActivator::available());

        assert_eq!(tabs.wire_tab_listeners(), 8);
        assert_eq!(tabs.wire_tab_listeners(), 0);
        assert_eq!(tabs.strip().handler_count(), 8);

        tabs.strip().fire_shown("#hill-tab");
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_wiring_without_triggers_can_retry() {
        let store = Rc::new(MemorySessionStore::new());
        let store_dyn: Rc<dyn SessionStore> = store.clone();
        let tabs = TabPersistence::new(
            store_dyn,
            MemoryTabStrip::new(),
            NoopTabActivator,
            &PageConfig::default(),
        );

        assert_eq!(tabs.wire_tab_listeners(), 0);
        assert!(!tabs.wired.get());
    }

    #[test]
    fn test_refused_listeners_leave_wiring_open() {
        let store = Rc::new(MemorySessionStore::new());
        let tabs = persistence(&store, MemoryTabActivator::available());

        tabs.strip().set_accepts_listeners(false);
        assert_eq!(tabs.wire_tab_listeners(), 0);
        assert!(!tabs.wired.get());

        tabs.strip().set_accepts_listeners(true);
        assert_eq!(tabs.wire_tab_listeners(), 8);
        assert_eq!(tabs.wire_tab_listeners(), 0);

        tabs.strip().fire_shown("#playfair-tab");
        assert_eq!(stored(&store).as_deref(), Some("#playfair-tab"));
    }

    #[test]
    fn test_restore_reactivation_records_again() {
        let store = Rc::new(MemorySessionStore::new());
        let tabs = persistence(&store, MemoryTabActivator::available());
        tabs.wire_tab_listeners();

        tabs.restore_active_tab();

        assert_eq!(stored(&store).as_deref(), Some("#shift-tab"));
    }

    #[test]
    fn test_restore_without_activator_is_noop() {
        let store = Rc::new(MemorySessionStore::new());
        store.set("activeTab", "#perm-tab").unwrap();

        let tabs = persistence(&store, MemoryTabActivator::unavailable());
        assert_eq!(tabs.restore_active_tab(), None);
        assert!(tabs.activator().activated().is_empty());

        let noop = persistence(&store, NoopTabActivator);
        assert_eq!(noop.restore_active_tab(), None);
    }

    #[test]
    fn test_restore_unknown_tab_is_noop() {
        let store = Rc::new(MemorySessionStore::new());
        store.set("activeTab", "#enigma-tab").unwrap();

        let tabs = persistence(&store, MemoryTabActivator::available());
        assert_eq!(tabs.restore_active_tab(), None);
        assert!(tabs.activator().activated().is_empty());
    }

    #[test]
    fn test_empty_stored_value_uses_default() {
        let store = Rc::new(MemorySessionStore::new());
        store.set("activeTab", "").unwrap();

        let tabs = persistence(&store, MemoryTabActivator::available());
        assert_eq!(tabs.stored_tab(), TabToken::from("#shift-tab"));
        assert_eq!(tabs.restore_active_tab(), Some(TabToken::from("#shift-tab")));
    }

    #[test]
    fn test_trigger_without_target_records_nothing() {
        let store = Rc::new(MemorySessionStore::new());
        let mut strip = MemoryTabStrip::new();
        let bare = strip.push(None);
        let store_dyn: Rc<dyn SessionStore> = store.clone();
        let tabs = TabPersistence::new(
            store_dyn,
            strip,
            MemoryTabActivator::available(),
            &PageConfig::default(),
        );

        assert_eq!(tabs.wire_tab_listeners(), 1);
        bare.fire_shown();
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_configured_key_and_default() {
        let store = Rc::new(MemorySessionStore::new());
        let config = PageConfig {
            storage_key: "cipherTab".to_string(),
            default_tab: TabToken::for_cipher(CipherKind::OneTimePad),
            ..PageConfig::default()
        };
        let store_dyn: Rc<dyn SessionStore> = store.clone();
        let tabs = TabPersistence::new(
            store_dyn,
            all_tabs(),
            MemoryTabActivator::available(),
            &config,
        );

        assert_eq!(tabs.restore_active_tab(), Some(TabToken::from("#otp-tab")));
        tabs.record_active_tab(&TabToken::from("#sub-tab"));
        assert_eq!(store.get("cipherTab").as_deref(), Some("#sub-tab"));
        assert_eq!(stored(&store), None);
    }
}
