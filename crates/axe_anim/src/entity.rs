//! Frame-driven entities
//!
//! An [`Entity`] is anything updated once per frame that can expire. Entities
//! that animate a value reach it through a [`Shared`] handle, so several
//! entities (a mover, a spring, a watcher) can act on the same value.
//! A [`Lifeline`] lets one entity expire together with another.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared, mutable handle to an animated value
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a [`Shared`] handle
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Shared expiry flag
///
/// Cloning a lifeline yields a handle to the same flag.
#[derive(Clone, Debug, Default)]
pub struct Lifeline(Rc<Cell<bool>>);

impl Lifeline {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.0.get()
    }

    pub fn expire(&self) {
        self.0.set(true);
    }

    /// Clear the flag so the owner can run again
    pub fn revive(&self) {
        self.0.set(false);
    }
}

/// State common to every entity
#[derive(Clone, Debug)]
pub struct EntityState {
    pub enabled: bool,
    pub visible: bool,
    lifeline: Lifeline,
}

impl Default for EntityState {
    fn default() -> Self {
        Self {
            enabled: true,
            visible: true,
            lifeline: Lifeline::new(),
        }
    }
}

impl EntityState {
    pub fn lifeline(&self) -> &Lifeline {
        &self.lifeline
    }
}

/// Something updated once per frame
pub trait Entity {
    fn state(&self) -> &EntityState;

    fn state_mut(&mut self) -> &mut EntityState;

    /// Per-frame work; only called while enabled and not expired
    fn on_update(&mut self, dt: f32);

    /// Called by an owning list when it drops this entity
    fn on_expired(&mut self) {}

    fn update(&mut self, dt: f32) {
        if self.is_enabled() && !self.is_expired() {
            self.on_update(dt);
        }
    }

    fn is_expired(&self) -> bool {
        self.state().lifeline.is_expired()
    }

    fn expire(&mut self) {
        self.state().lifeline.expire();
    }

    fn is_enabled(&self) -> bool {
        self.state().enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.state_mut().enabled = enabled;
    }

    fn is_visible(&self) -> bool {
        self.state().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.state_mut().visible = visible;
    }

    /// Handle to this entity's expiry flag
    fn lifeline(&self) -> Lifeline {
        self.state().lifeline.clone()
    }
}

/// An ordered list of entities, itself an entity
///
/// Expired children are removed after each update, in order, with
/// `on_expired` called on each.
#[derive(Default)]
pub struct EntityList {
    state: EntityState,
    entities: Vec<Box<dyn Entity>>,
}

impl EntityList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: impl Entity + 'static) {
        self.entities.push(Box::new(entity));
    }

    pub fn add_boxed(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    pub fn extend<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = Box<dyn Entity>>,
    {
        self.entities.extend(entities);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Entity> {
        self.entities.iter().map(|e| e.as_ref())
    }

    /// Remove every entity, optionally expiring each first
    pub fn clear(&mut self, invoke_expire: bool) {
        if invoke_expire {
            for entity in &mut self.entities {
                entity.expire();
                entity.on_expired();
            }
        }
        self.entities.clear();
    }

    fn remove_expired(&mut self) {
        self.entities.retain_mut(|entity| {
            if entity.is_expired() {
                entity.on_expired();
                false
            } else {
                true
            }
        });
    }
}

impl Entity for EntityList {
    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    fn on_update(&mut self, dt: f32) {
        for entity in &mut self.entities {
            entity.update(dt);
        }
        self.remove_expired();
    }

    fn expire(&mut self) {
        self.state.lifeline.expire();
        for entity in &mut self.entities {
            entity.expire();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        state: EntityState,
        count: Shared<u32>,
        expire_at: u32,
        expired_calls: Shared<u32>,
    }

    impl Counter {
        fn new(count: &Shared<u32>, expired_calls: &Shared<u32>, expire_at: u32) -> Self {
            Self {
                state: EntityState::default(),
                count: count.clone(),
                expire_at,
                expired_calls: expired_calls.clone(),
            }
        }
    }

    impl Entity for Counter {
        fn state(&self) -> &EntityState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut EntityState {
            &mut self.state
        }

        fn on_update(&mut self, _dt: f32) {
            *self.count.borrow_mut() += 1;
            if *self.count.borrow() >= self.expire_at {
                self.expire();
            }
        }

        fn on_expired(&mut self) {
            *self.expired_calls.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_lifeline_is_shared() {
        let a = Lifeline::new();
        let b = a.clone();
        b.expire();
        assert!(a.is_expired());
        a.revive();
        assert!(!b.is_expired());
    }

    #[test]
    fn test_disabled_entity_does_not_update() {
        let count = shared(0);
        let calls = shared(0);
        let mut c = Counter::new(&count, &calls, 100);
        c.set_enabled(false);
        c.update(0.1);
        assert_eq!(*count.borrow(), 0);
        c.set_enabled(true);
        c.update(0.1);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_list_removes_expired_in_order() {
        let count = shared(0);
        let calls = shared(0);
        let mut list = EntityList::new();
        list.add(Counter::new(&count, &calls, 1));
        list.add(Counter::new(&shared(0), &calls, 100));
        assert_eq!(list.len(), 2);

        list.update(0.016);
        assert_eq!(list.len(), 1);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_expiring_list_expires_children() {
        let calls = shared(0);
        let mut list = EntityList::new();
        let child = Counter::new(&shared(0), &calls, 100);
        let child_life = child.lifeline();
        list.add(child);

        list.expire();
        assert!(list.is_expired());
        assert!(child_life.is_expired());
    }

    #[test]
    fn test_clear_with_expire() {
        let calls = shared(0);
        let mut list = EntityList::new();
        list.add(Counter::new(&shared(0), &calls, 100));
        list.add(Counter::new(&shared(0), &calls, 100));
        list.clear(true);
        assert!(list.is_empty());
        assert_eq!(*calls.borrow(), 2);
    }
}
