//! Entities that drive shared values: movers, pairs, springs and watchers

use crate::{Attribute, Entity, EntityState, Lifeline, Shared};

/// Expire `state` when the entity it depends on has expired
fn follow_dependent(state: &EntityState, dependent: &Option<Lifeline>) {
    if let Some(d) = dependent {
        if d.is_expired() {
            state.lifeline().expire();
        }
    }
}

/// Moves a value at a constant velocity
pub struct Mover<T: Attribute> {
    state: EntityState,
    pub subject: Shared<T>,
    pub velocity: T,
    dependent: Option<Lifeline>,
}

impl<T: Attribute> Mover<T> {
    pub fn new(subject: Shared<T>, velocity: T) -> Self {
        Self {
            state: EntityState::default(),
            subject,
            velocity,
            dependent: None,
        }
    }

    /// Expire this mover when `dependent` expires
    pub fn with_dependent(mut self, dependent: Lifeline) -> Self {
        self.dependent = Some(dependent);
        self
    }
}

impl<T: Attribute> Entity for Mover<T> {
    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    fn on_update(&mut self, dt: f32) {
        self.subject.borrow_mut().add_scaled(&self.velocity, dt);
        follow_dependent(&self.state, &self.dependent);
    }
}

/// Copies a leader's value into a follower every frame
pub struct Pair<T: Attribute> {
    state: EntityState,
    pub leader: Shared<T>,
    pub follower: Shared<T>,
    dependent: Option<Lifeline>,
}

impl<T: Attribute> Pair<T> {
    pub fn new(leader: Shared<T>, follower: Shared<T>) -> Self {
        Self {
            state: EntityState::default(),
            leader,
            follower,
            dependent: None,
        }
    }

    pub fn with_dependent(mut self, dependent: Lifeline) -> Self {
        self.dependent = Some(dependent);
        self
    }
}

impl<T: Attribute> Entity for Pair<T> {
    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    fn on_update(&mut self, _dt: f32) {
        let value = self.leader.borrow().clone();
        *self.follower.borrow_mut() = value;
        follow_dependent(&self.state, &self.dependent);
    }
}

/// Damped spring pulling a value toward `rest`
///
/// Stiffness and damping are per-component; use a negative stiffness for a
/// restoring force.
pub struct Spring<T: Attribute> {
    state: EntityState,
    pub position: Shared<T>,
    pub rest: T,
    pub velocity: T,
    pub stiffness: T,
    pub damping: T,
}

impl<T: Attribute> Spring<T> {
    pub fn new(position: Shared<T>, rest: T, stiffness: T, damping: T) -> Self {
        Self {
            state: EntityState::default(),
            position,
            rest,
            velocity: T::zero(),
            stiffness,
            damping,
        }
    }

    pub fn with_velocity(mut self, velocity: T) -> Self {
        self.velocity = velocity;
        self
    }
}

impl<T: Attribute> Entity for Spring<T> {
    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    fn on_update(&mut self, dt: f32) {
        let mut position = self.position.borrow_mut();

        // stiffness * (position - rest) - damping * velocity
        let mut force = (*position).clone();
        force.add_scaled(&self.rest, -1.0);
        force.mul_assign_by(&self.stiffness);
        let mut drag = self.velocity.clone();
        drag.mul_assign_by(&self.damping);
        force.add_scaled(&drag, -1.0);

        self.velocity.add_scaled(&force, dt);
        position.add_scaled(&self.velocity, dt);
    }
}

/// Counts the frames on which a shared value changed
pub struct Watcher<T: Attribute> {
    state: EntityState,
    pub subject: Shared<T>,
    previous: T,
    current: T,
    changes: u32,
}

impl<T: Attribute> Watcher<T> {
    pub fn new(subject: Shared<T>) -> Self {
        let current = subject.borrow().clone();
        Self {
            state: EntityState::default(),
            subject,
            previous: current.clone(),
            current,
            changes: 0,
        }
    }

    pub fn has_changed(&self) -> bool {
        self.changes > 0
    }

    /// Report whether anything changed, then reset the count
    pub fn has_changed_and_reset(&mut self) -> bool {
        let changed = self.has_changed();
        self.reset();
        changed
    }

    pub fn reset(&mut self) {
        self.changes = 0;
    }

    pub fn changes(&self) -> u32 {
        self.changes
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn previous(&self) -> &T {
        &self.previous
    }
}

impl<T: Attribute> Entity for Watcher<T> {
    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    fn on_update(&mut self, _dt: f32) {
        self.previous = std::mem::replace(&mut self.current, self.subject.borrow().clone());
        if self.previous != self.current {
            self.changes += 1;
        }
    }
}
