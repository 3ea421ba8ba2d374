//! Timed events that drive a value along a path
//!
//! An event waits for `delay`, runs for `duration` while easing a shared
//! value along its path, then rests for `rest` before the next loop. After
//! the last loop it stops, disables itself and expires.

use crate::{Attribute, Easing, Entity, EntityState, Path, Shared};

/// Lifecycle of an [`Event`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventState {
    #[default]
    Waiting,
    Running,
    Resting,
    Stopped,
}

/// A looping, eased animation of a shared value
pub struct Event<T: Attribute> {
    entity: EntityState,
    subject: Shared<T>,
    path: Box<dyn Path<T>>,
    state: EventState,
    delay: f32,
    duration: f32,
    rest: f32,
    loops: i32,
    iteration: i32,
    time: f32,
    easing: Easing,
}

impl<T: Attribute> Event<T> {
    /// Loop count that never runs out
    pub const INFINITE: i32 = -1;

    /// A single run of `duration` seconds with no delay or rest
    pub fn new(subject: Shared<T>, path: impl Path<T> + 'static, duration: f32) -> Self {
        Self {
            entity: EntityState::default(),
            subject,
            path: Box::new(path),
            state: EventState::Waiting,
            delay: 0.0,
            duration,
            rest: 0.0,
            loops: 1,
            iteration: 0,
            time: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_rest(mut self, rest: f32) -> Self {
        self.rest = rest;
        self
    }

    /// Number of runs, or [`Event::INFINITE`]
    pub fn with_loops(mut self, loops: i32) -> Self {
        self.loops = loops;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start over from the waiting state
    pub fn reset(&mut self) {
        self.state = EventState::Waiting;
        self.time = 0.0;
        self.iteration = 0;
        self.entity.enabled = true;
        self.entity.lifeline().revive();
    }

    /// Stop where it is
    ///
    /// The event stays alive so it can be reset; only running out of loops
    /// expires it.
    pub fn stop(&mut self) {
        self.state = EventState::Stopped;
        self.entity.enabled = false;
    }

    /// Jump to the end of the path and stop
    pub fn finish(&mut self) {
        let end = self.easing.delta(1.0);
        self.path.set(&mut self.subject.borrow_mut(), end);
        self.stop();
    }

    pub fn event_state(&self) -> EventState {
        self.state
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn rest(&self) -> f32 {
        self.rest
    }

    pub fn loops(&self) -> i32 {
        self.loops
    }

    pub fn iteration(&self) -> i32 {
        self.iteration
    }

    /// Time spent in the current state
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn easing(&self) -> &Easing {
        &self.easing
    }

    pub fn subject(&self) -> &Shared<T> {
        &self.subject
    }

    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }
}

impl<T: Attribute> Entity for Event<T> {
    fn state(&self) -> &EntityState {
        &self.entity
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.entity
    }

    fn on_update(&mut self, dt: f32) {
        self.time += dt;

        if self.state == EventState::Waiting && self.time > self.delay {
            self.time -= self.delay;
            self.state = EventState::Running;
        }

        if self.state == EventState::Running {
            let fx = self.easing.delta(self.progress());

            if self.time > self.duration {
                self.time -= self.duration;
                self.iteration += 1;

                if self.iteration < self.loops || self.loops == Self::INFINITE {
                    self.state = EventState::Resting;
                } else {
                    self.state = EventState::Stopped;
                    self.entity.enabled = false;
                    self.entity.lifeline().expire();
                }
            }

            self.path.set(&mut self.subject.borrow_mut(), fx);
        }

        if self.state == EventState::Resting && self.time > self.rest {
            self.time -= self.rest;
            self.state = EventState::Running;
        }
    }
}
