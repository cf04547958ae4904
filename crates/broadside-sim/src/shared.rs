//! Thread-safe handle to one ship.
//!
//! Every method takes the ship's lock exactly once, so each operation is
//! atomic with respect to every other operation on the same ship. Use
//! [`SharedVessel::with`] when a read and a write must happen together.
//! Ships never lock each other.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use broadside_core::enums::{FiringDirection, SailAmount};
use broadside_core::state::VesselView;
use broadside_core::types::{Position, Wind};

use crate::vessel::{UpdateOutcome, VesselState};

#[derive(Debug, Clone)]
pub struct SharedVessel {
    inner: Arc<Mutex<VesselState>>,
}

impl SharedVessel {
    pub fn new(vessel: VesselState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(vessel)),
        }
    }

    // Every operation leaves the state consistent, so a panic in another
    // holder does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, VesselState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the ship.
    pub fn with<R>(&self, f: impl FnOnce(&mut VesselState) -> R) -> R {
        let mut vessel = self.lock();
        f(&mut *vessel)
    }

    pub fn update(&self, elapsed: f64, wind: Wind) -> UpdateOutcome {
        self.lock().update(elapsed, wind)
    }

    pub fn fire(&self, direction: FiringDirection) -> bool {
        self.lock().fire(direction)
    }

    pub fn damage(&self, amount: f64) {
        self.lock().damage(amount);
    }

    pub fn add_loot(&self, amount: u64) {
        self.lock().add_loot(amount);
    }

    pub fn set_desired_heading(&self, angle: f64) {
        self.lock().set_desired_heading(angle);
    }

    pub fn set_sail_amount(&self, sail: SailAmount) {
        self.lock().set_sail_amount(sail);
    }

    pub fn id(&self) -> u32 {
        self.lock().id()
    }

    pub fn heading(&self) -> f64 {
        self.lock().heading()
    }

    pub fn desired_heading(&self) -> f64 {
        self.lock().desired_heading()
    }

    pub fn sail_amount(&self) -> SailAmount {
        self.lock().sail_amount()
    }

    pub fn position(&self) -> Position {
        self.lock().position()
    }

    pub fn latitude(&self) -> f64 {
        self.lock().latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.lock().longitude()
    }

    pub fn health(&self) -> f64 {
        self.lock().health()
    }

    pub fn loot(&self) -> u64 {
        self.lock().loot()
    }

    pub fn is_dead(&self) -> bool {
        self.lock().is_dead()
    }

    /// All fields read under a single lock.
    pub fn snapshot(&self) -> VesselView {
        self.lock().view()
    }
}
