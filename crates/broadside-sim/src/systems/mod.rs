//! Systems that operate on the fleet world each tick.
//!
//! Systems are free functions over `World`. Ship state lives behind each
//! entity's `SharedVessel`, so read-only queries are enough to mutate ships.

pub mod cleanup;
pub mod helm;
pub mod sailing;
pub mod snapshot;
