//! ECS components for hecs entities.

use serde::{Deserialize, Serialize};

/// Stable identity of a ship entity, shared with commands and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShipId(pub u32);
