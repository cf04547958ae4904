//! Core types and definitions for the BROADSIDE sailing simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! sail and gun enumerations, wind, tuning, helm commands, events,
//! and fleet snapshots. It has no dependency on the simulation runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod tuning;
pub mod types;
