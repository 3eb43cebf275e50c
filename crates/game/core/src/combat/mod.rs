//! Combat entities and damage bookkeeping.
//!
//! - **Health**: clamped meters with a one-shot depletion signal
//! - **Entities**: the player and the monster with its attack timer
//!
//! Everything here is synchronous; the runtime decides when the monster's
//! timer advances.

pub mod damage;
pub mod entities;
pub mod health;

pub use damage::{DamageReport, Depleted, apply_damage};
pub use entities::{AttackCharge, Monster, Player};
pub use health::HealthMeter;
