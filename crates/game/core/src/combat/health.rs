//! Clamped health meter shared by the player and the monster.

use super::damage::{DamageReport, Depleted, apply_damage};

/// Health in `[0, maximum]` with a depletion signal that fires once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealthMeter {
    current: u32,
    maximum: u32,
    on_depleted: Option<Depleted>,
}

impl HealthMeter {
    /// Creates a full meter. A maximum of zero is raised to one so the
    /// `maximum > 0` invariant always holds.
    pub fn new(maximum: u32) -> Self {
        let maximum = maximum.max(1);
        Self {
            current: maximum,
            maximum,
            on_depleted: Some(Depleted),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Fraction of health left, for bars.
    pub fn ratio(&self) -> f32 {
        self.current as f32 / self.maximum as f32
    }

    /// Subtracts `amount`, clamping at zero.
    ///
    /// The returned report carries the depletion signal only on the call that
    /// first reaches zero; later calls never carry it.
    pub fn apply_damage(&mut self, amount: u32) -> DamageReport {
        let before = self.current;
        self.current = apply_damage(before, amount);

        let depleted = if self.current == 0 {
            self.on_depleted.take()
        } else {
            None
        };

        DamageReport {
            dealt: before - self.current,
            remaining: self.current,
            depleted,
        }
    }
}
