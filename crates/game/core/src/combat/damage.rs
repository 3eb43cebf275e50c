//! Damage application and the one-shot depletion signal.

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Token handed out exactly once, the first time a meter reaches zero.
///
/// The meter keeps it in an `Option` and `take`s it on depletion, so the
/// signal is gone after firing no matter how much damage keeps arriving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a depletion signal fires only once; dropping it loses the death"]
pub struct Depleted;

/// What a single `apply_damage` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    /// Health actually removed (may be lower than requested at low HP).
    pub dealt: u32,
    /// Health left after the hit.
    pub remaining: u32,
    /// Present only on the call that first brought the meter to zero.
    pub depleted: Option<Depleted>,
}

impl DamageReport {
    pub fn is_fatal(&self) -> bool {
        self.depleted.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_damage_saturates() {
        assert_eq!(apply_damage(10, 3), 7);
        assert_eq!(apply_damage(2, 5), 0);
        assert_eq!(apply_damage(0, 0), 0);
    }
}
