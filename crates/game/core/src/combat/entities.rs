//! The two combatants of a round.

use core::time::Duration;

use super::damage::DamageReport;
use super::health::HealthMeter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    health: HealthMeter,
}

impl Player {
    pub fn new(max_health: u32) -> Self {
        Self {
            health: HealthMeter::new(max_health),
        }
    }

    pub fn health(&self) -> &HealthMeter {
        &self.health
    }

    pub fn apply_damage(&mut self, amount: u32) -> DamageReport {
        self.health.apply_damage(amount)
    }
}

/// Attack timer of the monster.
///
/// Accumulates real elapsed time; once the total strictly exceeds the period
/// the attack fires and the timer restarts from zero. Overshoot is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackCharge {
    accumulated: Duration,
    period: Duration,
    damage: u32,
}

impl AttackCharge {
    pub fn new(period: Duration, damage: u32) -> Self {
        Self {
            accumulated: Duration::ZERO,
            period,
            damage,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Adds `elapsed` and returns the attack damage when the charge completes.
    pub fn advance(&mut self, elapsed: Duration) -> Option<u32> {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated > self.period {
            self.accumulated = Duration::ZERO;
            Some(self.damage)
        } else {
            None
        }
    }

    /// Charge fraction in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.period.is_zero() {
            return 1.0;
        }
        (self.accumulated.as_secs_f32() / self.period.as_secs_f32()).min(1.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    name: String,
    health: HealthMeter,
    charge: AttackCharge,
    active: bool,
}

impl Monster {
    pub fn new(name: impl Into<String>, max_health: u32, charge: AttackCharge) -> Self {
        Self {
            name: name.into(),
            health: HealthMeter::new(max_health),
            charge,
            active: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> &HealthMeter {
        &self.health
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stops the attack timer for good.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Takes a hit. The monster deactivates on the hit that depletes it.
    pub fn apply_damage(&mut self, amount: u32) -> DamageReport {
        let report = self.health.apply_damage(amount);
        if report.is_fatal() {
            self.deactivate();
        }
        report
    }

    /// Advances the attack timer by one frame.
    ///
    /// Returns the damage to deal to the player when an attack fires. An
    /// inactive monster never charges.
    pub fn charge(&mut self, elapsed: Duration) -> Option<u32> {
        if !self.active {
            return None;
        }
        self.charge.advance(elapsed)
    }

    pub fn charge_progress(&self) -> f32 {
        if self.active { self.charge.progress() } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster(max: u32) -> Monster {
        Monster::new("EVIL Monster", max, AttackCharge::new(Duration::from_secs(5), 2))
    }

    #[test]
    fn charge_fires_only_after_period_is_exceeded() {
        let mut monster = monster(4);
        assert_eq!(monster.charge(Duration::from_secs(5)), None);
        assert_eq!(monster.charge_progress(), 1.0);

        assert_eq!(monster.charge(Duration::from_millis(16)), Some(2));
        assert_eq!(monster.charge_progress(), 0.0);
    }

    #[test]
    fn overshoot_is_discarded() {
        let mut charge = AttackCharge::new(Duration::from_secs(5), 2);
        assert_eq!(charge.advance(Duration::from_secs(9)), Some(2));
        assert_eq!(charge.accumulated(), Duration::ZERO);
        assert_eq!(charge.advance(Duration::from_secs(4)), None);
    }

    #[test]
    fn monster_death_fires_once_and_stops_attacks() {
        let mut monster = monster(4);
        assert!(!monster.apply_damage(2).is_fatal());
        assert!(!monster.apply_damage(1).is_fatal());
        assert!(monster.apply_damage(1).is_fatal());
        assert!(!monster.apply_damage(5).is_fatal());

        assert!(!monster.is_active());
        assert_eq!(monster.charge(Duration::from_secs(60)), None);
    }

    #[test]
    fn player_takes_damage() {
        let mut player = Player::new(10);
        let report = player.apply_damage(2);
        assert_eq!(report.remaining, 8);
        assert_eq!(player.health().current(), 8);
    }
}
