//! Click/pair/time counters and the score derived from them.

/// Counters of one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundStats {
    pub total_clicks: u32,
    pub pairs_found: u32,
    pub elapsed_secs: u64,
}

impl RoundStats {
    pub const POINTS_PER_PAIR: i64 = 100;
    pub const PENALTY_PER_CLICK: i64 = 2;
    pub const PENALTY_PER_SECOND: i64 = 1;

    /// `max(0, pairs * 100 - clicks * 2 - elapsed)`.
    pub fn score(&self) -> u32 {
        let raw = i64::from(self.pairs_found) * Self::POINTS_PER_PAIR
            - i64::from(self.total_clicks) * Self::PENALTY_PER_CLICK
            - (self.elapsed_secs as i64).saturating_mul(Self::PENALTY_PER_SECOND);
        raw.clamp(0, i64::from(u32::MAX)) as u32
    }

    /// Elapsed time as `mm:ss`.
    pub fn clock(&self) -> String {
        format_clock(self.elapsed_secs)
    }
}

/// Formats whole seconds as `mm:ss`. Minutes keep counting past 99.
pub fn format_clock(elapsed_secs: u64) -> String {
    format!("{:02}:{:02}", elapsed_secs / 60, elapsed_secs % 60)
}
