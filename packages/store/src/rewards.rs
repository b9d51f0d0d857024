//! Rewards ledger: level progress and per-row lock state for a points balance.

use crate::catalog::rewards;
use crate::config::RewardRules;
use crate::models::Reward;

#[derive(Clone, Debug, PartialEq)]
pub struct RewardRow {
    pub reward: &'static Reward,
    pub locked: bool,
}

/// Read-only view of the reward catalog for one points balance.
#[derive(Clone, Debug, PartialEq)]
pub struct Ledger {
    pub points: u32,
    /// 0.0 to 100.0.
    pub progress_percent: f64,
    pub rows: Vec<RewardRow>,
}

impl Ledger {
    pub fn new(points: u32, rules: &RewardRules) -> Self {
        let rows = rewards()
            .iter()
            .map(|reward| RewardRow {
                reward,
                locked: is_locked(points, reward),
            })
            .collect();
        Self {
            points,
            progress_percent: progress_percent(points, rules.level_band_max),
            rows,
        }
    }

    pub fn unlocked(&self) -> impl Iterator<Item = &RewardRow> {
        self.rows.iter().filter(|r| !r.locked)
    }
}

pub fn is_locked(points: u32, reward: &Reward) -> bool {
    points < reward.cost
}

/// `min(points / band_max * 100, 100)`. A zero band is always full.
pub fn progress_percent(points: u32, band_max: u32) -> f64 {
    if band_max == 0 {
        return 100.0;
    }
    (f64::from(points) / f64::from(band_max) * 100.0).min(100.0)
}

/// Format with thousands separators, e.g. `1,250`.
pub fn format_points(points: u32) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_state_at_starting_balance() {
        let ledger = Ledger::new(1250, &RewardRules::default());
        let locks: Vec<(u32, bool)> = ledger.rows.iter().map(|r| (r.reward.cost, r.locked)).collect();
        assert_eq!(
            locks,
            vec![(500, false), (1500, true), (5000, true), (99999, true)]
        );
        assert_eq!(ledger.unlocked().count(), 1);
    }

    #[test]
    fn reaching_cost_unlocks() {
        let ledger = Ledger::new(1500, &RewardRules::default());
        assert!(!ledger.rows[1].locked);
        let ledger = Ledger::new(1499, &RewardRules::default());
        assert!(ledger.rows[1].locked);
    }

    #[test]
    fn progress_is_capped() {
        assert_eq!(progress_percent(0, 5000), 0.0);
        assert_eq!(progress_percent(1250, 5000), 25.0);
        assert_eq!(progress_percent(5000, 5000), 100.0);
        assert_eq!(progress_percent(12000, 5000), 100.0);
        assert_eq!(progress_percent(10, 0), 100.0);
    }

    #[test]
    fn points_get_separators() {
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(500), "500");
        assert_eq!(format_points(1250), "1,250");
        assert_eq!(format_points(99999), "99,999");
        assert_eq!(format_points(1234567), "1,234,567");
    }
}
