//! XP and Forge Point rewards for completed levels

/// Points granted for finishing a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reward {
    pub xp: u64,
    pub forge_points: u64,
}

impl Reward {
    /// XP per level number
    pub const XP_PER_LEVEL: u64 = 2;

    /// XP needed for one Forge Point
    pub const XP_PER_FORGE_POINT: u64 = 10;

    /// Reward for completing `level_number` in `time_spent_secs`.
    ///
    /// `xp = floor(100 / secs * 10) + level * 2`, `forge_points = floor(xp / 10)`.
    /// The caller guarantees `time_spent_secs` is finite and positive; the
    /// float-to-int cast saturates for very short times.
    pub fn for_completion(level_number: u32, time_spent_secs: f64) -> Self {
        let speed_bonus = (100.0 / time_spent_secs * 10.0).floor() as u64;
        let xp = speed_bonus.saturating_add(u64::from(level_number) * Self::XP_PER_LEVEL);

        Self {
            xp,
            forge_points: xp / Self::XP_PER_FORGE_POINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_reward() {
        // Level 1 in 10 seconds: 100 speed bonus + 2 level XP
        let reward = Reward::for_completion(1, 10.0);
        assert_eq!(reward.xp, 102);
        assert_eq!(reward.forge_points, 10);
    }

    #[test]
    fn test_speed_bonus_is_floored() {
        // 1000 / 3 = 333.33.. -> 333, plus 40 for level 20
        let reward = Reward::for_completion(20, 3.0);
        assert_eq!(reward.xp, 373);
        assert_eq!(reward.forge_points, 37);

        // Slow play still earns level XP
        let reward = Reward::for_completion(50, 5000.0);
        assert_eq!(reward.xp, 100);
    }

    #[test]
    fn test_tiny_duration_saturates() {
        let reward = Reward::for_completion(100, f64::MIN_POSITIVE);
        assert_eq!(reward.xp, u64::MAX);
    }
}
