use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative bucket derived from the total score only.
///
/// Ordered `C < B < A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    C,
    B,
    A,
}

pub const TIER_A_MIN: i32 = 75;
pub const TIER_B_MIN: i32 = 55;

pub fn choose_tier(total: i32) -> Tier {
    if total >= TIER_A_MIN {
        Tier::A
    } else if total >= TIER_B_MIN {
        Tier::B
    } else {
        Tier::C
    }
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(choose_tier(100), Tier::A);
        assert_eq!(choose_tier(75), Tier::A);
        assert_eq!(choose_tier(74), Tier::B);
        assert_eq!(choose_tier(55), Tier::B);
        assert_eq!(choose_tier(54), Tier::C);
        assert_eq!(choose_tier(0), Tier::C);
    }

    #[test]
    fn test_monotonic_in_total() {
        let tiers: Vec<Tier> = (0..=100).map(choose_tier).collect();
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Tier::B).unwrap(), "\"B\"");
    }
}
