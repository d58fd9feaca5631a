//! Member rank.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown rank name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid rank: {0} (expected ROOKIE, ELITE, or MASTER)")]
pub struct RankError(pub String);

/// Member rank shown on the admin roster.
///
/// Every member starts as a [`Rank::Rookie`]; nothing in the site promotes
/// members yet, but persisted records may carry any of the three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    #[default]
    Rookie,
    Elite,
    Master,
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rookie => write!(f, "ROOKIE"),
            Self::Elite => write!(f, "ELITE"),
            Self::Master => write!(f, "MASTER"),
        }
    }
}

impl std::str::FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROOKIE" => Ok(Self::Rookie),
            "ELITE" => Ok(Self::Elite),
            "MASTER" => Ok(Self::Master),
            _ => Err(RankError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_rookie() {
        assert_eq!(Rank::default(), Rank::Rookie);
    }

    #[test]
    fn test_display_and_parse_agree() {
        for rank in [Rank::Rookie, Rank::Elite, Rank::Master] {
            assert_eq!(rank.to_string().parse::<Rank>().unwrap(), rank);
        }
        assert!("captain".parse::<Rank>().is_err());
    }

    #[test]
    fn test_serde_uses_screaming_case() {
        assert_eq!(serde_json::to_string(&Rank::Elite).unwrap(), "\"ELITE\"");
        assert!(serde_json::from_str::<Rank>("\"rookie\"").is_err());
    }
}
