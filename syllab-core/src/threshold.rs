//! Break aggressiveness policy
//!
//! A threshold is the minimum odd score a position must reach before a
//! break is emitted there. Lower values produce more breaks.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum score required to accept a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "ThresholdRepr", into = "ThresholdRepr")]
pub enum Threshold {
    /// Accept every odd score (cutoff 1)
    Most,
    /// Accept odd scores of 3 and above
    #[default]
    Average,
    /// Accept only strongly marked boundaries (cutoff 5)
    Least,
    /// Explicit numeric cutoff
    Custom(u8),
}

impl Threshold {
    /// Numeric cutoff compared against merged scores.
    #[inline]
    pub const fn value(self) -> u8 {
        match self {
            Threshold::Most => 1,
            Threshold::Average => 3,
            Threshold::Least => 5,
            Threshold::Custom(value) => value,
        }
    }

    /// Whether a merged score qualifies as a break under this threshold.
    ///
    /// Even scores never qualify; they only exist to suppress weaker odd
    /// scores during maximization.
    #[inline]
    pub const fn accepts(self, score: u8) -> bool {
        score % 2 == 1 && score >= self.value()
    }

    /// Named tiers, most aggressive first.
    pub const TIERS: [Threshold; 3] = [Threshold::Most, Threshold::Average, Threshold::Least];
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Most => f.write_str("most"),
            Threshold::Average => f.write_str("average"),
            Threshold::Least => f.write_str("least"),
            Threshold::Custom(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Threshold {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "most" => Ok(Threshold::Most),
            "average" => Ok(Threshold::Average),
            "least" => Ok(Threshold::Least),
            other => other
                .parse::<u8>()
                .map(Threshold::Custom)
                .map_err(|_| CoreError::InvalidThreshold(trimmed.to_string())),
        }
    }
}

/// Wire form: tier names as strings, explicit cutoffs as integers.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ThresholdRepr {
    Name(String),
    Value(u8),
}

impl TryFrom<ThresholdRepr> for Threshold {
    type Error = CoreError;

    fn try_from(repr: ThresholdRepr) -> Result<Self, Self::Error> {
        match repr {
            ThresholdRepr::Name(name) => name.parse(),
            ThresholdRepr::Value(value) => Ok(Threshold::Custom(value)),
        }
    }
}

impl From<Threshold> for ThresholdRepr {
    fn from(threshold: Threshold) -> Self {
        match threshold {
            Threshold::Custom(value) => ThresholdRepr::Value(value),
            named => ThresholdRepr::Name(named.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_values() {
        assert_eq!(Threshold::Most.value(), 1);
        assert_eq!(Threshold::Average.value(), 3);
        assert_eq!(Threshold::Least.value(), 5);
        assert_eq!(Threshold::Custom(7).value(), 7);
        assert_eq!(Threshold::default(), Threshold::Average);
    }

    #[test]
    fn test_accepts_only_odd_scores() {
        assert!(Threshold::Most.accepts(1));
        assert!(!Threshold::Most.accepts(2));
        assert!(Threshold::Most.accepts(5));
        assert!(!Threshold::Average.accepts(1));
        assert!(!Threshold::Average.accepts(4));
        assert!(Threshold::Average.accepts(3));
        assert!(!Threshold::Least.accepts(3));
        assert!(!Threshold::Least.accepts(6));
        assert!(Threshold::Least.accepts(7));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("most".parse::<Threshold>().unwrap(), Threshold::Most);
        assert_eq!(" Average ".parse::<Threshold>().unwrap(), Threshold::Average);
        assert_eq!("LEAST".parse::<Threshold>().unwrap(), Threshold::Least);
        assert_eq!("9".parse::<Threshold>().unwrap(), Threshold::Custom(9));
        assert!(matches!(
            "often".parse::<Threshold>(),
            Err(CoreError::InvalidThreshold(raw)) if raw == "often"
        ));
        assert!("300".parse::<Threshold>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for threshold in Threshold::TIERS
            .into_iter()
            .chain([Threshold::Custom(0), Threshold::Custom(11)])
        {
            assert_eq!(threshold.to_string().parse::<Threshold>().unwrap(), threshold);
        }
    }

    #[test]
    fn test_serde_representation() {
        assert_eq!(serde_json::to_string(&Threshold::Least).unwrap(), "\"least\"");
        assert_eq!(serde_json::to_string(&Threshold::Custom(7)).unwrap(), "7");
        let parsed: Threshold = serde_json::from_str("\"most\"").unwrap();
        assert_eq!(parsed, Threshold::Most);
        let parsed: Threshold = serde_json::from_str("9").unwrap();
        assert_eq!(parsed, Threshold::Custom(9));
        assert!(serde_json::from_str::<Threshold>("\"never\"").is_err());
    }
}
