use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(
    /// Clinical risk tier a measurement falls into.
    RiskTier {
        Optimal => "optimal",
        Borderline => "borderline",
        High => "high",
    }
);

str_enum!(
    /// Which way along the number line risk increases for a biomarker.
    RiskDirection {
        LowerIsBetter => "lower_is_better",
        HigherIsBetter => "higher_is_better",
    }
);

str_enum!(
    /// Movement of a biomarker between two consecutive records.
    Trend {
        Up => "up",
        Down => "down",
        Stable => "stable",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_tier_round_trips_through_str() {
        for tier in [RiskTier::Optimal, RiskTier::Borderline, RiskTier::High] {
            assert_eq!(tier.as_str().parse::<RiskTier>().unwrap(), tier);
        }
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let err = "critical".parse::<RiskTier>().unwrap_err();
        assert!(err.to_string().contains("RiskTier"));
    }

    #[test]
    fn direction_serializes_snake_case() {
        let json = serde_json::to_string(&RiskDirection::HigherIsBetter).unwrap();
        assert_eq!(json, "\"higher_is_better\"");
    }

    #[test]
    fn trend_display_matches_as_str() {
        assert_eq!(Trend::Up.to_string(), "up");
        assert_eq!(Trend::Stable.to_string(), "stable");
    }
}
