//! Distance and weight tiers
//!
//! Every threshold is inclusive on the lower tier: a parcel sitting exactly
//! on a threshold is charged at the cheaper tier.
//!
//! | Distance | Rate/km | | Weight | Surcharge |
//! |---|---|---|---|---|
//! | d ≤ 10 | 0.50 | | w ≤ 2 | 0.00 |
//! | 10 < d ≤ 50 | 0.40 | | 2 < w ≤ 5 | 4.50 |
//! | d > 50 | 0.30 | | 5 < w ≤ 15 | 8.00 |
//! | | | | w > 15 | 15.00 |

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the short-distance tier (km, inclusive)
pub const DISTANCE_THRESHOLD_SHORT: f64 = 10.0;
/// Upper bound of the medium-distance tier (km, inclusive)
pub const DISTANCE_THRESHOLD_MEDIUM: f64 = 50.0;

pub const RATE_SHORT_DISTANCE: f64 = 0.50;
pub const RATE_MEDIUM_DISTANCE: f64 = 0.40;
pub const RATE_LONG_DISTANCE: f64 = 0.30;

/// Upper bound of the light tier (kg, inclusive)
pub const WEIGHT_THRESHOLD_LIGHT: f64 = 2.0;
/// Upper bound of the medium tier (kg, inclusive)
pub const WEIGHT_THRESHOLD_MEDIUM: f64 = 5.0;
/// Upper bound of the heavy tier (kg, inclusive)
pub const WEIGHT_THRESHOLD_HEAVY: f64 = 15.0;

pub const WEIGHT_FEE_LIGHT: f64 = 0.00;
pub const WEIGHT_FEE_MEDIUM: f64 = 4.50;
pub const WEIGHT_FEE_HEAVY: f64 = 8.00;
pub const WEIGHT_FEE_VERY_HEAVY: f64 = 15.00;

/// Distance rate tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DistanceTier {
    /// d ≤ 10 km
    Short,
    /// 10 < d ≤ 50 km
    Medium,
    /// d > 50 km
    Long,
}

impl DistanceTier {
    pub const ALL: [DistanceTier; 3] = [Self::Short, Self::Medium, Self::Long];

    /// Classify a distance. The caller is responsible for rejecting
    /// non-positive distances first.
    pub fn classify(distance_km: f64) -> Self {
        if distance_km <= DISTANCE_THRESHOLD_SHORT {
            Self::Short
        } else if distance_km <= DISTANCE_THRESHOLD_MEDIUM {
            Self::Medium
        } else {
            Self::Long
        }
    }

    pub const fn rate_per_km(self) -> f64 {
        match self {
            Self::Short => RATE_SHORT_DISTANCE,
            Self::Medium => RATE_MEDIUM_DISTANCE,
            Self::Long => RATE_LONG_DISTANCE,
        }
    }

    /// Inclusive upper bound, `None` for the open-ended tier
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            Self::Short => Some(DISTANCE_THRESHOLD_SHORT),
            Self::Medium => Some(DISTANCE_THRESHOLD_MEDIUM),
            Self::Long => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for DistanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weight surcharge tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeightTier {
    /// w ≤ 2 kg
    Light,
    /// 2 < w ≤ 5 kg
    Medium,
    /// 5 < w ≤ 15 kg
    Heavy,
    /// w > 15 kg
    VeryHeavy,
}

impl WeightTier {
    pub const ALL: [WeightTier; 4] = [Self::Light, Self::Medium, Self::Heavy, Self::VeryHeavy];

    /// Classify a weight. The caller is responsible for rejecting
    /// non-positive weights first.
    pub fn classify(weight_kg: f64) -> Self {
        if weight_kg <= WEIGHT_THRESHOLD_LIGHT {
            Self::Light
        } else if weight_kg <= WEIGHT_THRESHOLD_MEDIUM {
            Self::Medium
        } else if weight_kg <= WEIGHT_THRESHOLD_HEAVY {
            Self::Heavy
        } else {
            Self::VeryHeavy
        }
    }

    pub const fn surcharge(self) -> f64 {
        match self {
            Self::Light => WEIGHT_FEE_LIGHT,
            Self::Medium => WEIGHT_FEE_MEDIUM,
            Self::Heavy => WEIGHT_FEE_HEAVY,
            Self::VeryHeavy => WEIGHT_FEE_VERY_HEAVY,
        }
    }

    /// Inclusive upper bound, `None` for the open-ended tier
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            Self::Light => Some(WEIGHT_THRESHOLD_LIGHT),
            Self::Medium => Some(WEIGHT_THRESHOLD_MEDIUM),
            Self::Heavy => Some(WEIGHT_THRESHOLD_HEAVY),
            Self::VeryHeavy => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
            Self::VeryHeavy => "very_heavy",
        }
    }
}

impl fmt::Display for WeightTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
