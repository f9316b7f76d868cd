//! Delivery fee calculation
//!
//! `fee = BASE_FEE + distance_km × rate(distance tier) + surcharge(weight tier)`
//!
//! Both inputs must be strictly positive. The check runs before any tier is
//! looked at, so an invalid call never produces a partial result.

use crate::error::{Error, Result};
use crate::tiers::{DistanceTier, WeightTier};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed base fee added to every delivery
pub const BASE_FEE: f64 = 5.00;

/// Anything that can price a parcel.
///
/// Implemented by [`StandardRates`] and [`crate::Tariff`]; test doubles
/// implement it to stand in for the real calculator.
pub trait FeeCalculator {
    fn delivery_fee(&self, distance_km: f64, weight_kg: f64) -> Result<f64>;
}

/// The fixed rate table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardRates;

impl FeeCalculator for StandardRates {
    fn delivery_fee(&self, distance_km: f64, weight_kg: f64) -> Result<f64> {
        calculate_delivery_fee(distance_km, weight_kg)
    }
}

/// Itemized fee for a single parcel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeeBreakdown {
    pub distance_km: f64,
    pub weight_kg: f64,
    pub distance_tier: DistanceTier,
    pub weight_tier: WeightTier,
    pub base_fee: f64,
    /// `distance_km × rate_per_km`
    pub distance_fee: f64,
    pub weight_surcharge: f64,
    pub total: f64,
}

/// Compute the delivery fee for a parcel.
///
/// ```
/// use delivery_fee::calculate_delivery_fee;
///
/// assert_eq!(calculate_delivery_fee(5.0, 1.0).unwrap(), 7.50);
/// assert!(calculate_delivery_fee(0.0, 1.0).is_err());
/// ```
pub fn calculate_delivery_fee(distance_km: f64, weight_kg: f64) -> Result<f64> {
    quote(distance_km, weight_kg).map(|breakdown| breakdown.total)
}

/// Compute the delivery fee and return every component.
pub fn quote(distance_km: f64, weight_kg: f64) -> Result<FeeBreakdown> {
    check_inputs(distance_km, weight_kg)?;

    let distance_tier = DistanceTier::classify(distance_km);
    let weight_tier = WeightTier::classify(weight_kg);

    let distance_fee = distance_km * distance_tier.rate_per_km();
    let weight_surcharge = weight_tier.surcharge();

    Ok(FeeBreakdown {
        distance_km,
        weight_kg,
        distance_tier,
        weight_tier,
        base_fee: BASE_FEE,
        distance_fee,
        weight_surcharge,
        total: BASE_FEE + distance_fee + weight_surcharge,
    })
}

/// Reject anything that is not a strictly positive, finite number.
pub(crate) fn check_inputs(distance_km: f64, weight_kg: f64) -> Result<()> {
    if !is_positive(distance_km) || !is_positive(weight_kg) {
        tracing::debug!(distance_km, weight_kg, "rejecting delivery fee request");
        return Err(Error::InvalidInput {
            distance_km,
            weight_kg,
        });
    }
    Ok(())
}

// NaN fails `> 0.0`, so only infinities need the extra check
fn is_positive(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}
