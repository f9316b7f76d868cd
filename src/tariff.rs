//! Tariff tables
//!
//! A [`Tariff`] is the pricing rule table as data. [`Tariff::standard`] holds
//! the built-in rates; other tables can be parsed from YAML:
//!
//! ```yaml
//! base_fee: 5.0
//! distance_bands:
//!   - up_to: 10.0
//!     rate_per_km: 0.5
//!   - up_to: 50.0
//!     rate_per_km: 0.4
//!   - rate_per_km: 0.3
//! weight_bands:
//!   - up_to: 2.0
//!     surcharge: 0.0
//!   - up_to: 5.0
//!     surcharge: 4.5
//!   - up_to: 15.0
//!     surcharge: 8.0
//!   - surcharge: 15.0
//! ```
//!
//! Band bounds are inclusive: a value equal to `up_to` falls in that band.

use crate::error::{Error, Result};
use crate::fee::{check_inputs, FeeCalculator, BASE_FEE};
use crate::tiers::{DistanceTier, WeightTier};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Pricing rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
#[schemars(title = "Tariff", description = "Delivery fee rule table")]
pub struct Tariff {
    /// Fixed fee added to every delivery
    #[serde(default = "default_base_fee")]
    pub base_fee: f64,

    /// Per-km rate bands, ascending
    pub distance_bands: Vec<DistanceBand>,

    /// Flat surcharge bands, ascending
    pub weight_bands: Vec<WeightBand>,
}

fn default_base_fee() -> f64 {
    BASE_FEE
}

/// Distance band: `rate_per_km` applies up to and including `up_to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DistanceBand {
    /// Inclusive upper bound in km; omitted on the last band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<f64>,
    pub rate_per_km: f64,
}

/// Weight band: `surcharge` applies up to and including `up_to`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct WeightBand {
    /// Inclusive upper bound in kg; omitted on the last band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_to: Option<f64>,
    pub surcharge: f64,
}

/// Result of pricing a parcel against a tariff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffQuote {
    /// Index into `distance_bands`
    pub distance_band: usize,
    /// Index into `weight_bands`
    pub weight_band: usize,
    pub base_fee: f64,
    pub distance_fee: f64,
    pub weight_surcharge: f64,
    pub total: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self::standard()
    }
}

impl Tariff {
    /// The built-in rate table
    pub fn standard() -> Self {
        Self {
            base_fee: BASE_FEE,
            distance_bands: DistanceTier::ALL
                .iter()
                .map(|tier| DistanceBand {
                    up_to: tier.upper_bound(),
                    rate_per_km: tier.rate_per_km(),
                })
                .collect(),
            weight_bands: WeightTier::ALL
                .iter()
                .map(|tier| WeightBand {
                    up_to: tier.upper_bound(),
                    surcharge: tier.surcharge(),
                })
                .collect(),
        }
    }

    /// Parse and validate a tariff from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let tariff: Tariff = serde_norway::from_str(yaml)?;
        tariff.validate()?;
        Ok(tariff)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Check the table is well formed.
    pub fn validate(&self) -> Result<()> {
        check_amount("base_fee", self.base_fee)?;

        let distance_bounds: Vec<Option<f64>> =
            self.distance_bands.iter().map(|b| b.up_to).collect();
        check_bounds("distance_bands", &distance_bounds)?;
        for (i, band) in self.distance_bands.iter().enumerate() {
            check_amount(&format!("distance_bands[{}].rate_per_km", i), band.rate_per_km)?;
        }

        let weight_bounds: Vec<Option<f64>> = self.weight_bands.iter().map(|b| b.up_to).collect();
        check_bounds("weight_bands", &weight_bounds)?;
        for (i, band) in self.weight_bands.iter().enumerate() {
            check_amount(&format!("weight_bands[{}].surcharge", i), band.surcharge)?;
        }

        Ok(())
    }

    /// Price a parcel against this table.
    pub fn quote(&self, distance_km: f64, weight_kg: f64) -> Result<TariffQuote> {
        check_inputs(distance_km, weight_kg)?;

        let distance_band = band_index(self.distance_bands.iter().map(|b| b.up_to), distance_km)
            .ok_or_else(|| Error::InvalidTariff("no distance band matched".into()))?;
        let weight_band = band_index(self.weight_bands.iter().map(|b| b.up_to), weight_kg)
            .ok_or_else(|| Error::InvalidTariff("no weight band matched".into()))?;

        let distance_fee = distance_km * self.distance_bands[distance_band].rate_per_km;
        let weight_surcharge = self.weight_bands[weight_band].surcharge;

        Ok(TariffQuote {
            distance_band,
            weight_band,
            base_fee: self.base_fee,
            distance_fee,
            weight_surcharge,
            total: self.base_fee + distance_fee + weight_surcharge,
        })
    }

    /// SHA-256 of the canonical YAML form, hex encoded
    pub fn fingerprint(&self) -> Result<String> {
        let canonical = self.to_yaml()?;
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }

    /// JSON schema describing the tariff YAML format
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(Tariff);
        schema.as_value().clone()
    }
}

impl FeeCalculator for Tariff {
    fn delivery_fee(&self, distance_km: f64, weight_kg: f64) -> Result<f64> {
        self.quote(distance_km, weight_kg).map(|q| q.total)
    }
}

/// First band whose inclusive bound admits `value`; an unbounded band admits everything.
fn band_index(bounds: impl Iterator<Item = Option<f64>>, value: f64) -> Option<usize> {
    bounds
        .enumerate()
        .find(|(_, bound)| bound.is_none_or(|b| value <= b))
        .map(|(i, _)| i)
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidTariff(format!(
            "{} must be a finite, non-negative amount (got {})",
            field, value
        )));
    }
    Ok(())
}

fn check_bounds(field: &str, bounds: &[Option<f64>]) -> Result<()> {
    let Some((last, bounded)) = bounds.split_last() else {
        return Err(Error::InvalidTariff(format!("{} must not be empty", field)));
    };

    if last.is_some() {
        return Err(Error::InvalidTariff(format!(
            "last entry of {} must omit up_to",
            field
        )));
    }

    let mut previous = 0.0;
    for (i, bound) in bounded.iter().enumerate() {
        let Some(bound) = *bound else {
            return Err(Error::InvalidTariff(format!(
                "{}[{}] is missing up_to; only the last band may be open-ended",
                field, i
            )));
        };
        if !bound.is_finite() || bound <= previous {
            return Err(Error::InvalidTariff(format!(
                "{}[{}].up_to must be finite and greater than {} (got {})",
                field, i, previous, bound
            )));
        }
        previous = bound;
    }

    Ok(())
}
