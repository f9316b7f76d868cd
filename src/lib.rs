// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
#![allow(clippy::missing_errors_doc)]

//! # Delivery Fee
//!
//! Parcel delivery pricing from distance and weight.
//!
//! ## Pricing Rules
//!
//! ```text
//! fee = 5.00 + distance_km × rate + surcharge
//!
//!   distance_km ≤ 10        → 0.50/km        weight_kg ≤ 2        → 0.00
//!   10 < distance_km ≤ 50   → 0.40/km        2 < weight_kg ≤ 5    → 4.50
//!   distance_km > 50        → 0.30/km        5 < weight_kg ≤ 15   → 8.00
//!                                            weight_kg > 15       → 15.00
//! ```
//!
//! A value sitting exactly on a threshold is charged at the lower tier.
//! Distance and weight must both be strictly positive; anything else is
//! rejected with [`Error::InvalidInput`] before any pricing happens.
//!
//! ## Quick Start
//!
//! ```rust
//! use delivery_fee::{calculate_delivery_fee, quote, WeightTier};
//!
//! let fee = calculate_delivery_fee(25.0, 3.0)?;
//! assert!((fee - 19.50).abs() < 1e-9);
//!
//! let breakdown = quote(75.0, 20.0)?;
//! assert_eq!(breakdown.weight_tier, WeightTier::VeryHeavy);
//!
//! assert!(calculate_delivery_fee(0.0, 1.0).is_err());
//! # Ok::<(), delivery_fee::Error>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`fee`] | The fee function, [`FeeBreakdown`], the [`FeeCalculator`] trait |
//! | [`tiers`] | Distance and weight tiers with their thresholds |
//! | [`tariff`] | The rule table as data, loadable from YAML |
//! | [`conditions`] | Conditions, decisions and effects for test design |

pub mod conditions;
pub mod error;
pub mod fee;
pub mod tariff;
pub mod tiers;

// Re-exports
pub use conditions::{
    effects, independence_pairs, Condition, ConditionVector, Decision, Effect, IndependencePair,
};
pub use error::{Error, Result};
pub use fee::{calculate_delivery_fee, quote, FeeBreakdown, FeeCalculator, StandardRates, BASE_FEE};
pub use tariff::{DistanceBand, Tariff, TariffQuote, WeightBand};
pub use tiers::{DistanceTier, WeightTier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
