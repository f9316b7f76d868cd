//! Shared fixtures: assertion helpers and hand-made mutants of the fee function
//!
//! Each mutant is a copy of the fee function with exactly one injected
//! change. They implement `FeeCalculator` so the same test cases can run
//! against the real calculator and the mutants.

#![allow(dead_code)]

use delivery_fee::{Error, FeeCalculator, Result};

pub const DELTA: f64 = 0.001;
pub const NOMINAL_DISTANCE: f64 = 5.0;
pub const NOMINAL_WEIGHT: f64 = 1.0;

/// Assert a fee within `DELTA` of the expected amount
#[track_caller]
pub fn assert_fee(actual: Result<f64>, expected: f64, case: &str) {
    match actual {
        Ok(fee) => assert!(
            (fee - expected).abs() < DELTA,
            "{}: expected {:.3}, got {:.3}",
            case,
            expected,
            fee
        ),
        Err(e) => panic!("{}: expected {:.3}, got error: {}", case, expected, e),
    }
}

/// Assert the call was rejected as invalid input
#[track_caller]
pub fn assert_rejected(actual: Result<f64>, case: &str) {
    match actual {
        Err(e) => assert!(e.is_invalid_input(), "{}: wrong error kind: {}", case, e),
        Ok(fee) => panic!("{}: expected rejection, got fee {:.3}", case, fee),
    }
}

/// Expected outcome of a test case
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expected {
    Fee(f64),
    Rejected,
}

/// One input with its expected outcome
#[derive(Debug, Clone, Copy)]
pub struct FeeCase {
    pub name: &'static str,
    pub distance_km: f64,
    pub weight_kg: f64,
    pub expected: Expected,
}

impl FeeCase {
    pub const fn fee(name: &'static str, distance_km: f64, weight_kg: f64, fee: f64) -> Self {
        Self {
            name,
            distance_km,
            weight_kg,
            expected: Expected::Fee(fee),
        }
    }

    pub const fn rejected(name: &'static str, distance_km: f64, weight_kg: f64) -> Self {
        Self {
            name,
            distance_km,
            weight_kg,
            expected: Expected::Rejected,
        }
    }

    /// True when `calc` produces the expected outcome for this case
    pub fn passes(&self, calc: &dyn FeeCalculator) -> bool {
        match (self.expected, calc.delivery_fee(self.distance_km, self.weight_kg)) {
            (Expected::Fee(expected), Ok(fee)) => (fee - expected).abs() < DELTA,
            (Expected::Rejected, Err(e)) => e.is_invalid_input(),
            _ => false,
        }
    }
}

/// Result of running a suite against a mutant
#[derive(Debug, Clone, PartialEq)]
pub enum MutantStatus {
    /// Every case passed
    Survived,
    /// Names of the cases that failed
    Killed(Vec<&'static str>),
}

pub fn run_suite(calc: &dyn FeeCalculator, suite: &[FeeCase]) -> MutantStatus {
    let failed: Vec<&'static str> = suite
        .iter()
        .filter(|case| !case.passes(calc))
        .map(|case| case.name)
        .collect();
    if failed.is_empty() {
        MutantStatus::Survived
    } else {
        MutantStatus::Killed(failed)
    }
}

fn reject(distance_km: f64, weight_kg: f64) -> Error {
    Error::InvalidInput {
        distance_km,
        weight_kg,
    }
}

fn distance_fee(distance_km: f64) -> f64 {
    if distance_km <= 10.0 {
        distance_km * 0.50
    } else if distance_km <= 50.0 {
        distance_km * 0.40
    } else {
        distance_km * 0.30
    }
}

fn weight_surcharge(weight_kg: f64) -> f64 {
    if weight_kg <= 2.0 {
        0.00
    } else if weight_kg <= 5.0 {
        4.50
    } else if weight_kg <= 15.0 {
        8.00
    } else {
        15.00
    }
}

/// Equivalent mutant: the light-tier surcharge `0.0` becomes `0.0 * weight_kg`.
///
/// Zero times any positive weight is zero, so no test can tell it apart
/// from the original.
pub struct EquivalentMutant;

impl FeeCalculator for EquivalentMutant {
    fn delivery_fee(&self, distance_km: f64, weight_kg: f64) -> Result<f64> {
        if distance_km <= 0.0 || weight_kg <= 0.0 {
            return Err(reject(distance_km, weight_kg));
        }

        let weight_fee = if weight_kg <= 2.0 {
            0.0 * weight_kg // mutated
        } else if weight_kg <= 5.0 {
            4.50
        } else if weight_kg <= 15.0 {
            8.00
        } else {
            15.00
        };

        Ok(5.00 + distance_fee(distance_km) + weight_fee)
    }
}

/// Relational-operator mutant: `distance_km <= 10` becomes `distance_km < 10`.
///
/// Differs only at exactly 10 km, where it charges 0.40/km instead of
/// 0.50/km (9.00 instead of 10.00 for a 1 kg parcel).
pub struct BoundaryMutant;

impl FeeCalculator for BoundaryMutant {
    fn delivery_fee(&self, distance_km: f64, weight_kg: f64) -> Result<f64> {
        if distance_km <= 0.0 || weight_kg <= 0.0 {
            return Err(reject(distance_km, weight_kg));
        }

        let distance_fee = if distance_km < 10.0 {
            // mutated
            distance_km * 0.50
        } else if distance_km <= 50.0 {
            distance_km * 0.40
        } else {
            distance_km * 0.30
        };

        Ok(5.00 + distance_fee + weight_surcharge(weight_kg))
    }
}

/// Guard mutant: `distance_km <= 0` becomes `distance_km < 0`.
///
/// Accepts a zero distance and prices it at the base fee plus surcharge.
/// Only a case with exactly 0 km can detect it.
pub struct GuardMutant;

impl FeeCalculator for GuardMutant {
    fn delivery_fee(&self, distance_km: f64, weight_kg: f64) -> Result<f64> {
        if distance_km < 0.0 || weight_kg <= 0.0 {
            // mutated
            return Err(reject(distance_km, weight_kg));
        }

        Ok(5.00 + distance_fee(distance_km) + weight_surcharge(weight_kg))
    }
}
