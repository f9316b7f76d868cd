//! Conditions, decisions and effects of the fee function
//!
//! The fee function is a chain of six decisions over seven atomic
//! conditions:
//!
//! ```text
//! D1: C1 || C2          C1: d <= 0     C2: w <= 0
//! D2: C3                C3: d <= 10
//! D3: C4                C4: d <= 50
//! D4: C5                C5: w <= 2
//! D5: C6                C6: w <= 5
//! D6: C7                C7: w <= 15
//! ```
//!
//! Effects are the observable outcomes: a rejection (E1), one distance rate
//! (E2–E4), one surcharge (E5–E8) and the base fee (E9). These are the
//! building blocks for cause-effect graphing and MC/DC test design.

use crate::tiers::{
    DistanceTier, WeightTier, DISTANCE_THRESHOLD_MEDIUM, DISTANCE_THRESHOLD_SHORT,
    WEIGHT_THRESHOLD_HEAVY, WEIGHT_THRESHOLD_LIGHT, WEIGHT_THRESHOLD_MEDIUM,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Atomic condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Condition {
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
}

impl Condition {
    pub const ALL: [Condition; 7] = [
        Self::C1,
        Self::C2,
        Self::C3,
        Self::C4,
        Self::C5,
        Self::C6,
        Self::C7,
    ];

    pub fn evaluate(self, distance_km: f64, weight_kg: f64) -> bool {
        match self {
            Self::C1 => distance_km <= 0.0,
            Self::C2 => weight_kg <= 0.0,
            Self::C3 => distance_km <= DISTANCE_THRESHOLD_SHORT,
            Self::C4 => distance_km <= DISTANCE_THRESHOLD_MEDIUM,
            Self::C5 => weight_kg <= WEIGHT_THRESHOLD_LIGHT,
            Self::C6 => weight_kg <= WEIGHT_THRESHOLD_MEDIUM,
            Self::C7 => weight_kg <= WEIGHT_THRESHOLD_HEAVY,
        }
    }

    pub const fn expression(self) -> &'static str {
        match self {
            Self::C1 => "distance_km <= 0",
            Self::C2 => "weight_kg <= 0",
            Self::C3 => "distance_km <= 10",
            Self::C4 => "distance_km <= 50",
            Self::C5 => "weight_kg <= 2",
            Self::C6 => "weight_kg <= 5",
            Self::C7 => "weight_kg <= 15",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self, self.expression())
    }
}

/// Truth values of every condition for one input pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConditionVector([bool; 7]);

impl ConditionVector {
    pub fn evaluate(distance_km: f64, weight_kg: f64) -> Self {
        Self(Condition::ALL.map(|c| c.evaluate(distance_km, weight_kg)))
    }

    pub fn get(&self, condition: Condition) -> bool {
        self.0[condition.index()]
    }

    /// Conditions whose truth value differs between `self` and `other`
    pub fn differing(&self, other: &ConditionVector) -> Vec<Condition> {
        Condition::ALL
            .into_iter()
            .filter(|c| self.get(*c) != other.get(*c))
            .collect()
    }
}

/// Branch point in the fee function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Decision {
    /// Input guard: C1 || C2
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
}

impl Decision {
    pub const ALL: [Decision; 6] = [Self::D1, Self::D2, Self::D3, Self::D4, Self::D5, Self::D6];

    pub fn conditions(self) -> &'static [Condition] {
        match self {
            Self::D1 => &[Condition::C1, Condition::C2],
            Self::D2 => &[Condition::C3],
            Self::D3 => &[Condition::C4],
            Self::D4 => &[Condition::C5],
            Self::D5 => &[Condition::C6],
            Self::D6 => &[Condition::C7],
        }
    }

    pub fn outcome(self, vector: &ConditionVector) -> bool {
        match self {
            Self::D1 => vector.get(Condition::C1) || vector.get(Condition::C2),
            _ => vector.get(self.conditions()[0]),
        }
    }
}

/// Observable outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Effect {
    /// Invalid input, no fee
    E1,
    /// 0.50/km
    E2,
    /// 0.40/km
    E3,
    /// 0.30/km
    E4,
    /// No surcharge
    E5,
    /// 4.50 surcharge
    E6,
    /// 8.00 surcharge
    E7,
    /// 15.00 surcharge
    E8,
    /// Base fee applied
    E9,
}

impl Effect {
    pub fn for_distance_tier(tier: DistanceTier) -> Self {
        match tier {
            DistanceTier::Short => Self::E2,
            DistanceTier::Medium => Self::E3,
            DistanceTier::Long => Self::E4,
        }
    }

    pub fn for_weight_tier(tier: WeightTier) -> Self {
        match tier {
            WeightTier::Light => Self::E5,
            WeightTier::Medium => Self::E6,
            WeightTier::Heavy => Self::E7,
            WeightTier::VeryHeavy => Self::E8,
        }
    }
}

/// Effects produced by an input pair.
///
/// A rejected call yields only `E1`; an accepted call yields exactly one
/// distance effect, one weight effect and `E9`.
pub fn effects(distance_km: f64, weight_kg: f64) -> BTreeSet<Effect> {
    let vector = ConditionVector::evaluate(distance_km, weight_kg);
    if Decision::D1.outcome(&vector) {
        return BTreeSet::from([Effect::E1]);
    }

    let distance = if vector.get(Condition::C3) {
        Effect::E2
    } else if vector.get(Condition::C4) {
        Effect::E3
    } else {
        Effect::E4
    };

    let weight = if vector.get(Condition::C5) {
        Effect::E5
    } else if vector.get(Condition::C6) {
        Effect::E6
    } else if vector.get(Condition::C7) {
        Effect::E7
    } else {
        Effect::E8
    };

    BTreeSet::from([distance, weight, Effect::E9])
}

/// Two inputs showing that one condition alone flips a decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndependencePair {
    pub condition: Condition,
    /// `(distance_km, weight_kg)` with the condition false
    pub when_false: (f64, f64),
    /// `(distance_km, weight_kg)` with the condition true
    pub when_true: (f64, f64),
}

/// Find MC/DC independence pairs for `decision` among `samples`.
///
/// For each condition of the decision, returns the first pair of samples in
/// which that condition is the only one of the decision's conditions to
/// change and the decision outcome changes with it. Conditions with no such
/// pair in `samples` are absent from the result.
pub fn independence_pairs(decision: Decision, samples: &[(f64, f64)]) -> Vec<IndependencePair> {
    let evaluated: Vec<((f64, f64), ConditionVector)> = samples
        .iter()
        .map(|&(d, w)| ((d, w), ConditionVector::evaluate(d, w)))
        .collect();

    let mut pairs = Vec::new();
    for &condition in decision.conditions() {
        let found = evaluated.iter().find_map(|(input_false, vf)| {
            if vf.get(condition) {
                return None;
            }
            evaluated.iter().find_map(|(input_true, vt)| {
                let changed: Vec<Condition> = vf
                    .differing(vt)
                    .into_iter()
                    .filter(|c| decision.conditions().contains(c))
                    .collect();
                let flips_alone = changed == [condition];
                (flips_alone && decision.outcome(vf) != decision.outcome(vt)).then_some(
                    IndependencePair {
                        condition,
                        when_false: *input_false,
                        when_true: *input_true,
                    },
                )
            })
        });
        pairs.extend(found);
    }
    pairs
}
