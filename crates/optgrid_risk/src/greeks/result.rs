//! Result records for Greek comparisons and spot sweeps.

use std::fmt;

use optgrid_core::types::OptionType;

/// Greek being compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Greek {
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
}

impl Greek {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One finite-difference estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FiniteDifferencePoint {
    /// Step `h`.
    pub step: f64,
    /// Finite-difference value.
    pub value: f64,
    /// `|value − analytic|`.
    pub abs_error: f64,
}

/// Analytic value of one Greek against its finite-difference estimates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekComparison {
    /// Which Greek.
    pub greek: Greek,
    /// Option type the model had when compared.
    pub option_type: OptionType,
    /// Spot at which everything was evaluated.
    pub spot: f64,
    /// Closed-form value.
    pub analytic: f64,
    /// One point per step, in the caller's step order.
    pub points: Vec<FiniteDifferencePoint>,
}

impl GreekComparison {
    /// Absolute errors in step order.
    pub fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.abs_error)
    }

    /// Point with the smallest error (`None` when there are no points or
    /// every error is NaN).
    pub fn best(&self) -> Option<&FiniteDifferencePoint> {
        self.points
            .iter()
            .filter(|p| !p.abs_error.is_nan())
            .min_by(|a, b| a.abs_error.total_cmp(&b.abs_error))
    }
}

/// Delta and Gamma comparisons for one option type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekLeg {
    /// Option type of this leg.
    pub option_type: OptionType,
    /// Delta comparison.
    pub delta: GreekComparison,
    /// Gamma comparison.
    pub gamma: GreekComparison,
}

/// Both Greeks for the model's current type and for the toggled type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllGreeksComparison {
    /// Leg for the type the model held on entry.
    pub current: GreekLeg,
    /// Leg for the opposite type.
    pub toggled: GreekLeg,
}

impl AllGreeksComparison {
    /// Legs in evaluation order (current, then toggled).
    pub fn legs(&self) -> [&GreekLeg; 2] {
        [&self.current, &self.toggled]
    }
}

/// Call and put sensitivities at one spot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotSensitivity {
    /// Spot.
    pub spot: f64,
    /// Call value.
    pub call_price: f64,
    /// Call Delta.
    pub call_delta: f64,
    /// Put value.
    pub put_price: f64,
    /// Put Delta.
    pub put_delta: f64,
    /// Gamma (shared by call and put in closed form).
    pub gamma: f64,
}

/// Call and put price at one spot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LadderPoint {
    /// Spot.
    pub spot: f64,
    /// Call value.
    pub call: f64,
    /// Put value.
    pub put: f64,
}
