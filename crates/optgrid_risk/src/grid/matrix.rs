//! Labelled result matrices and the measures stored in them.

use std::fmt;
use std::str::FromStr;

use optgrid_core::traits::PricingModel;
use optgrid_core::types::PricingError;

/// Quantity evaluated in each grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Measure {
    /// Option value.
    #[default]
    Price,
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
}

impl Measure {
    /// All measures in display order.
    pub const ALL: [Measure; 3] = [Measure::Price, Measure::Delta, Measure::Gamma];

    /// Evaluates this measure on `model` at `spot` for its current type.
    #[inline]
    pub fn evaluate<M: PricingModel>(self, model: &M, spot: f64) -> f64 {
        match self {
            Measure::Price => model.price(spot),
            Measure::Delta => model.delta(spot),
            Measure::Gamma => model.gamma(spot),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Measure::Price => "Price",
            Measure::Delta => "Delta",
            Measure::Gamma => "Gamma",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Measure {
    type Err = PricingError;

    /// Case-insensitive `price`, `delta` or `gamma`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Measure::Price),
            "delta" => Ok(Measure::Delta),
            "gamma" => Ok(Measure::Gamma),
            other => Err(PricingError::InvalidInput(format!(
                "unknown measure '{other}' (expected price, delta or gamma)"
            ))),
        }
    }
}

/// Strike × volatility matrix, stored row-major.
///
/// Row `i` belongs to `strikes[i]`, column `j` to `volatilities[j]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultMatrix {
    measure: Measure,
    strikes: Vec<f64>,
    volatilities: Vec<f64>,
    values: Vec<f64>,
}

impl ResultMatrix {
    /// Assembles a matrix from its labels and row-major values.
    ///
    /// `values.len()` must equal `strikes.len() * volatilities.len()`.
    pub(crate) fn from_parts(
        measure: Measure,
        strikes: Vec<f64>,
        volatilities: Vec<f64>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(values.len(), strikes.len() * volatilities.len());
        Self {
            measure,
            strikes,
            volatilities,
            values,
        }
    }

    /// Measure held in the cells.
    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Number of strikes.
    pub fn rows(&self) -> usize {
        self.strikes.len()
    }

    /// Number of volatilities.
    pub fn cols(&self) -> usize {
        self.volatilities.len()
    }

    /// Row labels.
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Column labels.
    pub fn volatilities(&self) -> &[f64] {
        &self.volatilities
    }

    /// Cell `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows() && col < self.cols() {
            self.values.get(row * self.cols() + col).copied()
        } else {
            None
        }
    }

    /// Values of row `i`.
    ///
    /// # Panics
    /// If `i >= rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        let cols = self.cols();
        &self.values[i * cols..(i + 1) * cols]
    }

    /// `(strike, values)` per row.
    pub fn iter_rows(&self) -> impl Iterator<Item = (f64, &[f64])> + '_ {
        self.strikes
            .iter()
            .enumerate()
            .map(move |(i, &k)| (k, self.row(i)))
    }

    /// Cells that are NaN or infinite.
    pub fn non_finite_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_finite()).count()
    }
}

/// Matrix for one expiry of a European sweep.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryMatrix {
    /// Expiry in years.
    pub expiry: f64,
    /// Strike × volatility values at this expiry.
    pub matrix: ResultMatrix,
}
