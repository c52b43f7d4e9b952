//! Fixed-width table output.
//!
//! Every writer takes the [`TableFormat`] explicitly; nothing here touches
//! global stream state.

use std::io::{self, Write};

use optgrid_risk::greeks::{AllGreeksComparison, GreekComparison, LadderPoint, SpotSensitivity};
use optgrid_risk::grid::{ExpiryMatrix, ResultMatrix};
use optgrid_risk::parity::ParityReport;
use serde::Deserialize;

/// Largest precision accepted from configuration.
const MAX_PRECISION: usize = 12;

/// Column layout and decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableFormat {
    /// Decimals for European price matrices.
    pub price_precision: usize,
    /// Decimals for Greeks, parity, ladders and perpetual output.
    pub greek_precision: usize,
    /// Width of every matrix and sensitivity column.
    pub column_width: usize,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            price_precision: 2,
            greek_precision: 4,
            column_width: 10,
        }
    }
}

impl TableFormat {
    /// Checks precisions and width are usable.
    pub fn validate(&self) -> Result<(), String> {
        if self.price_precision > MAX_PRECISION || self.greek_precision > MAX_PRECISION {
            return Err(format!("precision must be at most {MAX_PRECISION}"));
        }
        if self.column_width == 0 {
            return Err("column_width must be positive".to_string());
        }
        Ok(())
    }
}

/// Writes a strike × volatility matrix with a `K\Vol` header row.
pub fn write_matrix<W: Write>(
    out: &mut W,
    fmt: &TableFormat,
    matrix: &ResultMatrix,
    precision: usize,
) -> io::Result<()> {
    let w = fmt.column_width;
    write!(out, "{:>w$}", "K\\Vol")?;
    for vol in matrix.volatilities() {
        write!(out, "{vol:>w$.precision$}")?;
    }
    writeln!(out)?;

    for (strike, row) in matrix.iter_rows() {
        write!(out, "{strike:>w$.precision$}")?;
        for value in row {
            write!(out, "{value:>w$.precision$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Writes one matrix per expiry, each preceded by `Expiry Time: T`.
pub fn write_expiry_matrices<W: Write>(
    out: &mut W,
    fmt: &TableFormat,
    matrices: &[ExpiryMatrix],
    precision: usize,
) -> io::Result<()> {
    for em in matrices {
        writeln!(out, "\nExpiry Time: {:.precision$}", em.expiry)?;
        write_matrix(out, fmt, &em.matrix, precision)?;
    }
    Ok(())
}

/// Writes a parity report block.
pub fn write_parity<W: Write>(
    out: &mut W,
    fmt: &TableFormat,
    report: &ParityReport,
) -> io::Result<()> {
    let p = fmt.greek_precision;
    let params = &report.params;
    writeln!(out, "==============================")?;
    writeln!(
        out,
        "  S = {:.p$}, K = {:.p$}, T = {:.p$}, r = {:.p$}, sigma = {:.p$}, b = {:.p$}",
        params.spot,
        params.strike,
        params.expiry,
        params.rate,
        params.volatility,
        params.cost_of_carry
    )?;
    writeln!(out, "  Call Price: {:.p$}", report.call)?;
    writeln!(out, "  Put  Price: {:.p$}", report.put)?;
    writeln!(out, "  Call (from Put):   {:.p$}", report.call_from_put)?;
    writeln!(out, "  Put  (from Call):  {:.p$}", report.put_from_call)?;
    if report.holds() {
        writeln!(out, "  Put-Call parity holds.")
    } else {
        writeln!(
            out,
            "  Put-Call parity does not hold (gap {:.3e}).",
            report.gap()
        )
    }
}

/// Writes `S: … | Call: … | Put: …` per spot.
pub fn write_ladder<W: Write>(
    out: &mut W,
    fmt: &TableFormat,
    points: &[LadderPoint],
) -> io::Result<()> {
    let p = fmt.greek_precision;
    for point in points {
        writeln!(
            out,
            "S: {:.p$} | Call: {:.p$} | Put: {:.p$}",
            point.spot, point.call, point.put
        )?;
    }
    Ok(())
}

fn write_comparison<W: Write>(
    out: &mut W,
    fmt: &TableFormat,
    cmp: &GreekComparison,
) -> io::Result<()> {
    let p = fmt.greek_precision;
    writeln!(out, "  Analytic {}: {:.p$}", cmp.greek, cmp.analytic)?;
    for point in &cmp.points {
        writeln!(
            out,
            "    h = {:<8} FD {}: {:.p$} | abs error: {:.3e}",
            point.step, cmp.greek, point.value, point.abs_error
        )?;
    }
    Ok(())
}

/// Writes both legs of an analytic vs finite-difference comparison.
pub fn write_all_greeks<W: Write>(
    out: &mut W,
    fmt: &TableFormat,
    all: &AllGreeksComparison,
) -> io::Result<()> {
    let p = fmt.greek_precision;
    for leg in all.legs() {
        writeln!(
            out,
            "\n{} option at S = {:.p$}",
            leg.option_type, leg.delta.spot
        )?;
        write_comparison(out, fmt, &leg.delta)?;
        write_comparison(out, fmt, &leg.gamma)?;
    }
    Ok(())
}

/// Writes the per-spot sensitivity table.
pub fn write_sensitivities<W: Write>(
    out: &mut W,
    fmt: &TableFormat,
    rows: &[SpotSensitivity],
) -> io::Result<()> {
    let (w, p) = (fmt.column_width, fmt.greek_precision);
    for header in ["S", "Call", "CallDelta", "Put", "PutDelta", "Gamma"] {
        write!(out, "{header:>w$}")?;
    }
    writeln!(out)?;

    for r in rows {
        for v in [
            r.spot,
            r.call_price,
            r.call_delta,
            r.put_price,
            r.put_delta,
            r.gamma,
        ] {
            write!(out, "{v:>w$.p$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use optgrid_core::types::{OptionType, ParameterSet};
    use optgrid_risk::grid::{GridEvaluator, Measure};
    use optgrid_risk::parity::check_put_call_parity;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_matrix_layout() {
        let m = GridEvaluator::new(100.0, 0.05)
            .european(&[90.0, 100.0], &[0.2, 0.3], &[1.0], Measure::Price)
            .unwrap();
        let fmt = TableFormat::default();
        let text = render(|out| write_matrix(out, &fmt, &m[0].matrix, 2));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "     K\\Vol      0.20      0.30");
        assert!(lines[1].starts_with("     90.00"));
        assert!(lines.iter().all(|l| l.len() == 30));
    }

    #[test]
    fn test_parity_block() {
        let p = ParameterSet::new(100.0, 100.0, 1.0, 0.0, 0.2, 0.0, OptionType::Call);
        let report = check_put_call_parity(&p);
        let text = render(|out| write_parity(out, &TableFormat::default(), &report));
        assert!(text.contains("Call Price: 7.9656"));
        assert!(text.contains("Put  Price: 7.9656"));
        assert!(text.trim_end().ends_with("Put-Call parity holds."));
    }

    #[test]
    fn test_validate_format() {
        assert!(TableFormat::default().validate().is_ok());
        let wide = TableFormat {
            price_precision: 20,
            ..Default::default()
        };
        assert!(wide.validate().is_err());
        let narrow = TableFormat {
            column_width: 0,
            ..Default::default()
        };
        assert!(narrow.validate().is_err());
    }
}
