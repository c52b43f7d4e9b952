//! Evenly spaced spot meshes.

use crate::error::RiskError;

/// Slack, in steps, when deciding whether `end` is on the mesh.
const END_TOLERANCE: f64 = 1e-9;

/// Largest number of points a mesh may hold.
pub const MAX_MESH_POINTS: usize = 10_000_000;

/// Builds `start, start + step, …` up to and including `end`.
///
/// Points are computed as `start + i·step`, so long meshes do not drift.
/// `end` is included when it lies within a billionth of a step of the mesh
/// (widened to the division round-off on long meshes). No point lies
/// beyond `end` by more than that slack.
///
/// # Errors
/// `RiskError::InvalidMesh` if any bound is non-finite, `step <= 0`,
/// `end < start` or the mesh would exceed [`MAX_MESH_POINTS`].
///
/// # Examples
/// ```
/// use optgrid_risk::mesh::spot_mesh;
///
/// let mesh = spot_mesh(80.0, 123.0, 1.0).unwrap();
/// assert_eq!(mesh.len(), 44);
/// assert_eq!(mesh[0], 80.0);
/// assert_eq!(*mesh.last().unwrap(), 123.0);
/// ```
pub fn spot_mesh(start: f64, end: f64, step: f64) -> Result<Vec<f64>, RiskError> {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) {
        return Err(RiskError::InvalidMesh(format!(
            "bounds and step must be finite (start = {start}, end = {end}, step = {step})"
        )));
    }
    if step <= 0.0 {
        return Err(RiskError::InvalidMesh(format!(
            "step must be positive, got {step}"
        )));
    }
    if end < start {
        return Err(RiskError::InvalidMesh(format!(
            "end ({end}) is below start ({start})"
        )));
    }

    let span = (end - start) / step;
    if !span.is_finite() || span >= MAX_MESH_POINTS as f64 {
        return Err(RiskError::InvalidMesh(format!(
            "{start}..={end} by {step} exceeds {MAX_MESH_POINTS} points"
        )));
    }
    let slack = END_TOLERANCE.max(4.0 * f64::EPSILON * span);
    let last = (span + slack).floor() as usize;
    Ok((0..=last).map(|i| start + i as f64 * step).collect())
}
