// Adaptive linearisation of arbitrary one-dimensional functions

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Convergence criterion for linearisation.
///
/// A panel is accepted once the linear-linear estimate at its midpoint is
/// within `absolute + relative * |y|` of the true function value, or once
/// `max_depth` bisections have been made.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearisationTolerance {
    pub relative: f64,
    pub absolute: f64,
    pub max_depth: u32,
}

impl Default for LinearisationTolerance {
    fn default() -> Self {
        Self {
            relative: 1e-3,
            absolute: 1e-10,
            max_depth: 20,
        }
    }
}

impl LinearisationTolerance {
    fn accepts(&self, exact: f64, estimate: f64) -> bool {
        (exact - estimate).abs() <= self.absolute + self.relative * exact.abs()
    }
}

/// Bisect [x0, x1] until `f` is linear within tolerance.
///
/// The start point is assumed to already be in `xs`/`ys`; every accepted
/// panel appends its end point.
#[allow(clippy::too_many_arguments)]
pub(crate) fn linearise_panel<F>(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    f: &F,
    tolerance: &LinearisationTolerance,
    xs: &mut Vec<f64>,
    ys: &mut Vec<f64>,
) -> Result<()>
where
    F: Fn(f64) -> Result<f64>,
{
    bisect(x0, y0, x1, y1, f, tolerance, 0, xs, ys)
}

#[allow(clippy::too_many_arguments)]
fn bisect<F>(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    f: &F,
    tolerance: &LinearisationTolerance,
    depth: u32,
    xs: &mut Vec<f64>,
    ys: &mut Vec<f64>,
) -> Result<()>
where
    F: Fn(f64) -> Result<f64>,
{
    let xm = 0.5 * (x0 + x1);
    let ym = f(xm)?;
    if depth >= tolerance.max_depth
        || xm <= x0
        || xm >= x1
        || tolerance.accepts(ym, 0.5 * (y0 + y1))
    {
        xs.push(x1);
        ys.push(y1);
        return Ok(());
    }
    bisect(x0, y0, xm, ym, f, tolerance, depth + 1, xs, ys)?;
    bisect(xm, ym, x1, y1, f, tolerance, depth + 1, xs, ys)
}
