// Grid validation and lookup shared by tables and grids of distributions

use crate::error::{Error, Result};
use crate::interpolation::InterpolationType;

/// Where a value falls on a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Location {
    /// exactly on the node with this index (first occurrence for a jump)
    Node(usize),
    /// strictly inside the panel ending at this index
    Panel(usize),
}

/// Check the structural rules shared by every interpolated table.
///
/// `x` must have at least two points and be weakly increasing. A value may
/// be repeated once to encode a discontinuity, but not at the first or last
/// index. `boundaries` must be non-empty, strictly increasing, end on the
/// last index and pair one-to-one with `interpolants`.
pub(crate) fn verify_grid(
    x: &[f64],
    boundaries: &[usize],
    interpolants: &[InterpolationType],
) -> Result<()> {
    let n = x.len();
    if n < 2 {
        return Err(Error::InvalidTable(format!(
            "at least two points are required, found {}",
            n
        )));
    }
    if boundaries.len() != interpolants.len() {
        return Err(Error::InvalidTable(format!(
            "{} boundaries do not match {} interpolants",
            boundaries.len(),
            interpolants.len()
        )));
    }
    let last = match boundaries.last() {
        Some(&last) => last,
        None => {
            return Err(Error::InvalidTable(
                "at least one interpolation region is required".to_string(),
            ))
        }
    };
    if last != n - 1 {
        return Err(Error::InvalidTable(format!(
            "the last boundary ({}) must be the last index ({})",
            last,
            n - 1
        )));
    }
    if let Some(i) = (0..n - 1).find(|&i| !(x[i] <= x[i + 1])) {
        return Err(Error::InvalidTable(format!(
            "values are not sorted: x[{}] = {} > x[{}] = {}",
            i,
            x[i],
            i + 1,
            x[i + 1]
        )));
    }
    if let Some(i) = (0..n.saturating_sub(2)).find(|&i| x[i] == x[i + 2]) {
        return Err(Error::InvalidTable(format!(
            "value {} is repeated more than once starting at index {}",
            x[i], i
        )));
    }
    if x[0] == x[1] {
        return Err(Error::InvalidTable(format!(
            "jump at the first point (x = {})",
            x[0]
        )));
    }
    if x[n - 2] == x[n - 1] {
        return Err(Error::InvalidTable(format!(
            "jump at the last point (x = {})",
            x[n - 1]
        )));
    }
    if let Some(w) = boundaries.windows(2).find(|w| w[0] >= w[1]) {
        return Err(Error::InvalidTable(format!(
            "boundaries are not strictly increasing: {} followed by {}",
            w[0], w[1]
        )));
    }
    Ok(())
}

/// Convert 1-based breakpoint counts and integer law codes into 0-based
/// boundaries and interpolation types.
///
/// Empty breakpoints describe a single linear-linear region over `n` points.
pub(crate) fn convert_breakpoints(
    n: usize,
    breakpoints: &[i32],
    interpolation: &[i32],
) -> Result<(Vec<usize>, Vec<InterpolationType>)> {
    if breakpoints.is_empty() && interpolation.is_empty() {
        return Ok((vec![n.saturating_sub(1)], vec![InterpolationType::LinearLinear]));
    }
    let boundaries = breakpoints
        .iter()
        .map(|&nbt| {
            if nbt < 1 {
                Err(Error::InvalidTable(format!("invalid breakpoint {}", nbt)))
            } else {
                Ok(nbt as usize - 1)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    let interpolants = interpolation
        .iter()
        .map(|&code| InterpolationType::try_from(code))
        .collect::<Result<Vec<_>>>()?;
    Ok((boundaries, interpolants))
}

/// Locate `value` on a validated grid, which must contain it.
pub(crate) fn locate(x: &[f64], value: f64) -> Location {
    // first index with x[i] >= value
    let mut low = 0usize;
    let mut high = x.len();
    while low < high {
        let mid = (low + high) >> 1;
        if x[mid] < value {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    if x[low] == value {
        Location::Node(low)
    } else {
        Location::Panel(low)
    }
}

/// Index of the region containing the panel that ends at `index`
pub(crate) fn region_of(boundaries: &[usize], index: usize) -> usize {
    boundaries.partition_point(|&b| b < index)
}

/// Check that a query value lies on [lower, upper]
pub(crate) fn verify_in_domain(value: f64, lower: f64, upper: f64) -> Result<()> {
    if value >= lower && value <= upper {
        Ok(())
    } else {
        Err(Error::OutOfDomain {
            value,
            lower,
            upper,
        })
    }
}
