// Tabulated one-dimensional functions with interpolation regions

use crate::error::{Error, Result};
use crate::interpolation::InterpolationType;
use crate::linearisation::{linearise_panel, LinearisationTolerance};
use crate::utilities::{
    convert_breakpoints, locate, region_of, verify_grid, verify_in_domain, Location,
};

/// A function y(x) given as a table of points, split into interpolation
/// regions that each carry their own law.
///
/// The x values are sorted. A single repeated x value inside the table
/// encodes a discontinuity. `boundaries[r]` is the last point index of
/// region `r`, so the final boundary is always `x.len() - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedFunction {
    x: Vec<f64>,
    y: Vec<f64>,
    boundaries: Vec<usize>,
    interpolants: Vec<InterpolationType>,
}

impl TabulatedFunction {
    /// Create a table with explicit interpolation regions
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Result<Self> {
        verify_table(&x, &y, &boundaries, &interpolants)?;
        Ok(Self {
            x,
            y,
            boundaries,
            interpolants,
        })
    }

    /// Create a table that is linear-linear over its whole range
    pub fn from_linear(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        let last = x.len().saturating_sub(1);
        Self::new(x, y, vec![last], vec![InterpolationType::LinearLinear])
    }

    /// Create a table from 1-based breakpoint counts and integer law codes,
    /// as carried by the columnar exchange format.
    ///
    /// Empty breakpoints and interpolation codes give a single linear-linear
    /// region.
    pub fn from_breakpoints(
        x: Vec<f64>,
        y: Vec<f64>,
        breakpoints: &[i32],
        interpolation: &[i32],
    ) -> Result<Self> {
        let (boundaries, interpolants) = convert_breakpoints(x.len(), breakpoints, interpolation)?;
        Self::new(x, y, boundaries, interpolants)
    }

    /// Assembled from parts that are already known to be consistent
    pub(crate) fn from_validated_parts(
        x: Vec<f64>,
        y: Vec<f64>,
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Self {
        debug_assert!(verify_table(&x, &y, &boundaries, &interpolants).is_ok());
        Self {
            x,
            y,
            boundaries,
            interpolants,
        }
    }

    /// Replace the whole content of the table.
    ///
    /// The new data is validated first; on failure the table is unchanged.
    pub fn replace(
        &mut self,
        x: Vec<f64>,
        y: Vec<f64>,
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Result<()> {
        *self = Self::new(x, y, boundaries, interpolants)?;
        Ok(())
    }

    /// Tabulated x values
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Tabulated y values
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Index of the last point of every interpolation region
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Interpolation law of every region
    pub fn interpolants(&self) -> &[InterpolationType] {
        &self.interpolants
    }

    /// Number of tabulated points
    pub fn number_points(&self) -> usize {
        self.x.len()
    }

    /// Number of interpolation regions
    pub fn number_regions(&self) -> usize {
        self.boundaries.len()
    }

    /// Lowest x value
    pub fn lower_limit(&self) -> f64 {
        self.x[0]
    }

    /// Highest x value
    pub fn upper_limit(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Whether every region is linear-linear
    pub fn is_linearised(&self) -> bool {
        self.interpolants
            .iter()
            .all(|&law| law == InterpolationType::LinearLinear)
    }

    /// Iterate over the interpolation regions.
    ///
    /// Adjacent regions share their boundary point.
    pub fn regions(&self) -> impl Iterator<Item = Region<'_>> {
        self.boundaries
            .iter()
            .zip(self.interpolants.iter())
            .enumerate()
            .map(move |(r, (&end, &law))| {
                let start = if r == 0 { 0 } else { self.boundaries[r - 1] };
                Region {
                    x: &self.x[start..=end],
                    y: &self.y[start..=end],
                    interpolation: law,
                }
            })
    }

    /// Evaluate the function at `x`.
    ///
    /// At a discontinuity the value of the first of the two repeated points
    /// is returned.
    pub fn value(&self, x: f64) -> Result<f64> {
        verify_in_domain(x, self.lower_limit(), self.upper_limit())?;
        match locate(&self.x, x) {
            Location::Node(i) => Ok(self.y[i]),
            Location::Panel(i) => {
                let law = self.interpolants[region_of(&self.boundaries, i)];
                law.interpolate(self.x[i - 1], self.y[i - 1], self.x[i], self.y[i], x)
            }
        }
    }

    /// Integral of the function over its whole domain
    pub fn integral(&self) -> Result<f64> {
        Ok(self.cumulative_integrals()?.last().copied().unwrap_or(0.0))
    }

    /// Integral of x * y over the whole domain
    pub fn first_moment(&self) -> Result<f64> {
        self.panels().try_fold(0.0, |sum, (i, law)| {
            Ok(sum + law.first_moment(self.x[i - 1], self.y[i - 1], self.x[i], self.y[i])?)
        })
    }

    /// Running integral from the lower limit up to every point
    pub(crate) fn cumulative_integrals(&self) -> Result<Vec<f64>> {
        let mut running = Vec::with_capacity(self.x.len());
        running.push(0.0);
        let mut sum = 0.0;
        for (i, law) in self.panels() {
            sum += law.integrate(self.x[i - 1], self.y[i - 1], self.x[i], self.y[i])?;
            running.push(sum);
        }
        Ok(running)
    }

    /// A table whose values are scaled by `factor`
    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.iter().map(|y| y * factor).collect(),
            boundaries: self.boundaries.clone(),
            interpolants: self.interpolants.clone(),
        }
    }

    /// Convert into a single linear-linear region table that reproduces this
    /// function within `tolerance`.
    ///
    /// Histogram regions are turned into steps by introducing a jump at every
    /// interior point, except where that would repeat an existing jump. The
    /// step value is carried up to the upper limit of a histogram region that
    /// ends the table.
    ///
    /// Away from the nodes the result agrees with this function within
    /// `tolerance`. At the end point of a histogram panel it returns the
    /// step value instead, since a query at a jump gives the left limit: the
    /// node value of such a point is only seen by a query exactly at it.
    pub fn linearise(&self, tolerance: &LinearisationTolerance) -> Result<Self> {
        let mut xs = vec![self.x[0]];
        let mut ys = vec![self.y[0]];
        for (i, law) in self.panels() {
            let (x0, y0, x1, y1) = (self.x[i - 1], self.y[i - 1], self.x[i], self.y[i]);
            match law {
                _ if x0 == x1 || law == InterpolationType::LinearLinear => {
                    xs.push(x1);
                    ys.push(y1);
                }
                InterpolationType::Histogram => {
                    xs.push(x1);
                    ys.push(y0);
                    let is_last = i + 1 == self.x.len();
                    if !is_last && self.x[i + 1] != x1 && y1 != y0 {
                        xs.push(x1);
                        ys.push(y1);
                    }
                }
                _ => {
                    let f = |x: f64| law.interpolate(x0, y0, x1, y1, x);
                    linearise_panel(x0, y0, x1, y1, &f, tolerance, &mut xs, &mut ys)?;
                }
            }
        }
        log::trace!(
            "linearised table from {} to {} points",
            self.x.len(),
            xs.len()
        );
        Self::from_linear(xs, ys)
    }

    /// Every panel as (index of its end point, law)
    fn panels(&self) -> impl Iterator<Item = (usize, InterpolationType)> + '_ {
        (1..self.x.len()).map(move |i| (i, self.interpolants[region_of(&self.boundaries, i)]))
    }
}

/// One interpolation region of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region<'a> {
    pub x: &'a [f64],
    pub y: &'a [f64],
    pub interpolation: InterpolationType,
}

fn verify_table(
    x: &[f64],
    y: &[f64],
    boundaries: &[usize],
    interpolants: &[InterpolationType],
) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::InvalidTable(format!(
            "{} x values do not match {} y values",
            x.len(),
            y.len()
        )));
    }
    verify_grid(x, boundaries, interpolants)
}
