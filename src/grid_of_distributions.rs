// Tables whose values are whole distributions, indexed by an outer grid

use crate::error::{Error, Result};
use crate::interpolation::InterpolationType;
use crate::legendre::LegendreAngularDistribution;
use crate::tabulated_distribution::{TabulatedAngularDistribution, TabulatedEnergyDistribution};
use crate::tabulated_function::TabulatedFunction;
use crate::uniform_distribution::UniformAngularDistribution;
use crate::utilities::verify_grid;

/// Distributions tabulated against an outer variable, usually the incident
/// energy.
///
/// The outer grid follows the same rules as the x values of a
/// [`TabulatedFunction`]: sorted, at least two points, single interior jumps
/// only, and interpolation regions described by `boundaries` and
/// `interpolants`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOfDistributions<D> {
    grid: Vec<f64>,
    distributions: Vec<D>,
    boundaries: Vec<usize>,
    interpolants: Vec<InterpolationType>,
}

/// Legendre angular distributions as a function of incident energy
pub type LegendreAngularDistributions = GridOfDistributions<LegendreAngularDistribution>;
/// Tabulated angular distributions as a function of incident energy
pub type TabulatedAngularDistributions = GridOfDistributions<TabulatedAngularDistribution>;
/// Uniform angular distributions as a function of incident energy
pub type UniformAngularDistributions = GridOfDistributions<UniformAngularDistribution>;
/// Tabulated energy distributions as a function of incident energy
pub type TabulatedEnergyDistributions = GridOfDistributions<TabulatedEnergyDistribution>;

impl<D> GridOfDistributions<D> {
    /// Create a grid, validating it with the same rules as a tabulated function
    pub fn new(
        grid: Vec<f64>,
        distributions: Vec<D>,
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Result<Self> {
        verify_distributions(&grid, &distributions, &boundaries, &interpolants)?;
        Ok(Self {
            grid,
            distributions,
            boundaries,
            interpolants,
        })
    }

    /// Create a grid with a single linear-linear region
    pub fn from_linear(grid: Vec<f64>, distributions: Vec<D>) -> Result<Self> {
        let last = grid.len().saturating_sub(1);
        Self::new(grid, distributions, vec![last], vec![InterpolationType::LinearLinear])
    }

    /// Replace the whole content of the grid.
    ///
    /// The new data is validated first; on failure the grid is unchanged.
    pub fn replace(
        &mut self,
        grid: Vec<f64>,
        distributions: Vec<D>,
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Result<()> {
        *self = Self::new(grid, distributions, boundaries, interpolants)?;
        Ok(())
    }

    /// Incident energy grid
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    /// One distribution per grid point
    pub fn distributions(&self) -> &[D] {
        &self.distributions
    }

    /// Index of the last point of every interpolation region
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Interpolation law of every region
    pub fn interpolants(&self) -> &[InterpolationType] {
        &self.interpolants
    }

    /// Number of grid points
    pub fn number_points(&self) -> usize {
        self.grid.len()
    }

    /// Number of interpolation regions
    pub fn number_regions(&self) -> usize {
        self.boundaries.len()
    }

    /// Lowest grid value
    pub fn lower_limit(&self) -> f64 {
        self.grid[0]
    }

    /// Highest grid value
    pub fn upper_limit(&self) -> f64 {
        self.grid[self.grid.len() - 1]
    }

    /// Iterate over (grid value, distribution) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, &D)> {
        self.grid.iter().copied().zip(self.distributions.iter())
    }

    /// Tabulate a scalar property of every distribution on the same grid and
    /// with the same interpolation regions
    pub fn project<F>(&self, extractor: F) -> TabulatedFunction
    where
        F: Fn(&D) -> f64,
    {
        let values = self.distributions.iter().map(extractor).collect();
        TabulatedFunction::from_validated_parts(
            self.grid.clone(),
            values,
            self.boundaries.clone(),
            self.interpolants.clone(),
        )
    }

    /// Like [`project`](Self::project) for properties that can fail to
    /// evaluate; the first failure is returned
    pub fn try_project<F>(&self, extractor: F) -> Result<TabulatedFunction>
    where
        F: Fn(&D) -> Result<f64>,
    {
        let values = self
            .distributions
            .iter()
            .map(extractor)
            .collect::<Result<Vec<_>>>()?;
        Ok(TabulatedFunction::from_validated_parts(
            self.grid.clone(),
            values,
            self.boundaries.clone(),
            self.interpolants.clone(),
        ))
    }
}

impl LegendreAngularDistributions {
    /// Average cosine at every grid point
    pub fn average_cosines(&self) -> TabulatedFunction {
        self.project(LegendreAngularDistribution::average_cosine)
    }
}

impl UniformAngularDistributions {
    /// Average cosine at every grid point
    pub fn average_cosines(&self) -> TabulatedFunction {
        self.project(UniformAngularDistribution::average_cosine)
    }
}

impl TabulatedAngularDistributions {
    /// Average cosine at every grid point
    pub fn average_cosines(&self) -> Result<TabulatedFunction> {
        self.try_project(TabulatedAngularDistribution::average_cosine)
    }
}

impl TabulatedEnergyDistributions {
    /// Average outgoing energy at every grid point
    pub fn average_energies(&self) -> Result<TabulatedFunction> {
        self.try_project(TabulatedEnergyDistribution::average_energy)
    }
}

fn verify_distributions<D>(
    grid: &[f64],
    distributions: &[D],
    boundaries: &[usize],
    interpolants: &[InterpolationType],
) -> Result<()> {
    if grid.len() != distributions.len() {
        return Err(Error::InvalidTable(format!(
            "{} grid values do not match {} distributions",
            grid.len(),
            distributions.len()
        )));
    }
    verify_grid(grid, boundaries, interpolants)
}
