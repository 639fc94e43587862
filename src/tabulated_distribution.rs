// Tabulated angular and energy densities

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interpolation::InterpolationType;
use crate::normalisation::{cumulative, normalise, normalise_with_warning, verify_positive};
use crate::tabulated_function::TabulatedFunction;

/// A probability density tabulated against a physical variable, with an
/// optional cumulative table.
///
/// The cumulative table is only present when it was supplied or explicitly
/// calculated; it is never derived on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedDistribution {
    pdf: TabulatedFunction,
    cdf: Option<TabulatedFunction>,
}

impl TabulatedDistribution {
    /// Wrap a density table as given
    pub fn new(pdf: TabulatedFunction) -> Self {
        Self { pdf, cdf: None }
    }

    /// Wrap a density table together with its cumulative table.
    ///
    /// Both tables must be given on the same grid.
    pub fn with_cdf(pdf: TabulatedFunction, cdf: TabulatedFunction) -> Result<Self> {
        if pdf.x() != cdf.x() {
            return Err(Error::InvalidDistribution(format!(
                "the cumulative table ({} points) does not share the density grid ({} points)",
                cdf.number_points(),
                pdf.number_points()
            )));
        }
        Ok(Self {
            pdf,
            cdf: Some(cdf),
        })
    }

    /// Build from raw exchange-format data, normalising the density when
    /// `config.normalise` is set
    pub fn from_density(pdf: TabulatedFunction, config: &Config) -> Result<Self> {
        if config.normalise {
            Ok(Self::new(normalise_with_warning(
                &pdf,
                config.normalisation_warning,
            )?))
        } else {
            Ok(Self::new(pdf))
        }
    }

    /// The probability density
    pub fn pdf(&self) -> &TabulatedFunction {
        &self.pdf
    }

    /// The cumulative table, if one was supplied or calculated
    pub fn cdf(&self) -> Option<&TabulatedFunction> {
        self.cdf.as_ref()
    }

    /// Whether a cumulative table is present
    pub fn has_cdf(&self) -> bool {
        self.cdf.is_some()
    }

    /// Lower limit of the density
    pub fn lower_limit(&self) -> f64 {
        self.pdf.lower_limit()
    }

    /// Upper limit of the density
    pub fn upper_limit(&self) -> f64 {
        self.pdf.upper_limit()
    }

    /// Density at `x`
    pub fn value(&self, x: f64) -> Result<f64> {
        self.pdf.value(x)
    }

    /// A copy with a normalised density.
    ///
    /// A cumulative table that was present is recalculated from the
    /// normalised density.
    pub fn normalised(&self) -> Result<Self> {
        let pdf = normalise(&self.pdf)?;
        let cdf = match self.cdf {
            Some(_) => Some(cumulative(&pdf)?),
            None => None,
        };
        Ok(Self { pdf, cdf })
    }

    /// A copy with a normalised density and its cumulative table
    pub fn with_calculated_cdf(&self) -> Result<Self> {
        let pdf = normalise(&self.pdf)?;
        let cdf = cumulative(&pdf)?;
        Ok(Self {
            pdf,
            cdf: Some(cdf),
        })
    }

    /// Mean of the distribution, computed from the density alone
    pub fn mean(&self) -> Result<f64> {
        let integral = self.pdf.integral()?;
        verify_positive(integral)?;
        Ok(self.pdf.first_moment()? / integral)
    }
}

/// Density of the cosine of the scattering angle
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedAngularDistribution {
    distribution: TabulatedDistribution,
}

impl TabulatedAngularDistribution {
    /// Create the distribution from density values and their interpolation regions
    pub fn new(
        cosines: Vec<f64>,
        values: Vec<f64>,
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Result<Self> {
        let pdf = TabulatedFunction::new(cosines, values, boundaries, interpolants)?;
        Ok(Self::from_pdf(pdf))
    }

    /// Wrap an existing density without normalising it
    pub fn from_pdf(pdf: TabulatedFunction) -> Self {
        Self {
            distribution: TabulatedDistribution::new(pdf),
        }
    }

    /// Create the distribution with a supplied cumulative table on the same grid
    pub fn with_cdf(pdf: TabulatedFunction, cdf: TabulatedFunction) -> Result<Self> {
        Ok(Self {
            distribution: TabulatedDistribution::with_cdf(pdf, cdf)?,
        })
    }

    /// Build from raw exchange-format data (see [`TabulatedDistribution::from_density`])
    pub fn from_density(pdf: TabulatedFunction, config: &Config) -> Result<Self> {
        Ok(Self {
            distribution: TabulatedDistribution::from_density(pdf, config)?,
        })
    }

    /// Cosine grid of the density
    pub fn cosines(&self) -> &[f64] {
        self.distribution.pdf().x()
    }

    /// Density values
    pub fn values(&self) -> &[f64] {
        self.distribution.pdf().y()
    }

    /// The probability density
    pub fn pdf(&self) -> &TabulatedFunction {
        self.distribution.pdf()
    }

    /// The cumulative table, if one was supplied or calculated
    pub fn cdf(&self) -> Option<&TabulatedFunction> {
        self.distribution.cdf()
    }

    /// Density at the given point
    pub fn value(&self, cosine: f64) -> Result<f64> {
        self.distribution.value(cosine)
    }

    /// A copy whose density integrates to one
    pub fn normalised(&self) -> Result<Self> {
        Ok(Self {
            distribution: self.distribution.normalised()?,
        })
    }

    /// A normalised copy with its cumulative table calculated
    pub fn with_calculated_cdf(&self) -> Result<Self> {
        Ok(Self {
            distribution: self.distribution.with_calculated_cdf()?,
        })
    }

    /// Average cosine of the density
    pub fn average_cosine(&self) -> Result<f64> {
        self.distribution.mean()
    }
}

/// Density of the outgoing energy
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedEnergyDistribution {
    distribution: TabulatedDistribution,
}

impl TabulatedEnergyDistribution {
    /// Create the distribution from density values and their interpolation regions
    pub fn new(
        energies: Vec<f64>,
        values: Vec<f64>,
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Result<Self> {
        let pdf = TabulatedFunction::new(energies, values, boundaries, interpolants)?;
        Ok(Self::from_pdf(pdf))
    }

    /// Wrap an existing density without normalising it
    pub fn from_pdf(pdf: TabulatedFunction) -> Self {
        Self {
            distribution: TabulatedDistribution::new(pdf),
        }
    }

    /// Create the distribution with a supplied cumulative table on the same grid
    pub fn with_cdf(pdf: TabulatedFunction, cdf: TabulatedFunction) -> Result<Self> {
        Ok(Self {
            distribution: TabulatedDistribution::with_cdf(pdf, cdf)?,
        })
    }

    /// Build from raw exchange-format data (see [`TabulatedDistribution::from_density`])
    pub fn from_density(pdf: TabulatedFunction, config: &Config) -> Result<Self> {
        Ok(Self {
            distribution: TabulatedDistribution::from_density(pdf, config)?,
        })
    }

    /// Outgoing energy grid of the density
    pub fn energies(&self) -> &[f64] {
        self.distribution.pdf().x()
    }

    /// Density values
    pub fn values(&self) -> &[f64] {
        self.distribution.pdf().y()
    }

    /// The probability density
    pub fn pdf(&self) -> &TabulatedFunction {
        self.distribution.pdf()
    }

    /// The cumulative table, if one was supplied or calculated
    pub fn cdf(&self) -> Option<&TabulatedFunction> {
        self.distribution.cdf()
    }

    /// Density at the given point
    pub fn value(&self, energy: f64) -> Result<f64> {
        self.distribution.value(energy)
    }

    /// A copy whose density integrates to one
    pub fn normalised(&self) -> Result<Self> {
        Ok(Self {
            distribution: self.distribution.normalised()?,
        })
    }

    /// A normalised copy with its cumulative table calculated
    pub fn with_calculated_cdf(&self) -> Result<Self> {
        Ok(Self {
            distribution: self.distribution.with_calculated_cdf()?,
        })
    }

    /// Average outgoing energy of the density
    pub fn average_energy(&self) -> Result<f64> {
        self.distribution.mean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn isotropic() -> TabulatedAngularDistribution {
        TabulatedAngularDistribution::new(
            vec![-1.0, 1.0],
            vec![0.5, 0.5],
            vec![1],
            vec![InterpolationType::LinearLinear],
        )
        .unwrap()
    }

    #[test]
    fn test_cdf_absent_until_calculated() {
        let angular = isotropic();
        assert!(angular.cdf().is_none());
        let with_cdf = angular.with_calculated_cdf().unwrap();
        let cdf = with_cdf.cdf().unwrap();
        assert_eq!(cdf.y(), &[0.0, 1.0]);
        assert_eq!(with_cdf.pdf(), angular.pdf());
        // the original is untouched
        assert!(angular.cdf().is_none());
    }

    #[test]
    fn test_supplied_cdf_must_share_grid() {
        let pdf = TabulatedFunction::from_linear(vec![-1.0, 1.0], vec![0.5, 0.5]).unwrap();
        let cdf =
            TabulatedFunction::from_linear(vec![-1.0, 0.0, 1.0], vec![0.0, 0.5, 1.0]).unwrap();
        assert!(matches!(
            TabulatedAngularDistribution::with_cdf(pdf.clone(), cdf),
            Err(Error::InvalidDistribution(_))
        ));
        let cdf = TabulatedFunction::from_linear(vec![-1.0, 1.0], vec![0.0, 1.0]).unwrap();
        assert!(TabulatedAngularDistribution::with_cdf(pdf, cdf).is_ok());
    }

    #[test]
    fn test_average_cosine() {
        assert_relative_eq!(isotropic().average_cosine().unwrap(), 0.0);

        // p(mu) = (1 + mu) / 2 has mean 1/3
        let forward = TabulatedAngularDistribution::new(
            vec![-1.0, 1.0],
            vec![0.0, 1.0],
            vec![1],
            vec![InterpolationType::LinearLinear],
        )
        .unwrap();
        assert_relative_eq!(forward.average_cosine().unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_average_energy_of_unnormalised_density() {
        let energy = TabulatedEnergyDistribution::new(
            vec![0.0, 2.0],
            vec![3.0, 3.0],
            vec![1],
            vec![InterpolationType::LinearLinear],
        )
        .unwrap();
        assert_relative_eq!(energy.average_energy().unwrap(), 1.0);
        assert_eq!(energy.energies(), &[0.0, 2.0]);
    }

    #[test]
    fn test_from_density_follows_config() {
        let raw = TabulatedFunction::from_linear(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 1.0]).unwrap();

        let normalised =
            TabulatedEnergyDistribution::from_density(raw.clone(), &Config::default()).unwrap();
        assert_relative_eq!(normalised.pdf().integral().unwrap(), 1.0);

        let config = Config {
            normalise: false,
            ..Config::default()
        };
        let kept = TabulatedEnergyDistribution::from_density(raw.clone(), &config).unwrap();
        assert_eq!(kept.pdf(), &raw);
    }

    #[test]
    fn test_from_density_far_from_unity_is_still_normalised() {
        // integrates to 250, well outside the warning threshold
        let raw = TabulatedFunction::from_linear(vec![0.0, 10.0], vec![25.0, 25.0]).unwrap();
        let config = Config {
            normalisation_warning: 1e-6,
            ..Config::default()
        };
        let energy = TabulatedEnergyDistribution::from_density(raw, &config).unwrap();
        assert_relative_eq!(energy.pdf().integral().unwrap(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(energy.values()[0], 0.1, max_relative = 1e-12);
        assert_relative_eq!(energy.average_energy().unwrap(), 5.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mean_rejects_diverging_integral() {
        let pdf = TabulatedFunction::from_linear(vec![0.0, 1e300], vec![1e300, 1e300]).unwrap();
        let energy = TabulatedEnergyDistribution::from_pdf(pdf);
        assert!(matches!(energy.average_energy(), Err(Error::InvalidDistribution(_))));
    }

    #[test]
    fn test_normalised_recomputes_existing_cdf() {
        let pdf = TabulatedFunction::from_linear(vec![0.0, 1.0], vec![2.0, 2.0]).unwrap();
        let cdf = TabulatedFunction::from_linear(vec![0.0, 1.0], vec![0.0, 2.0]).unwrap();
        let energy = TabulatedEnergyDistribution::with_cdf(pdf, cdf).unwrap();
        let normalised = energy.normalised().unwrap();
        assert_eq!(normalised.values(), &[1.0, 1.0]);
        assert_eq!(normalised.cdf().unwrap().y(), &[0.0, 1.0]);

        let without = TabulatedEnergyDistribution::from_pdf(
            TabulatedFunction::from_linear(vec![0.0, 1.0], vec![2.0, 2.0]).unwrap(),
        );
        assert!(without.normalised().unwrap().cdf().is_none());
    }
}
