// Uniform distributions over discrete values or equiprobable intervals

use crate::error::{Error, Result};

/// How the values of a uniform distribution are to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniformDistributionType {
    /// every value is an equally probable outcome
    Discrete,
    /// consecutive values bound equally probable intervals
    Interval,
}

/// A distribution giving equal weight to a set of values or intervals.
///
/// The values are kept as given, they do not need to be sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformDistribution {
    kind: UniformDistributionType,
    values: Vec<f64>,
}

impl UniformDistribution {
    /// Create a uniform distribution.
    ///
    /// A discrete distribution needs at least one value, an interval
    /// distribution at least two.
    pub fn new(values: Vec<f64>, kind: UniformDistributionType) -> Result<Self> {
        let required = match kind {
            UniformDistributionType::Discrete => 1,
            UniformDistributionType::Interval => 2,
        };
        if values.len() < required {
            return Err(Error::InvalidDistribution(format!(
                "a {:?} uniform distribution needs at least {} values, found {}",
                kind,
                required,
                values.len()
            )));
        }
        Ok(Self { kind, values })
    }

    /// Whether the values are discrete outcomes or interval bounds
    pub fn kind(&self) -> UniformDistributionType {
        self.kind
    }

    /// The values, in ascending order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of equally probable outcomes (values or intervals)
    pub fn number_values(&self) -> usize {
        match self.kind {
            UniformDistributionType::Discrete => self.values.len(),
            UniformDistributionType::Interval => self.values.len() - 1,
        }
    }

    /// Mean of the distribution.
    ///
    /// For intervals every bin contributes its midpoint, so interior values
    /// are counted twice at half weight and the end points once at half weight.
    pub fn mean(&self) -> f64 {
        let sum: f64 = self.values.iter().sum();
        match self.kind {
            UniformDistributionType::Discrete => sum / self.values.len() as f64,
            UniformDistributionType::Interval => {
                let first = self.values[0];
                let last = self.values[self.values.len() - 1];
                (sum - 0.5 * (first + last)) / self.number_values() as f64
            }
        }
    }
}

/// Uniform distribution of the cosine of the scattering angle
#[derive(Debug, Clone, PartialEq)]
pub struct UniformAngularDistribution {
    distribution: UniformDistribution,
}

impl UniformAngularDistribution {
    /// Create the distribution from cosine values
    pub fn new(cosines: Vec<f64>, kind: UniformDistributionType) -> Result<Self> {
        Ok(Self {
            distribution: UniformDistribution::new(cosines, kind)?,
        })
    }

    /// Whether the values are discrete outcomes or interval bounds
    pub fn kind(&self) -> UniformDistributionType {
        self.distribution.kind()
    }

    /// The cosine values
    pub fn cosines(&self) -> &[f64] {
        self.distribution.values()
    }

    /// Number of equally probable outcomes
    pub fn number_cosines(&self) -> usize {
        self.distribution.number_values()
    }

    /// Average cosine
    pub fn average_cosine(&self) -> f64 {
        self.distribution.mean()
    }
}
