//! Tabulated functions and probability distributions for nuclear reaction
//! data.
//!
//! Readers of the exchange formats build these types through their public
//! constructors. Every constructor validates its input eagerly, so a value
//! that exists is always well formed.

mod config;
mod distribution_data;
mod error;
mod grid_of_distributions;
mod interpolation;
mod legendre;
mod linearisation;
mod normalisation;
mod tabulated_distribution;
mod tabulated_function;
mod uniform_distribution;
mod utilities;

pub use config::Config;
pub use distribution_data::{
    CoherentDistributionData, DistributionData, DistributionDataType,
    IncoherentDistributionData, ReferenceFrame, TwoBodyAngularDistributions,
    TwoBodyDistributionData, UncorrelatedAngularDistributions, UncorrelatedDistributionData,
};
pub use error::{Error, Result};
pub use grid_of_distributions::{
    GridOfDistributions, LegendreAngularDistributions, TabulatedAngularDistributions,
    TabulatedEnergyDistributions, UniformAngularDistributions,
};
pub use interpolation::InterpolationType;
pub use legendre::LegendreAngularDistribution;
pub use linearisation::LinearisationTolerance;
pub use normalisation::{cumulative, normalise};
pub use tabulated_distribution::{
    TabulatedAngularDistribution, TabulatedDistribution, TabulatedEnergyDistribution,
};
pub use tabulated_function::{Region, TabulatedFunction};
pub use uniform_distribution::{
    UniformAngularDistribution, UniformDistribution, UniformDistributionType,
};
