// Distribution data of reaction products and scattered photons
// Each record bundles a reference frame with the tables that describe the law

use crate::error::Result;
use crate::grid_of_distributions::{
    LegendreAngularDistributions, TabulatedAngularDistributions, TabulatedEnergyDistributions,
    UniformAngularDistributions,
};
use crate::tabulated_function::TabulatedFunction;

/// Frame in which angles and energies are expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceFrame {
    Laboratory,
    CentreOfMass,
}

/// Discriminant of the distribution data kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionDataType {
    Coherent,
    Incoherent,
    TwoBody,
    Uncorrelated,
}

/// Coherent photon scattering: a scattering function (form factor) with
/// optional real and imaginary anomalous form factors.
///
/// The two anomalous parts are independent; some evaluations only carry one.
#[derive(Debug, Clone, PartialEq)]
pub struct CoherentDistributionData {
    frame: ReferenceFrame,
    scattering_function: TabulatedFunction,
    real_anomalous_form_factor: Option<TabulatedFunction>,
    imaginary_anomalous_form_factor: Option<TabulatedFunction>,
}

impl CoherentDistributionData {
    /// Kind of record, also available without an instance
    pub const TYPE: DistributionDataType = DistributionDataType::Coherent;

    /// Create the record
    pub fn new(
        frame: ReferenceFrame,
        scattering_function: TabulatedFunction,
        real_anomalous_form_factor: Option<TabulatedFunction>,
        imaginary_anomalous_form_factor: Option<TabulatedFunction>,
    ) -> Self {
        Self {
            frame,
            scattering_function,
            real_anomalous_form_factor,
            imaginary_anomalous_form_factor,
        }
    }

    /// Kind of distribution data held by this record
    pub fn data_type(&self) -> DistributionDataType {
        Self::TYPE
    }

    /// Reference frame of the data
    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Scattering function as a function of momentum transfer
    pub fn scattering_function(&self) -> &TabulatedFunction {
        &self.scattering_function
    }

    /// Real part of the anomalous form factor, if present
    pub fn real_anomalous_form_factor(&self) -> Option<&TabulatedFunction> {
        self.real_anomalous_form_factor.as_ref()
    }

    /// Imaginary part of the anomalous form factor, if present
    pub fn imaginary_anomalous_form_factor(&self) -> Option<&TabulatedFunction> {
        self.imaginary_anomalous_form_factor.as_ref()
    }

    /// Whether either anomalous form factor is present
    pub fn has_anomalous_form_factor(&self) -> bool {
        self.real_anomalous_form_factor.is_some() || self.imaginary_anomalous_form_factor.is_some()
    }
}

/// Incoherent photon scattering: an incoherent scattering function, with an
/// optional table of the average energy lost by the photon
#[derive(Debug, Clone, PartialEq)]
pub struct IncoherentDistributionData {
    frame: ReferenceFrame,
    scattering_function: TabulatedFunction,
    average_energy_loss: Option<TabulatedFunction>,
}

impl IncoherentDistributionData {
    /// Kind of record, also available without an instance
    pub const TYPE: DistributionDataType = DistributionDataType::Incoherent;

    /// Create the record
    pub fn new(frame: ReferenceFrame, scattering_function: TabulatedFunction) -> Self {
        Self {
            frame,
            scattering_function,
            average_energy_loss: None,
        }
    }

    /// Create the record with a tabulated average energy loss
    pub fn with_average_energy_loss(
        frame: ReferenceFrame,
        scattering_function: TabulatedFunction,
        average_energy_loss: TabulatedFunction,
    ) -> Self {
        Self {
            frame,
            scattering_function,
            average_energy_loss: Some(average_energy_loss),
        }
    }

    /// Kind of distribution data held by this record
    pub fn data_type(&self) -> DistributionDataType {
        Self::TYPE
    }

    /// Reference frame of the data
    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Scattering function as a function of momentum transfer
    pub fn scattering_function(&self) -> &TabulatedFunction {
        &self.scattering_function
    }

    /// Average energy loss as a function of incident energy, if present
    pub fn average_energy_loss(&self) -> Option<&TabulatedFunction> {
        self.average_energy_loss.as_ref()
    }
}

/// Angular distributions allowed for two-body emission
#[derive(Debug, Clone, PartialEq)]
pub enum TwoBodyAngularDistributions {
    Legendre(LegendreAngularDistributions),
    Tabulated(TabulatedAngularDistributions),
}

impl TwoBodyAngularDistributions {
    /// Incident energy grid of the angular distributions
    pub fn grid(&self) -> &[f64] {
        match self {
            TwoBodyAngularDistributions::Legendre(grid) => grid.grid(),
            TwoBodyAngularDistributions::Tabulated(grid) => grid.grid(),
        }
    }

    /// Number of incident energies
    pub fn number_points(&self) -> usize {
        self.grid().len()
    }

    /// Average cosine as a function of incident energy
    pub fn average_cosines(&self) -> Result<TabulatedFunction> {
        match self {
            TwoBodyAngularDistributions::Legendre(grid) => Ok(grid.average_cosines()),
            TwoBodyAngularDistributions::Tabulated(grid) => grid.average_cosines(),
        }
    }
}

impl From<LegendreAngularDistributions> for TwoBodyAngularDistributions {
    fn from(grid: LegendreAngularDistributions) -> Self {
        TwoBodyAngularDistributions::Legendre(grid)
    }
}

impl From<TabulatedAngularDistributions> for TwoBodyAngularDistributions {
    fn from(grid: TabulatedAngularDistributions) -> Self {
        TwoBodyAngularDistributions::Tabulated(grid)
    }
}

/// Two-body emission: the outgoing energy follows from kinematics, only the
/// angular distribution is given
#[derive(Debug, Clone, PartialEq)]
pub struct TwoBodyDistributionData {
    frame: ReferenceFrame,
    angle: TwoBodyAngularDistributions,
}

impl TwoBodyDistributionData {
    /// Kind of record, also available without an instance
    pub const TYPE: DistributionDataType = DistributionDataType::TwoBody;

    /// Create the record
    pub fn new(frame: ReferenceFrame, angle: impl Into<TwoBodyAngularDistributions>) -> Self {
        Self {
            frame,
            angle: angle.into(),
        }
    }

    /// Kind of distribution data held by this record
    pub fn data_type(&self) -> DistributionDataType {
        Self::TYPE
    }

    /// Reference frame of the data
    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Angular distributions as a function of incident energy
    pub fn angle(&self) -> &TwoBodyAngularDistributions {
        &self.angle
    }
}

/// Angular distributions allowed for uncorrelated emission
#[derive(Debug, Clone, PartialEq)]
pub enum UncorrelatedAngularDistributions {
    /// emission is isotropic at every incident energy
    Isotropic,
    Legendre(LegendreAngularDistributions),
    Tabulated(TabulatedAngularDistributions),
    Uniform(UniformAngularDistributions),
}

impl UncorrelatedAngularDistributions {
    /// Whether emission is isotropic at every incident energy
    pub fn is_isotropic(&self) -> bool {
        matches!(self, UncorrelatedAngularDistributions::Isotropic)
    }

    /// Average cosine as a function of incident energy, or `None` for
    /// isotropic emission which has no incident energy grid
    pub fn average_cosines(&self) -> Result<Option<TabulatedFunction>> {
        match self {
            UncorrelatedAngularDistributions::Isotropic => Ok(None),
            UncorrelatedAngularDistributions::Legendre(grid) => Ok(Some(grid.average_cosines())),
            UncorrelatedAngularDistributions::Tabulated(grid) => grid.average_cosines().map(Some),
            UncorrelatedAngularDistributions::Uniform(grid) => Ok(Some(grid.average_cosines())),
        }
    }
}

impl From<LegendreAngularDistributions> for UncorrelatedAngularDistributions {
    fn from(grid: LegendreAngularDistributions) -> Self {
        UncorrelatedAngularDistributions::Legendre(grid)
    }
}

impl From<TabulatedAngularDistributions> for UncorrelatedAngularDistributions {
    fn from(grid: TabulatedAngularDistributions) -> Self {
        UncorrelatedAngularDistributions::Tabulated(grid)
    }
}

impl From<UniformAngularDistributions> for UncorrelatedAngularDistributions {
    fn from(grid: UniformAngularDistributions) -> Self {
        UncorrelatedAngularDistributions::Uniform(grid)
    }
}

/// Uncorrelated emission: outgoing angle and energy are sampled
/// independently of each other
#[derive(Debug, Clone, PartialEq)]
pub struct UncorrelatedDistributionData {
    frame: ReferenceFrame,
    angle: UncorrelatedAngularDistributions,
    energy: TabulatedEnergyDistributions,
}

impl UncorrelatedDistributionData {
    /// Kind of record, also available without an instance
    pub const TYPE: DistributionDataType = DistributionDataType::Uncorrelated;

    /// Create the record
    pub fn new(
        frame: ReferenceFrame,
        angle: impl Into<UncorrelatedAngularDistributions>,
        energy: TabulatedEnergyDistributions,
    ) -> Self {
        Self {
            frame,
            angle: angle.into(),
            energy,
        }
    }

    /// Uncorrelated emission with isotropic angular distributions
    pub fn isotropic(frame: ReferenceFrame, energy: TabulatedEnergyDistributions) -> Self {
        Self {
            frame,
            angle: UncorrelatedAngularDistributions::Isotropic,
            energy,
        }
    }

    /// Kind of distribution data held by this record
    pub fn data_type(&self) -> DistributionDataType {
        Self::TYPE
    }

    /// Reference frame of the data
    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Angular distributions as a function of incident energy
    pub fn angle(&self) -> &UncorrelatedAngularDistributions {
        &self.angle
    }

    /// Outgoing energy distributions as a function of incident energy
    pub fn energy(&self) -> &TabulatedEnergyDistributions {
        &self.energy
    }
}

/// Any kind of distribution data
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionData {
    Coherent(CoherentDistributionData),
    Incoherent(IncoherentDistributionData),
    TwoBody(TwoBodyDistributionData),
    Uncorrelated(UncorrelatedDistributionData),
}

impl DistributionData {
    /// Kind of distribution data held by this record
    pub fn data_type(&self) -> DistributionDataType {
        match self {
            DistributionData::Coherent(data) => data.data_type(),
            DistributionData::Incoherent(data) => data.data_type(),
            DistributionData::TwoBody(data) => data.data_type(),
            DistributionData::Uncorrelated(data) => data.data_type(),
        }
    }

    /// Reference frame of the data
    pub fn frame(&self) -> ReferenceFrame {
        match self {
            DistributionData::Coherent(data) => data.frame(),
            DistributionData::Incoherent(data) => data.frame(),
            DistributionData::TwoBody(data) => data.frame(),
            DistributionData::Uncorrelated(data) => data.frame(),
        }
    }
}

impl From<CoherentDistributionData> for DistributionData {
    fn from(data: CoherentDistributionData) -> Self {
        DistributionData::Coherent(data)
    }
}

impl From<IncoherentDistributionData> for DistributionData {
    fn from(data: IncoherentDistributionData) -> Self {
        DistributionData::Incoherent(data)
    }
}

impl From<TwoBodyDistributionData> for DistributionData {
    fn from(data: TwoBodyDistributionData) -> Self {
        DistributionData::TwoBody(data)
    }
}

impl From<UncorrelatedDistributionData> for DistributionData {
    fn from(data: UncorrelatedDistributionData) -> Self {
        DistributionData::Uncorrelated(data)
    }
}
