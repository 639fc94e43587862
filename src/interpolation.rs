// Interpolation laws for tabulated data
// Integer codes follow the ENDF convention used by the columnar exchange format

use crate::error::{Error, Result};

/// Interpolation law governing one region of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationType {
    /// y is constant (equal to y0) across the panel
    Histogram = 1,
    /// y is linear in x
    LinearLinear = 2,
    /// y is linear in ln(x)
    LinearLog = 3,
    /// ln(y) is linear in x
    LogLinear = 4,
    /// ln(y) is linear in ln(x)
    LogLog = 5,
    /// charged-particle penetrability law, y = (a/x) exp(-b/sqrt(x))
    ChargedParticle = 6,
}

impl InterpolationType {
    /// The integer law code used by the exchange formats
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Interpolate between (x0, y0) and (x1, y1) at x, with x in [x0, x1].
    ///
    /// Log-based laws fail with [`Error::DomainError`] when a coordinate they
    /// take the logarithm of is not strictly positive, or when the panel has
    /// zero width and the law needs the logarithm of its span.
    pub fn interpolate(self, x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> Result<f64> {
        match self {
            InterpolationType::Histogram => Ok(y0),
            InterpolationType::LinearLinear => {
                if x1 == x0 {
                    return Ok(y0);
                }
                Ok(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
            }
            InterpolationType::LinearLog => {
                require_positive(self, "x", &[x0, x1, x])?;
                let span = log_span(self, x0, x1)?;
                Ok(y0 + (y1 - y0) * (x / x0).ln() / span)
            }
            InterpolationType::LogLinear => {
                require_positive(self, "y", &[y0, y1])?;
                if x1 == x0 {
                    return Ok(y0);
                }
                Ok(y0 * ((y1 / y0).ln() * (x - x0) / (x1 - x0)).exp())
            }
            InterpolationType::LogLog => {
                require_positive(self, "x", &[x0, x1, x])?;
                require_positive(self, "y", &[y0, y1])?;
                let span = log_span(self, x0, x1)?;
                Ok(y0 * ((y1 / y0).ln() * (x / x0).ln() / span).exp())
            }
            InterpolationType::ChargedParticle => {
                let (a, b) = charged_particle_parameters(x0, y0, x1, y1)?;
                require_positive(self, "x", &[x])?;
                Ok(a / x * (-b / x.sqrt()).exp())
            }
        }
    }

    /// Integral of the interpolated function over the panel [x0, x1].
    ///
    /// Closed forms are used for every law except the charged-particle law,
    /// which is integrated by Gauss-Legendre quadrature. A zero-width panel
    /// integrates to zero.
    pub fn integrate(self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<f64> {
        if x1 == x0 {
            return Ok(0.0);
        }
        let dx = x1 - x0;
        match self {
            InterpolationType::Histogram => Ok(y0 * dx),
            InterpolationType::LinearLinear => Ok(0.5 * (y0 + y1) * dx),
            InterpolationType::LinearLog => {
                require_positive(self, "x", &[x0, x1])?;
                let span = (x1 / x0).ln();
                Ok(y0 * dx + (y1 - y0) * (x1 * span - dx) / span)
            }
            InterpolationType::LogLinear => {
                require_positive(self, "y", &[y0, y1])?;
                Ok(y0 * dx * exp_m1_ratio((y1 / y0).ln()))
            }
            InterpolationType::LogLog => {
                require_positive(self, "x", &[x0, x1])?;
                require_positive(self, "y", &[y0, y1])?;
                // with y = y0 (x/x0)^k and t = (k + 1) ln(x1/x0), the integral is
                // y0 x0 ln(x1/x0) (exp(t) - 1) / t
                let span = (x1 / x0).ln();
                let t = ((x1 * y1) / (x0 * y0)).ln();
                Ok(y0 * x0 * span * exp_m1_ratio(t))
            }
            InterpolationType::ChargedParticle => {
                charged_particle_parameters(x0, y0, x1, y1)?;
                gauss_legendre(x0, x1, |x| self.interpolate(x0, y0, x1, y1, x))
            }
        }
    }

    /// First moment (integral of x * y) of the interpolated function over
    /// the panel [x0, x1].
    pub fn first_moment(self, x0: f64, y0: f64, x1: f64, y1: f64) -> Result<f64> {
        if x1 == x0 {
            return Ok(0.0);
        }
        match self {
            InterpolationType::Histogram => Ok(0.5 * y0 * (x1 * x1 - x0 * x0)),
            InterpolationType::LinearLinear => {
                Ok((x1 - x0) / 6.0 * (x0 * (2.0 * y0 + y1) + x1 * (y0 + 2.0 * y1)))
            }
            _ => gauss_legendre(x0, x1, |x| Ok(x * self.interpolate(x0, y0, x1, y1, x)?)),
        }
    }
}

impl TryFrom<i32> for InterpolationType {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            1 => Ok(InterpolationType::Histogram),
            2 => Ok(InterpolationType::LinearLinear),
            3 => Ok(InterpolationType::LinearLog),
            4 => Ok(InterpolationType::LogLinear),
            5 => Ok(InterpolationType::LogLog),
            6 => Ok(InterpolationType::ChargedParticle),
            _ => Err(Error::InvalidTable(format!(
                "unknown interpolation law code {}",
                code
            ))),
        }
    }
}

impl std::fmt::Display for InterpolationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InterpolationType::Histogram => "histogram",
            InterpolationType::LinearLinear => "linear-linear",
            InterpolationType::LinearLog => "linear-log",
            InterpolationType::LogLinear => "log-linear",
            InterpolationType::LogLog => "log-log",
            InterpolationType::ChargedParticle => "charged-particle",
        };
        f.write_str(name)
    }
}

fn require_positive(law: InterpolationType, axis: &str, values: &[f64]) -> Result<()> {
    match values.iter().find(|&&v| !(v > 0.0)) {
        Some(v) => Err(Error::DomainError(format!(
            "{} interpolation requires positive {} values, got {}",
            law, axis, v
        ))),
        None => Ok(()),
    }
}

/// (exp(t) - 1) / t, without cancellation for small t
fn exp_m1_ratio(t: f64) -> f64 {
    if t.abs() < 1e-15 {
        1.0 + 0.5 * t
    } else {
        t.exp_m1() / t
    }
}

fn log_span(law: InterpolationType, x0: f64, x1: f64) -> Result<f64> {
    if x1 == x0 {
        return Err(Error::DomainError(format!(
            "{} interpolation over a zero-width panel at x = {}",
            law, x0
        )));
    }
    Ok((x1 / x0).ln())
}

/// Parameters (a, b) of y = (a/x) exp(-b/sqrt(x)) through both nodes
fn charged_particle_parameters(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<(f64, f64)> {
    let law = InterpolationType::ChargedParticle;
    require_positive(law, "x", &[x0, x1])?;
    require_positive(law, "y", &[y0, y1])?;
    if x1 == x0 {
        return Err(Error::DomainError(format!(
            "{} interpolation over a zero-width panel at x = {}",
            law, x0
        )));
    }
    let b = ((x1 * y1) / (x0 * y0)).ln() / (1.0 / x0.sqrt() - 1.0 / x1.sqrt());
    let a = (b / x0.sqrt()).exp() * x0 * y0;
    Ok((a, b))
}

// 8-point Gauss-Legendre nodes and weights on [-1, 1]
const GL_NODES: [f64; 8] = [
    -0.960_289_856_497_536_2,
    -0.796_666_477_413_626_7,
    -0.525_532_409_916_329_0,
    -0.183_434_642_495_649_8,
    0.183_434_642_495_649_8,
    0.525_532_409_916_329_0,
    0.796_666_477_413_626_7,
    0.960_289_856_497_536_2,
];
const GL_WEIGHTS: [f64; 8] = [
    0.101_228_536_290_376_3,
    0.222_381_034_453_374_5,
    0.313_706_645_877_887_3,
    0.362_683_783_378_362_0,
    0.362_683_783_378_362_0,
    0.313_706_645_877_887_3,
    0.222_381_034_453_374_5,
    0.101_228_536_290_376_3,
];
const GL_SUBPANELS: usize = 16;

/// Composite Gauss-Legendre quadrature of `f` over [a, b]
pub(crate) fn gauss_legendre<F>(a: f64, b: f64, f: F) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let width = (b - a) / GL_SUBPANELS as f64;
    let mut sum = 0.0;
    for panel in 0..GL_SUBPANELS {
        let lower = a + panel as f64 * width;
        let mid = lower + 0.5 * width;
        for (node, weight) in GL_NODES.iter().zip(GL_WEIGHTS.iter()) {
            sum += weight * f(mid + 0.5 * width * node)?;
        }
    }
    Ok(0.5 * width * sum)
}
