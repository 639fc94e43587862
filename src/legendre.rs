// Angular distributions given as Legendre series

use crate::error::{Error, Result};
use crate::linearisation::{linearise_panel, LinearisationTolerance};
use crate::tabulated_distribution::TabulatedAngularDistribution;
use crate::tabulated_function::TabulatedFunction;
use crate::utilities::verify_in_domain;

/// Angular distribution f(mu) = sum over l of (2l + 1)/2 * a_l * P_l(mu).
///
/// With this convention the integral over [-1, 1] is a_0 and the average
/// cosine is a_1 / a_0.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreAngularDistribution {
    coefficients: Vec<f64>,
}

impl LegendreAngularDistribution {
    /// Create a Legendre distribution from its coefficients a_0 ... a_n.
    ///
    /// At least one coefficient is required and a_0 must be positive.
    pub fn new(coefficients: Vec<f64>) -> Result<Self> {
        match coefficients.first() {
            None => Err(Error::InvalidDistribution(
                "a Legendre distribution needs at least one coefficient".to_string(),
            )),
            Some(&a0) if !(a0 > 0.0) => Err(Error::InvalidDistribution(format!(
                "the zeroth Legendre coefficient must be positive, found {}",
                a0
            ))),
            Some(_) => Ok(Self { coefficients }),
        }
    }

    /// Legendre coefficients a_l, starting with a_0
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Order of the series
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Lowest cosine, always -1
    pub fn lower_limit(&self) -> f64 {
        -1.0
    }

    /// Highest cosine, always 1
    pub fn upper_limit(&self) -> f64 {
        1.0
    }

    /// Integral of the distribution over [-1, 1]
    pub fn integral(&self) -> f64 {
        self.coefficients[0]
    }

    /// Average cosine, a_1 / a_0
    pub fn average_cosine(&self) -> f64 {
        match self.coefficients.get(1) {
            Some(a1) => a1 / self.coefficients[0],
            None => 0.0,
        }
    }

    /// Evaluate the series at `cosine`
    pub fn value(&self, cosine: f64) -> Result<f64> {
        verify_in_domain(cosine, -1.0, 1.0)?;
        let mut previous = 1.0;
        let mut current = cosine;
        let mut sum = 0.5 * self.coefficients[0];
        for (l, a) in self.coefficients.iter().enumerate().skip(1) {
            if l > 1 {
                let n = (l - 1) as f64;
                let next = ((2.0 * n + 1.0) * cosine * current - n * previous) / (n + 1.0);
                previous = current;
                current = next;
            }
            sum += 0.5 * (2 * l + 1) as f64 * a * current;
        }
        Ok(sum)
    }

    /// A copy whose coefficients are divided by a_0
    pub fn normalised(&self) -> Self {
        let a0 = self.coefficients[0];
        Self {
            coefficients: self.coefficients.iter().map(|a| a / a0).collect(),
        }
    }

    /// Tabulate the series as a linear-linear angular density
    pub fn linearise(
        &self,
        tolerance: &LinearisationTolerance,
    ) -> Result<TabulatedAngularDistribution> {
        // start from several panels so that odd terms cannot hide behind a
        // symmetric midpoint
        let panels = (2 * self.order()).max(2);
        let f = |mu: f64| self.value(mu);
        let mut xs = vec![-1.0];
        let mut ys = vec![f(-1.0)?];
        for i in 1..=panels {
            let x0 = xs[xs.len() - 1];
            let y0 = ys[ys.len() - 1];
            let x1 = if i == panels {
                1.0
            } else {
                -1.0 + 2.0 * i as f64 / panels as f64
            };
            let y1 = f(x1)?;
            linearise_panel(x0, y0, x1, y1, &f, tolerance, &mut xs, &mut ys)?;
        }
        log::trace!(
            "linearised Legendre series of order {} into {} points",
            self.order(),
            xs.len()
        );
        Ok(TabulatedAngularDistribution::from_pdf(
            TabulatedFunction::from_linear(xs, ys)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_isotropic_series() {
        let legendre = LegendreAngularDistribution::new(vec![1.0]).unwrap();
        assert_eq!(legendre.order(), 0);
        assert_eq!(legendre.value(0.3).unwrap(), 0.5);
        assert_eq!(legendre.average_cosine(), 0.0);
    }

    #[test]
    fn test_value_matches_polynomials() {
        let legendre = LegendreAngularDistribution::new(vec![1.0, 0.2, 0.1, 0.05]).unwrap();
        let mu: f64 = 0.4;
        let p2 = 0.5 * (3.0 * mu * mu - 1.0);
        let p3 = 0.5 * (5.0 * mu.powi(3) - 3.0 * mu);
        let expected = 0.5 + 1.5 * 0.2 * mu + 2.5 * 0.1 * p2 + 3.5 * 0.05 * p3;
        assert_relative_eq!(legendre.value(mu).unwrap(), expected, max_relative = 1e-14);
        assert!(matches!(legendre.value(1.5), Err(Error::OutOfDomain { .. })));
    }

    #[test]
    fn test_average_cosine_and_normalisation() {
        let legendre = LegendreAngularDistribution::new(vec![2.0, 0.5]).unwrap();
        assert_eq!(legendre.integral(), 2.0);
        assert_relative_eq!(legendre.average_cosine(), 0.25);
        let normalised = legendre.normalised();
        assert_eq!(normalised.coefficients(), &[1.0, 0.25]);
        assert_relative_eq!(normalised.average_cosine(), 0.25);
    }

    #[test]
    fn test_invalid_coefficients() {
        assert!(matches!(
            LegendreAngularDistribution::new(vec![]),
            Err(Error::InvalidDistribution(_))
        ));
        assert!(matches!(
            LegendreAngularDistribution::new(vec![0.0, 0.5]),
            Err(Error::InvalidDistribution(_))
        ));
    }

    #[test]
    fn test_linearise_odd_series() {
        let legendre = LegendreAngularDistribution::new(vec![1.0, 0.0, 0.0, 0.2]).unwrap();
        let tolerance = LinearisationTolerance {
            relative: 1e-4,
            absolute: 1e-8,
            max_depth: 30,
        };
        let tabulated = legendre.linearise(&tolerance).unwrap();
        assert_eq!(tabulated.cosines()[0], -1.0);
        assert_eq!(*tabulated.cosines().last().unwrap(), 1.0);
        assert!(tabulated.pdf().is_linearised());
        assert_relative_eq!(tabulated.pdf().integral().unwrap(), 1.0, max_relative = 1e-3);
        for &mu in &[-0.9, -0.3, 0.1, 0.77] {
            assert_relative_eq!(
                tabulated.value(mu).unwrap(),
                legendre.value(mu).unwrap(),
                max_relative = 1e-3
            );
        }
    }
}
