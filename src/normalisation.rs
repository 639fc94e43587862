// Normalisation of tabulated densities and construction of cumulative tables

use crate::error::{Error, Result};
use crate::interpolation::InterpolationType;
use crate::tabulated_function::TabulatedFunction;

/// Scale a density so that its integral over the table equals one.
///
/// The integral is evaluated region by region under each region's law and
/// every value is divided by it, so normalising an already normalised table
/// only changes it by rounding.
pub fn normalise(pdf: &TabulatedFunction) -> Result<TabulatedFunction> {
    let integral = positive_integral(pdf)?;
    log::debug!(
        "normalising density over [{}, {}] with integral {}",
        pdf.lower_limit(),
        pdf.upper_limit(),
        integral
    );
    Ok(pdf.scaled(1.0 / integral))
}

/// Normalise a density, warning when the source integral is further than
/// `warning` (relative) from unity
pub(crate) fn normalise_with_warning(
    pdf: &TabulatedFunction,
    warning: f64,
) -> Result<TabulatedFunction> {
    let integral = positive_integral(pdf)?;
    if (integral - 1.0).abs() > warning {
        log::warn!(
            "density over [{}, {}] integrates to {}, renormalising",
            pdf.lower_limit(),
            pdf.upper_limit(),
            integral
        );
    }
    Ok(pdf.scaled(1.0 / integral))
}

/// Build the normalised cumulative table of a density.
///
/// The cumulative table shares the grid and boundaries of the density and is
/// linear-linear in every region. Its values are the running integral from
/// the lower limit divided by the total integral, so it starts at zero and
/// ends at exactly one.
pub fn cumulative(pdf: &TabulatedFunction) -> Result<TabulatedFunction> {
    let running = pdf.cumulative_integrals()?;
    let total = running.last().copied().unwrap_or(0.0);
    verify_positive(total)?;
    let values = running.iter().map(|sum| sum / total).collect();
    Ok(TabulatedFunction::from_validated_parts(
        pdf.x().to_vec(),
        values,
        pdf.boundaries().to_vec(),
        vec![InterpolationType::LinearLinear; pdf.number_regions()],
    ))
}

fn positive_integral(pdf: &TabulatedFunction) -> Result<f64> {
    let integral = pdf.integral()?;
    verify_positive(integral)?;
    Ok(integral)
}

/// Reject an integral that cannot normalise a density
pub(crate) fn verify_positive(integral: f64) -> Result<()> {
    if integral > 0.0 && integral.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidDistribution(format!(
            "the integral of a density must be positive, found {}",
            integral
        )))
    }
}
