// Integration tests for distributions, normalisation and projections

use approx::assert_relative_eq;
use ndtab::{
    cumulative, normalise, Config, Error, GridOfDistributions, InterpolationType,
    LegendreAngularDistribution, ReferenceFrame, TabulatedAngularDistribution,
    TabulatedEnergyDistribution, TabulatedFunction, TwoBodyDistributionData,
    UncorrelatedDistributionData, UniformAngularDistribution, UniformDistribution,
    UniformDistributionType,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn discrete(cosines: Vec<f64>) -> UniformAngularDistribution {
    UniformAngularDistribution::new(cosines, UniformDistributionType::Discrete).unwrap()
}

/// Random positive density on a positive grid, with mixed laws
fn random_density(rng: &mut StdRng) -> TabulatedFunction {
    let laws = [
        InterpolationType::Histogram,
        InterpolationType::LinearLinear,
        InterpolationType::LinearLog,
        InterpolationType::LogLinear,
        InterpolationType::LogLog,
    ];
    let n = rng.gen_range(3..60);
    let mut x = Vec::with_capacity(n);
    let mut value = rng.gen_range(1e-3..1.0);
    for _ in 0..n {
        x.push(value);
        value *= rng.gen_range(1.01..3.0);
    }
    let y = (0..n).map(|_| rng.gen_range(1e-4..1e3)).collect();
    let mut boundaries: Vec<usize> = (1..n - 1).filter(|_| rng.gen_bool(0.1)).collect();
    boundaries.push(n - 1);
    let interpolants = boundaries
        .iter()
        .map(|_| laws[rng.gen_range(0..laws.len())])
        .collect();
    TabulatedFunction::new(x, y, boundaries, interpolants).unwrap()
}

#[test]
fn test_uniform_means() {
    let discrete =
        UniformDistribution::new(vec![-0.25, 0.0, 0.55], UniformDistributionType::Discrete)
            .unwrap();
    assert_relative_eq!(discrete.mean(), 0.1, max_relative = 1e-12);

    let interval = UniformDistribution::new(
        vec![-1.0, -0.25, 0.0, 0.5, 1.0],
        UniformDistributionType::Interval,
    )
    .unwrap();
    assert_relative_eq!(interval.mean(), 0.0625, max_relative = 1e-12);
}

#[test]
fn test_end_to_end_mean_cosines() {
    let distributions = vec![
        discrete(vec![-0.5, 0.5]),
        discrete(vec![-0.2, 0.1, 0.4]),
        discrete(vec![0.25, 0.75]),
        discrete(vec![0.5, 0.8, 0.9]),
    ];
    let expected: Vec<f64> = distributions.iter().map(|d| d.average_cosine()).collect();
    let grid = GridOfDistributions::new(
        vec![1.0, 2.0, 3.0, 4.0],
        distributions,
        vec![3],
        vec![InterpolationType::LinearLinear],
    )
    .unwrap();
    assert_eq!(grid.number_points(), 4);
    assert_eq!(grid.number_regions(), 1);

    let means = grid.project(UniformAngularDistribution::average_cosine);
    assert_eq!(means.x(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(means.y(), expected.as_slice());
    assert_relative_eq!(means.y()[0], 0.0);
    assert_relative_eq!(means.y()[1], 0.1, max_relative = 1e-12);
    assert_relative_eq!(means.y()[2], 0.5);
    assert_relative_eq!(means.y()[3], 2.2 / 3.0, max_relative = 1e-12);
    assert_eq!(means, grid.average_cosines());
}

#[test]
fn test_projection_shape_preservation() {
    let grid = GridOfDistributions::new(
        vec![1.0, 2.0, 2.0, 3.0, 5.0],
        vec![
            discrete(vec![0.0]),
            discrete(vec![0.1]),
            discrete(vec![0.2]),
            discrete(vec![0.3, 0.4]),
            discrete(vec![0.5]),
        ],
        vec![1, 3, 4],
        vec![
            InterpolationType::Histogram,
            InterpolationType::LinearLinear,
            InterpolationType::LogLog,
        ],
    )
    .unwrap();
    let extractors: [fn(&UniformAngularDistribution) -> f64; 2] = [
        |d| d.average_cosine(),
        |d| d.number_cosines() as f64,
    ];
    for extractor in extractors {
        let projected = grid.project(extractor);
        assert_eq!(projected.x(), grid.grid());
        assert_eq!(projected.boundaries(), grid.boundaries());
        assert_eq!(projected.interpolants(), grid.interpolants());
    }
}

#[test]
fn test_normalisation_idempotence() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let density = random_density(&mut rng);
        let once = normalise(&density).unwrap();
        assert_relative_eq!(once.integral().unwrap(), 1.0, max_relative = 1e-9);
        let twice = normalise(&once).unwrap();
        for (a, b) in once.y().iter().zip(twice.y()) {
            assert!(
                (a - b).abs() <= 1e-6 * a.abs(),
                "renormalising changed {} into {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_slightly_unnormalised_source_data() {
    // source data typically misses unity by a few parts in 1e7
    let pdf =
        TabulatedFunction::from_linear(vec![-1.0, 1.0], vec![0.50000012, 0.50000012]).unwrap();
    let normalised = normalise(&pdf).unwrap();
    assert_relative_eq!(normalised.y()[0], 0.5, max_relative = 1e-14);
}

#[test]
fn test_cumulative_monotonicity() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let density = random_density(&mut rng);
        let cdf = cumulative(&density).unwrap();
        assert_eq!(cdf.x(), density.x());
        assert!(cdf.y().windows(2).all(|w| w[0] <= w[1]), "cdf must not decrease");
        assert_eq!(cdf.y()[0], 0.0);
        assert!((cdf.y()[cdf.number_points() - 1] - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_zero_density_is_rejected() {
    let pdf = TabulatedFunction::from_linear(vec![-1.0, 1.0], vec![0.0, 0.0]).unwrap();
    let angular = TabulatedAngularDistribution::from_pdf(pdf.clone());
    assert!(matches!(angular.normalised(), Err(Error::InvalidDistribution(_))));
    assert!(matches!(
        TabulatedAngularDistribution::from_density(pdf, &Config::default()),
        Err(Error::InvalidDistribution(_))
    ));
}

#[test]
fn test_exchange_format_density_routed_through_normalisation() {
    let config = Config::from_json_str(r#"{ "normalise": true }"#).unwrap();
    let energies = vec![0.0, 1e5, 2e5];
    let raw =
        TabulatedFunction::from_breakpoints(energies, vec![0.0, 4.0, 0.0], &[3], &[2]).unwrap();
    let spectrum = TabulatedEnergyDistribution::from_density(raw, &config)
        .unwrap()
        .with_calculated_cdf()
        .unwrap();
    assert_relative_eq!(spectrum.pdf().integral().unwrap(), 1.0, max_relative = 1e-12);
    assert_relative_eq!(spectrum.average_energy().unwrap(), 1e5, max_relative = 1e-12);
    assert_eq!(spectrum.cdf().unwrap().y(), &[0.0, 0.5, 1.0]);
}

#[test]
fn test_two_body_and_uncorrelated_records() {
    let legendre = GridOfDistributions::from_linear(
        vec![1e-5, 1e6, 2e7],
        vec![
            LegendreAngularDistribution::new(vec![1.0]).unwrap(),
            LegendreAngularDistribution::new(vec![1.0, 0.1]).unwrap(),
            LegendreAngularDistribution::new(vec![1.0, 0.4, 0.1]).unwrap(),
        ],
    )
    .unwrap();
    let two_body = TwoBodyDistributionData::new(ReferenceFrame::CentreOfMass, legendre.clone());
    let cosines = two_body.angle().average_cosines().unwrap();
    assert_relative_eq!(cosines.value(5e5).unwrap(), 0.05, max_relative = 1e-3);

    let spectrum = |e: f64| {
        TabulatedEnergyDistribution::new(
            vec![0.0, e],
            vec![2.0 / e, 0.0],
            vec![1],
            vec![InterpolationType::LinearLinear],
        )
        .unwrap()
    };
    let energy =
        GridOfDistributions::from_linear(vec![1e6, 2e7], vec![spectrum(3e5), spectrum(6e6)])
            .unwrap();
    let uncorrelated =
        UncorrelatedDistributionData::new(ReferenceFrame::Laboratory, legendre, energy);
    let average = uncorrelated.energy().average_energies().unwrap();
    assert_relative_eq!(average.y()[0], 1e5, max_relative = 1e-12);
    assert_relative_eq!(average.y()[1], 2e6, max_relative = 1e-12);
    assert!(!uncorrelated.angle().is_isotropic());
}
