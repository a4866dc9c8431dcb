//! Synthetic sample generation.
//!
//! Draws a random polynomial of the requested degree and samples it on an
//! even x grid, optionally with additive Gaussian noise. Seeded, so a given
//! spec always produces the same sample set. Useful for offline runs and
//! for exercising the sweep without a measurement endpoint.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{SampleSet, SynthSpec};
use crate::error::AppError;

/// x range the synthetic grid spans.
const X_SPAN: (f64, f64) = (-10.0, 10.0);

/// Coefficient magnitude bound for the ground-truth polynomial.
const COEFF_BOUND: f64 = 3.0;

pub fn generate_samples(spec: &SynthSpec) -> Result<SampleSet, AppError> {
    if spec.count < 2 {
        return Err(AppError::input("Synthetic sample count must be >= 2."));
    }
    if !(spec.noise_sigma.is_finite() && spec.noise_sigma >= 0.0) {
        return Err(AppError::input("Synthetic noise sigma must be >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);

    let coefficients: Vec<f64> = (0..=spec.degree)
        .map(|_| rng.gen_range(-COEFF_BOUND..COEFF_BOUND))
        .collect();
    log::info!(
        "Synthetic ground truth (degree {}): {:?}",
        spec.degree,
        coefficients
    );

    let noise = Normal::new(0.0, spec.noise_sigma)
        .map_err(|e| AppError::input(format!("Invalid noise sigma: {e}")))?;

    let (x0, x1) = X_SPAN;
    let mut xs = Vec::with_capacity(spec.count);
    let mut ys = Vec::with_capacity(spec.count);
    for i in 0..spec.count {
        let u = i as f64 / (spec.count as f64 - 1.0);
        let x = x0 + u * (x1 - x0);
        let y = crate::math::eval(&coefficients, x) + noise.sample(&mut rng);
        xs.push(x);
        ys.push(y);
    }

    SampleSet::new(xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(seed: u64) -> SynthSpec {
        SynthSpec {
            degree: 3,
            count: 50,
            noise_sigma: 0.1,
            seed,
        }
    }

    #[test]
    fn same_seed_same_samples() {
        let a = generate_samples(&spec(7)).unwrap();
        let b = generate_samples(&spec(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_samples(&spec(7)).unwrap();
        let b = generate_samples(&spec(8)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn noiseless_samples_lie_on_a_polynomial() {
        // With zero noise, a sweep including the true degree fits exactly.
        let set = generate_samples(&SynthSpec {
            degree: 2,
            count: 30,
            noise_sigma: 0.0,
            seed: 1,
        })
        .unwrap();

        let report = crate::fit::sweep_degrees(&set, 2, 3, &mut crate::fit::SilentObserver)
            .unwrap();
        assert_eq!(report.all_results[0].squared_error, 0.0);
    }

    #[test]
    fn tiny_count_is_rejected() {
        let err = generate_samples(&SynthSpec {
            degree: 1,
            count: 1,
            noise_sigma: 0.0,
            seed: 0,
        })
        .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Input);
    }
}
