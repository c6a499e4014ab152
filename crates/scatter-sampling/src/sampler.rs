//! Rejection sampling of separated points.

use rand::Rng;
use tracing::{debug, trace};

use crate::error::SamplingError;
use crate::point::{Point, PointSet, Region};

/// Draws allowed per point before the sampler gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

/// Generates points uniformly inside a [`Region`], keeping every pair
/// strictly farther apart than `min_distance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSampler {
    region: Region,
    min_distance: u64,
    max_attempts: usize,
}

impl PointSampler {
    /// Creates a sampler with the default attempt budget.
    pub fn new(region: Region, min_distance: u64) -> Self {
        Self {
            region,
            min_distance,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many candidates may be drawn for a single point.
    /// The counter restarts after every accepted point.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The exclusive separation threshold.
    pub fn min_distance(&self) -> u64 {
        self.min_distance
    }

    /// Generates `count` points using the thread-local, OS-seeded RNG.
    ///
    /// # Errors
    /// See [`PointSampler::generate_with`].
    pub fn generate(&self, count: usize) -> Result<PointSet, SamplingError> {
        self.generate_with(&mut rand::rng(), count)
    }

    /// Generates `count` points drawing from `rng`.
    ///
    /// Each candidate takes `x` and `z` independently and uniformly from the
    /// inclusive region bounds. A candidate is kept only if its distance to
    /// every point accepted so far is strictly greater than the minimum
    /// distance. Points come back in acceptance order.
    ///
    /// # Errors
    /// * [`SamplingError::InvalidParameter`] if the attempt budget is zero
    ///   and at least one point is requested.
    /// * [`SamplingError::DomainTooSmall`] if a point could not be placed
    ///   within the attempt budget.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<PointSet, SamplingError> {
        if count == 0 {
            return Ok(PointSet::default());
        }
        if self.max_attempts == 0 {
            return Err(SamplingError::InvalidParameter("max_attempts must be > 0"));
        }

        let (x_min, x_max) = self.region.x_range();
        let (z_min, z_max) = self.region.z_range();
        let mut points = PointSet::with_capacity(count);

        while points.len() < count {
            let mut attempts = 0usize;
            let accepted = loop {
                if attempts >= self.max_attempts {
                    return Err(SamplingError::DomainTooSmall {
                        placed: points.len(),
                        requested: count,
                        attempts,
                    });
                }
                attempts += 1;

                let x = rng.random_range(x_min..=x_max);
                let z = rng.random_range(z_min..=z_max);
                let candidate = Point::new(x, z);
                if clears_min_distance(points.as_slice(), candidate, self.min_distance) {
                    break candidate;
                }
                trace!(x = candidate.x, z = candidate.z, "Rejected candidate");
            };

            debug!(
                index = points.len(),
                x = accepted.x,
                z = accepted.z,
                attempts,
                "Accepted point"
            );
            points.push(accepted);
        }

        Ok(points)
    }
}

/// Generates `count` points in `region`, pairwise farther apart than
/// `min_distance`, with the default attempt budget and an OS-seeded RNG.
///
/// # Errors
/// See [`PointSampler::generate_with`].
pub fn generate(count: usize, region: Region, min_distance: u64) -> Result<PointSet, SamplingError> {
    PointSampler::new(region, min_distance).generate(count)
}

/// Whether `candidate` is strictly farther than `min_distance` from every
/// point in `existing`. An empty slice accepts any candidate.
pub(crate) fn clears_min_distance(existing: &[Point], candidate: Point, min_distance: u64) -> bool {
    let min_sq = u128::from(min_distance) * u128::from(min_distance);
    existing
        .iter()
        .all(|p| p.distance_squared(&candidate) > min_sq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_set_accepts_anything() {
        assert!(clears_min_distance(&[], Point::new(0, 0), u64::MAX));
    }

    #[test]
    fn test_equal_distance_is_rejected() {
        let existing = [Point::new(0, 0)];
        assert!(!clears_min_distance(&existing, Point::new(3, 4), 5));
        assert!(clears_min_distance(&existing, Point::new(3, 5), 5));
        assert!(!clears_min_distance(&existing, Point::new(0, 0), 0));
        assert!(clears_min_distance(&existing, Point::new(0, 1), 0));
    }

    #[test]
    fn test_candidate_checked_against_every_point() {
        let existing = [Point::new(0, 0), Point::new(100, 0)];
        assert!(!clears_min_distance(&existing, Point::new(95, 0), 10));
        assert!(clears_min_distance(&existing, Point::new(50, 0), 10));
    }

    #[test]
    fn test_zero_count_returns_empty() {
        let sampler = PointSampler::new(Region::square(10), 1_000_000);
        let points = sampler.generate(0).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_single_point_within_bounds() {
        let region = Region::new(-5, 7, 100, 120).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let points = PointSampler::new(region, 50).generate_with(&mut rng, 1).unwrap();
        assert_eq!(points.len(), 1);
        assert!(region.contains(points.as_slice()[0]));
    }

    #[test]
    fn test_reference_configuration_keeps_separation() {
        let region = Region::square(10_000);
        for (seed, min_distance) in [(1u64, 2500u64), (2, 2500), (3, 3000), (4, 3000)] {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = PointSampler::new(region, min_distance)
                .generate_with(&mut rng, 23)
                .unwrap();
            assert_eq!(points.len(), 23);
            assert!(points.iter().all(|p| region.contains(*p)));
            let min_sq = points.min_pairwise_distance_squared().unwrap();
            assert!(min_sq > u128::from(min_distance * min_distance));
        }
    }

    #[test]
    fn test_infeasible_domain_gives_up() {
        let region = Region::new(0, 0, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let result = PointSampler::new(region, 1)
            .with_max_attempts(100)
            .generate_with(&mut rng, 2);
        assert_eq!(
            result,
            Err(SamplingError::DomainTooSmall {
                placed: 1,
                requested: 2,
                attempts: 100
            })
        );
    }

    #[test]
    fn test_zero_count_skips_budget_check() {
        let sampler = PointSampler::new(Region::square(10), 1).with_max_attempts(0);
        assert_eq!(sampler.generate(0), Ok(PointSet::default()));
    }

    #[test]
    fn test_zero_attempt_budget_is_invalid() {
        let sampler = PointSampler::new(Region::square(10), 1).with_max_attempts(0);
        assert!(matches!(
            sampler.generate(1),
            Err(SamplingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_same_seed_same_points() {
        let sampler = PointSampler::new(Region::square(1000), 100);
        let a = sampler.generate_with(&mut StdRng::seed_from_u64(9), 10).unwrap();
        let b = sampler.generate_with(&mut StdRng::seed_from_u64(9), 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_free_function() {
        let points = generate(5, Region::square(10_000), 2500).unwrap();
        assert_eq!(points.len(), 5);
    }
}
