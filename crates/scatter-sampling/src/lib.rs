#![warn(missing_docs)]
#![doc = "Scatters integer 2D points inside a rectangular region so that every"]
#![doc = "pair stays farther apart than a minimum distance."]
#![doc = ""]
#![doc = "Points are produced by rejection sampling: candidates are drawn uniformly"]
#![doc = "and discarded while they sit too close to an already accepted point."]

pub mod error;
pub mod point;
pub mod sampler;

pub use error::SamplingError;
pub use point::{Point, PointSet, Region};
pub use sampler::{DEFAULT_MAX_ATTEMPTS, PointSampler, generate};
