pub mod pollutants;
pub mod prompt;

pub use pollutants::{FeatureVector, Pollutant, Readings, FEATURE_COUNT};
