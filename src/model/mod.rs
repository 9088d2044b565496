pub mod io;
pub mod layers;
pub mod network;
pub mod stats;

pub use io::{load_model, save_model};
pub use network::{RegressionNetwork, TrainedModel};
pub use stats::FeatureStats;
