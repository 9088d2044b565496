pub mod aqi;
pub mod display;
pub mod error;
pub mod input;
pub mod model;

pub use aqi::Category;
pub use display::{run_prediction, PredictionReport};
pub use error::ModelLoadError;
pub use input::{FeatureVector, Pollutant, Readings};
pub use model::{load_model, save_model, RegressionNetwork, TrainedModel};
