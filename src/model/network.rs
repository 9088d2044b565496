use ndarray::{arr2, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::input::FeatureVector;
use crate::model::layers::relu;
use crate::model::stats::FeatureStats;

/// Feed-forward regressor over the seven pollutant features: three relu hidden
/// layers and a linear scalar output head.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegressionNetwork {
    pub weights1: Array2<f64>,
    pub bias1: Array2<f64>,
    pub weights2: Array2<f64>,
    pub bias2: Array2<f64>,
    pub weights3: Array2<f64>,
    pub bias3: Array2<f64>,
    pub weights4: Array2<f64>,
    pub bias4: Array2<f64>,
}

impl RegressionNetwork {
    pub fn forward(&self, x: &Array2<f64>) -> Array2<f64> {
        let hidden_output1 = relu(&(x.dot(&self.weights1) + &self.bias1));
        let hidden_output2 = relu(&(hidden_output1.dot(&self.weights2) + &self.bias2));
        let hidden_output3 = relu(&(hidden_output2.dot(&self.weights3) + &self.bias3));

        // Linear output head: the predicted index is unbounded by construction.
        hidden_output3.dot(&self.weights4) + &self.bias4
    }
}

/// The model artifact payload: network weights plus the normalization stats the
/// training run produced. Loaded once at startup and never mutated afterwards.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainedModel {
    pub network: RegressionNetwork,
    pub stats: FeatureStats,
}

impl TrainedModel {
    /// Predicts the AQI score for one feature vector.
    ///
    /// Deterministic and side-effect-free for a fixed model. The returned score
    /// is whatever the network produces; no bounds are enforced here, degenerate
    /// values flow through to the classifier unchanged.
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let input = arr2(&[features.to_array()]);

        let mean = self.stats.mean.view().insert_axis(Axis(0));
        let std = self.stats.std.view().insert_axis(Axis(0));
        let input_normalized = (&input - &mean) / &std;

        let output = self.network.forward(&input_normalized);
        output[[0, 0]]
    }
}
