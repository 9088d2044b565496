use log::info;

use crate::aqi::{self, Category};
use crate::input::Readings;
use crate::model::TrainedModel;

/// One finished pipeline run: the raw score plus everything derived from it.
#[derive(Debug)]
pub struct PredictionReport {
    pub score: f64,
    pub category: Category,
    pub progress: i64,
}

/// Runs the full pipeline for one user action: project the readings into the
/// canonical feature vector, predict, classify.
pub fn run_prediction(model: &TrainedModel, readings: &Readings) -> PredictionReport {
    let features = readings.feature_vector();
    let score = model.predict(&features);
    let category = Category::classify(score);
    info!("predicted AQI {:.2} -> {}", score, category);

    PredictionReport {
        score,
        category,
        progress: aqi::progress(score),
    }
}

impl PredictionReport {
    pub fn display(&self) {
        println!();
        println!("{} Predicted AQI: {:.2}", self.category.face(), self.score);
        println!(
            "{} Air quality category: {}",
            self.category.badge(),
            self.category.name()
        );
        println!("   {}", progress_bar(self.progress));
    }
}

const BAR_WIDTH: i64 = 25;

/// Renders the saturating progress value as a fixed-width text bar. The bar
/// itself never underflows, but a negative progress value is printed as-is.
fn progress_bar(progress: i64) -> String {
    let filled = (progress.clamp(0, 100) * BAR_WIDTH / 100) as usize;
    format!(
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH as usize - filled),
        progress
    )
}

pub fn print_reference_table() {
    println!("\nAQI reference:");
    println!("  {:<10} {:<11} Color", "Range", "Category");
    for category in Category::ALL {
        println!(
            "  {:<10} {:<11} {} {}",
            category.range_label(),
            category.name(),
            category.badge(),
            category.color()
        );
    }
}
