use std::process::ExitCode;

use aqi_predict::display::{print_reference_table, run_prediction};
use aqi_predict::input::prompt::{collect_readings, confirm};
use aqi_predict::model::load_model;

// The artifact is produced out-of-band by the training process.
const MODEL_PATH: &str = "aqi_model.bin";

fn main() -> ExitCode {
    env_logger::init();

    println!("🌤️  Air Quality Prediction");
    println!("Predicts the AQI from seven pollutant readings using a pre-trained model.");
    println!();

    // Loaded once, read-only for the rest of the process lifetime.
    let model = match load_model(MODEL_PATH) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Predictions are unavailable without a model artifact.");
            return ExitCode::FAILURE;
        }
    };

    loop {
        println!("Enter pollutant levels (press Enter to keep a default):");
        let readings = collect_readings();

        let report = run_prediction(&model, &readings);
        report.display();
        print_reference_table();

        if !confirm("\nRun another prediction? [y/N]: ") {
            break;
        }
        println!();
    }

    ExitCode::SUCCESS
}
