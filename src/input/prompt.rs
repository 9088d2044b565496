use std::io::{self, Write};

use crate::input::pollutants::{Pollutant, Readings};

/// Interprets one line of user entry for a pollutant: empty keeps the default,
/// a number is forced onto the pollutant's scale, anything else is rejected.
pub fn parse_entry(pollutant: Pollutant, raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(pollutant.default_value());
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| pollutant.clamp(v))
}

fn read_reading(pollutant: Pollutant) -> f64 {
    let (lo, hi) = pollutant.range();
    loop {
        print!(
            "{} ({}) [{}-{}, default {}]: ",
            pollutant.label(),
            pollutant.unit(),
            lo,
            hi,
            pollutant.default_value()
        );
        io::stdout().flush().unwrap();

        let mut input = String::new();
        io::stdin().read_line(&mut input).expect("Failed to read input");

        match parse_entry(pollutant, &input) {
            Some(value) => return value,
            None => println!("Please enter a valid number"),
        }
    }
}

/// Prompts for all seven readings in canonical order.
pub fn collect_readings() -> Readings {
    let mut readings = Readings::default();
    for pollutant in Pollutant::CANONICAL_ORDER {
        readings.set(pollutant, read_reading(pollutant));
    }
    readings
}

/// Yes/no prompt, defaulting to no.
pub fn confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).expect("Failed to read input");
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_takes_the_default() {
        assert_eq!(parse_entry(Pollutant::Pm25, "\n"), Some(60.0));
        assert_eq!(parse_entry(Pollutant::Co, "  "), Some(2.0));
    }

    #[test]
    fn numeric_entry_is_forced_onto_the_scale() {
        assert_eq!(parse_entry(Pollutant::Pm25, "750"), Some(500.0));
        assert_eq!(parse_entry(Pollutant::Pm25, "3.7"), Some(4.0));
        assert_eq!(parse_entry(Pollutant::Co, "3.7"), Some(3.7));
        assert_eq!(parse_entry(Pollutant::So2, "-12"), Some(0.0));
    }

    #[test]
    fn garbage_entry_is_rejected() {
        assert_eq!(parse_entry(Pollutant::O3, "abc"), None);
        assert_eq!(parse_entry(Pollutant::O3, "12,5"), None);
        assert_eq!(parse_entry(Pollutant::O3, "inf"), None);
        assert_eq!(parse_entry(Pollutant::O3, "NaN"), None);
    }
}
