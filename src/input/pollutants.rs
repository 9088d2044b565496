/// Number of model input features; the predictor was trained on exactly seven.
pub const FEATURE_COUNT: usize = 7;

/// The seven pollutant readings the predictor takes as input.
///
/// Variant order is the canonical feature order the model was trained on;
/// do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pollutant {
    Pm25,
    Pm10,
    No,
    No2,
    Co,
    So2,
    O3,
}

impl Pollutant {
    pub const CANONICAL_ORDER: [Pollutant; FEATURE_COUNT] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No,
        Pollutant::No2,
        Pollutant::Co,
        Pollutant::So2,
        Pollutant::O3,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No => "NO",
            Pollutant::No2 => "NO₂",
            Pollutant::Co => "CO",
            Pollutant::So2 => "SO₂",
            Pollutant::O3 => "O₃",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Pollutant::Co => "mg/m³",
            _ => "μg/m³",
        }
    }

    /// Inclusive valid range for this reading.
    pub fn range(self) -> (f64, f64) {
        match self {
            Pollutant::Pm25 => (0.0, 500.0),
            Pollutant::Pm10 => (0.0, 600.0),
            Pollutant::Co => (0.0, 10.0),
            Pollutant::No | Pollutant::No2 | Pollutant::So2 | Pollutant::O3 => (0.0, 200.0),
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Pollutant::Pm25 => 60.0,
            Pollutant::Pm10 => 80.0,
            Pollutant::No => 25.0,
            Pollutant::No2 => 40.0,
            Pollutant::Co => 2.0,
            Pollutant::So2 => 15.0,
            Pollutant::O3 => 30.0,
        }
    }

    /// Only CO accepts fractional entry; the other six are whole-number scales.
    pub fn fractional(self) -> bool {
        matches!(self, Pollutant::Co)
    }

    /// Forces a raw entry onto this pollutant's scale: whole-number rounding
    /// where applicable, then clamping into range. Out-of-range readings are
    /// structurally impossible downstream of this.
    pub fn clamp(self, value: f64) -> f64 {
        let (lo, hi) = self.range();
        let value = if self.fractional() { value } else { value.round() };
        value.clamp(lo, hi)
    }
}

/// The current value of each pollutant reading. Values are always in range;
/// clamping happens on every write, never downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Readings {
    values: [f64; FEATURE_COUNT],
}

impl Default for Readings {
    fn default() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for pollutant in Pollutant::CANONICAL_ORDER {
            values[pollutant as usize] = pollutant.default_value();
        }
        Readings { values }
    }
}

impl Readings {
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        self.values[pollutant as usize]
    }

    pub fn set(&mut self, pollutant: Pollutant, value: f64) {
        self.values[pollutant as usize] = pollutant.clamp(value);
    }

    /// Projects the readings into model input order.
    pub fn feature_vector(&self) -> FeatureVector {
        FeatureVector(self.values)
    }
}

/// Ordered model input: always exactly seven values, in canonical pollutant
/// order, each within its declared range.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_readings_project_in_canonical_order() {
        let vector = Readings::default().feature_vector();
        assert_eq!(vector.as_slice(), &[60.0, 80.0, 25.0, 40.0, 2.0, 15.0, 30.0]);
    }

    #[test]
    fn writes_are_clamped_into_range() {
        let mut readings = Readings::default();

        readings.set(Pollutant::Pm25, 1000.0);
        assert_eq!(readings.get(Pollutant::Pm25), 500.0);

        readings.set(Pollutant::Pm10, -5.0);
        assert_eq!(readings.get(Pollutant::Pm10), 0.0);

        readings.set(Pollutant::Co, 12.5);
        assert_eq!(readings.get(Pollutant::Co), 10.0);
    }

    #[test]
    fn only_co_keeps_fractional_entries() {
        let mut readings = Readings::default();

        readings.set(Pollutant::Co, 3.7);
        assert_eq!(readings.get(Pollutant::Co), 3.7);

        readings.set(Pollutant::Pm10, 79.6);
        assert_eq!(readings.get(Pollutant::Pm10), 80.0);

        readings.set(Pollutant::O3, 29.4);
        assert_eq!(readings.get(Pollutant::O3), 29.0);
    }
}
