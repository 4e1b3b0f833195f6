//! Temperature sparkline for the console summary

use crate::data::HourlyRecord;

/// Block characters for different temperature levels (8 levels)
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One character per hour, scaled between the day's min and max
pub struct TemperatureSparkline<'a> {
    records: &'a [HourlyRecord],
    min: f64,
    max: f64,
}

impl<'a> TemperatureSparkline<'a> {
    pub fn new(records: &'a [HourlyRecord], min: f64, max: f64) -> Self {
        Self { records, min, max }
    }

    fn temp_to_block(&self, temp: f64) -> char {
        let span = self.max - self.min;
        if span.is_nan() || span <= 0.0 {
            return BLOCKS[3];
        }
        let normalized = ((temp - self.min) / span).clamp(0.0, 1.0);
        let index = ((normalized * 7.0).round() as usize).min(7);
        BLOCKS[index]
    }

    /// Renders the sparkline; hours missing from `records` show as a space
    pub fn render(&self) -> String {
        let mut line = vec![' '; 24];
        for record in self.records {
            if let Some(slot) = line.get_mut(record.hour as usize) {
                *slot = self.temp_to_block(record.temp);
            }
        }
        line.into_iter().collect()
    }
}
