//! Numeral formatting for the mass column.

use serde::{Deserialize, Serialize};

/// How totals are written in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassFormat {
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Fractional digits kept after rounding; trailing zeros are dropped.
    pub max_fraction_digits: usize,
    pub unit: String,
}

impl Default for MassFormat {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
            max_fraction_digits: 3,
            unit: "KG".to_string(),
        }
    }
}

impl MassFormat {
    /// Format a number with grouped thousands, without the unit.
    pub fn format_number(&self, value: f64) -> String {
        let rendered = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (integer, fraction) = match rendered.split_once('.') {
            Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
            None => (rendered.as_str(), ""),
        };

        let mut result = String::new();
        if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
            result.push('-');
        }
        let len = integer.len();
        for (i, c) in integer.chars().enumerate() {
            if i > 0 && (len - i).is_multiple_of(3) {
                result.push(self.grouping_separator);
            }
            result.push(c);
        }
        if !fraction.is_empty() {
            result.push(self.decimal_separator);
            result.push_str(fraction);
        }
        result
    }

    /// Format a total with its unit suffix, e.g. `12,500 KG`.
    pub fn format_mass(&self, value: f64) -> String {
        format!("{} {}", self.format_number(value), self.unit)
    }
}
