use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

use crate::error::{AppError, Result};

/// Formats an instant as display text from a strftime pattern.
///
/// The pattern is parsed once at construction; a pattern the formatting
/// engine rejects never produces a formatter. Formatting itself is a pure
/// function of the pattern and the instant.
pub struct ClockFormatter {
    pattern: String,
    items: Vec<Item<'static>>,
}

impl ClockFormatter {
    pub fn new(pattern: &str) -> Result<Self> {
        let items = StrftimeItems::new(pattern)
            .parse_to_owned()
            .map_err(|_| AppError::format(pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            items,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, instant: DateTime<Local>) -> String {
        instant.format_with_items(self.items.iter()).to_string()
    }
}
