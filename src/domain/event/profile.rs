//! EventProfile - the structured answers collected on the first wizard step.

use chrono::NaiveDate;

use crate::domain::foundation::ValidationError;

/// Inclusive numeric range where `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    min: u32,
    max: u32,
}

impl ValueRange {
    /// Creates a range, rejecting `min > max`.
    pub fn new(field: &str, min: u32, max: u32) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::inverted_range(field, min, max));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

/// Event profile filled in on step 1.
///
/// List-like fields (`must_haves`, `nice_to_haves`, `things_to_avoid`) hold
/// free text with one entry per line; they are split only when the profile
/// is sent to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventProfile {
    pub overview: String,
    budget: ValueRange,
    guests: ValueRange,
    pub event_date: Option<NaiveDate>,
    /// Start time as `HH:MM`, empty when not chosen.
    event_time_start: String,
    /// End time as `HH:MM`, empty when not chosen.
    event_time_end: String,
    pub must_haves: String,
    pub nice_to_haves: String,
    pub things_to_avoid: String,
    pub dietary_restrictions: String,
    pub special_needs: String,
}

impl EventProfile {
    pub const DEFAULT_BUDGET_MAX: u32 = 5000;
    pub const DEFAULT_GUESTS_MAX: u32 = 100;

    pub fn budget(&self) -> ValueRange {
        self.budget
    }

    pub fn guests(&self) -> ValueRange {
        self.guests
    }

    pub fn event_time_start(&self) -> &str {
        &self.event_time_start
    }

    pub fn event_time_end(&self) -> &str {
        &self.event_time_end
    }

    /// Sets the budget range.
    pub fn set_budget(&mut self, min: u32, max: u32) -> Result<(), ValidationError> {
        self.budget = ValueRange::new("budget", min, max)?;
        Ok(())
    }

    /// Sets the guest count range.
    pub fn set_guests(&mut self, min: u32, max: u32) -> Result<(), ValidationError> {
        self.guests = ValueRange::new("guests", min, max)?;
        Ok(())
    }

    /// Sets the start and end times. Either may be empty.
    pub fn set_event_times(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let start = start.into();
        let end = end.into();
        validate_time("event_time_start", &start)?;
        validate_time("event_time_end", &end)?;
        self.event_time_start = start;
        self.event_time_end = end;
        Ok(())
    }
}

impl Default for EventProfile {
    fn default() -> Self {
        Self {
            overview: String::new(),
            budget: ValueRange {
                min: 0,
                max: Self::DEFAULT_BUDGET_MAX,
            },
            guests: ValueRange {
                min: 0,
                max: Self::DEFAULT_GUESTS_MAX,
            },
            event_date: None,
            event_time_start: String::new(),
            event_time_end: String::new(),
            must_haves: String::new(),
            nice_to_haves: String::new(),
            things_to_avoid: String::new(),
            dietary_restrictions: String::new(),
            special_needs: String::new(),
        }
    }
}

/// Accepts an empty string or a 24h `HH:MM` time.
fn validate_time(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    let valid = value.is_ascii()
        && value.len() == 5
        && value.as_bytes()[2] == b':'
        && matches!(value[..2].parse::<u8>(), Ok(h) if h < 24)
        && matches!(value[3..].parse::<u8>(), Ok(m) if m < 60)
        && value[..2].bytes().chain(value[3..].bytes()).all(|b| b.is_ascii_digit());

    if valid {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(field, "expected HH:MM"))
    }
}
