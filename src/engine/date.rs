// ============================================================================
// Date Calculator
// Calendar-day difference between two DD/MM/YYYY dates
// ============================================================================

use crate::display::{CalcError, CalcResult, ERROR_TEXT};
use chrono::{Local, NaiveDate};

/// Input and output format of the date fields
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Result line when both dates are equal
pub const SAME_DATES: &str = "Same dates";

/// Panel computing the number of days between two dates.
///
/// Both fields start at today's date, so the initial result reads
/// "Same dates".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCalculator {
    from: String,
    to: String,
    result: String,
}

impl DateCalculator {
    /// Both fields set to today (local time)
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive())
    }

    /// Both fields set to `day`
    pub fn starting_on(day: NaiveDate) -> Self {
        let text = day.format(DATE_FORMAT).to_string();
        Self {
            from: text.clone(),
            to: text,
            result: SAME_DATES.to_string(),
        }
    }

    pub fn from_date(&self) -> &str {
        &self.from
    }

    pub fn to_date(&self) -> &str {
        &self.to
    }

    /// Last rendered result line
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn set_from(&mut self, date: impl Into<String>) {
        self.from = date.into();
    }

    pub fn set_to(&mut self, date: impl Into<String>) {
        self.to = date.into();
    }

    /// Compute the absolute day difference and render it.
    ///
    /// # Errors
    /// Returns `Parse` (and renders "Error") if either field is not a valid
    /// `DD/MM/YYYY` date.
    pub fn calculate(&mut self) -> CalcResult<u64> {
        let days = match (parse_date(&self.from), parse_date(&self.to)) {
            (Some(from), Some(to)) => (to - from).num_days().unsigned_abs(),
            _ => {
                tracing::debug!(from = %self.from, to = %self.to, "invalid date input");
                self.result = ERROR_TEXT.to_string();
                return Err(CalcError::Parse);
            },
        };

        self.result = describe_days(days);
        Ok(days)
    }
}

impl Default for DateCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

fn describe_days(days: u64) -> String {
    match days {
        0 => SAME_DATES.to_string(),
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_starts_on_same_dates() {
        let calc = DateCalculator::starting_on(day(2024, 2, 29));
        assert_eq!(calc.from_date(), "29/02/2024");
        assert_eq!(calc.to_date(), "29/02/2024");
        assert_eq!(calc.result(), SAME_DATES);
    }

    #[test]
    fn test_day_difference() {
        let mut calc = DateCalculator::starting_on(day(2024, 1, 1));
        calc.set_to("02/01/2024");
        assert_eq!(calc.calculate().unwrap(), 1);
        assert_eq!(calc.result(), "1 day");

        calc.set_to("01/03/2024");
        assert_eq!(calc.calculate().unwrap(), 60);
        assert_eq!(calc.result(), "60 days");
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut calc = DateCalculator::starting_on(day(2024, 1, 1));
        calc.set_from("31/12/2024");
        assert_eq!(calc.calculate().unwrap(), 365);
    }

    #[test]
    fn test_invalid_date() {
        let mut calc = DateCalculator::starting_on(day(2024, 1, 1));
        calc.set_to("31/02/2024");
        assert_eq!(calc.calculate(), Err(CalcError::Parse));
        assert_eq!(calc.result(), ERROR_TEXT);

        calc.set_to("2024-01-05");
        assert_eq!(calc.calculate(), Err(CalcError::Parse));
    }

    #[test]
    fn test_today_is_well_formed() {
        let calc = DateCalculator::new();
        assert!(parse_date(calc.from_date()).is_some());
    }
}
