// ============================================================================
// Rate Provider Interface
// Contract for the exchange-rate source behind the currency panel
// ============================================================================

use std::collections::HashMap;
use thiserror::Error;

/// Errors a rate lookup can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
    #[error("exchange rates are unavailable")]
    Unavailable,
    #[error("non-positive rate for {from}/{to}")]
    InvalidRate { from: String, to: String },
}

/// Source of currency multipliers.
///
/// `rate(from, to)` returns the factor that turns an amount in `from` into
/// an amount in `to`.
pub trait RateProvider: Send + Sync {
    fn rate(&self, from: &str, to: &str) -> Result<f64, RateError>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Provider used when no live source is configured; every lookup fails.
pub struct UnavailableRates;

impl RateProvider for UnavailableRates {
    fn rate(&self, _from: &str, _to: &str) -> Result<f64, RateError> {
        Err(RateError::Unavailable)
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

/// Static rate table quoted against one base currency.
///
/// Each entry is "units of currency per one unit of base".
#[derive(Debug, Clone)]
pub struct FixedRates {
    base: String,
    per_base: HashMap<String, f64>,
}

impl FixedRates {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let mut per_base = HashMap::new();
        per_base.insert(base.clone(), 1.0);
        Self { base, per_base }
    }

    /// Builder method: quote `code` against the base
    pub fn with_rate(mut self, code: impl Into<String>, per_base: f64) -> Self {
        self.per_base.insert(code.into(), per_base);
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn quote(&self, code: &str) -> Result<f64, RateError> {
        let quote = *self
            .per_base
            .get(code)
            .ok_or_else(|| RateError::UnknownCurrency(code.to_string()))?;
        Ok(quote)
    }
}

impl RateProvider for FixedRates {
    fn rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        let from_quote = self.quote(from)?;
        let to_quote = self.quote(to)?;

        if from_quote <= 0.0 || to_quote <= 0.0 || !from_quote.is_finite() || !to_quote.is_finite() {
            return Err(RateError::InvalidRate {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        Ok(to_quote / from_quote)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
