// ============================================================================
// Currency Converter
// Multiplies the displayed amount by a rate from a RateProvider
// ============================================================================

use crate::display::{CalcError, CalcResult, DisplayBuffer, Rendered};
use crate::domain::currency::currency_code;
use crate::interfaces::{Keypad, RateProvider};
use std::sync::Arc;

pub use crate::domain::currency::{CURRENCY_CODES, DEFAULT_FROM_CURRENCY, DEFAULT_TO_CURRENCY};

/// Amount converter backed by an external rate source.
pub struct CurrencyConverter {
    buffer: DisplayBuffer,
    rates: Arc<dyn RateProvider>,
    from: &'static str,
    to: &'static str,
}

impl CurrencyConverter {
    /// USD to THB on a generic display with the sign key disabled
    pub fn new(rates: Arc<dyn RateProvider>) -> Self {
        Self::with_buffer(rates, DisplayBuffer::generic().with_sign(false))
    }

    pub fn with_buffer(rates: Arc<dyn RateProvider>, buffer: DisplayBuffer) -> Self {
        Self {
            buffer,
            rates,
            from: DEFAULT_FROM_CURRENCY,
            to: DEFAULT_TO_CURRENCY,
        }
    }

    pub fn currencies(&self) -> (&'static str, &'static str) {
        (self.from, self.to)
    }

    /// Select a currency pair; false if either code is not offered.
    pub fn set_units(&mut self, from: &str, to: &str) -> bool {
        match (currency_code(from), currency_code(to)) {
            (Some(from), Some(to)) => {
                self.from = from;
                self.to = to;
                true
            },
            _ => {
                tracing::warn!(from, to, "unknown currency selection");
                false
            },
        }
    }
}

impl std::fmt::Debug for CurrencyConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyConverter")
            .field("buffer", &self.buffer)
            .field("rates", &self.rates.name())
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl Keypad for CurrencyConverter {
    fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.buffer
    }

    /// A failed rate lookup shows "Error" as a domain error
    fn equal(&mut self) -> CalcResult<Option<Rendered>> {
        let amount = self.buffer.get_value()?;

        let rate = match self.rates.rate(self.from, self.to) {
            Ok(rate) => rate,
            Err(err) => {
                tracing::warn!(provider = self.rates.name(), error = %err, "rate lookup failed");
                self.buffer.show_error();
                return Err(CalcError::Domain);
            },
        };

        self.buffer.set_text(amount, amount * rate).map(Some)
    }
}
