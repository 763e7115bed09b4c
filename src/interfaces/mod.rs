// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod keypad;
mod rate_provider;

pub use event_handler::{DisplayEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
pub use keypad::Keypad;
pub use rate_provider::{FixedRates, RateError, RateProvider, UnavailableRates};

#[cfg(test)]
pub(crate) use event_handler::RecordingEventHandler;
