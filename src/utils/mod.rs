// ============================================================================
// Utilities Module
// Helper functions shared by demos and tests
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, init_test_logging};
