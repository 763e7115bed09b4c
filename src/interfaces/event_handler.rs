// ============================================================================
// Event Handler Interface
// Defines the contract for observing display changes
// ============================================================================

use crate::display::CalcError;
use crate::domain::PanelKind;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted while key presses are handled
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayEvent {
    /// Display text changed
    TextChanged {
        panel: PanelKind,
        text: String,
        timestamp: DateTime<Utc>,
    },

    /// Result equals the previous value; the display should flash until
    /// `revert_flash(generation)` is called
    ResultUnchanged {
        panel: PanelKind,
        generation: u64,
        timestamp: DateTime<Utc>,
    },

    /// Display replaced with "Error"
    ErrorShown {
        panel: PanelKind,
        error: CalcError,
        timestamp: DateTime<Utc>,
    },

    /// Key press dropped because the display is full
    InputRejected {
        panel: PanelKind,
        timestamp: DateTime<Utc>,
    },

    /// Active screen changed (None = selection menu)
    Navigated {
        to: Option<PanelKind>,
        timestamp: DateTime<Utc>,
    },
}

impl DisplayEvent {
    /// Panel the event belongs to (None for navigation to the menu)
    pub fn panel(&self) -> Option<PanelKind> {
        match self {
            DisplayEvent::TextChanged { panel, .. }
            | DisplayEvent::ResultUnchanged { panel, .. }
            | DisplayEvent::ErrorShown { panel, .. }
            | DisplayEvent::InputRejected { panel, .. } => Some(*panel),
            DisplayEvent::Navigated { to, .. } => *to,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            DisplayEvent::TextChanged { timestamp, .. }
            | DisplayEvent::ResultUnchanged { timestamp, .. }
            | DisplayEvent::ErrorShown { timestamp, .. }
            | DisplayEvent::InputRejected { timestamp, .. }
            | DisplayEvent::Navigated { timestamp, .. } => *timestamp,
        }
    }
}

/// Event handler trait for processing display events
/// Implementations can handle rendering, logging, flash timers, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a display event
    fn on_event(&self, event: DisplayEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<DisplayEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: DisplayEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: DisplayEvent) {
        tracing::debug!("Display event: {:?}", event);
    }
}

/// Collects every event it sees
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingEventHandler(pub std::sync::Mutex<Vec<DisplayEvent>>);

#[cfg(test)]
impl RecordingEventHandler {
    pub(crate) fn events(&self) -> Vec<DisplayEvent> {
        self.0.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: DisplayEvent) {
        self.0.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(DisplayEvent::InputRejected {
            panel: PanelKind::Calculator,
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_batch_delivers_in_order() {
        let recorder = RecordingEventHandler::default();
        recorder.on_events(vec![
            DisplayEvent::Navigated {
                to: Some(PanelKind::LengthConverter),
                timestamp: Utc::now(),
            },
            DisplayEvent::TextChanged {
                panel: PanelKind::LengthConverter,
                text: "7".to_string(),
                timestamp: Utc::now(),
            },
        ]);

        let seen = recorder.events();
        assert_eq!(seen.len(), 2);
        assert!(matches!(seen[0], DisplayEvent::Navigated { .. }));
        assert_eq!(seen[1].panel(), Some(PanelKind::LengthConverter));
    }

    #[test]
    fn test_menu_navigation_has_no_panel() {
        let event = DisplayEvent::Navigated {
            to: None,
            timestamp: Utc::now(),
        };
        assert_eq!(event.panel(), None);
    }
}
