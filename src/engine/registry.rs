// ============================================================================
// Panel Registry
// Owns every panel for the application's lifetime and routes key presses
// ============================================================================

use super::panel::{KeyOutcome, Panel};
use crate::domain::{Key, PanelKind};
use crate::interfaces::{DisplayEvent, EventHandler};
use chrono::Utc;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Events produced by one key press; two fit inline
pub type Events = SmallVec<[DisplayEvent; 2]>;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Selection menu listing every panel
    Menu,
    Panel(PanelKind),
}

/// Application context: panels are created once and never recreated, so
/// their state survives navigation.
pub struct PanelRegistry {
    /// Panels in menu order
    order: Vec<PanelKind>,

    panels: HashMap<PanelKind, Panel>,

    screen: Screen,

    /// Event handler for processing display events
    event_handler: Arc<dyn EventHandler>,

    /// How long an unchanged result flashes
    flash_duration: Duration,
}

impl PanelRegistry {
    /// Create a registry over already-built panels.
    ///
    /// `order` lists the menu entries; panels missing from it are not
    /// reachable from the menu. Starts on `start` if present, else the menu.
    pub fn new(
        order: Vec<PanelKind>,
        panels: HashMap<PanelKind, Panel>,
        start: PanelKind,
        event_handler: Arc<dyn EventHandler>,
        flash_duration: Duration,
    ) -> Self {
        let screen = if panels.contains_key(&start) {
            Screen::Panel(start)
        } else {
            Screen::Menu
        };

        Self {
            order,
            panels,
            screen,
            event_handler,
            flash_duration,
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Menu entries in order
    pub fn menu(&self) -> &[PanelKind] {
        &self.order
    }

    /// Switch to `kind`; false if the panel is not configured.
    pub fn show(&mut self, kind: PanelKind) -> bool {
        if !self.panels.contains_key(&kind) {
            tracing::warn!(panel = %kind, "navigation to unconfigured panel");
            return false;
        }

        self.navigate(Screen::Panel(kind));
        true
    }

    /// Switch to a panel by identifier, menu label or title
    pub fn show_by_name(&mut self, name: &str) -> bool {
        let kind = PanelKind::from_name(name).or_else(|| {
            self.order
                .iter()
                .copied()
                .find(|kind| kind.label() == name || kind.title() == name)
        });

        match kind {
            Some(kind) => self.show(kind),
            None => {
                tracing::warn!(name, "unknown panel name");
                false
            },
        }
    }

    pub fn show_menu(&mut self) {
        self.navigate(Screen::Menu);
    }

    // ========================================================================
    // Panels
    // ========================================================================

    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.get(&kind)
    }

    pub fn panel_mut(&mut self, kind: PanelKind) -> Option<&mut Panel> {
        self.panels.get_mut(&kind)
    }

    /// Panel on screen (None on the menu)
    pub fn active(&self) -> Option<&Panel> {
        match self.screen {
            Screen::Panel(kind) => self.panels.get(&kind),
            Screen::Menu => None,
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut Panel> {
        match self.screen {
            Screen::Panel(kind) => self.panels.get_mut(&kind),
            Screen::Menu => None,
        }
    }

    pub fn flash_duration(&self) -> Duration {
        self.flash_duration
    }

    /// End the "unchanged" flash of `kind` if `generation` is still current
    pub fn revert_flash(&mut self, kind: PanelKind, generation: u64) -> bool {
        self.panels
            .get_mut(&kind)
            .and_then(Panel::keypad_mut)
            .is_some_and(|keypad| keypad.buffer_mut().revert_flash(generation))
    }

    // ========================================================================
    // Key dispatch
    // ========================================================================

    /// Send a key to the panel on screen.
    ///
    /// Returns the events the press produced; the same events are forwarded
    /// to the event handler. Keys pressed on the menu are dropped.
    pub fn press(&mut self, key: Key) -> Events {
        let mut events = Events::new();

        let Screen::Panel(kind) = self.screen else {
            tracing::trace!(?key, "key pressed on the menu");
            return events;
        };
        let Some(panel) = self.panels.get_mut(&kind) else {
            return events;
        };

        let before = panel.display().to_string();
        let outcome = panel.press(key);
        tracing::debug!(panel = %kind, ?key, ?outcome, "key pressed");

        let timestamp = Utc::now();
        if panel.display() != before {
            events.push(DisplayEvent::TextChanged {
                panel: kind,
                text: panel.display().to_string(),
                timestamp,
            });
        }

        match outcome {
            KeyOutcome::Rendered(rendered) if rendered.unchanged => {
                events.push(DisplayEvent::ResultUnchanged {
                    panel: kind,
                    generation: rendered.generation,
                    timestamp,
                });
            },
            KeyOutcome::Failed(error) if error.is_silent() => {
                events.push(DisplayEvent::InputRejected {
                    panel: kind,
                    timestamp,
                });
            },
            KeyOutcome::Failed(error) => {
                events.push(DisplayEvent::ErrorShown {
                    panel: kind,
                    error,
                    timestamp,
                });
            },
            KeyOutcome::Edited | KeyOutcome::Rendered(_) | KeyOutcome::Ignored => {},
        }

        if !events.is_empty() {
            self.event_handler.on_events(events.to_vec());
        }
        events
    }

    /// Press every key parsed from `input` in order
    pub fn press_str(&mut self, input: &str) -> Events {
        Key::sequence(input)
            .into_iter()
            .flat_map(|key| self.press(key))
            .collect()
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        let to = match screen {
            Screen::Panel(kind) => Some(kind),
            Screen::Menu => None,
        };
        tracing::debug!(?to, "navigated");
        self.event_handler.on_event(DisplayEvent::Navigated {
            to,
            timestamp: Utc::now(),
        });
    }
}

impl std::fmt::Debug for PanelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelRegistry")
            .field("order", &self.order)
            .field("screen", &self.screen)
            .field("flash_duration", &self.flash_duration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::CalcError;
    use crate::domain::{AppConfig, BinaryOperator};
    use crate::engine::factory::create_from_config;
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler, UnavailableRates};

    fn registry() -> PanelRegistry {
        create_from_config(
            AppConfig::standard(),
            Arc::new(NoOpEventHandler),
            Arc::new(UnavailableRates),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_on_calculator() {
        let registry = registry();
        assert_eq!(registry.screen(), Screen::Panel(PanelKind::Calculator));
        assert_eq!(registry.menu().len(), 15);
        assert_eq!(registry.menu()[0], PanelKind::Calculator);
        assert_eq!(registry.flash_duration(), Duration::from_millis(100));
    }

    #[test]
    fn test_state_survives_navigation() {
        let mut registry = registry();
        registry.press_str("12+");

        assert!(registry.show(PanelKind::LengthConverter));
        registry.press_str("5");
        registry.show_menu();
        assert!(registry.active().is_none());

        assert!(registry.show_by_name("Calculator"));
        registry.press_str("3=");
        assert_eq!(registry.active().unwrap().display(), "15");

        assert!(registry.show_by_name("Length Converter"));
        assert_eq!(registry.active().unwrap().display(), "5");
    }

    #[test]
    fn test_show_by_title() {
        let mut registry = registry();
        assert!(registry.show_by_name("Weight and Mass Converter"));
        assert_eq!(registry.screen(), Screen::Panel(PanelKind::WeightAndMassConverter));

        assert!(registry.show_by_name("WeightAndMassConverter"));
        assert!(registry.show_by_name("Weight And Mass Converter"));
        assert!(!registry.show_by_name("weight and mass converter"));
    }

    #[test]
    fn test_menu_drops_keys() {
        let mut registry = registry();
        registry.show_menu();
        assert!(registry.press(Key::Digit(1)).is_empty());
    }

    #[test]
    fn test_unknown_navigation() {
        let mut registry = registry();
        assert!(!registry.show_by_name("Mortgage Calculator"));
        assert_eq!(registry.screen(), Screen::Panel(PanelKind::Calculator));
    }

    #[test]
    fn test_unconfigured_panel() {
        let mut registry = create_from_config(
            AppConfig::calculator_only(),
            Arc::new(NoOpEventHandler),
            Arc::new(UnavailableRates),
        )
        .unwrap();
        assert!(!registry.show(PanelKind::AreaConverter));
        assert!(registry.panel(PanelKind::AreaConverter).is_none());
    }

    #[test]
    fn test_events() {
        let recorder = Arc::new(RecordingEventHandler::default());
        let mut registry = create_from_config(
            AppConfig::standard(),
            recorder.clone(),
            Arc::new(UnavailableRates),
        )
        .unwrap();

        let events = registry.press(Key::Digit(7));
        assert!(matches!(
            &events[..],
            [DisplayEvent::TextChanged { text, .. }] if text == "7"
        ));

        registry.press(Key::Operator(BinaryOperator::Divide));
        registry.press(Key::Digit(0));
        let events = registry.press(Key::Equal);
        assert!(events.iter().any(|event| matches!(
            event,
            DisplayEvent::ErrorShown { error: CalcError::DivisionByZero, .. }
        )));

        assert!(registry.show(PanelKind::AngleConverter));
        let recorded = recorder.events();
        assert!(matches!(
            recorded.last(),
            Some(DisplayEvent::Navigated { to: Some(PanelKind::AngleConverter), .. })
        ));
    }

    #[test]
    fn test_capacity_event() {
        let mut registry = registry();
        registry.show(PanelKind::VolumeConverter);
        registry.press_str("123456789012345");
        let events = registry.press(Key::Digit(6));
        assert!(matches!(&events[..], [DisplayEvent::InputRejected { .. }]));
    }

    #[test]
    fn test_flash_event_and_revert() {
        let mut registry = registry();
        registry.show(PanelKind::TimeConverter);
        assert!(registry.panel_mut(PanelKind::TimeConverter).unwrap().set_units("Hours", "Hours"));

        registry.press_str("2");
        let events = registry.press(Key::Equal);
        let generation = events
            .iter()
            .find_map(|event| match event {
                DisplayEvent::ResultUnchanged { generation, .. } => Some(*generation),
                _ => None,
            })
            .unwrap();

        assert!(registry.revert_flash(PanelKind::TimeConverter, generation));
        assert!(!registry.revert_flash(PanelKind::TimeConverter, generation));
    }
}
