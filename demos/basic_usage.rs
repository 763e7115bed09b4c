// ============================================================================
// Basic Usage Example
// ============================================================================

use calculatory::prelude::*;
use std::sync::Arc;

fn print_events(label: &str, events: &[DisplayEvent]) {
    println!("{}:", label);
    for event in events {
        match event {
            DisplayEvent::TextChanged { text, .. } => println!("  display -> {}", text),
            DisplayEvent::ResultUnchanged { generation, .. } => {
                println!("  result unchanged (flash #{})", generation)
            },
            DisplayEvent::ErrorShown { error, .. } => println!("  error: {}", error),
            DisplayEvent::InputRejected { .. } => println!("  input rejected: display full"),
            DisplayEvent::Navigated { to, .. } => println!("  navigated to {:?}", to),
        }
    }
}

fn main() {
    #[cfg(feature = "logging")]
    let _ = calculatory::utils::init_logging("debug");

    println!("=== Calculator Example ===\n");

    let rates = FixedRates::new("USD")
        .with_rate("THB", 36.5)
        .with_rate("EUR", 0.92)
        .with_rate("JPY", 151.0);

    let mut registry = RegistryBuilder::new()
        .with_rates(Arc::new(rates))
        .build(Arc::new(LoggingEventHandler))
        .expect("standard configuration is valid");

    println!("Menu:");
    for kind in registry.menu() {
        println!("  {}", kind.label());
    }
    println!();

    // Chained equals: 5 + 3 = = =
    print_events("5 + 3 =", &registry.press_str("5+3="));
    print_events("=", &registry.press_str("="));
    print_events("=", &registry.press_str("="));

    // Errors render as "Error" and clear on the next entry
    print_events("AC 7 / 0 =", &registry.press_str("c7/0="));
    print_events("AC 5 !", &registry.press_str("c5!"));

    // Unit conversion keeps its own display
    println!("\n=== Converters ===\n");
    registry.show(PanelKind::TemperatureConverter);
    print_events("0 Celsius in Fahrenheit", &registry.press_str("0="));

    registry.show(PanelKind::LengthConverter);
    if let Some(panel) = registry.panel_mut(PanelKind::LengthConverter) {
        panel.set_units("Miles", "Kilometers");
    }
    print_events("26.2 miles in kilometers", &registry.press_str("26.2="));

    registry.show(PanelKind::CurrencyConverter);
    print_events("100 USD in THB", &registry.press_str("100="));

    // The calculator kept its state while we were away
    registry.show(PanelKind::Calculator);
    registry.press_str("*");
    if let Some(panel) = registry.active() {
        println!("\n{}: {}", panel.kind().title(), panel.display());
        if let Some(calc) = panel.as_calculator() {
            println!("  state {:?}, pending {:?}", calc.state(), calc.pending_operator());
        }
    }
}
