// tests/registry.rs
use std::collections::HashSet;
use symbios_fractal::{commands_for, registry};

#[test]
fn catalog_has_unique_ids() {
    let ids: Vec<_> = registry::ids().collect();
    assert_eq!(ids.len(), 15);
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.contains(&"custom"));
}

#[test]
fn every_preset_is_valid_and_draws() {
    for preset in registry::PRESETS {
        let grammar = registry::lookup(preset.id).unwrap();
        grammar.validate().unwrap();
        assert_eq!(grammar.label.as_deref(), Some(preset.label));

        let commands = commands_for(&grammar, 2);
        assert!(commands.contains('F'), "{} never draws", preset.id);
    }
}

#[test]
fn preset_records_round_trip_into_grammars() {
    let peano = registry::preset("peano").unwrap();
    let grammar = registry::lookup("peano").unwrap();
    assert_eq!(grammar.rules.len(), peano.rules.len());
    assert!(grammar.draw_symbols.contains(&'A'));
    assert!(grammar.draw_symbols.contains(&'B'));
    assert_eq!(grammar.angle, 90.0);
    assert!(registry::preset("nope").is_none());
}
