//! Session Workflow Tests
//!
//! Drive a `ThemeSession` through the user actions it supports.

use color_space::{is_valid_destructive, Hsl};
use rand::rngs::StdRng;
use rand::SeedableRng;
use stylesheet::{Dialect, StyleMap};
use theme_core::{ColorConfig, ModeSignal, PresetCatalog, Role};
use theme_state::{ClipboardSink, EngineConfig, HistoryState, MemoryClipboard, PaletteHistory, ThemeSession};

const CATALOG: &str = r#"[
    {
        "name": "Zinc",
        "colors": {
            "primary": "240 5.9% 10%",
            "primary-dark": "0 0% 98%",
            "destructive": "0 84.2% 60.2%"
        },
        "backgroundLight": "0 0% 100%",
        "backgroundDark": "240 10% 3.9%",
        "cardLight": "0 0% 100%",
        "cardDark": "240 10% 3.9%"
    }
]"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn session(seed: u64) -> ThemeSession<StdRng> {
    let config = EngineConfig::default().randomize_feedback_ms(0);
    ThemeSession::new(ColorConfig::new(), config, StdRng::seed_from_u64(seed))
}

fn snap(primary: &str) -> ColorConfig {
    ColorConfig::new().with("primary", primary)
}

/// push A, B, C; previous -> B; push D -> [A, B, D]
#[test]
fn test_history_truncating_push() {
    let mut history = PaletteHistory::new();
    history.push(snap("A"));
    history.push(snap("B"));
    history.push(snap("C"));

    assert_eq!(history.previous(), Some(&snap("B")));
    assert_eq!(history.cursor(), Some(1));
    assert_eq!(history.state(), HistoryState::Navigable);

    history.push(snap("D"));
    assert_eq!(history.snapshots(), &[snap("A"), snap("B"), snap("D")]);
}

/// Generate, edit, step back, and the session follows each step
#[test]
fn test_generate_edit_previous() {
    init_tracing();
    let mut session = session(220);
    let mut sink = StyleMap::new();
    session.set_mode(ModeSignal::Light, &mut sink);

    session.generate_from_seed(220.0, &mut sink);
    let generated = session.colors().clone();
    let primary: Hsl = session.role_value(Role::Primary).parse().unwrap();
    assert_eq!(primary.h, 220.0);
    assert!(is_valid_destructive(session.role_value(Role::Destructive)));

    assert!(session.edit_role(Role::Secondary, "120 40% 50%", &mut sink));
    assert_eq!(session.history().len(), 2);
    assert_eq!(sink.get("--secondary"), Some(session.role_value(Role::Secondary)));

    assert!(session.previous(&mut sink));
    assert_eq!(session.colors(), &generated);
    assert_eq!(sink.get("--secondary"), Some(generated.light(Role::Secondary)));
    assert_eq!(session.history().state(), HistoryState::AtOrigin);
}

/// Preset selection renders preset surfaces and survives mode switches
#[test]
fn test_preset_then_mode_switch() {
    init_tracing();
    let catalog = PresetCatalog::from_json(CATALOG).unwrap();
    let zinc = catalog.first().unwrap();

    let mut session = session(1);
    let mut sink = StyleMap::new();
    session.apply_preset(zinc, &mut sink);
    assert_eq!(sink.get("--background"), Some("0 0% 100%"));

    session.set_mode(ModeSignal::System { prefers_dark: true }, &mut sink);
    assert_eq!(sink.get("--background"), Some("240 10% 3.9%"));
    assert_eq!(sink.get("--primary"), Some("0 0% 98%"));
    assert_eq!(session.role_hex(Role::Primary), "#fafafa");
}

/// Randomize replaces the preset and records history
#[tokio::test(start_paused = true)]
async fn test_randomize_with_feedback_after_preset() {
    init_tracing();
    let catalog = PresetCatalog::from_json(CATALOG).unwrap();
    let zinc = catalog.first().unwrap();

    let config = EngineConfig::default();
    let mut session = ThemeSession::from_preset(zinc, config, StdRng::seed_from_u64(9));
    let mut sink = StyleMap::new();

    session.randomize_with_feedback(&mut sink).await;
    assert!(session.current_preset().is_none());
    assert_eq!(session.history().len(), 1);
    assert!(is_valid_destructive(session.role_value(Role::Destructive)));
}

/// Copy-out writes the same text the session serializes
#[tokio::test]
async fn test_copy_stylesheet_to_clipboard() {
    init_tracing();
    let mut session = session(4);
    session.generate_from_seed(45.0, &mut StyleMap::new());

    let clipboard = MemoryClipboard::new();
    session.copy_stylesheet(Dialect::Legacy, &clipboard).await.unwrap();

    let copied = clipboard.contents().await.unwrap();
    assert_eq!(copied, session.stylesheet(Dialect::Legacy));
    assert!(copied.starts_with("@layer base {"));

    // The sink is usable through the trait object too
    let sink: &dyn ClipboardSink = &clipboard;
    sink.write_text("x").await.unwrap();
    assert_eq!(clipboard.contents().await.as_deref(), Some("x"));
}

/// Config loaded from JSON drives the serializer
#[test]
fn test_config_shapes_output() {
    init_tracing();
    let config = EngineConfig::from_json(r#"{"radius": "1rem", "defaultDialect": "perceptual"}"#).unwrap();
    let mut session = ThemeSession::new(ColorConfig::new(), config, StdRng::seed_from_u64(2));
    let mut sink = StyleMap::new();
    session.generate_from_seed(200.0, &mut sink);

    assert!(sink.get("--primary").unwrap().starts_with("oklch("));
    assert_eq!(sink.get("--radius"), Some("1rem"));
    assert!(session.stylesheet(Dialect::Legacy).contains("--radius: 1rem;"));
}
