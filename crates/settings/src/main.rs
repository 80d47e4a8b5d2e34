use std::path::PathBuf;

use anyhow::Context;
use citadel_preferences::{JsonFileBackend, PreferenceStore, UserPreferences};
use citadel_settings::{GeneralSettings, GeneralSettingsContext, ScrollbarsSettings, SettingsScreen};

fn print_screen(screen: &dyn SettingsScreen) {
    println!("{}", screen.title());
    for entry in screen.registry().visible_entries() {
        let state = match entry.is_checked() {
            Some(true) => " [on]",
            Some(false) => " [off]",
            None => "",
        };
        let summary = entry.summary().unwrap_or_default().replace('\n', " ");
        println!("  {:<20}{} {}", entry.key(), state, summary);
    }
}

/// Print both settings screens with the summaries of the stored preferences.
/// Takes an optional path to a preferences file.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let backend = match std::env::args_os().nth(1) {
        Some(path) => JsonFileBackend::new(PathBuf::from(path)),
        None => JsonFileBackend::default_location()
            .context("No configuration directory for preferences")?,
    };
    log::info!("Reading preferences from {}", backend.path().display());

    let store = PreferenceStore::open(backend).context("Failed to load preferences")?;
    let preferences = UserPreferences::new(store);

    print_screen(&GeneralSettings::new(GeneralSettingsContext::new(preferences.clone())));
    println!();
    print_screen(&ScrollbarsSettings::new(preferences));

    Ok(())
}
