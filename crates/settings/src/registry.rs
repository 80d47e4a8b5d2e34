//! Declarative list of setting entries backing a settings screen.
//!
//! Entries are registered once when the screen is built and live exactly as
//! long as the registry. Their summaries are mutated in place through the
//! [`SummaryUpdater`] handed to each activation.

use crate::dialog::DialogHost;
use crate::error::{SettingsError, SettingsResult};
use crate::pickers::Picker;
use crate::summary::{EntryHandle, SummaryUpdater};

pub type ActivateAction = Box<dyn Fn(&mut dyn DialogHost, &mut dyn SummaryUpdater)>;
pub type CheckAction = Box<dyn Fn(bool)>;
pub type SelectAction = Box<dyn Fn(&str) -> ScreenEffect>;

/// What the caller must do after a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEffect {
    None,
    /// Rebuild the screen, e.g. after the locale changed
    Reload,
}

/// One row of a list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOption {
    pub label: String,
    pub value: String,
}

impl ListOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

pub enum EntryKind {
    /// Opens a picker when activated
    Clickable { on_activate: ActivateAction },
    /// On/off toggle
    Switch { checked: bool, on_check_change: CheckAction },
    /// Inline list whose selected value is the entry's state
    List {
        options: Vec<ListOption>,
        value: String,
        on_change: SelectAction,
    },
}

impl EntryKind {
    fn name(&self) -> &'static str {
        match self {
            EntryKind::Clickable { .. } => "clickable",
            EntryKind::Switch { .. } => "switch",
            EntryKind::List { .. } => "list",
        }
    }
}

pub struct SettingEntry {
    key: String,
    summary: Option<String>,
    enabled: bool,
    visible: bool,
    kind: EntryKind,
}

impl SettingEntry {
    fn new(key: &str, summary: Option<String>, kind: EntryKind) -> Self {
        Self {
            key: key.to_string(),
            summary,
            enabled: true,
            visible: true,
            kind,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn set_summary(&mut self, summary: Option<String>) {
        self.summary = summary;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    /// State of a switch entry
    pub fn is_checked(&self) -> Option<bool> {
        match &self.kind {
            EntryKind::Switch { checked, .. } => Some(*checked),
            _ => None,
        }
    }

    /// Move a switch without running its change action
    pub fn set_checked_silently(&mut self, value: bool) {
        if let EntryKind::Switch { checked, .. } = &mut self.kind {
            *checked = value;
        }
    }

    /// Selected value of a list entry
    pub fn list_value(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::List { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl std::fmt::Debug for SettingEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingEntry")
            .field("key", &self.key)
            .field("summary", &self.summary)
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("kind", &self.kind.name())
            .finish()
    }
}

/// Handle to a registered entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

#[derive(Debug, Default)]
pub struct SettingsRegistry {
    entries: Vec<SettingEntry>,
}

impl SettingsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clickable entry. `on_activate` receives an updater bound to
    /// this entry.
    pub fn register_entry<F>(
        &mut self,
        key: &str,
        initial_summary: impl Into<String>,
        on_activate: F,
    ) -> EntryId
    where
        F: Fn(&mut dyn DialogHost, &mut dyn SummaryUpdater) + 'static,
    {
        self.push(SettingEntry::new(
            key,
            Some(initial_summary.into()),
            EntryKind::Clickable {
                on_activate: Box::new(on_activate),
            },
        ))
    }

    /// Register a clickable entry whose summary and action come from `picker`
    pub fn register_picker<P>(&mut self, key: &str, picker: P) -> EntryId
    where
        P: Picker + 'static,
    {
        let summary = picker.summary();
        self.register_entry(key, summary, move |host, updater| picker.show(host, updater))
    }

    pub fn register_switch<F>(
        &mut self,
        key: &str,
        checked: bool,
        summary: Option<String>,
        on_check_change: F,
    ) -> EntryId
    where
        F: Fn(bool) + 'static,
    {
        self.push(SettingEntry::new(
            key,
            summary,
            EntryKind::Switch {
                checked,
                on_check_change: Box::new(on_check_change),
            },
        ))
    }

    /// Register a list entry. Its summary tracks the label of the selected
    /// option.
    pub fn register_list<F>(
        &mut self,
        key: &str,
        options: Vec<ListOption>,
        value: &str,
        on_change: F,
    ) -> EntryId
    where
        F: Fn(&str) -> ScreenEffect + 'static,
    {
        let summary = option_label(&options, value);
        self.push(SettingEntry::new(
            key,
            summary,
            EntryKind::List {
                options,
                value: value.to_string(),
                on_change: Box::new(on_change),
            },
        ))
    }

    fn push(&mut self, entry: SettingEntry) -> EntryId {
        if self.position(&entry.key).is_some() {
            log::warn!("Setting entry {} registered twice", entry.key);
        }
        self.entries.push(entry);
        EntryId(self.entries.len() - 1)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key == key)
    }

    pub fn id_of(&self, key: &str) -> Option<EntryId> {
        self.position(key).map(EntryId)
    }

    /// `None` for an id handed out by another registry
    pub fn entry(&self, id: EntryId) -> Option<&SettingEntry> {
        self.entries.get(id.0)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut SettingEntry> {
        self.entries.get_mut(id.0)
    }

    pub fn find(&self, key: &str) -> Option<&SettingEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut SettingEntry> {
        self.entries.iter_mut().find(|entry| entry.key == key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &SettingEntry> {
        self.entries.iter()
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &SettingEntry> {
        self.entries.iter().filter(|entry| entry.visible)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup_mut(&mut self, key: &str) -> SettingsResult<&mut SettingEntry> {
        self.find_mut(key)
            .ok_or_else(|| SettingsError::UnknownEntry(key.to_string()))
    }

    /// User clicked a clickable entry. Disabled entries ignore the click.
    pub fn activate(&mut self, key: &str, host: &mut dyn DialogHost) -> SettingsResult<()> {
        let entry = self.lookup_mut(key)?;
        if !entry.enabled {
            log::debug!("Ignoring activation of disabled entry {}", key);
            return Ok(());
        }

        let SettingEntry { key, summary, kind, .. } = entry;
        match kind {
            EntryKind::Clickable { on_activate } => {
                log::debug!("Activating {}", key);
                let mut handle = EntryHandle::new(key, summary);
                on_activate(host, &mut handle);
                Ok(())
            }
            other => Err(SettingsError::WrongEntryKind {
                key: key.clone(),
                expected: wrong_kind(other, "clickable"),
            }),
        }
    }

    /// User flipped a switch entry
    pub fn set_checked(&mut self, key: &str, value: bool) -> SettingsResult<()> {
        let entry = self.lookup_mut(key)?;
        if !entry.enabled {
            log::debug!("Ignoring toggle of disabled entry {}", key);
            return Ok(());
        }

        match &mut entry.kind {
            EntryKind::Switch { checked, on_check_change } => {
                *checked = value;
                on_check_change(value);
                Ok(())
            }
            other => Err(SettingsError::WrongEntryKind {
                key: key.to_string(),
                expected: wrong_kind(other, "switch"),
            }),
        }
    }

    /// User picked `value` in a list entry
    pub fn select(&mut self, key: &str, new_value: &str) -> SettingsResult<ScreenEffect> {
        let entry = self.lookup_mut(key)?;
        if !entry.enabled {
            log::debug!("Ignoring selection on disabled entry {}", key);
            return Ok(ScreenEffect::None);
        }

        let SettingEntry { summary, kind, .. } = entry;
        match kind {
            EntryKind::List { options, value, on_change } => {
                *value = new_value.to_string();
                *summary = option_label(options, new_value);
                Ok(on_change(new_value))
            }
            other => Err(SettingsError::WrongEntryKind {
                key: key.to_string(),
                expected: wrong_kind(other, "list"),
            }),
        }
    }
}

fn option_label(options: &[ListOption], value: &str) -> Option<String> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.clone())
}

fn wrong_kind(actual: &EntryKind, expected: &'static str) -> &'static str {
    log::warn!("Expected a {} entry, found a {} entry", expected, actual.name());
    expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripted::{ScriptedDialogHost, ScriptedResponse};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_activation_updates_only_its_entry() {
        let mut registry = SettingsRegistry::new();
        registry.register_entry("first", "one", |_, updater| updater.update_summary("changed"));
        let second = registry.register_entry("second", "two", |_, _| {});

        let mut host = ScriptedDialogHost::default();
        registry.activate("first", &mut host).unwrap();

        assert_eq!(registry.find("first").unwrap().summary(), Some("changed"));
        assert_eq!(registry.entry(second).unwrap().summary(), Some("two"));
    }

    #[test]
    fn test_activation_reaches_the_dialog_host() {
        let mut registry = SettingsRegistry::new();
        registry.register_entry("pick", "none", |host, updater| {
            let items = vec!["a".to_string(), "b".to_string()];
            if let Some(index) = host.choose_one("Pick", &items, None).confirmed() {
                updater.update_summary(&items[index]);
            }
        });

        let mut host =
            ScriptedDialogHost::new([ScriptedResponse::Choose(1), ScriptedResponse::Cancel]);
        registry.activate("pick", &mut host).unwrap();
        assert_eq!(registry.find("pick").unwrap().summary(), Some("b"));

        registry.activate("pick", &mut host).unwrap();
        assert_eq!(registry.find("pick").unwrap().summary(), Some("b"));
    }

    #[test]
    fn test_unknown_and_mismatched_entries() {
        let mut registry = SettingsRegistry::new();
        registry.register_switch("toggle", false, None, |_| {});
        let mut host = ScriptedDialogHost::default();

        assert_eq!(
            registry.activate("missing", &mut host),
            Err(SettingsError::UnknownEntry("missing".to_string()))
        );
        assert_eq!(
            registry.activate("toggle", &mut host),
            Err(SettingsError::WrongEntryKind {
                key: "toggle".to_string(),
                expected: "clickable",
            })
        );
        assert!(registry.select("toggle", "x").is_err());
    }

    #[test]
    fn test_switch_runs_change_action() {
        let seen = Rc::new(Cell::new(None));
        let mut registry = SettingsRegistry::new();
        let sink = Rc::clone(&seen);
        registry.register_switch("toggle", false, None, move |checked| sink.set(Some(checked)));

        registry.set_checked("toggle", true).unwrap();
        assert_eq!(seen.get(), Some(true));
        assert_eq!(registry.find("toggle").unwrap().is_checked(), Some(true));
    }

    #[test]
    fn test_disabled_entries_ignore_input() {
        let seen = Rc::new(Cell::new(false));
        let mut registry = SettingsRegistry::new();
        let sink = Rc::clone(&seen);
        let id = registry.register_switch("toggle", false, None, move |_| sink.set(true));
        registry.entry_mut(id).unwrap().set_enabled(false);

        registry.set_checked("toggle", true).unwrap();
        assert!(!seen.get());
        assert_eq!(registry.entry(id).unwrap().is_checked(), Some(false));
    }

    #[test]
    fn test_list_summary_follows_selection() {
        let mut registry = SettingsRegistry::new();
        let options = vec![ListOption::new("System default", ""), ListOption::new("Deutsch", "de")];
        registry.register_list("locale", options, "", |_| ScreenEffect::Reload);

        assert_eq!(registry.find("locale").unwrap().summary(), Some("System default"));
        assert_eq!(registry.select("locale", "de"), Ok(ScreenEffect::Reload));
        let entry = registry.find("locale").unwrap();
        assert_eq!(entry.summary(), Some("Deutsch"));
        assert_eq!(entry.list_value(), Some("de"));
    }

    #[test]
    fn test_visible_entries_skip_hidden() {
        let mut registry = SettingsRegistry::new();
        let hidden = registry.register_switch("hidden", false, None, |_| {});
        registry.register_switch("shown", false, None, |_| {});
        registry.entry_mut(hidden).unwrap().set_visible(false);

        let keys: Vec<&str> = registry.visible_entries().map(SettingEntry::key).collect();
        assert_eq!(keys, vec!["shown"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_foreign_entry_id_is_none() {
        let mut larger = SettingsRegistry::new();
        larger.register_switch("a", false, None, |_| {});
        let foreign = larger.register_switch("b", false, None, |_| {});

        let mut registry = SettingsRegistry::new();
        registry.register_switch("only", false, None, |_| {});

        assert!(registry.entry(foreign).is_none());
        assert!(registry.entry_mut(foreign).is_none());
        assert_eq!(larger.entry(foreign).map(SettingEntry::key), Some("b"));
    }
}
