/// Capability handed to a picker so it can report the display text of the
/// entry that opened it.
///
/// Pickers may call this any number of times; the last call before the dialog
/// closes is the one that sticks.
pub trait SummaryUpdater {
    fn update_summary(&mut self, summary: &str);
}

/// Updater bound to one registry entry
#[derive(Debug)]
pub struct EntryHandle<'a> {
    key: &'a str,
    summary: &'a mut Option<String>,
}

impl<'a> EntryHandle<'a> {
    pub(crate) fn new(key: &'a str, summary: &'a mut Option<String>) -> Self {
        Self { key, summary }
    }

    pub fn key(&self) -> &str {
        self.key
    }
}

impl SummaryUpdater for EntryHandle<'_> {
    fn update_summary(&mut self, summary: &str) {
        log::debug!("Summary of {} is now {:?}", self.key, summary);
        *self.summary = Some(summary.to_string());
    }
}

/// Free-standing updater that keeps the latest summary, for running a picker
/// outside a registry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LatestSummary {
    latest: Option<String>,
    updates: usize,
}

impl LatestSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    /// How many times the summary was pushed
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl SummaryUpdater for LatestSummary {
    fn update_summary(&mut self, summary: &str) {
        self.latest = Some(summary.to_string());
        self.updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_update_wins() {
        let mut summary = None;
        {
            let mut handle = EntryHandle::new("proxy", &mut summary);
            handle.update_summary("10.0.0.1:80");
            handle.update_summary("10.0.0.1:8080");
            assert_eq!(handle.key(), "proxy");
        }
        assert_eq!(summary.as_deref(), Some("10.0.0.1:8080"));
    }

    #[test]
    fn test_latest_summary_counts_updates() {
        let mut latest = LatestSummary::new();
        assert_eq!(latest.latest(), None);
        latest.update_summary("a");
        latest.update_summary("b");
        assert_eq!(latest.latest(), Some("b"));
        assert_eq!(latest.updates(), 2);
    }
}
