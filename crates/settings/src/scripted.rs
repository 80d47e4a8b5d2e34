//! Headless dialog host that replays queued answers.
//!
//! Used to drive settings screens without a UI (automation, tests). Every
//! dialog shown is recorded, including the advisory hints its validators
//! produced for the scripted input.

use std::collections::VecDeque;

use crate::dialog::{DialogHost, DialogOutcome, InputHint, TextField};

/// Answer to the next dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    /// Pick a row of a single-choice dialog
    Choose(usize),
    /// Type these values into a text dialog and press OK
    Enter(Vec<String>),
    /// Dismiss the dialog
    Cancel,
}

impl ScriptedResponse {
    pub fn enter<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedResponse::Enter(values.into_iter().map(Into::into).collect())
    }
}

/// Record of a dialog the host displayed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShownDialog {
    pub title: String,
    /// Rows of a single-choice dialog
    pub items: Vec<String>,
    pub checked: Option<usize>,
    /// Pre-filled values of a text dialog
    pub initial_values: Vec<String>,
    /// Validator hints for the scripted values of a text dialog
    pub hints: Vec<InputHint>,
}

#[derive(Debug, Default)]
pub struct ScriptedDialogHost {
    responses: VecDeque<ScriptedResponse>,
    shown: Vec<ShownDialog>,
}

impl ScriptedDialogHost {
    pub fn new<I>(responses: I) -> Self
    where
        I: IntoIterator<Item = ScriptedResponse>,
    {
        Self {
            responses: responses.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    pub fn push(&mut self, response: ScriptedResponse) {
        self.responses.push_back(response);
    }

    pub fn shown(&self) -> &[ShownDialog] {
        &self.shown
    }

    pub fn last_shown(&self) -> Option<&ShownDialog> {
        self.shown.last()
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl DialogHost for ScriptedDialogHost {
    fn choose_one(
        &mut self,
        title: &str,
        items: &[String],
        checked: Option<usize>,
    ) -> DialogOutcome<usize> {
        self.shown.push(ShownDialog {
            title: title.to_string(),
            items: items.to_vec(),
            checked,
            ..ShownDialog::default()
        });

        match self.responses.pop_front() {
            Some(ScriptedResponse::Choose(index)) if index < items.len() => {
                DialogOutcome::Confirmed(index)
            }
            Some(ScriptedResponse::Choose(index)) => {
                log::warn!("Scripted row {} out of range for {:?}, dismissing", index, title);
                DialogOutcome::Cancelled
            }
            Some(ScriptedResponse::Enter(_)) => {
                log::warn!("Scripted text for choice dialog {:?}, dismissing", title);
                DialogOutcome::Cancelled
            }
            Some(ScriptedResponse::Cancel) | None => DialogOutcome::Cancelled,
        }
    }

    fn enter_text(&mut self, title: &str, fields: &[TextField<'_>]) -> DialogOutcome<Vec<String>> {
        let mut shown = ShownDialog {
            title: title.to_string(),
            initial_values: fields.iter().map(|field| field.initial.clone()).collect(),
            ..ShownDialog::default()
        };

        let outcome = match self.responses.pop_front() {
            Some(ScriptedResponse::Enter(values)) => {
                let typed: Vec<String> = fields
                    .iter()
                    .enumerate()
                    .map(|(position, field)| {
                        let value = values.get(position).unwrap_or(&field.initial);
                        match field.max_length {
                            Some(max_length) => value.chars().take(max_length).collect(),
                            None => value.clone(),
                        }
                    })
                    .collect();
                shown.hints = fields
                    .iter()
                    .zip(&typed)
                    .map(|(field, value)| field.hint(value))
                    .collect();
                DialogOutcome::Confirmed(typed)
            }
            Some(ScriptedResponse::Choose(_)) => {
                log::warn!("Scripted row for text dialog {:?}, dismissing", title);
                DialogOutcome::Cancelled
            }
            Some(ScriptedResponse::Cancel) | None => DialogOutcome::Cancelled,
        };

        self.shown.push(shown);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::edit_text;

    fn items(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn test_choose_and_cancel() {
        let mut host = ScriptedDialogHost::new([
            ScriptedResponse::Choose(1),
            ScriptedResponse::Choose(9),
            ScriptedResponse::Cancel,
        ]);
        let rows = items(&["a", "b"]);

        assert_eq!(host.choose_one("t", &rows, Some(0)), DialogOutcome::Confirmed(1));
        assert_eq!(host.choose_one("t", &rows, None), DialogOutcome::Cancelled);
        assert_eq!(host.choose_one("t", &rows, None), DialogOutcome::Cancelled);
        assert_eq!(host.choose_one("t", &rows, None), DialogOutcome::Cancelled);
        assert_eq!(host.shown().len(), 4);
        assert_eq!(host.shown()[0].checked, Some(0));
        assert_eq!(host.remaining(), 0);
    }

    #[test]
    fn test_enter_text_applies_max_length_and_hints() {
        let mut host = ScriptedDialogHost::new([ScriptedResponse::enter(["123456"])]);
        let digits_only = |text: &str| {
            if text.chars().all(|c| c.is_ascii_digit()) {
                InputHint::Valid
            } else {
                InputHint::Invalid
            }
        };
        let field = TextField::new("Port", "80").max_length(4).validator(&digits_only);

        assert_eq!(
            edit_text(&mut host, "Port", field),
            DialogOutcome::Confirmed("1234".to_string())
        );
        let shown = host.last_shown().unwrap();
        assert_eq!(shown.initial_values, vec!["80".to_string()]);
        assert_eq!(shown.hints, vec![InputHint::Valid]);
    }

    #[test]
    fn test_missing_values_keep_initial_text() {
        let mut host = ScriptedDialogHost::new([ScriptedResponse::enter(["example.org"])]);
        let fields = [TextField::new("Host", "localhost"), TextField::new("Port", "8118")];
        assert_eq!(
            host.enter_text("Manual proxy", &fields),
            DialogOutcome::Confirmed(vec!["example.org".to_string(), "8118".to_string()])
        );
    }
}
