//! Modal dialogs as seen by the pickers.
//!
//! The host UI framework implements [`DialogHost`]; each call blocks until the
//! user confirms or dismisses the dialog. A dismissed dialog must leave no
//! trace, so pickers only write preferences on [`DialogOutcome::Confirmed`].

/// How a modal dialog was closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    Confirmed(T),
    Cancelled,
}

impl<T> DialogOutcome<T> {
    pub fn confirmed(self) -> Option<T> {
        match self {
            DialogOutcome::Confirmed(value) => Some(value),
            DialogOutcome::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, DialogOutcome::Cancelled)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DialogOutcome<U> {
        match self {
            DialogOutcome::Confirmed(value) => DialogOutcome::Confirmed(f(value)),
            DialogOutcome::Cancelled => DialogOutcome::Cancelled,
        }
    }
}

/// Advisory styling for text typed into a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputHint {
    Valid,
    Invalid,
}

/// One editable line in a text dialog
pub struct TextField<'a> {
    pub label: &'a str,
    pub initial: String,
    /// Longest input the widget accepts, in characters
    pub max_length: Option<usize>,
    /// Called on every edit to color the text; never blocks confirmation
    pub validator: Option<&'a dyn Fn(&str) -> InputHint>,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, initial: impl Into<String>) -> Self {
        Self {
            label,
            initial: initial.into(),
            max_length: None,
            validator: None,
        }
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn validator(mut self, validator: &'a dyn Fn(&str) -> InputHint) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn hint(&self, text: &str) -> InputHint {
        self.validator
            .map(|validator| validator(text))
            .unwrap_or(InputHint::Valid)
    }
}

/// Modal dialogs provided by the host UI.
pub trait DialogHost {
    /// Single-choice list. Confirms with the index of the row the user picked.
    fn choose_one(
        &mut self,
        title: &str,
        items: &[String],
        checked: Option<usize>,
    ) -> DialogOutcome<usize>;

    /// Text form. Confirms with one value per field, in field order.
    fn enter_text(&mut self, title: &str, fields: &[TextField<'_>]) -> DialogOutcome<Vec<String>>;
}

/// Single line text dialog
pub fn edit_text(
    host: &mut dyn DialogHost,
    title: &str,
    field: TextField<'_>,
) -> DialogOutcome<String> {
    host.enter_text(title, std::slice::from_ref(&field))
        .map(|values| values.into_iter().next().unwrap_or_default())
}
