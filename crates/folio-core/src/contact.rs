//! Contact form: floating labels, validation and a simulated send.

use crate::constants::{CONTACT_SEND_DELAY, SENDING_LABEL, SUBMIT_LABEL};
use crate::scheduler::{Scheduler, TaskHandle};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Following field, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }
}

/// One input and its floating-label flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    pub focused: bool,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Some field is blank; nothing was sent.
    Rejected,
    /// Send started; completes when the armed timer fires.
    Sending,
    /// A send is already in flight.
    Busy,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    name: FormField,
    email: FormField,
    message: FormField,
    button_label: &'static str,
    pending: Option<TaskHandle>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: FormField::default(),
            email: FormField::default(),
            message: FormField::default(),
            button_label: SUBMIT_LABEL,
            pending: None,
        }
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &FormField {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn focus(&mut self, field: Field) {
        self.field_mut(field).focused = true;
    }

    /// The label stays floated while the field holds text.
    pub fn blur(&mut self, field: Field) {
        let f = self.field_mut(field);
        if f.value.is_empty() {
            f.focused = false;
        }
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.field_mut(field).value = value.into();
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.field_mut(field).value.push(c);
    }

    pub fn backspace(&mut self, field: Field) {
        self.field_mut(field).value.pop();
    }

    /// Whether every field has non-blank content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        // Whitespace-only input counts as empty, stricter than a bare emptiness check.
        Field::ALL
            .iter()
            .all(|f| !self.field(*f).value.trim().is_empty())
    }

    /// Validate and start sending, arming `task` to fire when the send ends.
    pub fn submit<T: Clone>(&mut self, timers: &mut Scheduler<T>, task: T) -> SubmitOutcome {
        if self.pending.is_some() {
            return SubmitOutcome::Busy;
        }
        if !self.is_complete() {
            return SubmitOutcome::Rejected;
        }
        self.button_label = SENDING_LABEL;
        self.pending = Some(timers.once(CONTACT_SEND_DELAY, task));
        SubmitOutcome::Sending
    }

    /// Finish a send: clear the values and restore the button.
    ///
    /// Focus flags are left alone.
    pub fn complete(&mut self) {
        for field in Field::ALL {
            self.field_mut(field).value.clear();
        }
        self.button_label = SUBMIT_LABEL;
        self.pending = None;
    }

    /// Abort an in-flight send without resetting the values.
    pub fn cancel<T: Clone>(&mut self, timers: &mut Scheduler<T>) -> bool {
        let Some(handle) = self.pending.take() else {
            return false;
        };
        self.button_label = SUBMIT_LABEL;
        timers.cancel(handle)
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    /// The submit button is disabled while sending.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.is_sending()
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        self.button_label
    }
}
