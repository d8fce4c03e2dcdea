//! Contact-form state: per-field validity and the success banner.
//!
//! DESIGN
//! ======
//! Each field moves between `Empty | TooShort | InvalidFormat | Valid` only
//! on blur or on a submit attempt; typing updates the value but never the
//! validity. The submit gate re-validates all three fields unconditionally
//! and combines them with AND.
//!
//! TRADE-OFFS
//! ==========
//! The success banner hides itself after a fixed delay. Every accepted
//! submission bumps `banner_seq`, and a hide request only applies if it
//! carries the current sequence, so a resubmission inside the window gets a
//! full window of its own instead of being cut short by the older timer.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::util::validation::{error_message, validate};

/// Delay before the success banner hides itself.
pub const BANNER_DISMISS_MS: u32 = 5_000;

/// Contact-form inputs in focus order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Email, FieldKind::Message];

    /// DOM id of the input element.
    pub fn input_id(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Message => "message",
        }
    }

    /// DOM id of the inline error slot.
    pub fn error_id(self) -> &'static str {
        match self {
            FieldKind::Name => "nameError",
            FieldKind::Email => "emailError",
            FieldKind::Message => "messageError",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Email => "Email",
            FieldKind::Message => "Message",
        }
    }
}

/// Outcome of the most recent check of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Empty,
    TooShort,
    InvalidFormat,
}

/// Live value plus the result of the last blur/submit check.
///
/// `validity` is `None` until the field has been checked once, so an
/// untouched form shows no errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    pub validity: Option<Validity>,
}

impl FormField {
    pub fn is_invalid(&self) -> bool {
        matches!(self.validity, Some(v) if v != Validity::Valid)
    }
}

/// Result of a submit attempt. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid; the banner is showing under `banner_seq`.
    Accepted { banner_seq: u64 },
    /// At least one field invalid; `first_invalid` should receive focus.
    Rejected { first_invalid: FieldKind },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub banner_visible: bool,
    pub banner_seq: u64,
}

impl ContactFormState {
    pub fn field(&self, kind: FieldKind) -> &FormField {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Message => &self.message,
        }
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut FormField {
        match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::Message => &mut self.message,
        }
    }

    /// Record typed input. Validity is left untouched until the next blur.
    pub fn set_value(&mut self, kind: FieldKind, value: String) {
        self.field_mut(kind).value = value;
    }

    /// Re-check one field from its current value.
    pub fn blur(&mut self, kind: FieldKind) -> Validity {
        let field = self.field_mut(kind);
        let validity = validate(kind, &field.value);
        field.validity = Some(validity);
        validity
    }

    /// Error text to show under `kind`, if any.
    pub fn error_text(&self, kind: FieldKind) -> Option<&'static str> {
        self.field(kind).validity.and_then(|v| error_message(kind, v))
    }

    /// First invalid field in Name→Email→Message order.
    pub fn first_invalid(&self) -> Option<FieldKind> {
        FieldKind::ALL.into_iter().find(|kind| self.field(*kind).is_invalid())
    }

    /// Submit gate: validate every field, then either accept (show banner,
    /// clear inputs) or reject with the field that should take focus.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut all_valid = true;
        for kind in FieldKind::ALL {
            all_valid &= self.blur(kind) == Validity::Valid;
        }

        if all_valid {
            self.name = FormField::default();
            self.email = FormField::default();
            self.message = FormField::default();
            self.banner_seq += 1;
            self.banner_visible = true;
            return SubmitOutcome::Accepted { banner_seq: self.banner_seq };
        }

        let first_invalid = self.first_invalid().unwrap_or(FieldKind::Name);
        SubmitOutcome::Rejected { first_invalid }
    }

    /// Hide the banner if `seq` is still the latest accepted submission.
    /// Returns whether the banner was hidden.
    pub fn hide_banner(&mut self, seq: u64) -> bool {
        if seq != self.banner_seq || !self.banner_visible {
            return false;
        }
        self.banner_visible = false;
        true
    }
}
