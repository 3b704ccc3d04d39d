use std::rc::Rc;

use thiserror::Error;
use yew::prelude::*;

/// Time the "Sending..." state stays up before success is shown.
pub const SETTLE_MS: u32 = 300;
/// Time a success or error banner stays up.
pub const BANNER_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("could not build request: {0}")]
    Request(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        match Field::ALL.iter().find(|f| self.get(**f).trim().is_empty()) {
            Some(field) => Err(SubmitError::MissingField(field.key())),
            None => Ok(()),
        }
    }

    /// `application/x-www-form-urlencoded` body for the sheet endpoint.
    pub fn to_payload(&self, timestamp: &str) -> Result<String, SubmitError> {
        self.validate()?;
        let pairs = Field::ALL
            .iter()
            .map(|f| (f.key(), self.get(*f)))
            .chain(std::iter::once(("timestamp", timestamp)));
        Ok(pairs
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Failure,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub submitting: bool,
    pub status: Option<SubmitStatus>,
}

pub enum ContactAction {
    Edit(Field, String),
    /// The request has been handed off; show the spinner.
    Begin,
    /// Optimistic success. Fires on a timer, not on the response.
    Settle,
    /// The submit handler itself failed.
    Fail,
    ClearStatus,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.fields.set(field, value),
            ContactAction::Begin => {
                next.submitting = true;
                next.status = None;
            }
            ContactAction::Settle => {
                next.submitting = false;
                next.status = Some(SubmitStatus::Success);
                next.fields = ContactFields::default();
            }
            ContactAction::Fail => {
                next.submitting = false;
                next.status = Some(SubmitStatus::Failure);
            }
            ContactAction::ClearStatus => next.status = None,
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+44 20 7946 0000".into(),
            message: "Hello & welcome".into(),
        }
    }

    fn apply(form: Rc<ContactForm>, action: ContactAction) -> Rc<ContactForm> {
        form.reduce(action)
    }

    #[test]
    fn test_payload_field_order_and_encoding() {
        let payload = filled().to_payload("2024-05-01T10:00:00.000Z").unwrap();
        assert_eq!(
            payload,
            "name=Ada%20Lovelace&email=ada%40example.com&phone=%2B44%2020%207946%200000\
             &message=Hello%20%26%20welcome&timestamp=2024-05-01T10%3A00%3A00.000Z"
        );
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut fields = filled();
        fields.phone = "   ".into();
        assert_eq!(
            fields.to_payload("t"),
            Err(SubmitError::MissingField("phone"))
        );
        assert_eq!(
            ContactFields::default().validate(),
            Err(SubmitError::MissingField("name"))
        );
    }

    #[test]
    fn test_submit_goes_idle_submitting_success() {
        let mut form = Rc::new(ContactForm::default());
        for field in Field::ALL {
            form = apply(form, ContactAction::Edit(field, filled().get(field).to_string()));
        }
        assert_eq!(form.fields, filled());
        assert!(!form.submitting);
        assert_eq!(form.status, None);

        form = apply(form, ContactAction::Begin);
        assert!(form.submitting);
        assert_eq!(form.status, None);

        form = apply(form, ContactAction::Settle);
        assert!(!form.submitting);
        assert_eq!(form.status, Some(SubmitStatus::Success));
        assert_eq!(form.fields, ContactFields::default());

        form = apply(form, ContactAction::ClearStatus);
        assert_eq!(form.status, None);
    }

    #[test]
    fn test_failure_keeps_fields_and_clears_later() {
        let mut form = Rc::new(ContactForm {
            fields: filled(),
            ..Default::default()
        });
        form = apply(form, ContactAction::Begin);
        form = apply(form, ContactAction::Fail);
        assert!(!form.submitting);
        assert_eq!(form.status, Some(SubmitStatus::Failure));
        assert_eq!(form.fields, filled());

        form = apply(form, ContactAction::ClearStatus);
        assert_eq!(form.status, None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubmitError::MissingField("email").to_string(),
            "missing required field: email"
        );
        assert_eq!(
            SubmitError::Request("bad header".into()).to_string(),
            "could not build request: bad header"
        );
    }
}
