use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACK_MESSAGE: &str = "Message sent! I will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// First empty field in form order.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Acknowledgment shown to the visitor once a message was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl Ack {
    pub fn new() -> Self {
        Self {
            message: ACK_MESSAGE.to_string(),
            received_at: Utc::now(),
        }
    }
}

impl Default for Ack {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please fill in the {0} field")]
    MissingField(Field),
    #[error("Couldn't encode message: {0}")]
    Encode(String),
    #[error("Couldn't deliver message: {0}")]
    Delivery(String),
}

/// Hands a contact message to whatever delivers it.
pub trait ContactSubmitter {
    fn submit(&self, contact: &ContactMessage) -> Result<Ack, SubmitError>;
}

/// Logs the message instead of sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl ContactSubmitter for LogSubmitter {
    fn submit(&self, contact: &ContactMessage) -> Result<Ack, SubmitError> {
        let record =
            serde_json::to_string(contact).map_err(|e| SubmitError::Encode(e.to_string()))?;
        log::info!("Form submitted: {record}");
        Ok(Ack::new())
    }
}

/// Validates `form`, submits it and clears it on success.
///
/// On error the form is left as it was so the visitor can fix it and retry.
pub fn submit_contact<S>(form: &mut ContactMessage, submitter: &S) -> Result<Ack, SubmitError>
where
    S: ContactSubmitter + ?Sized,
{
    if let Some(field) = form.missing_field() {
        return Err(SubmitError::MissingField(field));
    }
    let ack = submitter.submit(form)?;
    form.clear();
    Ok(ack)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Cell<usize>,
        last: RefCell<Option<ContactMessage>>,
    }

    impl ContactSubmitter for Recorder {
        fn submit(&self, contact: &ContactMessage) -> Result<Ack, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(contact.clone());
            Ok(Ack::new())
        }
    }

    struct Offline;

    impl ContactSubmitter for Offline {
        fn submit(&self, _contact: &ContactMessage) -> Result<Ack, SubmitError> {
            Err(SubmitError::Delivery("mail relay unreachable".to_string()))
        }
    }

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Robot arm".to_string(),
            message: "Can it juggle?".to_string(),
        }
    }

    #[test]
    fn test_submit_clears_and_acks_once() {
        let recorder = Recorder::default();
        let mut form = filled();
        let ack = submit_contact(&mut form, &recorder).expect("complete form should submit");
        assert_eq!(ack.message, ACK_MESSAGE);
        assert_eq!(recorder.calls.get(), 1);
        assert_eq!(recorder.last.borrow().as_ref(), Some(&filled()));
        assert_eq!(form, ContactMessage::default());
        for field in Field::ALL {
            assert!(form.get(field).is_empty());
        }
    }

    #[test]
    fn test_missing_field_keeps_form() {
        let recorder = Recorder::default();
        let mut form = filled();
        form.set(Field::Subject, String::new());
        let err = submit_contact(&mut form, &recorder).unwrap_err();
        assert_eq!(err, SubmitError::MissingField(Field::Subject));
        assert_eq!(err.to_string(), "Please fill in the subject field");
        assert_eq!(recorder.calls.get(), 0);
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_reports_first_missing_field() {
        let mut form = ContactMessage::default();
        assert_eq!(form.missing_field(), Some(Field::Name));
        form.set(Field::Name, "Ada".to_string());
        form.set(Field::Message, "hi".to_string());
        assert_eq!(form.missing_field(), Some(Field::Email));
    }

    #[test]
    fn test_delivery_error_keeps_form() {
        let mut form = filled();
        let err = submit_contact(&mut form, &Offline).unwrap_err();
        assert!(matches!(err, SubmitError::Delivery(_)));
        assert_eq!(form, filled());
    }

    #[test]
    fn test_log_submitter_acks() {
        let mut form = filled();
        let ack = submit_contact(&mut form, &LogSubmitter).expect("log submitter never fails");
        assert_eq!(ack.message, ACK_MESSAGE);
        assert!(form.missing_field().is_some());
    }

    #[test]
    fn test_record_is_json() {
        let json = serde_json::to_value(filled()).expect("message should serialize");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json.as_object().map(|o| o.len()), Some(4));
    }
}
