use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::site::MAX_MESSAGE_LEN;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern should compile")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ().-]+$").expect("phone pattern should compile"));

const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FullName, Field::Email, Field::Phone, Field::Message];

    /// Wire and DOM name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Invalid format")]
    Format,
    #[error("Must be at most {max} characters")]
    Length { max: usize },
}

impl FieldError {
    /// Message shown under the offending input.
    pub fn message(self, field: Field) -> String {
        match (self, field) {
            (FieldError::Required, Field::FullName) => "Full name is required".to_string(),
            (FieldError::Required, Field::Email) => "Email is required".to_string(),
            (FieldError::Required, Field::Message) => "Message is required".to_string(),
            (FieldError::Format, Field::Email) => "Please enter a valid email address".to_string(),
            (FieldError::Format, Field::Phone) => "Please enter a valid phone number".to_string(),
            (FieldError::Length { max }, _) => {
                format!("{} must be at most {max} characters", field.label())
            }
            (err, _) => err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, err: FieldError) {
        self.0.insert(field, err);
    }
}

/// Raw, possibly invalid values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// A contact request that passed [`validate`]. Only the validator builds one,
/// so holding a value is proof it may be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    full_name: String,
    email: String,
    phone: String,
    message: String,
}

impl ContactSubmission {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        Some(self.phone.as_str()).filter(|p| !p.is_empty())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn check_required(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

fn check_email(value: &str) -> Result<(), FieldError> {
    check_required(value)?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::Format)
    }
}

fn check_phone(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Ok(());
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if PHONE_RE.is_match(value) && PHONE_DIGITS.contains(&digits) {
        Ok(())
    } else {
        Err(FieldError::Format)
    }
}

fn check_message(value: &str) -> Result<(), FieldError> {
    check_required(value)?;
    if value.chars().count() > MAX_MESSAGE_LEN {
        return Err(FieldError::Length {
            max: MAX_MESSAGE_LEN,
        });
    }
    Ok(())
}

/// Checks every field and returns either the trimmed submission or one error
/// per failing field.
pub fn validate(form: &ContactForm) -> Result<ContactSubmission, FieldErrors> {
    let full_name = form.full_name.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();
    let message = form.message.trim();

    let mut errors = FieldErrors::default();
    let checks = [
        (Field::FullName, check_required(full_name)),
        (Field::Email, check_email(email)),
        (Field::Phone, check_phone(phone)),
        (Field::Message, check_message(message)),
    ];
    for (field, res) in checks {
        if let Err(err) = res {
            errors.insert(field, err);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ContactSubmission {
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        message: message.to_string(),
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why [`ContactFormModel::begin_submit`] refused to hand out a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    Invalid,
}

/// Everything one contact form instance knows: the draft, its errors and
/// where it is in the submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormModel {
    form: ContactForm,
    errors: FieldErrors,
    state: SubmissionState,
    attempted: bool,
}

impl ContactFormModel {
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn error_message(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(|err| err.message(field))
    }

    /// Updates one input. Once the user has tried to submit, errors follow
    /// every edit.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if self.attempted {
            self.errors = match validate(&self.form) {
                Ok(_) => FieldErrors::default(),
                Err(errors) => errors,
            };
        }
    }

    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        self.attempted = true;
        match validate(&self.form) {
            Ok(submission) => {
                self.errors = FieldErrors::default();
                self.state = SubmissionState::Submitting;
                Ok(submission)
            }
            Err(errors) => {
                self.errors = errors;
                Err(SubmitBlocked::Invalid)
            }
        }
    }

    /// Records the collaborator's answer. A success clears the draft.
    pub fn finish(&mut self, delivered: bool) -> SubmissionState {
        if !self.is_submitting() {
            return self.state;
        }
        if delivered {
            self.form = ContactForm::default();
            self.attempted = false;
            self.state = SubmissionState::Succeeded;
        } else {
            self.state = SubmissionState::Failed;
        }
        self.state
    }

    /// Fired by the reset timer.
    pub fn expire_success(&mut self) {
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
        }
    }
}
