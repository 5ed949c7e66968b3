mod controller;
mod form;
mod transport;

pub use controller::{FormHandle, Sleep, SubmissionController, SubmitOutcome};
pub use form::{
    validate, ContactForm, ContactFormModel, ContactSubmission, Field, FieldError, FieldErrors,
    SubmissionState, SubmitBlocked,
};
pub use transport::{ContactTransport, HttpTransport, SubmissionError};
