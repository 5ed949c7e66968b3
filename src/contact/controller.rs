use std::{future::Future, time::Duration};

use leptos::prelude::{RwSignal, Update};

use super::{
    form::{ContactFormModel, SubmissionState, SubmitBlocked},
    transport::{ContactTransport, SubmissionError},
};
use crate::site::SUCCESS_RESET_DELAY;

/// Access to the form model a controller drives.
///
/// Returns `None` when the model is gone, e.g. the component owning it was
/// unmounted while a request was in flight.
pub trait FormHandle {
    fn update_model<R>(&self, f: impl FnOnce(&mut ContactFormModel) -> R) -> Option<R>;
}

impl FormHandle for RwSignal<ContactFormModel> {
    fn update_model<R>(&self, f: impl FnOnce(&mut ContactFormModel) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Waits out a delay on whatever runtime the controller lives on.
pub trait Sleep {
    fn sleep(&self, delay: Duration) -> impl Future<Output = ()>;
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Sent,
    Failed(SubmissionError),
    /// A request is already in flight.
    Ignored,
    /// Validation failed; nothing was sent.
    Invalid,
    /// The form went away before the answer arrived.
    Detached,
}

#[derive(Debug, Clone)]
pub struct SubmissionController<T, M> {
    transport: T,
    form: M,
}

impl<T, M> SubmissionController<T, M>
where
    T: ContactTransport,
    M: FormHandle,
{
    pub fn new(transport: T, form: M) -> Self {
        Self { transport, form }
    }

    /// Validates the current draft and, if it passes, sends it once.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = match self.form.update_model(ContactFormModel::begin_submit) {
            Some(Ok(submission)) => submission,
            Some(Err(SubmitBlocked::InFlight)) => return SubmitOutcome::Ignored,
            Some(Err(SubmitBlocked::Invalid)) => return SubmitOutcome::Invalid,
            None => return SubmitOutcome::Detached,
        };

        let result = self.transport.send(&submission).await;
        if let Err(err) = &result {
            log::error!("Error sending message: {err}");
        }

        match self.form.update_model(|m| m.finish(result.is_ok())) {
            Some(SubmissionState::Succeeded) => SubmitOutcome::Sent,
            Some(_) => match result {
                Err(err) => SubmitOutcome::Failed(err),
                Ok(()) => SubmitOutcome::Detached,
            },
            None => SubmitOutcome::Detached,
        }
    }

    /// Puts a succeeded form back to `Idle` after [`SUCCESS_RESET_DELAY`].
    /// Does nothing if the form moved on or went away in the meantime.
    pub async fn reset_when_due(&self, sleeper: &impl Sleep) {
        sleeper.sleep(SUCCESS_RESET_DELAY).await;
        self.form.update_model(ContactFormModel::expire_success);
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use tokio::time::Instant;

    use super::*;
    use crate::contact::{ContactSubmission, Field};

    type SharedModel = Rc<RefCell<ContactFormModel>>;

    impl FormHandle for SharedModel {
        fn update_model<R>(&self, f: impl FnOnce(&mut ContactFormModel) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    /// Answers every request the same way and records what it saw.
    struct FakeTransport {
        accept: bool,
        model: SharedModel,
        sent: RefCell<Vec<ContactSubmission>>,
        states_on_wire: RefCell<Vec<SubmissionState>>,
    }

    impl FakeTransport {
        fn new(accept: bool, model: &SharedModel) -> Self {
            Self {
                accept,
                model: Rc::clone(model),
                sent: RefCell::new(Vec::new()),
                states_on_wire: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContactTransport for &FakeTransport {
        async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
            self.sent.borrow_mut().push(submission.clone());
            self.states_on_wire
                .borrow_mut()
                .push(self.model.borrow().state());
            // let other futures on the task run while the request is "on the wire"
            tokio::task::yield_now().await;
            if self.accept {
                Ok(())
            } else {
                Err(SubmissionError::Rejected(reqwest::StatusCode::BAD_GATEWAY))
            }
        }
    }

    struct TokioSleep;

    impl Sleep for TokioSleep {
        fn sleep(&self, delay: Duration) -> impl Future<Output = ()> {
            tokio::time::sleep(delay)
        }
    }

    fn filled_model() -> SharedModel {
        let mut model = ContactFormModel::default();
        model.set_field(Field::FullName, "Jane Doe".to_string());
        model.set_field(Field::Email, "jane@example.com".to_string());
        model.set_field(Field::Phone, String::new());
        model.set_field(Field::Message, "Hello".to_string());
        Rc::new(RefCell::new(model))
    }

    #[tokio::test]
    async fn test_submit_success() {
        // Arrange
        let model = filled_model();
        let transport = FakeTransport::new(true, &model);
        let sut = SubmissionController::new(&transport, Rc::clone(&model));
        assert_eq!(model.borrow().state(), SubmissionState::Idle);

        // Act
        let outcome = sut.submit().await;

        // Assert
        assert!(matches!(outcome, SubmitOutcome::Sent));
        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(
            *transport.states_on_wire.borrow(),
            vec![SubmissionState::Submitting]
        );
        assert_eq!(model.borrow().state(), SubmissionState::Succeeded);
        assert!(model.borrow().form().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_resets_after_delay() {
        let model = filled_model();
        let transport = FakeTransport::new(true, &model);
        let sut = SubmissionController::new(&transport, Rc::clone(&model));
        assert!(matches!(sut.submit().await, SubmitOutcome::Sent));

        let started = Instant::now();
        let reset = sut.reset_when_due(&TokioSleep);
        tokio::pin!(reset);

        tokio::select! {
            _ = &mut reset => panic!("form reset before the delay"),
            _ = tokio::time::sleep(SUCCESS_RESET_DELAY - Duration::from_millis(1)) => {}
        }
        assert_eq!(model.borrow().state(), SubmissionState::Succeeded);

        reset.await;
        assert!(started.elapsed() >= SUCCESS_RESET_DELAY);
        assert_eq!(model.borrow().state(), SubmissionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_leaves_failed_form_alone() {
        let model = filled_model();
        let transport = FakeTransport::new(false, &model);
        let sut = SubmissionController::new(&transport, Rc::clone(&model));
        sut.submit().await;

        sut.reset_when_due(&TokioSleep).await;

        assert_eq!(model.borrow().state(), SubmissionState::Failed);
        assert_eq!(model.borrow().form().full_name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_submit_rejected() {
        // Arrange
        let model = filled_model();
        let transport = FakeTransport::new(false, &model);
        let sut = SubmissionController::new(&transport, Rc::clone(&model));

        // Act
        let outcome = sut.submit().await;

        // Assert
        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(SubmissionError::Rejected(status)) if status.as_u16() == 502
        ));
        assert_eq!(transport.sent.borrow().len(), 1);
        let model = model.borrow();
        assert_eq!(model.state(), SubmissionState::Failed);
        assert_eq!(model.form().full_name, "Jane Doe");
        assert_eq!(model.form().email, "jane@example.com");
        assert_eq!(model.form().message, "Hello");
    }

    #[tokio::test]
    async fn test_invalid_form_never_sends() {
        let model = Rc::new(RefCell::new(ContactFormModel::default()));
        let transport = FakeTransport::new(true, &model);
        let sut = SubmissionController::new(&transport, Rc::clone(&model));

        let outcome = sut.submit().await;

        assert!(matches!(outcome, SubmitOutcome::Invalid));
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(model.borrow().errors().len(), 3);
        assert_eq!(model.borrow().state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_ignored() {
        let model = filled_model();
        let transport = FakeTransport::new(true, &model);
        let sut = SubmissionController::new(&transport, Rc::clone(&model));

        let (first, second) = tokio::join!(sut.submit(), sut.submit());

        assert!(matches!(first, SubmitOutcome::Sent));
        assert!(matches!(second, SubmitOutcome::Ignored));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let model = filled_model();
        let transport = FakeTransport::new(false, &model);
        let sut = SubmissionController::new(&transport, Rc::clone(&model));

        sut.submit().await;
        sut.submit().await;

        assert_eq!(transport.sent.borrow().len(), 2);
        assert_eq!(model.borrow().state(), SubmissionState::Failed);
    }

    #[tokio::test]
    async fn test_detached_form() {
        struct Gone;
        impl FormHandle for Gone {
            fn update_model<R>(&self, _f: impl FnOnce(&mut ContactFormModel) -> R) -> Option<R> {
                None
            }
        }

        let model = filled_model();
        let transport = FakeTransport::new(true, &model);
        let sut = SubmissionController::new(&transport, Gone);

        assert!(matches!(sut.submit().await, SubmitOutcome::Detached));
        assert!(transport.sent.borrow().is_empty());
    }
}
