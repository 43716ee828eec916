use super::notifications::Notifier;
use crate::app::domain::contact::{ContactSubmission, ValidationError};
use crate::app::infrastructure::submission::SubmissionChannel;
use crate::app::view::ContactFormView;

const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("a submission is already in flight")]
    InFlight,
}

pub struct ContactController {
    form: Box<dyn ContactFormView>,
    channel: Box<dyn SubmissionChannel>,
    state: FormState,
    // Kept until the outcome arrives so the thank-you can be personalized.
    in_flight: Option<ContactSubmission>,
}

impl ContactController {
    pub fn new(form: Box<dyn ContactFormView>, channel: Box<dyn SubmissionChannel>) -> Self {
        Self {
            form,
            channel,
            state: FormState::Idle,
            in_flight: None,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Validate the form and hand it to the submission channel.
    pub fn submit(&mut self, notifier: &mut Notifier<'_>) -> Result<(), SubmitError> {
        if self.state == FormState::Submitting {
            return Err(SubmitError::InFlight);
        }

        self.form.set_busy(true);
        let submission = self.form.read();

        if let Err(e) = submission.validate() {
            tracing::debug!("Contact form rejected: {:?}", e);
            self.state = FormState::Idle;
            notifier.error(e.to_string());
            self.form.set_busy(false);
            return Err(e.into());
        }

        self.state = FormState::Submitting;
        self.in_flight = Some(submission.clone());
        self.channel.dispatch(submission);
        Ok(())
    }

    /// Outcome of the submission dispatched by `submit`.
    pub fn finish(&mut self, result: Result<(), String>, notifier: &mut Notifier<'_>) {
        if self.state != FormState::Submitting {
            tracing::warn!("Ignoring submission result with no submission in flight");
            return;
        }
        let submission = self.in_flight.take().unwrap_or_default();

        match result {
            Ok(()) => {
                notifier.success(submission.thank_you_message());
                self.form.clear();
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                notifier.error(FAILURE_MESSAGE);
            }
        }

        self.state = FormState::Done;
        self.form.set_busy(false);
    }
}
