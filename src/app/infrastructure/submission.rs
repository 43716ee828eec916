//! The contact form's submission collaborator.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use fltk::app::Sender;

use super::error::{AppError, Result};
use crate::app::domain::contact::ContactSubmission;
use crate::app::domain::messages::Message;

/// Latency of the simulated submission.
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(2);

/// Delivers a submission somewhere. Runs off the UI thread, so it may block.
pub trait Submitter: Send + Sync {
    fn submit(&self, submission: &ContactSubmission) -> Result<()>;
}

/// Stand-in for a real endpoint: waits, logs, and always succeeds.
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn new() -> Self {
        Self::with_latency(SIMULATED_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, submission: &ContactSubmission) -> Result<()> {
        thread::sleep(self.latency);
        tracing::info!(
            name = %submission.name,
            email = %submission.email,
            project_type = %submission.project_type,
            "Form submitted"
        );
        Ok(())
    }
}

/// Hands a validated submission to the collaborator without blocking the UI.
/// The outcome comes back later as `Message::SubmissionFinished`.
pub trait SubmissionChannel {
    fn dispatch(&mut self, submission: ContactSubmission);
}

/// Run the submitter to completion. A panic counts as a failed submission
/// so the form always hears back.
pub fn run_submission(
    submitter: &dyn Submitter,
    submission: &ContactSubmission,
) -> std::result::Result<(), String> {
    panic::catch_unwind(AssertUnwindSafe(|| submitter.submit(submission)))
        .unwrap_or_else(|_| Err(AppError::Submission("submitter panicked".to_string())))
        .map_err(|e| e.to_string())
}

pub struct ThreadedSubmission {
    submitter: Arc<dyn Submitter>,
    sender: Sender<Message>,
}

impl ThreadedSubmission {
    pub fn new(submitter: Arc<dyn Submitter>, sender: Sender<Message>) -> Self {
        Self { submitter, sender }
    }
}

impl SubmissionChannel for ThreadedSubmission {
    fn dispatch(&mut self, submission: ContactSubmission) {
        let submitter = self.submitter.clone();
        let s = self.sender;
        thread::spawn(move || {
            let result = run_submission(submitter.as_ref(), &submission);
            s.send(Message::SubmissionFinished(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            project_type: "DeFi".into(),
            message: "hi".into(),
        }
    }

    struct PanickingSubmitter;

    impl Submitter for PanickingSubmitter {
        fn submit(&self, _submission: &ContactSubmission) -> Result<()> {
            panic!("endpoint exploded");
        }
    }

    struct RejectingSubmitter;

    impl Submitter for RejectingSubmitter {
        fn submit(&self, _submission: &ContactSubmission) -> Result<()> {
            Err(AppError::Submission("502 from endpoint".to_string()))
        }
    }

    #[test]
    fn test_simulated_submitter_succeeds() {
        let submitter = SimulatedSubmitter::with_latency(Duration::ZERO);
        assert!(submitter.submit(&submission()).is_ok());
        assert_eq!(run_submission(&submitter, &submission()), Ok(()));
    }

    #[test]
    fn test_panicking_submitter_reports_failure() {
        let result = run_submission(&PanickingSubmitter, &submission());
        assert_eq!(
            result,
            Err("Submission error: submitter panicked".to_string())
        );
    }

    #[test]
    fn test_submitter_error_is_passed_on() {
        let result = run_submission(&RejectingSubmitter, &submission());
        assert_eq!(result, Err("Submission error: 502 from endpoint".to_string()));
    }

    #[test]
    fn test_default_latency() {
        assert_eq!(SimulatedSubmitter::default().latency, SIMULATED_LATENCY);
    }
}
