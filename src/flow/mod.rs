//! The submission workflow both fronts share.
//!
//! A [`FormFlow`] owns one form's fields plus its lifecycle flags. Calling
//! [`FormFlow::submit`] walks the fixed path: raise the busy flag, validate
//! the fields in order, hand them to the backend, then notify the outcome
//! and either navigate away or reset the form. Validation stops at the
//! first broken rule and the whole attempt raises exactly one toast.
//!
//! The flow needs exclusive access for the duration of a submission, which
//! is what keeps the submit button effectively disabled while `busy` holds.

pub mod backend;
pub mod notify;
pub mod router;

use crate::error::FlowError;
use crate::form::{FormData, SuccessAction};
use crate::messages::Messages;

use self::backend::SubmissionBackend;
use self::notify::Notifier;
use self::router::Router;

/// Where a submission currently stands. Every attempt ends back at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Validating,
    Submitting,
    Rejected,
    Succeeded,
}

/// Collaborators a submission talks to besides the fields themselves.
pub struct FlowEnv<'a, F> {
    pub backend: &'a dyn SubmissionBackend<F>,
    pub notifier: &'a dyn Notifier,
    pub router: &'a dyn Router,
    pub messages: Messages<'a>,
}

/// Terminal result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(SuccessAction),
    Rejected(FlowError),
}

/// One form's fields together with its submission lifecycle.
pub struct FormFlow<F: FormData> {
    fields: F,
    busy: bool,
    state: FlowState,
}

impl<F: FormData> FormFlow<F> {
    pub fn new(fields: F) -> FormFlow<F> {
        FormFlow {
            fields,
            busy: false,
            state: FlowState::Idle,
        }
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Runs one submission attempt to completion.
    ///
    /// Rejected fields stay on the form untouched. A successful attempt
    /// performs the variant's success action, which either records a
    /// navigation on the router or resets the fields to their defaults.
    pub async fn submit(&mut self, env: &FlowEnv<'_, F>) -> SubmitOutcome {
        self.busy = true;
        self.state = FlowState::Validating;

        if let Err(error) = self.fields.validate() {
            return self.reject(env, error);
        }

        self.state = FlowState::Submitting;
        if let Err(error) = env.backend.submit(&self.fields).await {
            return self.reject(env, error);
        }

        self.state = FlowState::Succeeded;
        env.notifier.notify(env.messages.success(F::VARIANT));

        let action = F::VARIANT.success_action();
        match action {
            SuccessAction::Navigate(path) => env.router.navigate(path),
            SuccessAction::ResetFields => self.fields = F::default(),
        }

        self.settle();
        SubmitOutcome::Succeeded(action)
    }

    // Rejections surface through the notifier alone; the toast is the whole
    // error report and the fields stay put for the next attempt.
    fn reject(&mut self, env: &FlowEnv<'_, F>, error: FlowError) -> SubmitOutcome {
        self.state = FlowState::Rejected;
        env.notifier.notify(env.messages.failure(error, F::VARIANT));

        self.settle();
        SubmitOutcome::Rejected(error)
    }

    fn settle(&mut self) {
        self.busy = false;
        self.state = FlowState::Idle;
    }
}
