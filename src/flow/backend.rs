use std::time::Duration;

use crate::error::FlowError;
use crate::form::tbd;

/// How long the simulated beacon backend waits before answering, mirroring
/// the spinner time of the hosted demo.
pub const BEACON_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// The one account the demo login knows about.
///
/// There is no account store behind these fronts. The pair is a visible
/// placeholder and must be swapped for a real credential check before any
/// production use.
pub const STUB_CREDENTIALS: StubCredentials = StubCredentials {
    email: "palmeiras",
    password: "1914",
};

pub struct StubCredentials {
    pub email: &'static str,
    pub password: &'static str,
}

impl StubCredentials {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}

/// Destination of a submission once validation has passed.
#[async_trait::async_trait]
pub trait SubmissionBackend<F>: Sync {
    async fn submit(&self, fields: &F) -> Result<(), FlowError>;
}

/// Backend that accepts everything after a fixed delay.
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> SimulatedBackend {
        SimulatedBackend { delay }
    }

    /// A simulated backend that answers without waiting.
    pub fn instant() -> SimulatedBackend {
        SimulatedBackend::new(Duration::ZERO)
    }
}

#[async_trait::async_trait]
impl<F: Sync> SubmissionBackend<F> for SimulatedBackend {
    async fn submit(&self, _fields: &F) -> Result<(), FlowError> {
        if !self.delay.is_zero() {
            actix_web::rt::time::sleep(self.delay).await;
        }

        Ok(())
    }
}

/// Login backend that accepts exactly the placeholder account.
pub struct StubCredentialBackend;

#[async_trait::async_trait]
impl SubmissionBackend<tbd::LoginFormData> for StubCredentialBackend {
    async fn submit(&self, fields: &tbd::LoginFormData) -> Result<(), FlowError> {
        if !STUB_CREDENTIALS.matches(&fields.email, &fields.password) {
            return Err(FlowError::InvalidCredentials);
        }

        Ok(())
    }
}
