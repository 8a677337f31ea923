//! One-shot toasts carried in the cookie session.
//!
//! A submission stashes its toast here; the next rendered page drains the
//! queue, so notifications survive the redirect after a successful login
//! or signup and show up exactly once.

use actix_session::{Session, SessionExt};
use actix_utils::future::{ready, Ready};
use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest};

use crate::flow::notify::{Notifier, Toast};

const FLASH_KEY: &str = "flash";

pub fn push_toast(session: &Session, toast: Toast) {
    let mut toasts: Vec<Toast> = session.get(FLASH_KEY).unwrap_or(None).unwrap_or_default();
    toasts.push(toast);

    if let Err(error) = session.insert(FLASH_KEY, toasts) {
        log::warn!("couldn't stash toast in the session: {error}");
    }
}

pub fn take_toasts(session: &Session) -> Vec<Toast> {
    let toasts = session
        .get::<Vec<Toast>>(FLASH_KEY)
        .unwrap_or(None)
        .unwrap_or_default();
    session.remove(FLASH_KEY);

    toasts
}

/// Notifier that stashes toasts for the next rendered page.
pub struct SessionNotifier<'a> {
    session: &'a Session,
}

impl<'a> SessionNotifier<'a> {
    pub fn new(session: &'a Session) -> SessionNotifier<'a> {
        SessionNotifier { session }
    }
}

impl Notifier for SessionNotifier<'_> {
    fn notify(&self, toast: Toast) {
        push_toast(self.session, toast);
    }
}

/// Extractor draining the pending toasts for the page being rendered.
pub struct Flash(Vec<Toast>);

impl Flash {
    pub fn into_toasts(self) -> Vec<Toast> {
        self.0
    }
}

impl FromRequest for Flash {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();

        ready(Ok(Flash(take_toasts(&session))))
    }
}
