use std::cell::RefCell;

/// Client-side navigation seam. Submissions only ever target fixed paths.
pub trait Router {
    fn navigate(&self, path: &str);
}

/// Router that remembers the last requested path instead of acting on it.
///
/// The HTTP handlers run a submission to completion and then turn the
/// recorded target into a redirect response.
#[derive(Default)]
pub struct RecordingRouter {
    target: RefCell<Option<String>>,
}

impl RecordingRouter {
    pub fn new() -> RecordingRouter {
        RecordingRouter::default()
    }

    /// Removes and returns the recorded target, if any.
    pub fn take_target(&self) -> Option<String> {
        self.target.borrow_mut().take()
    }
}

impl Router for RecordingRouter {
    fn navigate(&self, path: &str) {
        *self.target.borrow_mut() = Some(path.to_string());
    }
}
