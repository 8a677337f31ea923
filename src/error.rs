/// Reasons a form submission is refused.
///
/// Every variant is user-correctable: the form stays populated and a single
/// toast describes the problem. Validation produces the first four; the
/// credential stub produces the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// One or more required fields are empty.
    #[error("one or more required fields are empty")]
    MissingFields,

    /// The confirmation field does not equal the password.
    #[error("password confirmation does not match")]
    PasswordMismatch,

    /// The password is below the minimum length.
    #[error("password is shorter than the minimum length")]
    PasswordTooShort,

    /// The terms-of-use checkbox was left unchecked.
    #[error("terms of use were not accepted")]
    TermsNotAccepted,

    /// The submitted pair does not match the accepted stub credentials.
    #[error("email or password is incorrect")]
    InvalidCredentials,
}
