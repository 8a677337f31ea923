//! Beacon auth card forms (login and signup tabs).

use serde::Deserialize;

use crate::error::FlowError;
use crate::form::{FormData, Variant, MIN_PASSWORD_LEN};

#[derive(Deserialize, Default, Debug, Clone)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

impl FormData for LoginFormData {
    const VARIANT: Variant = Variant::BeaconLogin;

    fn validate(&self) -> Result<(), FlowError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FlowError::MissingFields);
        }

        Ok(())
    }
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct SignupFormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormData for SignupFormData {
    const VARIANT: Variant = Variant::BeaconSignup;

    fn validate(&self) -> Result<(), FlowError> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FlowError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(FlowError::PasswordMismatch);
        }

        // Length is in characters, not bytes.
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FlowError::PasswordTooShort);
        }

        Ok(())
    }
}
