//! Form data for the four submission variants.
//!
//! Each variant is its own struct, deserialized straight from the posted
//! urlencoded body and validated as a whole. Rules run in a fixed order and
//! the first failing rule wins; there is no per-field error state.

use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer};

use crate::error::FlowError;

pub mod beacon;
pub mod tbd;

/// Minimum password length enforced on signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The four form shapes, each with its own required-field set and rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    BeaconLogin,
    BeaconSignup,
    TbdLogin,
    TbdSignup,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::BeaconLogin => "beacon-login",
            Variant::BeaconSignup => "beacon-signup",
            Variant::TbdLogin => "tbd-login",
            Variant::TbdSignup => "tbd-signup",
        }
    }

    pub fn is_login(self) -> bool {
        matches!(self, Variant::BeaconLogin | Variant::TbdLogin)
    }

    /// What happens once a submission is accepted: either the user is sent
    /// to a fixed page, or (Beacon signup) the form clears in place and the
    /// auth card switches back to the login tab.
    pub fn success_action(self) -> SuccessAction {
        match self {
            Variant::BeaconLogin | Variant::TbdLogin => SuccessAction::Navigate("/dashboard"),
            Variant::BeaconSignup => SuccessAction::ResetFields,
            Variant::TbdSignup => SuccessAction::Navigate("/login"),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Success behavior of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessAction {
    /// Redirect to a fixed target page.
    Navigate(&'static str),
    /// Stay on the page with the fields reset to their defaults.
    ResetFields,
}

/// A deserialized form body that knows how to validate itself.
pub trait FormData: Default {
    const VARIANT: Variant;

    /// Run the variant's rules in order; the first failure wins.
    ///
    /// Pure: two calls over unchanged fields give the same answer.
    fn validate(&self) -> Result<(), FlowError>;
}

/// Selects post their placeholder as an empty string; treat that as unset
/// instead of failing enum deserialization.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => T::deserialize(value.into_deserializer()).map(Some),
    }
}
