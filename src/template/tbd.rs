//! TBD pages: landing, login, signup and the terms text.

use askama::Template;

use crate::flow::notify::Toast;
use crate::form::tbd::{LoginFormData, Role, SignupFormData, Source, Timezone};

#[derive(Template)]
#[template(path = "tbd/landing.html")]
pub struct LandingTemplate;

#[derive(Template)]
#[template(path = "tbd/login.html")]
pub struct LoginTemplate {
    pub toasts: Vec<Toast>,
    pub form: LoginFormData,
}

#[derive(Template)]
#[template(path = "tbd/signup.html")]
pub struct SignupTemplate {
    pub toasts: Vec<Toast>,
    pub form: SignupFormData,
    pub timezones: &'static [Timezone],
    pub roles: &'static [Role],
    pub sources: &'static [Source],
}

impl SignupTemplate {
    pub fn new(toasts: Vec<Toast>, form: SignupFormData) -> SignupTemplate {
        SignupTemplate {
            toasts,
            form,
            timezones: &Timezone::ALL,
            roles: &Role::ALL,
            sources: &Source::ALL,
        }
    }
}

#[derive(Template)]
#[template(path = "tbd/terms.html")]
pub struct TermsTemplate;
