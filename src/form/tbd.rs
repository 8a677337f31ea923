//! TBD login and signup forms, plus the fixed select options.

use serde::Deserialize;

use crate::error::FlowError;
use crate::form::{empty_as_none, FormData, Variant, MIN_PASSWORD_LEN};

#[derive(Deserialize, Default, Debug, Clone)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

impl FormData for LoginFormData {
    const VARIANT: Variant = Variant::TbdLogin;

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
    pub company: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub timezone: Option<Timezone>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub source: Option<Source>,
    #[serde(default)]
    pub accept_terms: bool,
    #[serde(default)]
    pub newsletter: bool,
}

impl SignupFormData {
    pub fn timezone_is(&self, timezone: &Timezone) -> bool {
        self.timezone.as_ref() == Some(timezone)
    }

    pub fn role_is(&self, role: &Role) -> bool {
        self.role.as_ref() == Some(role)
    }

    pub fn source_is(&self, source: &Source) -> bool {
        self.source.as_ref() == Some(source)
    }
}

impl FormData for SignupFormData {
    const VARIANT: Variant = Variant::TbdSignup;

    fn validate(&self) -> Result<(), FlowError> {
        // Role, source and newsletter are optional.
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.company.is_empty()
            || self.timezone.is_none()
        {
            return Err(FlowError::MissingFields);
        }

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FlowError::PasswordTooShort);
        }

        if !self.accept_terms {
            return Err(FlowError::TermsNotAccepted);
        }

        Ok(())
    }
}

/// Timezones offered on signup, in display order.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timezone {
    #[serde(rename = "America/Sao_Paulo")]
    SaoPaulo,
    #[serde(rename = "America/New_York")]
    NewYork,
    #[serde(rename = "America/Los_Angeles")]
    LosAngeles,
    #[serde(rename = "Europe/London")]
    London,
    #[serde(rename = "Europe/Paris")]
    Paris,
    #[serde(rename = "Asia/Tokyo")]
    Tokyo,
    #[serde(rename = "Australia/Sydney")]
    Sydney,
}

impl Timezone {
    pub const ALL: [Timezone; 7] = [
        Timezone::SaoPaulo,
        Timezone::NewYork,
        Timezone::LosAngeles,
        Timezone::London,
        Timezone::Paris,
        Timezone::Tokyo,
        Timezone::Sydney,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Timezone::SaoPaulo => "America/Sao_Paulo",
            Timezone::NewYork => "America/New_York",
            Timezone::LosAngeles => "America/Los_Angeles",
            Timezone::London => "Europe/London",
            Timezone::Paris => "Europe/Paris",
            Timezone::Tokyo => "Asia/Tokyo",
            Timezone::Sydney => "Australia/Sydney",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timezone::SaoPaulo => "Brasil (GMT-3)",
            Timezone::NewYork => "EUA - Costa Leste (GMT-5)",
            Timezone::LosAngeles => "EUA - Costa Oeste (GMT-8)",
            Timezone::London => "Reino Unido (GMT+0)",
            Timezone::Paris => "Europa Central (GMT+1)",
            Timezone::Tokyo => "Japão (GMT+9)",
            Timezone::Sydney => "Austrália (GMT+10)",
        }
    }
}

/// Job roles offered on signup, in display order.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Dev,
    Dba,
    Devops,
    Cto,
    TechLead,
    ProductManager,
    DataAnalyst,
    Other,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Dev,
        Role::Dba,
        Role::Devops,
        Role::Cto,
        Role::TechLead,
        Role::ProductManager,
        Role::DataAnalyst,
        Role::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Role::Dev => "dev",
            Role::Dba => "dba",
            Role::Devops => "devops",
            Role::Cto => "cto",
            Role::TechLead => "tech_lead",
            Role::ProductManager => "product_manager",
            Role::DataAnalyst => "data_analyst",
            Role::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Dev => "Desenvolvedor",
            Role::Dba => "DBA",
            Role::Devops => "DevOps",
            Role::Cto => "CTO",
            Role::TechLead => "Tech Lead",
            Role::ProductManager => "Product Manager",
            Role::DataAnalyst => "Analista de Dados",
            Role::Other => "Outro",
        }
    }
}

/// How-did-you-hear-about-us options, in display order.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Google,
    Linkedin,
    Twitter,
    Github,
    Friend,
    Blog,
    Other,
}

impl Source {
    pub const ALL: [Source; 7] = [
        Source::Google,
        Source::Linkedin,
        Source::Twitter,
        Source::Github,
        Source::Friend,
        Source::Blog,
        Source::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Source::Google => "google",
            Source::Linkedin => "linkedin",
            Source::Twitter => "twitter",
            Source::Github => "github",
            Source::Friend => "friend",
            Source::Blog => "blog",
            Source::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Source::Google => "Google",
            Source::Linkedin => "LinkedIn",
            Source::Twitter => "Twitter / X",
            Source::Github => "GitHub",
            Source::Friend => "Indicação de amigo",
            Source::Blog => "Blog / Artigo",
            Source::Other => "Outro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_signup() -> SignupFormData {
        SignupFormData {
            name: "João Silva".to_string(),
            email: "joao@empresa.com".to_string(),
            password: "abc123".to_string(),
            company: "Acme Inc.".to_string(),
            timezone: Some(Timezone::SaoPaulo),
            role: Some(Role::Dev),
            source: Some(Source::Google),
            accept_terms: true,
            newsletter: false,
        }
    }

    #[test]
    fn login_requires_email_and_password() {
        let form = LoginFormData {
            email: "joao@empresa.com".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(FlowError::MissingFields));
    }

    #[test]
    fn login_accepts_short_passwords() {
        let form = LoginFormData {
            email: "palmeiras".to_string(),
            password: "1914".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn signup_requires_name_email_password_company_and_timezone() {
        let mut form = filled_signup();
        form.name.clear();
        assert_eq!(form.validate(), Err(FlowError::MissingFields));

        let mut form = filled_signup();
        form.email.clear();
        assert_eq!(form.validate(), Err(FlowError::MissingFields));

        let mut form = filled_signup();
        form.password.clear();
        assert_eq!(form.validate(), Err(FlowError::MissingFields));

        let mut form = filled_signup();
        form.company.clear();
        assert_eq!(form.validate(), Err(FlowError::MissingFields));

        let mut form = filled_signup();
        form.timezone = None;
        assert_eq!(form.validate(), Err(FlowError::MissingFields));
    }

    #[test]
    fn signup_treats_role_and_source_as_optional() {
        let mut form = filled_signup();
        form.role = None;
        form.source = None;
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn signup_rejects_short_password() {
        let mut form = filled_signup();
        form.password = "12345".to_string();
        assert_eq!(form.validate(), Err(FlowError::PasswordTooShort));
    }

    #[test]
    fn signup_rejects_unaccepted_terms() {
        let mut form = filled_signup();
        form.accept_terms = false;
        assert_eq!(form.validate(), Err(FlowError::TermsNotAccepted));
    }

    #[test]
    fn length_is_reported_before_terms() {
        let mut form = filled_signup();
        form.password = "123".to_string();
        form.accept_terms = false;
        assert_eq!(form.validate(), Err(FlowError::PasswordTooShort));
    }

    #[test]
    fn presence_is_reported_before_terms() {
        let mut form = filled_signup();
        form.timezone = None;
        form.accept_terms = false;
        assert_eq!(form.validate(), Err(FlowError::MissingFields));
    }

    #[test]
    fn newsletter_never_blocks_signup() {
        let mut form = filled_signup();
        form.newsletter = true;
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn option_lists_expose_wire_values_and_labels() {
        assert_eq!(Timezone::ALL.len(), 7);
        assert_eq!(Timezone::SaoPaulo.value(), "America/Sao_Paulo");
        assert_eq!(Timezone::SaoPaulo.label(), "Brasil (GMT-3)");

        assert_eq!(Role::ALL.len(), 8);
        assert_eq!(Role::TechLead.value(), "tech_lead");
        assert_eq!(Role::DataAnalyst.label(), "Analista de Dados");

        assert_eq!(Source::ALL.len(), 7);
        assert_eq!(Source::Friend.label(), "Indicação de amigo");
        assert_eq!(Source::Twitter.label(), "Twitter / X");
    }

    #[test]
    fn selected_option_helpers_match_current_fields() {
        let form = filled_signup();
        assert!(form.timezone_is(&Timezone::SaoPaulo));
        assert!(!form.timezone_is(&Timezone::Tokyo));
        assert!(form.role_is(&Role::Dev));
        assert!(form.source_is(&Source::Google));

        let blank = SignupFormData::default();
        assert!(!blank.timezone_is(&Timezone::SaoPaulo));
        assert!(!blank.role_is(&Role::Other));
    }
}
