//! User-facing copy for toasts, resolved through the translation catalogue.
//!
//! Every entry has a built-in fallback identical to the shipped `pt`
//! catalogue, so a missing or renamed key degrades to the same copy
//! instead of a broken page.

use tarjama::context::Context;
use tarjama::Translator;

use crate::error::FlowError;
use crate::flow::notify::Toast;
use crate::form::Variant;

const LOCALE: &str = "pt";
const DOMAIN: &str = "messages";

#[derive(Clone, Copy)]
pub struct Messages<'a> {
    translator: &'a Translator,
}

impl<'a> Messages<'a> {
    pub fn new(translator: &'a Translator) -> Messages<'a> {
        Messages { translator }
    }

    fn line(&self, id: &str, fallback: &str) -> String {
        match self
            .translator
            .trans(LOCALE, DOMAIN, id, Context::new(vec![], None))
        {
            Ok(message) => message,
            Err(error) => {
                log::warn!("no catalogue entry for {DOMAIN}.{id}: {error}");
                fallback.to_string()
            }
        }
    }

    /// The destructive toast shown when a submission is rejected.
    ///
    /// The missing-fields copy names what the rejected form actually asks
    /// for, so the description varies per variant.
    pub fn failure(&self, error: FlowError, variant: Variant) -> Toast {
        let (title, description) = match error {
            FlowError::MissingFields => (
                self.line("missing_fields.title", "Campos obrigatórios"),
                match variant {
                    Variant::BeaconLogin | Variant::TbdLogin => self.line(
                        "missing_fields.description.login",
                        "Por favor, preencha email e senha.",
                    ),
                    Variant::BeaconSignup => self.line(
                        "missing_fields.description.signup",
                        "Por favor, preencha todos os campos.",
                    ),
                    Variant::TbdSignup => self.line(
                        "missing_fields.description.signup_required",
                        "Por favor, preencha todos os campos obrigatórios.",
                    ),
                },
            ),
            FlowError::PasswordMismatch => (
                self.line("password_mismatch.title", "Senhas não coincidem"),
                self.line(
                    "password_mismatch.description",
                    "As senhas digitadas não são iguais.",
                ),
            ),
            FlowError::PasswordTooShort => (
                self.line("password_too_short.title", "Senha muito curta"),
                self.line(
                    "password_too_short.description",
                    "A senha deve ter no mínimo 6 caracteres.",
                ),
            ),
            FlowError::TermsNotAccepted => (
                self.line("terms_not_accepted.title", "Aceite necessário"),
                self.line(
                    "terms_not_accepted.description",
                    "Você precisa aceitar os Termos de Uso e a Política de Privacidade.",
                ),
            ),
            FlowError::InvalidCredentials => (
                self.line("invalid_credentials.title", "Credenciais inválidas"),
                self.line("invalid_credentials.description", "Email ou senha incorretos."),
            ),
        };

        Toast::destructive(title, description)
    }

    /// The toast shown when a submission goes through.
    pub fn success(&self, variant: Variant) -> Toast {
        if variant.is_login() {
            Toast::new(
                self.line("login_succeeded.title", "Login realizado!"),
                self.line(
                    "login_succeeded.description",
                    "Redirecionando para o dashboard...",
                ),
            )
        } else {
            Toast::new(
                self.line("signup_succeeded.title", "Conta criada com sucesso!"),
                self.line("signup_succeeded.description", "Você já pode fazer login."),
            )
        }
    }
}
