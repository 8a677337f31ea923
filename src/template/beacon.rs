//! Beacon marketing and auth pages.

use askama::Template;

use crate::flow::notify::Toast;
use crate::form::beacon::{LoginFormData, SignupFormData};

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "database",
        title: "Conexões Seguras",
        description: "Conecte bases SQL Server, Postgres, MySQL em modo somente leitura com criptografia completa.",
    },
    Feature {
        icon: "bell",
        title: "Alertas Inteligentes",
        description: "Configure notificações automáticas via Email, Slack, Teams ou Webhook quando métricas críticas mudarem.",
    },
    Feature {
        icon: "activity",
        title: "Monitoramento em Tempo Real",
        description: "Acompanhe suas métricas 24/7 com execução assíncrona e verificações programadas.",
    },
    Feature {
        icon: "bar-chart",
        title: "Dashboards Visuais",
        description: "Visualize tendências, históricos e análises com gráficos interativos e personalizáveis.",
    },
    Feature {
        icon: "zap",
        title: "Templates de Queries",
        description: "Use templates prontos ou crie queries customizadas para monitorar o que importa.",
    },
    Feature {
        icon: "shield",
        title: "Seguro por Design",
        description: "Logs auditáveis, criptografia ponta-a-ponta e controle granular de permissões.",
    },
];

const STEPS: [Step; 3] = [
    Step {
        number: "1",
        title: "Conecte sua base",
        description: "Adicione credenciais de leitura da sua base SQL Server, Postgres ou MySQL",
    },
    Step {
        number: "2",
        title: "Crie suas queries",
        description: "Use templates prontos ou escreva queries customizadas para suas métricas",
    },
    Step {
        number: "3",
        title: "Configure alertas",
        description: "Defina condições, frequência e canais para receber notificações automáticas",
    },
];

#[derive(Template)]
#[template(path = "beacon/landing.html")]
pub struct LandingTemplate {
    pub features: &'static [Feature],
    pub steps: &'static [Step],
}

impl LandingTemplate {
    pub fn new() -> LandingTemplate {
        LandingTemplate {
            features: &FEATURES,
            steps: &STEPS,
        }
    }
}

/// Which tab of the auth card is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Signup,
}

impl AuthTab {
    pub fn is_login(&self) -> bool {
        matches!(self, AuthTab::Login)
    }
}

#[derive(Template)]
#[template(path = "beacon/auth.html")]
pub struct AuthTemplate {
    pub toasts: Vec<Toast>,
    pub tab: AuthTab,
    pub login: LoginFormData,
    pub signup: SignupFormData,
}

impl AuthTemplate {
    /// The auth card with both forms blank, as served on first visit.
    pub fn empty(tab: AuthTab, toasts: Vec<Toast>) -> AuthTemplate {
        AuthTemplate {
            toasts,
            tab,
            login: LoginFormData::default(),
            signup: SignupFormData::default(),
        }
    }
}
