//! Beacon front: marketing page plus the tabbed auth card.

use actix_session::Session;
use actix_web::{error, web, HttpResponse, Result};
use askama::Template;
use serde::Deserialize;
use tarjama::Translator;

use crate::flow::backend::SimulatedBackend;
use crate::flow::router::RecordingRouter;
use crate::flow::{FlowEnv, FormFlow, SubmitOutcome};
use crate::form::beacon::{LoginFormData, SignupFormData};
use crate::messages::Messages;
use crate::routes::flash::{self, Flash, SessionNotifier};
use crate::routes::FlowConfig;
use crate::template::beacon::{AuthTab, AuthTemplate, LandingTemplate};
use crate::template::dashboard::DashboardTemplate;

pub fn configure(config: &mut web::ServiceConfig) {
    config
        .route("/", web::get().to(landing))
        .route("/auth", web::get().to(auth_ui))
        .route("/auth/login", web::post().to(login))
        .route("/auth/signup", web::post().to(signup))
        .route("/dashboard", web::get().to(dashboard));
}

async fn landing() -> Result<HttpResponse> {
    let content = LandingTemplate::new()
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

#[derive(Deserialize)]
struct AuthQuery {
    tab: Option<String>,
}

async fn auth_ui(query: web::Query<AuthQuery>, flash: Flash) -> Result<HttpResponse> {
    let tab = match query.tab.as_deref() {
        Some("signup") => AuthTab::Signup,
        _ => AuthTab::Login,
    };

    let content = AuthTemplate::empty(tab, flash.into_toasts())
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn login(
    session: Session,
    translator: web::Data<Translator>,
    config: web::Data<FlowConfig>,
    form: web::Form<LoginFormData>,
) -> Result<HttpResponse> {
    let backend = SimulatedBackend::new(config.submit_delay);
    let notifier = SessionNotifier::new(&session);
    let router = RecordingRouter::new();
    let env = FlowEnv {
        backend: &backend,
        notifier: &notifier,
        router: &router,
        messages: Messages::new(&translator),
    };

    let mut flow = FormFlow::new(form.into_inner());
    flow.submit(&env).await;

    if let Some(target) = router.take_target() {
        return Ok(HttpResponse::SeeOther()
            .append_header(("Location", target))
            .finish());
    }

    let content = AuthTemplate {
        toasts: flash::take_toasts(&session),
        tab: AuthTab::Login,
        login: flow.fields().clone(),
        signup: SignupFormData::default(),
    }
    .render()
    .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn signup(
    session: Session,
    translator: web::Data<Translator>,
    config: web::Data<FlowConfig>,
    form: web::Form<SignupFormData>,
) -> Result<HttpResponse> {
    let backend = SimulatedBackend::new(config.submit_delay);
    let notifier = SessionNotifier::new(&session);
    let router = RecordingRouter::new();
    let env = FlowEnv {
        backend: &backend,
        notifier: &notifier,
        router: &router,
        messages: Messages::new(&translator),
    };

    let mut flow = FormFlow::new(form.into_inner());
    let outcome = flow.submit(&env).await;

    // Success resets the fields and drops back to the login tab; a
    // rejection keeps the signup tab open with everything still typed in.
    let tab = match outcome {
        SubmitOutcome::Succeeded(_) => AuthTab::Login,
        SubmitOutcome::Rejected(_) => AuthTab::Signup,
    };

    let content = AuthTemplate {
        toasts: flash::take_toasts(&session),
        tab,
        login: LoginFormData::default(),
        signup: flow.fields().clone(),
    }
    .render()
    .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn dashboard(flash: Flash) -> Result<HttpResponse> {
    let content = DashboardTemplate::beacon(flash.into_toasts())
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}
