//! TBD front: login, signup, terms and the dashboard shell.

use actix_session::Session;
use actix_web::{error, web, HttpResponse, Result};
use askama::Template;
use tarjama::Translator;

use crate::flow::backend::{SimulatedBackend, StubCredentialBackend};
use crate::flow::router::RecordingRouter;
use crate::flow::{FlowEnv, FormFlow};
use crate::form::tbd::{LoginFormData, SignupFormData};
use crate::messages::Messages;
use crate::routes::flash::{self, Flash, SessionNotifier};
use crate::template::dashboard::DashboardTemplate;
use crate::template::tbd::{LandingTemplate, LoginTemplate, SignupTemplate, TermsTemplate};

pub fn configure(config: &mut web::ServiceConfig) {
    config
        .route("/", web::get().to(landing))
        .service(
            web::resource("/login")
                .route(web::get().to(login_ui))
                .route(web::post().to(login)),
        )
        .service(
            web::resource("/signup")
                .route(web::get().to(signup_ui))
                .route(web::post().to(signup)),
        )
        .route("/dashboard", web::get().to(dashboard))
        .route("/terms", web::get().to(terms));
}

async fn landing() -> Result<HttpResponse> {
    let content = LandingTemplate
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn login_ui(flash: Flash) -> Result<HttpResponse> {
    let content = LoginTemplate {
        toasts: flash.into_toasts(),
        form: LoginFormData::default(),
    }
    .render()
    .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn login(
    session: Session,
    translator: web::Data<Translator>,
    form: web::Form<LoginFormData>,
) -> Result<HttpResponse> {
    let notifier = SessionNotifier::new(&session);
    let router = RecordingRouter::new();
    let env = FlowEnv {
        backend: &StubCredentialBackend,
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

    let content = LoginTemplate {
        toasts: flash::take_toasts(&session),
        form: flow.fields().clone(),
    }
    .render()
    .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn signup_ui(flash: Flash) -> Result<HttpResponse> {
    let content = SignupTemplate::new(flash.into_toasts(), SignupFormData::default())
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn signup(
    session: Session,
    translator: web::Data<Translator>,
    form: web::Form<SignupFormData>,
) -> Result<HttpResponse> {
    let backend = SimulatedBackend::instant();
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

    let content = SignupTemplate::new(flash::take_toasts(&session), flow.fields().clone())
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn dashboard(flash: Flash) -> Result<HttpResponse> {
    let content = DashboardTemplate::tbd(flash.into_toasts())
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}

async fn terms() -> Result<HttpResponse> {
    let content = TermsTemplate
        .render()
        .map_err(error::ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().content_type("text/html").body(content))
}
