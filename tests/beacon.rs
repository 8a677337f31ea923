#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end tests for the beacon front.

use std::time::Duration;

use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::http::{header, StatusCode};
use actix_web::{cookie, test, web, App};

use fronts::routes::{self, FlowConfig};
use fronts::translation::initialize_translator;

fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::from(&[0; 64]))
        .cookie_secure(false)
        .session_lifecycle(
            PersistentSession::default().session_ttl(cookie::time::Duration::hours(2)),
        )
        .build()
}

macro_rules! beacon_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(initialize_translator()))
                .app_data(web::Data::new(FlowConfig {
                    submit_delay: Duration::ZERO,
                }))
                .wrap(session_middleware())
                .default_service(web::route().to(routes::not_found))
                .configure(routes::beacon::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_landing_page_renders() {
    let app = beacon_app!();

    let request = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, request).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Monitore métricas críticas antes que virem problemas"));
    assert!(page.contains("Começar Gratuitamente"));
    assert!(page.contains("Ver Demo"));
}

#[actix_web::test]
async fn test_auth_page_defaults_to_login_tab() {
    let app = beacon_app!();

    let request = test::TestRequest::get().uri("/auth").to_request();
    let body = test::call_and_read_body(&app, request).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Acesse sua conta"));
    assert!(page.contains("action=\"/auth/login\""));

    let request = test::TestRequest::get().uri("/auth?tab=signup").to_request();
    let body = test::call_and_read_body(&app, request).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("action=\"/auth/signup\""));
    assert!(page.contains("Confirmar senha"));
}

#[actix_web::test]
async fn test_login_success_redirects_to_dashboard() {
    let app = beacon_app!();

    let request = test::TestRequest::post()
        .uri("/auth/login")
        .set_form([("email", "joao@empresa.com"), ("password", "abc123")])
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/dashboard"
    );

    // The success toast is carried in the session and shows up on the
    // dashboard after the redirect.
    let session_cookie = response.response().cookies().next().unwrap().into_owned();
    let request = test::TestRequest::get()
        .uri("/dashboard")
        .cookie(session_cookie)
        .to_request();
    let body = test::call_and_read_body(&app, request).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Login realizado!"));
    assert!(page.contains("Redirecionando para o dashboard..."));
}

#[actix_web::test]
async fn test_login_with_missing_fields_stays_on_page() {
    let app = beacon_app!();

    let request = test::TestRequest::post()
        .uri("/auth/login")
        .set_form([("email", "joao@empresa.com"), ("password", "")])
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = test::read_body(response).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Campos obrigatórios"));
    assert!(page.contains("Por favor, preencha email e senha."));
    assert!(page.contains("value=\"joao@empresa.com\""));
}

#[actix_web::test]
async fn test_signup_success_resets_and_switches_to_login_tab() {
    let app = beacon_app!();

    let request = test::TestRequest::post()
        .uri("/auth/signup")
        .set_form([
            ("name", "João Silva"),
            ("email", "joao@empresa.com"),
            ("password", "abc123"),
            ("confirm_password", "abc123"),
        ])
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = test::read_body(response).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Conta criada com sucesso!"));
    assert!(page.contains("Você já pode fazer login."));
    assert!(page.contains("tab-active\" href=\"/auth\""));
    assert!(page.contains("action=\"/auth/login\""));
    assert!(!page.contains("value=\"João Silva\""));
}

#[actix_web::test]
async fn test_signup_short_password_keeps_fields() {
    let app = beacon_app!();

    let request = test::TestRequest::post()
        .uri("/auth/signup")
        .set_form([
            ("name", "João Silva"),
            ("email", "joao@empresa.com"),
            ("password", "abc12"),
            ("confirm_password", "abc12"),
        ])
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());

    let body = test::read_body(response).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Senha muito curta"));
    assert!(page.contains("A senha deve ter no mínimo 6 caracteres."));
    assert!(page.contains("tab-active\" href=\"/auth?tab=signup\""));
    assert!(page.contains("value=\"João Silva\""));
    assert!(page.contains("value=\"joao@empresa.com\""));
}

#[actix_web::test]
async fn test_signup_mismatch_wins_over_length() {
    let app = beacon_app!();

    let request = test::TestRequest::post()
        .uri("/auth/signup")
        .set_form([
            ("name", "João Silva"),
            ("email", "joao@empresa.com"),
            ("password", "abc"),
            ("confirm_password", "abd"),
        ])
        .to_request();
    let body = test::call_and_read_body(&app, request).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Senhas não coincidem"));
    assert!(!page.contains("Senha muito curta"));
}

#[actix_web::test]
async fn test_dashboard_page_renders_mock_data() {
    let app = beacon_app!();

    let request = test::TestRequest::get().uri("/dashboard").to_request();
    let body = test::call_and_read_body(&app, request).await;
    let page = std::str::from_utf8(&body).unwrap();

    assert!(page.contains("Alertas Recentes"));
    assert!(page.contains("Status das Conexões"));
    assert!(page.contains("href=\"/auth\">Sair</a>"));
}

#[actix_web::test]
async fn test_unknown_route_renders_not_found() {
    let app = beacon_app!();

    let request = test::TestRequest::get().uri("/missing").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = test::read_body(response).await;
    let page = std::str::from_utf8(&body).unwrap();
    assert!(page.contains("Página não encontrada."));
}
