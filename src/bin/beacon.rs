use actix_session::config::PersistentSession;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::{cookie, web, App, HttpServer};

use fronts::routes::{self, FlowConfig};
use fronts::translation;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let translator = translation::initialize_translator();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080);

    log::info!("starting beacon front at http://{host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(translator.clone()))
            .app_data(web::Data::new(FlowConfig::default()))
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), Key::from(&[0; 64]))
                    .cookie_secure(false)
                    .session_lifecycle(
                        PersistentSession::default().session_ttl(cookie::time::Duration::hours(2)),
                    )
                    .build(),
            )
            .wrap(actix_web::middleware::Logger::default())
            .default_service(web::route().to(routes::not_found))
            .configure(routes::beacon::configure)
    })
    .bind((host.as_str(), port))?
    .workers(num_cpus::get() * 2)
    .run()
    .await
}
