//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::api::health::{HealthState, live, ready};
use crate::api::postings::{
    PostingsState, create_posting, delete_posting, get_posting, list_postings, my_postings,
    update_posting,
};
use crate::domain::ports::JobPostingRepository;
use crate::middleware::Trace;
use crate::outbound::memory::MemoryJobPostingRepository;
use crate::outbound::persistence::DieselJobPostingRepository;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Pick the posting repository based on configuration.
///
/// Uses the database-backed adapter when a pool is available, otherwise the
/// in-process repository for local runs and tests.
fn build_posting_repository(config: &ServerConfig) -> Arc<dyn JobPostingRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselJobPostingRepository::new(pool.clone())),
        None => Arc::new(MemoryJobPostingRepository::new()),
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    postings_state: web::Data<PostingsState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        postings_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    // `mine` must register before `{id}` so it is not captured as a path
    // parameter.
    let api = web::scope("/api/v1")
        .wrap(session)
        .service(list_postings)
        .service(my_postings)
        .service(get_posting)
        .service(create_posting)
        .service(update_posting)
        .service(delete_posting);

    let app = App::new()
        .app_data(health_state)
        .app_data(postings_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let postings_state = web::Data::new(PostingsState::new(build_posting_repository(&config)));
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            postings_state: postings_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
