//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: posting
//! CRUD paths, health probes, the error envelope, and the session cookie
//! security scheme. The generated document backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::error::{ApiError, ErrorCode};
use crate::api::postings::{ApplyView, PostingCard, PostingDetail, PostingId, PostingsPage};
use crate::domain::posting::{FieldErrors, PostingForm};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie identifying the signed-in user.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Job board backend API",
        description = "HTTP interface for browsing and managing job postings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::api::postings::list_postings,
        crate::api::postings::my_postings,
        crate::api::postings::get_posting,
        crate::api::postings::create_posting,
        crate::api::postings::update_posting,
        crate::api::postings::delete_posting,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(
        ApiError,
        ErrorCode,
        PostingForm,
        FieldErrors,
        PostingCard,
        PostingsPage,
        PostingDetail,
        ApplyView,
        PostingId
    )),
    tags(
        (name = "postings", description = "Job posting operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
