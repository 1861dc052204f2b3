//! Job posting API handlers.
//!
//! All routes require a session user except where noted. Listing responses
//! carry presentation-ready strings (relative posting age, salary label,
//! page-marker window) so clients render them verbatim.

use std::sync::Arc;

use actix_session::Session;
use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use pagination::{PageMarker, window};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::document::{Document, render_html};
use crate::domain::ports::JobPostingRepository;
use crate::domain::posting::{ApplyChannel, JobPosting, PostingForm, PostingWithAuthor};
use crate::domain::presentation::{format_salary, time_since_posted};

use super::error::{ApiError, ApiResult};

/// Postings shown per listing page.
const PAGE_SIZE: u64 = 10;

/// Shared handler state holding the posting repository.
#[derive(Clone)]
pub struct PostingsState {
    repo: Arc<dyn JobPostingRepository>,
}

impl PostingsState {
    #[must_use]
    pub fn new(repo: Arc<dyn JobPostingRepository>) -> Self {
        Self { repo }
    }
}

/// Resolve the authenticated user or fail with 401.
fn require_user(session: &Session) -> ApiResult<Uuid> {
    session
        .get::<Uuid>("user_id")
        .map_err(|err| ApiError::internal(format!("session read failed: {err}")))?
        .ok_or_else(|| ApiError::unauthorized("authentication required"))
}

/// Preview projection used on listing pages.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostingCard {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub category: String,
    pub employment_type: String,
    pub part_of_town: String,
    /// Relative posting age, e.g. "2 weeks ago".
    pub posted: String,
    /// Formatted salary label, e.g. "$15 - $20 Per Hour".
    pub salary: String,
    pub author_name: String,
}

impl PostingCard {
    fn from_entry(entry: PostingWithAuthor, now: DateTime<Utc>) -> Self {
        let PostingWithAuthor { posting, author } = entry;
        Self::from_parts(posting, author.display(), now)
    }

    fn from_parts(posting: JobPosting, author_name: String, now: DateTime<Utc>) -> Self {
        Self {
            id: posting.id,
            job_title: posting.job_title,
            company_name: posting.company_name,
            category: posting.category.as_str().to_owned(),
            employment_type: posting.employment_type.as_str().to_owned(),
            part_of_town: posting
                .part_of_town
                .unwrap_or_else(|| "Not specified".to_owned()),
            posted: time_since_posted(posting.created_at, now),
            salary: format_salary(
                posting.salary_min,
                posting.salary_max,
                posting.salary_type.as_str(),
            ),
            author_name,
        }
    }
}

/// One page of the postings listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostingsPage {
    pub postings: Vec<PostingCard>,
    pub page: u64,
    pub total_count: u64,
    pub total_pages: u64,
    /// Page-marker window for rendering pagination controls.
    #[schema(value_type = Vec<Object>)]
    pub page_markers: Vec<PageMarker>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<u64>,
}

/// How to apply, flattened for the detail view.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyView {
    /// Discriminator label, e.g. "emailResume".
    pub method: String,
    /// The channel payload: URL, email address, phone number, or free text.
    pub value: String,
}

/// Full posting detail, including the rendered description.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostingDetail {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub category: String,
    pub employment_type: String,
    /// Job description rendered to HTML from the stored document.
    pub description_html: String,
    pub salary: String,
    pub part_of_town: Option<String>,
    pub work_presence: String,
    pub company_website: Option<String>,
    pub apply: ApplyView,
    pub posted: String,
    pub author_name: String,
    pub author_id: Uuid,
}

/// Render the stored description document, falling back to empty output
/// when the stored JSON no longer parses.
fn description_html(posting: &JobPosting) -> String {
    match Document::from_json(&posting.job_description) {
        Ok(document) => render_html(&document),
        Err(err) => {
            warn!(posting_id = %posting.id, error = %err, "stored job description unparseable");
            String::new()
        }
    }
}

impl PostingDetail {
    fn from_entry(entry: PostingWithAuthor, now: DateTime<Utc>) -> Self {
        let PostingWithAuthor { posting, author } = entry;
        let html = description_html(&posting);
        let method = posting.apply.how_to_apply().as_str().to_owned();
        let value = match &posting.apply {
            ApplyChannel::Online { url } => url.clone(),
            ApplyChannel::Email { address } => address.clone(),
            ApplyChannel::Phone { number } => number.clone(),
            ApplyChannel::Instructions { text } => text.clone(),
        };
        Self {
            id: posting.id,
            job_title: posting.job_title,
            company_name: posting.company_name,
            category: posting.category.as_str().to_owned(),
            employment_type: posting.employment_type.as_str().to_owned(),
            description_html: html,
            salary: format_salary(
                posting.salary_min,
                posting.salary_max,
                posting.salary_type.as_str(),
            ),
            part_of_town: posting.part_of_town,
            work_presence: posting.work_presence.as_str().to_owned(),
            company_website: posting.company_website,
            apply: ApplyView { method, value },
            posted: time_since_posted(posting.created_at, now),
            author_name: author.display(),
            author_id: posting.author_id,
        }
    }
}

/// Identifier payload returned from mutations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostingId {
    pub id: Uuid,
}

/// Paged postings listing, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/postings",
    params(("page" = Option<u64>, Query, description = "1-based page number")),
    responses(
        (status = 200, description = "One page of postings", body = PostingsPage),
        (status = 401, description = "Not signed in", body = ApiError)
    ),
    tags = ["postings"],
    operation_id = "listPostings"
)]
#[get("/postings")]
pub async fn list_postings(
    session: Session,
    state: web::Data<PostingsState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<PostingsPage>> {
    require_user(&session)?;
    let page = query.page.unwrap_or(1).max(1);

    let total_count = u64::try_from(state.repo.count().await?).unwrap_or(0);
    let offset = (page - 1).saturating_mul(PAGE_SIZE);
    let entries = state
        .repo
        .list(
            i64::try_from(PAGE_SIZE).unwrap_or(i64::MAX),
            i64::try_from(offset).unwrap_or(i64::MAX),
        )
        .await?;

    let total_pages = pagination::total_pages(total_count, PAGE_SIZE)
        .map_err(|err| ApiError::internal(err.to_string()))?;
    let page_markers =
        window(total_count, PAGE_SIZE, page).map_err(|err| ApiError::internal(err.to_string()))?;

    let now = Utc::now();
    Ok(web::Json(PostingsPage {
        postings: entries
            .into_iter()
            .map(|entry| PostingCard::from_entry(entry, now))
            .collect(),
        page,
        total_count,
        total_pages,
        page_markers,
    }))
}

/// Single posting with rendered description.
#[utoipa::path(
    get,
    path = "/api/v1/postings/{id}",
    params(("id" = Uuid, Path, description = "Posting identifier")),
    responses(
        (status = 200, description = "Posting detail", body = PostingDetail),
        (status = 401, description = "Not signed in", body = ApiError),
        (status = 404, description = "No such posting", body = ApiError)
    ),
    tags = ["postings"],
    operation_id = "getPosting"
)]
#[get("/postings/{id}")]
pub async fn get_posting(
    session: Session,
    state: web::Data<PostingsState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<PostingDetail>> {
    require_user(&session)?;
    let id = path.into_inner();

    let entry = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("job posting {id} not found")))?;

    Ok(web::Json(PostingDetail::from_entry(entry, Utc::now())))
}

/// Create a posting from the submitted form.
#[utoipa::path(
    post,
    path = "/api/v1/postings",
    request_body = PostingForm,
    responses(
        (status = 201, description = "Posting created", body = PostingId),
        (status = 401, description = "Not signed in", body = ApiError),
        (status = 422, description = "Form failed validation", body = ApiError)
    ),
    tags = ["postings"],
    operation_id = "createPosting"
)]
#[post("/postings")]
pub async fn create_posting(
    session: Session,
    state: web::Data<PostingsState>,
    form: web::Json<PostingForm>,
) -> ApiResult<HttpResponse> {
    let user_id = require_user(&session)?;

    let posting = JobPosting::from_form(Uuid::new_v4(), user_id, Utc::now(), form.into_inner())
        .map_err(|errors| ApiError::validation(&errors))?;

    state.repo.create(&posting).await?;
    Ok(HttpResponse::Created().json(PostingId { id: posting.id }))
}

/// Replace a posting's content. Author only.
#[utoipa::path(
    put,
    path = "/api/v1/postings/{id}",
    params(("id" = Uuid, Path, description = "Posting identifier")),
    request_body = PostingForm,
    responses(
        (status = 200, description = "Posting updated", body = PostingId),
        (status = 401, description = "Not signed in", body = ApiError),
        (status = 403, description = "Posting belongs to another user", body = ApiError),
        (status = 404, description = "No such posting", body = ApiError),
        (status = 422, description = "Form failed validation", body = ApiError)
    ),
    tags = ["postings"],
    operation_id = "updatePosting"
)]
#[put("/postings/{id}")]
pub async fn update_posting(
    session: Session,
    state: web::Data<PostingsState>,
    path: web::Path<Uuid>,
    form: web::Json<PostingForm>,
) -> ApiResult<web::Json<PostingId>> {
    let user_id = require_user(&session)?;
    let id = path.into_inner();

    let existing = state
        .repo
        .find_owned(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("job posting {id} not found")))?;
    if existing.author_id != user_id {
        return Err(ApiError::forbidden("only the author can edit a posting"));
    }

    let updated = existing
        .edited(form.into_inner())
        .map_err(|errors| ApiError::validation(&errors))?;
    state.repo.update(&updated).await?;
    Ok(web::Json(PostingId { id }))
}

/// Delete a posting. Author only.
#[utoipa::path(
    delete,
    path = "/api/v1/postings/{id}",
    params(("id" = Uuid, Path, description = "Posting identifier")),
    responses(
        (status = 204, description = "Posting deleted"),
        (status = 401, description = "Not signed in", body = ApiError),
        (status = 403, description = "Posting belongs to another user", body = ApiError),
        (status = 404, description = "No such posting", body = ApiError)
    ),
    tags = ["postings"],
    operation_id = "deletePosting"
)]
#[delete("/postings/{id}")]
pub async fn delete_posting(
    session: Session,
    state: web::Data<PostingsState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    let user_id = require_user(&session)?;
    let id = path.into_inner();

    let existing = state
        .repo
        .find_owned(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("job posting {id} not found")))?;
    if existing.author_id != user_id {
        return Err(ApiError::forbidden("only the author can delete a posting"));
    }

    state.repo.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// The signed-in user's postings, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/postings/mine",
    responses(
        (status = 200, description = "Own postings", body = [PostingCard]),
        (status = 401, description = "Not signed in", body = ApiError)
    ),
    tags = ["postings"],
    operation_id = "myPostings"
)]
#[get("/postings/mine")]
pub async fn my_postings(
    session: Session,
    state: web::Data<PostingsState>,
) -> ApiResult<web::Json<Vec<PostingCard>>> {
    let user_id = require_user(&session)?;

    let postings = state.repo.list_by_author(user_id).await?;
    let now = Utc::now();
    let cards = postings
        .into_iter()
        .map(|posting| PostingCard::from_parts(posting, "You".to_owned(), now))
        .collect();
    Ok(web::Json(cards))
}
