//! PostgreSQL-backed `JobPostingRepository` implementation using Diesel ORM.
//!
//! This adapter persists postings and reconstructs domain values through the
//! controlled-vocabulary parsers, so a row with labels the domain does not
//! recognise surfaces as a query error rather than a bogus posting.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{JobPostingRepository, JobPostingRepositoryError};
use crate::domain::posting::{
    ApplyChannel, AuthorName, Category, EmploymentType, HowToApply, JobPosting, PostingWithAuthor,
    SalaryType, WorkPresence,
};

use super::models::{JobPostingChangeset, JobPostingRow, NewJobPostingRow};
use super::pool::{DbPool, PoolError};
use super::schema::{job_postings, users};

/// Diesel-backed implementation of the job posting repository port.
#[derive(Clone)]
pub struct DieselJobPostingRepository {
    pool: DbPool,
}

impl DieselJobPostingRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain repository errors.
fn map_pool_error(error: PoolError) -> JobPostingRepositoryError {
    JobPostingRepositoryError::connection(error.into_message())
}

/// Map common Diesel error variants to domain repository errors.
fn map_diesel_error(error: diesel::result::Error) -> JobPostingRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => JobPostingRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            JobPostingRepositoryError::connection("database connection error")
        }
        _ => JobPostingRepositoryError::query("database error"),
    }
}

fn bad_label(column: &str, value: &str) -> JobPostingRepositoryError {
    JobPostingRepositoryError::query(format!("unrecognised {column} label: {value:?}"))
}

/// Reassemble the apply channel from its discriminator and payload columns.
fn row_apply_channel(row: &JobPostingRow) -> Result<ApplyChannel, JobPostingRepositoryError> {
    let discriminator = HowToApply::parse(&row.how_to_apply)
        .ok_or_else(|| bad_label("how_to_apply", &row.how_to_apply))?;

    let payload = match discriminator {
        HowToApply::ApplyOnline => row.link_to_apply.as_deref(),
        HowToApply::EmailResume => row.contact_email.as_deref(),
        HowToApply::CallPhone => row.contact_phone.as_deref(),
        HowToApply::CustomInstructions => row.custom_instructions.as_deref(),
    };
    let payload = payload.ok_or_else(|| {
        JobPostingRepositoryError::query(format!(
            "apply channel {} has no payload for posting {}",
            discriminator.as_str(),
            row.id
        ))
    })?;

    let channel = match discriminator {
        HowToApply::ApplyOnline => ApplyChannel::Online {
            url: payload.to_owned(),
        },
        HowToApply::EmailResume => ApplyChannel::Email {
            address: payload.to_owned(),
        },
        HowToApply::CallPhone => ApplyChannel::Phone {
            number: payload.to_owned(),
        },
        HowToApply::CustomInstructions => ApplyChannel::Instructions {
            text: payload.to_owned(),
        },
    };
    Ok(channel)
}

/// Convert a database row into a domain posting.
fn row_to_posting(row: JobPostingRow) -> Result<JobPosting, JobPostingRepositoryError> {
    let apply = row_apply_channel(&row)?;
    let category = Category::parse(&row.category).ok_or_else(|| bad_label("category", &row.category))?;
    let employment_type = EmploymentType::parse(&row.employment_type)
        .ok_or_else(|| bad_label("employment_type", &row.employment_type))?;
    let salary_type = SalaryType::parse(&row.salary_type)
        .ok_or_else(|| bad_label("salary_type", &row.salary_type))?;
    let work_presence = WorkPresence::parse(&row.work_presence)
        .ok_or_else(|| bad_label("work_presence", &row.work_presence))?;

    Ok(JobPosting {
        id: row.id,
        job_title: row.job_title,
        company_name: row.company_name,
        category,
        employment_type,
        job_description: row.job_description,
        salary_min: row.salary_min,
        salary_max: row.salary_max,
        salary_type,
        part_of_town: row.part_of_town,
        work_presence,
        company_website: row.company_website,
        apply,
        author_id: row.author_id,
        created_at: row.created_at,
    })
}

/// The apply-channel payload columns for a posting, in table order.
type ChannelColumns<'a> = (
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
    Option<&'a str>,
);

fn channel_columns(apply: &ApplyChannel) -> ChannelColumns<'_> {
    match apply {
        ApplyChannel::Online { url } => (Some(url.as_str()), None, None, None),
        ApplyChannel::Email { address } => (None, Some(address.as_str()), None, None),
        ApplyChannel::Phone { number } => (None, None, Some(number.as_str()), None),
        ApplyChannel::Instructions { text } => (None, None, None, Some(text.as_str())),
    }
}

fn changeset(posting: &JobPosting) -> JobPostingChangeset<'_> {
    let (link_to_apply, contact_email, contact_phone, custom_instructions) =
        channel_columns(&posting.apply);
    JobPostingChangeset {
        job_title: &posting.job_title,
        company_name: &posting.company_name,
        category: posting.category.as_str(),
        employment_type: posting.employment_type.as_str(),
        job_description: &posting.job_description,
        salary_min: posting.salary_min,
        salary_max: posting.salary_max,
        salary_type: posting.salary_type.as_str(),
        part_of_town: posting.part_of_town.as_deref(),
        work_presence: posting.work_presence.as_str(),
        company_website: posting.company_website.as_deref(),
        how_to_apply: posting.apply.how_to_apply().as_str(),
        link_to_apply,
        contact_email,
        contact_phone,
        custom_instructions,
    }
}

#[async_trait]
impl JobPostingRepository for DieselJobPostingRepository {
    async fn create(&self, posting: &JobPosting) -> Result<(), JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let (link_to_apply, contact_email, contact_phone, custom_instructions) =
            channel_columns(&posting.apply);
        let new_row = NewJobPostingRow {
            id: posting.id,
            author_id: posting.author_id,
            job_title: &posting.job_title,
            company_name: &posting.company_name,
            category: posting.category.as_str(),
            employment_type: posting.employment_type.as_str(),
            job_description: &posting.job_description,
            salary_min: posting.salary_min,
            salary_max: posting.salary_max,
            salary_type: posting.salary_type.as_str(),
            part_of_town: posting.part_of_town.as_deref(),
            work_presence: posting.work_presence.as_str(),
            company_website: posting.company_website.as_deref(),
            how_to_apply: posting.apply.how_to_apply().as_str(),
            link_to_apply,
            contact_email,
            contact_phone,
            custom_instructions,
            created_at: posting.created_at,
        };

        diesel::insert_into(job_postings::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<PostingWithAuthor>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(JobPostingRow, String, String)> = job_postings::table
            .inner_join(users::table)
            .filter(job_postings::id.eq(id))
            .select((
                JobPostingRow::as_select(),
                users::first_name,
                users::last_name,
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|(row, first_name, last_name)| {
            Ok(PostingWithAuthor {
                posting: row_to_posting(row)?,
                author: AuthorName {
                    first_name,
                    last_name,
                },
            })
        })
        .transpose()
    }

    async fn find_owned(&self, id: Uuid) -> Result<Option<JobPosting>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = job_postings::table
            .filter(job_postings::id.eq(id))
            .select(JobPostingRow::as_select())
            .first::<JobPostingRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_posting).transpose()
    }

    async fn list(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostingWithAuthor>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(JobPostingRow, String, String)> = job_postings::table
            .inner_join(users::table)
            .order((job_postings::created_at.desc(), job_postings::id.desc()))
            .limit(limit)
            .offset(offset)
            .select((
                JobPostingRow::as_select(),
                users::first_name,
                users::last_name,
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter()
            .map(|(row, first_name, last_name)| {
                Ok(PostingWithAuthor {
                    posting: row_to_posting(row)?,
                    author: AuthorName {
                        first_name,
                        last_name,
                    },
                })
            })
            .collect()
    }

    async fn list_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<JobPosting>, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JobPostingRow> = job_postings::table
            .filter(job_postings::author_id.eq(author_id))
            .order((job_postings::created_at.desc(), job_postings::id.desc()))
            .select(JobPostingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_posting).collect()
    }

    async fn count(&self) -> Result<i64, JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        job_postings::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn update(&self, posting: &JobPosting) -> Result<(), JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(job_postings::table.filter(job_postings::id.eq(posting.id)))
            .set(&changeset(posting))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            return Err(JobPostingRepositoryError::not_found(posting.id));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), JobPostingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(job_postings::table.filter(job_postings::id.eq(id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if affected == 0 {
            return Err(JobPostingRepositoryError::not_found(id));
        }
        Ok(())
    }
}
