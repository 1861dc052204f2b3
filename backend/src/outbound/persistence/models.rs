//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::job_postings;

/// Row struct for reading from the job_postings table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = job_postings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JobPostingRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub category: String,
    pub employment_type: String,
    pub job_description: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_type: String,
    pub part_of_town: Option<String>,
    pub work_presence: String,
    pub company_website: Option<String>,
    pub how_to_apply: String,
    pub link_to_apply: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub custom_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "schema field for future audit trail support")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new posting records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = job_postings)]
pub(crate) struct NewJobPostingRow<'a> {
    pub id: Uuid,
    pub author_id: Uuid,
    pub job_title: &'a str,
    pub company_name: &'a str,
    pub category: &'a str,
    pub employment_type: &'a str,
    pub job_description: &'a str,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_type: &'a str,
    pub part_of_town: Option<&'a str>,
    pub work_presence: &'a str,
    pub company_website: Option<&'a str>,
    pub how_to_apply: &'a str,
    pub link_to_apply: Option<&'a str>,
    pub contact_email: Option<&'a str>,
    pub contact_phone: Option<&'a str>,
    pub custom_instructions: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

/// Changeset struct for updating existing posting records.
///
/// Apply-channel payload columns are always set, so switching channels on
/// edit clears the previous channel's payload.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = job_postings)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct JobPostingChangeset<'a> {
    pub job_title: &'a str,
    pub company_name: &'a str,
    pub category: &'a str,
    pub employment_type: &'a str,
    pub job_description: &'a str,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_type: &'a str,
    pub part_of_town: Option<&'a str>,
    pub work_presence: &'a str,
    pub company_website: Option<&'a str>,
    pub how_to_apply: &'a str,
    pub link_to_apply: Option<&'a str>,
    pub contact_email: Option<&'a str>,
    pub contact_phone: Option<&'a str>,
    pub custom_instructions: Option<&'a str>,
}
