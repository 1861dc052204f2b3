//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. When
//! migrations change the schema, regenerate with `diesel print-schema` or
//! update by hand.

diesel::table! {
    /// User accounts table.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Given name shown on posting listings.
        first_name -> Varchar,
        /// Family name shown on posting listings.
        last_name -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Job postings table.
    ///
    /// Controlled-vocabulary columns (`category`, `employment_type`,
    /// `salary_type`, `work_presence`, `how_to_apply`) store the canonical
    /// labels the domain enums parse. `job_description` holds the rich-text
    /// document serialised as JSON text, stored opaquely. Exactly one of the
    /// four apply-channel payload columns is populated, matching
    /// `how_to_apply`.
    job_postings (id) {
        id -> Uuid,
        author_id -> Uuid,
        job_title -> Varchar,
        company_name -> Varchar,
        category -> Varchar,
        employment_type -> Varchar,
        job_description -> Text,
        salary_min -> Nullable<Int4>,
        salary_max -> Nullable<Int4>,
        salary_type -> Varchar,
        part_of_town -> Nullable<Varchar>,
        work_presence -> Varchar,
        company_website -> Nullable<Varchar>,
        how_to_apply -> Varchar,
        link_to_apply -> Nullable<Varchar>,
        contact_email -> Nullable<Varchar>,
        contact_phone -> Nullable<Varchar>,
        custom_instructions -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(job_postings -> users (author_id));

diesel::allow_tables_to_appear_in_same_query!(job_postings, users);
