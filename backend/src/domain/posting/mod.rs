//! Job-posting aggregate and its validation.
//!
//! A [`JobPosting`] only exists in validated form: [`JobPosting::from_form`]
//! consumes a raw submission and either yields the typed entity or the
//! complete per-field error map for re-rendering the form.

use chrono::{DateTime, Utc};
use uuid::Uuid;

mod fields;
mod validation;

pub use fields::{Category, EmploymentType, HowToApply, SalaryType, WorkPresence};
pub use validation::{FieldErrors, PostingForm, validate};

/// The single active application channel.
///
/// Exactly one channel is populated per posting; the variant carries the
/// payload the discriminator selects, so the "others blank" invariant holds
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyChannel {
    /// Apply through an external link.
    Online { url: String },
    /// Email a resume to the listed address.
    Email { address: String },
    /// Call the listed phone number.
    Phone { number: String },
    /// Free-text instructions from the poster.
    Instructions { text: String },
}

impl ApplyChannel {
    /// The discriminator value this channel persists under.
    #[must_use]
    pub const fn how_to_apply(&self) -> HowToApply {
        match self {
            Self::Online { .. } => HowToApply::ApplyOnline,
            Self::Email { .. } => HowToApply::EmailResume,
            Self::Phone { .. } => HowToApply::CallPhone,
            Self::Instructions { .. } => HowToApply::CustomInstructions,
        }
    }

    fn from_form(form: &PostingForm) -> Option<Self> {
        let channel = match HowToApply::parse(&form.how_to_apply)? {
            HowToApply::ApplyOnline => Self::Online {
                url: form.link_to_apply.trim().to_owned(),
            },
            HowToApply::EmailResume => Self::Email {
                address: form.contact_email.trim().to_owned(),
            },
            HowToApply::CallPhone => Self::Phone {
                number: form.contact_phone.trim().to_owned(),
            },
            HowToApply::CustomInstructions => Self::Instructions {
                text: form.custom_instructions.trim().to_owned(),
            },
        };
        Some(channel)
    }
}

/// A validated job posting.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPosting {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub category: Category,
    pub employment_type: EmploymentType,
    /// Serialized rich-text document JSON; persistence never inspects it.
    pub job_description: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_type: SalaryType,
    pub part_of_town: Option<String>,
    pub work_presence: WorkPresence,
    pub company_website: Option<String>,
    pub apply: ApplyChannel,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    /// Validate a raw submission and construct the posting.
    ///
    /// # Errors
    ///
    /// Returns the full [`FieldErrors`] map when any field is invalid.
    pub fn from_form(
        id: Uuid,
        author_id: Uuid,
        created_at: DateTime<Utc>,
        form: PostingForm,
    ) -> Result<Self, Box<FieldErrors>> {
        let errors = validate(&form);
        let parsed = (
            Category::parse(&form.category),
            EmploymentType::parse(&form.employment_type),
            SalaryType::parse(&form.salary_type),
            WorkPresence::parse(&form.work_presence),
            ApplyChannel::from_form(&form),
        );
        match parsed {
            (Some(category), Some(employment_type), Some(salary_type), Some(work_presence), Some(apply))
                if errors.is_valid() =>
            {
                Ok(Self {
                    id,
                    job_title: form.job_title.trim().to_owned(),
                    company_name: form.company_name.trim().to_owned(),
                    category,
                    employment_type,
                    job_description: form.job_description,
                    salary_min: form.salary_min,
                    salary_max: form.salary_max,
                    salary_type,
                    part_of_town: form
                        .part_of_town
                        .map(|s| s.trim().to_owned())
                        .filter(|s| !s.is_empty()),
                    work_presence,
                    company_website: Some(form.company_website.trim().to_owned())
                        .filter(|s| !s.is_empty()),
                    apply,
                    author_id,
                    created_at,
                })
            }
            _ => Err(Box::new(errors)),
        }
    }

    /// Apply an edit: the posting keeps its identity, author, and creation
    /// time, and takes every other field from the validated form.
    ///
    /// # Errors
    ///
    /// Returns the full [`FieldErrors`] map when any field is invalid.
    pub fn edited(&self, form: PostingForm) -> Result<Self, Box<FieldErrors>> {
        Self::from_form(self.id, self.author_id, self.created_at, form)
    }
}

/// Author display name joined onto listing projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName {
    pub first_name: String,
    pub last_name: String,
}

impl AuthorName {
    /// "First Last" as shown on posting cards.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Listing projection: a posting together with its author's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct PostingWithAuthor {
    pub posting: JobPosting,
    pub author: AuthorName,
}
