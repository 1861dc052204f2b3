//! Field-by-field validation of job-posting form submissions.
//!
//! Validation errors are data, not exceptions: [`validate`] always returns a
//! complete [`FieldErrors`] covering every field, with `None` meaning the
//! field is valid. Callers decide whether to persist or re-render the form.

use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use super::fields::{Category, EmploymentType, HowToApply, SalaryType, WorkPresence};

/// Raw form values as submitted, prior to any validation.
///
/// All string fields default to empty so partially filled submissions still
/// deserialise and report errors field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PostingForm {
    pub job_title: String,
    pub company_name: String,
    pub category: String,
    pub employment_type: String,
    /// Serialized rich-text document JSON; treated as opaque text here.
    pub job_description: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_type: String,
    pub part_of_town: Option<String>,
    pub work_presence: String,
    pub company_website: String,
    pub how_to_apply: String,
    pub link_to_apply: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub custom_instructions: String,
}

/// Per-field validation outcome; an absent entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_presence: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_website: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_apply: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_to_apply: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<&'static str>,
}

impl FieldErrors {
    /// True when no field carries an error.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.job_title.is_none()
            && self.company_name.is_none()
            && self.category.is_none()
            && self.employment_type.is_none()
            && self.job_description.is_none()
            && self.salary_min.is_none()
            && self.salary_max.is_none()
            && self.salary_type.is_none()
            && self.work_presence.is_none()
            && self.company_website.is_none()
            && self.how_to_apply.is_none()
            && self.link_to_apply.is_none()
            && self.contact_email.is_none()
            && self.contact_phone.is_none()
            && self.custom_instructions.is_none()
    }
}

/// Validate every field of a posting form.
///
/// Each rule is evaluated unconditionally and independently, except the
/// apply-channel fields which are only checked under their discriminator.
/// Never panics; malformed URLs and the like are errors in the result, not
/// failures of the call.
#[must_use]
pub fn validate(form: &PostingForm) -> FieldErrors {
    FieldErrors {
        job_title: required(&form.job_title, "Job Title is required"),
        company_name: required(&form.company_name, "Company Name is required"),
        category: validate_category(&form.category),
        employment_type: validate_employment_type(&form.employment_type),
        job_description: required(&form.job_description, "Job Description is required"),
        salary_min: validate_salary_min(form.salary_min),
        salary_max: validate_salary_max(form.salary_min, form.salary_max),
        salary_type: validate_salary_type(&form.salary_type),
        work_presence: validate_work_presence(&form.work_presence),
        company_website: validate_company_website(&form.company_website),
        how_to_apply: validate_how_to_apply(&form.how_to_apply),
        link_to_apply: validate_link_to_apply(&form.how_to_apply, &form.link_to_apply),
        contact_email: validate_contact_email(&form.how_to_apply, &form.contact_email),
        contact_phone: validate_contact_phone(&form.how_to_apply, &form.contact_phone),
        custom_instructions: validate_custom_instructions(
            &form.how_to_apply,
            &form.custom_instructions,
        ),
    }
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn validate_category(category: &str) -> Option<&'static str> {
    if category.trim().is_empty() {
        Some("Category is required")
    } else if Category::parse(category).is_none() {
        Some("Invalid category. Please select from the list.")
    } else {
        None
    }
}

fn validate_employment_type(employment_type: &str) -> Option<&'static str> {
    if employment_type.trim().is_empty() {
        Some("Employment Type is required")
    } else if EmploymentType::parse(employment_type).is_none() {
        Some("Invalid employment type. Please select from the list.")
    } else {
        None
    }
}

fn validate_salary_min(salary_min: Option<i32>) -> Option<&'static str> {
    match salary_min {
        Some(value) if value <= 0 => Some("Salary Min must be greater than 0"),
        _ => None,
    }
}

fn validate_salary_max(salary_min: Option<i32>, salary_max: Option<i32>) -> Option<&'static str> {
    match (salary_min, salary_max) {
        (_, Some(max)) if max <= 0 => Some("Salary Max must be greater than 0"),
        (Some(min), Some(max)) if min > max => Some("Salary Max must be greater than Salary Min"),
        _ => None,
    }
}

fn validate_salary_type(salary_type: &str) -> Option<&'static str> {
    if salary_type.trim().is_empty() {
        Some("Salary Type is required")
    } else if SalaryType::parse(salary_type).is_none() {
        Some("Invalid salary type. Please select from the list.")
    } else {
        None
    }
}

fn validate_work_presence(work_presence: &str) -> Option<&'static str> {
    if work_presence.trim().is_empty() {
        Some("Work Presence is required")
    } else if WorkPresence::parse(work_presence).is_none() {
        Some("Invalid work presence. Please select from the list.")
    } else {
        None
    }
}

fn validate_company_website(company_website: &str) -> Option<&'static str> {
    if !company_website.trim().is_empty() && !is_valid_url(company_website) {
        Some("Company Website must be a valid URL including the protocol (e.g. https://)")
    } else {
        None
    }
}

fn validate_how_to_apply(how_to_apply: &str) -> Option<&'static str> {
    if how_to_apply.trim().is_empty() {
        Some("How to Apply is required")
    } else if HowToApply::parse(how_to_apply).is_none() {
        Some("Invalid how to apply option. Please select from the list.")
    } else {
        None
    }
}

fn validate_link_to_apply(how_to_apply: &str, link_to_apply: &str) -> Option<&'static str> {
    if HowToApply::parse(how_to_apply) == Some(HowToApply::ApplyOnline)
        && !is_valid_url(link_to_apply)
    {
        Some("Link to Apply must be a valid URL including the protocol (e.g. https://)")
    } else {
        None
    }
}

fn validate_contact_email(how_to_apply: &str, contact_email: &str) -> Option<&'static str> {
    if HowToApply::parse(how_to_apply) == Some(HowToApply::EmailResume)
        && !is_valid_email(contact_email)
    {
        Some("Invalid email address")
    } else {
        None
    }
}

fn validate_contact_phone(how_to_apply: &str, contact_phone: &str) -> Option<&'static str> {
    if HowToApply::parse(how_to_apply) == Some(HowToApply::CallPhone)
        && !is_valid_phone(contact_phone)
    {
        Some("Invalid phone number")
    } else {
        None
    }
}

fn validate_custom_instructions(
    how_to_apply: &str,
    custom_instructions: &str,
) -> Option<&'static str> {
    if HowToApply::parse(how_to_apply) == Some(HowToApply::CustomInstructions)
        && custom_instructions.trim().is_empty()
    {
        Some("Custom instructions are required if this option is selected")
    } else {
        None
    }
}

/// Well-formed absolute URL with an explicit scheme.
fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Basic `local@domain.tld` shape: one `@`, non-empty local part, and a
/// domain containing an interior dot.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty())
}

/// Permissive phone shape: optional leading `+`, at least one digit, only
/// digits, spaces, hyphens, and parentheses otherwise, ending in a digit.
fn is_valid_phone(value: &str) -> bool {
    let trimmed = value.trim();
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    !rest.is_empty()
        && rest.chars().any(|c| c.is_ascii_digit())
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
        && rest.ends_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{PostingForm, validate};

    #[fixture]
    fn valid_form() -> PostingForm {
        PostingForm {
            job_title: "Line Cook".into(),
            company_name: "Hill Country Diner".into(),
            category: "Restaurant".into(),
            employment_type: "Part-time".into(),
            job_description: r#"{"root":{"type":"root","children":[]}}"#.into(),
            salary_min: Some(15),
            salary_max: Some(20),
            salary_type: "Per Hour".into(),
            part_of_town: Some("Downtown".into()),
            work_presence: "In person".into(),
            company_website: "https://example.com".into(),
            how_to_apply: "applyOnline".into(),
            link_to_apply: "https://example.com/apply".into(),
            contact_email: String::new(),
            contact_phone: String::new(),
            custom_instructions: String::new(),
        }
    }

    #[rstest]
    fn valid_form_has_no_errors(valid_form: PostingForm) {
        let errors = validate(&valid_form);
        assert!(errors.is_valid(), "unexpected errors: {errors:?}");
    }

    #[rstest]
    fn blank_required_fields_each_report_their_own_error(valid_form: PostingForm) {
        let form = PostingForm {
            job_title: String::new(),
            company_name: "  ".into(),
            job_description: String::new(),
            ..valid_form
        };
        let errors = validate(&form);
        assert_eq!(errors.job_title, Some("Job Title is required"));
        assert_eq!(errors.company_name, Some("Company Name is required"));
        assert_eq!(errors.job_description, Some("Job Description is required"));
        assert!(errors.category.is_none());
    }

    #[rstest]
    #[case("", Some("Category is required"))]
    #[case("Underwater Basket Weaving", Some("Invalid category. Please select from the list."))]
    #[case("Ministry", None)]
    fn category_must_be_in_the_fixed_list(
        valid_form: PostingForm,
        #[case] category: &str,
        #[case] expected: Option<&'static str>,
    ) {
        let form = PostingForm {
            category: category.into(),
            ..valid_form
        };
        assert_eq!(validate(&form).category, expected);
    }

    #[rstest]
    fn zero_salary_min_only_flags_salary_min(valid_form: PostingForm) {
        let form = PostingForm {
            salary_min: Some(0),
            ..valid_form
        };
        let errors = validate(&form);
        assert_eq!(errors.salary_min, Some("Salary Min must be greater than 0"));
        let mut rest = errors;
        rest.salary_min = None;
        assert!(rest.is_valid(), "only salaryMin should be flagged");
    }

    #[rstest]
    #[case(Some(20), Some(15), Some("Salary Max must be greater than Salary Min"))]
    #[case(Some(20), Some(-5), Some("Salary Max must be greater than 0"))]
    #[case(Some(-20), Some(-5), Some("Salary Max must be greater than 0"))]
    #[case(Some(15), Some(15), None)]
    #[case(None, Some(15), None)]
    #[case(Some(15), None, None)]
    fn max_below_min_errors_on_the_max_field(
        valid_form: PostingForm,
        #[case] salary_min: Option<i32>,
        #[case] salary_max: Option<i32>,
        #[case] expected: Option<&'static str>,
    ) {
        let form = PostingForm {
            salary_min,
            salary_max,
            ..valid_form
        };
        assert_eq!(validate(&form).salary_max, expected);
    }

    #[rstest]
    #[case("not a url")]
    #[case("example.com")]
    #[case("www.example.com/jobs")]
    fn website_without_a_scheme_is_rejected(valid_form: PostingForm, #[case] url: &str) {
        let form = PostingForm {
            company_website: url.into(),
            ..valid_form
        };
        assert_eq!(
            validate(&form).company_website,
            Some("Company Website must be a valid URL including the protocol (e.g. https://)")
        );
    }

    #[rstest]
    fn empty_website_is_allowed(valid_form: PostingForm) {
        let form = PostingForm {
            company_website: String::new(),
            ..valid_form
        };
        assert!(validate(&form).company_website.is_none());
    }

    #[rstest]
    fn apply_online_requires_a_well_formed_link(valid_form: PostingForm) {
        let form = PostingForm {
            link_to_apply: "careers page".into(),
            ..valid_form
        };
        assert_eq!(
            validate(&form).link_to_apply,
            Some("Link to Apply must be a valid URL including the protocol (e.g. https://)")
        );
    }

    #[rstest]
    #[case("jane@example.com", None)]
    #[case("jane.doe@mail.example.co", None)]
    #[case("jane", Some("Invalid email address"))]
    #[case("jane@example", Some("Invalid email address"))]
    #[case("@example.com", Some("Invalid email address"))]
    fn email_channel_checks_address_shape(
        valid_form: PostingForm,
        #[case] contact_email: &str,
        #[case] expected: Option<&'static str>,
    ) {
        let form = PostingForm {
            how_to_apply: "emailResume".into(),
            contact_email: contact_email.into(),
            ..valid_form
        };
        assert_eq!(validate(&form).contact_email, expected);
    }

    #[rstest]
    #[case("512-555-0147", None)]
    #[case("+1 (512) 555-0147", None)]
    #[case("5125550147", None)]
    #[case("call me", Some("Invalid phone number"))]
    #[case("", Some("Invalid phone number"))]
    #[case("555-", Some("Invalid phone number"))]
    fn phone_channel_checks_number_shape(
        valid_form: PostingForm,
        #[case] contact_phone: &str,
        #[case] expected: Option<&'static str>,
    ) {
        let form = PostingForm {
            how_to_apply: "callPhone".into(),
            contact_phone: contact_phone.into(),
            ..valid_form
        };
        assert_eq!(validate(&form).contact_phone, expected);
    }

    #[rstest]
    fn custom_instructions_required_only_when_selected(valid_form: PostingForm) {
        let selected = PostingForm {
            how_to_apply: "customInstructions".into(),
            custom_instructions: String::new(),
            ..valid_form.clone()
        };
        assert_eq!(
            validate(&selected).custom_instructions,
            Some("Custom instructions are required if this option is selected")
        );

        // Inactive channels are not validated, even when empty.
        let inactive = PostingForm {
            custom_instructions: String::new(),
            contact_email: String::new(),
            ..valid_form
        };
        let errors = validate(&inactive);
        assert!(errors.custom_instructions.is_none());
        assert!(errors.contact_email.is_none());
    }

    #[rstest]
    fn unknown_discriminator_is_an_error(valid_form: PostingForm) {
        let form = PostingForm {
            how_to_apply: "faxResume".into(),
            ..valid_form
        };
        assert_eq!(
            validate(&form).how_to_apply,
            Some("Invalid how to apply option. Please select from the list.")
        );
    }

    #[rstest]
    fn field_errors_serialise_only_present_entries(valid_form: PostingForm) {
        let form = PostingForm {
            job_title: String::new(),
            ..valid_form
        };
        let json = serde_json::to_value(validate(&form)).expect("serialises");
        assert_eq!(
            json,
            serde_json::json!({ "jobTitle": "Job Title is required" })
        );
    }
}
