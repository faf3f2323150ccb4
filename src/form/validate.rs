//! Schema validation for the Business Information Form.
//!
//! Validation is a pure function of the draft. Malformed input never fails
//! hard: it comes back as one message per offending field.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::catalog::Field;
use super::draft::FormDraft;
use super::model::Submission;

/// One human-readable message per invalid field
pub type FieldErrors = BTreeMap<Field, String>;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const COMPANY_TOO_SHORT: &str = "Company name must be at least 2 characters";
pub const INVALID_EMAIL: &str = "Invalid email address";
pub const INVALID_PHONE: &str = "Invalid phone number";
pub const SELECT_AN_OPTION: &str = "Please select an option";

const MIN_NAME_LEN: usize = 2;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("phone pattern is valid"));

/// local@domain shape: no leading dot or doubled dots in the local part,
/// dotted domain ending in an alphabetic TLD of two or more letters.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

/// Optional leading `+`, then at least ten ASCII digits, spaces, hyphens or parentheses
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

fn long_enough(value: &str) -> bool {
    value.trim().chars().count() >= MIN_NAME_LEN
}

/// Run the rule for a single field. Returns the message when it fails.
///
/// Branch-conditional fields are optional and always pass.
pub fn validate_field(field: Field, draft: &FormDraft) -> Option<String> {
    let message = match field {
        Field::Name if !long_enough(&draft.name) => NAME_TOO_SHORT,
        Field::CompanyName if !long_enough(&draft.company_name) => COMPANY_TOO_SHORT,
        Field::Email if !is_valid_email(&draft.email) => INVALID_EMAIL,
        Field::Phone if !is_valid_phone(&draft.phone) => INVALID_PHONE,
        Field::HasWebsite if draft.has_website.is_none() => SELECT_AN_OPTION,
        _ => return None,
    };
    Some(message.to_string())
}

/// Validate a subset of fields, collecting every failure
pub fn validate_fields(fields: &[Field], draft: &FormDraft) -> FieldErrors {
    fields
        .iter()
        .filter_map(|field| validate_field(*field, draft).map(|msg| (*field, msg)))
        .collect()
}

/// Validate the whole draft and build the submission for the selected branch
pub fn validate(draft: &FormDraft) -> Result<Submission, FieldErrors> {
    let errors = validate_fields(Field::all(), draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    let Some(has_website) = draft.has_website else {
        // Covered by the HasWebsite rule above
        let mut errors = FieldErrors::new();
        errors.insert(Field::HasWebsite, SELECT_AN_OPTION.to_string());
        return Err(errors);
    };

    Ok(Submission {
        contact: draft.contact(),
        profile: draft.profile(has_website),
    })
}
