//! Data Transfer Objects for the REST API.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::form::{
    Contact, Field, NoWebsiteProfile, Profile, Submission, WebsiteProfile, YesNo,
};

// =============================================================================
// Submit DTOs
// =============================================================================

/// Flat request body for `POST /api/submit-form`.
///
/// Every field is optional at the wire level; required fields are checked
/// when the body is turned into a [`Submission`] record.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitFormRequest {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// "yes" or "no"; selects which profile fields are kept
    #[schema(value_type = Option<String>, example = "no")]
    pub has_website: Option<YesNo>,

    pub website_use: Option<String>,
    pub website_use_other: Option<String>,
    pub business_industry: Option<String>,
    pub business_industry_other: Option<String>,
    pub target_audience: Option<String>,
    pub target_audience_other: Option<String>,
    /// `null` is accepted and stored as an empty list
    #[schema(value_type = Option<Vec<String>>)]
    pub challenges: Option<Vec<String>>,
    #[schema(value_type = Option<String>)]
    pub implemented_strategies: Option<YesNo>,
    #[schema(value_type = Option<String>)]
    pub campaigns: Option<YesNo>,
    #[serde(rename = "digitalperformance")]
    #[schema(value_type = Option<String>)]
    pub digital_performance: Option<YesNo>,
    #[schema(value_type = Option<String>)]
    pub join_wishlist: Option<YesNo>,

    #[schema(value_type = Option<String>)]
    pub want_website: Option<YesNo>,
    #[schema(value_type = Option<Vec<String>>)]
    pub creation_challenges: Option<Vec<String>>,
}

/// Record-level rejection of a request body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Path `{0}` is required.")]
    MissingField(Field),
}

fn required(value: Option<String>, field: Field) -> Result<String, RecordError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RecordError::MissingField(field)),
    }
}

impl TryFrom<SubmitFormRequest> for Submission {
    type Error = RecordError;

    fn try_from(req: SubmitFormRequest) -> Result<Self, Self::Error> {
        let contact = Contact {
            name: required(req.name, Field::Name)?,
            company_name: required(req.company_name, Field::CompanyName)?,
            email: required(req.email, Field::Email)?,
            phone: required(req.phone, Field::Phone)?,
        };

        let profile = match req.has_website {
            Some(YesNo::Yes) => Profile::WithWebsite(WebsiteProfile {
                website_use: req.website_use,
                website_use_other: req.website_use_other,
                business_industry: req.business_industry,
                business_industry_other: req.business_industry_other,
                target_audience: req.target_audience,
                target_audience_other: req.target_audience_other,
                challenges: req.challenges.unwrap_or_default(),
                implemented_strategies: req.implemented_strategies,
                campaigns: req.campaigns,
                digital_performance: req.digital_performance,
                join_wishlist: req.join_wishlist,
            }),
            Some(YesNo::No) => Profile::WithoutWebsite(NoWebsiteProfile {
                want_website: req.want_website,
                creation_challenges: req.creation_challenges.unwrap_or_default(),
            }),
            None => return Err(RecordError::MissingField(Field::HasWebsite)),
        };

        Ok(Submission { contact, profile })
    }
}

/// Response for an accepted submission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitFormResponse {
    pub message: String,
}

// =============================================================================
// Health DTOs
// =============================================================================

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service status with storage info
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    /// Active storage backend ("memory" or "file")
    pub store: String,
}
