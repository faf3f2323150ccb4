//! Submission value types.
//!
//! A submission is a flat JSON object on the wire. In memory it is split into
//! the identity fields and a profile that is either the website-owner branch
//! or the no-website branch, discriminated by `hasWebsite`. Only the selected
//! branch is ever materialized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Answer to a yes/no radio question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(YesNo::Yes),
            "no" => Ok(YesNo::No),
            other => Err(format!("expected \"yes\" or \"no\", got {:?}", other)),
        }
    }
}

/// Identity fields collected on the first step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
}

/// Profile of a respondent who already has a website
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_use: Option<String>,
    /// Only present when `website_use` is "Other"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_use_other: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_industry_other: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience_other: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub challenges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implemented_strategies: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaigns: Option<YesNo>,
    #[serde(
        rename = "digitalperformance",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub digital_performance: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_wishlist: Option<YesNo>,
}

/// Profile of a respondent without a website
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoWebsiteProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub want_website: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creation_challenges: Vec<String>,
}

/// Second-step answers, tagged by `hasWebsite`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "hasWebsite")]
pub enum Profile {
    #[serde(rename = "yes")]
    WithWebsite(WebsiteProfile),
    #[serde(rename = "no")]
    WithoutWebsite(NoWebsiteProfile),
}

impl Profile {
    pub fn has_website(&self) -> YesNo {
        match self {
            Profile::WithWebsite(_) => YesNo::Yes,
            Profile::WithoutWebsite(_) => YesNo::No,
        }
    }
}

/// A validated form response, ready to be sent or stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(flatten)]
    pub contact: Contact,
    #[serde(flatten)]
    pub profile: Profile,
}

impl Submission {
    pub fn has_website(&self) -> YesNo {
        self.profile.has_website()
    }
}
