//! Field identifiers, question labels and option catalogues for the
//! Business Information Form.

use serde::{Deserialize, Serialize};

/// Literal choice that activates a companion free-text field
pub const OTHER: &str = "Other";

pub const WEBSITE_USES: &[&str] = &[
    "Attracting more visitors",
    "Generating leads or sales",
    "Sharing information about your business",
    OTHER,
];

pub const BUSINESS_INDUSTRIES: &[&str] = &[
    "Technology",
    "E-commerce",
    "Healthcare",
    "Education",
    "Finance",
    "Real Estate",
    "Entertainment",
    "Travel and Hospitality",
    "Retail",
    OTHER,
];

pub const TARGET_AUDIENCES: &[&str] = &[
    "Businesses (B2B)",
    "Individual Consumers (B2C)",
    "Students",
    "Professionals",
    "Small and Medium Enterprises (SMEs)",
    "Large Corporations",
    "Non-Profit Organizations",
    OTHER,
];

/// Challenges offered to respondents who already run a website
pub const WEBSITE_CHALLENGES: &[&str] = &[
    "Attracting enough traffic",
    "Improving search engine rankings",
    "Maintaining or updating content regularly",
    "Poor user experience or navigation design",
    "Generating leads or conversions",
    "Measuring and analyzing website performance",
    OTHER,
];

/// Challenges offered to respondents without a website
pub const CREATION_CHALLENGES: &[&str] = &[
    "Lack of technical skills or knowledge",
    "Difficulty choosing the right platform or tools",
    "High development and maintenance costs",
    "Creating visually appealing and user-friendly designs",
    "Writing engaging and SEO-friendly content",
    "Ensuring compatibility across devices and browsers",
    "Setting up hosting and domain management",
    "Managing security and protecting against cyber threats",
    "Limited time to focus on development",
    OTHER,
];

/// Every field of a submission, keyed by its wire name.
///
/// Used as the key of validation error maps, so the ordering follows the
/// order fields appear in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    CompanyName,
    Email,
    Phone,
    HasWebsite,
    WebsiteUse,
    WebsiteUseOther,
    BusinessIndustry,
    BusinessIndustryOther,
    TargetAudience,
    TargetAudienceOther,
    Challenges,
    ImplementedStrategies,
    Campaigns,
    #[serde(rename = "digitalperformance")]
    DigitalPerformance,
    JoinWishlist,
    WantWebsite,
    CreationChallenges,
}

impl Field {
    /// Fields collected on the first step; all four gate forward navigation
    pub const CONTACT: [Field; 4] = [Field::Name, Field::CompanyName, Field::Email, Field::Phone];

    /// Wire name of the field (JSON key)
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::CompanyName => "companyName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::HasWebsite => "hasWebsite",
            Field::WebsiteUse => "websiteUse",
            Field::WebsiteUseOther => "websiteUseOther",
            Field::BusinessIndustry => "businessIndustry",
            Field::BusinessIndustryOther => "businessIndustryOther",
            Field::TargetAudience => "targetAudience",
            Field::TargetAudienceOther => "targetAudienceOther",
            Field::Challenges => "challenges",
            Field::ImplementedStrategies => "implementedStrategies",
            Field::Campaigns => "campaigns",
            Field::DigitalPerformance => "digitalperformance",
            Field::JoinWishlist => "joinWishlist",
            Field::WantWebsite => "wantWebsite",
            Field::CreationChallenges => "creationChallenges",
        }
    }

    /// Question or label shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::CompanyName => "Company Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::HasWebsite => "Do you have a website?",
            Field::WebsiteUse => "What is the primary use of your website?",
            Field::BusinessIndustry => "What is your business industry?",
            Field::TargetAudience => "Who is your target audience?",
            Field::WebsiteUseOther | Field::BusinessIndustryOther | Field::TargetAudienceOther => {
                "Please specify:"
            }
            Field::Challenges => "What challenges do you face with your website?",
            Field::ImplementedStrategies => {
                "Have you implemented any SEO strategies/tools for your website?"
            }
            Field::Campaigns => {
                "Are you utilizing any AI tools or collaborating with a marketing agency for your campaigns?"
            }
            Field::DigitalPerformance => "Do you use any tools to analyze your digital performance?",
            Field::JoinWishlist => "Would you like to be added to Astute's wishlist for AI tools?",
            Field::WantWebsite => "Do you want to build a website?",
            Field::CreationChallenges => "What challenges do you face when creating a website?",
        }
    }

    /// Look up a field by its wire name
    pub fn from_key(key: &str) -> Option<Field> {
        Field::all().iter().copied().find(|f| f.key() == key)
    }

    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::CompanyName,
            Field::Email,
            Field::Phone,
            Field::HasWebsite,
            Field::WebsiteUse,
            Field::WebsiteUseOther,
            Field::BusinessIndustry,
            Field::BusinessIndustryOther,
            Field::TargetAudience,
            Field::TargetAudienceOther,
            Field::Challenges,
            Field::ImplementedStrategies,
            Field::Campaigns,
            Field::DigitalPerformance,
            Field::JoinWishlist,
            Field::WantWebsite,
            Field::CreationChallenges,
        ]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Free-text identity fields on the first step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    CompanyName,
    Email,
    Phone,
}

impl TextField {
    pub fn field(&self) -> Field {
        match self {
            TextField::Name => Field::Name,
            TextField::CompanyName => Field::CompanyName,
            TextField::Email => Field::Email,
            TextField::Phone => Field::Phone,
        }
    }
}

/// Single-choice fields that carry an `*Other` companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceField {
    WebsiteUse,
    BusinessIndustry,
    TargetAudience,
}

impl ChoiceField {
    pub fn all() -> &'static [ChoiceField] {
        &[
            ChoiceField::WebsiteUse,
            ChoiceField::BusinessIndustry,
            ChoiceField::TargetAudience,
        ]
    }

    pub fn field(&self) -> Field {
        match self {
            ChoiceField::WebsiteUse => Field::WebsiteUse,
            ChoiceField::BusinessIndustry => Field::BusinessIndustry,
            ChoiceField::TargetAudience => Field::TargetAudience,
        }
    }

    /// The free-text field activated when this choice is "Other"
    pub fn other_field(&self) -> Field {
        match self {
            ChoiceField::WebsiteUse => Field::WebsiteUseOther,
            ChoiceField::BusinessIndustry => Field::BusinessIndustryOther,
            ChoiceField::TargetAudience => Field::TargetAudienceOther,
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            ChoiceField::WebsiteUse => WEBSITE_USES,
            ChoiceField::BusinessIndustry => BUSINESS_INDUSTRIES,
            ChoiceField::TargetAudience => TARGET_AUDIENCES,
        }
    }
}

/// Multi-select checkbox groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiField {
    Challenges,
    CreationChallenges,
}

impl MultiField {
    pub fn field(&self) -> Field {
        match self {
            MultiField::Challenges => Field::Challenges,
            MultiField::CreationChallenges => Field::CreationChallenges,
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            MultiField::Challenges => WEBSITE_CHALLENGES,
            MultiField::CreationChallenges => CREATION_CHALLENGES,
        }
    }
}

/// Yes/no radio questions, including the branch discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    HasWebsite,
    ImplementedStrategies,
    Campaigns,
    DigitalPerformance,
    JoinWishlist,
    WantWebsite,
}

impl Question {
    pub fn field(&self) -> Field {
        match self {
            Question::HasWebsite => Field::HasWebsite,
            Question::ImplementedStrategies => Field::ImplementedStrategies,
            Question::Campaigns => Field::Campaigns,
            Question::DigitalPerformance => Field::DigitalPerformance,
            Question::JoinWishlist => Field::JoinWishlist,
            Question::WantWebsite => Field::WantWebsite,
        }
    }
}
