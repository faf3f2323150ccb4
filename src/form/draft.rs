//! Mutable form state behind the Business Information Form.
//!
//! The draft mirrors what the user has typed or selected so far, including
//! answers on a branch that is currently hidden. It only becomes a
//! [`Submission`] through validation, which materializes the branch selected
//! by `hasWebsite`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::{ChoiceField, Field, MultiField, Question, TextField, OTHER};
use super::model::{Contact, NoWebsiteProfile, Profile, WebsiteProfile, YesNo};

/// Errors raised when a draft is edited outside the form's constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{option:?} is not an option for {field}")]
    UnknownOption { field: Field, option: String },

    #[error("{field} can only be set when {companion} is \"Other\"")]
    OtherInactive { field: Field, companion: Field },
}

/// Field values of an in-progress form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormDraft {
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub has_website: Option<YesNo>,

    pub website_use: Option<String>,
    pub website_use_other: String,
    pub business_industry: Option<String>,
    pub business_industry_other: String,
    pub target_audience: Option<String>,
    pub target_audience_other: String,
    pub challenges: Vec<String>,
    pub implemented_strategies: Option<YesNo>,
    pub campaigns: Option<YesNo>,
    #[serde(rename = "digitalperformance")]
    pub digital_performance: Option<YesNo>,
    pub join_wishlist: Option<YesNo>,

    pub want_website: Option<YesNo>,
    pub creation_challenges: Vec<String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::CompanyName => &self.company_name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::CompanyName => &mut self.company_name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    pub fn answer_of(&self, question: Question) -> Option<YesNo> {
        match question {
            Question::HasWebsite => self.has_website,
            Question::ImplementedStrategies => self.implemented_strategies,
            Question::Campaigns => self.campaigns,
            Question::DigitalPerformance => self.digital_performance,
            Question::JoinWishlist => self.join_wishlist,
            Question::WantWebsite => self.want_website,
        }
    }

    pub fn answer(&mut self, question: Question, value: YesNo) {
        let slot = match question {
            Question::HasWebsite => &mut self.has_website,
            Question::ImplementedStrategies => &mut self.implemented_strategies,
            Question::Campaigns => &mut self.campaigns,
            Question::DigitalPerformance => &mut self.digital_performance,
            Question::JoinWishlist => &mut self.join_wishlist,
            Question::WantWebsite => &mut self.want_website,
        };
        *slot = Some(value);
    }

    pub fn choice(&self, choice: ChoiceField) -> Option<&str> {
        match choice {
            ChoiceField::WebsiteUse => self.website_use.as_deref(),
            ChoiceField::BusinessIndustry => self.business_industry.as_deref(),
            ChoiceField::TargetAudience => self.target_audience.as_deref(),
        }
    }

    pub fn other(&self, choice: ChoiceField) -> &str {
        match choice {
            ChoiceField::WebsiteUse => &self.website_use_other,
            ChoiceField::BusinessIndustry => &self.business_industry_other,
            ChoiceField::TargetAudience => &self.target_audience_other,
        }
    }

    /// Select a catalogue option. Anything but "Other" clears the companion text.
    pub fn select(&mut self, choice: ChoiceField, option: &str) -> Result<(), DraftError> {
        if !choice.options().contains(&option) {
            return Err(DraftError::UnknownOption {
                field: choice.field(),
                option: option.to_string(),
            });
        }

        let (value, other) = self.choice_slots(choice);
        *value = Some(option.to_string());
        if option != OTHER {
            other.clear();
        }
        Ok(())
    }

    /// Unselect a choice together with its companion text
    pub fn clear_choice(&mut self, choice: ChoiceField) {
        let (value, other) = self.choice_slots(choice);
        *value = None;
        other.clear();
    }

    /// Set the free text behind an "Other" selection
    pub fn set_other(
        &mut self,
        choice: ChoiceField,
        text: impl Into<String>,
    ) -> Result<(), DraftError> {
        if self.choice(choice) != Some(OTHER) {
            return Err(DraftError::OtherInactive {
                field: choice.other_field(),
                companion: choice.field(),
            });
        }

        let (_, other) = self.choice_slots(choice);
        *other = text.into();
        Ok(())
    }

    pub fn selected(&self, multi: MultiField) -> &[String] {
        match multi {
            MultiField::Challenges => &self.challenges,
            MultiField::CreationChallenges => &self.creation_challenges,
        }
    }

    /// Flip a checkbox. Returns whether the option is now selected.
    pub fn toggle(&mut self, multi: MultiField, option: &str) -> Result<bool, DraftError> {
        if !multi.options().contains(&option) {
            return Err(DraftError::UnknownOption {
                field: multi.field(),
                option: option.to_string(),
            });
        }

        let selected = match multi {
            MultiField::Challenges => &mut self.challenges,
            MultiField::CreationChallenges => &mut self.creation_challenges,
        };

        if let Some(pos) = selected.iter().position(|s| s == option) {
            selected.remove(pos);
            Ok(false)
        } else {
            selected.push(option.to_string());
            Ok(true)
        }
    }

    /// Re-establish the `*Other` invariant on a draft loaded wholesale
    /// (e.g. from JSON) rather than edited through the setters.
    pub fn normalize(&mut self) {
        for choice in ChoiceField::all() {
            let (value, other) = self.choice_slots(*choice);
            if value.as_deref() != Some(OTHER) {
                other.clear();
            }
        }
    }

    /// Fields on the first step that are still empty
    pub fn missing_contact_fields(&self) -> Vec<Field> {
        [
            TextField::Name,
            TextField::CompanyName,
            TextField::Email,
            TextField::Phone,
        ]
        .into_iter()
        .filter(|f| self.text(*f).is_empty())
        .map(|f| f.field())
        .collect()
    }

    pub(crate) fn contact(&self) -> Contact {
        Contact {
            name: self.name.clone(),
            company_name: self.company_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Materialize the branch selected by `has_website`
    pub(crate) fn profile(&self, has_website: YesNo) -> Profile {
        match has_website {
            YesNo::Yes => Profile::WithWebsite(WebsiteProfile {
                website_use: self.website_use.clone(),
                website_use_other: other_if_selected(
                    self.website_use.as_deref(),
                    &self.website_use_other,
                ),
                business_industry: self.business_industry.clone(),
                business_industry_other: other_if_selected(
                    self.business_industry.as_deref(),
                    &self.business_industry_other,
                ),
                target_audience: self.target_audience.clone(),
                target_audience_other: other_if_selected(
                    self.target_audience.as_deref(),
                    &self.target_audience_other,
                ),
                challenges: self.challenges.clone(),
                implemented_strategies: self.implemented_strategies,
                campaigns: self.campaigns,
                digital_performance: self.digital_performance,
                join_wishlist: self.join_wishlist,
            }),
            YesNo::No => Profile::WithoutWebsite(NoWebsiteProfile {
                want_website: self.want_website,
                creation_challenges: self.creation_challenges.clone(),
            }),
        }
    }

    fn choice_slots(&mut self, choice: ChoiceField) -> (&mut Option<String>, &mut String) {
        match choice {
            ChoiceField::WebsiteUse => (&mut self.website_use, &mut self.website_use_other),
            ChoiceField::BusinessIndustry => (
                &mut self.business_industry,
                &mut self.business_industry_other,
            ),
            ChoiceField::TargetAudience => {
                (&mut self.target_audience, &mut self.target_audience_other)
            }
        }
    }
}

fn other_if_selected(choice: Option<&str>, text: &str) -> Option<String> {
    (choice == Some(OTHER)).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaving_other_clears_companion_text() {
        for choice in ChoiceField::all() {
            let mut draft = FormDraft::new();
            draft.select(*choice, OTHER).unwrap();
            draft.set_other(*choice, "Custom answer").unwrap();
            assert_eq!(draft.other(*choice), "Custom answer");

            let first = choice.options()[0];
            draft.select(*choice, first).unwrap();
            assert_eq!(draft.other(*choice), "");

            // Selecting a non-Other value again keeps it empty
            draft.select(*choice, first).unwrap();
            assert_eq!(draft.other(*choice), "");
            assert_eq!(draft.choice(*choice), Some(first));
        }
    }

    #[test]
    fn test_reselecting_other_keeps_text() {
        let mut draft = FormDraft::new();
        draft.select(ChoiceField::TargetAudience, OTHER).unwrap();
        draft
            .set_other(ChoiceField::TargetAudience, "Hobbyists")
            .unwrap();
        draft.select(ChoiceField::TargetAudience, OTHER).unwrap();
        assert_eq!(draft.target_audience_other, "Hobbyists");
    }

    #[test]
    fn test_set_other_requires_other_selected() {
        let mut draft = FormDraft::new();
        let err = draft
            .set_other(ChoiceField::WebsiteUse, "anything")
            .unwrap_err();
        assert_eq!(
            err,
            DraftError::OtherInactive {
                field: Field::WebsiteUseOther,
                companion: Field::WebsiteUse,
            }
        );

        draft.select(ChoiceField::WebsiteUse, "Generating leads or sales").unwrap();
        assert!(draft.set_other(ChoiceField::WebsiteUse, "anything").is_err());
    }

    #[test]
    fn test_select_rejects_unknown_option() {
        let mut draft = FormDraft::new();
        let err = draft
            .select(ChoiceField::BusinessIndustry, "Mining")
            .unwrap_err();
        assert!(matches!(
            err,
            DraftError::UnknownOption {
                field: Field::BusinessIndustry,
                ..
            }
        ));
        assert_eq!(draft.business_industry, None);
    }

    #[test]
    fn test_clear_choice() {
        let mut draft = FormDraft::new();
        draft.select(ChoiceField::WebsiteUse, OTHER).unwrap();
        draft.set_other(ChoiceField::WebsiteUse, "Portfolio").unwrap();
        draft.clear_choice(ChoiceField::WebsiteUse);
        assert_eq!(draft.website_use, None);
        assert_eq!(draft.website_use_other, "");
    }

    #[test]
    fn test_toggle_multi_select() {
        let mut draft = FormDraft::new();
        let option = "Setting up hosting and domain management";

        assert!(draft.toggle(MultiField::CreationChallenges, option).unwrap());
        assert!(draft.toggle(MultiField::CreationChallenges, OTHER).unwrap());
        assert_eq!(
            draft.selected(MultiField::CreationChallenges),
            &[option.to_string(), OTHER.to_string()]
        );

        assert!(!draft.toggle(MultiField::CreationChallenges, option).unwrap());
        assert_eq!(
            draft.selected(MultiField::CreationChallenges),
            &[OTHER.to_string()]
        );
    }

    #[test]
    fn test_toggle_checks_the_right_catalogue() {
        let mut draft = FormDraft::new();
        // A website challenge is not a creation challenge
        assert!(draft
            .toggle(MultiField::CreationChallenges, "Attracting enough traffic")
            .is_err());
        assert!(draft
            .toggle(MultiField::Challenges, "Attracting enough traffic")
            .unwrap());
    }

    #[test]
    fn test_missing_contact_fields_is_a_presence_check() {
        let mut draft = FormDraft::new();
        assert_eq!(draft.missing_contact_fields(), Field::CONTACT.to_vec());

        draft.set_text(TextField::Name, "J");
        draft.set_text(TextField::Email, "not-an-email");
        assert_eq!(
            draft.missing_contact_fields(),
            vec![Field::CompanyName, Field::Phone]
        );
    }

    #[test]
    fn test_normalize_clears_stale_other_text() {
        let mut draft: FormDraft = serde_json::from_str(
            r#"{"websiteUse": "Attracting more visitors", "websiteUseOther": "stale",
                "businessIndustry": "Other", "businessIndustryOther": "Agritech"}"#,
        )
        .unwrap();

        draft.normalize();
        assert_eq!(draft.website_use_other, "");
        assert_eq!(draft.business_industry_other, "Agritech");
    }

    #[test]
    fn test_profile_only_materializes_selected_branch() {
        let mut draft = FormDraft::new();
        draft.answer(Question::WantWebsite, YesNo::Yes);
        draft.answer(Question::Campaigns, YesNo::No);

        match draft.profile(YesNo::No) {
            Profile::WithoutWebsite(p) => assert_eq!(p.want_website, Some(YesNo::Yes)),
            Profile::WithWebsite(_) => panic!("expected no-website branch"),
        }
        match draft.profile(YesNo::Yes) {
            Profile::WithWebsite(p) => {
                assert_eq!(p.campaigns, Some(YesNo::No));
                assert_eq!(p.website_use_other, None);
            }
            Profile::WithoutWebsite(_) => panic!("expected website branch"),
        }
    }

    #[test]
    fn test_reset() {
        let mut draft = FormDraft::new();
        draft.set_text(TextField::Name, "Jo");
        draft.answer(Question::HasWebsite, YesNo::Yes);
        draft.reset();
        assert_eq!(draft, FormDraft::default());
    }
}
