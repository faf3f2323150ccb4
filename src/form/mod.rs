//! Business Information Form: field catalogue, draft state, validation and
//! the two-step controller.

pub mod catalog;
pub mod controller;
pub mod draft;
pub mod model;
pub mod validate;

pub use catalog::{ChoiceField, Field, MultiField, Question, TextField, OTHER};
pub use controller::{StepController, Step, SubmitOutcome, Transition};
pub use draft::{DraftError, FormDraft};
pub use model::{Contact, NoWebsiteProfile, Profile, Submission, WebsiteProfile, YesNo};
pub use validate::{validate, validate_field, FieldErrors};
