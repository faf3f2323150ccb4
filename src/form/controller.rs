//! Two-step form controller.
//!
//! Step one collects contact details, step two the business profile. The
//! controller exposes navigation (`advance`, `back`) and submission
//! (`submit`) as separate operations; `submit` on the first step still
//! advances so a single primary button can drive the whole form.
//!
//! Submission is split into `begin_submit` / `finish_submit` for event-driven
//! front ends that run the network call elsewhere. While a request is in
//! flight further attempts are ignored.

use std::sync::Arc;

use crate::client::{Delivery, SubmitTransport};
use crate::notify::{Notifier, Toast};

use super::catalog::Field;
use super::draft::FormDraft;
use super::model::Submission;
use super::validate::{validate, validate_field, FieldErrors};

pub const SUBMITTED_MESSAGE: &str = "Form submitted successfully";
pub const REJECTED_MESSAGE: &str = "Form submission failed";
pub const UNREACHABLE_MESSAGE: &str = "Error submitting form";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Step {
    /// Step 1: contact details
    #[default]
    Contact,
    /// Step 2: business profile; the only step that submits
    Profile,
}

impl Step {
    /// 1-based step number for progress indicators
    pub fn number(&self) -> u8 {
        match self {
            Step::Contact => 1,
            Step::Profile => 2,
        }
    }

    pub const COUNT: u8 = 2;
}

/// Result of a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved(Step),
    /// Forward navigation refused; these contact fields are empty
    Blocked(Vec<Field>),
}

/// Result of a submit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submit on the first step was treated as "Next"
    Navigated(Transition),
    /// Validation failed; errors are on the controller
    Invalid,
    /// A previous submission has not resolved yet
    InFlight,
    /// The request was sent and resolved
    Delivered(Delivery),
}

/// Clears the in-flight flag when the request scope ends
struct PendingGuard<'a>(&'a mut bool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

pub struct StepController {
    step: Step,
    draft: FormDraft,
    errors: FieldErrors,
    pending: bool,
    transport: Arc<dyn SubmitTransport>,
    notifier: Arc<dyn Notifier>,
}

impl StepController {
    pub fn new(transport: Arc<dyn SubmitTransport>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_draft(FormDraft::new(), transport, notifier)
    }

    /// Start on step one with pre-filled values
    pub fn with_draft(
        draft: FormDraft,
        transport: Arc<dyn SubmitTransport>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            step: Step::Contact,
            draft,
            errors: FieldErrors::new(),
            pending: false,
            transport,
            notifier,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Field edits go through the draft
    pub fn draft_mut(&mut self) -> &mut FormDraft {
        &mut self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Label of the dual-purpose primary button
    pub fn primary_action_label(&self) -> &'static str {
        match self.step {
            Step::Contact => "Next",
            Step::Profile => "Submit",
        }
    }

    /// Re-run one field's rule after an edit, updating its inline error
    pub fn revalidate(&mut self, field: Field) -> Option<&str> {
        match validate_field(field, &self.draft) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        self.error(field)
    }

    /// Move from contact details to the business profile.
    ///
    /// Only checks that the contact fields are present; their format is
    /// checked on submit.
    pub fn advance(&mut self) -> Transition {
        if self.step == Step::Profile {
            return Transition::Moved(Step::Profile);
        }

        let missing = self.draft.missing_contact_fields();
        if missing.is_empty() {
            for field in Field::CONTACT {
                self.errors.remove(&field);
            }
            self.step = Step::Profile;
            tracing::debug!("advanced to profile step");
            return Transition::Moved(Step::Profile);
        }

        for field in Field::CONTACT {
            self.revalidate(field);
        }
        tracing::debug!(?missing, "advance blocked");
        Transition::Blocked(missing)
    }

    /// Return to contact details. Never validates.
    pub fn back(&mut self) -> Step {
        self.step = Step::Contact;
        self.step
    }

    /// First half of a submission: validate and mark a request in flight.
    ///
    /// `Ok` carries the payload to send; `Err` carries the outcome when
    /// nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitOutcome> {
        if self.pending {
            tracing::debug!("submission already in flight, ignoring");
            return Err(SubmitOutcome::InFlight);
        }

        if self.step != Step::Profile {
            return Err(SubmitOutcome::Navigated(self.advance()));
        }

        match validate(&self.draft) {
            Ok(submission) => {
                self.errors.clear();
                self.pending = true;
                Ok(submission)
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "submission failed validation");
                self.errors = errors;
                Err(SubmitOutcome::Invalid)
            }
        }
    }

    /// Second half of a submission: apply the outcome and notify the user
    pub fn finish_submit(&mut self, delivery: &Delivery) {
        self.pending = false;

        match delivery {
            Delivery::Created => {
                self.notifier.notify(Toast::success(SUBMITTED_MESSAGE));
                self.reset();
            }
            Delivery::Rejected { status } => {
                tracing::warn!(status, "submission rejected, keeping entered values");
                self.notifier.notify(Toast::error(REJECTED_MESSAGE));
            }
            Delivery::Unreachable { reason } => {
                tracing::warn!(%reason, "submission unreachable, keeping entered values");
                self.notifier.notify(Toast::error(UNREACHABLE_MESSAGE));
            }
        }
    }

    /// Validate, send and apply the outcome
    pub async fn submit(&mut self) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(outcome) => return outcome,
        };

        let delivery = {
            // Cleared even when the caller drops this future mid-request
            let _pending = PendingGuard(&mut self.pending);
            self.transport.send(&submission).await
        };
        self.finish_submit(&delivery);
        SubmitOutcome::Delivered(delivery)
    }

    /// Back to step one with every field cleared
    pub fn reset(&mut self) {
        self.draft.reset();
        self.errors.clear();
        self.pending = false;
        self.step = Step::Contact;
    }
}
