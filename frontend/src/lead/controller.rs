use crate::analytics::{ConversionType, Tracker};
use crate::config;

use super::submit::{LeadSubmitter, SubmitError};
use super::validation::{Field, ValidationErrors};
use super::{LeadForm, LeadRecord, SignupMode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Checkpoints reported around a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunnelStage {
    Started,
    Completed,
    Error,
}

impl FunnelStage {
    pub fn name(self) -> &'static str {
        match self {
            FunnelStage::Started => "form_started",
            FunnelStage::Completed => "form_completed",
            FunnelStage::Error => "form_error",
        }
    }

    pub fn number(self) -> i32 {
        match self {
            FunnelStage::Started => 1,
            FunnelStage::Completed => 2,
            FunnelStage::Error => -1,
        }
    }
}

/// Why a submit request did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    Invalid,
    /// A submission is in flight, or the lead was already captured.
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Failed,
    Invalid,
    Ignored,
}

/// State machine behind the pricing-section lead form.
///
/// `Editing -> Submitting -> Submitted`, falling back to `Editing` when the
/// submitter fails. Validation failures never leave `Editing` and never
/// reach the tracker.
pub struct LeadFormController {
    mode: SignupMode,
    status: FormStatus,
    form: LeadForm,
    errors: ValidationErrors,
    tracker: Tracker,
}

impl LeadFormController {
    pub fn new(mode: SignupMode, tracker: Tracker) -> Self {
        Self {
            mode,
            status: FormStatus::Editing,
            form: LeadForm::default(),
            errors: ValidationErrors::default(),
            tracker,
        }
    }

    pub fn mode(&self) -> SignupMode {
        self.mode
    }

    pub fn conversion_type(&self) -> ConversionType {
        self.mode.conversion_type()
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Updates a text field and clears its stale error. Ignored once the lead
    /// has been captured.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.status == FormStatus::Submitted {
            return;
        }
        let value = value.into();
        match field {
            Field::Email => self.form.email = value,
            Field::FirstName => self.form.first_name = value,
            Field::LastName => self.form.last_name = value,
            Field::Interests => {
                self.form.interests = value
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect();
            }
        }
        self.errors.clear(field);
    }

    pub fn set_interests(&mut self, interests: Vec<String>) {
        if self.status == FormStatus::Submitted {
            return;
        }
        self.form.interests = interests;
        self.errors.clear(Field::Interests);
    }

    /// Validates and, when valid, moves to `Submitting` and reports
    /// `form_started`. The returned record goes to the submitter.
    pub fn begin_submit(&mut self) -> Result<LeadRecord, SubmitRejected> {
        if self.status != FormStatus::Editing {
            log::debug!("Ignoring submit while {:?}", self.status);
            return Err(SubmitRejected::Busy);
        }

        let lead = match self.form.validate() {
            Ok(lead) => lead,
            Err(errors) => {
                self.errors = errors;
                return Err(SubmitRejected::Invalid);
            }
        };

        self.errors = ValidationErrors::default();
        self.status = FormStatus::Submitting;
        self.report(FunnelStage::Started);
        Ok(lead)
    }

    /// Applies the submitter's result to an in-flight submission.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        if self.status != FormStatus::Submitting {
            log::debug!("Dropping submission result while {:?}", self.status);
            return SubmitOutcome::Ignored;
        }

        match result {
            Ok(()) => {
                self.tracker
                    .track_form_submission(self.conversion_type(), config::FORM_LOCATION);
                self.report(FunnelStage::Completed);
                self.status = FormStatus::Submitted;
                self.form = LeadForm::default();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                log::warn!("Form submission error: {}", e);
                self.report(FunnelStage::Error);
                self.status = FormStatus::Editing;
                SubmitOutcome::Failed
            }
        }
    }

    /// Runs a whole submission attempt against `submitter`.
    pub async fn submit<S>(&mut self, submitter: &S) -> SubmitOutcome
    where
        S: LeadSubmitter + ?Sized,
    {
        let lead = match self.begin_submit() {
            Ok(lead) => lead,
            Err(SubmitRejected::Invalid) => return SubmitOutcome::Invalid,
            Err(SubmitRejected::Busy) => return SubmitOutcome::Ignored,
        };
        let result = submitter.submit(lead).await;
        self.finish_submit(result)
    }

    fn report(&self, stage: FunnelStage) {
        self.tracker
            .track_funnel_step(stage.name(), stage.number(), self.conversion_type());
    }
}
