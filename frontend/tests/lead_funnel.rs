//! Lead capture flows driven end to end through the public API.

mod common;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures::executor::block_on;
use onlybulls_landing::lead::{
    Field, FormStatus, LeadFormController, LeadRecord, SignupMode, SimulatedSubmitter, SubmitError,
    SubmitOutcome,
};

use common::{recording_tracker, MEASUREMENT_ID};

fn fill(controller: &mut LeadFormController, email: &str, first_name: &str) {
    controller.set_field(Field::Email, email);
    controller.set_field(Field::FirstName, first_name);
}

#[tokio::test(start_paused = true)]
async fn free_trial_signup_reports_full_funnel() {
    let (recorder, tracker) = recording_tracker();
    let mut controller = LeadFormController::new(SignupMode::FreeTrial, tracker);
    fill(&mut controller, "jane@example.com", "Jane");

    let submitter = SimulatedSubmitter::with_latency(Duration::ZERO);
    let outcome = controller.submit(&submitter).await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(controller.status(), FormStatus::Submitted);
    assert_eq!(
        recorder.event_names(),
        vec!["funnel_step", "form_submit", "conversion", "funnel_step"]
    );

    let steps = recorder.events("funnel_step");
    assert_eq!(steps[0]["event_label"], "form_started");
    assert_eq!(steps[0]["funnel_step"], 1);
    assert_eq!(steps[1]["event_label"], "form_completed");
    assert_eq!(steps[1]["funnel_step"], 2);
    assert_eq!(steps[1]["conversion_type"], "signup");

    let conversion = &recorder.events("conversion")[0];
    assert_eq!(conversion["send_to"], MEASUREMENT_ID);
    assert_eq!(conversion["value"], 1);

    let form_submit = &recorder.events("form_submit")[0];
    assert_eq!(form_submit["form_location"], "pricing-cta");
}

#[tokio::test(start_paused = true)]
async fn waitlist_signup_is_labelled_waitlist() {
    let (recorder, tracker) = recording_tracker();
    let mut controller = LeadFormController::new(SignupMode::Waitlist, tracker);
    fill(&mut controller, "jane@example.com", "Jane");

    controller.submit(&SimulatedSubmitter::with_latency(Duration::ZERO)).await;

    assert_eq!(recorder.events("form_submit")[0]["event_label"], "waitlist");
    assert_eq!(recorder.events("conversion")[0]["event_label"], "waitlist");
}

#[test]
fn invalid_email_never_reaches_submitter_or_analytics() {
    let (recorder, tracker) = recording_tracker();
    let mut controller = LeadFormController::new(SignupMode::BetaAccess, tracker);
    fill(&mut controller, "not-an-email", "Jane");

    let calls = Rc::new(Cell::new(0));
    let submitter = {
        let calls = calls.clone();
        move |_lead: LeadRecord| {
            calls.set(calls.get() + 1);
            async { Ok::<(), SubmitError>(()) }
        }
    };
    let outcome = block_on(controller.submit(&submitter));

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(controller.status(), FormStatus::Editing);
    assert!(controller.errors().get(Field::Email).is_some());
    assert_eq!(calls.get(), 0);
    assert!(recorder.event_names().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_submission_keeps_input_and_allows_retry() {
    let (recorder, tracker) = recording_tracker();
    let mut controller = LeadFormController::new(SignupMode::FreeTrial, tracker);
    fill(&mut controller, "jane@example.com", "Jane");

    let failing = |_lead: LeadRecord| async { Err::<(), _>(SubmitError::Network("offline".into())) };
    let outcome = controller.submit(&failing).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(controller.status(), FormStatus::Editing);
    assert_eq!(controller.form().email, "jane@example.com");
    let steps = recorder.events("funnel_step");
    let last = steps.last().expect("funnel steps reported");
    assert_eq!(last["event_label"], "form_error");
    assert_eq!(last["funnel_step"], -1);
    assert!(recorder.events("conversion").is_empty());

    let outcome = controller.submit(&SimulatedSubmitter::with_latency(Duration::ZERO)).await;
    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(recorder.events("conversion").len(), 1);
}

#[test]
fn submitted_record_carries_interests() {
    let (_recorder, tracker) = recording_tracker();
    let mut controller = LeadFormController::new(SignupMode::FreeTrial, tracker);
    fill(&mut controller, "jane@example.com", "Jane");
    controller.set_field(Field::Interests, "options, crypto");

    let record = controller.begin_submit().expect("valid form");
    assert_eq!(
        record.interests,
        Some(vec!["options".to_string(), "crypto".to_string()])
    );
}
