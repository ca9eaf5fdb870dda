use bio_client::{ProfileForm, SubmissionResult, SubmissionState};
use dioxus::prelude::{ReadableExt, Signal, WritableExt};

use crate::api::bio_service;

/// Run one submission against the bio server, reporting progress into
/// `submission` as it goes.
pub async fn submit_profile(form: Signal<ProfileForm>, mut submission: Signal<SubmissionState>) {
    let input = match form.read().validated() {
        Ok(input) => input,
        Err(e) => {
            dioxus_logger::tracing::warn!("Submission refused: {}", e);
            return;
        }
    };

    if let Err(e) = submission.write().begin() {
        dioxus_logger::tracing::warn!("Submission refused: {}", e);
        return;
    }

    dioxus_logger::tracing::info!(career = %input.career, "Generating bio");

    let service = bio_service();
    let result = service
        .submit_with(&input, move |phase| submission.write().advance(phase))
        .await;

    match &result {
        SubmissionResult::Success(bio) => {
            dioxus_logger::tracing::info!(chars = bio.len(), "Bio generated");
        }
        SubmissionResult::Failure(e) => {
            dioxus_logger::tracing::error!(kind = e.kind(), "Bio generation failed: {}", e);
        }
    }

    submission.write().finish(result);
}

/// Return to the form, keeping the current selections.
pub fn reset_submission(mut submission: Signal<SubmissionState>) {
    if !submission.write().reset() {
        dioxus_logger::tracing::debug!("Reset ignored while a bio is being generated");
    }
}
