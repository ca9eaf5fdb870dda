use bio_client::{ProfileForm, SubmissionState, SubmitRejected};

pub const SUBMIT_LABEL: &str = "Generate My Bio";
pub const SUBMITTING_LABEL: &str = "Creating Your Bio...";
pub const RESET_LABEL: &str = "Generate Another Bio";

pub fn submit_label(state: &SubmissionState) -> &'static str {
    if state.is_loading() {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    }
}

pub fn banner_message(state: &SubmissionState) -> Option<String> {
    state.error().map(ToString::to_string)
}

pub fn missing_hint(form: &ProfileForm) -> Option<String> {
    let missing = form.missing_fields();
    if missing.is_empty() {
        None
    } else {
        Some(SubmitRejected::Incomplete { missing }.to_string())
    }
}

pub fn submit_enabled(form: &ProfileForm, loading: bool) -> bool {
    form.is_complete() && !loading
}
