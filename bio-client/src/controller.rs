use crate::error::SubmitRejected;
use crate::form::ProfileForm;
use crate::http::HttpClient;
use crate::service::BioService;
use crate::state::{SubmissionResult, SubmissionState};
use crate::timer::Timer;

/// Form state, request lifecycle and the service that drives it.
///
/// `submit` takes `&mut self`, so a caller holding the controller cannot start
/// a second submission while one is awaited. Front-ends that keep the pieces
/// in separate reactive cells use [`SubmissionState::begin`] for the same
/// guard.
#[derive(Debug)]
pub struct SubmissionController<C, T> {
    service: BioService<C, T>,
    form: ProfileForm,
    state: SubmissionState,
}

impl<C: HttpClient, T: Timer> SubmissionController<C, T> {
    pub fn new(service: BioService<C, T>) -> Self {
        Self {
            service,
            form: ProfileForm::new(),
            state: SubmissionState::new(),
        }
    }

    pub fn service(&self) -> &BioService<C, T> {
        &self.service
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    /// Edits are accepted in any phase; a running submission works on the
    /// snapshot taken when it started.
    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        self.form.is_complete() && !self.state.is_loading()
    }

    /// Validate, check the backend, generate, and record the outcome.
    ///
    /// Rejections leave both the state and the network untouched.
    pub async fn submit(&mut self) -> Result<&SubmissionResult, SubmitRejected> {
        let input = self.form.validated()?;
        self.state.begin()?;

        let state = &mut self.state;
        let result = self
            .service
            .submit_with(&input, |phase| state.advance(phase))
            .await;

        Ok(self.state.finish(result))
    }

    /// "Generate another": back to `Idle` with the previous selections kept.
    pub fn reset(&mut self) -> bool {
        self.state.reset()
    }
}
