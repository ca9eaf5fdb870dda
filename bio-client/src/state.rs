use crate::error::{SubmitError, SubmitRejected};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Checking,
    Submitting,
    Succeeded,
    Failed,
}

impl RequestState {
    /// A submission owns the state while checking or submitting.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Checking | Self::Submitting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Checking => "checking",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success(String),
    Failure(SubmitError),
}

impl SubmissionResult {
    pub fn bio(&self) -> Option<&str> {
        match self {
            Self::Success(bio) => Some(bio),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }
}

impl From<Result<String, SubmitError>> for SubmissionResult {
    fn from(result: Result<String, SubmitError>) -> Self {
        match result {
            Ok(bio) => Self::Success(bio),
            Err(err) => Self::Failure(err),
        }
    }
}

/// Request lifecycle plus the outcome of the last completed attempt.
///
/// `Idle -> Checking -> Submitting -> Succeeded | Failed -> Idle`. Only one
/// attempt may hold the state at a time: [`SubmissionState::begin`] refuses
/// while loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    phase: RequestState,
    result: Option<SubmissionResult>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> RequestState {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    pub fn bio(&self) -> Option<&str> {
        self.result.as_ref().and_then(SubmissionResult::bio)
    }

    pub fn error(&self) -> Option<&SubmitError> {
        self.result.as_ref().and_then(SubmissionResult::error)
    }

    /// The result view replaces the form only after a success.
    pub fn shows_result(&self) -> bool {
        self.phase == RequestState::Succeeded
    }

    /// Claim the state for a new attempt and clear the previous outcome.
    pub fn begin(&mut self) -> Result<(), SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::InFlight);
        }
        self.result = None;
        self.phase = RequestState::Checking;
        Ok(())
    }

    /// Record a progress report from the running attempt. Only forward
    /// moves between loading phases are accepted.
    pub fn advance(&mut self, phase: RequestState) {
        match (self.phase, phase) {
            (RequestState::Checking, RequestState::Submitting) => self.phase = phase,
            (current, next) if current == next => {}
            (current, next) => {
                tracing::debug!(
                    from = current.as_str(),
                    to = next.as_str(),
                    "Ignoring out-of-order phase report"
                );
            }
        }
    }

    /// Settle the running attempt.
    pub fn finish(&mut self, result: SubmissionResult) -> &SubmissionResult {
        self.phase = match result {
            SubmissionResult::Success(_) => RequestState::Succeeded,
            SubmissionResult::Failure(_) => RequestState::Failed,
        };
        self.result.insert(result)
    }

    /// Drop the last outcome and return to `Idle`. Ignored while an attempt
    /// is in flight; returns whether the reset happened.
    pub fn reset(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = RequestState::Idle;
        self.result = None;
        true
    }
}
