//! Client-side orchestration for the bio generator.
//!
//! A submission is two strictly sequential HTTP calls: a health probe and the
//! generation request. Each call is raced against its own timer and every
//! failure is mapped to one user-facing [`SubmitError`].
//!
//! Platform primitives sit behind [`HttpClient`] and [`Timer`] so the same
//! controller runs on the web front-end, natively, and against fakes in tests.

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod race;
pub mod service;
pub mod state;
pub mod timer;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

pub use config::ClientConfig;
pub use controller::SubmissionController;
pub use error::{Stage, SubmitError, SubmitRejected, TransportError};
pub use form::{ProfileField, ProfileForm};
pub use http::{HttpClient, HttpRequest, HttpResponse, Method};
pub use race::{race_timeout, Elapsed};
pub use service::BioService;
pub use shared_types::ProfileInput;
pub use state::{RequestState, SubmissionResult, SubmissionState};
pub use timer::Timer;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{ReqwestClient, TokioTimer};
