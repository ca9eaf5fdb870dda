//! Shared types between the bio front-end and the generation backend
//!
//! These types are used by both:
//! - the submission client (native and WASM)
//! - any backend serving `/api/health/` and `/api/generate-bio/`
//!
//! Serializable with serde for JSON over HTTP

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationError};

// ============================================================================
// Endpoints
// ============================================================================

/// Availability probe, answered before any generation request
pub const HEALTH_PATH: &str = "/api/health/";

/// Bio generation endpoint
pub const GENERATE_BIO_PATH: &str = "/api/generate-bio/";

// ============================================================================
// Request Types
// ============================================================================

/// Profile attributes submitted to request a bio
///
/// All four fields must be non-empty before the profile may be submitted;
/// `validate()` enforces that. A career made only of whitespace is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../bio-ui/src/types/generated.ts")]
pub struct ProfileInput {
    #[validate(custom(function = "not_blank"))]
    pub career: String,

    #[validate(length(min = 1))]
    pub interests: Vec<String>,

    #[validate(length(min = 1))]
    pub personality_traits: Vec<String>,

    #[validate(length(min = 1))]
    pub relationship_goals: Vec<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// ============================================================================
// Response Types
// ============================================================================

/// Successful generation body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../bio-ui/src/types/generated.ts")]
pub struct GenerateBioResponse {
    pub bio: String,
}

/// Failure body; `error` is shown to the user verbatim when present
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../bio-ui/src/types/generated.ts")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Health probe body (`{"status": "Healthy"}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../bio-ui/src/types/generated.ts")]
pub struct HealthResponse {
    pub status: String,
}
