//! Submission flow tests against a scripted HttpClient.
//!
//! Time is paused so the 5 s and 200 s budgets elapse instantly and
//! deterministically.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use bio_client::{
    BioService, ClientConfig, HttpClient, HttpRequest, HttpResponse, Method, ProfileField,
    RequestState, Stage, SubmissionController, SubmissionResult, SubmissionState, SubmitError,
    SubmitRejected, TokioTimer, TransportError,
};
use shared_types::{ProfileInput, GENERATE_BIO_PATH, HEALTH_PATH};

#[derive(Clone)]
enum Reply {
    Respond(u16, String),
    After(Duration, u16, String),
    Fail(TransportError),
    Hang,
}

impl Reply {
    fn ok_json(body: &str) -> Self {
        Self::Respond(200, body.to_string())
    }
}

struct ScriptedClient {
    health: Reply,
    generate: Reply,
    calls: RefCell<Vec<HttpRequest>>,
}

impl ScriptedClient {
    fn new(health: Reply, generate: Reply) -> Rc<Self> {
        Rc::new(Self {
            health,
            generate,
            calls: RefCell::new(Vec::new()),
        })
    }

    fn healthy(generate: Reply) -> Rc<Self> {
        Self::new(Reply::ok_json(r#"{"status": "Healthy"}"#), generate)
    }

    fn calls_to(&self, path: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|r| r.url.ends_with(path))
            .count()
    }
}

#[async_trait(?Send)]
impl HttpClient for ScriptedClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let reply = if request.url.ends_with(HEALTH_PATH) {
            self.health.clone()
        } else {
            self.generate.clone()
        };
        self.calls.borrow_mut().push(request);

        match reply {
            Reply::Respond(status, body) => Ok(HttpResponse::new(status, body)),
            Reply::After(delay, status, body) => {
                tokio::time::sleep(delay).await;
                Ok(HttpResponse::new(status, body))
            }
            Reply::Fail(err) => Err(err),
            Reply::Hang => std::future::pending().await,
        }
    }
}

type TestService = BioService<Rc<ScriptedClient>, TokioTimer>;

fn service(client: &Rc<ScriptedClient>) -> TestService {
    BioService::new(ClientConfig::default(), client.clone(), TokioTimer)
}

fn controller(client: &Rc<ScriptedClient>) -> SubmissionController<Rc<ScriptedClient>, TokioTimer> {
    let mut controller = SubmissionController::new(service(client));
    let form = controller.form_mut();
    form.set_career("Data Scientist");
    form.toggle_interest("Photography");
    form.toggle_interest("Technology");
    form.toggle_personality_trait("Analytical");
    form.toggle_relationship_goal("Seeking Deep Connection");
    controller
}

fn profile() -> ProfileInput {
    ProfileInput {
        career: "Chef".to_string(),
        interests: vec!["Cooking".to_string()],
        personality_traits: vec!["Outgoing".to_string()],
        relationship_goals: vec!["Casual".to_string()],
    }
}

#[tokio::test(start_paused = true)]
async fn test_incomplete_form_is_rejected_without_network() {
    let client = ScriptedClient::healthy(Reply::ok_json(r#"{"bio": "unused"}"#));
    let mut controller = SubmissionController::new(service(&client));
    controller.form_mut().set_career("Artist");
    controller.form_mut().toggle_interest("Art");

    let rejected = controller.submit().await.expect_err("form is incomplete");

    assert_eq!(
        rejected,
        SubmitRejected::Incomplete {
            missing: vec![
                ProfileField::PersonalityTraits,
                ProfileField::RelationshipGoals
            ]
        }
    );
    assert!(!controller.can_submit());
    assert_eq!(controller.state().phase(), RequestState::Idle);
    assert!(client.calls.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_success_returns_bio_verbatim() {
    let client = ScriptedClient::healthy(Reply::ok_json(r#"{"bio": "X"}"#));
    let mut controller = controller(&client);

    let result = controller.submit().await.expect("submission runs").clone();

    assert_eq!(result, SubmissionResult::Success("X".to_string()));
    assert_eq!(controller.state().phase(), RequestState::Succeeded);
    assert_eq!(controller.state().bio(), Some("X"));
    assert_eq!(client.calls_to(HEALTH_PATH), 1);
    assert_eq!(client.calls_to(GENERATE_BIO_PATH), 1);
}

#[tokio::test(start_paused = true)]
async fn test_health_non_success_skips_generation() {
    let client = ScriptedClient::new(
        Reply::Respond(503, String::new()),
        Reply::ok_json(r#"{"bio": "never"}"#),
    );
    let mut controller = controller(&client);

    let result = controller.submit().await.expect("submission runs").clone();

    assert_eq!(
        result,
        SubmissionResult::Failure(SubmitError::ServerUnavailable { status: 503 })
    );
    assert_eq!(
        result.error().map(ToString::to_string).as_deref(),
        Some("Server is not running. Please start the server first.")
    );
    assert_eq!(client.calls_to(GENERATE_BIO_PATH), 0);
    assert_eq!(controller.state().phase(), RequestState::Failed);
}

#[tokio::test(start_paused = true)]
async fn test_unreachable_health_is_connection_error() {
    let client = ScriptedClient::new(
        Reply::Fail(TransportError::network("connection refused")),
        Reply::ok_json(r#"{"bio": "never"}"#),
    );
    let mut controller = controller(&client);

    let result = controller.submit().await.expect("submission runs").clone();

    assert_eq!(
        result,
        SubmissionResult::Failure(SubmitError::ConnectionError {
            endpoint: "http://localhost:8000".to_string(),
            stage: Stage::HealthCheck,
        })
    );
    let message = result.error().expect("failure").to_string();
    assert!(message.contains("http://localhost:8000"), "{message}");
    assert_eq!(client.calls_to(GENERATE_BIO_PATH), 0);
}

#[tokio::test(start_paused = true)]
async fn test_hanging_health_check_times_out_after_five_seconds() {
    let client = ScriptedClient::new(Reply::Hang, Reply::ok_json(r#"{"bio": "never"}"#));
    let mut controller = controller(&client);
    let started = tokio::time::Instant::now();

    let result = controller.submit().await.expect("submission runs").clone();

    assert_eq!(
        result,
        SubmissionResult::Failure(SubmitError::RequestTimeout {
            stage: Stage::HealthCheck
        })
    );
    let waited = started.elapsed();
    assert!(waited >= Duration::from_secs(5), "{waited:?}");
    assert!(waited < Duration::from_secs(6), "{waited:?}");
    assert_eq!(client.calls_to(GENERATE_BIO_PATH), 0);
}

#[tokio::test(start_paused = true)]
async fn test_generation_exceeding_budget_times_out() {
    let client = ScriptedClient::healthy(Reply::Hang);
    let mut controller = controller(&client);
    let started = tokio::time::Instant::now();

    let result = controller.submit().await.expect("submission runs").clone();

    assert_eq!(
        result,
        SubmissionResult::Failure(SubmitError::RequestTimeout {
            stage: Stage::Generate
        })
    );
    assert_eq!(
        result.error().map(ToString::to_string).as_deref(),
        Some("Bio generation request timed out")
    );
    assert!(started.elapsed() >= Duration::from_millis(200_000));
}

#[tokio::test(start_paused = true)]
async fn test_slow_generation_within_budget_succeeds() {
    let client = ScriptedClient::healthy(Reply::After(
        Duration::from_secs(199),
        200,
        r#"{"bio": "patience pays"}"#.to_string(),
    ));
    let mut controller = controller(&client);

    let result = controller.submit().await.expect("submission runs").clone();

    assert_eq!(result.bio(), Some("patience pays"));
}

#[tokio::test(start_paused = true)]
async fn test_server_error_message_is_surfaced_verbatim() {
    let client = ScriptedClient::healthy(Reply::Respond(
        500,
        r#"{"error": "custom message"}"#.to_string(),
    ));
    let mut controller = controller(&client);

    let result = controller.submit().await.expect("submission runs").clone();

    let err = result.error().expect("failure");
    assert_eq!(err.to_string(), "custom message");
    assert_eq!(
        err,
        &SubmitError::HttpError {
            status: 500,
            server_message: Some("custom message".to_string()),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_error_without_json_body_names_status() {
    let client = ScriptedClient::healthy(Reply::Respond(
        502,
        "<html>Bad Gateway</html>".to_string(),
    ));
    let mut controller = controller(&client);

    let result = controller.submit().await.expect("submission runs").clone();

    assert_eq!(
        result.error().map(ToString::to_string).as_deref(),
        Some("HTTP error! status: 502")
    );
}

#[tokio::test(start_paused = true)]
async fn test_success_without_bio_is_invalid_response() {
    let client = ScriptedClient::healthy(Reply::ok_json(r#"{"text": "wrong key"}"#));
    let mut controller = controller(&client);

    let result = controller.submit().await.expect("submission runs").clone();

    assert!(matches!(
        result,
        SubmissionResult::Failure(SubmitError::InvalidResponse { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_connection_lost_during_generation() {
    let client = ScriptedClient::healthy(Reply::Fail(TransportError::network("reset by peer")));
    let mut controller = controller(&client);

    let result = controller.submit().await.expect("submission runs").clone();

    assert_eq!(
        result.error().map(SubmitError::stage),
        Some(Stage::Generate)
    );
    assert_eq!(result.error().map(SubmitError::kind), Some("connection_error"));
}

#[tokio::test(start_paused = true)]
async fn test_transport_timeout_maps_to_request_timeout() {
    let client = ScriptedClient::healthy(Reply::Fail(TransportError::Timeout));
    let mut controller = controller(&client);

    let result = controller.submit().await.expect("submission runs").clone();

    assert_eq!(
        result,
        SubmissionResult::Failure(SubmitError::RequestTimeout {
            stage: Stage::Generate
        })
    );
}

#[tokio::test(start_paused = true)]
async fn test_requests_match_backend_contract() {
    let client = ScriptedClient::healthy(Reply::ok_json(r#"{"bio": "ok"}"#));
    let mut controller = controller(&client);
    controller.submit().await.expect("submission runs");

    let calls = client.calls.borrow();
    assert_eq!(calls.len(), 2);

    let health = &calls[0];
    assert_eq!(health.method, Method::Get);
    assert_eq!(health.url, "http://localhost:8000/api/health/");
    assert!(health
        .headers
        .iter()
        .any(|(k, v)| k == "Accept" && v == "application/json"));

    let generate = &calls[1];
    assert_eq!(generate.method, Method::Post);
    assert_eq!(generate.url, "http://localhost:8000/api/generate-bio/");
    let body: serde_json::Value =
        serde_json::from_str(generate.body.as_deref().expect("body")).expect("json body");
    assert_eq!(
        body,
        serde_json::json!({
            "career": "Data Scientist",
            "interests": ["Photography", "Technology"],
            "personalityTraits": ["Analytical"],
            "relationshipGoals": ["Seeking Deep Connection"],
        })
    );
}

#[tokio::test(start_paused = true)]
async fn test_phases_are_reported_in_order() {
    let client = ScriptedClient::healthy(Reply::ok_json(r#"{"bio": "ok"}"#));
    let service = service(&client);
    let mut phases = Vec::new();

    let result = service
        .submit_with(&profile(), |phase| phases.push(phase))
        .await;

    assert_eq!(result.bio(), Some("ok"));
    assert_eq!(phases, vec![RequestState::Checking, RequestState::Submitting]);
}

#[tokio::test(start_paused = true)]
async fn test_health_failure_never_reports_submitting() {
    let client = ScriptedClient::new(
        Reply::Respond(500, String::new()),
        Reply::ok_json(r#"{"bio": "never"}"#),
    );
    let service = service(&client);
    let mut phases = Vec::new();

    service
        .submit_with(&profile(), |phase| phases.push(phase))
        .await;

    assert_eq!(phases, vec![RequestState::Checking]);
}

#[tokio::test(start_paused = true)]
async fn test_reset_after_success_keeps_selections() {
    let client = ScriptedClient::healthy(Reply::ok_json(r#"{"bio": "first"}"#));
    let mut controller = controller(&client);
    controller.submit().await.expect("submission runs");
    let before = controller.form().clone();

    assert!(controller.reset());

    assert_eq!(controller.state().phase(), RequestState::Idle);
    assert!(controller.state().result().is_none());
    assert_eq!(controller.form(), &before);
    assert!(controller.can_submit());

    controller.submit().await.expect("second submission runs");
    assert_eq!(client.calls_to(GENERATE_BIO_PATH), 2);
}

#[tokio::test(start_paused = true)]
async fn test_retry_after_failure_clears_error() {
    let client = ScriptedClient::healthy(Reply::Respond(
        500,
        r#"{"error": "model overloaded"}"#.to_string(),
    ));
    let mut controller = controller(&client);
    controller.submit().await.expect("submission runs");
    assert!(controller.state().error().is_some());
    assert!(controller.can_submit(), "form stays usable after a failure");

    controller.submit().await.expect("retry runs");
    assert_eq!(client.calls_to(GENERATE_BIO_PATH), 2);
}

/// Mirrors how a reactive front-end drives the service: the state lives in a
/// shared cell and every submit claims it with `begin` first.
async fn run_shared(
    service: &TestService,
    state: &RefCell<SubmissionState>,
    input: ProfileInput,
) -> Result<(), SubmitRejected> {
    state.borrow_mut().begin()?;
    let result = service
        .submit_with(&input, |phase| state.borrow_mut().advance(phase))
        .await;
    state.borrow_mut().finish(result);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_second_submission_refused_while_first_pending() {
    let client = ScriptedClient::healthy(Reply::After(
        Duration::from_secs(30),
        200,
        r#"{"bio": "only once"}"#.to_string(),
    ));
    let service = service(&client);
    let state = RefCell::new(SubmissionState::new());

    let first = run_shared(&service, &state, profile());
    let second = async {
        tokio::task::yield_now().await;
        assert!(state.borrow().is_loading());
        run_shared(&service, &state, profile()).await
    };
    let (first, second) = futures::join!(first, second);

    assert_eq!(first, Ok(()));
    assert_eq!(second, Err(SubmitRejected::InFlight));
    assert_eq!(client.calls_to(GENERATE_BIO_PATH), 1);
    assert_eq!(state.borrow().bio(), Some("only once"));
}
