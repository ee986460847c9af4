//! Onboarding submission through a fake webhook.

use std::sync::Arc;

use hub_core::forms::{
    FormState, OnboardingFields, OnboardingForm, GENERIC_SUBMISSION_ERROR, NETWORK_ERROR,
};
use hub_core::HubError;
use hub_fetch::{FetchClient, FetchError, Response, StaticTransport};

const ENDPOINT: &str = "https://script.example.com/macros/s/test/exec";

fn form() -> OnboardingForm {
    OnboardingForm::with_fields(OnboardingFields {
        name: "Cozy Corners".to_string(),
        email: "hello@cozycorners.example".to_string(),
        primary_channel: "Instagram".to_string(),
        monthly_reach: "120k".to_string(),
        niches: "Home decor, gifts".to_string(),
    })
}

fn client_answering(status: u16, body: &str) -> (FetchClient, Arc<StaticTransport>) {
    let transport = Arc::new(StaticTransport::respond(Response::json_body(
        status,
        body.to_string(),
    )));
    (FetchClient::with_transport(transport.clone()), transport)
}

#[tokio::test]
async fn posts_camel_case_json() {
    let (client, transport) = client_answering(200, r#"{"ok":true,"message":"Saved"}"#);
    let mut form = form();

    let reply = form.submit(&client, ENDPOINT).await.unwrap();
    assert_eq!(reply.message.as_deref(), Some("Saved"));

    let sent = transport.sent();
    let request = &sent[0];
    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(
        request.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );

    let body = request.body_json().unwrap();
    assert_eq!(body["primaryChannel"], "Instagram");
    assert_eq!(body["monthlyReach"], "120k");
    assert_eq!(body["email"], "hello@cozycorners.example");
}

#[tokio::test]
async fn failure_then_retry_succeeds() {
    let (failing, _) = client_answering(503, r#"{"ok":false,"message":"Quota exceeded"}"#);
    let mut form = form();

    let err = form.submit(&failing, ENDPOINT).await.unwrap_err();
    assert!(matches!(err, HubError::Submission(ref m) if m == "Quota exceeded"));
    assert_eq!(form.flow().state(), FormState::Failed);
    assert_eq!(form.fields.name, "Cozy Corners");

    let (working, _) = client_answering(200, r#"{"ok":true}"#);
    form.submit(&working, ENDPOINT).await.unwrap();
    assert_eq!(form.flow().state(), FormState::Succeeded);
    assert!(form.fields.name.is_empty());
}

#[tokio::test]
async fn non_json_reply_is_generic_error() {
    let (client, _) = client_answering(200, "Service unavailable");
    let err = form().submit(&client, ENDPOINT).await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_SUBMISSION_ERROR);
}

#[tokio::test]
async fn connection_failure_is_network_error() {
    let transport = Arc::new(StaticTransport::fail(|| {
        FetchError::RequestError("dns failure".to_string())
    }));
    let client = FetchClient::with_transport(transport);

    let mut form = form();
    let err = form.submit(&client, ENDPOINT).await.unwrap_err();

    assert_eq!(err.to_string(), NETWORK_ERROR);
    assert_eq!(form.flow().error(), Some(NETWORK_ERROR));
    assert_eq!(form.fields.email, "hello@cozycorners.example");
}
