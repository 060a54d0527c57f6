use revise::core::card::RevisionCard;
use revise::core::requester;
use revise::core::view::{RevisionView, SubmitState};
use revise::headless;
use revise::revision::{EditRequest, HttpRevisionClient, RevisionClient, RevisionError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Types
// ============================================================================

/// Minimal view that records what the requester does to it.
#[derive(Default)]
struct TestView {
    text: String,
    instruction: String,
    loading: bool,
    loading_history: Vec<bool>,
    submit_state: SubmitState,
    cards: Vec<RevisionCard>,
    failures: Vec<String>,
}

impl TestView {
    fn new(text: &str, instruction: &str) -> Self {
        Self {
            text: text.to_string(),
            instruction: instruction.to_string(),
            ..Default::default()
        }
    }
}

impl RevisionView for TestView {
    fn input_text(&self) -> &str {
        &self.text
    }

    fn instruction(&self) -> &str {
        &self.instruction
    }

    fn show_word_count(&mut self, _label: String, _alert: bool) {}

    fn set_submit_state(&mut self, state: SubmitState) {
        self.submit_state = state;
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        self.loading_history.push(visible);
    }

    fn clear_output(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, card: RevisionCard) {
        self.cards.push(card);
    }

    fn report_failure(&mut self, message: String) {
        self.failures.push(message);
    }
}

async fn mount_revisions(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/edit_text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_posts_json_body_with_user_prompt_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/edit_text"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "text": "He go home.",
            "user_prompt": "Be formal."
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpRevisionClient::new(mock_server.uri());
    let result = client
        .revise(&EditRequest::new("He go home.", "Be formal."))
        .await;

    assert_eq!(result, Ok(vec![]));
}

#[tokio::test]
async fn test_parses_revisions_in_order() {
    let mock_server = MockServer::start().await;
    mount_revisions(
        &mock_server,
        json!([
            {"original_sentence": "He go home.", "revised_sentence": "He goes home.", "explanation": "Agreement."},
            {"original_sentence": "Fine.", "revised_sentence": null, "explanation": null}
        ]),
    )
    .await;

    let client = HttpRevisionClient::new(mock_server.uri());
    let revisions = client
        .revise(&EditRequest::new("He go home. Fine.", ""))
        .await
        .unwrap();

    assert_eq!(revisions.len(), 2);
    assert_eq!(revisions[0].original_sentence, "He go home.");
    assert_eq!(revisions[0].revised_sentence.as_deref(), Some("He goes home."));
    assert_eq!(revisions[1].revised_sentence, None);
}

#[tokio::test]
async fn test_non_success_status_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/edit_text"))
        .respond_with(ResponseTemplate::new(422).set_body_string("Unprocessable Entity"))
        .mount(&mock_server)
        .await;

    let client = HttpRevisionClient::new(mock_server.uri());
    let result = client.revise(&EditRequest::new("text", "")).await;

    match result {
        Err(RevisionError::Status { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Unprocessable Entity");
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/edit_text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"detail\": \"not a list\"}"))
        .mount(&mock_server)
        .await;

    let client = HttpRevisionClient::new(mock_server.uri());
    let result = client.revise(&EditRequest::new("text", "")).await;

    assert!(matches!(result, Err(RevisionError::Parse(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = HttpRevisionClient::new(uri);
    let result = client.revise(&EditRequest::new("text", "")).await;

    assert!(matches!(result, Err(RevisionError::Network(_))));
}

// ============================================================================
// Requester Against a Live Mock Server
// ============================================================================

#[tokio::test]
async fn test_start_editing_renders_cards_with_fallbacks() {
    let mock_server = MockServer::start().await;
    mount_revisions(
        &mock_server,
        json!([
            {"original_sentence": "One.", "revised_sentence": "1.", "explanation": "Digits."},
            {"original_sentence": "Two.", "revised_sentence": "", "explanation": ""},
            {"original_sentence": "Three."}
        ]),
    )
    .await;

    let client = HttpRevisionClient::new(mock_server.uri());
    let mut view = TestView::new("One. Two. Three.", "Use digits.");

    let rendered = requester::start_editing(&mut view, &client).await;

    assert_eq!(rendered, Ok(3));
    assert_eq!(view.loading_history, vec![true, false]);
    assert_eq!(view.submit_state, SubmitState::Ready);
    let originals: Vec<&str> = view.cards.iter().map(|c| c.original.as_str()).collect();
    assert_eq!(originals, vec!["One.", "Two.", "Three."]);
    assert_eq!(view.cards[1].revised_line(), "Revised: No revision needed.");
    assert_eq!(view.cards[2].explanation_line(), "Explanation: No issues found.");
}

#[tokio::test]
async fn test_start_editing_failure_leaves_output_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/edit_text"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = HttpRevisionClient::new(mock_server.uri());
    let mut view = TestView::new("text", "");
    view.cards.push(RevisionCard {
        original: "stale".to_string(),
        revised: "stale".to_string(),
        explanation: "stale".to_string(),
    });

    let rendered = requester::start_editing(&mut view, &client).await;

    assert!(matches!(rendered, Err(RevisionError::Status { status: 500, .. })));
    assert!(view.cards.is_empty());
    assert!(!view.loading);
    assert_eq!(view.failures.len(), 1);
}

// ============================================================================
// Headless Mode
// ============================================================================

#[tokio::test]
async fn test_headless_prints_cards() {
    let mock_server = MockServer::start().await;
    mount_revisions(
        &mock_server,
        json!([{"original_sentence": "Fine.", "revised_sentence": null, "explanation": null}]),
    )
    .await;

    let client = HttpRevisionClient::new(mock_server.uri());
    let mut out = Vec::new();

    let rendered = headless::run(&client, "Fine.".to_string(), String::new(), &mut out)
        .await
        .unwrap();

    assert_eq!(rendered, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Original: Fine.\nRevised: No revision needed.\nExplanation: No issues found.\n"
    );
}

#[tokio::test]
async fn test_headless_over_limit_never_hits_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/edit_text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = HttpRevisionClient::new(mock_server.uri());
    let mut out = Vec::new();

    let result = headless::run(&client, "w ".repeat(1001), String::new(), &mut out).await;

    assert!(matches!(result, Err(headless::HeadlessError::OverLimit(_))));
}
