use std::io::Read;
use std::thread;

use serde_json::{Value, json};

use blogsmith::services::llm::{DEFAULT_MODEL, GeminiClient, TextGenerator};

struct SeenRequest {
    url: String,
    body: String,
}

/// Serve exactly one request with a canned response, returning what the
/// client actually sent.
fn spawn_stub(status: u16, reply: Value) -> (String, thread::JoinHandle<SeenRequest>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("start gemini stub server");
    let base_url = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let mut request = server.recv().expect("receive request");
        let url = request.url().to_string();
        let mut body = String::new();
        request
            .as_reader()
            .read_to_string(&mut body)
            .expect("read request body");

        let header =
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                .expect("build header");
        let response = tiny_http::Response::from_string(reply.to_string())
            .with_status_code(status)
            .with_header(header);
        let _ = request.respond(response);

        SeenRequest { url, body }
    });

    (base_url, handle)
}

fn client_for(base_url: String) -> GeminiClient {
    GeminiClient::new(base_url, DEFAULT_MODEL.to_string(), "test-key".to_string()).unwrap()
}

#[tokio::test]
async fn parses_completion_text_from_candidates() {
    let (base_url, handle) = spawn_stub(
        200,
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": "stub blog post body" } ] } }
            ]
        }),
    );

    let client = client_for(base_url);
    let text = client.generate("write about sourdough").await.unwrap();
    assert_eq!(text, "stub blog post body");

    let seen = handle.join().unwrap();
    assert!(
        seen.url
            .contains("/v1beta/models/gemini-1.5-flash:generateContent")
    );
    assert!(seen.url.contains("key=test-key"));

    let body: Value = serde_json::from_str(&seen.body).unwrap();
    assert_eq!(
        body["contents"][0]["parts"][0]["text"],
        "write about sourdough"
    );
    assert_eq!(body["generationConfig"]["temperature"], 0.9);
    assert_eq!(body["generationConfig"]["topP"], 0.95);
    assert_eq!(body["generationConfig"]["topK"], 40);
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 4096);
}

#[tokio::test]
async fn non_success_status_is_an_error_carrying_the_status() {
    let (base_url, handle) = spawn_stub(
        429,
        json!({ "error": { "message": "Resource has been exhausted" } }),
    );

    let client = client_for(base_url);
    let err = client.generate("prompt").await.unwrap_err();
    assert!(err.to_string().contains("429"));

    handle.join().unwrap();
}

#[tokio::test]
async fn empty_candidates_is_an_error() {
    let (base_url, handle) = spawn_stub(200, json!({ "candidates": [] }));

    let client = client_for(base_url);
    let err = client.generate("prompt").await.unwrap_err();
    assert!(err.to_string().contains("no text"));

    handle.join().unwrap();
}

#[tokio::test]
async fn whitespace_only_completion_is_an_error() {
    let (base_url, handle) = spawn_stub(
        200,
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": "   \n" } ] } }
            ]
        }),
    );

    let client = client_for(base_url);
    assert!(client.generate("prompt").await.is_err());

    handle.join().unwrap();
}
