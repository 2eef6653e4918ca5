#![allow(dead_code)]

use dotderpi::client::{Client, Config};
use serde_json::Value;
use wiremock::{matchers::any, Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test_key";

pub fn fixture(name: &str) -> Value {
    let raw = match name {
        "image" => include_str!("../fixtures/image.json"),
        "tag" => include_str!("../fixtures/tag.json"),
        "filter" => include_str!("../fixtures/filter.json"),
        "user" => include_str!("../fixtures/user.json"),
        "oembed" => include_str!("../fixtures/oembed.json"),
        "comment" => include_str!("../fixtures/comment.json"),
        "post" => include_str!("../fixtures/post.json"),
        "gallery" => include_str!("../fixtures/gallery.json"),
        other => panic!("no fixture named {other}"),
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => panic!("fixture {name} is not valid JSON: {e}"),
    }
}

/// An anonymous client pointed at the mock server.
pub fn anonymous(server: &MockServer) -> Client {
    Client::from_config(Config::new().base_url(server.uri()))
}

/// A client with [`API_KEY`] pointed at the mock server.
pub fn keyed(server: &MockServer) -> Client {
    Client::from_config(Config::new().base_url(server.uri()).api_key(API_KEY))
}

/// Fails the test if anything reaches the server.
pub async fn forbid_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// Returns the query string of the only request the server received.
pub async fn only_query(server: &MockServer) -> Option<String> {
    let requests = match server.received_requests().await {
        Some(reqs) => reqs,
        None => panic!("request recording is disabled"),
    };
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query().map(ToString::to_string)
}
