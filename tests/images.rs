mod common;

use common::{anonymous, fixture, forbid_requests, keyed, only_query};
use dotderpi::{
    error::Error,
    image::{Image, ImageSearch, Upload},
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn search_page() -> serde_json::Value {
    json!({ "images": [fixture("image")], "total": 1, "interactions": [] })
}

#[tokio::test]
async fn search_images_returns_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/json/search/images"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page()))
        .expect(1)
        .mount(&server)
        .await;

    let search = match ImageSearch::new(&anonymous(&server), "safe", None, None).await {
        Ok(search) => search,
        Err(e) => panic!("search failed: {e}"),
    };

    assert_eq!(search.total(), 1);
    assert_eq!(search.len(), 1);
    assert_eq!(search[0].id(), 1);
    assert_eq!(search.interactions(), Some(&[][..]));
    assert_eq!(
        only_query(&server).await.as_deref(),
        Some("q=safe&page=1&per_page=10")
    );
}

#[tokio::test]
async fn search_images_builds_exact_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/json/search/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page()))
        .mount(&server)
        .await;

    let result = ImageSearch::new(&anonymous(&server), "safe", Some(1), Some(1)).await;

    assert!(result.is_ok());
    assert_eq!(
        only_query(&server).await.as_deref(),
        Some("q=safe&page=1&per_page=1")
    );
}

#[tokio::test]
async fn search_images_rejects_malformed_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/json/search/images"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "images": [{ "invalid": "data" }], "total": 1 })),
        )
        .mount(&server)
        .await;

    let err = ImageSearch::new(&anonymous(&server), "test", None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().starts_with("Response validation failed:"));
}

#[tokio::test]
async fn get_image_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/json/images/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": fixture("image") })))
        .expect(1)
        .mount(&server)
        .await;

    let image = match Image::new(&anonymous(&server), 1).await {
        Ok(image) => image,
        Err(e) => panic!("fetch failed: {e}"),
    };

    assert_eq!(image.id(), 1);
    assert!(image.tags().iter().any(|tag| tag == "safe"));
    assert_eq!(image.uploader(), Some("test_user"));
    assert_eq!(image.orig_sha512_hash(), None);
    assert_eq!(image.duration(), None);
    assert_eq!(
        image.representations().get("thumb").map(String::as_str),
        Some("https://example.com/thumb.png")
    );
}

#[tokio::test]
async fn get_image_rejects_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/json/images/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": { "invalid": "data" } })))
        .mount(&server)
        .await;

    let err = Image::new(&anonymous(&server), 1).await.unwrap_err();

    assert!(err.to_string().starts_with("Response validation failed:"));
}

#[tokio::test]
async fn get_image_requires_nullable_fields_to_be_present() {
    let server = MockServer::start().await;
    let mut image = fixture("image");
    if let Some(fields) = image.as_object_mut() {
        fields.remove("uploader");
    }
    Mock::given(method("GET"))
        .and(path("/api/v1/json/images/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": image })))
        .mount(&server)
        .await;

    let err = Image::new(&anonymous(&server), 1).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Response validation failed: missing field `uploader`"
    );
}

#[tokio::test]
async fn get_image_ignores_unknown_fields() {
    let server = MockServer::start().await;
    let mut image = fixture("image");
    if let Some(fields) = image.as_object_mut() {
        fields.insert("file_name".into(), json!("test.png"));
        fields.insert("image".into(), json!("https://example.com/test.png"));
    }
    Mock::given(method("GET"))
        .and(path("/api/v1/json/images/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": image })))
        .mount(&server)
        .await;

    let image = Image::new(&anonymous(&server), 1).await;

    assert!(image.is_ok());
}

#[tokio::test]
async fn featured_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/json/images/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": fixture("image") })))
        .expect(1)
        .mount(&server)
        .await;

    let image = Image::featured(&anonymous(&server)).await;

    assert_eq!(image.map(|image| image.id()).ok(), Some(1));
}

#[tokio::test]
async fn featured_image_rejects_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/json/images/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": { "invalid": "data" } })))
        .mount(&server)
        .await;

    let err = Image::featured(&anonymous(&server)).await.unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn upload_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/json/images"))
        .and(query_param("key", common::API_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "url": "https://example.com/image.png",
            "image": {
                "description": "Test image",
                "tags": "test, safe",
                "source_url": "https://example.com"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": fixture("image") })))
        .expect(1)
        .mount(&server)
        .await;

    let upload = Upload::new("https://example.com/image.png")
        .description("Test image")
        .tags(["test", "safe"])
        .source_url("https://example.com");
    let image = match Image::upload(&keyed(&server), &upload).await {
        Ok(image) => image,
        Err(e) => panic!("upload failed: {e}"),
    };

    assert_eq!(image.id(), 1);
}

#[tokio::test]
async fn upload_without_key_never_reaches_the_server() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let err = Image::upload(&anonymous(&server), &Upload::new("https://example.com/image.png"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "API key is required for image upload");
}

#[tokio::test]
async fn reverse_search_uses_default_distance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/json/search/reverse"))
        .and(query_param("url", "https://example.com/image.png"))
        .and(query_param("distance", "0.25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page()))
        .expect(1)
        .mount(&server)
        .await;

    let search = ImageSearch::reverse(&anonymous(&server), "https://example.com/image.png", None).await;

    assert_eq!(search.map(|search| search.total()).ok(), Some(1));
}

#[tokio::test]
async fn reverse_search_uses_custom_distance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/json/search/reverse"))
        .and(query_param("distance", "0.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page()))
        .expect(1)
        .mount(&server)
        .await;

    let search =
        ImageSearch::reverse(&anonymous(&server), "https://example.com/image.png", Some(0.5)).await;

    assert!(search.is_ok());
}

#[tokio::test]
async fn reverse_search_rejects_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/json/search/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "images": [{ "invalid": "data" }] })))
        .mount(&server)
        .await;

    let err = ImageSearch::reverse(&anonymous(&server), "https://example.com/image.png", None)
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Response validation failed:"));
}
