use httpmock::prelude::*;
use pinterest::{ClientConfig, ImageSource, NewPin, Page, PinterestClient, PinterestError};
use serde_json::json;

fn client_for(server: &MockServer, access_token: Option<&str>) -> PinterestClient {
    let config = ClientConfig::default()
        .with_base_url(&server.base_url())
        .unwrap();
    PinterestClient::with_config(config, access_token.map(str::to_string))
}

#[tokio::test]
async fn test_missing_token_makes_no_requests() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|_when, then| {
            then.status(200).json_body(json!({}));
        })
        .await;

    let client = client_for(&server, None);
    let pin = NewPin::new("42", "dinner", ImageSource::Url("https://i.example/a.jpg".into()));

    let results = vec![
        client.me(&[]).await,
        client.boards(&["id"]).await,
        client.board("42", &[]).await,
        client.board_pins("42", &[]).await,
        client.pin("7", &[]).await,
        client.create_pin(&pin).await,
        client.home_feed(Page::default()).await,
        client.category_feed("food_drink", Page::default()).await,
        client.search_pins("pasta", Page::default()).await,
        client.user("alice", &[]).await,
        client.followers("alice", Page::default()).await,
        client.following("alice", Page::default()).await,
        client.delete_pin("7").await,
        client.delete_board("42").await,
    ];

    for result in results {
        assert!(matches!(result, Err(PinterestError::MissingCredentials)));
    }
    mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn test_me_without_fields() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/me/")
                .query_param("access_token", "AfJ3")
                .query_param_missing("fields")
                .header("Content-Type", "application/x-www-form-urlencoded");
            then.status(200)
                .json_body(json!({"data": {"id": "1", "first_name": "Alice"}}));
        })
        .await;

    let me = client_for(&server, Some("AfJ3")).me(&[]).await.unwrap();

    assert_eq!(me["data"]["first_name"], "Alice");
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_me_with_fields() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/me/")
                .query_param("access_token", "AfJ3")
                .query_param("fields", "id,username,counts");
            then.status(200)
                .json_body(json!({"data": {"id": "1", "username": "alice"}}));
        })
        .await;

    let me = client_for(&server, Some("AfJ3"))
        .me(&["id", "username", "counts"])
        .await
        .unwrap();

    assert_eq!(me["data"]["username"], "alice");
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_fields_are_url_encoded() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/me/")
                .query_param("fields", "image[small],counts");
            then.status(200)
                .json_body(json!({"data": {"image": {"small": {"url": "https://i.example/s.jpg"}}}}));
        })
        .await;

    let me = client_for(&server, Some("AfJ3"))
        .me(&["image[small]", "counts"])
        .await
        .unwrap();

    assert_eq!(me["data"]["image"]["small"]["url"], "https://i.example/s.jpg");
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_slash_in_identifier_stays_in_one_segment() {
    let server = MockServer::start_async().await;

    let followers = server
        .mock_async(|when, then| {
            when.method(GET).path("/v3/users/alice/followers/");
            then.status(200).json_body(json!({"hit": "followers"}));
        })
        .await;
    let me = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/me/");
            then.status(200).json_body(json!({"hit": "me"}));
        })
        .await;
    let pins_me = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/pins/me/");
            then.status(200).json_body(json!({"hit": "pins_me"}));
        })
        .await;
    let other = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(404).json_body(json!({"hit": "other"}));
        })
        .await;

    let client = client_for(&server, Some("AfJ3"));
    let user = client.user("alice/followers", &[]).await.unwrap();
    let pin = client.pin("../me", &[]).await.unwrap();

    assert_eq!(user["hit"], "other");
    assert_eq!(pin["hit"], "other");
    followers.assert_calls_async(0).await;
    me.assert_calls_async(0).await;
    pins_me.assert_calls_async(0).await;
    other.assert_calls_async(2).await;
}

#[tokio::test]
async fn test_empty_and_dot_identifiers_are_rejected() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|_when, then| {
            then.status(200).json_body(json!({}));
        })
        .await;

    let client = client_for(&server, Some("AfJ3"));
    let results = vec![
        client.pin("", &[]).await,
        client.pin(".", &[]).await,
        client.user("..", &[]).await,
        client.board("alice/", &[]).await,
        client.category_feed("", Page::default()).await,
    ];

    for result in results {
        assert!(matches!(result, Err(PinterestError::InvalidPath(_))));
    }
    mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn test_board_by_username_and_name() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/boards/alice/recipes/")
                .query_param("access_token", "AfJ3");
            then.status(200)
                .json_body(json!({"data": {"id": "42", "name": "Recipes"}}));
        })
        .await;

    let board = client_for(&server, Some("AfJ3"))
        .board("alice/recipes", &[])
        .await
        .unwrap();

    assert_eq!(board["data"]["name"], "Recipes");
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_search_is_paginated() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/search/pins/")
                .query_param("query", "pasta salad")
                .query_param("page", "2")
                .query_param("limit", "10")
                .query_param("access_token", "AfJ3");
            then.status(200).json_body(json!({"data": [{"id": "7"}]}));
        })
        .await;

    let results = client_for(&server, Some("AfJ3"))
        .search_pins("pasta salad", Page::new(2, 10))
        .await
        .unwrap();

    assert_eq!(results["data"][0]["id"], "7");
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_followers_use_user_path() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/users/alice/followers/")
                .query_param("page", "1")
                .query_param("limit", "25");
            then.status(200).json_body(json!([{"username": "bob"}]));
        })
        .await;

    let followers = client_for(&server, Some("AfJ3"))
        .followers("alice", Page::default())
        .await
        .unwrap();

    assert_eq!(followers[0]["username"], "bob");
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_configured_hints_are_sent() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v3/feeds/home/")
                .header("User-Agent", "Pinterest for Android/1.0.2 (generic_x86; 4.0.4)")
                .header("Accept-Language", "en");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let config = ClientConfig::default()
        .with_base_url(&server.base_url())
        .unwrap()
        .with_user_agent("Pinterest for Android/1.0.2 (generic_x86; 4.0.4)")
        .with_locale("en");
    let client = PinterestClient::with_config(config, Some("AfJ3".to_string()));

    client.home_feed(Page::default()).await.unwrap();

    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_error_status_still_decodes() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/pins/7/");
            then.status(404)
                .json_body(json!({"status": "failure", "message": "Pin not found."}));
        })
        .await;

    let pin = client_for(&server, Some("AfJ3")).pin("7", &[]).await.unwrap();

    assert_eq!(pin["message"], "Pin not found.");
}

#[tokio::test]
async fn test_invalid_json_is_a_decoding_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/me/boards/");
            then.status(200).body("not json");
        })
        .await;

    let result = client_for(&server, Some("AfJ3")).boards(&[]).await;

    assert!(matches!(result, Err(PinterestError::Decoding(_))));
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    // Nothing listens on the discard port.
    let config = ClientConfig::default()
        .with_base_url("http://127.0.0.1:9")
        .unwrap();
    let client = PinterestClient::with_config(config, Some("AfJ3".to_string()));

    match client.me(&[]).await {
        Err(PinterestError::Network(err)) => assert!(err.is_connect()),
        other => panic!("expected a network error, got {other:?}"),
    }

    let pin = NewPin::new("42", "dinner", ImageSource::Url("https://i.example/a.jpg".into()));
    match client.create_pin(&pin).await {
        Err(PinterestError::Network(err)) => assert!(err.is_connect()),
        other => panic!("expected a network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_pin_from_url() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/pins/")
                .query_param("access_token", "AfJ3")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body("board=42&note=dinner&image_url=https%3A%2F%2Fi.example%2Fa.jpg");
            then.status(201).json_body(json!({"data": {"id": "99"}}));
        })
        .await;

    let pin = NewPin::new("42", "dinner", ImageSource::Url("https://i.example/a.jpg".into()));
    let created = client_for(&server, Some("AfJ3")).create_pin(&pin).await.unwrap();

    assert_eq!(created["data"]["id"], "99");
    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_create_pin_inline() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/pins/")
                .body("board=42&note=dinner&link=https%3A%2F%2Fexample.com&image_base64=iVBORw%3D%3D");
            then.status(201).json_body(json!({"data": {"id": "100"}}));
        })
        .await;

    let pin = NewPin::new("42", "dinner", ImageSource::Base64(b"\x89PNG".to_vec()))
        .with_link("https://example.com");
    client_for(&server, Some("AfJ3")).create_pin(&pin).await.unwrap();

    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_create_pin_uploads_file() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/pins/")
                .query_param("access_token", "AfJ3")
                .body_includes("name=\"image\"; filename=\"a.png\"")
                .body_includes("name=\"board\"");
            then.status(201).json_body(json!({"data": {"id": "101"}}));
        })
        .await;

    let pin = NewPin::new(
        "42",
        "dinner",
        ImageSource::File {
            file_name: "a.png".into(),
            bytes: b"\x89PNG".to_vec(),
        },
    );
    client_for(&server, Some("AfJ3")).create_pin(&pin).await.unwrap();

    mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn test_delete_is_disabled() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|_when, then| {
            then.status(200).json_body(json!({}));
        })
        .await;

    let client = client_for(&server, Some("AfJ3"));

    assert!(matches!(
        client.delete_pin("7").await,
        Err(PinterestError::NotImplemented("delete_pin"))
    ));
    assert!(matches!(
        client.delete_board("42").await,
        Err(PinterestError::NotImplemented("delete_board"))
    ));
    mock.assert_calls_async(0).await;
}
