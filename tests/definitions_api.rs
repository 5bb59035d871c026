//! Integration tests for the lookup and insert operations.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_insert_then_lookup_is_case_insensitive() {
    let addr = common::start_server().await;
    let client = common::client();

    let res = client
        .post(common::url(addr, "/api/definitions"))
        .json(&json!({"word": "Book", "definition": "A bound volume"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["entriesCount"], json!(1));
    assert_eq!(body["result"]["word"], json!("Book"));
    assert_eq!(body["message"], json!("New entry recorded: \"Book\""));
    assert!(body.get("error").is_none());

    // Different case must hit the same entry, original casing preserved.
    let res = client
        .get(common::url(addr, "/api/definitions?word=book"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["result"]["word"], json!("Book"));
    assert_eq!(body["result"]["definition"], json!("A bound volume"));
    assert_eq!(body["message"], json!("Definition found for \"book\"."));
}

#[tokio::test]
async fn test_repeated_lookup_returns_same_entry() {
    let addr = common::start_server().await;
    let client = common::client();

    client
        .post(common::url(addr, "/api/definitions"))
        .json(&json!({"word": "tea", "definition": "hot drink"}))
        .send()
        .await
        .unwrap();

    let mut last_request_number = 0;
    for _ in 0..3 {
        let res = client
            .get(common::url(addr, "/api/definitions?word=tea"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["result"]["definition"], json!("hot drink"));

        let request_number = body["requestNumber"].as_u64().unwrap();
        assert!(request_number > last_request_number);
        last_request_number = request_number;
    }
}

#[tokio::test]
async fn test_duplicate_insert_is_rejected() {
    let addr = common::start_server().await;
    let client = common::client();

    let res = client
        .post(common::url(addr, "/api/definitions"))
        .json(&json!({"word": "Book", "definition": "A bound volume"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // Same key, different case: conflict, no mutation.
    let res = client
        .post(common::url(addr, "/api/definitions"))
        .json(&json!({"word": "book", "definition": "something else"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["entriesCount"], json!(1));
    assert_eq!(body["existing"]["word"], json!("Book"));
    assert_eq!(body["existing"]["definition"], json!("A bound volume"));
    assert_eq!(body["message"], json!("Warning! \"book\" already exists."));
}

#[tokio::test]
async fn test_repeated_word_parameter_stays_in_envelope() {
    let addr = common::start_server().await;
    let client = common::client();

    client
        .post(common::url(addr, "/api/definitions"))
        .json(&json!({"word": "alpha", "definition": "first letter"}))
        .send()
        .await
        .unwrap();

    // Repeating the parameter is a legal request; the first value wins
    // and the reply keeps the JSON envelope.
    let res = client
        .get(common::url(addr, "/api/definitions?word=alpha&word=beta"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["requestNumber"], json!(2));
    assert_eq!(body["result"]["word"], json!("alpha"));

    // Same for a miss.
    let res = client
        .get(common::url(addr, "/api/definitions?word=ghost&word=alpha"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["requestNumber"], json!(3));
    assert!(body["message"].as_str().unwrap().contains("\"ghost\""));
}

#[tokio::test]
async fn test_lookup_miss_reports_word_and_request_number() {
    let addr = common::start_server().await;
    let client = common::client();

    let res = client
        .get(common::url(addr, "/api/definitions?word=ghost"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["requestNumber"], json!(1));
    assert_eq!(body["message"], json!("Request #1: word \"ghost\" not found!"));
}

#[tokio::test]
async fn test_word_validation_boundaries() {
    let addr = common::start_server().await;
    let client = common::client();

    for word in ["ice cream", "mother-in-law", "O'Reilly"] {
        let res = client
            .post(common::url(addr, "/api/definitions"))
            .json(&json!({"word": word, "definition": "valid"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED, "word {word:?}");
    }

    for word in ["123abc", "", "  "] {
        let res = client
            .post(common::url(addr, "/api/definitions"))
            .json(&json!({"word": word, "definition": "valid"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "word {word:?}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], json!(true));
        assert!(body["message"].as_str().unwrap().contains("'word'"));
    }

    // Invalid word on the lookup side as well.
    let res = client
        .get(common::url(addr, "/api/definitions?word=123abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Missing word parameter trims to empty.
    let res = client
        .get(common::url(addr, "/api/definitions"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_definition_validation_boundaries() {
    let addr = common::start_server().await;
    let client = common::client();

    // Pure punctuation is a fine definition.
    let res = client
        .post(common::url(addr, "/api/definitions"))
        .json(&json!({"word": "interrobang", "definition": "?!"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    for definition in ["", "   "] {
        let res = client
            .post(common::url(addr, "/api/definitions"))
            .json(&json!({"word": "valid", "definition": definition}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert!(body["message"].as_str().unwrap().contains("'definition'"));
    }
}

#[tokio::test]
async fn test_insert_trims_word_and_definition() {
    let addr = common::start_server().await;
    let client = common::client();

    let res = client
        .post(common::url(addr, "/api/definitions"))
        .json(&json!({"word": "  tea  ", "definition": "  hot drink  "}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["result"]["word"], json!("tea"));
    assert_eq!(body["result"]["definition"], json!("hot drink"));
}

#[tokio::test]
async fn test_form_encoded_insert() {
    let addr = common::start_server().await;
    let client = common::client();

    let res = client
        .post(common::url(addr, "/api/definitions"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("word=ice+cream&definition=frozen%20dessert")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["result"]["word"], json!("ice cream"));
    assert_eq!(body["result"]["definition"], json!("frozen dessert"));
}

#[tokio::test]
async fn test_unparseable_body_is_rejected() {
    let addr = common::start_server().await;
    let client = common::client();

    for body in ["", "{{{", "123"] {
        let res = client
            .post(common::url(addr, "/api/definitions"))
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {body:?}");
        let parsed: Value = res.json().await.unwrap();
        assert_eq!(parsed["error"], json!(true));
    }

    // Nothing was stored along the way.
    let res = client.get(common::url(addr, "/")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["entriesCount"], json!(0));
}
