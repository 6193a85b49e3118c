mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use crate::common::{body_string, test_app};

fn form_post(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn index_serves_page_one_of_the_full_table() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;

    // All columns in the header, all named rows present.
    for column in [
        "unixTime",
        "itemId",
        "avgHighPrice",
        "avgLowPrice",
        "highPriceVolume",
        "lowPriceVolume",
        "dateTime",
        "Item Name",
    ] {
        assert!(body.contains(column), "missing column {column}");
    }
    assert!(body.contains("Rune Platebody"));
    assert!(body.contains("Dragon Dagger"));
}

#[tokio::test]
async fn page_past_the_end_is_empty_but_ok() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/?page=9").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("Rune Platebody"));
}

#[tokio::test]
async fn non_positive_page_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/?page=0").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("Page number must be at least 1"));
}

#[tokio::test]
async fn lowercase_filter_matches_case_insensitively() {
    let app = test_app();

    let response = app
        .oneshot(form_post("/?page=1", "Item+Name=rune"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Rune Platebody"));
    assert!(!body.contains("Dragon Dagger"));
}

#[tokio::test]
async fn filters_combine_across_columns() {
    let app = test_app();

    // Item name filter alone matches both Rune Platebody rows; adding the
    // dateTime filter narrows to the January one.
    let response = app
        .oneshot(form_post("/?page=1", "Item+Name=rune&dateTime=2023-01"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("2023-01-01 00:00:00"));
    assert!(!body.contains("2023-10-01 00:00:00"));
}

#[tokio::test]
async fn sort_descending_by_price() {
    let app = test_app();

    let response = app
        .oneshot(form_post(
            "/?page=1",
            "sort_column=avgHighPrice&sort_order=desc",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let dagger = body.find("Dragon Dagger").unwrap();
    let platebody = body.find("Rune Platebody").unwrap();
    assert!(dagger < platebody, "300 should sort before 100 descending");
}

#[tokio::test]
async fn unknown_sort_column_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(form_post("/?page=1", "sort_column=bogus"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("Unknown sort column: bogus"));
}

#[tokio::test]
async fn invalid_sort_order_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(form_post("/?page=1", "sort_column=itemId&sort_order=sideways"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_filter_fields_are_ignored() {
    let app = test_app();

    let response = app
        .oneshot(form_post("/?page=1", "notAColumn=whatever"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Rune Platebody"));
    assert!(body.contains("Dragon Dagger"));
}
