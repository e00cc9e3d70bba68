// Walks the full REST surface in order against one seeded store:
// list, fetch, miss, create, update, delete.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use rust_decimal_macros::dec;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::accounts::AccountBuilder;
use crate::tests::fixtures::app_state::{make_test_state, read_body, read_json};

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/accounts")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn account_lifecycle_over_http() {
    let app = router(make_test_state());

    let response = send(&app, get("/accounts")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed = read_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
    let body = listed.to_string();
    for name in ["George Baird", "Mary Taylor", "Diana Rigg"] {
        assert!(body.contains(name));
    }

    let response = send(&app, get("/accounts/123456789")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let george = read_json(response).await;
    assert_eq!(george["accountNumber"], 123456789);
    assert_eq!(george["customerName"], "George Baird");
    assert_eq!(george["balance"], "354.23");
    assert_eq!(george["accountStatus"], "OPEN");

    let response = send(&app, get("/accounts/123")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let missing = read_json(response).await;
    assert!(
        missing["message"]
            .as_str()
            .unwrap()
            .contains("an illegal argument was provided: 404: Account with id of 123 does not exist")
    );

    let sandy = AccountBuilder::new();
    let response = send(&app, with_json("POST", sandy.to_json())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = send(&app, get("/accounts")).await;
    assert_eq!(read_json(response).await.as_array().unwrap().len(), 4);

    let richer = AccountBuilder::new().balance(dec!(2500.00)).to_json();
    let response = send(&app, with_json("PUT", richer)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send(&app, get("/accounts/324324")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["balance"], "2500.00");

    let delete = Request::delete("/accounts/324324")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, delete).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(read_body(response).await.is_empty());
    let response = send(&app, get("/accounts/324324")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let delete_again = Request::delete("/accounts/324324")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, delete_again).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn independent_states_do_not_share_accounts() {
    let first = router(make_test_state());
    let second = router(make_test_state());

    let response = send(&first, with_json("POST", AccountBuilder::new().to_json())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(&second, get("/accounts/324324")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
