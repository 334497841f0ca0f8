use crate::helpers::spawn_app;
use uuid::Uuid;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Omar Haddad",
        "email": "omar@example.com",
        "phone": "+971 4 000 0000",
        "country": "UAE",
        "port_name": "Jebel Ali",
        "vessel_type": "Bulk Carrier",
        "grt_nrt": "32000/18000",
        "dwt": "58000",
        "loa_beam": "190/32",
        "built": "2012",
        "crane_capacity": "4 x 30T",
        "commodity": "Wheat",
        "quantity": "50000 MT"
    })
}

#[tokio::test]
async fn quote_request_returns_200_and_the_generated_id_for_valid_data() {
    let app = spawn_app().await;
    app.mock_email_to(&app.business_inbox, 200, 1).await;
    app.mock_email_to("omar@example.com", 200, 1).await;

    let response = app.post_quote_request(&valid_body()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["emailSent"], true);
    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();

    let saved = sqlx::query_as::<_, (Uuid, String, String, Option<String>, String, String)>(
        "SELECT id, name, vessel_type, company, port_name, quantity FROM quote_requests",
    )
    .fetch_one(&app.connection)
    .await
    .expect("Failed to fetch saved quote request");

    assert_eq!(saved.0, id);
    assert_eq!(saved.1, "Omar Haddad");
    assert_eq!(saved.2, "Bulk Carrier");
    assert_eq!(saved.3, None);
    assert_eq!(saved.4, "Jebel Ali");
    assert_eq!(saved.5, "50000 MT");
}

#[tokio::test]
async fn quote_request_confirmation_summarises_the_request() {
    let app = spawn_app().await;
    app.mock_email_to(&app.business_inbox, 200, 1).await;
    app.mock_email_to("omar@example.com", 200, 1).await;

    let response = app.post_quote_request(&valid_body()).await;
    let body: serde_json::Value = response.json().await.unwrap();
    let id = body["id"].as_str().unwrap().to_owned();

    let requests = app.email_server.received_requests().await.unwrap();
    let confirmation: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(confirmation["to"][0], "omar@example.com");
    assert_eq!(
        confirmation["subject"],
        "Quote Request Received - Gasawa Shipping"
    );
    let html = confirmation["html"].as_str().unwrap();
    assert!(html.contains("Jebel Ali, UAE"));
    assert!(html.contains(&format!("Reference: {}", id)));
}

#[tokio::test]
async fn quote_request_rejects_each_missing_required_field() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let required_fields = [
        "name",
        "email",
        "country",
        "port_name",
        "vessel_type",
        "grt_nrt",
        "dwt",
        "loa_beam",
        "built",
        "crane_capacity",
        "commodity",
        "quantity",
    ];

    for field in required_fields {
        let mut body = valid_body();
        body[field] = serde_json::Value::String("".into());

        let response = app.post_quote_request(&body).await;

        assert_eq!(
            response.status().as_u16(),
            500,
            "The API did not fail when {} was empty.",
            field
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(
            body["error"],
            format!("Missing required fields: {}", field)
        );
    }

    assert_eq!(app.count_rows("quote_requests").await, 0);
}

#[tokio::test]
async fn quote_request_rejects_an_unknown_vessel_type() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let mut body = valid_body();
    body["vessel_type"] = serde_json::Value::String("Submarine".into());

    let response = app.post_quote_request(&body).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("not a recognised vessel type"));
    assert_eq!(app.count_rows("quote_requests").await, 0);
}

#[tokio::test]
async fn quote_request_rejects_an_invalid_email() {
    let app = spawn_app().await;

    let mut body = valid_body();
    body["email"] = serde_json::Value::String("omar at example.com".into());

    let response = app.post_quote_request(&body).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(app.count_rows("quote_requests").await, 0);
}

#[tokio::test]
async fn quote_request_fails_when_the_business_notification_fails_but_keeps_the_row() {
    let app = spawn_app().await;
    app.mock_email_to(&app.business_inbox, 500, 1).await;

    let response = app.post_quote_request(&valid_body()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Failed to send notification email. Please try again later."
    );
    assert_eq!(app.count_rows("quote_requests").await, 1);
}

#[tokio::test]
async fn quote_request_succeeds_when_only_the_confirmation_email_fails() {
    let app = spawn_app().await;
    app.mock_email_to(&app.business_inbox, 200, 1).await;
    app.mock_email_to("omar@example.com", 500, 1).await;

    let response = app.post_quote_request(&valid_body()).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(app.count_rows("quote_requests").await, 1);
}

#[tokio::test]
async fn quote_request_fails_if_there_is_a_fatal_database_error() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    sqlx::query("ALTER TABLE quote_requests DROP COLUMN commodity")
        .execute(&app.connection)
        .await
        .unwrap();

    let response = app.post_quote_request(&valid_body()).await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap()["error"],
        "Failed to save your submission. Please try again later."
    );
}
