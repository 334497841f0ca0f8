use crate::helpers::spawn_app;

fn assert_cors_headers(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(
        headers.get("Access-Control-Allow-Headers").unwrap(),
        "authorization, x-client-info, apikey, content-type"
    );
}

#[tokio::test]
async fn preflight_requests_are_answered_with_permissive_cors_headers() {
    let app = spawn_app().await;

    for route in ["/send-contact-email", "/send-quote-request"] {
        let response = app.preflight(route).await;

        assert_eq!(response.status().as_u16(), 200, "preflight failed for {}", route);
        assert_cors_headers(&response);
        assert_eq!(
            response.headers().get("Access-Control-Allow-Methods").unwrap(),
            "POST, OPTIONS"
        );
    }
}

#[tokio::test]
async fn error_responses_carry_cors_headers() {
    let app = spawn_app().await;

    let response = app
        .post_contact(&serde_json::json!({"name": "A", "email": "not-an-email", "message": "hi"}))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    assert_cors_headers(&response);
}
