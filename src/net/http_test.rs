use super::*;

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Body {
    content: String,
}

#[test]
fn ok_covers_only_2xx() {
    assert!(HttpResponse::new(200, "").ok());
    assert!(HttpResponse::new(204, "").ok());
    assert!(!HttpResponse::new(301, "").ok());
    assert!(!HttpResponse::new(401, "").ok());
}

#[test]
fn error_for_status_maps_body_into_message() {
    let err = HttpResponse::new(500, "boom").error_for_status().unwrap_err();
    assert_eq!(err, FetchError::Status { status: 500, message: "boom".to_owned() });
}

#[test]
fn json_reports_decode_errors() {
    let resp = HttpResponse::new(200, r#"{"content":"hi"}"#);
    assert_eq!(resp.json::<Body>().unwrap(), Body { content: "hi".to_owned() });

    let bad = HttpResponse::new(200, "<html>");
    assert!(matches!(bad.json::<Body>(), Err(FetchError::Decode(_))));
}

#[test]
fn method_names_are_uppercase() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_client_is_unavailable_outside_the_browser() {
    let client = BrowserHttpClient::default();
    let result = futures::executor::block_on(client.request(Method::Get, "/api/auth/me"));
    assert_eq!(result, Err(FetchError::Network("not available on server".to_owned())));
}
