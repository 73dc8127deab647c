use futures::executor::block_on;

use super::*;
use crate::error::FetchError;
use crate::net::http::Method;
use crate::query::cache::ResourceCache;
use crate::test_support::ScriptedHttp;

fn doc(content: &str) -> LegalDocument {
    LegalDocument { content: content.to_owned() }
}

/// Run the page's query once against a scripted server and return the render decision inputs.
fn load(raw: Option<&str>, status: u16, body: &str) -> (LegalRoute, FetchStatus<LegalDocument>, Vec<(Method, String)>) {
    let route = LegalRoute::resolve(raw);
    let http = ScriptedHttp::new();
    http.push_json(Method::Get, &route.query_key().path(), status, body);
    let api = ApiClient::new(http.clone());
    let cache = ResourceCache::default();

    let result = block_on(cache.query(&route.query_key(), &QueryOptions::default(), || {
        let api = api.clone();
        async move { api.legal_document(route.document).await }
    }));
    (route, result, http.calls())
}

// =============================================================
// Route resolution
// =============================================================

#[test]
fn known_types_use_their_own_title_and_key() {
    let privacy = LegalRoute::resolve(Some("privacy"));
    assert_eq!(privacy.title, "Privacy Policy");
    assert_eq!(privacy.query_key(), QueryKey::new(["/api/legal", "privacy"]));

    let eula = LegalRoute::resolve(Some("eula"));
    assert_eq!(eula.title, "End User License Agreement");
    assert_eq!(eula.document, DocumentType::Eula);
}

#[test]
fn unknown_type_fetches_terms_but_shows_generic_title() {
    let route = LegalRoute::resolve(Some("foo"));
    assert_eq!(route.title, GENERIC_TITLE);
    assert_eq!(route.document, DocumentType::Terms);
    assert_eq!(route.query_key().path(), "/api/legal/terms");
}

#[test]
fn missing_type_defaults_to_terms_with_its_title() {
    for raw in [None, Some("")] {
        let route = LegalRoute::resolve(raw);
        assert_eq!(route, LegalRoute { document: DocumentType::Terms, title: "Terms of Service" });
    }
}

// =============================================================
// Render policy
// =============================================================

#[test]
fn pending_renders_skeleton() {
    let route = LegalRoute::resolve(Some("terms"));
    assert_eq!(LegalView::from_status(route, &FetchStatus::Pending), LegalView::Skeleton);
}

#[test]
fn any_error_renders_failure() {
    let route = LegalRoute::resolve(Some("terms"));
    for err in [FetchError::status(401, ""), FetchError::Network("offline".to_owned()), FetchError::Decode("eof".to_owned())] {
        assert_eq!(LegalView::from_status(route, &FetchStatus::Error(err)), LegalView::Failed);
    }
}

#[test]
fn eula_document_renders_title_and_verbatim_body() {
    let (route, status, calls) = load(Some("eula"), 200, r#"{"content":"Sample EULA text"}"#);
    assert_eq!(
        LegalView::from_status(route, &status),
        LegalView::Document { title: "End User License Agreement", content: "Sample EULA text" }
    );
    assert_eq!(calls, vec![(Method::Get, "/api/legal/eula".to_owned())]);
}

#[test]
fn whitespace_in_content_is_preserved() {
    let body = "  Section 1\n\n\tIndented clause\n";
    let status = FetchStatus::Success(doc(body));
    let route = LegalRoute::resolve(Some("privacy"));
    match LegalView::from_status(route, &status) {
        LegalView::Document { content, .. } => assert_eq!(content, body),
        other => panic!("expected document, got {other:?}"),
    }
}

#[test]
fn server_error_renders_failure_without_content() {
    let (route, status, _) = load(Some("terms"), 500, "");
    assert_eq!(LegalView::from_status(route, &status), LegalView::Failed);
}

#[test]
fn unknown_type_loads_terms_document_under_generic_title() {
    let (route, status, calls) = load(Some("foo"), 200, r#"{"content":"Terms body"}"#);
    assert_eq!(
        LegalView::from_status(route, &status),
        LegalView::Document { title: "Legal", content: "Terms body" }
    );
    assert_eq!(calls, vec![(Method::Get, "/api/legal/terms".to_owned())]);
}

#[test]
fn unauthorized_document_is_an_error() {
    let (route, status, _) = load(Some("privacy"), 401, "");
    assert!(status.error().is_some_and(FetchError::is_unauthorized));
    assert_eq!(LegalView::from_status(route, &status), LegalView::Failed);
}

#[test]
fn skeleton_has_fixed_shape() {
    assert_eq!(SKELETON_LINE_WIDTHS.len(), 8);
    assert!(SKELETON_LINE_WIDTHS.iter().all(|w| (1..=100).contains(w)));
}
