//! Legal document viewer (`/legal/:type`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Public page reachable without a session. The route segment picks which
//! document to fetch and which title to show; both decisions live in
//! [`LegalRoute::resolve`].
//!
//! Unknown segments fetch the terms but are titled "Legal", so a mistyped link
//! still shows readable content without claiming to be a specific document.

#[cfg(test)]
#[path = "legal_test.rs"]
mod legal_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::{ApiClient, LEGAL_PATH};
use crate::net::types::{DocumentType, LegalDocument};
use crate::query::hook::use_query;
use crate::query::key::QueryKey;
use crate::query::options::QueryOptions;
use crate::query::status::FetchStatus;
use crate::state::session::AUTH_ENTRY_PATH;

pub const GENERIC_TITLE: &str = "Legal";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load document. Please try again later.";

/// Placeholder line widths (percent) while the document loads.
pub const SKELETON_LINE_WIDTHS: [u8; 8] = [92, 100, 86, 97, 74, 100, 81, 63];

/// Which document to fetch and what to call it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalRoute {
    pub document: DocumentType,
    pub title: &'static str,
}

impl LegalRoute {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.filter(|segment| !segment.is_empty()) {
            None => Self::for_document(DocumentType::default()),
            Some(segment) => match DocumentType::parse(segment) {
                Some(document) => Self::for_document(document),
                None => Self { document: DocumentType::default(), title: GENERIC_TITLE },
            },
        }
    }

    fn for_document(document: DocumentType) -> Self {
        Self { document, title: document.title() }
    }

    pub fn query_key(&self) -> QueryKey {
        QueryKey::new([LEGAL_PATH, self.document.slug()])
    }
}

/// Render decision for one observation of the document query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalView<'a> {
    Skeleton,
    Failed,
    Document { title: &'static str, content: &'a str },
}

impl<'a> LegalView<'a> {
    pub fn from_status(route: LegalRoute, status: &'a FetchStatus<LegalDocument>) -> Self {
        match status {
            FetchStatus::Pending => Self::Skeleton,
            FetchStatus::Error(_) => Self::Failed,
            FetchStatus::Success(doc) => Self::Document { title: route.title, content: &doc.content },
        }
    }
}

/// Legal page: skeleton while loading, fixed message on failure, document on success.
#[component]
pub fn LegalPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let route = Memo::new(move |_| LegalRoute::resolve(params.read().get("type").as_deref()));

    let document = use_query(move || route.get().query_key(), QueryOptions::default(), move |_key| {
        let api = api.clone();
        let kind = route.get_untracked().document;
        async move { api.legal_document(kind).await }
    });

    move || document.with(|status| render_view(LegalView::from_status(route.get(), status)))
}

fn render_view(view: LegalView<'_>) -> AnyView {
    match view {
        LegalView::Skeleton => view! {
            <div class="legal-page">
                <div class="legal-page__column legal-page__skeleton" aria-busy="true">
                    <div class="legal-page__skeleton-title"></div>
                    {SKELETON_LINE_WIDTHS
                        .iter()
                        .map(|width| {
                            view! {
                                <div class="legal-page__skeleton-line" style=format!("width: {width}%;")></div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_any(),
        LegalView::Failed => view! {
            <div class="legal-page legal-page--centered">
                <p class="legal-page__error">{LOAD_ERROR_MESSAGE}</p>
            </div>
        }
        .into_any(),
        LegalView::Document { title, content } => {
            let content = content.to_owned();
            view! {
                <div class="legal-page">
                    <div class="legal-page__column">
                        <a href=AUTH_ENTRY_PATH class="btn legal-page__back">
                            "← Back"
                        </a>
                        <h1 class="legal-page__title">{title}</h1>
                        <pre class="legal-page__content">{content}</pre>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
