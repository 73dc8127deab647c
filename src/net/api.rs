//! REST API helpers for the portal endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, FetchError>`; callers decide whether a
//! status is fatal. In particular a 401 from `/api/auth/me` is surfaced as a
//! plain status error here and translated to "no session" by the query layer.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::http::{HttpClient, Method};
use super::types::{DocumentType, LegalDocument, User};
use crate::error::FetchError;

pub const AUTH_ME_PATH: &str = "/api/auth/me";
pub const AUTH_LOGOUT_PATH: &str = "/api/auth/logout";
pub const LEGAL_PATH: &str = "/api/legal";

pub(crate) fn legal_document_endpoint(kind: DocumentType) -> String {
    format!("{LEGAL_PATH}/{}", kind.slug())
}

/// Cheap-to-clone handle over the injected [`HttpClient`].
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// `GET` a path and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Network failures, non-2xx statuses, and undecodable bodies.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let resp = self.http.request(Method::Get, path).await?.error_for_status()?;
        resp.json()
    }

    /// Fetch the currently authenticated user from `/api/auth/me`.
    ///
    /// # Errors
    ///
    /// Returns a 401 status error when no session exists.
    pub async fn current_user(&self) -> Result<User, FetchError> {
        self.get_json(AUTH_ME_PATH).await
    }

    /// Fetch one legal document from `/api/legal/{type}`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status, including 401, is an error.
    pub async fn legal_document(&self, kind: DocumentType) -> Result<LegalDocument, FetchError> {
        self.get_json(&legal_document_endpoint(kind)).await
    }

    /// End the session via `POST /api/auth/logout`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status is an error; the response body is ignored on success.
    pub async fn logout(&self) -> Result<(), FetchError> {
        self.http.request(Method::Post, AUTH_LOGOUT_PATH).await?.error_for_status()?;
        Ok(())
    }
}
