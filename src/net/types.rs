//! Wire DTOs for the portal API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl User {
    /// Full name when known, otherwise email, otherwise the raw id.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        self.email
            .as_deref()
            .filter(|email| !email.trim().is_empty())
            .map_or_else(|| self.id.clone(), str::to_owned)
    }
}

/// Body of `GET /api/legal/{type}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDocument {
    pub content: String,
}

/// The fixed set of legal documents the server publishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DocumentType {
    #[default]
    Terms,
    Privacy,
    Eula,
}

impl DocumentType {
    pub const ALL: [Self; 3] = [Self::Terms, Self::Privacy, Self::Eula];

    /// Parse a route segment. Matching is exact and lowercase.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "terms" => Some(Self::Terms),
            "privacy" => Some(Self::Privacy),
            "eula" => Some(Self::Eula),
            _ => None,
        }
    }

    /// Route/API segment for this document.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Terms => "terms",
            Self::Privacy => "privacy",
            Self::Eula => "eula",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Terms => "Terms of Service",
            Self::Privacy => "Privacy Policy",
            Self::Eula => "End User License Agreement",
        }
    }
}
