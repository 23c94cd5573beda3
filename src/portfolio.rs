use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static CONTENT_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Portfolio content not found")]
    NotFound,
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
}

/// A static image asset, referenced by the URL the bundler serves it under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl ImageRef {
    #[cfg(test)]
    pub(crate) fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            file_name: None,
        }
    }

    /// Filename suggested to the browser when the image is downloaded.
    pub fn download_name(&self) -> String {
        if let Some(name) = &self.file_name {
            return name.clone();
        }
        let path = self.src.split(['?', '#']).next().unwrap_or_default();
        match path.rsplit('/').next() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => "download".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub image: ImageRef,
}

/// One of the orbiting badges in the AI skills display. `accent` is rendered
/// highlighted after `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSkill {
    pub label: String,
    #[serde(default)]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub label: String,
    href: String,
}

impl ExternalLink {
    #[cfg(test)]
    pub(crate) fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Absolute link target. Bare hosts such as `www.example.com/me` get an
    /// `https://` scheme so the browser doesn't treat them as relative paths.
    pub fn href(&self) -> String {
        let href = self.href.trim();
        if href.contains("://") || href.starts_with("mailto:") || href.starts_with("tel:") {
            href.to_string()
        } else {
            format!("https://{}", href.trim_start_matches('/'))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub title: String,
    pub owner: String,
    pub role: String,
    pub about: String,
    pub skills: Vec<String>,
    pub ai_skills: Vec<AiSkill>,
    pub background: ImageRef,
    pub profile: ImageRef,
    pub certificates: Vec<Certificate>,
    pub contact: ContactInfo,
    pub links: Vec<ExternalLink>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = Content::get(CONTENT_FILE).ok_or(ContentError::NotFound)?;
        let portfolio = Self::from_json(&file.data)?;
        log::debug!(
            "loaded portfolio content for {} ({} certificates)",
            portfolio.owner,
            portfolio.certificates.len()
        );
        Ok(portfolio)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert!(!portfolio.owner.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.certificates.is_empty());
        assert_eq!(portfolio.ai_skills.len(), 2);
        assert!(portfolio
            .links
            .iter()
            .all(|l| l.href().starts_with("https://")));
    }

    #[test]
    fn test_malformed_content_is_parse_error() {
        let err = Portfolio::from_json(b"{\"title\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_link_normalization() {
        let bare = ExternalLink::new("linkedin.com", "www.linkedin.com/in/someone");
        assert_eq!(bare.href(), "https://www.linkedin.com/in/someone");

        let full = ExternalLink::new("github.com", "https://github.com/someone");
        assert_eq!(full.href(), "https://github.com/someone");

        let mail = ExternalLink::new("mail", "mailto:me@example.com");
        assert_eq!(mail.href(), "mailto:me@example.com");
    }

    #[test]
    fn test_download_name() {
        let mut image = ImageRef::new("/assets/cert.jpeg?v=2", "Certificate");
        assert_eq!(image.download_name(), "cert.jpeg");

        image.file_name = Some("My Certificate.jpeg".to_string());
        assert_eq!(image.download_name(), "My Certificate.jpeg");

        let root = ImageRef::new("/", "Nothing");
        assert_eq!(root.download_name(), "download");
    }
}
