//! Application identifier value object
//!
//! Marathon identifies applications by an absolute path (`/group/app`).
//! Identifiers given without the leading slash are normalized.

use serde::{Deserialize, Serialize};

/// Normalized application identifier (always starts with `/`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Parse and normalize an identifier; `None` when empty
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "/" {
            return None;
        }
        if trimmed.starts_with('/') {
            Some(Self(trimmed.to_string()))
        } else {
            Some(Self(format!("/{}", trimmed)))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier without the leading slash, for building URL paths
    pub fn path_segment(&self) -> &str {
        self.0.trim_start_matches('/')
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AppId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| "application id must not be empty".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_leading_slash() {
        assert_eq!(AppId::parse("web").unwrap().as_str(), "/web");
        assert_eq!(AppId::parse("/group/web").unwrap().as_str(), "/group/web");
    }

    #[test]
    fn rejects_empty() {
        assert!(AppId::parse("").is_none());
        assert!(AppId::parse("  ").is_none());
        assert!(AppId::parse("/").is_none());
    }

    #[test]
    fn path_segment_strips_slash() {
        let id = AppId::parse("/group/web").unwrap();
        assert_eq!(id.path_segment(), "group/web");
    }
}
