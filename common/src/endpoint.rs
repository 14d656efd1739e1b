//! Data source endpoint

use crate::error::{Error, Result};

pub const DOCTORS_PATH: &str = "/doctors";

/// Used when no API base is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Base URL of the doctor API, without trailing slash
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl Default for ApiBase {
    fn default() -> Self {
        Self(DEFAULT_API_URL.to_string())
    }
}

impl ApiBase {
    pub fn new(base: &str) -> Result<Self> {
        let trimmed = base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("API base URL is empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `GET` target for the full record set
    pub fn doctors_url(&self) -> String {
        format!("{}{}", self.0, DOCTORS_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctors_url() {
        let api = ApiBase::new("http://localhost:3000").expect("valid base");
        assert_eq!(api.doctors_url(), "http://localhost:3000/doctors");
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let api = ApiBase::new(" https://api.example.com/v1// ").expect("valid base");
        assert_eq!(api.as_str(), "https://api.example.com/v1");
        assert_eq!(api.doctors_url(), "https://api.example.com/v1/doctors");
    }

    #[test]
    fn test_default_base() {
        assert_eq!(ApiBase::default().doctors_url(), "http://localhost:3000/doctors");
    }

    #[test]
    fn test_empty_base_rejected() {
        assert!(matches!(ApiBase::new("   "), Err(Error::Config(_))));
        assert!(matches!(ApiBase::new("/"), Err(Error::Config(_))));
    }
}
