//! Build-time configuration

use mediassist_common::ApiBase;

/// Resolve the API base baked in at build time
///
/// `MEDIASSIST_API_URL` when set and non-empty, otherwise the default base.
pub fn api_base() -> ApiBase {
    resolve_api_base(option_env!("MEDIASSIST_API_URL"))
}

fn resolve_api_base(configured: Option<&str>) -> ApiBase {
    configured
        .and_then(|url| ApiBase::new(url).ok())
        .unwrap_or_default()
}
