//! URL helpers for locating the storefront's static JSON files.

use crate::error::CatalogError;

/// Extracts the scheme+host origin from a catalog URL.
///
/// Given `"https://loja.example.com/catalogo/"`, returns `"https://loja.example.com"`.
/// Campaign metadata lives at the site root even when the product list is
/// served from a sub-path.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidUrl`] if `catalog_url` is not an absolute
/// URL with a host.
pub fn extract_site_origin(catalog_url: &str) -> Result<String, CatalogError> {
    let url = parse_base(catalog_url)?;
    Ok(url.origin().ascii_serialization())
}

/// Parses `raw` as an absolute `http(s)` URL.
pub(crate) fn parse_base(raw: &str) -> Result<reqwest::Url, CatalogError> {
    let url = reqwest::Url::parse(raw).map_err(|e| CatalogError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(CatalogError::InvalidUrl {
            url: raw.to_owned(),
            reason: "expected an http(s) URL with a host".to_owned(),
        });
    }
    Ok(url)
}

/// Joins `file` onto `base`, treating `base` as a directory.
///
/// `"https://host/catalogo"` + `"data.json"` → `"https://host/catalogo/data.json"`.
pub(crate) fn join_file(base: &str, file: &str) -> String {
    format!("{}/{file}", base.trim_end_matches('/'))
}
