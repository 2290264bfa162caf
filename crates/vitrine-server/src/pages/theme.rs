//! Theme preference carried in a `theme` cookie.

use std::sync::Mutex;

use axum::http::{header, HeaderMap, HeaderValue};
use vitrine_core::Theme;
use vitrine_ui::{ThemeState, ThemeStore, ThemeStoreError};

const COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;
pub const CLIENT_HINT: &str = "sec-ch-prefers-color-scheme";

/// Reads the preference from the request's `Cookie` header and stages a
/// `Set-Cookie` value when saved.
#[derive(Debug, Default)]
pub struct CookieThemeStore {
    request_value: Option<String>,
    staged: Mutex<Option<Theme>>,
}

impl CookieThemeStore {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let request_value = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == vitrine_ui::theme::THEME_KEY)
            .map(|(_, value)| value.trim().to_owned());
        Self {
            request_value,
            staged: Mutex::new(None),
        }
    }

    /// The `Set-Cookie` header for a saved theme, if any.
    pub fn set_cookie(&self) -> Option<HeaderValue> {
        let theme = (*self
            .staged
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner))?;
        HeaderValue::from_str(&format!(
            "{}={theme}; Max-Age={COOKIE_MAX_AGE_SECS}; Path=/; SameSite=Lax",
            vitrine_ui::theme::THEME_KEY
        ))
        .ok()
    }
}

impl ThemeStore for CookieThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        match &self.request_value {
            None => Ok(None),
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| ThemeStoreError::InvalidValue {
                    value: value.clone(),
                }),
        }
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        *self
            .staged
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(theme);
        Ok(())
    }
}

/// `Sec-CH-Prefers-Color-Scheme: "dark"`.
pub fn prefers_dark(headers: &HeaderMap) -> bool {
    headers
        .get(CLIENT_HINT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
}

/// Theme state for one request.
pub fn request_theme(headers: &HeaderMap) -> ThemeState<CookieThemeStore> {
    ThemeState::initialize(CookieThemeStore::from_headers(headers), prefers_dark(headers))
}
