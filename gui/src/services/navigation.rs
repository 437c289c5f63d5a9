// Full-page navigation for the top bar buttons.
// The webview location is replaced through a script, so every action reloads the page.
use dioxus::prelude::*;
use shared::models::Urls;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Failed to encode navigation target: {source}")]
    Encode {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid navigation target: {source}")]
    InvalidTarget {
        #[from]
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Home,
    UploadShapefile,
}

impl NavAction {
    pub fn label(self) -> &'static str {
        match self {
            NavAction::Home => "Home",
            NavAction::UploadShapefile => "Upload Shapefile",
        }
    }

    pub fn tooltip(self) -> Option<&'static str> {
        match self {
            NavAction::Home => None,
            NavAction::UploadShapefile => Some("Import GeoPackage, Shapefile, CSV, Raster or KML"),
        }
    }

    /// `None` when the configured `urls` have no entry for the action.
    pub fn target(self, urls: &Urls) -> Option<String> {
        match self {
            NavAction::Home => Some("/".to_string()),
            NavAction::UploadShapefile => urls.layer_upload().map(str::to_string),
        }
    }
}

/// Resolves `target` against the server origin. Absolute targets are kept as they are.
///
/// The webview serves the app from its own asset protocol, so a bare path
/// like `/upload` would otherwise point at a missing local asset.
pub fn resolve_target(base_url: &Url, target: &str) -> Result<Url, NavigationError> {
    Ok(base_url.join(target)?)
}

/// Builds the script assigning `target` to `window.location.href`.
pub fn location_script(target: &str) -> Result<String, NavigationError> {
    let literal = serde_json::to_string(target)?;
    Ok(format!("window.location.href = {literal};"))
}

/// Navigates the host webview to the action's target. Must run inside the Dioxus runtime.
pub fn navigate(action: NavAction, target: Option<&str>, base_url: &Url) {
    let Some(target) = target else {
        tracing::warn!("No navigation target configured for {:?}; ignoring click", action);
        return;
    };

    let script = resolve_target(base_url, target).and_then(|url| location_script(url.as_str()));
    match script {
        Ok(script) => {
            tracing::info!("Navigating to {} ({:?})", target, action);
            eval(&script);
        }
        Err(e) => tracing::error!("Cannot navigate to {}: {}", target, e),
    }
}
