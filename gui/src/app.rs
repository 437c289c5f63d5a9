#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::TopBar;
use crate::config::AppConfig;

/// Root component. The configuration is provided as context at launch and
/// handed to the top bar as plain props.
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        TopBar {
            title: config.app.title.clone(),
            urls: config.urls.clone(),
            base_url: config.base_url.clone(),
            theme: config.app.theme,
            arcgis_publisher: config.features.arcgis_publisher,
        }
    }
}
