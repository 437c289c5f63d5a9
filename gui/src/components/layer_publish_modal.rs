// ArcGIS layer publisher dialog
#![allow(non_snake_case)]
use dioxus::prelude::*;

use super::modal::Modal;
use crate::config::theme::Theme;

#[component]
pub fn LayerPublishModal(
    on_toggle: EventHandler<()>,
    is_open: bool,
    #[props(default)] theme: Theme,
) -> Element {
    // Local input only; nothing is submitted from here.
    let mut layer_url = use_signal(String::new);

    rsx! {
        Modal {
            title: "ArcGIS Publisher",
            is_open: is_open,
            on_toggle: move |_| on_toggle.call(()),
            theme: theme,
            p { "Publish an ArcGIS feature layer as a GeoPackage layer." }
            input {
                class: "layer-url-input",
                r#type: "url",
                placeholder: "https://services.arcgis.com/.../FeatureServer/0",
                value: "{layer_url}",
                style: "width: calc(100% - 20px); padding: 10px; border-radius: 4px;",
                oninput: move |evt| layer_url.set(evt.value()),
            }
        }
    }
}
