// Application top bar: title, navigation buttons and the dialogs they toggle
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::Urls;
use url::Url;

use super::download_modal::DownloadModal;
use super::layer_publish_modal::LayerPublishModal;
use crate::config::theme::{Theme, TOP_BAR_STYLES};
use crate::services::navigation::{self, NavAction};
use crate::state::modal_state::ModalState;

/// A top bar button. Each rendered button dispatches exactly the action it is labelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    Navigate(NavAction),
    ToggleLayerModal,
    ToggleDownloadModal,
}

/// What a dispatched action asks of the host, beyond its modal state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionEffect {
    None,
    Navigate { action: NavAction, target: Option<String> },
}

impl TopBarAction {
    /// Buttons in display order; the ArcGIS Publisher button only when enabled.
    pub fn buttons(arcgis_publisher: bool) -> Vec<TopBarAction> {
        let mut buttons = vec![
            TopBarAction::Navigate(NavAction::Home),
            TopBarAction::Navigate(NavAction::UploadShapefile),
        ];
        if arcgis_publisher {
            buttons.push(TopBarAction::ToggleLayerModal);
        }
        buttons.push(TopBarAction::ToggleDownloadModal);
        buttons
    }

    pub fn label(self) -> &'static str {
        match self {
            TopBarAction::Navigate(action) => action.label(),
            TopBarAction::ToggleLayerModal => "ArcGIS Publisher",
            TopBarAction::ToggleDownloadModal => "Download",
        }
    }

    pub fn tooltip(self) -> Option<&'static str> {
        match self {
            TopBarAction::Navigate(action) => action.tooltip(),
            _ => None,
        }
    }

    pub fn apply(self, modals: &mut ModalState, urls: &Urls) -> ActionEffect {
        match self {
            TopBarAction::Navigate(action) => ActionEffect::Navigate {
                action,
                target: action.target(urls),
            },
            TopBarAction::ToggleLayerModal => {
                modals.toggle_layer_modal();
                ActionEffect::None
            }
            TopBarAction::ToggleDownloadModal => {
                modals.toggle_download_modal();
                ActionEffect::None
            }
        }
    }
}

fn run(effect: ActionEffect, base_url: &Url) {
    if let ActionEffect::Navigate { action, target } = effect {
        navigation::navigate(action, target.as_deref(), base_url);
    }
}

/// `urls` is read only, to resolve the navigation buttons against
/// `base_url`. The "ArcGIS Publisher" button stays hidden unless
/// `arcgis_publisher` is set; its dialog is mounted either way.
#[component]
pub fn TopBar(
    title: String,
    urls: Urls,
    base_url: Url,
    #[props(default)] theme: Theme,
    #[props(default)] arcgis_publisher: bool,
) -> Element {
    let mut modals = use_signal(ModalState::default);
    let ModalState { layer_modal_open, download_modal_open } = *modals.read();

    let palette = theme.palette();
    let root_style = TOP_BAR_STYLES.root;
    let bar_style = format!(
        "{} background-color: {}; color: {};",
        TOP_BAR_STYLES.bar, palette.primary, palette.on_primary
    );
    let title_style = TOP_BAR_STYLES.title;
    let button_style = TOP_BAR_STYLES.button;

    let buttons = TopBarAction::buttons(arcgis_publisher).into_iter().map(|action| {
        let mut modals = modals;
        let urls = urls.clone();
        let base_url = base_url.clone();
        let label = action.label();
        let tooltip = action.tooltip().unwrap_or_default();
        rsx! {
            button {
                style: "{button_style}",
                title: "{tooltip}",
                onclick: move |_| {
                    let effect = action.apply(&mut modals.write(), &urls);
                    run(effect, &base_url);
                },
                "{label}"
            }
        }
    });

    rsx! {
        div {
            class: "top-bar",
            style: "{root_style}",
            header {
                class: "app-bar",
                style: "{bar_style}",
                h1 { class: "app-bar-title", style: "{title_style}", "{title}" }
                {buttons}
            }
            LayerPublishModal {
                on_toggle: move |_| modals.write().toggle_layer_modal(),
                is_open: layer_modal_open,
                theme: theme,
            }
            DownloadModal {
                on_toggle: move |_| modals.write().toggle_download_modal(),
                is_open: download_modal_open,
                theme: theme,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn upload_urls() -> Urls {
        [("layerUpload", "/upload")].into_iter().collect()
    }

    fn geonode() -> Url {
        Url::parse("http://localhost:8000/").unwrap()
    }

    fn titled_x() -> Element {
        rsx! { TopBar { title: "X", urls: upload_urls(), base_url: geonode() } }
    }

    fn with_arcgis_publisher() -> Element {
        rsx! { TopBar { title: "Data Manager", urls: upload_urls(), base_url: geonode(), arcgis_publisher: true } }
    }

    fn light_without_urls() -> Element {
        rsx! { TopBar { title: "Data Manager", urls: Urls::default(), base_url: geonode(), theme: Theme::Light } }
    }

    fn button_labels(arcgis_publisher: bool) -> Vec<&'static str> {
        TopBarAction::buttons(arcgis_publisher).into_iter().map(TopBarAction::label).collect()
    }

    #[test]
    fn renders_the_title_text() {
        let html = render(titled_x);
        assert!(html.contains(">X<"), "title missing from {html}");
    }

    #[test]
    fn renders_navigation_and_download_buttons() {
        let html = render(titled_x);
        assert!(html.contains("Home"));
        assert!(html.contains("Upload Shapefile"));
        assert!(html.contains("Import GeoPackage, Shapefile, CSV, Raster or KML"));
        assert!(html.contains("Download"));
    }

    #[test]
    fn dialogs_start_closed() {
        let html = render(titled_x);
        assert!(!html.contains("modal-dialog"));
    }

    #[test]
    fn arcgis_publisher_button_is_hidden_by_default() {
        assert!(!render(titled_x).contains("ArcGIS Publisher"));
        assert!(render(with_arcgis_publisher).contains("ArcGIS Publisher"));
    }

    #[test]
    fn renders_without_an_upload_url() {
        let html = render(light_without_urls);
        assert!(html.contains("Upload Shapefile"));
        assert!(html.contains("#3f51b5"));
    }

    #[test]
    fn buttons_are_listed_in_display_order() {
        assert_eq!(button_labels(false), ["Home", "Upload Shapefile", "Download"]);
        assert_eq!(
            button_labels(true),
            ["Home", "Upload Shapefile", "ArcGIS Publisher", "Download"]
        );
    }

    #[test]
    fn download_button_toggles_only_the_download_modal() {
        let mut modals = ModalState::default();
        let effect = TopBarAction::ToggleDownloadModal.apply(&mut modals, &upload_urls());
        assert_eq!(effect, ActionEffect::None);
        assert_eq!(modals, ModalState { layer_modal_open: false, download_modal_open: true });

        TopBarAction::ToggleDownloadModal.apply(&mut modals, &upload_urls());
        assert_eq!(modals, ModalState::default());
    }

    #[test]
    fn arcgis_button_toggles_only_the_layer_modal() {
        let mut modals = ModalState::default();
        TopBarAction::ToggleLayerModal.apply(&mut modals, &upload_urls());
        assert_eq!(modals, ModalState { layer_modal_open: true, download_modal_open: false });
    }

    #[test]
    fn home_button_navigates_to_the_site_root() {
        let mut modals = ModalState::default();
        let effect = TopBarAction::Navigate(NavAction::Home).apply(&mut modals, &upload_urls());
        assert_eq!(
            effect,
            ActionEffect::Navigate { action: NavAction::Home, target: Some("/".to_string()) }
        );
        assert_eq!(modals, ModalState::default());
    }

    #[test]
    fn upload_button_navigates_to_layer_upload() {
        let mut modals = ModalState::default();
        let effect =
            TopBarAction::Navigate(NavAction::UploadShapefile).apply(&mut modals, &upload_urls());
        assert_eq!(
            effect,
            ActionEffect::Navigate {
                action: NavAction::UploadShapefile,
                target: Some("/upload".to_string()),
            }
        );
    }
}
