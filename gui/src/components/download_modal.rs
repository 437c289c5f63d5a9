#![allow(non_snake_case)]
use dioxus::prelude::*;

use super::modal::Modal;
use crate::config::theme::Theme;

#[component]
pub fn DownloadModal(
    on_toggle: EventHandler<()>,
    is_open: bool,
    #[props(default)] theme: Theme,
) -> Element {
    rsx! {
        Modal {
            title: "Download",
            is_open: is_open,
            on_toggle: move |_| on_toggle.call(()),
            theme: theme,
            p { "Download layers as a GeoPackage file." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layer_publish_modal::LayerPublishModal;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn closed_download() -> Element {
        rsx! { DownloadModal { is_open: false, on_toggle: move |_| {} } }
    }

    fn open_download() -> Element {
        rsx! { DownloadModal { is_open: true, on_toggle: move |_| {} } }
    }

    fn open_layer_publish() -> Element {
        rsx! { LayerPublishModal { is_open: true, on_toggle: move |_| {}, theme: Theme::Light } }
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render(closed_download);
        assert!(!html.contains("modal-dialog"));
        assert!(!html.contains("GeoPackage file"));
    }

    #[test]
    fn open_modal_renders_title_and_body() {
        let html = render(open_download);
        assert!(html.contains("modal-dialog"));
        assert!(html.contains("Download"));
        assert!(html.contains("Download layers as a GeoPackage file."));
    }

    #[test]
    fn layer_publish_modal_has_a_url_field() {
        let html = render(open_layer_publish);
        assert!(html.contains("ArcGIS Publisher"));
        assert!(html.contains("layer-url-input"));
        assert!(html.contains("#fafafa"));
    }
}
