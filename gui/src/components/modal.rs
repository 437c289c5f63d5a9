// Overlay dialog shell shared by the top bar's collaborators
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::{Theme, TOP_BAR_STYLES};

/// Where a click inside an open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    CloseButton,
    Dialog,
}

impl ModalClick {
    pub fn dismisses(self) -> bool {
        matches!(self, ModalClick::Backdrop | ModalClick::CloseButton)
    }

    /// Calls `toggle` when the click should close the modal.
    pub fn route(self, toggle: impl FnOnce()) {
        if self.dismisses() {
            toggle();
        }
    }
}

/// Renders nothing while closed. The close button and a click on the
/// backdrop both call `on_toggle`; clicks inside the dialog stay inside.
#[component]
pub fn Modal(
    title: String,
    is_open: bool,
    on_toggle: EventHandler<()>,
    #[props(default)] theme: Theme,
    children: Element,
) -> Element {
    if !is_open {
        return None;
    }

    let palette = theme.palette();
    let backdrop_style = TOP_BAR_STYLES.backdrop;
    let dialog_style = format!(
        "{} background-color: {}; color: {}; border: 1px solid {};",
        TOP_BAR_STYLES.dialog, palette.surface, palette.foreground, palette.border
    );
    let close_style = TOP_BAR_STYLES.button;
    let on_backdrop = on_toggle.clone();

    rsx! {
        div {
            class: "modal-backdrop",
            style: "{backdrop_style}",
            onclick: move |_| ModalClick::Backdrop.route(|| on_backdrop.call(())),
            div {
                class: "modal-dialog",
                role: "dialog",
                style: "{dialog_style}",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                    h2 { style: "margin: 0; font-size: 1.25rem;", "{title}" }
                    button {
                        class: "close-button",
                        style: "{close_style}",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            ModalClick::CloseButton.route(|| on_toggle.call(()));
                        },
                        "✕"
                    }
                }
                {children}
            }
        }
    }
}
