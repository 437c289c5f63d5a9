// Visibility flags for the dialogs owned by the top bar.
// Held in a Dioxus `Signal` inside the component; one instance per mounted bar.

/// The two flags are independent: both dialogs may be open at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub layer_modal_open: bool,
    pub download_modal_open: bool,
}

impl ModalState {
    pub fn toggle_layer_modal(&mut self) {
        self.layer_modal_open = !self.layer_modal_open;
    }

    pub fn toggle_download_modal(&mut self) {
        self.download_modal_open = !self.download_modal_open;
    }
}
