use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Navigation targets keyed by semantic name, e.g. `"layerUpload"`.
///
/// Owned by the application configuration; components only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Urls(BTreeMap<String, String>);

impl Urls {
    pub const LAYER_UPLOAD: &'static str = "layerUpload";

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Target of the "Upload Shapefile" action.
    pub fn layer_upload(&self) -> Option<&str> {
        self.get(Self::LAYER_UPLOAD)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Urls {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
