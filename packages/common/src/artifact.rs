use serde::{Deserialize, Serialize};

/// The three derived outputs for one document.
///
/// A triple is always replaced as a whole; nothing updates a single member
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactTriple {
    /// Structural markup (HTML)
    pub markup: String,
    /// Stylesheet (CSS)
    pub stylesheet: String,
    /// Component source (React/JSX)
    pub component_source: String,
}

impl ArtifactTriple {
    pub fn new(
        markup: impl Into<String>,
        stylesheet: impl Into<String>,
        component_source: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            stylesheet: stylesheet.into(),
            component_source: component_source.into(),
        }
    }
}
