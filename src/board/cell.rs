//! Game-agnostic description of how one cell looks.

use serde::{Deserialize, Serialize};

/// Four edge flags plus a center label.
///
/// Engines build one per cell on every render; the renderer reads nothing
/// else.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub center: String,
}

impl CellView {
    /// No edges, blank center.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            center: " ".to_string(),
            ..Self::default()
        }
    }

    /// All four edges drawn around `center`.
    #[must_use]
    pub fn boxed(center: impl Into<String>) -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
            center: center.into(),
        }
    }

    #[must_use]
    pub fn with_center(mut self, center: impl Into<String>) -> Self {
        self.center = center.into();
        self
    }

    #[must_use]
    pub fn with_edges(mut self, top: bool, bottom: bool, left: bool, right: bool) -> Self {
        self.top = top;
        self.bottom = bottom;
        self.left = left;
        self.right = right;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell() {
        let view = CellView::empty();
        assert!(!view.top && !view.bottom && !view.left && !view.right);
        assert_eq!(view.center, " ");
    }

    #[test]
    fn test_builders() {
        let view = CellView::empty().with_center("A").with_edges(true, false, true, false);
        assert_eq!(view.center, "A");
        assert!(view.top && view.left);
        assert!(!view.bottom && !view.right);

        assert_eq!(CellView::boxed("7"), CellView::empty().with_center("7").with_edges(true, true, true, true));
    }
}
