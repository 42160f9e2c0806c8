use serde::{Deserialize, Serialize};

/// Paint layers of a profile chart, listed back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Background,
    Grid,
    Axis,
    Series,
    Border,
}

impl CanvasLayerKind {
    /// Canonical back-to-front paint order.
    pub const PAINT_ORDER: [Self; 5] = [
        Self::Background,
        Self::Grid,
        Self::Axis,
        Self::Series,
        Self::Border,
    ];
}
