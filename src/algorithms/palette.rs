/// Marker shapes cycled across suites in line and scatter charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Circle,
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Pentagon,
    Star,
    Hexagon,
    RotatedHexagon,
    Plus,
    Cross,
    ThinDiamond,
}

/// Marker order applied to suites, repeating once exhausted.
pub const MARKER_CYCLE: [MarkerShape; 14] = [
    MarkerShape::Circle,
    MarkerShape::Square,
    MarkerShape::Diamond,
    MarkerShape::TriangleUp,
    MarkerShape::TriangleDown,
    MarkerShape::TriangleLeft,
    MarkerShape::TriangleRight,
    MarkerShape::Pentagon,
    MarkerShape::Star,
    MarkerShape::Hexagon,
    MarkerShape::RotatedHexagon,
    MarkerShape::Plus,
    MarkerShape::Cross,
    MarkerShape::ThinDiamond,
];

/// Color and marker for the i-th series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: String,
    pub marker: MarkerShape,
}

/// Assign `n` entries cyclically: entry `i` gets `palette[i % len]` and
/// `MARKER_CYCLE[i % 14]`. An empty palette falls back to `currentColor`.
#[must_use]
pub fn palette_assign<S: AsRef<str>>(n: usize, palette: &[S]) -> Vec<PaletteEntry> {
    (0..n)
        .map(|i| PaletteEntry {
            color: if palette.is_empty() {
                "currentColor".to_string()
            } else {
                palette[i % palette.len()].as_ref().to_string()
            },
            marker: MARKER_CYCLE[i % MARKER_CYCLE.len()],
        })
        .collect()
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
