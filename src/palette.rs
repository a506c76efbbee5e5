//! Display colors for cluster indices.
//!
//! Purely a presentation concern: the engine never sees colors. The first
//! three clusters get a fixed base palette; higher indices fall back to a
//! deterministic modulo blend, so any index always maps to the same color.

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Base palette for the first three cluster indices.
const BASE: [Rgb; 3] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
];

/// Display color for a cluster index.
///
/// Indices 0..3 use the base palette; any other index is blended through
/// `((i * 50) % 255, (i * 80) % 255, (i * 100) % 255)`. Total function:
/// every index, including out-of-range labels, maps to a defined color.
pub fn color_for(cluster: usize) -> Rgb {
    match BASE.get(cluster) {
        Some(&color) => color,
        None => {
            // Reduce before multiplying so large indices cannot overflow.
            let i = cluster % 255;
            Rgb::new(
                ((i * 50) % 255) as u8,
                ((i * 80) % 255) as u8,
                ((i * 100) % 255) as u8,
            )
        }
    }
}
