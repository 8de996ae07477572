// ============================================================================
// FigureLayout : dimensions de l'image produite
// ============================================================================
// Taille en pouces + résolution (DPI), comme une figure matplotlib.
// Par défaut : 10 x 10 pouces à 120 DPI = 1200 x 1200 pixels.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Dimensions physiques de la figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureLayout {
    /// Largeur en pouces
    pub width_in: f64,

    /// Hauteur en pouces
    pub height_in: f64,

    /// Points par pouce
    pub dpi: u32,
}

impl FigureLayout {
    /// Taille de l'image en pixels (largeur, hauteur)
    ///
    /// CONCEPT RUST : Conversion explicite f64 -> u32
    /// - round() puis `as u32` (sature à 0 pour les valeurs négatives)
    /// - max(1) : une image de 0 pixel n'a pas de sens
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        let width = (self.width_in * dpi).round() as u32;
        let height = (self.height_in * dpi).round() as u32;
        (width.max(1), height.max(1))
    }
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            width_in: 10.0,
            height_in: 10.0,
            dpi: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pixel_size() {
        assert_eq!(FigureLayout::default().pixel_size(), (1200, 1200));
    }

    #[test]
    fn test_custom_pixel_size() {
        let layout = FigureLayout {
            width_in: 6.4,
            height_in: 4.8,
            dpi: 100,
        };
        assert_eq!(layout.pixel_size(), (640, 480));
    }
}
