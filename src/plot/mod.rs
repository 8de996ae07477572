// ============================================================================
// Module : plot
// ============================================================================
// Rendu des séries dans une image PNG horodatée
// ============================================================================

pub mod figure; // Dessin des panneaux (plotters)
pub mod layout; // Dimensions de l'image

pub use figure::{output_path, render_figure};
pub use layout::FigureLayout;
