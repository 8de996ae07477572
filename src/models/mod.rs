// ============================================================================
// Module : models
// ============================================================================
// Structures de données : flux d'échantillons, séries et figure
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module public
// - "pub use" : re-export pour raccourcir les imports
// ============================================================================

pub mod sample_stream; // Flux d'entiers lus depuis un fichier
pub mod series;        // Paires (x, y), panneaux et figure

// Au lieu de : use cafeplot::models::sample_stream::SampleStream;
// On peut faire : use cafeplot::models::SampleStream;
pub use sample_stream::{SampleSource, SampleStream};
pub use series::{Figure, MarkerColor, Panel, Series};
