// ============================================================================
// cafeplot - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod config;   // Chemins et options (cafeplot.json)
pub mod error;    // Erreurs typées
pub mod models;   // Structures de données
pub mod pipeline; // Rafraîchir -> lire -> tracer
pub mod plot;     // Rendu PNG
pub mod refresh;  // Script de régénération des données
pub mod source;   // Parsing des fichiers d'échantillons

pub use config::Config;
pub use error::PipelineError;
