// ============================================================================
// Module : source
// ============================================================================
// Lecture des fichiers d'échantillons produits par la simulation
// ============================================================================

pub mod parser; // Parsing par remplacement de délimiteur

// Re-export des fonctions principales
pub use parser::{parse_samples, read_samples};
