// ============================================================================
// Erreurs typées du pipeline
// ============================================================================
// anyhow sert à propager les erreurs avec du contexte ; cet enum donne aux
// appelants (et aux tests) les cas qu'ils peuvent distinguer.
//
// CONCEPT RUST : thiserror
// - #[derive(Error)] implémente std::error::Error + Display
// - #[source] chaîne l'erreur d'origine (io::Error, etc.)
// - Reste compatible avec anyhow : anyhow::Error::from(PipelineError)
// ============================================================================

use std::path::PathBuf;

use thiserror::Error;

/// Erreurs que le pipeline peut remonter
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Fichier d'entrée absent ou illisible
    #[error("cannot read sample file {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Le répertoire de sortie n'existe pas (il n'est jamais créé)
    #[error("output directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    /// Les flux x et y d'une série n'ont pas la même longueur
    #[error(
        "series length mismatch: {x_path} has {x_len} samples but {y_path} has {y_len}"
    )]
    SeriesLengthMismatch {
        x_path: PathBuf,
        x_len: usize,
        y_path: PathBuf,
        y_len: usize,
    },

    /// Le fichier de configuration ne décrit pas exactement 3 panneaux
    #[error("expected {expected} panels in configuration, found {found}")]
    PanelCount { expected: usize, found: usize },

    /// Erreur du backend de dessin (plotters)
    #[error("rendering failed: {0}")]
    Render(String),
}
