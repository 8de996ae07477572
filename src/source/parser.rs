// ============================================================================
// Parser : extraction des entiers d'un fichier texte
// ============================================================================
// Les fichiers produits par la simulation mélangent texte et nombres :
//   x1.txt : "t:153"           (délimiteur ':')
//   y2.txt : "P:1,C:2,D:0=3"   (délimiteur '=')
//   y1.txt : "4"               (pas de délimiteur)
//
// Méthode : remplacer le délimiteur par un espace, découper sur les espaces,
// garder uniquement les tokens composés de chiffres décimaux.
//
// Conséquences conservées telles quelles :
// - "-3" est ignoré (le '-' n'est pas un chiffre)
// - "30pm" est ignoré entièrement (token mixte)
// - "P:1,C:2,D:0" est ignoré avec '=' comme délimiteur, seul le total reste
// ============================================================================

use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::PipelineError;
use crate::models::{SampleSource, SampleStream};

/// Extrait les entiers d'un texte, dans l'ordre d'apparition
///
/// CONCEPT RUST : Iterator chaining
/// - split_whitespace() : découpe sur les espaces (Unicode)
/// - filter() : garde les tokens 100% chiffres ASCII
/// - filter_map() : convertit en u64, ignore les dépassements
///
/// # Exemple
/// ```
/// use cafeplot::source::parse_samples;
/// assert_eq!(parse_samples("1:2:3", Some(':')), vec![1, 2, 3]);
/// assert_eq!(parse_samples("12:30pm", Some(':')), vec![12]);
/// ```
pub fn parse_samples(text: &str, delimiter: Option<char>) -> Vec<u64> {
    // CONCEPT RUST : Cow (Clone on Write)
    // - Borrowed : pas de délimiteur, on lit le texte d'origine sans copie
    // - Owned : copie avec le délimiteur remplacé
    let text: Cow<'_, str> = match delimiter {
        Some(delim) => Cow::Owned(text.replace(delim, " ")),
        None => Cow::Borrowed(text),
    };

    text.split_whitespace()
        .filter(|token| is_digits(token))
        .filter_map(|token| match token.parse::<u64>() {
            Ok(value) => Some(value),
            Err(e) => {
                // Seul cas possible ici : nombre trop grand pour un u64
                debug!(token = %token, error = %e, "Dropping out-of-range token");
                None
            }
        })
        .collect()
}

/// Vrai si le token n'est composé que de chiffres décimaux ASCII
fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Lit un fichier entier et en extrait les échantillons
///
/// Le fichier est ouvert, lu en entier puis fermé avant de rendre la main.
/// Pas de nouvelle tentative en cas d'échec.
#[instrument(skip(source), fields(path = %source.path.display(), delimiter = ?source.delimiter))]
pub fn read_samples(source: &SampleSource) -> Result<SampleStream, PipelineError> {
    let text = read_text(&source.path)?;
    let values = parse_samples(&text, source.delimiter);

    debug!(samples = values.len(), bytes = text.len(), "Parsed sample file");
    Ok(SampleStream::new(source.path.clone(), values))
}

fn read_text(path: &Path) -> Result<String, PipelineError> {
    std::fs::read_to_string(path).map_err(|source| PipelineError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests unitaires
// ============================================================================
