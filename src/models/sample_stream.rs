// ============================================================================
// Structure : SampleStream
// ============================================================================
// Suite ordonnée d'entiers extraite d'un fichier texte
//
// CONCEPTS RUST :
// 1. PathBuf : chemin possédé (owned), garde la trace du fichier source
// 2. Vec<u64> : les échantillons, dans l'ordre d'apparition
// 3. Pas de setter : une fois créé, le flux n'est plus modifié
// ============================================================================

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Origine d'un flux : un fichier et un délimiteur optionnel
///
/// CONCEPT : Délimiteur optionnel
/// - Some(':') : chaque ':' est remplacé par un espace avant le découpage
/// - None : découpage sur les espaces uniquement (lecture brute)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSource {
    /// Chemin du fichier à lire
    pub path: PathBuf,

    /// Caractère remplacé par un espace avant le découpage
    #[serde(default)]
    pub delimiter: Option<char>,
}

impl SampleSource {
    /// Crée une source avec délimiteur
    pub fn new(path: impl Into<PathBuf>, delimiter: char) -> Self {
        Self {
            path: path.into(),
            delimiter: Some(delimiter),
        }
    }

    /// Crée une source lue telle quelle (découpage sur les espaces)
    pub fn plain(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: None,
        }
    }
}

/// Flux d'échantillons lu depuis un fichier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleStream {
    /// Fichier d'où viennent les échantillons
    pub path: PathBuf,

    /// Les entiers, dans l'ordre d'apparition dans le fichier
    pub values: Vec<u64>,
}

impl SampleStream {
    pub fn new(path: impl Into<PathBuf>, values: Vec<u64>) -> Self {
        Self {
            path: path.into(),
            values,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Nombre d'échantillons
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bornes (min, max) du flux, None s'il est vide
    ///
    /// CONCEPT RUST : fold en une seule passe
    /// - Option<(min, max)> comme accumulateur
    pub fn bounds(&self) -> Option<(u64, u64)> {
        self.values.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let stream = SampleStream::new("x1.txt", vec![4, 1, 9, 3]);
        assert_eq!(stream.bounds(), Some((1, 9)));
        assert_eq!(stream.len(), 4);
    }

    #[test]
    fn test_bounds_empty() {
        let stream = SampleStream::new("x1.txt", Vec::new());
        assert!(stream.is_empty());
        assert_eq!(stream.bounds(), None);
    }

    #[test]
    fn test_source_constructors() {
        let source = SampleSource::new("../source/x1.txt", ':');
        assert_eq!(source.delimiter, Some(':'));

        let plain = SampleSource::plain("../source/y1.txt");
        assert_eq!(plain.delimiter, None);
        assert_eq!(plain.path, PathBuf::from("../source/y1.txt"));
    }
}
