// ============================================================================
// Structures : Series et Figure
// ============================================================================
// Une Series associe deux SampleStream (x, y) pour un sous-graphique.
// Une Figure regroupe les séries à dessiner, de haut en bas.
//
// CONCEPTS RUST :
// 1. Constructeur faillible : Series::new retourne Result
// 2. Invariant vérifié à la construction : len(x) == len(y)
// 3. Iterator zip : assemble les points (x, y)
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;
use crate::models::SampleStream;

/// Couleur des marqueurs d'un panneau
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Blue,
    Green,
    Black,
    Magenta,
    Cyan,
}

/// Paire (x, y) de flux pour un sous-graphique
#[derive(Debug, Clone)]
pub struct Series {
    x: SampleStream,
    y: SampleStream,
}

impl Series {
    /// Crée une série à partir de deux flux de même longueur
    ///
    /// CONCEPT : Fail fast
    /// - Une différence de longueur est signalée ici, avec les deux fichiers,
    ///   plutôt qu'au moment du dessin
    pub fn new(x: SampleStream, y: SampleStream) -> Result<Self, PipelineError> {
        if x.len() != y.len() {
            return Err(PipelineError::SeriesLengthMismatch {
                x_path: x.path.clone(),
                x_len: x.len(),
                y_path: y.path.clone(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &SampleStream {
        &self.x
    }

    pub fn y(&self) -> &SampleStream {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Points (x, y) dans l'ordre des fichiers
    pub fn points(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.x
            .values
            .iter()
            .copied()
            .zip(self.y.values.iter().copied())
    }
}

/// Un sous-graphique prêt à dessiner
#[derive(Debug, Clone)]
pub struct Panel {
    pub series: Series,

    /// Libellé de l'axe Y (ex: "# of plates at kitchen")
    pub y_label: String,

    pub color: MarkerColor,
}

/// Figure complète : les panneaux empilés verticalement
#[derive(Debug, Clone)]
pub struct Figure {
    pub panels: Vec<Panel>,

    /// Libellé de l'axe X, affiché sous le dernier panneau seulement
    pub x_label: String,
}

impl Figure {
    pub fn new(panels: Vec<Panel>, x_label: impl Into<String>) -> Self {
        Self {
            panels,
            x_label: x_label.into(),
        }
    }

    /// Nombre total de points dessinés
    pub fn point_count(&self) -> usize {
        self.panels.iter().map(|p| p.series.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_points() {
        let x = SampleStream::new("x1.txt", vec![1, 2, 3]);
        let y = SampleStream::new("y1.txt", vec![5, 0, 7]);
        let series = Series::new(x, y).unwrap();

        let points: Vec<(u64, u64)> = series.points().collect();
        assert_eq!(points, vec![(1, 5), (2, 0), (3, 7)]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_series_length_mismatch() {
        let x = SampleStream::new("x3.txt", vec![1, 2, 3]);
        let y = SampleStream::new("y3.txt", vec![1, 2]);

        match Series::new(x, y) {
            Err(PipelineError::SeriesLengthMismatch { x_len, y_len, .. }) => {
                assert_eq!(x_len, 3);
                assert_eq!(y_len, 2);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_figure_point_count() {
        let series = Series::new(
            SampleStream::new("x", vec![1, 2]),
            SampleStream::new("y", vec![3, 4]),
        )
        .unwrap();
        let panel = Panel {
            series,
            y_label: "label".to_string(),
            color: MarkerColor::Red,
        };
        let figure = Figure::new(vec![panel.clone(), panel], "time");
        assert_eq!(figure.point_count(), 4);
        assert_eq!(figure.x_label, "time");
    }
}
