// ============================================================================
// Configuration
// ============================================================================
// Les chemins étaient codés en dur ; ils deviennent des paramètres avec les
// mêmes valeurs par défaut :
//   ../source/x1.txt, y1.txt, y2.txt, x3.txt, y3.txt
//   ./info.sh
//   plots/graph<HH:MM:SS>.png
//
// Un fichier cafeplot.json dans le répertoire courant peut surcharger tout
// ou partie de ces valeurs.
//
// CONCEPT RUST : #[serde(default)]
// - Les champs absents du JSON prennent la valeur de Default::default()
// - Un fichier partiel ne surcharge que ce qu'il nomme
// ============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PipelineError;
use crate::models::{MarkerColor, SampleSource};
use crate::plot::FigureLayout;

/// Nom du fichier de configuration cherché dans le répertoire courant
pub const CONFIG_FILE: &str = "cafeplot.json";

/// Nombre de panneaux de la figure
pub const PANEL_COUNT: usize = 3;

/// Description d'un sous-graphique
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Source des abscisses (temps)
    pub x: SampleSource,

    /// Source des ordonnées (compteurs)
    pub y: SampleSource,

    /// Libellé de l'axe Y
    pub y_label: String,

    /// Couleur des marqueurs
    pub color: MarkerColor,
}

/// Configuration complète du programme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Script lancé avant la lecture (None : pas de rafraîchissement)
    pub refresh_script: Option<PathBuf>,

    /// Limite de temps du script, en secondes (None : attente illimitée)
    pub refresh_timeout_secs: Option<u64>,

    /// Les panneaux, de haut en bas
    pub panels: Vec<PanelConfig>,

    /// Répertoire des images (doit exister)
    pub output_dir: PathBuf,

    /// Préfixe du nom de fichier, suivi de HH:MM:SS
    pub file_prefix: String,

    /// Libellé de l'axe X du dernier panneau
    pub x_label: String,

    /// Dimensions de l'image
    pub layout: FigureLayout,
}

impl Default for Config {
    fn default() -> Self {
        // x2 = x1 : les deux premiers panneaux partagent la même horloge
        let x1 = SampleSource::new("../source/x1.txt", ':');

        Self {
            refresh_script: Some(PathBuf::from("./info.sh")),
            refresh_timeout_secs: None,
            panels: vec![
                PanelConfig {
                    x: x1.clone(),
                    y: SampleSource::plain("../source/y1.txt"),
                    y_label: "# of students at counter".to_string(),
                    color: MarkerColor::Red,
                },
                PanelConfig {
                    x: x1,
                    y: SampleSource::new("../source/y2.txt", '='),
                    y_label: "# of plates at counter".to_string(),
                    color: MarkerColor::Blue,
                },
                PanelConfig {
                    x: SampleSource::new("../source/x3.txt", ':'),
                    y: SampleSource::new("../source/y3.txt", '='),
                    y_label: "# of plates at kitchen".to_string(),
                    color: MarkerColor::Green,
                },
            ],
            output_dir: PathBuf::from("plots"),
            file_prefix: "graph".to_string(),
            x_label: "time".to_string(),
            layout: FigureLayout::default(),
        }
    }
}

impl Config {
    /// Charge la configuration depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Parse et valide une configuration JSON
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text).context("parsing JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Charge `path` s'il existe, sinon retourne la configuration par défaut
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            info!(path = %path.display(), "Loading configuration file");
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Vérifie que la figure a exactement 3 panneaux
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.panels.len() != PANEL_COUNT {
            return Err(PipelineError::PanelCount {
                expected: PANEL_COUNT,
                found: self.panels.len(),
            });
        }
        Ok(())
    }

    /// Limite de temps du script de rafraîchissement
    pub fn refresh_timeout(&self) -> Option<Duration> {
        self.refresh_timeout_secs.map(Duration::from_secs)
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
