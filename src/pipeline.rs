// ============================================================================
// Pipeline : rafraîchir -> lire -> tracer
// ============================================================================
// Déroulement strictement séquentiel :
// 1. Rafraîchissement des données (son échec n'arrête rien)
// 2. Lecture des flux x et y de chaque panneau
// 3. Vérification des longueurs, construction de la figure
// 4. Rendu dans <output_dir>/<prefix><HH:MM:SS>.png
//
// CONCEPT RUST : Générique sur un trait
// - run<R: DataRefresh> accepte n'importe quel rafraîchissement
// - Le binaire passe ScriptRefresh, les tests un faux
// ============================================================================

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::models::{Figure, Panel, Series};
use crate::plot::{output_path, render_figure};
use crate::refresh::{DataRefresh, RefreshOutcome};
use crate::source::read_samples;

/// Bilan d'une exécution
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Image écrite
    pub output: PathBuf,

    /// Résultat du rafraîchissement (informatif seulement)
    pub refresh: RefreshOutcome,

    /// Nombre total de points tracés
    pub points: usize,
}

/// Exécute le pipeline complet
///
/// `now` donne l'heure utilisée dans le nom de l'image.
#[instrument(skip_all, fields(output_dir = %config.output_dir.display()))]
pub async fn run<R: DataRefresh>(
    config: &Config,
    refresher: &R,
    now: NaiveTime,
) -> Result<RunReport> {
    config.validate()?;

    let refresh = refresher.refresh().await;
    match &refresh {
        RefreshOutcome::Exited(0) | RefreshOutcome::Skipped => {
            debug!(outcome = ?refresh, "Refresh step done")
        }
        other => warn!(outcome = ?other, "Refresh did not succeed, plotting existing data"),
    }

    let figure = load_figure(config)?;
    let output = output_path(&config.output_dir, &config.file_prefix, now);

    render_figure(&figure, &output, &config.layout)
        .with_context(|| format!("rendering {}", output.display()))?;

    info!(output = %output.display(), points = figure.point_count(), "Plot saved");
    Ok(RunReport {
        output,
        refresh,
        points: figure.point_count(),
    })
}

/// Lit tous les fichiers d'entrée et construit la figure
///
/// Chaque fichier est lu entièrement (puis fermé) avant le suivant.
pub fn load_figure(config: &Config) -> Result<Figure> {
    let mut panels = Vec::with_capacity(config.panels.len());

    for (i, panel) in config.panels.iter().enumerate() {
        let x = read_samples(&panel.x).with_context(|| format!("panel {}: x samples", i + 1))?;
        let y = read_samples(&panel.y).with_context(|| format!("panel {}: y samples", i + 1))?;
        debug!(panel = i + 1, x = x.len(), y = y.len(), "Loaded series");

        let series = Series::new(x, y).with_context(|| format!("panel {}", i + 1))?;
        panels.push(Panel {
            series,
            y_label: panel.y_label.clone(),
            color: panel.color,
        });
    }

    Ok(Figure::new(panels, config.x_label.clone()))
}

// ============================================================================
// Tests unitaires
// ============================================================================
