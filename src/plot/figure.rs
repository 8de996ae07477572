// ============================================================================
// Rendu de la figure : nuages de points empilés dans une image PNG
// ============================================================================
// Une figure = N panneaux (3 en pratique) empilés verticalement.
// Chaque panneau : des cercles de couleur, un libellé d'axe Y.
// Le libellé de l'axe X n'apparaît que sous le dernier panneau.
//
// CONCEPTS PLOTTERS :
// 1. BitMapBackend : dessine dans un buffer, écrit le PNG au present()
// 2. split_evenly : découpe la zone de dessin en sous-zones
// 3. ChartBuilder : axes + marges + zone des labels
// ============================================================================

use std::ops::Range;
use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{debug, info, instrument};

use crate::error::PipelineError;
use crate::models::{Figure, MarkerColor, Panel};
use crate::plot::FigureLayout;

/// Rayon des marqueurs, en pixels
const MARKER_SIZE: i32 = 4;

/// Construit le chemin de sortie : `<dir>/<prefix><HH:MM:SS>.png`
///
/// L'heure dans le nom évite d'écraser les images des exécutions précédentes.
///
/// # Exemple
/// ```
/// use chrono::NaiveTime;
/// use std::path::{Path, PathBuf};
///
/// let time = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
/// let path = cafeplot::plot::output_path(Path::new("plots"), "graph", time);
/// assert_eq!(path, PathBuf::from("plots/graph09:05:07.png"));
/// ```
pub fn output_path(dir: &Path, prefix: &str, time: NaiveTime) -> PathBuf {
    dir.join(format!("{}{}.png", prefix, time.format("%H:%M:%S")))
}

/// Dessine la figure et l'écrit dans `path`
///
/// Le répertoire de `path` doit déjà exister : il n'est jamais créé.
#[instrument(skip_all, fields(path = %path.display(), panels = figure.panels.len()))]
pub fn render_figure(
    figure: &Figure,
    path: &Path,
    layout: &FigureLayout,
) -> Result<(), PipelineError> {
    ensure_parent_dir(path)?;

    let (width, height) = layout.pixel_size();
    debug!(width, height, points = figure.point_count(), "Rendering figure");

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    // CONCEPT RUST : max(1)
    // - split_evenly((0, 1)) n'a pas de sens, une figure vide reste une zone
    let rows = figure.panels.len().max(1);
    let areas = root.split_evenly((rows, 1));

    let last = figure.panels.len().saturating_sub(1);
    for (i, (panel, area)) in figure.panels.iter().zip(areas.iter()).enumerate() {
        let x_label = (i == last).then_some(figure.x_label.as_str());
        draw_panel(area, panel, x_label)?;
    }

    root.present().map_err(render_error)?;
    info!("Figure written");
    Ok(())
}

/// Vérifie que le répertoire de sortie existe
fn ensure_parent_dir(path: &Path) -> Result<(), PipelineError> {
    // Un chemin sans parent ("graph.png") vise le répertoire courant
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(()),
    };

    if dir.is_dir() {
        Ok(())
    } else {
        Err(PipelineError::DirectoryNotFound(dir.to_path_buf()))
    }
}

/// Dessine un panneau (nuage de points) dans sa sous-zone
fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    panel: &Panel,
    x_label: Option<&str>,
) -> Result<(), PipelineError> {
    let x_range = axis_range(panel.series.x().bounds());
    let y_range = axis_range(panel.series.y().bounds());

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_error)?;

    let mut mesh = chart.configure_mesh();
    mesh.y_desc(panel.y_label.as_str());
    if let Some(label) = x_label {
        mesh.x_desc(label);
    }
    mesh.draw().map_err(render_error)?;

    let color = marker_rgb(panel.color);
    chart
        .draw_series(
            panel
                .series
                .points()
                .map(|point| Circle::new(point, MARKER_SIZE, color.filled())),
        )
        .map_err(render_error)?;

    Ok(())
}

/// Intervalle d'axe à partir des bornes des données, avec une marge de 5%
///
/// - Pas de données : intervalle unité 0..1
/// - Une seule valeur : marge de 1 de chaque côté
/// - Les échantillons sont positifs : la borne basse s'arrête à 0
pub(crate) fn axis_range(bounds: Option<(u64, u64)>) -> Range<u64> {
    match bounds {
        None => 0..1,
        Some((min, max)) => {
            let pad = ((max - min) / 20).max(1);
            min.saturating_sub(pad)..max.saturating_add(pad)
        }
    }
}

fn marker_rgb(color: MarkerColor) -> RGBColor {
    match color {
        MarkerColor::Red => RED,
        MarkerColor::Blue => BLUE,
        MarkerColor::Green => GREEN,
        MarkerColor::Black => BLACK,
        MarkerColor::Magenta => MAGENTA,
        MarkerColor::Cyan => CYAN,
    }
}

fn render_error<E: std::fmt::Display>(e: E) -> PipelineError {
    PipelineError::Render(e.to_string())
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SampleStream, Series};

    fn panel(x: Vec<u64>, y: Vec<u64>, color: MarkerColor) -> Panel {
        Panel {
            series: Series::new(SampleStream::new("x", x), SampleStream::new("y", y)).unwrap(),
            y_label: "# of plates at kitchen".to_string(),
            color,
        }
    }

    #[test]
    fn test_output_path_zero_padded() {
        let time = NaiveTime::from_hms_opt(7, 3, 9).unwrap();
        let path = output_path(Path::new("plots"), "graph", time);
        assert_eq!(path, PathBuf::from("plots/graph07:03:09.png"));
    }

    #[test]
    fn test_output_path_ignores_subseconds() {
        let time = NaiveTime::from_hms_milli_opt(23, 59, 58, 999).unwrap();
        let path = output_path(Path::new("out"), "run-", time);
        assert_eq!(path, PathBuf::from("out/run-23:59:58.png"));
    }

    #[test]
    fn test_axis_range() {
        assert_eq!(axis_range(None), 0..1);
        assert_eq!(axis_range(Some((5, 5))), 4..6);
        assert_eq!(axis_range(Some((0, 200))), 0..210);
        assert_eq!(axis_range(Some((100, 300))), 90..310);
        assert_eq!(axis_range(Some((0, u64::MAX))), 0..u64::MAX);
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plots").join("graph12:00:00.png");
        let figure = Figure::new(vec![panel(vec![1], vec![1], MarkerColor::Red)], "time");

        match render_figure(&figure, &path, &FigureLayout::default()) {
            Err(PipelineError::DirectoryNotFound(missing)) => {
                assert_eq!(missing, dir.path().join("plots"));
            }
            other => panic!("expected DirectoryNotFound, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.png");
        let figure = Figure::new(
            vec![
                panel(vec![1, 2, 3], vec![0, 2, 1], MarkerColor::Red),
                panel(vec![1, 2, 3], vec![3, 3, 0], MarkerColor::Blue),
                panel(Vec::new(), Vec::new(), MarkerColor::Green),
            ],
            "time",
        );
        let layout = FigureLayout {
            width_in: 4.0,
            height_in: 4.0,
            dpi: 50,
        };

        render_figure(&figure, &path, &layout).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
