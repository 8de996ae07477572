// ============================================================================
// cafeplot - Graphiques de la simulation de cantine
// ============================================================================
// Régénère les fichiers de mesures (info.sh), les lit, puis trace trois
// nuages de points empilés dans plots/graph<HH:MM:SS>.png :
//   1. nombre d'étudiants au comptoir
//   2. nombre d'assiettes au comptoir
//   3. nombre d'assiettes en cuisine
//
// CONCEPTS RUST CLÉS :
// 1. Async dans sync : runtime tokio mono-thread + block_on
// 2. Injection de dépendance : ScriptRefresh ou NoRefresh selon la config
// 3. anyhow : la chaîne d'erreurs complète est affichée en cas d'échec
// ============================================================================

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info};

use cafeplot::config::{Config, CONFIG_FILE};
use cafeplot::pipeline::{run, RunReport};
use cafeplot::refresh::{NoRefresh, RefreshOutcome, ScriptRefresh};

// ============================================================================
// Logging
// ============================================================================
// - Logs dans un fichier (pas dans le terminal)
// - Rotation quotidienne automatique des logs
// ============================================================================

/// Répertoire des logs
///
/// - Linux : ~/.local/share/cafeplot/logs
/// - macOS : ~/Library/Application Support/cafeplot/logs
/// - Sinon : ./logs
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("cafeplot").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialise le système de logging vers fichier
///
/// CONCEPT RUST : Tracing subscriber
/// - Registry : point central des logs
/// - Layer : transforme et route les logs
/// - EnvFilter : filtre par niveau (RUST_LOG env var)
/// - RollingFileAppender : rotation automatique
///
/// ```bash
/// RUST_LOG=cafeplot=trace cafeplot
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "cafeplot.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour cafeplot, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cafeplot=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'initialisation du subscriber")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // Si le logging échoue, on prévient et on continue quand même
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!("cafeplot starting up");

    let config = Config::load_or_default(Path::new(CONFIG_FILE))?;

    // CONCEPT : Runtime mono-thread
    // - Tout est séquentiel, le runtime sert seulement à attendre le script
    //   (avec timeout optionnel)
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Échec de la création du runtime tokio")?;

    // Heure locale au lancement : elle donne le nom de l'image
    let now = chrono::Local::now().time();

    let result = match &config.refresh_script {
        Some(script) => {
            println!("🔄 Rafraîchissement des données ({})...", script.display());
            let refresher = ScriptRefresh::new(script).with_timeout(config.refresh_timeout());
            runtime.block_on(run(&config, &refresher, now))
        }
        None => runtime.block_on(run(&config, &NoRefresh, now)),
    };

    match result {
        Ok(report) => {
            print_report(&report);
            info!("cafeplot exited normally");
            Ok(())
        }
        Err(e) => {
            error!(error = ?e, "cafeplot exited with error");
            Err(e)
        }
    }
}

/// Affiche le bilan pour l'utilisateur
fn print_report(report: &RunReport) {
    match &report.refresh {
        RefreshOutcome::Exited(0) | RefreshOutcome::Skipped => {}
        other => println!("⚠️  Rafraîchissement en échec ({:?}), données possiblement périmées", other),
    }
    println!(
        "✅ Graphique enregistré : {} ({} points)",
        report.output.display(),
        report.points
    );
}
