// ============================================================================
// ScriptRefresh : exécute le script de régénération des données
// ============================================================================
// Lance le script sans arguments, dans le répertoire courant, et attend sa
// fin. Le code de retour est journalisé mais jamais utilisé pour arrêter le
// pipeline.
//
// Le script passe par `sh -c`, comme un appel system() : un fichier sans
// ligne #! est exécuté par sh, un fichier avec #! par son interpréteur.
//
// CONCEPT : Timeout optionnel
// - None : attente illimitée (un script bloqué bloque le programme)
// - Some(d) : le script est tué après d, et on continue
// ============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::process::Command;
use tracing::{info, instrument, warn};

use super::{DataRefresh, RefreshOutcome};

/// Shell utilisé pour lancer le script
const SHELL: &str = "sh";

/// Rafraîchissement par script externe (./info.sh par défaut)
#[derive(Debug, Clone)]
pub struct ScriptRefresh {
    script: PathBuf,
    timeout: Option<Duration>,
}

impl ScriptRefresh {
    /// Crée un rafraîchissement sans limite de temps
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            timeout: None,
        }
    }

    /// Fixe (ou retire) la limite de temps
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn script(&self) -> &Path {
        &self.script
    }
}

impl DataRefresh for ScriptRefresh {
    #[instrument(skip(self), fields(script = %self.script.display(), timeout = ?self.timeout))]
    async fn refresh(&self) -> RefreshOutcome {
        info!("Running refresh script");

        // CONCEPT : "$0" plutôt que le chemin dans la commande
        // - Le chemin arrive en argument, sh n'a rien à interpréter (espaces, quotes)
        // CONCEPT : kill_on_drop
        // - Si la future est abandonnée, le processus enfant est tué
        let mut child = match Command::new(SHELL)
            .arg("-c")
            .arg("\"$0\"")
            .arg(&self.script)
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                warn!(error = %e, "Refresh script could not be started, continuing with existing data");
                return RefreshOutcome::SpawnFailed(e.to_string());
            }
        };

        let status = match self.timeout {
            None => child.wait().await,
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status,
                Err(_) => {
                    warn!(?limit, "Refresh script timed out, killing it");
                    if let Err(e) = child.kill().await {
                        warn!(error = %e, "Failed to kill refresh script");
                    }
                    return RefreshOutcome::TimedOut;
                }
            },
        };

        match status {
            Ok(status) => match status.code() {
                Some(0) => {
                    info!("Refresh script finished");
                    RefreshOutcome::Exited(0)
                }
                Some(code) => {
                    warn!(code, "Refresh script exited with non-zero status, data may be stale");
                    RefreshOutcome::Exited(code)
                }
                None => {
                    warn!("Refresh script terminated by signal, data may be stale");
                    RefreshOutcome::Signalled
                }
            },
            Err(e) => {
                warn!(error = %e, "Failed to wait for refresh script");
                RefreshOutcome::WaitFailed(e.to_string())
            }
        }
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Écrit un script shell exécutable dans `dir`
    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        write_executable(dir, name, &format!("#!/bin/sh\n{}\n", body))
    }

    /// Écrit `content` tel quel (sans ligne #! ajoutée) et le rend exécutable
    fn write_executable(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn test_script_runs() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");
        let script = write_script(
            dir.path(),
            "info.sh",
            &format!("touch '{}'", marker.display()),
        );

        let outcome = ScriptRefresh::new(&script).refresh().await;

        assert_eq!(outcome, RefreshOutcome::Exited(0));
        assert!(marker.exists());
    }

    #[tokio::test]
    async fn test_script_without_shebang_runs_with_sh() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");
        let script = write_executable(
            dir.path(),
            "info.sh",
            &format!("touch '{}'\n", marker.display()),
        );

        let outcome = ScriptRefresh::new(&script).refresh().await;

        assert_eq!(outcome, RefreshOutcome::Exited(0));
        assert!(marker.exists());
    }

    #[tokio::test]
    async fn test_script_path_with_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("data dir");
        std::fs::create_dir(&sub).unwrap();
        let marker = dir.path().join("ran");
        let script = write_script(&sub, "info.sh", &format!("touch '{}'", marker.display()));

        let outcome = ScriptRefresh::new(&script).refresh().await;

        assert_eq!(outcome, RefreshOutcome::Exited(0));
        assert!(marker.exists());
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "info.sh", "exit 3");

        let outcome = ScriptRefresh::new(&script).refresh().await;
        assert_eq!(outcome, RefreshOutcome::Exited(3));
    }

    #[tokio::test]
    async fn test_missing_script_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let refresh = ScriptRefresh::new(dir.path().join("info.sh"));

        // sh signale une commande introuvable par le code 127
        let outcome = refresh.refresh().await;
        assert_eq!(outcome, RefreshOutcome::Exited(127));
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn test_timeout_kills_script() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "info.sh", "sleep 10");

        let refresh =
            ScriptRefresh::new(&script).with_timeout(Some(Duration::from_millis(200)));

        let started = std::time::Instant::now();
        let outcome = refresh.refresh().await;

        assert_eq!(outcome, RefreshOutcome::TimedOut);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
