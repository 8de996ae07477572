// ============================================================================
// Module : refresh
// ============================================================================
// Régénère les fichiers d'entrée avant la lecture (script externe info.sh)
//
// CONCEPTS RUST :
// 1. Trait : le rafraîchissement est un collaborateur injectable
//    (ScriptRefresh en production, NoRefresh ou un faux dans les tests)
// 2. impl Future dans un trait : méthode async sans Box ni macro
// 3. tokio::process : attendre un processus enfant sans bloquer le runtime
// ============================================================================

pub mod script; // Exécution du script externe

use std::future::Future;

pub use script::ScriptRefresh;

/// Résultat d'un rafraîchissement
///
/// Aucun de ces cas n'arrête le pipeline : les données éventuellement
/// périmées sont tracées quand même.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Le script s'est terminé avec ce code de retour
    Exited(i32),

    /// Le script a été tué par un signal (pas de code de retour)
    Signalled,

    /// Le script n'a pas pu être lancé (sh introuvable)
    SpawnFailed(String),

    /// L'attente du script a échoué
    WaitFailed(String),

    /// Le délai a expiré, le script a été tué
    TimedOut,

    /// Aucun rafraîchissement configuré
    Skipped,
}

impl RefreshOutcome {
    /// Vrai seulement si le script s'est terminé avec le code 0
    pub fn is_success(&self) -> bool {
        matches!(self, RefreshOutcome::Exited(0))
    }
}

/// Collaborateur qui régénère les fichiers d'entrée
pub trait DataRefresh {
    /// Lance le rafraîchissement et attend qu'il se termine
    fn refresh(&self) -> impl Future<Output = RefreshOutcome> + Send;
}

/// Pas de rafraîchissement : les fichiers sont lus tels quels
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRefresh;

impl DataRefresh for NoRefresh {
    async fn refresh(&self) -> RefreshOutcome {
        RefreshOutcome::Skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_refresh_is_skipped() {
        let outcome = NoRefresh.refresh().await;
        assert_eq!(outcome, RefreshOutcome::Skipped);
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_is_success() {
        assert!(RefreshOutcome::Exited(0).is_success());
        assert!(!RefreshOutcome::Exited(2).is_success());
        assert!(!RefreshOutcome::TimedOut.is_success());
    }
}
