//! Erreurs typées du noyau.
//!
//! - ErreurEval    : échec d’évaluation (jamais affiché tel quel : l’UI montre "Error")
//! - ErreurReglage : précision hors ensemble, réglages illisibles
//! - ErreurExport  : historique vide, écriture CSV

use thiserror::Error;

/// Échec d’évaluation d’une expression.
///
/// Les deux cas sont traités pareil côté saisie (sentinelle "Error"),
/// mais on garde la distinction pour le journal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Entrée vide, caractère inconnu, parenthèses déséquilibrées, opérande manquant…
    #[error("expression malformée: {0}")]
    ExpressionMalformee(String),

    /// NaN ou ±∞ (division par zéro, log(0), sqrt(-1), dépassement).
    #[error("résultat non fini")]
    ResultatNonFini,
}

impl From<String> for ErreurEval {
    fn from(detail: String) -> Self {
        ErreurEval::ExpressionMalformee(detail)
    }
}

impl From<&str> for ErreurEval {
    fn from(detail: &str) -> Self {
        ErreurEval::ExpressionMalformee(detail.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ErreurReglage {
    #[error("précision {0} non autorisée (2, 4, 6, 8 ou 10)")]
    PrecisionInvalide(u8),

    #[error("mode d’angle inconnu: {0}")]
    ModeAngleInconnu(String),

    #[error("réglages illisibles: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("lecture des réglages impossible: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ErreurExport {
    #[error("aucun calcul dans l’historique")]
    HistoriqueVide,

    #[error("écriture CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("écriture du fichier: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV non UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
