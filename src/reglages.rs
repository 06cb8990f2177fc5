//! src/reglages.rs
//!
//! Réglages de démarrage, lus UNE fois dans `calculatrice.toml`
//! (ou le chemin de la variable CALCULATRICE_CONFIG).
//!
//! Contrats :
//! - fichier absent => valeurs par défaut, sans bruit
//! - fichier illisible / invalide => erreur typée ; main.rs avertit (une fois le
//!   journal démarré) et garde les valeurs par défaut
//! - rien n’est jamais réécrit (pas de persistance)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::noyau::erreurs::ErreurReglage;
use crate::noyau::options::{ModeAngle, OptionsEval, Precision};

pub const FICHIER_REGLAGES: &str = "calculatrice.toml";
pub const VAR_ENV_REGLAGES: &str = "CALCULATRICE_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    pub precision: Precision,
    pub mode_angle: ModeAngle,
    pub theme_sombre: bool,
    pub niveau_journal: String,
    pub dossier_export: PathBuf,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            mode_angle: ModeAngle::default(),
            theme_sombre: false,
            niveau_journal: "info".to_string(),
            dossier_export: PathBuf::from("."),
        }
    }
}

impl Reglages {
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglage> {
        Ok(toml::from_str(texte)?)
    }

    pub fn depuis_fichier(chemin: &Path) -> Result<Self, ErreurReglage> {
        let texte = fs::read_to_string(chemin)?;
        Self::depuis_toml(&texte)
    }

    /// Chemin effectif : variable d’environnement, sinon `./calculatrice.toml`.
    pub fn chemin_par_defaut() -> PathBuf {
        std::env::var_os(VAR_ENV_REGLAGES)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(FICHIER_REGLAGES))
    }

    /// Fichier absent => valeurs par défaut ; sinon le contenu doit être valide.
    pub fn charger_depuis(chemin: &Path) -> Result<Self, ErreurReglage> {
        if !chemin.exists() {
            return Ok(Self::default());
        }
        Self::depuis_fichier(chemin)
    }

    pub fn charger() -> Result<Self, ErreurReglage> {
        Self::charger_depuis(&Self::chemin_par_defaut())
    }

    pub fn options_eval(&self) -> OptionsEval {
        OptionsEval::new(self.precision, self.mode_angle)
    }
}
