//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la `Calculatrice` (seul propriétaire => mutations sérialisées
//! par la boucle de frames) + ce qui n’appartient qu’à l’écran : onglet courant,
//! thème, confirmation d’effacement, retour d’export.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Calculatrice`.
//! - Actions déterministes, sans effet de bord caché.

use std::path::PathBuf;

use log::warn;

use crate::noyau::erreurs::ErreurExport;
use crate::noyau::export::{ecrire_csv, export_csv, export_texte};
use crate::noyau::Calculatrice;
use crate::reglages::Reglages;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Onglet {
    #[default]
    Calcul,
    Historique,
    Reglages,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- moteur ---
    pub calc: Calculatrice,

    // --- navigation / apparence ---
    pub onglet: Onglet,
    pub theme_sombre: bool,

    // --- historique ---
    pub confirmer_effacement: bool,
    pub dossier_export: PathBuf,
    pub message_export: String,
    /// Repli sans fichier (web) : texte à copier.
    pub texte_export: Option<String>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_reglages(&Reglages::default())
    }
}

impl AppCalc {
    pub fn depuis_reglages(r: &Reglages) -> Self {
        Self {
            calc: Calculatrice::new(r.options_eval()),
            onglet: Onglet::default(),
            theme_sombre: r.theme_sombre,
            confirmer_effacement: false,
            dossier_export: r.dossier_export.clone(),
            message_export: String::new(),
            texte_export: None,
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Clic sur une entrée d’historique : on la rappelle et on revient au pavé.
    pub fn rappeler(&mut self, index: usize) {
        if self.calc.rappeler(index) {
            self.onglet = Onglet::Calcul;
        }
    }

    pub fn demander_effacement_historique(&mut self) {
        self.confirmer_effacement = true;
    }

    pub fn confirmer_effacement_historique(&mut self, oui: bool) {
        if oui {
            self.calc.effacer_historique();
            self.message_export.clear();
            self.texte_export = None;
        }
        self.confirmer_effacement = false;
    }

    /// Export natif : fichier CSV dans le dossier configuré.
    pub fn exporter_fichier(&mut self) {
        self.texte_export = None;
        self.message_export = match ecrire_csv(self.calc.historique(), &self.dossier_export) {
            Ok(chemin) => format!("History downloaded: {}", chemin.display()),
            Err(e) => Self::message_erreur_export(e),
        };
    }

    /// Export sans fichier (seul export côté web) : le CSV à copier,
    /// au même format que le fichier natif.
    pub fn exporter_csv_texte(&mut self) {
        self.publier_texte(export_csv(self.calc.historique()));
    }

    /// Variante lisible : `expr = result (timestamp)` par ligne.
    pub fn exporter_texte(&mut self) {
        self.publier_texte(export_texte(self.calc.historique()));
    }

    fn publier_texte(&mut self, texte: Result<String, ErreurExport>) {
        match texte {
            Ok(t) => {
                self.texte_export = Some(t);
                self.message_export = "Copy this history:".to_string();
            }
            Err(e) => {
                self.texte_export = None;
                self.message_export = Self::message_erreur_export(e);
            }
        }
    }

    fn message_erreur_export(e: ErreurExport) -> String {
        match e {
            ErreurExport::HistoriqueVide => "No history to download".to_string(),
            autre => {
                warn!("export: {autre}");
                "Failed to download history".to_string()
            }
        }
    }
}
