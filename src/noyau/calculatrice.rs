//! src/noyau/calculatrice.rs
//!
//! Orchestration : saisie + évaluation + historique + options.
//!
//! C’est la seule surface que la vue appelle. Toutes les mutations passent
//! par `&mut self` (un seul propriétaire : l’état UI), donc aucun verrou.
//!
//! Sur "=" :
//! - succès : affichage = expression = résultat (calcul enchaîné) ; historique += (expr, résultat)
//! - échec  : affichage = "Error", expression vidée ; rien dans l’historique

use log::{info, warn};

use super::arrondi::format_resultat;
use super::erreurs::ErreurEval;
use super::eval::eval_expression;
use super::historique::{EntreeHistorique, Historique};
use super::options::{ModeAngle, OptionsEval, Precision};
use super::saisie::{EtatSaisie, Saisie};

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    saisie: Saisie,
    historique: Historique,
    options: OptionsEval,
}

impl Calculatrice {
    pub fn new(options: OptionsEval) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn display(&self) -> &str {
        self.saisie.display()
    }

    pub fn expression(&self) -> &str {
        self.saisie.expression()
    }

    pub fn etat(&self) -> EtatSaisie {
        self.saisie.etat()
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    pub fn precision(&self) -> Precision {
        self.options.precision
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.options.mode_angle
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn ajouter_jeton(&mut self, jeton: &str) {
        self.saisie.ajouter(jeton);
    }

    pub fn supprimer_dernier(&mut self) {
        self.saisie.supprimer_dernier();
    }

    pub fn effacer(&mut self) {
        self.saisie.effacer();
    }

    /// Rappelle l’expression d’un calcul passé (passe par l’ajout normal).
    /// Retourne false si l’index n’existe pas.
    pub fn rappeler(&mut self, index: usize) -> bool {
        let Some(expr) = self.historique.get(index).map(|e| e.expression().to_string()) else {
            return false;
        };
        self.saisie.ajouter(&expr);
        true
    }

    /* ------------------------ "=" ------------------------ */

    /// Évalue l’expression courante. Sans effet si elle est vide.
    ///
    /// L’erreur est rendue pour le journal / les tests ; l’affichage,
    /// lui, ne montre que la sentinelle.
    pub fn evaluer_courant(&mut self) -> Option<Result<f64, ErreurEval>> {
        let expr = self.saisie.expression().to_string();
        if expr.is_empty() {
            return None;
        }

        let res = eval_expression(&expr, &self.options);
        match &res {
            Ok(v) => {
                let txt = format_resultat(*v);
                info!("{expr} = {txt}");
                self.saisie.set_resultat(&txt);
                self.historique.ajouter(&expr, &txt);
            }
            Err(e) => {
                warn!("{expr} : {e}");
                self.saisie.set_erreur();
            }
        }
        Some(res)
    }

    /* ------------------------ Options ------------------------ */

    /// La validation (2/4/6/8/10) est faite à la construction de `Precision`.
    pub fn set_precision(&mut self, precision: Precision) {
        self.options.precision = precision;
        info!("précision: {precision} décimales");
    }

    pub fn set_mode_angle(&mut self, mode: ModeAngle) {
        self.options.mode_angle = mode;
        info!("mode d’angle: {}", mode.libelle());
    }

    pub fn basculer_mode_angle(&mut self) {
        self.set_mode_angle(self.options.mode_angle.basculer());
    }

    /* ------------------------ Historique ------------------------ */

    pub fn effacer_historique(&mut self) {
        info!("historique effacé ({} calculs)", self.historique.len());
        self.historique.effacer();
    }

    pub fn entrees_historique(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.historique.liste()
    }
}
