//! src/noyau/saisie.rs
//!
//! Accumulateur de saisie : l’expression se construit jeton par jeton.
//!
//! Contrats :
//! - Aucune validation ici : une concaténation absurde échouera à l’évaluation.
//! - `expression` ne contient jamais la sentinelle "Error".
//! - Vide <-> affichage "0".
//!
//! États : Vide -> EnCours -> (évaluation) EnCours | Erreur ; Erreur -> EnCours au jeton suivant.

/// Affichage après un échec d’évaluation.
pub const SENTINELLE_ERREUR: &str = "Error";

/// Affichage d’une expression vide.
pub const AFFICHAGE_VIDE: &str = "0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EtatSaisie {
    Vide,
    EnCours,
    Erreur,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Saisie {
    display: String,
    expression: String,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            display: AFFICHAGE_VIDE.to_string(),
            expression: String::new(),
        }
    }
}

impl Saisie {
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn etat(&self) -> EtatSaisie {
        if self.display == SENTINELLE_ERREUR {
            EtatSaisie::Erreur
        } else if self.expression.is_empty() {
            EtatSaisie::Vide
        } else {
            EtatSaisie::EnCours
        }
    }

    /// Ajoute un jeton.
    /// - sur "Error" : effacement implicite d’abord
    /// - sur l’expression "0" : remplacement (pas de "07")
    pub fn ajouter(&mut self, jeton: &str) {
        if self.display == SENTINELLE_ERREUR {
            self.effacer();
        }

        if self.expression == AFFICHAGE_VIDE {
            self.expression = jeton.to_string();
        } else {
            self.expression.push_str(jeton);
        }
        self.display = self.expression.clone();
    }

    /// Retire exactement un caractère final (π, ×, ÷ compris). Sans effet si vide.
    pub fn supprimer_dernier(&mut self) {
        if self.expression.pop().is_none() {
            return;
        }
        self.display = if self.expression.is_empty() {
            AFFICHAGE_VIDE.to_string()
        } else {
            self.expression.clone()
        };
    }

    /// C : tout remettre à zéro. Totale.
    pub fn effacer(&mut self) {
        self.display = AFFICHAGE_VIDE.to_string();
        self.expression.clear();
    }

    pub fn set_display(&mut self, texte: impl Into<String>) {
        self.display = texte.into();
    }

    /// La sentinelle n’entre jamais dans l’expression.
    pub fn set_expression(&mut self, texte: impl Into<String>) {
        let texte = texte.into();
        if texte == SENTINELLE_ERREUR {
            self.expression.clear();
        } else {
            self.expression = texte;
        }
    }

    /// Utilitaire : publier un échec (affichage "Error", expression vidée).
    pub fn set_erreur(&mut self) {
        self.display = SENTINELLE_ERREUR.to_string();
        self.expression.clear();
    }

    /// Utilitaire : publier un résultat (affichage + expression = résultat, pour enchaîner).
    pub fn set_resultat(&mut self, resultat: &str) {
        self.set_display(resultat);
        self.set_expression(resultat);
    }
}
