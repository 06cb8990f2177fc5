//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - saisie.rs       : accumulateur d’expression (Vide / EnCours / Erreur)
//! - jetons.rs       : tokenisation (× ÷ π e √ compris)
//! - rpn.rs          : shunting-yard + construction Expr
//! - expr.rs         : AST f64 + évaluation selon le mode d’angle
//! - arrondi.rs      : arrondi à la précision + texte du résultat
//! - eval.rs         : pipeline complet
//! - historique.rs   : 20 derniers calculs, plus récent en tête
//! - export.rs       : CSV / texte de l’historique
//! - calculatrice.rs : orchestration (ce que la vue appelle)

pub mod arrondi;
pub mod calculatrice;
pub mod erreurs;
pub mod eval;
pub mod export;
pub mod expr;
pub mod historique;
pub mod jetons;
pub mod options;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::Calculatrice;
pub use options::{ModeAngle, Precision};
