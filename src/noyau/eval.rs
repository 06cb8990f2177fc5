//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> Expr -> evalue(mode d’angle) -> fini ? -> arrondi(precision)
//!
//! Aucune exécution de code générique : la grammaire est fermée
//! (nombres, + - × ÷ ^, parenthèses, sin/cos/tan/log/ln/sqrt, π, e).

use log::debug;

use super::arrondi::arrondi_decimal;
use super::erreurs::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::options::OptionsEval;
use super::rpn::{format_rpn, from_rpn, to_rpn};

/// API publique : évalue une expression et retourne la valeur arrondie
/// à `options.precision` décimales.
///
/// - ExpressionMalformee : vide, jeton inconnu, parenthèses, opérande manquant
/// - ResultatNonFini     : NaN ou ±∞
pub fn eval_expression(expr_str: &str, options: &OptionsEval) -> Result<f64, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err("entrée vide".into());
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    debug!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    debug!("rpn: {}", format_rpn(&rpn));

    // 3) AST
    let expr = from_rpn(&rpn)?;
    debug!(
        "expr: {expr} ({} trig, mode {:?})",
        expr.nb_trig(),
        options.mode_angle
    );

    // 4) Valeur brute
    let brute = expr.evalue(options.mode_angle);
    if !brute.is_finite() {
        return Err(ErreurEval::ResultatNonFini);
    }

    // 5) Arrondi
    arrondi_decimal(brute, options.precision.decimales()).ok_or(ErreurEval::ResultatNonFini)
}
