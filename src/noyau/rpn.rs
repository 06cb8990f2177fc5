// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name) : fonction unaire, DOIT être suivie de '(' ; sortie après la ')' fermante
// - Moins unaire : opérateur préfixe Neg (sous ^ : "-2^2" => -(2^2))
// - Plus unaire : ignoré
// - Pas de multiplication implicite : "2π", "3(4)", ")(" sont refusés
//
// Garde-fous (l’AST est évalué / affiché / libéré récursivement) :
// - MAX_JETONS      : au-delà, refus avant toute construction
// - MAX_PROFONDEUR  : profondeur d’arbre max, vérifiée pendant from_rpn

use super::expr::{Expr, Fonction};
use super::jetons::Tok;

pub const MAX_JETONS: usize = 200_000;
pub const MAX_PROFONDEUR: usize = 1024;

/// Élément RPN : un jeton d’entrée, ou le moins unaire (qui n’existe pas au tokenizer).
#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Tok(Tok),
    Neg,
}

fn precedence(t: &Rpn) -> i32 {
    match t {
        Rpn::Tok(Tok::Plus | Tok::Minus) => 1,
        Rpn::Tok(Tok::Star | Tok::Slash) => 2,
        Rpn::Neg => 3,
        Rpn::Tok(Tok::Caret) => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Rpn) -> bool {
    matches!(t, Rpn::Tok(Tok::Caret))
}

fn is_fonction(t: &Rpn) -> bool {
    matches!(t, Rpn::Tok(Tok::Ident(_)))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Pi, Slash, Num(2), RPar]
///   rpn:    [Pi, Num(2), Slash, Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, String> {
    if tokens.len() > MAX_JETONS {
        return Err(format!("expression trop longue (> {MAX_JETONS} jetons)"));
    }

    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Rpn> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et la multiplication implicite.
    let mut prev_was_value = false;
    let mut attend_lpar = false;

    for tok in tokens.iter().cloned() {
        if attend_lpar && tok != Tok::LPar {
            return Err("fonction sans parenthèse ouvrante".into());
        }
        attend_lpar = false;

        match tok {
            Tok::Num(_) | Tok::Pi | Tok::E => {
                if prev_was_value {
                    return Err("opérateur manquant entre deux valeurs".into());
                }
                out.push(Rpn::Tok(tok));
                prev_was_value = true;
            }

            Tok::Ident(_) => {
                if prev_was_value {
                    return Err("opérateur manquant avant une fonction".into());
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(Rpn::Tok(tok));
                attend_lpar = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err("opérateur manquant avant '('".into());
                }
                ops.push(Rpn::Tok(tok));
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err("opérande manquant avant ')'".into());
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if top == Rpn::Tok(Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err("parenthèse fermante sans ouvrante".into());
                }

                // si une fonction est au sommet, on la sort aussi
                if ops.last().is_some_and(is_fonction) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : ne dépile rien
                ops.push(Rpn::Neg);
            }

            Tok::Plus if !prev_was_value => {
                // plus unaire : neutre
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if !prev_was_value {
                    return Err("opérateur sans opérande gauche".into());
                }
                let tok = Rpn::Tok(tok);

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if *top == Rpn::Tok(Tok::LPar) || is_fonction(top) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    if attend_lpar {
        return Err("fonction sans parenthèse ouvrante".into());
    }
    if !prev_was_value {
        return Err("expression incomplète".into());
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Rpn::Tok(Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
/// Chaque élément de pile porte sa profondeur : refus au-delà de MAX_PROFONDEUR.
pub fn from_rpn(rpn: &[Rpn]) -> Result<Expr, String> {
    let mut st: Vec<(Expr, usize)> = Vec::new();

    fn empiler(st: &mut Vec<(Expr, usize)>, e: Expr, profondeur: usize) -> Result<(), String> {
        if profondeur > MAX_PROFONDEUR {
            return Err(format!("expression trop imbriquée (> {MAX_PROFONDEUR} niveaux)"));
        }
        st.push((e, profondeur));
        Ok(())
    }

    for r in rpn.iter().cloned() {
        let tok = match r {
            Rpn::Neg => {
                let (x, d) = st.pop().ok_or("moins sans opérande")?;
                empiler(&mut st, Expr::Neg(Box::new(x)), d + 1)?;
                continue;
            }
            Rpn::Tok(t) => t,
        };

        match tok {
            Tok::Num(v) => empiler(&mut st, Expr::Num(v), 1)?,
            Tok::Pi => empiler(&mut st, Expr::Pi, 1)?,
            Tok::E => empiler(&mut st, Expr::E, 1)?,

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let (b, db) = st.pop().ok_or("expression invalide")?;
                let (a, da) = st.pop().ok_or("expression invalide")?;
                let (a, b) = (Box::new(a), Box::new(b));

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    _ => Expr::Pow(a, b),
                };

                empiler(&mut st, e, da.max(db) + 1)?;
            }

            Tok::Ident(name) => {
                let f = Fonction::depuis_nom(&name)
                    .ok_or_else(|| format!("fonction inconnue: '{name}'"))?;
                let (x, d) = st.pop().ok_or("fonction sans argument")?;
                empiler(&mut st, Expr::Appel(f, Box::new(x)), d + 1)?;
            }

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        _ => Err("expression invalide".into()),
    }
}

/// Format utilitaire (journal) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(|r| match r {
            Rpn::Neg => "neg".to_string(),
            Rpn::Tok(t) => super::jetons::format_tokens(std::slice::from_ref(t)),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
