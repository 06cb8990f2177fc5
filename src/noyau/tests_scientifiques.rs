//! Tests scientifiques (campagne) : propriétés de bout en bout.
//!
//! - arithmétique sans fonction == valeur exacte arrondie à 6 décimales
//! - ré-évaluer un résultat affiché ne change pas sa valeur (calcul enchaîné)
//! - historique : plus récent en tête, borné à 20
//! - degrés / radians équivalents
//! - division par zéro => "Error" + expression vide
//! - précision : 1÷3 => 0.33 (2) / 0.33333333 (8)

use std::time::{Duration, Instant};

use approx::assert_relative_eq;

use super::arrondi::format_resultat;
use super::calculatrice::Calculatrice;
use super::erreurs::ErreurEval;
use super::eval::eval_expression;
use super::historique::CAPACITE_HISTORIQUE;
use super::options::{ModeAngle, OptionsEval, Precision};
use super::saisie::SENTINELLE_ERREUR;

fn opts(p: u8, mode: ModeAngle) -> OptionsEval {
    OptionsEval::new(Precision::new(p).unwrap(), mode)
}

fn eval_ok(expr: &str, o: &OptionsEval) -> f64 {
    eval_expression(expr, o).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/// Référence : valeur f64 arrondie à 6 décimales.
fn ref6(v: f64) -> f64 {
    format!("{v:.6}").parse().unwrap()
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique pure ------------------------ */

#[test]
fn sci_arithmetique_exacte_arrondie() {
    let o = opts(6, ModeAngle::Radians);
    let cas: [(&str, f64); 8] = [
        ("1+2", 3.0),
        ("7÷8", 0.875),
        ("22÷7", ref6(22.0 / 7.0)),
        ("(1.5+2.25)×4", 15.0),
        ("100-0.000001", 99.999999),
        ("2^0.5", ref6(2f64.sqrt())),
        ("-(3-10)×2", 14.0),
        ("1÷7+1÷7", ref6(2.0 / 7.0)),
    ];
    for (expr, attendu) in cas {
        assert_eq!(eval_ok(expr, &o), attendu, "expr={expr:?}");
    }
}

/* ------------------------ Calcul enchaîné ------------------------ */

#[test]
fn sci_reevaluer_un_resultat_est_neutre() {
    let o = OptionsEval::default();
    for expr in ["1÷3", "-22÷7", "π×1000", "e^2", "0.1+0.2", "123456789×1000", "1÷0.00001"] {
        let v = eval_ok(expr, &o);
        let txt = format_resultat(v);
        assert_eq!(eval_ok(&txt, &o), v, "expr={expr:?} txt={txt:?}");
    }
}

/* ------------------------ Historique ------------------------ */

#[test]
fn sci_historique_ordre_et_borne() {
    let mut c = Calculatrice::default();
    for k in 1..=25 {
        c.effacer();
        c.ajouter_jeton(&k.to_string());
        c.ajouter_jeton("×");
        c.ajouter_jeton("2");
        c.evaluer_courant();
    }

    let h = c.historique();
    assert_eq!(h.len(), CAPACITE_HISTORIQUE);
    assert_eq!(h.get(0).unwrap().expression(), "25×2");
    assert_eq!(h.get(0).unwrap().result(), "50");
    assert_eq!(h.get(19).unwrap().expression(), "6×2");
    for k in 1..=5 {
        let absent = format!("{k}×2");
        assert!(h.liste().all(|e| e.expression() != absent), "{absent} devrait avoir disparu");
    }
}

/* ------------------------ Degrés / radians ------------------------ */

#[test]
fn sci_degres_radians_equivalents() {
    for p in Precision::VALEURS {
        let deg = opts(p, ModeAngle::Degres);
        let rad = opts(p, ModeAngle::Radians);
        assert_eq!(eval_ok("sin(90)", &deg), 1.0, "p={p}");
        assert_eq!(eval_ok("sin(π÷2)", &rad), 1.0, "p={p}");
    }

    // mêmes angles, deux unités
    let deg = opts(10, ModeAngle::Degres);
    let rad = opts(10, ModeAngle::Radians);
    for (d, r) in [("cos(60)", "cos(π÷3)"), ("tan(30)", "tan(π÷6)"), ("sin(270)", "sin(3×π÷2)")] {
        assert_relative_eq!(eval_ok(d, &deg), eval_ok(r, &rad), epsilon = 1e-10);
    }
}

#[test]
fn sci_degres_plusieurs_trig_et_imbrication() {
    let deg = opts(6, ModeAngle::Degres);
    assert_eq!(eval_ok("sin(30)×cos(60)+tan(45)", &deg), 1.25);
    assert_eq!(eval_ok("sin(90×cos(0))", &deg), 1.0);
    assert_eq!(eval_ok("cos(sin(90)×180)", &deg), -1.0);
    // log/ln/sqrt insensibles au mode
    assert_eq!(eval_ok("log(100)+ln(1)+sqrt(9)", &deg), 5.0);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_division_par_zero_bout_en_bout() {
    assert_eq!(
        eval_expression("1÷0", &OptionsEval::default()),
        Err(ErreurEval::ResultatNonFini)
    );

    let mut c = Calculatrice::default();
    for j in ["1", "÷", "0"] {
        c.ajouter_jeton(j);
    }
    c.evaluer_courant();
    assert_eq!(c.display(), SENTINELLE_ERREUR);
    assert_eq!(c.expression(), "");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn sci_zero_remplace_et_suppression_sur_vide() {
    let mut c = Calculatrice::default();
    c.ajouter_jeton("5");
    assert_eq!(c.expression(), "5");

    c.effacer();
    c.ajouter_jeton("0");
    c.ajouter_jeton("7");
    assert_eq!(c.expression(), "7");

    c.effacer();
    c.supprimer_dernier();
    assert_eq!(c.expression(), "");
    assert_eq!(c.display(), "0");
}

/* ------------------------ Précision ------------------------ */

#[test]
fn sci_precision_bornes() {
    assert_eq!(format_resultat(eval_ok("1÷3", &opts(2, ModeAngle::Radians))), "0.33");
    assert_eq!(
        format_resultat(eval_ok("1÷3", &opts(8, ModeAngle::Radians))),
        "0.33333333"
    );
    assert_eq!(format_resultat(eval_ok("1÷3", &opts(10, ModeAngle::Radians))), "0.3333333333");
    // zéros finaux disparus à l’affichage
    assert_eq!(format_resultat(eval_ok("1÷4", &opts(10, ModeAngle::Radians))), "0.25");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_parentheses_profondes_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // profondeur modérée (AST récursif)
    let mut expr = "1".to_string();
    for _ in 0..200 {
        expr = format!("({expr}+1)");
        budget(t0, max);
    }

    assert_eq!(eval_ok(&expr, &OptionsEval::default()), 201.0);
}

#[test]
fn sci_stress_saisie_longue_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut c = Calculatrice::default();
    for k in 0..500 {
        if k > 0 {
            c.ajouter_jeton("+");
        }
        c.ajouter_jeton("1");
        budget(t0, max);
    }
    assert_eq!(c.evaluer_courant(), Some(Ok(500.0)));
    assert_eq!(c.display(), "500");
}

/* ------------------------ Garde-fous taille / profondeur ------------------------ */

#[test]
fn sci_chaine_geante_refusee_sans_debordement() {
    let o = OptionsEval::default();

    // 200k termes : refus sur la longueur
    let geante = vec!["1"; 200_000].join("+");
    assert!(matches!(
        eval_expression(&geante, &o),
        Err(ErreurEval::ExpressionMalformee(_))
    ));

    // 20k termes : sous la limite de jetons, refus sur la profondeur
    let profonde = vec!["1"; 20_000].join("+");
    assert!(matches!(
        eval_expression(&profonde, &o),
        Err(ErreurEval::ExpressionMalformee(_))
    ));

    // même volume, mais équilibré : accepté
    let mut termes: Vec<String> = vec!["1".to_string(); 1024];
    while termes.len() > 1 {
        termes = termes.chunks(2).map(|p| format!("({})", p.join("+"))).collect();
    }
    assert_eq!(eval_ok(&termes[0], &o), 1024.0);
}

#[test]
fn sci_rappel_double_jusqu_au_refus() {
    // C, rappel, "+", rappel, "=" : l’expression stockée double à chaque tour.
    let mut c = Calculatrice::default();
    c.ajouter_jeton("1");
    c.evaluer_courant();

    let mut refus = None;
    for tour in 0..20 {
        c.effacer();
        assert!(c.rappeler(0));
        c.ajouter_jeton("+");
        assert!(c.rappeler(0));
        match c.evaluer_courant() {
            Some(Ok(v)) => assert_eq!(v, 2f64.powi(tour + 1)),
            Some(Err(e)) => {
                refus = Some(e);
                break;
            }
            None => panic!("expression vide au tour {tour}"),
        }
    }

    assert!(matches!(refus, Some(ErreurEval::ExpressionMalformee(_))));
    assert_eq!(c.display(), SENTINELLE_ERREUR);
    // l’historique a survécu
    assert!(!c.historique().is_empty());
}
