//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique ; Ok => valeur finie arrondie, Err => erreur typée
//! - côté saisie : après "=", soit résultat, soit "Error" avec expression vide

use std::time::{Duration, Instant};

use super::calculatrice::Calculatrice;
use super::erreurs::ErreurEval;
use super::eval::eval_expression;
use super::options::{ModeAngle, OptionsEval, Precision};
use super::saisie::SENTINELLE_ERREUR;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn check_valeur_arrondie(v: f64, precision: Precision) {
    assert!(v.is_finite(), "valeur non finie acceptée: {v}");
    // ré-arrondir ne change rien
    let p = precision.decimales();
    let relu: f64 = format!("{v:.p$}").parse().unwrap();
    assert!((relu - v).abs() <= f64::EPSILON * v.abs().max(1.0), "v={v} p={p}");
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Jetons tels que les boutons les produisent.
const JETONS_BOUTONS: [&str; 28] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "^", "(", ")",
    "sin(", "cos(", "tan(", "log(", "ln(", "sqrt(", "π", "e", "0", "1",
];

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(100);
    if rng.coin() {
        format!("{a}.{}", rng.pick(10))
    } else {
        format!("{a}")
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 | 1 => gen_nombre(rng),
        2 => "π".to_string(),
        3 => "e".to_string(),
        _ => format!("-{}", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}×{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}÷{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({}^{})", gen_expr(rng, depth - 1), gen_atom(rng)),
        6 => format!("sin({})", gen_expr(rng, depth - 1)),
        7 => format!("cos({})", gen_expr(rng, depth - 1)),
        8 => format!("tan({})", gen_expr(rng, depth - 1)),
        9 => format!("log({})", gen_expr(rng, depth - 1)),
        10 => format!("ln({})", gen_expr(rng, depth - 1)),
        _ => format!("sqrt({})", gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_non_fini = 0usize;

    for k in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let precision = Precision::new(Precision::VALEURS[k % 5]).unwrap();
        let mode = if rng.coin() {
            ModeAngle::Radians
        } else {
            ModeAngle::Degres
        };

        match eval_expression(&expr, &OptionsEval::new(precision, mode)) {
            Ok(v) => {
                check_valeur_arrondie(v, precision);
                seen_ok += 1;
            }
            Err(ErreurEval::ResultatNonFini) => seen_non_fini += 1,
            Err(e) => panic!("expression bien formée refusée: expr={expr:?} err={e}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_non_fini > 0, "aucun non-fini vu: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);
    let opts = OptionsEval::default();

    for _ in 0..50 {
        let e1 = gen_expr(&mut r1, 3);
        let e2 = gen_expr(&mut r2, 3);
        assert_eq!(e1, e2);
        assert_eq!(eval_expression(&e1, &opts), eval_expression(&e2, &opts));
    }
}

#[test]
fn fuzz_safe_jetons_boutons_au_hasard() {
    // Séquences de boutons arbitraires : souvent absurdes, jamais de panique,
    // et la saisie reste cohérente après "=".
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let mut c = Calculatrice::default();
        let n = 1 + rng.pick(12) as usize;
        for _ in 0..n {
            let j = JETONS_BOUTONS[rng.pick(JETONS_BOUTONS.len() as u32) as usize];
            c.ajouter_jeton(j);
            if rng.pick(8) == 0 {
                c.supprimer_dernier();
            }
        }

        let avant = c.expression().to_string();
        let avant_hist = c.historique().len();
        match c.evaluer_courant() {
            None => assert!(avant.is_empty()),
            Some(Ok(_)) => {
                assert_ne!(c.display(), SENTINELLE_ERREUR);
                assert_eq!(c.display(), c.expression());
                assert_eq!(c.historique().len(), avant_hist + 1);
            }
            Some(Err(_)) => {
                assert_eq!(c.display(), SENTINELLE_ERREUR);
                assert_eq!(c.expression(), "");
                assert_eq!(c.historique().len(), avant_hist);
            }
        }
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1÷2", 800);
    budget(t0, max);

    let v = eval_expression(&expr, &OptionsEval::default()).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
}
