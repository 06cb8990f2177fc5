// src/noyau/expr.rs
//
// AST numérique (f64).
// - Num : littéral
// - Pi, E : constantes
// - Neg : moins unaire
// - Appel : fonction unaire (sin/cos/tan/log/ln/sqrt)
//
// IMPORTANT :
// - le mode d’angle s’applique au noeud trig lui-même (pas de réécriture textuelle),
//   donc sin(cos(0)*90) en degrés reste correct.
// - evalue() ne panique jamais : NaN/∞ remontent, c’est eval.rs qui tranche.

use std::fmt;

use super::options::ModeAngle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log, // base 10
    Ln,
    Sqrt,
}

impl Fonction {
    pub fn depuis_nom(name: &str) -> Option<Fonction> {
        match name {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "log" => Some(Fonction::Log),
            "ln" => Some(Fonction::Ln),
            "sqrt" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "sqrt",
        }
    }

    pub fn est_trig(self) -> bool {
        matches!(self, Fonction::Sin | Fonction::Cos | Fonction::Tan)
    }

    fn applique(self, x: f64, mode: ModeAngle) -> f64 {
        match self {
            Fonction::Sin => mode.en_radians(x).sin(),
            Fonction::Cos => mode.en_radians(x).cos(),
            Fonction::Tan => mode.en_radians(x).tan(),
            Fonction::Log => x.log10(),
            Fonction::Ln => x.ln(),
            Fonction::Sqrt => x.sqrt(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Pi,
    E,

    Neg(Box<Expr>),
    Appel(Fonction, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation flottante. Le mode d’angle ne touche que sin/cos/tan.
    pub fn evalue(&self, mode: ModeAngle) -> f64 {
        use Expr::*;

        match self {
            Num(v) => *v,
            Pi => std::f64::consts::PI,
            E => std::f64::consts::E,

            Neg(x) => -x.evalue(mode),
            Appel(f, x) => f.applique(x.evalue(mode), mode),

            Add(a, b) => a.evalue(mode) + b.evalue(mode),
            Sub(a, b) => a.evalue(mode) - b.evalue(mode),
            Mul(a, b) => a.evalue(mode) * b.evalue(mode),
            Div(a, b) => a.evalue(mode) / b.evalue(mode),
            Pow(a, b) => a.evalue(mode).powf(b.evalue(mode)),
        }
    }

    /// Nombre de noeuds trig (journal).
    pub fn nb_trig(&self) -> usize {
        use Expr::*;

        match self {
            Num(_) | Pi | E => 0,
            Neg(x) => x.nb_trig(),
            Appel(f, x) => usize::from(f.est_trig()) + x.nb_trig(),
            Add(a, b) | Sub(a, b) | Mul(a, b) | Div(a, b) | Pow(a, b) => {
                a.nb_trig() + b.nb_trig()
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Num(v) => write!(f, "{v}"),
            Pi => write!(f, "π"),
            E => write!(f, "e"),
            Neg(x) => write!(f, "-{x}"),
            Appel(func, x) => write!(f, "{}({x})", func.nom()),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Pow(a, b) => write!(f, "({a})^({b})"),
        }
    }
}
