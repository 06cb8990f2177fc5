// src/noyau/arrondi.rs
//
// Arrondi du résultat à `precision` décimales.
// - valeur exacte du f64 (BigRational::from_float), pas de “x * 10^p” flottant
// - demi-cas : loin de zéro (même règle que toFixed)
// - relu en f64 depuis le texte décimal, -0 normalisé en 0

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// x -> entier “scalé” = round(x * 10^digits), demi-cas loin de zéro.
/// None si x n’est pas fini.
fn float_scaled(x: f64, digits: usize) -> Option<BigInt> {
    let r = BigRational::from_float(x)?;
    let scaled = r * BigRational::from_integer(pow10(digits));
    Some(scaled.round().to_integer())
}

/* ------------------------ API ------------------------ */

/// Arrondit x à `decimales` décimales.
/// Retourne None si x n’est pas fini (l’appelant doit l’avoir rejeté avant).
pub fn arrondi_decimal(x: f64, decimales: usize) -> Option<f64> {
    let scaled = float_scaled(x, decimales)?;
    if scaled.is_zero() {
        return Some(0.0);
    }
    scaled_to_decimal(scaled, decimales).parse::<f64>().ok()
}

/// Texte affiché pour un résultat : plus court décimal qui relit la même valeur,
/// sans exposant ni ".0" final.
pub fn format_resultat(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
