//! Options d’évaluation : précision (décimales) + mode d’angle.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::erreurs::ErreurReglage;

/// Nombre de décimales conservées au résultat.
/// Ensemble fermé : 2, 4, 6, 8, 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub struct Precision(u8);

impl Precision {
    pub const VALEURS: [u8; 5] = [2, 4, 6, 8, 10];

    pub fn new(decimales: u8) -> Result<Self, ErreurReglage> {
        if Self::VALEURS.contains(&decimales) {
            Ok(Self(decimales))
        } else {
            Err(ErreurReglage::PrecisionInvalide(decimales))
        }
    }

    pub fn decimales(self) -> usize {
        self.0 as usize
    }

    /// Les 5 précisions, dans l’ordre (pour le sélecteur UI).
    pub fn toutes() -> impl Iterator<Item = Precision> {
        Self::VALEURS.into_iter().map(Precision)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(6)
    }
}

impl TryFrom<u8> for Precision {
    type Error = ErreurReglage;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Precision::new(v)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interprétation des arguments de sin/cos/tan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeAngle {
    #[default]
    Radians,
    #[serde(alias = "degrees")]
    Degres,
}

impl ModeAngle {
    pub fn basculer(self) -> Self {
        match self {
            ModeAngle::Radians => ModeAngle::Degres,
            ModeAngle::Degres => ModeAngle::Radians,
        }
    }

    /// Argument trig -> radians.
    pub fn en_radians(self, x: f64) -> f64 {
        match self {
            ModeAngle::Radians => x,
            ModeAngle::Degres => x * std::f64::consts::PI / 180.0,
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Radians => "Radians",
            ModeAngle::Degres => "Degrees",
        }
    }
}

impl FromStr for ModeAngle {
    type Err = ErreurReglage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "radians" | "rad" => Ok(ModeAngle::Radians),
            "degres" | "degrees" | "deg" => Ok(ModeAngle::Degres),
            autre => Err(ErreurReglage::ModeAngleInconnu(autre.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionsEval {
    pub precision: Precision,
    pub mode_angle: ModeAngle,
}

impl OptionsEval {
    pub fn new(precision: Precision, mode_angle: ModeAngle) -> Self {
        Self {
            precision,
            mode_angle,
        }
    }
}
