//! src/noyau/historique.rs
//!
//! Historique borné des calculs réussis.
//!
//! Contrats :
//! - plus récent en tête (invariant, pas un effet de bord du “prepend”)
//! - au plus CAPACITE_HISTORIQUE entrées ; les plus anciennes sont jetées
//! - entrées immuables une fois créées
//! - ids dérivés du temps (ms), strictement croissants dans une session

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use log::debug;

pub const CAPACITE_HISTORIQUE: usize = 20;

/// Format d’horodatage (style `toLocaleString` en-US : "10/17/2026, 8:35:02 PM").
const FORMAT_HORODATAGE: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    id: String,
    expression: String,
    result: String,
    timestamp: String,
}

impl EntreeHistorique {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
    dernier_id: i64,
}

impl Historique {
    /// Ajoute un calcul réussi (horodaté maintenant).
    pub fn ajouter(&mut self, expression: &str, result: &str) {
        self.ajouter_a(expression, result, Local::now());
    }

    /// Ajoute un calcul avec un instant explicite.
    pub fn ajouter_a(&mut self, expression: &str, result: &str, moment: DateTime<Local>) {
        // ms, mais jamais deux fois le même id (deux calculs dans la même ms)
        let id = moment.timestamp_millis().max(self.dernier_id + 1);
        self.dernier_id = id;

        let entree = EntreeHistorique {
            id: id.to_string(),
            expression: expression.to_string(),
            result: result.to_string(),
            timestamp: moment.format(FORMAT_HORODATAGE).to_string(),
        };
        debug!("historique += {} = {} (id {})", entree.expression, entree.result, entree.id);

        self.entrees.push_front(entree);
        self.entrees.truncate(CAPACITE_HISTORIQUE);
    }

    /// Vide l’historique (sans condition).
    pub fn effacer(&mut self) {
        self.entrees.clear();
    }

    /// Plus récent d’abord.
    pub fn liste(&self) -> impl ExactSizeIterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
