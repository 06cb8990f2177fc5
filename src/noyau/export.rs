// src/noyau/export.rs
//
// Export de l’historique.
// - CSV : en-tête `Expression,Result,Timestamp` (non guillemeté),
//         puis une ligne par entrée, tous les champs entre guillemets,
//         séparateur '\n', pas de '\n' final.
// - Texte : `expr = result (timestamp)` par ligne (repli quand pas de fichier).

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::info;

use super::erreurs::ErreurExport;
use super::historique::Historique;

pub const EN_TETE_CSV: &str = "Expression,Result,Timestamp";

/// Historique -> texte CSV.
pub fn export_csv(historique: &Historique) -> Result<String, ErreurExport> {
    if historique.is_empty() {
        return Err(ErreurExport::HistoriqueVide);
    }

    let mut w = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(Vec::new());

    for e in historique.liste() {
        w.write_record([e.expression(), e.result(), e.timestamp()])?;
    }

    let octets = w.into_inner().map_err(|e| e.into_error())?;
    let lignes = String::from_utf8(octets)?;

    let mut out = String::with_capacity(EN_TETE_CSV.len() + 1 + lignes.len());
    out.push_str(EN_TETE_CSV);
    out.push('\n');
    out.push_str(lignes.trim_end_matches('\n'));
    Ok(out)
}

/// Historique -> texte lisible (une ligne par calcul).
pub fn export_texte(historique: &Historique) -> Result<String, ErreurExport> {
    if historique.is_empty() {
        return Err(ErreurExport::HistoriqueVide);
    }

    let lignes: Vec<String> = historique
        .liste()
        .map(|e| format!("{} = {} ({})", e.expression(), e.result(), e.timestamp()))
        .collect();
    Ok(lignes.join("\n"))
}

/// `calculator-history-<ms>.csv`
pub fn nom_fichier_export(maintenant: DateTime<Utc>) -> String {
    format!("calculator-history-{}.csv", maintenant.timestamp_millis())
}

/// Écrit le CSV dans `dossier` et retourne le chemin créé.
pub fn ecrire_csv(historique: &Historique, dossier: &Path) -> Result<PathBuf, ErreurExport> {
    let contenu = export_csv(historique)?;
    let chemin = dossier.join(nom_fichier_export(Utc::now()));
    fs::write(&chemin, contenu)?;
    info!(
        "historique exporté: {} ({} calculs)",
        chemin.display(),
        historique.len()
    );
    Ok(chemin)
}
