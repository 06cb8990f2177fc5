//! src/journal.rs
//!
//! Journal terminal (natif seulement) : log + simplelog.
//! En wasm32, pas de terminal : les macros log! restent silencieuses.

use log::LevelFilter;

/// "debug" | "info" | "warn" | "error" ; autre => Info.
pub fn niveau_depuis_texte(niveau: &str) -> Option<LevelFilter> {
    match niveau.trim().to_lowercase().as_str() {
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_journal(niveau: &str) {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let filtre = niveau_depuis_texte(niveau).unwrap_or(LevelFilter::Info);

    // Déjà initialisé (tests, second appel) : on garde le premier.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        filtre,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);

    if niveau_depuis_texte(niveau).is_none() {
        log::warn!("niveau de journal inconnu '{niveau}', info utilisé");
    }
    log::info!("journal démarré (niveau {filtre})");
}

#[cfg(target_arch = "wasm32")]
pub fn init_journal(_niveau: &str) {}
