// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (onglet Calculatrice seulement, aucun champ texte n’y a le focus) :
// - Enter     = "="
// - Backspace = "⌫"
// - Escape    = "C"

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Onglet;

impl AppCalc {
    fn raccourcis_clavier(&mut self, ctx: &egui::Context) {
        if self.onglet != Onglet::Calcul {
            return;
        }

        let (entree, retour, echap) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if echap {
            self.calc.effacer();
        } else if entree {
            self.calc.evaluer_courant();
        } else if retour {
            self.calc.supprimer_dernier();
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.theme_sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        self.raccourcis_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
