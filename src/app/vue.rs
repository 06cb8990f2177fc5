// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Trois onglets :
// - Calculatrice : affichage + pavé (jetons => Calculatrice::ajouter_jeton)
// - Historique   : liste (clic = rappel), effacer (avec confirmation), export
// - Réglages     : thème, précision (2/4/6/8/10), radians/degrés
//
// La vue ne fait que lire l’état public et appeler les opérations du noyau.

use eframe::egui;

use super::etat::{AppCalc, Onglet};
use crate::noyau::saisie::EtatSaisie;
use crate::noyau::{ModeAngle, Precision};

/* ------------------------ Pavé ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Action {
    Jeton(&'static str),
    Effacer,
    Supprimer,
    Egal,
}

#[derive(Clone, Copy, Debug)]
enum Genre {
    Nombre,
    Operateur,
    Scientifique,
    Fonction,
    Egal,
}

#[derive(Clone, Copy, Debug)]
struct Touche {
    label: &'static str,
    genre: Genre,
    action: Action,
}

const fn jeton(label: &'static str, valeur: &'static str, genre: Genre) -> Touche {
    Touche {
        label,
        genre,
        action: Action::Jeton(valeur),
    }
}

const fn nombre(v: &'static str) -> Touche {
    jeton(v, v, Genre::Nombre)
}

const fn op(v: &'static str) -> Touche {
    jeton(v, v, Genre::Operateur)
}

const PAVE: [&[Touche]; 8] = [
    &[
        Touche {
            label: "C",
            genre: Genre::Fonction,
            action: Action::Effacer,
        },
        Touche {
            label: "⌫",
            genre: Genre::Fonction,
            action: Action::Supprimer,
        },
        op("("),
        op(")"),
    ],
    &[
        jeton("sin", "sin(", Genre::Scientifique),
        jeton("cos", "cos(", Genre::Scientifique),
        jeton("tan", "tan(", Genre::Scientifique),
        op("÷"),
    ],
    &[
        jeton("log", "log(", Genre::Scientifique),
        jeton("ln", "ln(", Genre::Scientifique),
        jeton("√", "sqrt(", Genre::Scientifique),
        op("×"),
    ],
    &[
        jeton("π", "π", Genre::Scientifique),
        jeton("e", "e", Genre::Scientifique),
        op("^"),
        op("-"),
    ],
    &[nombre("7"), nombre("8"), nombre("9"), op("+")],
    &[
        nombre("4"),
        nombre("5"),
        nombre("6"),
        Touche {
            label: "=",
            genre: Genre::Egal,
            action: Action::Egal,
        },
    ],
    &[nombre("1"), nombre("2"), nombre("3")],
    &[nombre("0"), nombre(".")],
];

const TAILLE_TOUCHE: [f32; 2] = [64.0, 44.0];

/// Nombre max de caractères montrés dans le repli texte.
const APERCU_TEXTE_MAX: usize = 500;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_onglets(ui);
        ui.separator();

        match self.onglet {
            Onglet::Calcul => self.ui_calcul(ui),
            Onglet::Historique => self.ui_historique(ui),
            Onglet::Reglages => self.ui_reglages(ui),
        }
    }

    fn ui_onglets(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.onglet, Onglet::Calcul, "Calculator");
            ui.selectable_value(&mut self.onglet, Onglet::Historique, "History");
            ui.selectable_value(&mut self.onglet, Onglet::Reglages, "Settings");
        });
    }

    /* ------------------------ Calculatrice ------------------------ */

    fn ui_calcul(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                let mut texte = egui::RichText::new(self.calc.display())
                    .monospace()
                    .size(32.0);
                if self.calc.etat() == EtatSaisie::Erreur {
                    texte = texte.color(ui.visuals().error_fg_color);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(texte);
                });
            });

        ui.horizontal(|ui| {
            // raccourci du réglage : clic = bascule radians/degrés
            if ui.small_button(self.calc.mode_angle().libelle()).clicked() {
                self.calc.basculer_mode_angle();
            }
            ui.small(format!("· {} decimals", self.calc.precision()));
        });

        ui.add_space(8.0);

        for rangee in PAVE {
            ui.horizontal(|ui| {
                for t in rangee {
                    self.bouton(ui, t);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, t: &Touche) {
        let fond = match t.genre {
            Genre::Nombre => ui.visuals().faint_bg_color,
            Genre::Operateur => egui::Color32::from_rgb(0x3b, 0x82, 0xf6),
            Genre::Scientifique => egui::Color32::from_rgb(0x8b, 0x5c, 0xf6),
            Genre::Fonction => egui::Color32::from_rgb(0xef, 0x44, 0x44),
            Genre::Egal => egui::Color32::from_rgb(0x10, 0xb9, 0x81),
        };
        let texte = match t.genre {
            Genre::Nombre => egui::RichText::new(t.label).size(20.0),
            _ => egui::RichText::new(t.label)
                .size(20.0)
                .color(egui::Color32::WHITE),
        };

        // "=" sur une expression vide ne fait rien : bouton grisé
        let actif = !matches!(t.action, Action::Egal) || !self.calc.expression().is_empty();
        let resp = ui.add_enabled_ui(actif, |ui| {
            ui.add_sized(TAILLE_TOUCHE, egui::Button::new(texte).fill(fond))
        })
        .inner;
        if !resp.clicked() {
            return;
        }

        match t.action {
            Action::Jeton(v) => self.calc.ajouter_jeton(v),
            Action::Effacer => self.calc.effacer(),
            Action::Supprimer => self.calc.supprimer_dernier(),
            Action::Egal => {
                self.calc.evaluer_courant();
            }
        }
    }

    /* ------------------------ Historique ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculation History");
            if self.calc.historique().is_empty() {
                return;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear").clicked() {
                    self.demander_effacement_historique();
                }
                // pas de système de fichiers côté web : CSV à copier
                if cfg!(not(target_arch = "wasm32")) && ui.button("Download").clicked() {
                    self.exporter_fichier();
                }
                if ui.button("Copy CSV").clicked() {
                    self.exporter_csv_texte();
                }
                if ui.button("Copy as text").clicked() {
                    self.exporter_texte();
                }
            });
        });

        if self.confirmer_effacement {
            self.ui_confirmation(ui.ctx());
        }

        if !self.message_export.is_empty() {
            ui.label(&self.message_export);
        }
        if let Some(txt) = &self.texte_export {
            let mut apercu: String = txt.chars().take(APERCU_TEXTE_MAX).collect();
            if txt.chars().count() > APERCU_TEXTE_MAX {
                apercu.push_str("...");
            }
            ui.add(
                egui::TextEdit::multiline(&mut apercu.as_str())
                    .desired_rows(4)
                    .desired_width(ui.available_width())
                    .code_editor(),
            );
        }

        ui.separator();

        if self.calc.historique().is_empty() {
            ui.label("No calculations yet");
            return;
        }

        let mut rappel: Option<usize> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (i, e) in self.calc.entrees_historique().enumerate() {
                    let resp = ui
                        .push_id(e.id(), |ui| {
                            egui::Frame::group(ui.style())
                                .show(ui, |ui| {
                                    ui.set_min_width(ui.available_width());
                                    ui.monospace(e.expression());
                                    ui.label(
                                        egui::RichText::new(format!("= {}", e.result())).strong(),
                                    );
                                    ui.small(e.timestamp());
                                })
                                .response
                                .interact(egui::Sense::click())
                        })
                        .inner;
                    if resp.clicked() {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            self.rappeler(i);
        }
    }

    fn ui_confirmation(&mut self, ctx: &egui::Context) {
        let mut reponse: Option<bool> = None;
        egui::Window::new("Clear History")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Are you sure you want to clear all history?");
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        reponse = Some(false);
                    }
                    if ui.button("Clear").clicked() {
                        reponse = Some(true);
                    }
                });
            });

        if let Some(oui) = reponse {
            self.confirmer_effacement_historique(oui);
        }
    }

    /* ------------------------ Réglages ------------------------ */

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.label(egui::RichText::new("Appearance").strong());
            ui.checkbox(&mut self.theme_sombre, "Dark Mode");
        });

        ui.group(|ui| {
            ui.label(egui::RichText::new("Decimal Precision").strong());
            let mut courante = self.calc.precision();
            for p in Precision::toutes() {
                ui.radio_value(&mut courante, p, format!("{p} decimal places"));
            }
            if courante != self.calc.precision() {
                self.calc.set_precision(courante);
            }
        });

        ui.group(|ui| {
            ui.label(egui::RichText::new("Angle Unit").strong());
            let mut mode = self.calc.mode_angle();
            ui.radio_value(&mut mode, ModeAngle::Radians, ModeAngle::Radians.libelle());
            ui.radio_value(&mut mode, ModeAngle::Degres, ModeAngle::Degres.libelle());
            if mode != self.calc.mode_angle() {
                self.calc.set_mode_angle(mode);
            }
        });
    }
}
