// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus) ; DEL retire un nom de fonction entier
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Affectations : une par ligne, "nom=valeur"
//
// Note : PAS de Key::NumEnter (n’existe pas dans egui 0.33.x).

use eframe::egui;
use log::{debug, warn};

use calculatrice_rpn::noyau::{eval_expression, format::format_resultat};

use super::etat::{AppCalc, Demarche, Insertion, CHIFFRES_MAX};

/// Fonctions proposées en boutons (libellé = nom reconnu par le noyau ; `log` sans base
/// n’a pas de sens, d’où `log10`).
const BOUTONS_FONCTIONS: [&str; 13] = [
    "sin", "cos", "tg", "ctg", "arcsin", "arccos", "arctg", "arcctg", "ln", "lg", "log10", "sqrt",
    "abs",
];

/// Pavé numérique, trois touches par rangée.
const PAVE: [[&str; 3]; 4] = [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"], ["0", ".", "e"]];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_variables(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: sqrt(25) + 3^2 - 4/ln(2), 2 + log3a(36), sin(30)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’expression", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Précision :");
            let mut d = self.chiffres;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=CHIFFRES_MAX)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_chiffres(d);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", Insertion::ParG);
            self.bouton_insert(ui, ")", ")", Insertion::ParD);

            for op in ["+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, op, op, Insertion::Operateur);
            }

            ui.separator();

            self.bouton_insert(ui, "pi", "pi", Insertion::Mot);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(4.0);

        ui.horizontal_wrapped(|ui| {
            for f in BOUTONS_FONCTIONS {
                self.bouton_insert(ui, f, &format!("{f}("), Insertion::Fonction);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_variables(&mut self, ui: &mut egui::Ui) {
        ui.label("Variables (une par ligne, nom=valeur) :");
        ui.add(
            egui::TextEdit::multiline(&mut self.variables)
                .desired_width(ui.available_width())
                .desired_rows(3)
                .hint_text("a = 2\nb = 8.3\nr = -pi")
                .id_source("variables_edit")
                .code_editor(),
        );
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, rangee) in PAVE.iter().enumerate() {
                    for touche in rangee {
                        let genre = if *touche == "e" {
                            Insertion::Mot
                        } else {
                            Insertion::Chiffre
                        };
                        self.bouton_insert(ui, touche, touche, genre);
                    }
                    // 4e colonne : DEL, puis opérateurs courants
                    match i {
                        0 => self.bouton_action(
                            ui,
                            "DEL",
                            "Efface le dernier symbole",
                            Action::Backspace,
                        ),
                        1 => self.bouton_insert(ui, "*", "*", Insertion::Operateur),
                        2 => self.bouton_insert(ui, "-", "-", Insertion::Operateur),
                        _ => self.bouton_insert(ui, "+", "+", Insertion::Operateur),
                    }
                    ui.end_row();
                }
            });
    }

    /// Retire d’un coup un nom de fonction ("arcsin(") ou de constante ("pi").
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        let motif = BOUTONS_FONCTIONS
            .iter()
            .map(|f| format!("{f}("))
            .chain(std::iter::once("pi".to_string()))
            .filter(|m| self.entree.ends_with(m.as_str()))
            .max_by_key(String::len);

        match motif {
            Some(m) => self.entree.truncate(self.entree.len() - m.len()),
            None => {
                self.entree.pop();
            }
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(
                    ui,
                    "Variables",
                    "demarche_variables",
                    &self.demarche.variables,
                );
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, texte: &str, genre: Insertion) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        self.insere(texte, genre);
        self.focus_entree = true;
    }

    /// Évalue via le noyau puis dépose résultat + démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        self.focus_entree = true;

        let s = self.entree.trim().to_string();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        let evaluation = eval_expression(&s, &self.affectations());
        match evaluation {
            Ok((v, d)) => {
                debug!("{s} = {v}");
                let d_ui = Demarche {
                    jetons: d.jetons,
                    rpn: d.rpn,
                    variables: d.variables,
                    note: d.note,
                };
                self.set_resultat(format_resultat(v, self.chiffres), d_ui);
            }
            Err(e) => {
                warn!("expression rejetée {s:?} : {e}");
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
