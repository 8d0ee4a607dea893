// src/app.rs
//
// Calculatrice RPN : module App (racine)
// -------------------------------------
// - sous-modules : etat.rs (état + actions) et vue.rs (egui)
// - impl eframe::App (natif + web)
//
// Enter est géré dans vue.rs, seulement quand le champ a le focus.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = bouton "C" (entrée seulement)
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
