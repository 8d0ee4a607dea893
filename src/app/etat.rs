//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affectations, résultat, erreur,
//! précision, démarche) et offrir les opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Précision d’affichage bornée.

/// Décimales affichées par défaut.
pub const CHIFFRES_DEFAUT: usize = 10;

/// Au-delà, un f64 n’a plus rien à dire.
pub const CHIFFRES_MAX: usize = 15;

#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub variables: String,
    pub note: String,
}

/// Genre d’une touche : décide des séparateurs ajoutés autour du texte inséré.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    Chiffre,
    Mot,
    Fonction,
    Operateur,
    ParG,
    ParD,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrées utilisateur ---
    pub entree: String,
    /// Affectations "nom=valeur", une par ligne.
    pub variables: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub chiffres: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            variables: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            chiffres: CHIFFRES_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + affectations + résultats + précision).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.variables.clear();
        self.clear_resultats();
        self.chiffres = CHIFFRES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (entrée et affectations conservées).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// On conserve le dernier résultat affiché ; la démarche, elle, ne vaut plus rien.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.min(CHIFFRES_MAX);
        self.focus_entree = true;
    }

    /// Insère le texte d’une touche à la fin de l’entrée.
    ///
    /// Les espaces sont ignorés par le noyau : après un opérande ("x", "2", ")"), un mot,
    /// une fonction ou une '(' sont précédés d’un `*` explicite, sinon "x" + "pi" donnerait
    /// la variable "xpi".
    pub fn insere(&mut self, texte: &str, genre: Insertion) {
        match genre {
            Insertion::ParD => self.retire_espaces_finaux(),
            Insertion::ParG | Insertion::Fonction | Insertion::Mot => {
                self.retire_espaces_finaux();
                let dernier = self.entree.chars().last();
                if matches!(dernier, Some(c) if c.is_ascii_alphanumeric() || c == ')') {
                    self.entree.push_str(" * ");
                }
            }
            Insertion::Operateur => {
                self.retire_espaces_finaux();
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
            }
            Insertion::Chiffre => {}
        }

        self.entree.push_str(texte);
        if genre == Insertion::Operateur {
            self.entree.push(' ');
        }
    }

    fn retire_espaces_finaux(&mut self) {
        let n = self.entree.trim_end().len();
        self.entree.truncate(n);
    }

    /// Lignes d’affectation non vides (espaces de bord retirés).
    pub fn affectations(&self) -> Vec<&str> {
        self.variables
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}
