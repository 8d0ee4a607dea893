// src/noyau/table.rs
//
// Table des opérateurs / fonctions / constantes.
// Consultée par toutes les étapes (jetons, rpn, calcul).
// Lecture seule, aucun échec possible.

use std::f64::consts::{E, PI};

pub const PLUS: &str = "+";
pub const MOINS: &str = "-";
pub const FOIS: &str = "*";
pub const DIVISE: &str = "/";
pub const PUISSANCE: &str = "^";
pub const PAR_G: &str = "(";
pub const PAR_D: &str = ")";

/// Précédence des fonctions : la plus forte.
pub const PRECEDENCE_FONCTION: u8 = 4;

/// Fonctions reconnues par nom exact (plus tout nom commençant par `log`).
pub const FONCTIONS: [&str; 13] = [
    "sin", "cos", "tg", "ctg", "arcsin", "arccos", "arctg", "arcctg", "ln", "lg", "log", "sqrt",
    "abs",
];

const PREFIXE_LOG: &str = "log";

/// Genre d’un jeton, recalculé par chaque étape (le jeton lui-même n’est qu’un texte).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Operateur,
    Fonction,
    Constante,
    ParG,
    ParD,
    /// nombre ou variable : à trancher par l’évaluateur
    Operande,
}

pub fn genre(jeton: &str) -> Genre {
    if est_operateur(jeton) {
        Genre::Operateur
    } else if jeton == PAR_G {
        Genre::ParG
    } else if jeton == PAR_D {
        Genre::ParD
    } else if est_fonction(jeton) {
        Genre::Fonction
    } else if est_constante(jeton) {
        Genre::Constante
    } else {
        Genre::Operande
    }
}

pub fn est_operateur(jeton: &str) -> bool {
    matches!(jeton, PLUS | MOINS | FOIS | DIVISE | PUISSANCE)
}

pub fn est_caractere_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

pub fn est_fonction(jeton: &str) -> bool {
    FONCTIONS.contains(&jeton) || jeton.starts_with(PREFIXE_LOG)
}

pub fn est_constante(jeton: &str) -> bool {
    constante(jeton).is_some()
}

pub fn constante(nom: &str) -> Option<f64> {
    match nom {
        "pi" => Some(PI),
        "e" => Some(E),
        _ => None,
    }
}

/// + - => 1 ; * / => 2 ; ^ => 3 ; tout le reste (fonctions) => 4
pub fn precedence(jeton: &str) -> u8 {
    match jeton {
        PLUS | MOINS => 1,
        FOIS | DIVISE => 2,
        PUISSANCE => 3,
        _ => PRECEDENCE_FONCTION,
    }
}

pub fn est_associatif_droite(jeton: &str) -> bool {
    jeton == PUISSANCE
}

/* ------------------------ Formes reconnues ------------------------ */

/// Littéral numérique : signe optionnel, chiffres avec partie décimale optionnelle,
/// exposant optionnel. Refuse "inf", "nan" & co que `f64::from_str` accepterait.
pub fn nombre(jeton: &str) -> Option<f64> {
    let b = jeton.as_bytes();
    let mut i = 0;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let debut_chiffres = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut chiffres = i - debut_chiffres;

    if i < b.len() && b[i] == b'.' {
        i += 1;
        let debut_frac = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        chiffres += i - debut_frac;
    }

    if chiffres == 0 {
        return None;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        i += 1;
        if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
            i += 1;
        }
        let debut_exp = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == debut_exp {
            return None;
        }
    }

    if i != b.len() {
        return None;
    }

    jeton.parse::<f64>().ok()
}

/// Nombre de lettres ASCII en tête, puis nombre de chiffres qui suivent.
fn lettres_puis_chiffres(s: &str) -> (usize, usize) {
    let lettres = s.bytes().take_while(u8::is_ascii_alphabetic).count();
    let chiffres = s[lettres..].bytes().take_while(u8::is_ascii_digit).count();
    (lettres, chiffres)
}

/// Forme d’un nom de variable : une lettre ou plus, puis zéro chiffre ou plus.
pub fn est_nom_variable(nom: &str) -> bool {
    let (lettres, chiffres) = lettres_puis_chiffres(nom);
    lettres > 0 && lettres + chiffres == nom.len()
}

/// Décomposition d’un nom de logarithme : `log` + coefficient + identifiant.
#[derive(Clone, Debug, PartialEq)]
pub struct NomLog<'a> {
    /// suite brute de chiffres et de points après `log` (peut être vide)
    pub coefficient: &'a str,
    /// identifiant de variable/constante (peut être absent)
    pub identifiant: Option<&'a str>,
}

/// `log` + `[0-9.]*` + `([a-zA-Z]+[0-9]*)?`, sinon `None`.
pub fn decompose_log(nom: &str) -> Option<NomLog<'_>> {
    let reste = nom.strip_prefix(PREFIXE_LOG)?;

    let n = reste
        .bytes()
        .take_while(|c| c.is_ascii_digit() || *c == b'.')
        .count();
    let (coefficient, ident) = reste.split_at(n);

    if ident.is_empty() {
        return Some(NomLog {
            coefficient,
            identifiant: None,
        });
    }

    if !est_nom_variable(ident) {
        return None;
    }

    Some(NomLog {
        coefficient,
        identifiant: Some(ident),
    })
}
