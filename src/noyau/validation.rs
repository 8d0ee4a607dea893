// src/noyau/validation.rs
//
// Pré-passe avant tokenisation :
// - normalise (espaces retirés, ',' -> '.', '−' -> '-')
// - refuse tout symbole hors [A-Za-z0-9+-*/:^().]
// - refuse toute suite de 3 opérateurs ou plus

use super::erreur::{invalide, Raison, Resultat};

/// Moins typographique (U+2212).
const MOINS_UNICODE: char = '\u{2212}';

const MAX_OPERATEURS_CONSECUTIFS: usize = 2;

fn est_autorise(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '*' | '/' | ':' | '^' | '(' | ')' | '.')
}

fn est_operateur_brut(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | ':' | '^')
}

/// Remplace les symboles « de saisie » par leur forme canonique.
pub fn normalise(s: &str) -> String {
    s.chars()
        .filter(|c| *c != ' ')
        .map(|c| match c {
            ',' => '.',
            MOINS_UNICODE => '-',
            c => c,
        })
        .collect()
}

/// Normalise puis vérifie ; renvoie l’expression prête pour `tokenize`.
pub fn valide(expression: &str) -> Resultat<String> {
    if expression.is_empty() {
        return invalide(Raison::ExpressionVide);
    }

    let s = normalise(expression);

    if let Some(c) = s.chars().find(|c| !est_autorise(*c)) {
        return invalide(Raison::SymboleEnTrop(c.to_string()));
    }

    let mut suite = String::new();
    for c in s.chars() {
        if est_operateur_brut(c) {
            suite.push(c);
            continue;
        }
        if suite.chars().count() > MAX_OPERATEURS_CONSECUTIFS {
            break;
        }
        suite.clear();
    }
    if suite.chars().count() > MAX_OPERATEURS_CONSECUTIFS {
        return invalide(Raison::OperateursConsecutifs(suite));
    }

    if s.is_empty() {
        return invalide(Raison::ExpressionVide);
    }

    Ok(s)
}
