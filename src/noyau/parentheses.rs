// src/noyau/parentheses.rs
//
// Équilibre des parenthèses, sur la chaîne brute (avant tokenisation).

/// true si chaque ')' ferme une '(' déjà ouverte et si tout est refermé.
pub fn equilibrees(expression: &str) -> bool {
    let ouvrantes = expression.matches('(').count();
    let fermantes = expression.matches(')').count();
    if ouvrantes != fermantes {
        return false;
    }

    let mut profondeur: usize = 0;
    for c in expression.chars() {
        match c {
            '(' => profondeur += 1,
            ')' => match profondeur.checked_sub(1) {
                Some(p) => profondeur = p,
                None => return false,
            },
            _ => {}
        }
    }

    profondeur == 0
}
