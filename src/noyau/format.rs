// src/noyau/format.rs
//
// Affichage du résultat : arrondi à `chiffres` décimales, zéros finaux retirés.

/// 0.032000 -> "0.032" ; 4.0 -> "4" ; -0.0 -> "0"
pub fn format_resultat(v: f64, chiffres: usize) -> String {
    if v.is_nan() {
        return "indéfini".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let mut s = format!("{v:.chiffres$}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }

    // "-0" après arrondi
    if s.strip_prefix('-').is_some_and(|r| r.chars().all(|c| c == '0')) {
        s.remove(0);
    }
    s
}
