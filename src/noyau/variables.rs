// src/noyau/variables.rs
//
// Affectations "nom=valeur" -> table des variables.
// valeur : nombre, ou constante éventuellement précédée de '-' ("x=pi", "y=-e").

use super::calcul::Variables;
use super::erreur::{invalide, Raison, Resultat};
use super::table::{constante, est_nom_variable, nombre};
use super::validation::normalise;

/// Lit une affectation isolée.
pub fn lire_affectation(affectation: &str) -> Resultat<(String, f64)> {
    let s = normalise(affectation);

    let parts: Vec<&str> = s.split('=').collect();
    let [nom, valeur] = parts.as_slice() else {
        let nom = parts.first().copied().unwrap_or_default();
        return invalide(Raison::AffectationInvalide(nom.to_string()));
    };

    if !est_nom_variable(nom) {
        return invalide(Raison::NomVariable(nom.to_string()));
    }

    if let Some(v) = nombre(valeur) {
        return Ok((nom.to_string(), v));
    }

    let (signe, nom_constante) = match valeur.strip_prefix('-') {
        Some(reste) => (-1.0, reste),
        None => (1.0, *valeur),
    };
    match constante(nom_constante) {
        Some(c) => Ok((nom.to_string(), signe * c)),
        None => invalide(Raison::ValeurVariable(valeur.to_string())),
    }
}

/// Construit la table ; une variable répétée garde sa dernière valeur.
pub fn table_variables<S: AsRef<str>>(affectations: &[S]) -> Resultat<Variables> {
    let mut variables = Variables::with_capacity(affectations.len());
    for a in affectations {
        let (nom, valeur) = lire_affectation(a.as_ref())?;
        variables.insert(nom, valeur);
    }
    Ok(variables)
}
