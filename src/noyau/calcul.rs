// src/noyau/calcul.rs
//
// Évaluation d’une suite RPN (machine à pile).
//
// Par jeton, de gauche à droite :
// - nombre      : empilé
// - opérateur   : dépile b puis a, empile a ∘ b
// - fonction    : dépile x, empile f(x) (la famille log… lit sa base dans son nom)
// - constante   : pi, e
// - variable    : forme [a-zA-Z]+[0-9]* obligatoire, valeur prise dans `variables`

use std::collections::HashMap;

use log::debug;

use super::erreur::{invalide, Erreur, Raison, Resultat};
use super::fonctions;
use super::jetons::Jeton;
use super::table::{self, constante, decompose_log, est_nom_variable, nombre, Genre};

/// Valeurs des variables, fournies à chaque évaluation.
pub type Variables = HashMap<String, f64>;

/// Évalue une suite RPN avec les variables données.
pub fn eval_rpn(rpn: &[Jeton], variables: &Variables) -> Resultat<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for jeton in rpn {
        // Un littéral signé ("-9") est un nombre, pas l’opérateur "-".
        if let Some(v) = nombre(jeton) {
            pile.push(v);
            continue;
        }

        match table::genre(jeton) {
            Genre::Operateur => {
                let b = depile(&mut pile)?;
                let a = depile(&mut pile)?;
                pile.push(applique_operateur(jeton, a, b)?);
            }
            Genre::Fonction => {
                let x = depile(&mut pile)?;
                pile.push(applique_fonction(jeton, x, variables)?);
            }
            Genre::Constante => {
                // genre() garantit que la constante existe
                pile.extend(constante(jeton));
            }
            Genre::Operande => pile.push(valeur_variable(jeton, variables)?),
            Genre::ParG | Genre::ParD => {
                return invalide(Raison::OperateurInconnu(jeton.clone()));
            }
        }
    }

    if pile.len() != 1 {
        return Err(Erreur::RpnMalformee {
            restantes: pile.len(),
        });
    }

    let resultat = pile[0];
    debug!("résultat: {resultat}");
    Ok(resultat)
}

/// Pile vide = suite RPN mal formée (arité).
fn depile(pile: &mut Vec<f64>) -> Resultat<f64> {
    pile.pop().ok_or(Erreur::RpnMalformee { restantes: 0 })
}

fn applique_operateur(op: &str, a: f64, b: f64) -> Resultat<f64> {
    match op {
        table::PLUS => Ok(a + b),
        table::MOINS => Ok(a - b),
        table::FOIS => Ok(a * b),
        table::DIVISE => {
            if b == 0.0 {
                return invalide(Raison::DivisionParZero);
            }
            Ok(a / b)
        }
        table::PUISSANCE => {
            // exposant non entier = racine : refusée sur base négative
            if b != b.floor() && a < 0.0 {
                return invalide(Raison::RacineNegative);
            }
            Ok(a.powf(b))
        }
        _ => invalide(Raison::OperateurInconnu(op.to_string())),
    }
}

fn applique_fonction(nom: &str, x: f64, variables: &Variables) -> Resultat<f64> {
    if let Some(r) = fonctions::applique(nom, x) {
        return r;
    }
    if nom.starts_with("log") {
        let base = base_logarithme(nom, variables)?;
        return fonctions::log(x, base);
    }
    invalide(Raison::FonctionNonSupportee(nom.to_string()))
}

/// Base = coefficient (1 si absent) × valeur de l’identifiant (1 si absent).
/// Ni coefficient ni identifiant : base indéterminée.
fn base_logarithme(nom: &str, variables: &Variables) -> Resultat<f64> {
    let Some(parts) = decompose_log(nom) else {
        return invalide(Raison::BaseLogarithme);
    };

    if parts.coefficient.is_empty() && parts.identifiant.is_none() {
        return invalide(Raison::BaseLogarithme);
    }

    let mut base = 1.0;

    if !parts.coefficient.is_empty() {
        match nombre(parts.coefficient) {
            Some(k) => base *= k,
            None => return invalide(Raison::BaseLogarithme),
        }
    }

    if let Some(ident) = parts.identifiant {
        match variables.get(ident).copied().or_else(|| constante(ident)) {
            Some(v) => base *= v,
            None => return invalide(Raison::VariableSansValeur(ident.to_string())),
        }
    }

    Ok(base)
}

fn valeur_variable(nom: &str, variables: &Variables) -> Resultat<f64> {
    if !est_nom_variable(nom) {
        return invalide(Raison::StructureVariable(nom.to_string()));
    }
    match variables.get(nom) {
        Some(v) => Ok(*v),
        None => invalide(Raison::VariableSansValeur(nom.to_string())),
    }
}
