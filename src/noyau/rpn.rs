// src/noyau/rpn.rs
//
// Shunting-yard : jetons infixes -> RPN (postfixe)
//
// Règles:
// - opérateur : dépile tant que le sommet n’est pas '(' et que
//     précédence(sommet) > précédence(jeton), ou égale et jeton associatif à gauche
// - fonction / '(' : empilés tels quels (une fonction a la précédence maximale,
//   elle sortira juste après son argument)
// - ')' : dépile jusqu’à '(' (jetée)
// - le reste (nombre, variable, constante) : sortie directe

use log::debug;

use super::erreur::{invalide, Raison, Resultat};
use super::jetons::Jeton;
use super::table::{est_associatif_droite, genre, precedence, Genre, PAR_G};

/// Convertit une suite de jetons infixes en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [sin, (, 3, +, 4, ), *, 2]
///   rpn:    [3, 4, +, sin, 2, *]
pub fn to_rpn(jetons: &[Jeton]) -> Resultat<Vec<Jeton>> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<&Jeton> = Vec::new();

    for jeton in jetons {
        match genre(jeton) {
            Genre::Operateur => {
                let p = precedence(jeton);
                let droite = est_associatif_droite(jeton);

                while let Some(sommet) = ops.last() {
                    if sommet.as_str() == PAR_G {
                        break;
                    }
                    let p_sommet = precedence(sommet);
                    let doit_sortir = p_sommet > p || (p_sommet == p && !droite);
                    if !doit_sortir {
                        break;
                    }
                    out.extend(ops.pop().cloned());
                }

                ops.push(jeton);
            }

            Genre::Fonction | Genre::ParG => ops.push(jeton),

            Genre::ParD => loop {
                match ops.pop() {
                    Some(sommet) if sommet.as_str() == PAR_G => break,
                    Some(sommet) => out.push(sommet.clone()),
                    None => return invalide(Raison::ParenthesesNonAppariees),
                }
            },

            Genre::Constante | Genre::Operande => out.push(jeton.clone()),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op.as_str() == PAR_G {
            return invalide(Raison::ParenthesesNonAppariees);
        }
        out.push(op.clone());
    }

    debug!("rpn: {}", out.join(" "));
    Ok(out)
}
