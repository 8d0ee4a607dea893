//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - table.rs        : opérateurs, précédences, fonctions, constantes, formes de noms
//! - fonctions.rs    : fonctions mathématiques avec contrôle de domaine
//! - validation.rs   : normalisation + symboles interdits + suites d’opérateurs
//! - parentheses.rs  : équilibre des parenthèses
//! - jetons.rs       : tokenisation (multiplication implicite, moins unaire)
//! - rpn.rs          : shunting-yard
//! - calcul.rs       : évaluation de la RPN
//! - variables.rs    : affectations "nom=valeur"
//! - eval.rs         : pipeline complet
//! - format.rs       : affichage du résultat
//! - erreur.rs       : erreurs

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod parentheses;
pub mod rpn;
pub mod table;
pub mod validation;
pub mod variables;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calcul::{eval_rpn, Variables};
pub use erreur::{Categorie, Erreur, Raison, Resultat};
pub use eval::{eval_expression, evaluer, Expression};
pub use jetons::tokenize;
pub use rpn::to_rpn;
