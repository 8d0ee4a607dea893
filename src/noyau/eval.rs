//! Noyau : évaluation (pipeline réel)
//!
//! équilibre des parenthèses -> validation -> jetons -> RPN   (une fois, `Expression::compiler`)
//!        -> table des variables -> calcul RPN                  (à chaque évaluation)
//!
//! Une `Expression` compilée est immuable : on la réévalue autant de fois qu’on veut
//! avec d’autres valeurs de variables, sans repasser par la tokenisation.

use log::debug;

use super::calcul::{eval_rpn, Variables};
use super::erreur::{invalide, Raison, Resultat};
use super::jetons::{format_tokens, tokenize, Jeton};
use super::parentheses::equilibrees;
use super::rpn::to_rpn;
use super::validation::valide;
use super::variables::table_variables;

/// Expression compilée en RPN.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    source: String,
    jetons: Vec<Jeton>,
    rpn: Vec<Jeton>,
}

impl Expression {
    pub fn compiler(source: &str) -> Resultat<Self> {
        if source.is_empty() {
            return invalide(Raison::ExpressionVide);
        }
        if !equilibrees(source) {
            return invalide(Raison::ParenthesesInvalides);
        }

        let validee = valide(source)?;
        let jetons = tokenize(&validee)?;
        debug!("jetons: {}", format_tokens(&jetons));
        let rpn = to_rpn(&jetons)?;

        Ok(Self {
            source: source.to_string(),
            jetons,
            rpn,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Jetons infixes (après réécritures du tokenizer).
    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn rpn(&self) -> &[Jeton] {
        &self.rpn
    }

    pub fn evaluer(&self, variables: &Variables) -> Resultat<f64> {
        eval_rpn(&self.rpn, variables)
    }

    /// Variante avec affectations brutes "nom=valeur".
    pub fn evaluer_affectations<S: AsRef<str>>(&self, affectations: &[S]) -> Resultat<f64> {
        let variables = table_variables(affectations)?;
        self.evaluer(&variables)
    }
}

/// API publique : évalue une expression avec des affectations "nom=valeur".
///
/// ```
/// use calculatrice_rpn::noyau::evaluer;
///
/// assert_eq!(evaluer("2 + 2", &[] as &[&str]).unwrap(), 4.0);
/// assert_eq!(evaluer("x*y", &["x=5", "y=3"]).unwrap(), 15.0);
/// ```
pub fn evaluer<S: AsRef<str>>(expression: &str, affectations: &[S]) -> Resultat<f64> {
    Expression::compiler(expression)?.evaluer_affectations(affectations)
}

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub variables: String,
    pub note: String,
}

/// API UI : résultat + démarche (jetons, RPN, variables retenues).
pub fn eval_expression<S: AsRef<str>>(
    expr_str: &str,
    affectations: &[S],
) -> Resultat<(f64, DemarcheNoyau)> {
    let s = expr_str.trim();
    let expression = Expression::compiler(s)?;
    let variables = table_variables(affectations)?;
    let v = expression.evaluer(&variables)?;

    let mut noms: Vec<(&String, &f64)> = variables.iter().collect();
    noms.sort_by(|a, b| a.0.cmp(b.0));
    let variables_txt = noms
        .iter()
        .map(|(k, v)| format!("{k} = {v}"))
        .collect::<Vec<_>>()
        .join(", ");

    let d = DemarcheNoyau {
        jetons: format_tokens(expression.jetons()),
        rpn: format_tokens(expression.rpn()),
        variables: variables_txt,
        note: "Pipeline: parenthèses → validation → jetons → RPN → pile (angles en degrés)."
            .into(),
    };

    Ok((v, d))
}
