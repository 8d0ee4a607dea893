//! Noyau : erreurs
//!
//! Une seule taxonomie côté utilisateur : `Erreur::ExpressionInvalide(Raison)`.
//! `RpnMalformee` est réservée aux suites postfixées mal formées (défaut du programme
//! appelant, pas une faute de saisie).

use thiserror::Error;

/// Catégories d’erreurs utilisateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    /// caractère inconnu, point décimal, moins mal placé, opérateur manquant
    Lexicale,
    /// parenthèses
    Structurelle,
    /// fonction / variable inconnue, nom mal formé, valeur manquante
    Semantique,
    /// division par zéro, racine de négatif, trig/log hors domaine
    Domaine,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Raison {
    #[error("l’expression ne peut pas être vide")]
    ExpressionVide,
    #[error("symbole en trop : '{0}'")]
    SymboleEnTrop(String),
    #[error("opérateurs consécutifs : '{0}'")]
    OperateursConsecutifs(String),
    #[error("symbole inconnu : {0}")]
    SymboleInconnu(char),
    #[error("usage invalide du point décimal")]
    PointDecimal,

    #[error("opérateur en fin d’expression")]
    OperateurEnFin,
    #[error("opérateur en début d’expression")]
    OperateurEnDebut,
    #[error("opérateur après une parenthèse ouvrante")]
    OperateurApresParenthese,
    #[error("suite d’opérateurs dont le second n’est pas un moins")]
    SuiteOperateurs,
    #[error("opérandes de soustraction invalides")]
    OperandesSoustraction,
    #[error("pas d’opérateur entre la parenthèse et l’opérande")]
    OperateurManquant,
    #[error("parenthèses vides")]
    ParenthesesVides,
    #[error("opérateur avant une parenthèse fermante")]
    OperateurAvantParenthese,

    #[error("parenthèses invalides")]
    ParenthesesInvalides,
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    #[error("fonction inconnue '{0}'")]
    FonctionInconnue(String),
    #[error("fonction '{0}' sans argument : '(' attendue")]
    FonctionSansArgument(String),
    #[error("fonction '{0}' non supportée")]
    FonctionNonSupportee(String),
    #[error("opérateur inconnu : {0}")]
    OperateurInconnu(String),
    #[error("pas de valeur pour la variable '{0}'")]
    VariableSansValeur(String),
    #[error("structure de variable invalide : '{0}'")]
    StructureVariable(String),
    #[error("base de logarithme invalide")]
    BaseLogarithme,
    #[error("variable invalide {0}")]
    AffectationInvalide(String),
    #[error("nom de variable invalide : {0}")]
    NomVariable(String),
    #[error("valeur de variable invalide : {0}")]
    ValeurVariable(String),

    #[error("division par zéro")]
    DivisionParZero,
    #[error("racine d’un nombre négatif impossible à calculer")]
    RacineNegative,
    #[error("tangente de {0} degrés indéfinie")]
    TangenteIndefinie(f64),
    #[error("cotangente de {0} degrés indéfinie")]
    CotangenteIndefinie(f64),
    #[error("arcsinus de {0} indéfini")]
    ArcsinusIndefini(f64),
    #[error("arccosinus de {0} indéfini")]
    ArccosinusIndefini(f64),
    #[error("logarithme naturel de {0} indéfini")]
    LnIndefini(f64),
    #[error("logarithme décimal de {0} indéfini")]
    LgIndefini(f64),
    #[error("logarithme de {0} indéfini")]
    LogIndefini(f64),
    #[error("la base du logarithme doit être > 0 et différente de 1 (base = {0})")]
    BaseHorsDomaine(f64),
    #[error("racine paire d’un nombre négatif indéfinie")]
    RacinePaireNegative,
}

impl Raison {
    pub fn categorie(&self) -> Categorie {
        use Raison::*;
        match self {
            ExpressionVide
            | SymboleEnTrop(_)
            | OperateursConsecutifs(_)
            | SymboleInconnu(_)
            | PointDecimal
            | OperateurEnFin
            | OperateurEnDebut
            | OperateurApresParenthese
            | SuiteOperateurs
            | OperandesSoustraction
            | OperateurManquant
            | ParenthesesVides
            | OperateurAvantParenthese => Categorie::Lexicale,

            ParenthesesInvalides | ParenthesesNonAppariees => Categorie::Structurelle,

            FonctionInconnue(_)
            | FonctionSansArgument(_)
            | FonctionNonSupportee(_)
            | OperateurInconnu(_)
            | VariableSansValeur(_)
            | StructureVariable(_)
            | BaseLogarithme
            | AffectationInvalide(_)
            | NomVariable(_)
            | ValeurVariable(_) => Categorie::Semantique,

            DivisionParZero
            | RacineNegative
            | TangenteIndefinie(_)
            | CotangenteIndefinie(_)
            | ArcsinusIndefini(_)
            | ArccosinusIndefini(_)
            | LnIndefini(_)
            | LgIndefini(_)
            | LogIndefini(_)
            | BaseHorsDomaine(_)
            | RacinePaireNegative => Categorie::Domaine,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Erreur {
    #[error("expression invalide : {0}")]
    ExpressionInvalide(#[from] Raison),

    #[error("suite RPN malformée : {restantes} valeur(s) sur la pile au lieu d’une")]
    RpnMalformee { restantes: usize },
}

impl Erreur {
    /// Raison utilisateur, `None` pour une RPN malformée.
    pub fn raison(&self) -> Option<&Raison> {
        match self {
            Erreur::ExpressionInvalide(r) => Some(r),
            Erreur::RpnMalformee { .. } => None,
        }
    }
}

pub type Resultat<T> = Result<T, Erreur>;

/// Raccourci : `Err(invalide(Raison::X))?`
pub(crate) fn invalide<T>(raison: Raison) -> Resultat<T> {
    Err(Erreur::ExpressionInvalide(raison))
}
