//! Tests scientifiques (campagne) : expressions complètes, domaines, saisies invalides.
//!
//! Valeurs de référence : trigonométrie en degrés, arcsin/arccos/arctg en radians.

use super::erreur::{Categorie, Erreur, Raison};
use super::evaluer;

const AUCUNE: &[&str] = &[];

fn eval_ok(expr: &str, affectations: &[&str]) -> f64 {
    evaluer(expr, affectations).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, affectations: &[&str], attendu: f64) {
    let v = eval_ok(expr, affectations);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} : {v} au lieu de {attendu}"
    );
}

fn raison(expr: &str, affectations: &[&str]) -> Raison {
    match evaluer(expr, affectations) {
        Err(Erreur::ExpressionInvalide(r)) => r,
        autre => panic!("erreur attendue pour expr={expr:?}, obtenu {autre:?}"),
    }
}

/* ------------------------ Faciles ------------------------ */

#[test]
fn sci_faciles() {
    assert_proche("2 + 2", AUCUNE, 4.0);
    assert_proche("5.2 + (4 + 6) ", AUCUNE, 15.2);
    assert_proche("4 / 5 ^ 3", AUCUNE, 0.032);
    assert_proche("3 ^ 2 ^ 3", AUCUNE, 6561.0);
    assert_proche("5,5 \u{2212} 0,5", AUCUNE, 5.0);
}

/* ------------------------ Difficiles ------------------------ */

#[test]
fn sci_multiplication_implicite_entre_groupes() {
    assert_proche("(3 + 4 )(5-2)  / 2", AUCUNE, 10.5);
}

#[test]
fn sci_fonctions_melangees() {
    assert_proche("sqrt(25) + 3 ^2 - 4 / ln(2)", AUCUNE, 8.229219836444146);
    assert_proche("sin(30) + cos(60) * tg(45)/ 16 ^ (1 / 2)", AUCUNE, 0.625);
    assert_proche(
        "2 ^ 3 / log10(1000) + 1 / 16 ^ (1 / 2)",
        AUCUNE,
        2.9166666666666665,
    );
    assert_proche(" 1 + 2 * 3 ^ 2 / (sqrt(4) - ln(e))", AUCUNE, 19.0);
}

#[test]
fn sci_moins_unaires_composes() {
    assert_proche(
        "-sin(45) * -cos(45) / (arcsin(0,5) + arccos(0,5))",
        AUCUNE,
        0.31830988618379064,
    );
    assert_proche(
        "(2^(1  /2)) ^ -sin(45) + tg(30) * ctg(30) / (ln(e ^ 4) - log10(1000))",
        AUCUNE,
        1.7826540273556803,
    );
    assert_proche("(3*4+5^(-(-(9^0.5))))", &["a = 2"], 137.0);
    assert_proche(
        "(5*-(-sin(56*-(45/tg(40^(cos(45))))+6))/(-5+(-cos(7))))/3",
        AUCUNE,
        -0.057031853310392865,
    );
    assert_proche(
        "5^(-(-sin(80 + (-(5* tg(30) /9)))*-(-2)))",
        &["a = 2"],
        23.73130631282768,
    );
}

#[test]
fn sci_variables() {
    assert_proche(
        "1+(-2+3*4+5^-sin(45*cos(a^b)))/7",
        &["a = 2", "b = 8.3"],
        2.489577999176534,
    );
    assert_proche("2 + log3a2(4 * 9)", &["a2 = 2"], 4.0);
    assert_proche("r^2 * pi", &["r=-e"], std::f64::consts::E.powi(2) * std::f64::consts::PI);
}

#[test]
fn sci_variables_manquantes_ou_mal_formees() {
    assert_eq!(
        raison("(3*4+b^-((-9)^0.5))", &["a = 2"]),
        Raison::VariableSansValeur("b".into())
    );
    assert_eq!(
        raison("2 + log3a2n(4 * 9)", &["a2 = 2"]),
        Raison::BaseLogarithme
    );
}

/* ------------------------ Domaines ------------------------ */

#[test]
fn sci_domaines() {
    let cas: [(&str, &[&str], Raison); 12] = [
        ("2 + arcsin(5)", AUCUNE, Raison::ArcsinusIndefini(5.0)),
        ("arccos(-2) * 6", AUCUNE, Raison::ArccosinusIndefini(-2.0)),
        ("5 + tg(270)", AUCUNE, Raison::TangenteIndefinie(270.0)),
        ("ctg(360)", AUCUNE, Raison::CotangenteIndefinie(360.0)),
        (" ln(a)", &["a = -2"], Raison::LnIndefini(-2.0)),
        ("log2(-8)", AUCUNE, Raison::LogIndefini(-8.0)),
        ("loga(9)", &["a = -9"], Raison::BaseHorsDomaine(-9.0)),
        ("log1(9)", AUCUNE, Raison::BaseHorsDomaine(1.0)),
        ("lg(-8)", AUCUNE, Raison::LgIndefini(-8.0)),
        ("sqrt(-4)", AUCUNE, Raison::RacinePaireNegative),
        ("(-5)^0.5", AUCUNE, Raison::RacineNegative),
        ("50 / 0", AUCUNE, Raison::DivisionParZero),
    ];

    for (expr, vars, attendu) in cas {
        let r = raison(expr, vars);
        assert_eq!(r, attendu, "expr={expr:?}");
        assert_eq!(r.categorie(), Categorie::Domaine, "expr={expr:?}");
    }
}

/* ------------------------ Saisies invalides ------------------------ */

#[test]
fn sci_saisies_invalides() {
    let cas: [(&str, &[&str]); 24] = [
        ("(2 + 5)a", &["a = 7"]),
        ("2.b + 2", &["b = 8"]),
        ("(2 + 5)4", AUCUNE),
        ("5.-4", AUCUNE),
        ("3-*  54", AUCUNE),
        ("4+*5", AUCUNE),
        ("(/6 * 2)", AUCUNE),
        ("5. ^4", AUCUNE),
        ("a(6 + 7)", AUCUNE),
        ("8(6 * 2)", AUCUNE),
        ("24.(4 + 1)", AUCUNE),
        ("(4 +6 -)", AUCUNE),
        ("( 1 + 3 *)", AUCUNE),
        ("() + 9", AUCUNE),
        ("(4 + 5.)", AUCUNE),
        ("a.5 + 1", &["a= 8"]),
        ("(2 + 4).4", AUCUNE),
        ("2..4 + 1", AUCUNE),
        ("5a + 1 -", &["a = 7"]),
        ("*3 / 9", AUCUNE),
        ("2 +9 ^", AUCUNE),
        ("5 + (7 + 2(", AUCUNE),
        (") 5 * 3)", AUCUNE),
        ("4 + 4.", AUCUNE),
    ];

    for (expr, vars) in cas {
        let r = raison(expr, vars);
        // "a(6 + 7)" : fonction inconnue (sémantique) ; jamais une erreur de domaine
        assert_ne!(
            r.categorie(),
            Categorie::Domaine,
            "expr={expr:?} : catégorie inattendue pour {r:?}"
        );
    }
}

#[test]
fn sci_symboles_rejetes() {
    assert_eq!(
        raison("2 # 3", AUCUNE),
        Raison::SymboleEnTrop("#".into())
    );
    assert_eq!(
        raison("2 +-- 3", AUCUNE),
        Raison::OperateursConsecutifs("+--".into())
    );
    assert_eq!(raison("6 : 2", AUCUNE), Raison::SymboleInconnu(':'));
    // nom de fonction sans '(' : erreur de saisie, pas une RPN malformée
    let sans_argument = [
        ("sin", "sin"),
        ("2 * sin", "sin"),
        ("log2 + 1", "log2"),
        ("3 + abs", "abs"),
    ];
    for (expr, nom) in sans_argument {
        assert_eq!(
            raison(expr, &["x = 1"]),
            Raison::FonctionSansArgument(nom.into()),
            "expr={expr:?}"
        );
    }
    assert_eq!(
        raison("tan(45)", AUCUNE),
        Raison::FonctionInconnue("tan".into())
    );
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_idempotence() {
    let expr = "1+(-2+3*4+5^-sin(45*cos(a^b)))/7";
    let vars = ["a = 2", "b = 8.3"];
    let premier = eval_ok(expr, &vars);
    for _ in 0..20 {
        assert_eq!(eval_ok(expr, &vars).to_bits(), premier.to_bits());
    }
}
