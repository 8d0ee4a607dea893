//! Tests fuzz safe : propriétés du pipeline (proptest).
//!
//! - chaînes de moins unaires imbriqués (profondeur 1 à 4) : valeur attendue exacte
//! - aller-retour : jetons -> RPN -> calcul == arithmétique directe
//! - jetons toujours équilibrés quand l’entrée l’est
//! - déterminisme (mêmes bits d’une évaluation à l’autre)
//! - aucune panique, quelle que soit l’entrée

use proptest::prelude::*;

use super::erreur::Erreur;
use super::evaluer;
use super::jetons::tokenize;
use super::parentheses::equilibrees;
use super::validation::valide;

const AUCUNE: &[&str] = &[];

/* ------------------------ Chaînes de moins ------------------------ */

/// Enveloppes possibles autour d’une sous-expression de valeur v.
fn enveloppe(forme: u8, x: &str, v: f64) -> (String, f64) {
    match forme % 4 {
        0 => (format!("-({x})"), -v),
        1 => (format!("2*-({x})"), -2.0 * v),
        2 => (format!("(-({x}))"), -v),
        _ => (format!("1*-abs({x})"), -v.abs()),
    }
}

fn chaine_de_moins(k: u8, formes: &[u8]) -> (String, f64) {
    let mut expr = k.to_string();
    let mut v = f64::from(k);
    for f in formes {
        let (e, w) = enveloppe(*f, &expr, v);
        expr = e;
        v = w;
    }
    (expr, v)
}

/* ------------------------ Arithmétique de référence ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Nombre(u8),
    Oppose(Box<Arbre>),
    Binaire(Box<Arbre>, char, Box<Arbre>),
}

impl Arbre {
    fn texte(&self) -> String {
        match self {
            Arbre::Nombre(n) => n.to_string(),
            Arbre::Oppose(a) => format!("(-{})", a.texte()),
            Arbre::Binaire(a, op, b) => format!("({}{op}{})", a.texte(), b.texte()),
        }
    }

    fn valeur(&self) -> f64 {
        match self {
            Arbre::Nombre(n) => f64::from(*n),
            Arbre::Oppose(a) => 0.0 - a.valeur(),
            Arbre::Binaire(a, op, b) => {
                let (x, y) = (a.valeur(), b.valeur());
                match op {
                    '+' => x + y,
                    '-' => x - y,
                    _ => x * y,
                }
            }
        }
    }
}

fn arbre() -> impl Strategy<Value = Arbre> {
    let feuille = (0u8..10).prop_map(Arbre::Nombre);
    feuille.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|a| Arbre::Oppose(Box::new(a))),
            (
                inner.clone(),
                prop::sample::select(vec!['+', '-', '*']),
                inner
            )
                .prop_map(|(a, op, b)| Arbre::Binaire(Box::new(a), op, Box::new(b))),
        ]
    })
}

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn fuzz_chaines_de_moins_imbriques(
        k in 1u8..10,
        formes in prop::collection::vec(any::<u8>(), 1..=4),
    ) {
        let (expr, attendu) = chaine_de_moins(k, &formes);
        let v = evaluer(&expr, AUCUNE);
        prop_assert_eq!(v, Ok(attendu), "expr={}", expr);
    }

    #[test]
    fn fuzz_moins_successifs_meme_profondeur(
        (a, b) in (1u8..10, 1u8..10),
        formes_a in prop::collection::vec(any::<u8>(), 1..=3),
        formes_b in prop::collection::vec(any::<u8>(), 1..=3),
    ) {
        let (ea, va) = chaine_de_moins(a, &formes_a);
        let (eb, vb) = chaine_de_moins(b, &formes_b);
        let expr = format!("({ea})+({eb})");
        prop_assert_eq!(evaluer(&expr, AUCUNE), Ok(va + vb), "expr={}", expr);
    }

    #[test]
    fn fuzz_aller_retour_arithmetique(a in arbre()) {
        let expr = a.texte();
        let v = evaluer(&expr, AUCUNE);
        prop_assert_eq!(v, Ok(a.valeur()), "expr={}", expr);
    }

    #[test]
    fn fuzz_precedence_et_associativite(
        (a, b, c) in (1u8..6, 1u8..6, 1u8..4),
    ) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));
        let cas = [
            (format!("{a}+{b}*{c}"), x + y * z),
            (format!("{a}-{b}-{c}"), (x - y) - z),
            (format!("{a}/{b}/{c}"), (x / y) / z),
            (format!("{a}^{b}^{c}"), x.powf(y.powf(z))),
            (format!("{a}*{b}^{c}"), x * y.powf(z)),
        ];
        for (expr, attendu) in cas {
            let v = evaluer(&expr, AUCUNE);
            prop_assert!(
                matches!(v, Ok(w) if proche(w, attendu)),
                "expr={} : {:?} au lieu de {}", expr, v, attendu
            );
        }
    }

    #[test]
    fn fuzz_jetons_equilibres(s in "(sin|abs|log2|[0-9a-c+*/^().-]){1,16}") {
        if !equilibrees(&s) {
            return Ok(());
        }
        let Ok(validee) = valide(&s) else { return Ok(()); };
        if let Ok(jetons) = tokenize(&validee) {
            let ouvrantes = jetons.iter().filter(|j| j.as_str() == "(").count();
            let fermantes = jetons.iter().filter(|j| j.as_str() == ")").count();
            prop_assert_eq!(ouvrantes, fermantes, "s={} jetons={:?}", s, jetons);
        }
    }

    #[test]
    fn fuzz_determinisme(a in arbre(), x in -50i32..50) {
        let _ = env_logger::builder().is_test(true).try_init();
        let expr = format!("{}*x", a.texte());
        let affectation = format!("x={x}");
        let premier = evaluer(&expr, &[affectation.as_str()]);
        let second = evaluer(&expr, &[affectation.as_str()]);
        prop_assert_eq!(
            premier.map(f64::to_bits),
            second.map(f64::to_bits),
            "expr={}", expr
        );
    }

    #[test]
    fn fuzz_sans_panique(s in "\\PC{0,32}") {
        let _ = evaluer(&s, AUCUNE);
    }

    #[test]
    fn fuzz_entree_bien_formee_jamais_rpn_malformee(
        s in "(sin|abs|log2|loga|pi|[0-9a-c+*/^().-]){1,16}",
    ) {
        // pipeline complet : une RPN malformée serait un défaut du tokenizer/convertisseur,
        // y compris pour un nom de fonction privé de sa '('
        let r = evaluer(&s, &["a=1", "b=2", "c=3"]);
        prop_assert!(
            !matches!(r, Err(Erreur::RpnMalformee { .. })),
            "s={} : {:?}", s, r
        );
    }
}

#[test]
fn chaines_connues() {
    // profondeur 1 à 4, écrites à la main
    assert_eq!(evaluer("-(3)", AUCUNE), Ok(-3.0));
    assert_eq!(evaluer("-(-(3))", AUCUNE), Ok(3.0));
    assert_eq!(evaluer("-(-(-(3)))", AUCUNE), Ok(-3.0));
    assert_eq!(evaluer("2*-(2*-(2*-(2*-(3))))", AUCUNE), Ok(48.0));
    assert_eq!(evaluer("2*-(3)+4*-(5)", AUCUNE), Ok(-26.0));
    assert_eq!(evaluer("1*-abs(1*-abs(-2))", AUCUNE), Ok(-2.0));
}
