// src/noyau/fonctions.rs
//
// Fonctions mathématiques avec contrôle de domaine.
// Angles en DEGRÉS pour sin/cos/tg/ctg ; les réciproques rendent des radians.

use std::f64::consts::FRAC_PI_2;

use super::erreur::{invalide, Raison, Resultat};

/// Reste de `angle` modulo 180°, dans [0, 180).
fn reste_180(angle: f64) -> f64 {
    angle - 180.0 * (angle / 180.0).floor()
}

pub fn sin(angle: f64) -> f64 {
    angle.to_radians().sin()
}

pub fn cos(angle: f64) -> f64 {
    angle.to_radians().cos()
}

pub fn tg(angle: f64) -> Resultat<f64> {
    let r = reste_180(angle);
    if r == 90.0 || r == -90.0 {
        return invalide(Raison::TangenteIndefinie(angle));
    }
    Ok(angle.to_radians().tan())
}

pub fn ctg(angle: f64) -> Resultat<f64> {
    if reste_180(angle) == 0.0 {
        return invalide(Raison::CotangenteIndefinie(angle));
    }
    Ok(1.0 / angle.to_radians().tan())
}

pub fn arcsin(x: f64) -> Resultat<f64> {
    if x.abs() > 1.0 {
        return invalide(Raison::ArcsinusIndefini(x));
    }
    Ok(x.asin())
}

pub fn arccos(x: f64) -> Resultat<f64> {
    if x.abs() > 1.0 {
        return invalide(Raison::ArccosinusIndefini(x));
    }
    Ok(x.acos())
}

pub fn arctg(x: f64) -> f64 {
    x.atan()
}

pub fn arcctg(x: f64) -> f64 {
    FRAC_PI_2 - x.atan()
}

pub fn ln(x: f64) -> Resultat<f64> {
    if x <= 0.0 {
        return invalide(Raison::LnIndefini(x));
    }
    Ok(x.ln())
}

pub fn lg(x: f64) -> Resultat<f64> {
    if x <= 0.0 {
        return invalide(Raison::LgIndefini(x));
    }
    Ok(x.log10())
}

/// log_base(x) : x > 0, base > 0, base ≠ 1.
pub fn log(x: f64, base: f64) -> Resultat<f64> {
    if x <= 0.0 {
        return invalide(Raison::LogIndefini(x));
    }
    if base <= 0.0 || base == 1.0 {
        return invalide(Raison::BaseHorsDomaine(base));
    }
    Ok(x.ln() / base.ln())
}

pub fn sqrt(x: f64) -> Resultat<f64> {
    if x < 0.0 {
        return invalide(Raison::RacinePaireNegative);
    }
    Ok(x.sqrt())
}

pub fn abs(x: f64) -> f64 {
    x.abs()
}

/// Fonction unaire à nom exact (hors famille `log…`, qui a besoin des variables).
pub fn applique(nom: &str, x: f64) -> Option<Resultat<f64>> {
    let r = match nom {
        "sin" => Ok(sin(x)),
        "cos" => Ok(cos(x)),
        "tg" => tg(x),
        "ctg" => ctg(x),
        "arcsin" => arcsin(x),
        "arccos" => arccos(x),
        "arctg" => Ok(arctg(x)),
        "arcctg" => Ok(arcctg(x)),
        "ln" => ln(x),
        "lg" => lg(x),
        "sqrt" => sqrt(x),
        "abs" => Ok(abs(x)),
        _ => return None,
    };
    Some(r)
}
