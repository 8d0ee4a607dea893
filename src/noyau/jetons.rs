// src/noyau/jetons.rs
//
// Tokenisation : chaîne infixe (déjà validée) -> suite de jetons infixes.
//
// Réécritures faites ici (le reste du pipeline ne voit que du binaire) :
// - multiplication implicite : "2a" -> 2 * a ; ")(" -> ) * (
// - moins unaire             : "-x" -> 0 - x ; "(-x" -> ( 0 - x
// - moins après opérateur    : "a*-b" -> a * ( 0 - b ) ; "a*-(…)" -> a * ( 0 - ( … ) )
//
// Un jeton n’est qu’un texte : chaque étape le reclasse via table::genre.

use log::trace;

use super::erreur::{invalide, Raison, Resultat};
use super::table::{est_caractere_operateur, est_fonction, FOIS, MOINS, PAR_D, PAR_G};

pub type Jeton = String;

/// Portées « synthétiques » ouvertes pour un moins placé après un opérateur.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct PorteesMoins {
    /// moins portant sur UN jeton : la portée se ferme après ce jeton
    jeton: usize,
    /// moins portant sur un groupe, en attente de la '(' du groupe
    groupe_arme: bool,
    /// profondeur réelle de chaque groupe porté par un moins (pile)
    groupes: Vec<usize>,
}

struct Scan<'a> {
    car: &'a [char],
    jetons: Vec<Jeton>,
    tampon: String,
    tampon_numerique: bool,
    profondeur: usize,
    moins: PorteesMoins,
}

/// Tokenise une expression validée (voir validation::valide).
///
/// Exemple :
///   "3*-2a"  ->  [3, *, (, 0, -, 2, ), *, a]
pub fn tokenize(expression: &str) -> Resultat<Vec<Jeton>> {
    if expression.is_empty() {
        return invalide(Raison::ExpressionVide);
    }

    let car: Vec<char> = expression.chars().collect();
    let mut scan = Scan {
        car: &car,
        jetons: Vec::with_capacity(car.len()),
        tampon: String::new(),
        tampon_numerique: true,
        profondeur: 0,
        moins: PorteesMoins::default(),
    };

    for i in 0..car.len() {
        let c = car[i];
        if c.is_ascii_digit() {
            scan.chiffre(c);
        } else if c == '.' {
            scan.point(i)?;
        } else if c.is_ascii_alphabetic() {
            scan.lettre(c)?;
        } else if est_caractere_operateur(c) {
            scan.operateur(i, c)?;
        } else if c == '(' {
            scan.parenthese_gauche()?;
        } else if c == ')' {
            scan.parenthese_droite(i)?;
        } else {
            return invalide(Raison::SymboleInconnu(c));
        }
        trace!("'{c}' -> {:?} / {:?}", scan.jetons, scan.moins);
    }

    scan.pousse_tampon()?;
    while scan.moins.jeton > 0 {
        scan.ferme_moins_jeton();
    }

    Ok(scan.jetons)
}

impl Scan<'_> {
    fn precedent(&self, i: usize) -> Option<char> {
        i.checked_sub(1).map(|j| self.car[j])
    }

    fn suivant(&self, i: usize) -> Option<char> {
        self.car.get(i + 1).copied()
    }

    fn emet(&mut self, jeton: &str) {
        self.jetons.push(jeton.to_string());
    }

    /// Opérande en cours -> jeton. Un nom de fonction n’arrive ici que sans sa '('.
    fn pousse_tampon(&mut self) -> Resultat<()> {
        if est_fonction(&self.tampon) {
            return invalide(Raison::FonctionSansArgument(self.tampon.clone()));
        }
        if !self.tampon.is_empty() {
            self.jetons.push(std::mem::take(&mut self.tampon));
        }
        Ok(())
    }

    /// Ferme UNE portée « moins sur un jeton » si elle est ouverte.
    fn ferme_moins_jeton(&mut self) {
        if self.moins.jeton > 0 {
            self.emet(PAR_D);
            self.moins.jeton -= 1;
        }
    }

    fn chiffre(&mut self, c: char) {
        if self.tampon.is_empty() {
            self.tampon_numerique = true;
        }
        self.tampon.push(c);
    }

    /// Le point doit être suivi d’un chiffre ; précédé d’un chiffre (nombre en cours),
    /// ou en tête / après un opérateur / après '(' (un 0 est alors ajouté devant).
    fn point(&mut self, i: usize) -> Resultat<()> {
        if !matches!(self.suivant(i), Some(c) if c.is_ascii_digit()) {
            return invalide(Raison::PointDecimal);
        }

        match self.precedent(i) {
            Some(p) if p.is_ascii_digit() => {
                if !self.tampon_numerique || self.tampon.contains('.') {
                    return invalide(Raison::PointDecimal);
                }
                self.tampon.push('.');
            }
            None | Some('(') => self.zero_point(),
            Some(p) if est_caractere_operateur(p) => self.zero_point(),
            Some(_) => return invalide(Raison::PointDecimal),
        }
        Ok(())
    }

    fn zero_point(&mut self) {
        if self.tampon.is_empty() {
            self.tampon_numerique = true;
        }
        self.tampon.push_str("0.");
    }

    /// Lettre après des chiffres : multiplication implicite ("2a" -> 2 * a).
    fn lettre(&mut self, c: char) -> Resultat<()> {
        if self.tampon.is_empty() {
            self.tampon_numerique = false;
        }

        if self.tampon_numerique {
            self.pousse_tampon()?;
            self.ferme_moins_jeton();
            self.emet(FOIS);
            self.tampon_numerique = false;
        }
        self.tampon.push(c);
        Ok(())
    }

    fn operateur(&mut self, i: usize, c: char) -> Resultat<()> {
        let Some(suivant) = self.suivant(i) else {
            return invalide(Raison::OperateurEnFin);
        };

        if c == '-' {
            return self.moins(i, suivant);
        }

        match self.precedent(i) {
            None => return invalide(Raison::OperateurEnDebut),
            Some('(') => return invalide(Raison::OperateurApresParenthese),
            Some(_) => {}
        }

        if est_caractere_operateur(suivant) && suivant != '-' {
            return invalide(Raison::SuiteOperateurs);
        }

        self.pousse_tampon()?;
        self.ferme_moins_jeton();
        self.jetons.push(c.to_string());
        Ok(())
    }

    /// Moins : binaire, ou unaire réécrit en soustraction depuis 0.
    fn moins(&mut self, i: usize, suivant: char) -> Resultat<()> {
        if suivant == ')' || (est_caractere_operateur(suivant) && suivant != '-') {
            return invalide(Raison::OperandesSoustraction);
        }

        match self.precedent(i) {
            // "-x…" -> 0 - x…
            None => self.emet("0"),
            // "(-x" -> ( 0 - x
            Some('(') => self.emet("0"),
            // "a*-b" -> a * ( 0 - b ) : portée synthétique
            Some(p) if est_caractere_operateur(p) => {
                if suivant == '(' {
                    self.moins.groupe_arme = true;
                } else {
                    self.moins.jeton += 1;
                }
                self.emet(PAR_G);
                self.emet("0");
            }
            Some(_) => {
                self.pousse_tampon()?;
                self.ferme_moins_jeton();
            }
        }

        self.emet(MOINS);
        Ok(())
    }

    fn parenthese_gauche(&mut self) -> Resultat<()> {
        if !self.tampon.is_empty() {
            if !est_fonction(&self.tampon) {
                return if self.tampon_numerique {
                    invalide(Raison::OperateurManquant)
                } else {
                    invalide(Raison::FonctionInconnue(self.tampon.clone()))
                };
            }

            self.jetons.push(std::mem::take(&mut self.tampon));

            // "-sin(…)" : la portée du moins couvre tout l’appel, donc son groupe
            if self.moins.jeton > 0 {
                self.moins.jeton -= 1;
                self.moins.groupe_arme = true;
            }
        }

        self.profondeur += 1;
        if self.moins.groupe_arme {
            self.moins.groupes.push(self.profondeur);
            self.moins.groupe_arme = false;
        }

        self.emet(PAR_G);
        Ok(())
    }

    fn parenthese_droite(&mut self, i: usize) -> Resultat<()> {
        match self.precedent(i) {
            Some('(') => return invalide(Raison::ParenthesesVides),
            Some(p) if est_caractere_operateur(p) => {
                return invalide(Raison::OperateurAvantParenthese)
            }
            _ => {}
        }

        if self.profondeur == 0 {
            return invalide(Raison::ParenthesesNonAppariees);
        }

        self.pousse_tampon()?;
        self.ferme_moins_jeton();

        self.emet(PAR_D);
        if self.moins.groupes.last() == Some(&self.profondeur) {
            self.moins.groupes.pop();
            self.emet(PAR_D);
        }
        self.profondeur -= 1;

        match self.suivant(i) {
            Some('(') => self.emet(FOIS),
            Some(c) if c.is_ascii_alphanumeric() || c == '.' => {
                return invalide(Raison::OperateurManquant)
            }
            _ => {}
        }

        Ok(())
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    jetons.join(" ")
}
