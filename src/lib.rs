//! Calculatrice RPN : évaluation d’expressions en f64, variables nommées comprises.
//!
//! ```
//! use calculatrice_rpn::noyau::evaluer;
//!
//! let v = evaluer("sqrt(25) + 3^2", &[] as &[&str]).unwrap();
//! assert_eq!(v, 14.0);
//! ```

pub mod noyau;
