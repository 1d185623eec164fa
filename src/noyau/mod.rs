//! Noyau — moteur d'expressions infixes
//!
//! Organisation interne :
//! - jetons.rs  : modèle Jeton/Operation (rang, associativité, arité,
//!                calcul sur pile) + découpage paresseux
//! - rpn.rs     : shunting-yard (infixe -> postfixe), décision unaire
//! - eval.rs    : évaluation postfixe sur pile + Donnee (valeur | erreur)
//! - erreur.rs  : erreurs de parse typées (canal Result, pas de panic)
//! - format.rs  : affichage des valeurs f64

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{evalue, evalue_expression, Donnee};
