// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> postfixe (notation polonaise inversée).
//
// Règles:
// - Décision unaire en UN SEUL point (decision_unaire) : étiquette lexicale
//   prioritaire, sinon contexte (aucun jeton précédent, ou jeton précédent
//   opérateur). Un opérateur "unaire" est empilé tel quel, sans dépilage
//   de précédence.
// - ')' dépile jusqu'à '(' ; pile vide avant '(' => ErreurParse (même canal
//   que les lexèmes invalides, pas de panic).
// - '(' restée sur la pile en fin d'entrée : vidée telle quelle vers la
//   sortie. Tolérance assumée, la séquence malformée sera rejetée par
//   l'évaluateur.

use super::erreur::ErreurParse;
use super::jetons::{format_jetons, Decoupeur, Jeton, Operation};

/// Décision unaire, appliquée une fois par opérateur rencontré.
///
/// Vrai si l'opérateur doit être empilé sans dépilage de précédence:
/// - étiquette lexicale UMINUS/UPLUS (prioritaire sur le contexte),
/// - aucun jeton précédent,
/// - jeton précédent opérateur — sauf ')', qui clôt une valeur.
fn decision_unaire(op: Operation, precedent: Option<Jeton>) -> bool {
    if op.est_unaire() {
        return true;
    }
    match precedent {
        None => true,
        Some(Jeton::Operande(_)) => false,
        Some(Jeton::Operateur(Operation::ParDroite)) => false,
        Some(Jeton::Operateur(_)) => true,
    }
}

/// Convertit une expression infixe en séquence postfixe.
///
/// Entrée vide ou blanche => séquence vide (c'est l'évaluateur qui en fait
/// une erreur "entrée vide", pas le convertisseur).
///
/// Exemple:
///   infixe:   "2 + 3 * 4"
///   postfixe: [2, 3, 4, *, +]
pub fn en_postfixe(infixe: &str) -> Result<Vec<Jeton>, ErreurParse> {
    let mut decoupeur = Decoupeur::nouveau(infixe);

    // Pile d'opérateurs + sortie, locales à l'appel.
    let mut ops: Vec<Operation> = Vec::new();
    let mut sortie: Vec<Jeton> = Vec::new();

    let mut precedent: Option<Jeton> = None;

    while let Some(jeton) = decoupeur.suivant()? {
        log::trace!("jeton = ({})", format_jetons(&[jeton]));

        match jeton {
            Jeton::Operande(_) => sortie.push(jeton),

            Jeton::Operateur(op) => {
                if decision_unaire(op, precedent) {
                    // unaire (ou position unaire) : empilé tel quel
                    ops.push(op);
                } else if op == Operation::ParGauche {
                    ops.push(op);
                } else if op == Operation::ParDroite {
                    // dépile jusqu'à '(' ; la '(' est consommée, pas émise
                    loop {
                        match ops.pop() {
                            Some(Operation::ParGauche) => break,
                            Some(dessus) => sortie.push(Jeton::Operateur(dessus)),
                            None => return Err(ErreurParse::ParentheseNonAppariee),
                        }
                    }
                } else {
                    // binaire ordinaire : dépile tant que le sommet prime
                    while let Some(dessus) = ops.last().copied() {
                        if dessus == Operation::ParGauche {
                            break;
                        }
                        let depiler = dessus.rang() > op.rang()
                            || (dessus.rang() == op.rang() && !op.est_associatif_droite());
                        if !depiler {
                            break;
                        }
                        ops.pop();
                        sortie.push(Jeton::Operateur(dessus));
                    }
                    ops.push(op);
                }
            }
        }

        precedent = Some(jeton);
    }

    // vide la pile ops (une '(' restante part telle quelle en sortie)
    while let Some(op) = ops.pop() {
        sortie.push(Jeton::Operateur(op));
    }

    log::debug!("postfixe = [{}]", format_jetons(&sortie));
    Ok(sortie)
}
