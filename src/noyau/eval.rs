//! Noyau — évaluation (pipeline réel)
//!
//! découpage -> postfixe (shunting-yard) -> pile d'opérandes -> Donnee
//!
//! Remarque : toutes les défaillances (entrée vide, pile insuffisante,
//! parenthèse non appariée, lexème invalide) ressortent par le MÊME canal
//! Donnee::Erreur. Rien ne traverse `evalue` en panic.

use super::erreur::ErreurParse;
use super::format::format_valeur;
use super::jetons::{decoupe_complete, format_jetons, Jeton};
use super::rpn::en_postfixe;

/// Message quand la séquence postfixe est vide (entrée vide ou blanche).
pub const MSG_ENTREE_VIDE: &str = "Please Enter an expression.";

/// Message pour toute séquence postfixe malformée (pile insuffisante,
/// parenthèse résiduelle, valeurs en trop en fin d'évaluation).
pub const MSG_MAUVAISE_EXPRESSION: &str = "Bad expression.";

/// Résultat terminal d'une évaluation: une valeur OU un message d'erreur.
#[derive(Clone, Debug, PartialEq)]
pub enum Donnee {
    Valeur(f64),
    Erreur(String),
}

impl Donnee {
    pub fn est_valeur(&self) -> bool {
        matches!(self, Self::Valeur(_))
    }

    /// Texte d'affichage: valeur formatée ou message tel quel.
    pub fn affichage(&self) -> String {
        match self {
            Self::Valeur(v) => format_valeur(*v),
            Self::Erreur(msg) => msg.clone(),
        }
    }
}

impl From<ErreurParse> for Donnee {
    fn from(erreur: ErreurParse) -> Self {
        Self::Erreur(erreur.to_string())
    }
}

/// Démarche (panneau d'explication de l'UI) : étapes du pipeline en texte.
#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub postfixe: String,
    pub note: String,
}

/// Évalue une séquence postfixe contre une pile d'opérandes.
///
/// - séquence vide => Erreur(entrée vide), sans autre traitement
/// - pile insuffisante pour un opérateur => Erreur(mauvaise expression)
/// - en fin de parcours, EXACTEMENT une valeur doit rester sur la pile;
///   zéro ou plusieurs => Erreur(mauvaise expression), jamais de dépilage
///   aveugle.
pub fn evalue_postfixe(postfixe: &[Jeton]) -> Donnee {
    if postfixe.is_empty() {
        return Donnee::Erreur(MSG_ENTREE_VIDE.to_string());
    }

    let mut operandes: Vec<f64> = Vec::new();

    for jeton in postfixe {
        match jeton {
            Jeton::Operande(v) => operandes.push(*v),

            Jeton::Operateur(op) => match op.applique(&mut operandes) {
                Ok(v) => {
                    log::trace!("{} => {}", op.symbole(), format_valeur(v));
                    operandes.push(v);
                }
                Err(_) => return Donnee::Erreur(MSG_MAUVAISE_EXPRESSION.to_string()),
            },
        }
    }

    match operandes.pop() {
        Some(v) if operandes.is_empty() => Donnee::Valeur(v),
        // pile vide, ou valeurs restantes (deux opérandes sans opérateur)
        _ => Donnee::Erreur(MSG_MAUVAISE_EXPRESSION.to_string()),
    }
}

/// API publique : évalue une expression infixe.
///
/// Pure composition découpage/conversion/évaluation; les erreurs de parse
/// sont repliées dans le canal Donnee::Erreur.
pub fn evalue(infixe: &str) -> Donnee {
    match en_postfixe(infixe) {
        Ok(postfixe) => evalue_postfixe(&postfixe),
        Err(erreur) => erreur.into(),
    }
}

/// Variante pour l'UI : même sémantique que `evalue`, plus la démarche
/// (jetons et postfixe en texte). La démarche s'arrête à l'étape qui échoue.
pub fn evalue_expression(infixe: &str) -> (Donnee, DemarcheNoyau) {
    let mut demarche = DemarcheNoyau {
        note: "Pipeline: jetons -> postfixe (shunting-yard) -> pile d'opérandes.".to_string(),
        ..DemarcheNoyau::default()
    };

    // Re-découpage et re-conversion dédiés à l'affichage; le pipeline réel
    // (`evalue`) tire sa propre séquence paresseuse.
    if let Ok(jetons) = decoupe_complete(infixe) {
        demarche.jetons = format_jetons(&jetons);
    }
    if let Ok(postfixe) = en_postfixe(infixe) {
        demarche.postfixe = format_jetons(&postfixe);
    }

    (evalue(infixe), demarche)
}
