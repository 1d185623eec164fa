//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : expression bien formée => toujours une Valeur
//!   (éventuellement inf/NaN, sémantique f64), jamais une Erreur
//! - soupe d'opérateurs => jamais de panic, uniquement les messages connus

use std::time::{Duration, Instant};

use super::eval::{evalue, evalue_postfixe, Donnee, MSG_ENTREE_VIDE, MSG_MAUVAISE_EXPRESSION};
use super::rpn::en_postfixe;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(100);
    if rng.coin() {
        format!("{n}")
    } else {
        let d = rng.pick(100);
        format!("{n}.{d:02}")
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    let nombre = gen_nombre(rng);
    match rng.pick(4) {
        0 => format!("-{nombre}"),
        1 => format!("+{nombre}"),
        _ => nombre,
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(5) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        _ => "^",
    }
}

fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(6) {
        0 => gen_atome(rng),
        1 => format!("({})", gen_expr(rng, profondeur - 1)),
        2 => format!("-({})", gen_expr(rng, profondeur - 1)),
        _ => format!(
            "{} {} {}",
            gen_expr(rng, profondeur - 1),
            gen_op(rng),
            gen_expr(rng, profondeur - 1)
        ),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_donne_toujours_une_valeur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match evalue(&expr) {
            Donnee::Valeur(_) => {}
            Donnee::Erreur(e) => panic!("expr bien formée refusée: expr={expr:?} err={e}"),
        }
    }
}

#[test]
fn fuzz_safe_aller_retour_postfixe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let postfixe =
            en_postfixe(&expr).unwrap_or_else(|e| panic!("conversion: expr={expr:?} err={e}"));

        // bien formée => la pile finit avec exactement une valeur
        assert!(
            evalue_postfixe(&postfixe).est_valeur(),
            "aller-retour: expr={expr:?}"
        );
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let gen = |seed: u64| {
        let mut rng = Rng::new(seed);
        (0..50)
            .map(|_| {
                let expr = gen_expr(&mut rng, 3);
                format!("{expr} => {:?}", evalue(&expr))
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(gen(0xFEED), gen(0xFEED));
}

#[test]
fn fuzz_safe_soupe_de_symboles_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xDEAD_u64);
    let symboles = [
        "1", "2.5", "7", "42", "+", "-", "*", "/", "^", "(", ")", " ",
    ];

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let longueur = 1 + rng.pick(12) as usize;
        let expr: String = (0..longueur)
            .map(|_| symboles[rng.pick(symboles.len() as u32) as usize])
            .collect::<Vec<_>>()
            .join(" ");

        match evalue(&expr) {
            Donnee::Valeur(_) => vus_ok += 1,
            Donnee::Erreur(e) => {
                // alphabet valide => seuls les messages terminaux connus
                assert!(
                    e == MSG_ENTREE_VIDE
                        || e == MSG_MAUVAISE_EXPRESSION
                        || e == "Not matched parenthesis.",
                    "message inattendu: expr={expr:?} err={e}"
                );
                vus_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 5, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 10, "trop peu d'erreurs: {vus_err}");
}
