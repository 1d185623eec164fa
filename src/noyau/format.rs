// src/noyau/format.rs
//
// Affichage des valeurs f64.
//
// Règles:
// - valeur entière (partie fractionnaire nulle) => sans ".0" (14, pas 14.0)
// - au-delà de 2^53 l'écriture "entière" n'est plus fiable => format standard
// - non-fini (inf, NaN) => format standard de f64

use num_traits::Zero;

/// Seuil au-delà duquel f64 ne représente plus tous les entiers.
const ENTIER_MAX_SUR: f64 = 9_007_199_254_740_992.0; // 2^53

/// Affiche une valeur: entier sans point décimal, sinon écriture f64 normale.
pub fn format_valeur(v: f64) -> String {
    if v.is_finite() && v.fract().is_zero() && v.abs() <= ENTIER_MAX_SUR {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}
