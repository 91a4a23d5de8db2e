//! Binomial tail estimate used by the challenge decision.

/// Chance that one unseen die shows a given face.
pub const FACE_PROBABILITY: f64 = 1.0 / 6.0;

/// `P(X >= k)` for `X ~ Binomial(n, p)`.
///
/// Sums the upper tail directly, walking the probability mass function
/// with the ratio `P(i + 1) / P(i) = (n - i) / (i + 1) * p / (1 - p)`.
/// The walk runs on log-masses so large tables do not underflow.
///
/// ```
/// use liars_dice::bot::binomial_tail;
///
/// assert_eq!(binomial_tail(4, 0, 1.0 / 6.0), 1.0);
/// assert_eq!(binomial_tail(4, 5, 1.0 / 6.0), 0.0);
/// assert!((binomial_tail(1, 1, 1.0 / 6.0) - 1.0 / 6.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn binomial_tail(n: usize, k: usize, p: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }
    if k > n || p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }

    let log_odds = (p / (1.0 - p)).ln();
    let mut log_mass = n as f64 * (1.0 - p).ln();
    let mut tail = 0.0;

    for i in 0..=n {
        if i >= k {
            tail += log_mass.exp();
        }
        if i < n {
            log_mass += ((n - i) as f64 / (i + 1) as f64).ln() + log_odds;
        }
    }

    tail.clamp(0.0, 1.0)
}
