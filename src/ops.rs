use num::Float;

/// And operator for combining proposition degrees in a rule premise
/// (Mamdani convention: minimum).
pub fn and<F: Float>(u: F, v: F) -> F {
    F::min(u, v)
}

/// Or operator for combining proposition degrees in a rule premise
/// (Mamdani convention: maximum).
pub fn or<F: Float>(u: F, v: F) -> F {
    F::max(u, v)
}

/// Fuzzy negation.
pub fn complement<F: Float>(u: F) -> F {
    F::one() - u
}

/// Implication: limit a consequent degree to at most the rule's firing
/// strength.
pub fn clip<F: Float>(degree: F, strength: F) -> F {
    F::min(degree, strength)
}

/// Center-of-gravity defuzzification over `(x, degree)` samples.
///
/// Single pass accumulating numerator and denominator. Returns `None` when
/// the degrees sum to zero, where the centroid is undefined.
pub fn centroid<F: Float>(samples: impl IntoIterator<Item = (F, F)>) -> Option<F> {
    let mut num = F::zero();
    let mut den = F::zero();

    for (x, degree) in samples {
        num = num + x * degree;
        den = den + degree;
    }

    if den == F::zero() {
        None
    } else {
        Some(num / den)
    }
}
