/// A membership function shape, mapping a domain value to a degree in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Membership {
    /// Rises linearly `a -> b`, falls linearly `b -> c`. `a == b` or
    /// `b == c` makes a shoulder that holds 1 on the flat side.
    Triangular { a: f64, b: f64, c: f64 },
    /// Plateau of 1 over `[b, c]`, linear ramps on `[a, b]` and `[c, d]`.
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
    Gaussian { mean: f64, sigma: f64 },
}

impl Membership {
    pub fn triangular(a: f64, b: f64, c: f64) -> Self {
        Self::Triangular { a, b, c }
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Trapezoidal { a, b, c, d }
    }

    pub fn gaussian(mean: f64, sigma: f64) -> Self {
        Self::Gaussian { mean, sigma }
    }

    /// Degree of membership at `x`. Total: saturates to 0 outside the
    /// support, never fails.
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Triangular { a, b, c } => {
                if x < a || x > c {
                    0.
                } else if x == b {
                    1.
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            },
            Self::Trapezoidal { a, b, c, d } => {
                if x < a || x > d {
                    0.
                } else if x >= b && x <= c {
                    1.
                } else if x < b {
                    (x - a) / (b - a)
                } else {
                    (d - x) / (d - c)
                }
            },
            Self::Gaussian { mean, sigma } => (-((x - mean) * (x - mean)) / (2. * sigma * sigma)).exp(),
        }
    }

    /// Checked when a term is admitted to a variable.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        match *self {
            Self::Triangular { a, b, c } => {
                if !(a.is_finite() && b.is_finite() && c.is_finite()) {
                    Err("parameters must be finite")
                } else if !(a <= b && b <= c) {
                    Err("parameters must satisfy a <= b <= c")
                } else {
                    Ok(())
                }
            },
            Self::Trapezoidal { a, b, c, d } => {
                if !(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite()) {
                    Err("parameters must be finite")
                } else if !(a <= b && b <= c && c <= d) {
                    Err("parameters must satisfy a <= b <= c <= d")
                } else {
                    Ok(())
                }
            },
            Self::Gaussian { mean, sigma } => {
                if !(mean.is_finite() && sigma.is_finite()) {
                    Err("parameters must be finite")
                } else if sigma <= 0. {
                    Err("sigma must be positive")
                } else {
                    Ok(())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::Membership;

    #[test]
    fn triangular_breakpoints() {
        let mf = Membership::triangular(20., 25., 30.);

        assert_eq!(mf.evaluate(20.), 0.);
        assert_eq!(mf.evaluate(25.), 1.);
        assert_eq!(mf.evaluate(30.), 0.);
        assert_relative_eq!(mf.evaluate(22.5), 0.5);
        assert_relative_eq!(mf.evaluate(27.5), 0.5);
        assert_eq!(mf.evaluate(19.9), 0.);
        assert_eq!(mf.evaluate(30.1), 0.);
    }

    #[test]
    fn triangular_is_monotone_around_peak() {
        let mf = Membership::triangular(0., 5., 10.);
        let mut prev = mf.evaluate(0.);

        for i in 1..=50 {
            let next = mf.evaluate(i as f64 * 0.1);
            assert!(next >= prev);
            prev = next;
        }
        for i in 51..=100 {
            let next = mf.evaluate(i as f64 * 0.1);
            assert!(next <= prev);
            prev = next;
        }
    }

    #[test]
    fn triangular_shoulders() {
        let left = Membership::triangular(16., 16., 24.);

        assert_eq!(left.evaluate(16.), 1.);
        assert_relative_eq!(left.evaluate(20.), 0.5);
        assert_eq!(left.evaluate(24.), 0.);
        assert_eq!(left.evaluate(15.), 0.);

        let right = Membership::triangular(26., 36., 36.);

        assert_eq!(right.evaluate(36.), 1.);
        assert_relative_eq!(right.evaluate(30.), 0.4);
        assert_eq!(right.evaluate(26.), 0.);
    }

    #[test]
    fn triangular_singleton() {
        let mf = Membership::triangular(5., 5., 5.);

        assert_eq!(mf.evaluate(5.), 1.);
        assert_eq!(mf.evaluate(5.1), 0.);
        assert_eq!(mf.evaluate(4.9), 0.);
    }

    #[test]
    fn trapezoidal_plateau_and_ramps() {
        let mf = Membership::trapezoidal(0., 2., 4., 6.);

        assert_eq!(mf.evaluate(0.), 0.);
        assert_relative_eq!(mf.evaluate(1.), 0.5);
        assert_eq!(mf.evaluate(2.), 1.);
        assert_eq!(mf.evaluate(3.), 1.);
        assert_eq!(mf.evaluate(4.), 1.);
        assert_relative_eq!(mf.evaluate(5.), 0.5);
        assert_eq!(mf.evaluate(6.), 0.);
        assert_eq!(mf.evaluate(7.), 0.);
    }

    #[test]
    fn gaussian_peak_and_symmetry() {
        let mf = Membership::gaussian(10., 2.);

        assert_eq!(mf.evaluate(10.), 1.);
        assert_relative_eq!(mf.evaluate(8.), mf.evaluate(12.));
        assert!(mf.evaluate(0.) > 0.);
        assert!(mf.evaluate(0.) < 1e-5);
    }

    #[test]
    fn rejects_out_of_order_parameters() {
        assert!(Membership::triangular(3., 2., 1.).validate().is_err());
        assert!(Membership::trapezoidal(0., 3., 2., 4.).validate().is_err());
        assert!(Membership::triangular(0., f64::NAN, 1.).validate().is_err());
        assert!(Membership::gaussian(0., 0.).validate().is_err());
        assert!(Membership::gaussian(0., -1.).validate().is_err());
        assert!(Membership::triangular(1., 2., 3.).validate().is_ok());
        assert!(Membership::gaussian(0., 1.).validate().is_ok());
    }
}
