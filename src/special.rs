//! Special functions used by the component shapes.
//!
//! The modified Bessel functions use the rational/polynomial approximations of
//! Abramowitz & Stegun (9.8.1, 9.8.2, 9.8.5, 9.8.6). Absolute error of K0 is
//! below 1e-8 on (0, 2] and relative error below 2e-7 beyond.
//!
//! Outside their domain the functions return IEEE special values instead of
//! failing, matching how component evaluation propagates numeric issues.

/// Gauss error function.
pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

/// Modified Bessel function of the first kind, order 0.
pub fn bessel_i0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 3.75 {
        let y = (x / 3.75).powi(2);
        1.0 + y
            * (3.5156229
                + y * (3.0899424
                    + y * (1.2067492 + y * (0.2659732 + y * (0.360768e-1 + y * 0.45813e-2)))))
    } else {
        let y = 3.75 / ax;
        (ax.exp() / ax.sqrt())
            * (0.39894228
                + y * (0.1328592e-1
                    + y * (0.225319e-2
                        + y * (-0.157565e-2
                            + y * (0.916281e-2
                                + y * (-0.2057706e-1
                                    + y * (0.2635537e-1
                                        + y * (-0.1647633e-1 + y * 0.392377e-2))))))))
    }
}

/// Modified Bessel function of the second kind, order 0.
///
/// Defined for `x > 0`. Returns `+inf` at zero and `NaN` for negative or NaN
/// arguments.
///
/// # Examples
///
/// ```
/// use specfit_rs::special::bessel_k0;
///
/// assert!((bessel_k0(1.0) - 0.421_024_438_2).abs() < 1e-8);
/// assert!(bessel_k0(-1.0).is_nan());
/// assert_eq!(bessel_k0(0.0), f64::INFINITY);
/// ```
pub fn bessel_k0(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }
    if x.is_infinite() {
        return 0.0;
    }

    if x <= 2.0 {
        let y = x * x / 4.0;
        (-(x / 2.0).ln() * bessel_i0(x))
            + (-0.57721566
                + y * (0.42278420
                    + y * (0.23069756
                        + y * (0.3488590e-1
                            + y * (0.262698e-2 + y * (0.10750e-3 + y * 0.74e-5))))))
    } else {
        let y = 2.0 / x;
        ((-x).exp() / x.sqrt())
            * (1.25331414
                + y * (-0.7832358e-1
                    + y * (0.2189568e-1
                        + y * (-0.1062446e-1
                            + y * (0.587872e-2 + y * (-0.251540e-2 + y * 0.53208e-3))))))
    }
}
