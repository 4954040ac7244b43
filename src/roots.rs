//! Bracketed scalar root finding.
//!
//! Both finders validate the bracket strictly before iterating: the function
//! must be finite at both ends and must change sign (or vanish) across them.

use crate::errors::SolverError;
use crate::float_types::Real;

/// A closed search interval `[lower, upper]` with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub lower: Real,
    pub upper: Real,
}

impl Bracket {
    /// Rejects non-finite or unordered ends with [`SolverError::NoBracket`].
    pub fn new(lower: Real, upper: Real) -> Result<Self, SolverError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(SolverError::NoBracket {
                lower,
                upper,
                f_lower: Real::NAN,
                f_upper: Real::NAN,
            });
        }
        Ok(Self { lower, upper })
    }

    pub const fn width(&self) -> Real {
        self.upper - self.lower
    }
}

/// Finds `x` in a bracket such that `f(x) = 0`.
pub trait RootFinder {
    fn find_root<F>(&self, f: F, bracket: Bracket) -> Result<Real, SolverError>
    where
        F: FnMut(Real) -> Real;
}

/// Outcome of evaluating `f` at both ends of a bracket.
enum Ends {
    /// One end is already an exact root.
    Root(Real),
    Straddle { f_lower: Real, f_upper: Real },
}

fn check_ends<F>(f: &mut F, bracket: Bracket) -> Result<Ends, SolverError>
where
    F: FnMut(Real) -> Real,
{
    let f_lower = f(bracket.lower);
    let f_upper = f(bracket.upper);

    if !f_lower.is_finite() || !f_upper.is_finite() {
        tracing::debug!(
            lower = bracket.lower,
            upper = bracket.upper,
            f_lower,
            f_upper,
            "bracket evaluation is not finite"
        );
        let last = if f_lower.is_finite() { bracket.lower } else { bracket.upper };
        return Err(SolverError::NotConverged { iterations: 0, last });
    }
    if f_lower == 0.0 {
        return Ok(Ends::Root(bracket.lower));
    }
    if f_upper == 0.0 {
        return Ok(Ends::Root(bracket.upper));
    }
    if f_lower.signum() == f_upper.signum() {
        return Err(SolverError::NoBracket {
            lower: bracket.lower,
            upper: bracket.upper,
            f_lower,
            f_upper,
        });
    }
    Ok(Ends::Straddle { f_lower, f_upper })
}

/// Brent's method: inverse quadratic interpolation and secant steps,
/// falling back to bisection whenever the interpolated step misbehaves.
///
/// The defaults (`xtol = 2e-12`, `rtol = 4ε`, 100 iterations) are the
/// customary `brentq` settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brent {
    pub xtol: Real,
    pub rtol: Real,
    pub max_iterations: usize,
}

impl Default for Brent {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * Real::EPSILON,
            max_iterations: 100,
        }
    }
}

impl RootFinder for Brent {
    fn find_root<F>(&self, mut f: F, bracket: Bracket) -> Result<Real, SolverError>
    where
        F: FnMut(Real) -> Real,
    {
        let (mut fpre, mut fcur) = match check_ends(&mut f, bracket)? {
            Ends::Root(x) => return Ok(x),
            Ends::Straddle { f_lower, f_upper } => (f_lower, f_upper),
        };

        let mut xpre = bracket.lower;
        let mut xcur = bracket.upper;
        // xblk is the contrapoint: f(xblk) and f(xcur) always have opposite signs.
        let (mut xblk, mut fblk) = (0.0, 0.0);
        let (mut spre, mut scur) = (0.0, 0.0);

        for iteration in 0..self.max_iterations {
            if fpre != 0.0 && fcur != 0.0 && fpre.signum() != fcur.signum() {
                xblk = xpre;
                fblk = fpre;
                spre = xcur - xpre;
                scur = spre;
            }
            if fblk.abs() < fcur.abs() {
                xpre = xcur;
                xcur = xblk;
                xblk = xpre;

                fpre = fcur;
                fcur = fblk;
                fblk = fpre;
            }

            let delta = (self.xtol + self.rtol * xcur.abs()) / 2.0;
            let sbis = (xblk - xcur) / 2.0;
            if fcur == 0.0 || sbis.abs() < delta {
                tracing::trace!(iteration, root = xcur, "brent converged");
                return Ok(xcur);
            }

            if spre.abs() > delta && fcur.abs() < fpre.abs() {
                let stry = if xpre == xblk {
                    // secant
                    -fcur * (xcur - xpre) / (fcur - fpre)
                } else {
                    // inverse quadratic
                    let dpre = (fpre - fcur) / (xpre - xcur);
                    let dblk = (fblk - fcur) / (xblk - xcur);
                    -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
                };
                if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                    spre = scur;
                    scur = stry;
                } else {
                    spre = sbis;
                    scur = sbis;
                }
            } else {
                spre = sbis;
                scur = sbis;
            }

            xpre = xcur;
            fpre = fcur;
            if scur.abs() > delta {
                xcur += scur;
            } else {
                xcur += if sbis > 0.0 { delta } else { -delta };
            }

            fcur = f(xcur);
            tracing::trace!(iteration, x = xcur, fx = fcur, "brent step");
            if !fcur.is_finite() {
                return Err(SolverError::NotConverged {
                    iterations: iteration + 1,
                    last: xcur,
                });
            }
        }

        Err(SolverError::NotConverged {
            iterations: self.max_iterations,
            last: xcur,
        })
    }
}

/// Plain interval halving. Slower than [`Brent`] but immune to badly
/// conditioned interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    pub xtol: Real,
    pub rtol: Real,
    pub max_iterations: usize,
}

impl Default for Bisection {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * Real::EPSILON,
            max_iterations: 200,
        }
    }
}

impl RootFinder for Bisection {
    fn find_root<F>(&self, mut f: F, bracket: Bracket) -> Result<Real, SolverError>
    where
        F: FnMut(Real) -> Real,
    {
        let mut f_lower = match check_ends(&mut f, bracket)? {
            Ends::Root(x) => return Ok(x),
            Ends::Straddle { f_lower, .. } => f_lower,
        };

        let (mut lower, mut upper) = (bracket.lower, bracket.upper);
        for iteration in 0..self.max_iterations {
            let mid = lower + (upper - lower) / 2.0;
            let f_mid = f(mid);
            if !f_mid.is_finite() {
                return Err(SolverError::NotConverged {
                    iterations: iteration + 1,
                    last: mid,
                });
            }
            if f_mid == 0.0 || (upper - lower) / 2.0 < self.xtol + self.rtol * mid.abs() {
                tracing::trace!(iteration, root = mid, "bisection converged");
                return Ok(mid);
            }
            if f_mid.signum() == f_lower.signum() {
                lower = mid;
                f_lower = f_mid;
            } else {
                upper = mid;
            }
        }

        Err(SolverError::NotConverged {
            iterations: self.max_iterations,
            last: lower + (upper - lower) / 2.0,
        })
    }
}
