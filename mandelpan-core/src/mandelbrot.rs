use crate::complex::Complex;
use crate::config::FractalConfig;

/// Count escape-time iterations for a single point.
///
/// Runs `z₀ = 0`, `z_{n+1} = z_n² + c` and returns the number of completed
/// iterations when the orbit's magnitude first exceeds the escape radius, or
/// `config.iterations` if it never does — that value marks the point as
/// in-set. The magnitude test compares `|z|²` against the cached squared
/// radius, which is monotonically equivalent and avoids a square root per
/// step.
///
/// The result depends only on `c` and the config, never on neighbouring
/// pixels or evaluation order.
#[inline]
pub fn escape_count(c: Complex, config: &FractalConfig) -> u32 {
    let limit_sq = config.limit_sq();
    let mut z = Complex::ZERO;
    let mut n = 0;

    while n < config.iterations {
        z = z * z + c;
        n += 1;
        if z.norm_sq() > limit_sq {
            break;
        }
    }

    n
}
