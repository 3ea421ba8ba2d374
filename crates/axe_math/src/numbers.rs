//! Scalar helpers: constants, clamping, combinatorics and random sampling
//!
//! Random helpers take the generator as a parameter so callers decide
//! between a seeded `StdRng` and `thread_rng()`.

use rand::Rng;

pub const PI: f32 = std::f32::consts::PI;
pub const PI2: f32 = PI * 2.0;
pub const DEGREE_TO_RADIAN: f32 = PI / 180.0;
pub const RADIAN_TO_DEGREE: f32 = 180.0 / PI;

/// Tolerance used by [`approx_equals`]
pub const EPSILON: f32 = 0.00001;

/// Clamp `v` into `[min, max]`
#[inline]
pub fn clamp<T: PartialOrd>(v: T, min: T, max: T) -> T {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Greatest common divisor using the binary (Stein) algorithm.
///
/// `gcd(0, b)` is `b` and `gcd(a, 0)` is `a`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 || b == 0 {
        return a | b;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }

    a << shift
}

/// Binomial coefficient `n choose m`, saturating at `u64::MAX`.
///
/// Each step multiplies by `n - m + i` and divides by `i`, reducing by the
/// gcd first so the running value is always an exact binomial.
pub fn choose(n: u64, m: u64) -> u64 {
    if m > n {
        return 0;
    }
    let m = if m > (n >> 1) { n - m } else { m };
    let mut result = 1u64;

    for i in 1..=m {
        let mut factor = n - m + i;
        let mut divisor = i;
        let d = gcd(factor, divisor);
        factor /= d;
        divisor /= d;
        // divisor now divides result exactly
        let d = gcd(result, divisor);
        result /= d;
        divisor /= d;
        result = match result.checked_mul(factor) {
            Some(value) => value / divisor,
            None => return u64::MAX,
        };
    }

    result
}

/// Binomial coefficient as a float, usable where `choose` would saturate
pub fn binomial(n: u64, m: u64) -> f64 {
    if m > n {
        return 0.0;
    }
    let m = if m > (n >> 1) { n - m } else { m };
    (1..=m).fold(1.0, |acc, i| acc * (n - m + i) as f64 / i as f64)
}

/// Returns -1, 0 or 1 with equal probability
#[inline]
pub fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.gen_range(0..3) - 1) as f32
}

/// Uniform float in `[0, max)`
#[inline]
pub fn random_float<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    max * rng.gen::<f32>()
}

/// Uniform float in `[min, max)`
#[inline]
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    (max - min) * rng.gen::<f32>() + min
}

/// Uniform integer in `[0, max)`. Returns 0 when `max <= 0`.
#[inline]
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, max: i32) -> i32 {
    if max <= 0 {
        return 0;
    }
    rng.gen_range(0..max)
}

/// Uniform integer in `[min, max]`, both ends inclusive
#[inline]
pub fn random_int_range<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Pick a random element, or `default` when the slice is empty
pub fn random_choice<R: Rng + ?Sized, T: Clone>(rng: &mut R, values: &[T], default: T) -> T {
    if values.is_empty() {
        return default;
    }
    values[rng.gen_range(0..values.len())].clone()
}

/// Whether two floats are within [`EPSILON`] of each other
#[inline]
pub fn approx_equals(a: f32, b: f32) -> bool {
    approx_equals_eps(a, b, EPSILON)
}

#[inline]
pub fn approx_equals_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(9, 0), 9);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(64, 48), 16);
    }

    #[test]
    fn test_choose() {
        assert_eq!(choose(4, 2), 6);
        assert_eq!(choose(5, 0), 1);
        assert_eq!(choose(5, 5), 1);
        assert_eq!(choose(10, 3), 120);
        assert_eq!(choose(10, 7), 120);
        assert_eq!(choose(3, 4), 0);
    }

    #[test]
    fn test_choose_large() {
        assert_eq!(choose(62, 31), 465_428_353_255_261_088);
        assert_eq!(choose(69, 34), u64::MAX);
        assert_eq!(choose(69, 1), 69);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(10, 3), 120.0);
        assert_eq!(binomial(3, 4), 0.0);
        let big = binomial(69, 34);
        assert!((big / 5.609_313_890_833_142e19 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_random_sign_values() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let s = random_sign(&mut rng);
            assert!(s == -1.0 || s == 0.0 || s == 1.0);
        }
    }

    #[test]
    fn test_random_int_range_inclusive() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..500 {
            let v = random_int_range(&mut rng, 2, 4);
            assert!((2..=4).contains(&v));
            seen_min |= v == 2;
            seen_max |= v == 4;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn test_random_range_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let v = random_range(&mut rng, -2.0, 3.0);
            assert!(v >= -2.0 && v < 3.0);
        }
        assert_eq!(random_int(&mut rng, 0), 0);
    }

    #[test]
    fn test_random_choice_default() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [i32; 0] = [];
        assert_eq!(random_choice(&mut rng, &empty, 42), 42);
        assert_eq!(random_choice(&mut rng, &[9], 42), 9);
    }

    #[test]
    fn test_approx_equals() {
        assert!(approx_equals(1.0, 1.000001));
        assert!(!approx_equals(1.0, 1.001));
        assert!(approx_equals_eps(1.0, 1.001, 0.01));
    }
}
