use num_integer::Roots;
use num_traits::{One, Zero};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Add, Mul, Neg};

use structure::Error;

/// A fraction in lowest terms. The sign lives on the numerator, the
/// denominator is always positive.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Fraction {
    num: i64,
    den: u64,
}

impl Fraction {
    pub fn numer(&self) -> i64 {
        self.num
    }

    pub fn denom(&self) -> u64 {
        self.den
    }

    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Fraction) -> Fraction {
        reduce(
            self.num * other.den as i64 + other.num * self.den as i64,
            (self.den * other.den) as i64,
        )
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Fraction) -> Fraction {
        reduce(self.num * other.num, (self.den * other.den) as i64)
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction { num: 0, den: 1 }
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction { num: 1, den: 1 }
    }

    fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }
}

/// The set of distinct primes dividing `n`. Empty for `n <= 1`.
pub fn prime_factors(n: i64) -> BTreeSet<i64> {
    let mut primes = BTreeSet::new();
    let mut rest = n;
    let mut divisor = 2;
    while divisor * divisor <= rest {
        if rest % divisor == 0 {
            primes.insert(divisor);
            while rest % divisor == 0 {
                rest /= divisor;
            }
        }
        divisor += 1;
    }
    if rest > 1 {
        primes.insert(rest);
    }
    primes
}

// `den` must be positive here; the public entry folds the sign first.
fn reduce(num: i64, den: i64) -> Fraction {
    if num == 0 {
        return Fraction { num: 0, den: 1 };
    }
    if num % den == 0 {
        return Fraction {
            num: num / den,
            den: 1,
        };
    }

    let mut n = num.abs();
    let mut d = den;
    let shared: Vec<i64> = prime_factors(n)
        .intersection(&prime_factors(d))
        .cloned()
        .collect();
    for p in shared {
        while n % p == 0 && d % p == 0 {
            n /= p;
            d /= p;
        }
    }

    Fraction {
        num: if num < 0 { -n } else { n },
        den: d as u64,
    }
}

/// Bring `num/den` to lowest terms by cancelling the shared prime powers
/// of numerator and denominator.
pub fn simplify_fraction(num: i64, den: i64) -> Result<Fraction, Error> {
    if den == 0 {
        return Err(Error::DivisionByZero);
    }
    let num = if den < 0 { -num } else { num };
    Ok(reduce(num, den.abs()))
}

/// `sqrt(|n|)` split into `coefficient * sqrt(radicand)`, with the
/// invariant `coefficient^2 * radicand == |n|`. A negative `n` marks the
/// result imaginary.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SquareRoot {
    pub coefficient: i64,
    pub radicand: i64,
    pub imaginary: bool,
}

impl SquareRoot {
    pub fn to_f64(&self) -> f64 {
        self.coefficient as f64 * (self.radicand as f64).sqrt()
    }
}

/// Pull the largest perfect-square factor out of `sqrt(n)`.
///
/// This is a display primitive, not a general symbolic simplifier: it
/// scans candidates downward from `floor(sqrt(|n|))` and keeps the first
/// square divisor it finds, which is the largest one.
pub fn sqrt_decompose(n: i64) -> SquareRoot {
    let imaginary = n < 0;
    let magnitude = n.abs();
    if magnitude == 0 {
        return SquareRoot {
            coefficient: 0,
            radicand: 1,
            imaginary: false,
        };
    }

    let mut i = magnitude.sqrt();
    while i > 1 {
        if magnitude % (i * i) == 0 {
            return SquareRoot {
                coefficient: i,
                radicand: magnitude / (i * i),
                imaginary,
            };
        }
        i -= 1;
    }

    SquareRoot {
        coefficient: 1,
        radicand: magnitude,
        imaginary,
    }
}

/// Render `num/den` in lowest terms, eliding a `/1` suffix.
pub fn format_quotient(num: i64, den: i64) -> Result<String, Error> {
    Ok(simplify_fraction(num, den)?.to_string())
}

/// Render `(root.coefficient * sqrt(root.radicand) [* i]) / den`.
///
/// Only the numeric multiplier is divided; the symbolic remainder is kept
/// as an undivided product. A multiplier of exactly 1 and a `/1` suffix
/// are elided, and a numerator that cancels to zero renders as `"0"`.
pub fn format_root_quotient(root: &SquareRoot, den: i64) -> Result<String, Error> {
    let frac = simplify_fraction(root.coefficient, den)?;
    if frac.is_zero() {
        return Ok("0".to_string());
    }

    let mut symbols = Vec::new();
    if root.radicand != 1 {
        symbols.push(format!("sqrt({})", root.radicand));
    }
    if root.imaginary {
        symbols.push("i".to_string());
    }
    if symbols.is_empty() {
        return Ok(frac.to_string());
    }

    let mut out = String::new();
    if frac.numer() != 1 {
        out.push_str(&format!("{}*", frac.numer()));
    }
    out.push_str(&symbols.join("*"));
    if frac.denom() != 1 {
        out.push_str(&format!("/{}", frac.denom()));
    }
    Ok(out)
}
