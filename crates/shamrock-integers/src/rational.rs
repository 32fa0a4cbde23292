//! Exact rationals in canonical form.
//!
//! A [`Rational`] is a numerator/denominator pair of [`Integer`]s that is
//! always kept reduced: the denominator is positive, numerator and
//! denominator are coprime, and zero is stored as `0/1`. Every operation
//! re-reduces its result before returning it, so chained products such as
//! a Lagrange basis term never carry an unreduced intermediate from one
//! step to the next.
//!
//! Because the representation is canonical, structural equality (`==`) is
//! value equality.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::ArithmeticError;
use crate::Integer;

/// An arbitrary precision rational number in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: Integer,
    den: Integer,
}

impl Rational {
    /// Builds the canonical form of `num / den`.
    ///
    /// The sign is moved onto the numerator, both parts are divided by
    /// their gcd, and a zero numerator collapses the denominator to 1.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `den` is zero.
    pub fn reduce(num: Integer, den: Integer) -> Result<Self, ArithmeticError> {
        if den.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduce_nonzero(num, den))
    }

    /// Canonicalizes with a denominator the caller knows is non-zero.
    fn reduce_nonzero(num: Integer, den: Integer) -> Self {
        debug_assert!(!den.is_zero());
        if num.is_zero() {
            return Self::zero();
        }
        let (num, den) = if den.is_negative() { (-num, -den) } else { (num, den) };
        let g = num.gcd(&den);
        if g.is_one() {
            Self { num, den }
        } else {
            Self {
                num: num / &g,
                den: den / &g,
            }
        }
    }

    /// Creates a rational from an integer (denominator 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self { num: n, den: Integer::one() }
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `den` is zero.
    pub fn from_i64(num: i64, den: i64) -> Result<Self, ArithmeticError> {
        Self::reduce(Integer::new(num), Integer::new(den))
    }

    /// Returns the numerator. Carries the sign.
    #[must_use]
    pub fn numerator(&self) -> &Integer {
        &self.num
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &Integer {
        &self.den
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Returns the numerator when the value is an integer, `None` otherwise.
    #[must_use]
    pub fn to_integer_if_exact(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.num.clone())
        } else {
            None
        }
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] for zero.
    pub fn recip(&self) -> Result<Self, ArithmeticError> {
        Self::reduce(self.den.clone(), self.num.clone())
    }

    /// Computes `self / rhs` as `self * (1 / rhs)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::reduce_nonzero(&self.num * &rhs.den, &self.den * &rhs.num))
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.num.is_negative()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: usize) -> Self {
        // Powers of coprime parts stay coprime.
        Self {
            num: self.num.pow(exp),
            den: self.den.pow(exp),
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self {
            num: Integer::zero(),
            den: Integer::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// Arithmetic operations. Denominators are positive, so every product of
// denominators is non-zero and reduction cannot fail.
impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        if self.den == rhs.den {
            return Rational::reduce_nonzero(&self.num + &rhs.num, self.den.clone());
        }
        Rational::reduce_nonzero(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.den == rhs.den {
            return Rational::reduce_nonzero(&self.num - &rhs.num, self.den.clone());
        }
        Rational::reduce_nonzero(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::reduce_nonzero(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        &self * rhs
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(Integer::new(n))
    }
}
