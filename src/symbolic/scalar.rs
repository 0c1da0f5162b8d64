use std::fmt::Debug;
use std::ops::{Div, Neg, Sub};

use num_complex::Complex64;
use num_traits::{One, Zero};

/// Numeric domain an expression tree is built over.
///
/// Implemented for `f64` (real expressions) and [`Complex64`] (complex
/// expressions). The engine only relies on what is declared here, so the
/// same parsing, simplification and differentiation code serves both
/// domains.
/// # Example
/// ```
/// use differentiator::symbolic::scalar::Scalar;
/// use num_complex::Complex64;
///
/// assert_eq!(f64::imaginary_unit(), None);
/// assert_eq!(Complex64::imaginary_unit(), Some(Complex64::I));
/// assert_eq!(Complex64::new(5.0, 3.0).render(), "5 + 3i");
/// ```
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
{
    fn from_real(value: f64) -> Self;

    /// `i` for complex domains, `None` where the literal `i` is just a
    /// variable name.
    fn imaginary_unit() -> Option<Self> {
        None
    }

    fn is_minus_one(&self) -> bool {
        *self == -Self::one()
    }

    /// True for complex numbers with both parts nonzero. Such a constant
    /// renders as a sum and must be parenthesized like one.
    fn is_compound(&self) -> bool {
        false
    }

    fn pow(self, exponent: Self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn exp(self) -> Self;
    fn ln(self) -> Self;

    fn render(&self) -> String;
}

// `{}` prints -0.0 as "-0"; the engine treats signed zeros as equal and
// renders them identically.
fn stringify(value: f64) -> String {
    let text = format!("{}", value);
    if text == "-0" { "0".to_string() } else { text }
}

impl Scalar for f64 {
    fn from_real(value: f64) -> Self {
        value
    }

    fn pow(self, exponent: Self) -> Self {
        self.powf(exponent)
    }

    fn sin(self) -> Self {
        f64::sin(self)
    }

    fn cos(self) -> Self {
        f64::cos(self)
    }

    fn exp(self) -> Self {
        f64::exp(self)
    }

    fn ln(self) -> Self {
        f64::ln(self)
    }

    fn render(&self) -> String {
        stringify(*self)
    }
}

impl Scalar for Complex64 {
    fn from_real(value: f64) -> Self {
        Complex64::new(value, 0.0)
    }

    fn imaginary_unit() -> Option<Self> {
        Some(Complex64::I)
    }

    fn is_compound(&self) -> bool {
        self.re != 0.0 && self.im != 0.0
    }

    fn pow(self, exponent: Self) -> Self {
        self.powc(exponent)
    }

    fn sin(self) -> Self {
        Complex64::sin(self)
    }

    fn cos(self) -> Self {
        Complex64::cos(self)
    }

    fn exp(self) -> Self {
        Complex64::exp(self)
    }

    fn ln(self) -> Self {
        Complex64::ln(self)
    }

    fn render(&self) -> String {
        let re = stringify(self.re);
        let im = stringify(self.im);

        if re == "0" && im == "0" {
            return "0".to_string();
        }
        if re == "0" {
            return match im.as_str() {
                "1" => "i".to_string(),
                "-1" => "-i".to_string(),
                _ => format!("{}i", im),
            };
        }
        if im == "0" {
            return re;
        }
        if let Some(magnitude) = im.strip_prefix('-') {
            if magnitude == "1" {
                return format!("{} - i", re);
            }
            return format!("{} - {}i", re, magnitude);
        }
        if im == "1" {
            return format!("{} + i", re);
        }
        format!("{} + {}i", re, im)
    }
}
