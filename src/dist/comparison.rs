//! Relations used to compare the outcomes of two distributions.

use alloc::borrow::ToOwned;
use core::fmt;

use super::Error;

/// Relation checked between pairs of outcomes by [`Distribution::compare()`](super::Distribution::compare)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum Comparison {
	/// Checks whether the first value is less than the second. Symbol: `<`
	Lt,

	/// Checks whether the first value is less than or equal to the second. Symbol: `<=`
	Lte,

	/// Checks whether the first value is greater than the second. Symbol: `>`
	Gt,

	/// Checks whether the first value is greater than or equal to the second. Symbol: `>=`
	Gte,

	/// Checks whether both values are equal. Symbol: `==`
	Eq,

	/// Checks whether both values differ. Symbol: `!=`
	Ne,
}

impl Comparison {
	/// Creates a comparison from its corresponding symbol.
	///
	/// # Errors
	/// If the symbol doesn't match to a known comparison variant, an error variant will be returned.
	///
	/// # Examples
	/// ```
	/// use alea::dist::Comparison;
	///
	/// assert_eq!(Comparison::from_symbol(">=")?, Comparison::Gte);
	/// assert_eq!(Comparison::from_symbol("!=")?, Comparison::Ne);
	/// # Ok::<(), alea::dist::Error>(())
	/// ```
	pub fn from_symbol(symbol: &str) -> Result<Self, Error> {
		Ok(match symbol {
			"<" => Self::Lt,
			"<=" => Self::Lte,
			">" => Self::Gt,
			">=" => Self::Gte,
			"==" => Self::Eq,
			"!=" => Self::Ne,
			_ => return Err(Error::UnknownComparison(symbol.to_owned())),
		})
	}

	/// Checks a pair of values against the comparison.
	#[must_use]
	#[expect(clippy::float_cmp, reason = "Outcomes are compared exactly, as stored")]
	pub fn check(self, a: f64, b: f64) -> bool {
		match self {
			Self::Lt => a < b,
			Self::Lte => a <= b,
			Self::Gt => a > b,
			Self::Gte => a >= b,
			Self::Eq => a == b,
			Self::Ne => a != b,
		}
	}

	/// Checks a pair of values against the comparison, resulting in `1.0` if it holds or `0.0` if it doesn't.
	#[must_use]
	#[inline]
	pub fn outcome(self, a: f64, b: f64) -> f64 {
		if self.check(a, b) {
			1.0
		} else {
			0.0
		}
	}

	/// Gets the symbol that represents the comparison.
	#[must_use]
	pub const fn symbol(self) -> &'static str {
		match self {
			Self::Lt => "<",
			Self::Lte => "<=",
			Self::Gt => ">",
			Self::Gte => ">=",
			Self::Eq => "==",
			Self::Ne => "!=",
		}
	}
}

impl fmt::Display for Comparison {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.symbol())
	}
}
