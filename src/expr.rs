//! AST-like data structure for dice expressions, and folding them into a single [`Distribution`].

use alloc::{
	boxed::Box,
	format,
	string::{String, ToString},
};
use core::fmt;

use crate::{dice::Dice, dist::Distribution};

/// Individual elements of a dice expression: a chain of constants and dice joined by addition and subtraction
///
/// The parser produces left-nested chains, so `2d6 + 1 - d4` becomes `Sub(Add(Dice(2d6), Num(1)), Dice(1d4))`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Expr {
	/// Standalone integer
	Num(i32),

	/// Dice literal
	Dice(Dice),

	/// Negation of an expression (makes every outcome of it negative)
	Neg(Box<Self>),

	/// Sum of two expressions
	Add(Box<Self>, Box<Self>),

	/// Difference of two expressions
	Sub(Box<Self>, Box<Self>),
}

impl Expr {
	/// Computes the exact distribution of the expression's total by convolving the distributions of its terms from
	/// left to right.
	///
	/// # Examples
	/// ```
	/// use alea::Expr;
	///
	/// let expr: Expr = "2d6+1".parse()?;
	/// let dist = expr.distribution();
	/// assert_eq!(dist.get(3.0), Some(1.0));
	/// assert_eq!(dist.get(8.0), Some(6.0));
	/// assert_eq!(dist.total_weight(), 36.0);
	/// # Ok::<(), alea::parse::Error>(())
	/// ```
	#[must_use]
	pub fn distribution(&self) -> Distribution {
		match self {
			Self::Num(x) => Distribution::constant(f64::from(*x)),
			Self::Dice(dice) => dice.distribution(),

			Self::Neg(x) => x.distribution().negated(),

			Self::Add(a, b) => a.distribution().sum(&b.distribution()),
			Self::Sub(a, b) => a.distribution().difference(&b.distribution()),
		}
	}

	/// Checks whether the expression is deterministic (its distribution only has a single outcome).
	/// A [`Self::Num`] will always return `true`, a [`Self::Dice`] will always return `false` unless the dice only have
	/// one side (or there are none of them), and negations and binary expressions forward the check to their children.
	#[must_use]
	pub fn is_deterministic(&self) -> bool {
		match self {
			Self::Num(..) => true,
			Self::Dice(dice) => dice.is_deterministic(),
			Self::Neg(x) => x.is_deterministic(),
			Self::Add(a, b) | Self::Sub(a, b) => a.is_deterministic() && b.is_deterministic(),
		}
	}

	/// Indicates whether the expression is a single term (a number or dice).
	#[must_use]
	#[inline]
	pub const fn is_term(&self) -> bool {
		matches!(self, Self::Num(..) | Self::Dice(..))
	}

	/// Builds a notation string for the expression. Chains in the shape the parser produces (left-nested) result in the
	/// exact same expression when re-parsed. Any other nesting is wrapped in parentheses, which only serve to make the
	/// grouping readable.
	#[must_use]
	pub fn describe(&self) -> String {
		match self {
			Self::Num(x) => x.to_string(),
			Self::Dice(dice) => dice.to_string(),

			Self::Neg(x) if x.is_term() => format!("-{}", x.describe()),
			Self::Neg(x) => format!("-{}", paren_wrap(x.describe())),

			Self::Add(a, b) => describe_binary_expr('+', a, b),
			Self::Sub(a, b) => describe_binary_expr('-', a, b),
		}
	}
}

impl From<Dice> for Expr {
	#[inline]
	fn from(dice: Dice) -> Self {
		Self::Dice(dice)
	}
}

impl From<i32> for Expr {
	#[inline]
	fn from(x: i32) -> Self {
		Self::Num(x)
	}
}

impl fmt::Display for Expr {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output of this implementation is equivalent to [`Self::describe()`].
	///
	/// # Examples
	/// ```
	/// use alea::Expr;
	///
	/// let expr: Expr = "-D4+2d6 -3".parse()?;
	/// assert_eq!(expr.to_string(), "-1d4 + 2d6 - 3");
	/// # Ok::<(), alea::parse::Error>(())
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.describe())
	}
}

/// Builds a description for a binary expression. The left side of a chain is never wrapped in parentheses, but any
/// right side that isn't a single term (or a negated one) is.
fn describe_binary_expr(op: char, a: &Expr, b: &Expr) -> String {
	let rhs = match b {
		Expr::Add(..) | Expr::Sub(..) => paren_wrap(b.describe()),
		_ => b.describe(),
	};
	format!("{} {} {}", a.describe(), op, rhs)
}

/// Wraps a string in parentheses.
#[must_use]
fn paren_wrap(mut text: String) -> String {
	text.insert(0, '(');
	text.push(')');
	text
}
