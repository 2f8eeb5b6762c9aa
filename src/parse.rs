//! Parser generators for dice notation, plus [`FromStr`] implementations for the types they produce.
//!
//! The notation is a chain of terms joined by `+` or `-`, where only the first term may go without a sign:
//!
//! - `N` is a constant integer
//! - `NdM` is N dice with M sides each (the die marker may be `d` or `D`, and N defaults to 1 when left out)
//!
//! Spaces around terms and signs are ignored.

use alloc::{
	boxed::Box,
	format,
	string::{String, ToString},
	vec::Vec,
};
use core::{num::NonZeroU16, str::FromStr};

use chumsky::prelude::*;

use crate::{dice::Dice, expr::Expr, roll::Roll};

/// Generates a parser that specifically handles dice terms like "d20", "2d6", "4D8", etc.
#[must_use]
pub fn dice_part<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	text::digits(10)
		.to_slice()
		.or_not()
		.then_ignore(just('d').or(just('D')))
		.then(text::digits(10).to_slice())
		.try_map(|(count, sides): (Option<&str>, &str), span| {
			let count = count
				.unwrap_or("1")
				.parse()
				.map_err(|err| Rich::custom(span, format!("Dice count: {err}")))?;
			let sides = sides
				.parse::<NonZeroU16>()
				.map_err(|err| Rich::custom(span, format!("Dice sides: {err}")))?;
			Ok(Dice::new(count, sides))
		})
}

/// Generates a parser that specifically handles dice terms like "d20", "2d6", "4D8", etc.
/// and expects end of input
#[must_use]
pub fn dice<'src>() -> impl Parser<'src, &'src str, Dice, extra::Err<Rich<'src, char>>> + Clone {
	dice_part().then_ignore(end())
}

/// Generates a parser that handles full dice expressions: chains of dice and constants joined by addition and
/// subtraction, such as "2d6+1" or "-1d4 + d8 - 2".
#[must_use]
pub fn expr_part<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	// Helper function for operators
	let op = |c| just(c).padded();

	// Parser for numbers
	let int = text::digits(10).to_slice().try_map(|s: &str, span| {
		s.parse()
			.map(Expr::Num)
			.map_err(|err| Rich::custom(span, format!("Number: {err}")))
	});

	// Parser for individual terms
	let term = dice_part().map(Expr::Dice).or(int).padded();

	// Parser for the first term, which is the only one allowed to have a leading sign
	let first = choice((op('-').to(true), op('+').to(false)))
		.or_not()
		.then(term.clone())
		.map(|(negate, term)| match negate {
			Some(true) => Expr::Neg(Box::new(term)),
			_ => term,
		});

	// Parser for addition and subtraction operators
	first.foldl(
		choice((
			op('+').to(Expr::Add as fn(_, _) -> _),
			op('-').to(Expr::Sub as fn(_, _) -> _),
		))
		.then(term)
		.repeated(),
		|lhs, (op, rhs)| op(Box::new(lhs), Box::new(rhs)),
	)
}

/// Generates a parser that handles full dice expressions and expects end of input.
/// See [`expr_part()`] for more information.
#[must_use]
pub fn expr<'src>() -> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
	expr_part().then_ignore(end())
}

/// Error that can occur while parsing a string into a dice-related type
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{details}")]
#[non_exhaustive]
pub struct Error {
	/// Details of every problem the parser ran into
	pub details: String,
}

impl Error {
	/// Creates an error out of the rich errors produced by a parser.
	fn from_rich(errs: &[Rich<'_, char>]) -> Self {
		Self {
			details: errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "),
		}
	}
}

impl FromStr for Dice {
	type Err = Error;

	/// Parses dice from notation like "2d6".
	///
	/// # Examples
	/// ```
	/// use alea::Dice;
	///
	/// let dice: Dice = "3D8".parse()?;
	/// assert_eq!(dice.to_string(), "3d8");
	/// assert!("3d0".parse::<Dice>().is_err());
	/// # Ok::<(), alea::parse::Error>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		dice().parse(s).into_result().map_err(|errs| Error::from_rich(&errs))
	}
}

impl FromStr for Expr {
	type Err = Error;

	/// Parses an expression from notation like "2d6+1".
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		expr().parse(s).into_result().map_err(|errs| Error::from_rich(&errs))
	}
}

impl FromStr for Roll {
	type Err = Error;

	/// Parses an expression from notation like "2d6+1" and computes its distribution.
	///
	/// # Examples
	/// ```
	/// use alea::Roll;
	///
	/// let roll: Roll = "d4+2".parse()?;
	/// assert_eq!(roll.expected_value()?, 4.5);
	/// assert!("2x6".parse::<Roll>().is_err());
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.parse::<Expr>().map(|expr| Self::from_expr(&expr))
	}
}
