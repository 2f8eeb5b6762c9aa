//! Dice primitives: sets of identical fair dice and the exact distribution of their total.
//!
//! For using dice as part of a larger expression, see [`Expr::Dice`].
//!
//! [`Expr::Dice`]: crate::expr::Expr::Dice

use core::{fmt, num::NonZeroU16};

use crate::dist::Distribution;

/// A set of one or more fair dice with a specific number of sides
///
/// # Examples
/// ```
/// use core::num::NonZeroU16;
/// use alea::Dice;
///
/// let sides = NonZeroU16::new(6).unwrap();
/// let dice = Dice::new(2, sides);
/// assert_eq!(dice.to_string(), "2d6");
/// assert_eq!(dice.distribution().get(7.0), Some(6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_structs)]
pub struct Dice {
	/// Number of dice to roll
	pub count: u16,

	/// Number of sides for each die
	pub sides: NonZeroU16,
}

impl Dice {
	/// Creates a new set of dice with a given count and number of sides.
	#[must_use]
	pub const fn new(count: u16, sides: NonZeroU16) -> Self {
		Self { count, sides }
	}

	/// Creates a single die with a given number of sides.
	#[must_use]
	#[inline]
	pub const fn single(sides: NonZeroU16) -> Self {
		Self::new(1, sides)
	}

	/// Builds the distribution of a single one of the dice: every side from 1 up, each with a weight of 1.
	#[must_use]
	pub fn die_distribution(&self) -> Distribution {
		(1..=self.sides.get()).map(|side| (f64::from(side), 1.0)).collect()
	}

	/// Builds the distribution of the total of all of the dice by convolving the distribution of a single die with
	/// itself once per die. With no dice at all, the total is always 0.
	///
	/// # Examples
	/// ```
	/// use core::num::NonZeroU16;
	/// use alea::{dist::Distribution, Dice};
	///
	/// let d4 = NonZeroU16::new(4).unwrap();
	/// assert_eq!(
	/// 	Dice::new(2, d4).distribution(),
	/// 	Distribution::from([(2.0, 1.0), (3.0, 2.0), (4.0, 3.0), (5.0, 4.0), (6.0, 3.0), (7.0, 2.0), (8.0, 1.0)]),
	/// );
	/// assert_eq!(Dice::new(0, d4).distribution(), Distribution::constant(0.0));
	/// ```
	#[must_use]
	pub fn distribution(&self) -> Distribution {
		let die = self.die_distribution();
		(0..self.count).fold(Distribution::constant(0.0), |total, _| total.sum(&die))
	}

	/// Indicates whether rolling the dice can only ever result in one total.
	#[must_use]
	#[inline]
	pub const fn is_deterministic(&self) -> bool {
		self.count == 0 || self.sides.get() == 1
	}
}

impl Default for Dice {
	/// Creates the default dice (1d20).
	#[inline]
	fn default() -> Self {
		Self::single(D20)
	}
}

impl fmt::Display for Dice {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}d{}", self.count, self.sides)
	}
}

/// Sides of a d20
const D20: NonZeroU16 = match NonZeroU16::new(20) {
	Some(sides) => sides,
	None => NonZeroU16::MIN,
};
