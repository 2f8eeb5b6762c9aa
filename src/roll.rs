//! Rolls: named distributions of dice expressions, with operators for combining and comparing them.

use alloc::{borrow::ToOwned, string::String, vec::Vec};
use core::{fmt, ops};

#[cfg(all(feature = "std", feature = "fastrand"))]
use crate::dist::sampler::FastRand as FastRandSampler;
use crate::{
	dist::{Comparison, Distribution, Error, Sampler},
	expr::Expr,
};

/// A dice roll (or any combination of them) described by the exact distribution of its possible totals
///
/// Rolls are usually parsed from dice notation, then combined with `+` and `-` (against other rolls or plain
/// numbers) and compared with the named comparison methods. Every operation results in a new roll.
///
/// # Examples
/// ```
/// use alea::Roll;
///
/// let attack: Roll = "1d20+5".parse()?;
/// let armor = Roll::constant(15.0);
/// let hits = attack.ge(&armor).probabilities()?;
/// assert_eq!(hits.distribution().get(1.0), Some(0.55));
///
/// let damage = "2d6".parse::<Roll>()? + 3;
/// assert_eq!(damage.expected_value()?, 10.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roll {
	/// Distribution of possible totals
	dist: Distribution,
}

impl Roll {
	/// Creates a new roll without any possible outcomes, to be built up with [`Self::add_event()`].
	#[must_use]
	#[inline]
	pub const fn new() -> Self {
		Self {
			dist: Distribution::new(),
		}
	}

	/// Creates a new roll that always results in the same value.
	#[must_use]
	#[inline]
	pub fn constant(value: f64) -> Self {
		Self::from(Distribution::constant(value))
	}

	/// Creates a new roll from the distribution of an expression.
	#[must_use]
	#[inline]
	pub fn from_expr(expr: &Expr) -> Self {
		Self::from(expr.distribution())
	}

	/// Adds weight to a possible outcome of the roll. See [`Distribution::add_event()`].
	#[inline]
	pub fn add_event(&mut self, value: f64, weight: f64) {
		self.dist.add_event(value, weight);
	}

	/// Gets the distribution of possible totals.
	#[must_use]
	#[inline]
	pub const fn distribution(&self) -> &Distribution {
		&self.dist
	}

	/// Unwraps the distribution of possible totals.
	#[must_use]
	#[inline]
	pub fn into_distribution(self) -> Distribution {
		self.dist
	}

	/// Calculates the expected (mean) total of the roll.
	///
	/// # Errors
	/// If the roll has no possible outcomes (or only weightless ones), an error variant is returned.
	#[inline]
	pub fn expected_value(&self) -> Result<f64, Error> {
		self.dist.expected_value()
	}

	/// Calculates the sum of all outcome weights, which is the number of equally-likely combinations of faces for
	/// unnormalized dice.
	#[must_use]
	#[inline]
	pub fn total_weight(&self) -> f64 {
		self.dist.total_weight()
	}

	/// Creates the roll of the sum of both rolls.
	#[must_use]
	#[inline]
	pub fn sum(&self, other: &Self) -> Self {
		Self::from(self.dist.sum(&other.dist))
	}

	/// Creates the roll of the difference of both rolls.
	#[must_use]
	#[inline]
	pub fn difference(&self, other: &Self) -> Self {
		Self::from(self.dist.difference(&other.dist))
	}

	/// Creates the roll of whether a comparison holds between both rolls: an outcome of `1.0` with the weight of every
	/// pair of totals it holds for, and `0.0` with the weight of every pair it doesn't.
	///
	/// # Examples
	/// ```
	/// use alea::{dist::{Comparison, Distribution}, Roll};
	///
	/// let d10: Roll = "1d10".parse()?;
	/// let d6: Roll = "1d6".parse()?;
	/// let result = d10.compare(&d6, Comparison::Gte);
	/// assert_eq!(result.distribution(), &Distribution::from([(0.0, 15.0), (1.0, 45.0)]));
	/// # Ok::<(), alea::parse::Error>(())
	/// ```
	#[must_use]
	#[inline]
	pub fn compare(&self, other: &Self, cmp: Comparison) -> Self {
		Self::from(self.dist.compare(&other.dist, cmp))
	}

	/// Creates the roll of whether this roll is less than the other. See [`Self::compare()`].
	#[must_use]
	#[inline]
	pub fn lt(&self, other: &Self) -> Self {
		self.compare(other, Comparison::Lt)
	}

	/// Creates the roll of whether this roll is less than or equal to the other. See [`Self::compare()`].
	#[must_use]
	#[inline]
	pub fn le(&self, other: &Self) -> Self {
		self.compare(other, Comparison::Lte)
	}

	/// Creates the roll of whether this roll is greater than the other. See [`Self::compare()`].
	#[must_use]
	#[inline]
	pub fn gt(&self, other: &Self) -> Self {
		self.compare(other, Comparison::Gt)
	}

	/// Creates the roll of whether this roll is greater than or equal to the other. See [`Self::compare()`].
	#[must_use]
	#[inline]
	pub fn ge(&self, other: &Self) -> Self {
		self.compare(other, Comparison::Gte)
	}

	/// Creates the roll of whether this roll lands on the same total as the other. See [`Self::compare()`].
	///
	/// This is unrelated to `==`, which checks whether two rolls have the exact same distribution.
	#[must_use]
	#[inline]
	pub fn eq_to(&self, other: &Self) -> Self {
		self.compare(other, Comparison::Eq)
	}

	/// Creates the roll of whether this roll lands on a different total than the other. See [`Self::compare()`].
	///
	/// This is unrelated to `!=`, which checks whether two rolls have different distributions.
	#[must_use]
	#[inline]
	pub fn ne_to(&self, other: &Self) -> Self {
		self.compare(other, Comparison::Ne)
	}

	/// Creates a roll with all weights scaled to add up to `target`. See [`Distribution::normalized()`].
	///
	/// # Errors
	/// If the roll has no possible outcomes (or only weightless ones), an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use alea::Roll;
	///
	/// let d10: Roll = "1d10".parse()?;
	/// assert_eq!(d10.normalized(100.0)?.distribution().get(1.0), Some(10.0));
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	#[inline]
	pub fn normalized(&self, target: f64) -> Result<Self, Error> {
		self.dist.normalized(target).map(Self::from)
	}

	/// Creates a roll with all weights scaled to probabilities (adding up to 1).
	///
	/// # Errors
	/// If the roll has no possible outcomes (or only weightless ones), an error variant is returned.
	#[inline]
	pub fn probabilities(&self) -> Result<Self, Error> {
		self.normalized(1.0)
	}

	/// Rolls for a single total using the given sampler. See [`Distribution::sample()`].
	///
	/// # Errors
	/// If the roll has no possible outcomes (or only weightless ones), an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use alea::{dist::sampler::FastRand as FastRandSampler, Roll};
	///
	/// let roll: Roll = "1d4+2".parse()?;
	/// let mut sampler = FastRandSampler::with_seed(0x750c38d574400);
	/// let total = roll.roll_with(&mut sampler)?;
	/// assert!((3.0..=6.0).contains(&total));
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	#[inline]
	pub fn roll_with<S: Sampler + ?Sized>(&self, sampler: &mut S) -> Result<f64, Error> {
		self.dist.sample(sampler)
	}

	/// Rolls for a single total using a new, randomly-seeded fastrand sampler.
	/// Requires the `std` and `fastrand` features (enabled by default).
	///
	/// # Errors
	/// If the roll has no possible outcomes (or only weightless ones), an error variant is returned.
	#[cfg(all(feature = "std", feature = "fastrand"))]
	#[inline]
	pub fn roll(&self) -> Result<f64, Error> {
		self.roll_with(&mut FastRandSampler::default())
	}

	/// Gathers everything a charting collaborator needs to draw the roll as a bar graph: the labels, and a bar for each
	/// possible total with its chance as a percentage, in ascending order of total.
	///
	/// # Errors
	/// If the roll has no possible outcomes (or only weightless ones), an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use alea::{roll::FigureLabels, Roll};
	///
	/// let roll: Roll = "1d4".parse()?;
	/// let figure = roll.to_figure(FigureLabels::default())?;
	/// assert_eq!(figure.labels.title, "Roll Distribution");
	/// assert_eq!(figure.bars, vec![(1.0, 25.0), (2.0, 25.0), (3.0, 25.0), (4.0, 25.0)]);
	/// # Ok::<(), Box<dyn std::error::Error>>(())
	/// ```
	pub fn to_figure(&self, labels: FigureLabels) -> Result<Figure, Error> {
		let percentages = self.dist.normalized(100.0)?;
		Ok(Figure {
			labels,
			bars: percentages.iter().collect(),
		})
	}
}

impl From<Distribution> for Roll {
	#[inline]
	fn from(dist: Distribution) -> Self {
		Self { dist }
	}
}

impl From<&Expr> for Roll {
	#[inline]
	fn from(expr: &Expr) -> Self {
		Self::from_expr(expr)
	}
}

impl From<i32> for Roll {
	/// Converts a number into a roll that always results in it.
	#[inline]
	fn from(value: i32) -> Self {
		Self::constant(f64::from(value))
	}
}

impl From<f64> for Roll {
	/// Converts a number into a roll that always results in it.
	#[inline]
	fn from(value: f64) -> Self {
		Self::constant(value)
	}
}

impl FromIterator<(f64, f64)> for Roll {
	/// Builds a roll from `(outcome, weight)` pairs, accumulating the weights of repeated outcomes.
	fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
		Self::from(iter.into_iter().collect::<Distribution>())
	}
}

impl fmt::Display for Roll {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// The output of this implementation is the roll's distribution.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.dist)
	}
}

/// Generates the `+`/`-` operator implementations for [`Roll`] against other rolls and plain numbers, forwarding to
/// the named convolution method of [`Distribution`].
macro_rules! roll_op_impl {
	($trait:ident, $method:ident, $dist_method:ident) => {
		impl ops::$trait<Roll> for Roll {
			type Output = Roll;

			#[inline]
			fn $method(self, rhs: Roll) -> Roll {
				Roll::from(self.dist.$dist_method(&rhs.dist))
			}
		}

		impl ops::$trait<&Roll> for Roll {
			type Output = Roll;

			#[inline]
			fn $method(self, rhs: &Roll) -> Roll {
				Roll::from(self.dist.$dist_method(&rhs.dist))
			}
		}

		impl ops::$trait<&Roll> for &Roll {
			type Output = Roll;

			#[inline]
			fn $method(self, rhs: &Roll) -> Roll {
				Roll::from(self.dist.$dist_method(&rhs.dist))
			}
		}

		roll_op_impl!(@num $trait, $method, $dist_method, i32);
		roll_op_impl!(@num $trait, $method, $dist_method, f64);
	};

	(@num $trait:ident, $method:ident, $dist_method:ident, $num:ty) => {
		impl ops::$trait<$num> for Roll {
			type Output = Roll;

			#[inline]
			fn $method(self, rhs: $num) -> Roll {
				Roll::from(self.dist.$dist_method(&Roll::from(rhs).dist))
			}
		}

		impl ops::$trait<$num> for &Roll {
			type Output = Roll;

			#[inline]
			fn $method(self, rhs: $num) -> Roll {
				Roll::from(self.dist.$dist_method(&Roll::from(rhs).dist))
			}
		}

		impl ops::$trait<Roll> for $num {
			type Output = Roll;

			#[inline]
			fn $method(self, rhs: Roll) -> Roll {
				Roll::from(Roll::from(self).dist.$dist_method(&rhs.dist))
			}
		}
	};
}

roll_op_impl!(Add, add, sum);
roll_op_impl!(Sub, sub, difference);

impl ops::Neg for Roll {
	type Output = Roll;

	#[inline]
	fn neg(self) -> Roll {
		Roll::from(self.dist.negated())
	}
}

impl ops::Neg for &Roll {
	type Output = Roll;

	#[inline]
	fn neg(self) -> Roll {
		Roll::from(self.dist.negated())
	}
}

/// Title and axis labels for a [`Figure`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs)]
pub struct FigureLabels {
	/// Title of the whole figure
	pub title: String,

	/// Label for the axis of totals
	pub x_label: String,

	/// Label for the axis of chances
	pub y_label: String,
}

impl FigureLabels {
	/// Creates a set of labels.
	#[must_use]
	pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
		Self {
			title: title.to_owned(),
			x_label: x_label.to_owned(),
			y_label: y_label.to_owned(),
		}
	}
}

impl Default for FigureLabels {
	fn default() -> Self {
		Self::new("Roll Distribution", "Outcome", "Probability (%)")
	}
}

/// Bar graph data for a [`Roll`], handed off to whatever draws it
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct Figure {
	/// Title and axis labels
	pub labels: FigureLabels,

	/// `(total, percentage)` for every possible total, in ascending order of total
	pub bars: Vec<(f64, f64)>,
}
