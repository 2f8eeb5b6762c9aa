//! Exact discrete distributions of outcomes, and the convolution-based operations that combine them.
//!
//! A [`Distribution`] maps each possible outcome to a non-negative weight. Weights don't need to add up to anything
//! in particular: the distribution of a plain 2d6 has a total weight of 36 (one for each combination of faces), and
//! only [`Distribution::normalized()`] turns that into probabilities.

pub mod comparison;
pub mod sampler;

use alloc::{collections::BTreeMap, string::String};
use core::{cmp::Ordering, fmt};

pub use self::{comparison::Comparison, sampler::Sampler};

/// Discrete distribution of outcome values to their weights
///
/// All views of a distribution ([`Self::iter()`], [`Display`](fmt::Display), etc.) are sorted by ascending outcome.
/// Every combining operation returns a new distribution and leaves its operands untouched.
///
/// # Examples
/// ```
/// use alea::dist::Distribution;
///
/// let mut coin = Distribution::new();
/// coin.add_event(0.0, 1.0);
/// coin.add_event(1.0, 1.0);
///
/// let two_coins = coin.sum(&coin);
/// assert_eq!(two_coins, Distribution::from([(0.0, 1.0), (1.0, 2.0), (2.0, 1.0)]));
/// assert_eq!(two_coins.expected_value()?, 1.0);
/// # Ok::<(), alea::dist::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
	/// Weight of each outcome
	weights: BTreeMap<Outcome, f64>,
}

impl Distribution {
	/// Creates a new distribution without any possible outcomes.
	#[must_use]
	#[inline]
	pub const fn new() -> Self {
		Self {
			weights: BTreeMap::new(),
		}
	}

	/// Creates a new distribution with a single certain outcome (with a weight of 1).
	#[must_use]
	pub fn constant(value: f64) -> Self {
		let mut dist = Self::new();
		dist.add_event(value, 1.0);
		dist
	}

	/// Adds weight to an outcome, creating its entry if it doesn't exist yet.
	///
	/// Weights are expected to be non-negative. Negative weights are stored as given, but any results derived from a
	/// distribution containing them are meaningless.
	///
	/// # Examples
	/// ```
	/// use alea::dist::Distribution;
	///
	/// let mut dist = Distribution::new();
	/// dist.add_event(3.0, 1.0);
	/// dist.add_event(3.0, 2.5);
	/// assert_eq!(dist.get(3.0), Some(3.5));
	/// ```
	pub fn add_event(&mut self, value: f64, weight: f64) {
		*self.weights.entry(Outcome::new(value)).or_insert(0.0) += weight;
	}

	/// Gets the weight of an outcome, if it is present.
	#[must_use]
	pub fn get(&self, value: f64) -> Option<f64> {
		self.weights.get(&Outcome::new(value)).copied()
	}

	/// Gets the number of distinct outcomes.
	#[must_use]
	#[inline]
	pub fn len(&self) -> usize {
		self.weights.len()
	}

	/// Indicates whether the distribution has no outcomes at all.
	#[must_use]
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.weights.is_empty()
	}

	/// Iterates over all `(outcome, weight)` pairs in ascending order of outcome.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = (f64, f64)> + ExactSizeIterator + '_ {
		self.weights.iter().map(|(outcome, weight)| (outcome.0, *weight))
	}

	/// Iterates over all outcomes in ascending order.
	pub fn outcomes(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
		self.weights.keys().map(|outcome| outcome.0)
	}

	/// Iterates over all weights in ascending order of their outcome.
	pub fn weights(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
		self.weights.values().copied()
	}

	/// Gets the lowest possible outcome.
	#[must_use]
	pub fn min(&self) -> Option<f64> {
		self.weights.first_key_value().map(|(outcome, _)| outcome.0)
	}

	/// Gets the highest possible outcome.
	#[must_use]
	pub fn max(&self) -> Option<f64> {
		self.weights.last_key_value().map(|(outcome, _)| outcome.0)
	}

	/// Calculates the sum of all weights. For an unnormalized dice distribution, this is the number of equally-likely
	/// combinations the dice can land in.
	#[must_use]
	pub fn total_weight(&self) -> f64 {
		self.weights.values().sum()
	}

	/// Calculates the weighted mean of all outcomes.
	///
	/// # Errors
	/// If the total weight is zero (including when there are no outcomes at all), an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use alea::dist::Distribution;
	///
	/// let dist = Distribution::from([(1.0, 1.0), (2.0, 1.0), (3.0, 2.0)]);
	/// assert_eq!(dist.expected_value()?, 2.25);
	/// assert!(Distribution::new().expected_value().is_err());
	/// # Ok::<(), alea::dist::Error>(())
	/// ```
	pub fn expected_value(&self) -> Result<f64, Error> {
		let total = self.checked_total_weight()?;
		let weighted: f64 = self.iter().map(|(value, weight)| value * weight).sum();
		Ok(weighted / total)
	}

	/// Combines two distributions by applying an operation to every pair of outcomes.
	/// Each pair `(a, b)` contributes the product of their weights to the outcome `op(a, b)`, accumulating with any
	/// other pairs that land on the same outcome.
	///
	/// Combining with an empty distribution results in an empty distribution.
	///
	/// # Examples
	/// ```
	/// use alea::dist::Distribution;
	///
	/// let d2 = Distribution::from([(1.0, 1.0), (2.0, 1.0)]);
	/// let highest = d2.combine(&d2, f64::max);
	/// assert_eq!(highest, Distribution::from([(1.0, 1.0), (2.0, 3.0)]));
	/// ```
	#[must_use]
	pub fn combine(&self, other: &Self, mut op: impl FnMut(f64, f64) -> f64) -> Self {
		let mut result = Self::new();
		for (a, weight_a) in self.iter() {
			for (b, weight_b) in other.iter() {
				result.add_event(op(a, b), weight_a * weight_b);
			}
		}
		result
	}

	/// Convolves two distributions under addition, resulting in the distribution of their sum.
	#[must_use]
	pub fn sum(&self, other: &Self) -> Self {
		self.combine(other, |a, b| a + b)
	}

	/// Convolves two distributions under subtraction, resulting in the distribution of their difference.
	#[must_use]
	pub fn difference(&self, other: &Self) -> Self {
		self.combine(other, |a, b| a - b)
	}

	/// Negates every outcome, keeping their weights.
	#[must_use]
	pub fn negated(&self) -> Self {
		Self::constant(0.0).difference(self)
	}

	/// Compares every pair of outcomes from two distributions, resulting in a distribution over `0.0` (the comparison
	/// doesn't hold) and `1.0` (it holds). The weights of the result add up to the product of both total weights.
	///
	/// # Examples
	/// ```
	/// use alea::dist::{Comparison, Distribution};
	///
	/// let d3: Distribution = (1..=3).map(|face| (f64::from(face), 1.0)).collect();
	/// let two = Distribution::constant(2.0);
	/// assert_eq!(d3.compare(&two, Comparison::Gte), Distribution::from([(0.0, 1.0), (1.0, 2.0)]));
	/// ```
	#[must_use]
	pub fn compare(&self, other: &Self, cmp: Comparison) -> Self {
		self.combine(other, |a, b| cmp.outcome(a, b))
	}

	/// Multiplies every weight by a factor.
	#[must_use]
	pub fn scale(&self, factor: f64) -> Self {
		Self {
			weights: self
				.weights
				.iter()
				.map(|(outcome, weight)| (*outcome, weight * factor))
				.collect(),
		}
	}

	/// Scales all weights so that they add up to `target`, keeping their proportions.
	/// A target of `1.0` results in probabilities, and `100.0` in percentages.
	///
	/// # Errors
	/// If the total weight is zero (including when there are no outcomes at all), an error variant is returned.
	///
	/// # Examples
	/// ```
	/// use alea::dist::Distribution;
	///
	/// let dist = Distribution::from([(1.0, 1.0), (2.0, 3.0)]);
	/// assert_eq!(dist.normalized(1.0)?, Distribution::from([(1.0, 0.25), (2.0, 0.75)]));
	/// assert_eq!(dist.normalized(100.0)?, Distribution::from([(1.0, 25.0), (2.0, 75.0)]));
	/// # Ok::<(), alea::dist::Error>(())
	/// ```
	pub fn normalized(&self, target: f64) -> Result<Self, Error> {
		let total = self.checked_total_weight()?;
		Ok(Self {
			weights: self
				.weights
				.iter()
				.map(|(outcome, weight)| (*outcome, weight * target / total))
				.collect(),
		})
	}

	/// Draws a single outcome at random, with each outcome's chance proportional to its weight.
	///
	/// The sampler's uniform value in `[0, 1)` is scaled to the total weight, then matched against the running total
	/// of weights in ascending order of outcome. Which outcome a value lands on right at the boundary between two
	/// outcomes is subject to floating-point rounding.
	///
	/// # Errors
	/// If the total weight isn't positive (including when there are no outcomes at all), an error variant is
	/// returned.
	///
	/// # Examples
	/// ```
	/// use alea::dist::{sampler::Fixed as FixedSampler, Distribution};
	///
	/// let dist = Distribution::from([(1.0, 1.0), (2.0, 2.0), (3.0, 1.0)]);
	/// assert_eq!(dist.sample(&mut FixedSampler(0.0))?, 1.0);
	/// assert_eq!(dist.sample(&mut FixedSampler(0.5))?, 2.0);
	/// assert_eq!(dist.sample(&mut FixedSampler(0.8))?, 3.0);
	/// # Ok::<(), alea::dist::Error>(())
	/// ```
	pub fn sample<S: Sampler + ?Sized>(&self, sampler: &mut S) -> Result<f64, Error> {
		let total = self.total_weight();
		if total <= 0.0 || total.is_nan() {
			return Err(Error::Degenerate(self.clone()));
		}

		let target = sampler.uniform() * total;
		let mut cumulative = 0.0;
		for (value, weight) in self.iter() {
			cumulative += weight;
			if target < cumulative {
				return Ok(value);
			}
		}

		// Rounding can leave the target at or just past the final running total
		self.iter()
			.rev()
			.find(|(_, weight)| *weight > 0.0)
			.map(|(value, _)| value)
			.ok_or_else(|| Error::Degenerate(self.clone()))
	}

	/// Gets the total weight, ensuring it's usable as a divisor.
	fn checked_total_weight(&self) -> Result<f64, Error> {
		let total = self.total_weight();
		if total == 0.0 || total.is_nan() {
			Err(Error::Degenerate(self.clone()))
		} else {
			Ok(total)
		}
	}
}

impl FromIterator<(f64, f64)> for Distribution {
	/// Builds a distribution from `(outcome, weight)` pairs, accumulating the weights of repeated outcomes.
	fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
		let mut dist = Self::new();
		dist.extend(iter);
		dist
	}
}

impl Extend<(f64, f64)> for Distribution {
	fn extend<T: IntoIterator<Item = (f64, f64)>>(&mut self, iter: T) {
		for (value, weight) in iter {
			self.add_event(value, weight);
		}
	}
}

impl<const N: usize> From<[(f64, f64); N]> for Distribution {
	#[inline]
	fn from(pairs: [(f64, f64); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl fmt::Display for Distribution {
	/// Formats the value using the given formatter. [Read more][core::fmt::Debug::fmt()]
	///
	/// # Examples
	/// ```
	/// use alea::dist::Distribution;
	///
	/// let dist = Distribution::from([(2.0, 1.0), (-1.0, 0.5)]);
	/// assert_eq!(dist.to_string(), "{-1: 0.5, 2: 1}");
	/// ```
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{")?;
		for (i, (value, weight)) in self.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{value}: {weight}")?;
		}
		write!(f, "}}")
	}
}

/// Outcome value usable as a map key: totally ordered, with `-0.0` folded into `0.0`
#[derive(Debug, Clone, Copy)]
struct Outcome(f64);

impl Outcome {
	/// Wraps an outcome value.
	#[inline]
	fn new(value: f64) -> Self {
		// -0.0 == 0.0, but total_cmp would keep them apart
		Self(if value == 0.0 { 0.0 } else { value })
	}
}

impl PartialEq for Outcome {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Outcome {}

impl PartialOrd for Outcome {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Outcome {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

/// Error resulting from working with a [`Distribution`]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
	/// The distribution has no total weight to divide by or sample from.
	///
	/// # Examples
	/// ```
	/// use alea::dist::{Distribution, Error};
	///
	/// let dist = Distribution::new();
	/// assert!(matches!(dist.normalized(1.0), Err(Error::Degenerate(..))));
	/// ```
	#[error("distribution {0} has no usable total weight")]
	Degenerate(Distribution),

	/// The provided symbol doesn't match to a known comparison.
	///
	/// # Examples
	/// ```
	/// use alea::dist::{Comparison, Error};
	///
	/// let cmp = Comparison::from_symbol("=<");
	/// assert!(matches!(cmp, Err(Error::UnknownComparison(..))));
	/// ```
	#[error("unknown comparison symbol: {0}")]
	UnknownComparison(String),
}
