//! Sources of uniform random values for sampling [`Distribution`](super::Distribution)s.

use core::iter::Peekable;

#[cfg(feature = "fastrand")]
use fastrand::Rng;

/// Generates uniform values that distributions turn into sampled outcomes
pub trait Sampler {
	/// Generates a single value in `[0, 1)`.
	#[must_use]
	fn uniform(&mut self) -> f64;
}

/// Generates random values using [fastrand]. Requires the `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default fastrand sampler
/// ```
/// use alea::dist::{sampler::FastRand as FastRandSampler, Distribution};
///
/// let mut sampler = FastRandSampler::default();
///
/// let dist = Distribution::from([(1.0, 1.0), (2.0, 1.0)]);
/// let _ = dist.sample(&mut sampler)?;
/// let _ = dist.sample(&mut sampler)?;
/// # Ok::<(), alea::dist::Error>(())
/// ```
///
/// ## Manually seeded fastrand sampler
/// ```
/// use alea::dist::{sampler::FastRand as FastRandSampler, Distribution};
///
/// let dist = Distribution::from([(1.0, 1.0), (2.0, 1.0), (3.0, 1.0)]);
/// let mut a = FastRandSampler::with_seed(0x750c38d574400);
/// let mut b = FastRandSampler::with_seed(0x750c38d574400);
/// for _ in 0..10 {
/// 	assert_eq!(dist.sample(&mut a)?, dist.sample(&mut b)?);
/// }
/// # Ok::<(), alea::dist::Error>(())
/// ```
///
/// ## Custom fastrand sampler
/// ```
/// use alea::dist::{sampler::FastRand as FastRandSampler, Distribution};
/// use fastrand::Rng;
///
/// let rng = Rng::with_seed(0x750c38d574400);
/// let mut sampler = FastRandSampler::new(rng);
///
/// let dist = Distribution::from([(1.0, 1.0), (2.0, 1.0)]);
/// let _ = dist.sample(&mut sampler)?;
/// # Ok::<(), alea::dist::Error>(())
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(Default))]
pub struct FastRand(Rng);

#[cfg(feature = "fastrand")]
impl FastRand {
	/// Creates a new fastrand sampler that uses the given RNG instance to generate values.
	#[must_use]
	#[inline]
	pub const fn new(rng: Rng) -> Self {
		Self(rng)
	}

	/// Creates a new fastrand sampler that uses a pre-seeded RNG instance to generate values.
	#[must_use]
	#[inline]
	pub fn with_seed(seed: u64) -> Self {
		Self(Rng::with_seed(seed))
	}
}

#[cfg(feature = "fastrand")]
impl Sampler for FastRand {
	/// Generates a value using the [`fastrand::Rng`] the sampler was created with.
	#[inline]
	fn uniform(&mut self) -> f64 {
		self.0.f64()
	}
}

/// Generates values that are always the same.
///
/// # Examples
/// ```
/// use alea::dist::{sampler::Fixed as FixedSampler, Distribution};
///
/// let dist = Distribution::from([(1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (4.0, 1.0)]);
/// assert_eq!(dist.sample(&mut FixedSampler(0.0))?, 1.0);
/// assert_eq!(dist.sample(&mut FixedSampler(0.6))?, 3.0);
/// # Ok::<(), alea::dist::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Fixed(pub f64);

impl Sampler for Fixed {
	/// Generates the sampler's value, clamped to `[0, 1)`.
	#[inline]
	fn uniform(&mut self) -> f64 {
		clamp_unit(self.0)
	}
}

/// Generates values from an iterator. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use alea::dist::{sampler::Iter as IterSampler, Distribution};
///
/// let dist = Distribution::from([(1.0, 1.0), (2.0, 1.0)]);
/// let mut sampler = IterSampler::new([0.9, 0.1]);
/// assert_eq!(dist.sample(&mut sampler)?, 2.0);
/// assert_eq!(dist.sample(&mut sampler)?, 1.0);
/// assert!(!sampler.can_sample());
/// # Ok::<(), alea::dist::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = f64>>(Peekable<I>);

impl<I: Iterator<Item = f64>> Iter<I> {
	/// Checks whether the iterator still has values available.
	#[inline]
	pub fn can_sample(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new sampler that uses the given iterator to provide values.
	#[must_use]
	#[inline]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = f64>> Sampler for Iter<I> {
	/// Generates the value from the next iteration, clamped to `[0, 1)`.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[inline]
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_sample() is expected"
	)]
	fn uniform(&mut self) -> f64 {
		clamp_unit(self.0.next().expect("iterator is finished"))
	}
}

/// Largest `f64` that is still less than 1
const LARGEST_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Pins a value into `[0, 1)`. NaN maps to 0.
fn clamp_unit(value: f64) -> f64 {
	if value >= 1.0 {
		LARGEST_BELOW_ONE
	} else if value > 0.0 {
		value
	} else {
		0.0
	}
}
