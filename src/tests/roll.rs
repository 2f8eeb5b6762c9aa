use crate::{
	dist::{
		sampler::{FastRand as FastRandSampler, Fixed as FixedSampler},
		Comparison, Distribution, Error,
	},
	roll::{FigureLabels, Roll},
};

#[test]
fn constructor_distributions() {
	let cases: &[(&str, &[(f64, f64)])] = &[
		("1", &[(1.0, 1.0)]),
		("-4", &[(-4.0, 1.0)]),
		("d4", &[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (4.0, 1.0)]),
		("d4+2", &[(3.0, 1.0), (4.0, 1.0), (5.0, 1.0), (6.0, 1.0)]),
		("1d6", &[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (4.0, 1.0), (5.0, 1.0), (6.0, 1.0)]),
		(
			"2d4",
			&[(2.0, 1.0), (3.0, 2.0), (4.0, 3.0), (5.0, 4.0), (6.0, 3.0), (7.0, 2.0), (8.0, 1.0)],
		),
		(
			"1d4 - 1d4",
			&[
				(-3.0, 1.0),
				(-2.0, 2.0),
				(-1.0, 3.0),
				(0.0, 4.0),
				(1.0, 3.0),
				(2.0, 2.0),
				(3.0, 1.0),
			],
		),
	];

	for (input, expected) in cases {
		assert_eq!(roll(input).distribution(), &expected.iter().copied().collect::<Distribution>(), "{input}");
	}
}

#[test]
fn two_d6_plus_one() {
	let dist = roll("2D6+1").into_distribution();
	assert_eq!(dist.get(3.0), Some(1.0));
	assert_eq!(dist.get(8.0), Some(6.0));
	assert_eq!(dist.get(13.0), Some(1.0));
	assert_eq!(dist.get(2.0), None);
	assert_eq!(dist, roll("2d6").distribution().sum(&Distribution::constant(1.0)));
}

#[test]
fn total_weights() {
	for (input, expected) in [
		("1", 1.0),
		("-4", 1.0),
		("d4", 4.0),
		("d4+2", 4.0),
		("1d6", 6.0),
		("5d10", 100_000.0),
		("2d4", 16.0),
		("1d6 - 1d4", 24.0),
	] {
		assert_eq!(roll(input).total_weight(), expected, "{input}");
	}
}

#[test]
fn expected_values() {
	for (input, expected) in [
		("6", 6.0),
		("-2", -2.0),
		("d4", 2.5),
		("d4+2", 4.5),
		("2d6", 7.0),
		("5d10", 27.5),
		("2d4", 5.0),
		("1d6 - 1d4", 1.0),
	] {
		assert_eq!(roll(input).expected_value().unwrap(), expected, "{input}");
	}

	// Weights of this size are past exact integer representation
	assert!((roll("200D6").expected_value().unwrap() - 700.0).abs() < 1e-6);
}

#[test]
fn expected_value_of_dice_formula() {
	for count in 1..=6 {
		for sides in [2, 3, 6, 8, 12] {
			let expected = f64::from(count) * (f64::from(sides) + 1.0) / 2.0;
			let actual = roll(&format!("{count}d{sides}")).expected_value().unwrap();
			assert!((actual - expected).abs() < 1e-9, "{count}d{sides}");
		}
	}
}

#[test]
fn normalization() {
	let cases: &[(&str, &[(f64, f64)])] = &[
		("1", &[(1.0, 1.0)]),
		("-4", &[(-4.0, 1.0)]),
		("d4", &[(1.0, 0.25), (2.0, 0.25), (3.0, 0.25), (4.0, 0.25)]),
		("d4+2", &[(3.0, 0.25), (4.0, 0.25), (5.0, 0.25), (6.0, 0.25)]),
		(
			"2d4",
			&[
				(2.0, 1.0 / 16.0),
				(3.0, 2.0 / 16.0),
				(4.0, 3.0 / 16.0),
				(5.0, 4.0 / 16.0),
				(6.0, 3.0 / 16.0),
				(7.0, 2.0 / 16.0),
				(8.0, 1.0 / 16.0),
			],
		),
	];

	for (input, expected) in cases {
		let original = roll(input);
		let normalized = original.probabilities().unwrap();
		assert_eq!(normalized.distribution(), &expected.iter().copied().collect::<Distribution>(), "{input}");
		assert_eq!(normalized.total_weight(), 1.0);
		assert_eq!(normalized.expected_value().unwrap(), original.expected_value().unwrap());
	}
}

#[test]
fn normalization_to_percentages() {
	let d10 = roll("1D10").normalized(100.0).unwrap();
	assert_eq!(d10.distribution().get(1.0), Some(10.0));
	assert!((d10.total_weight() - 100.0).abs() < 1e-9);
}

#[test]
fn normalizing_empty_roll_fails() {
	assert!(matches!(Roll::new().probabilities(), Err(Error::Degenerate(..))));
	assert!(matches!(Roll::new().expected_value(), Err(Error::Degenerate(..))));
}

#[test]
fn less_than() {
	for (left, right, expected) in [
		("1", "1", vec![(0.0, 1.0)]),
		("D6", "1", vec![(0.0, 6.0)]),
		("D6", "2", vec![(0.0, 5.0), (1.0, 1.0)]),
		("D6", "6", vec![(0.0, 1.0), (1.0, 5.0)]),
		("D6", "7", vec![(1.0, 6.0)]),
		("D6", "D6", vec![(0.0, 21.0), (1.0, 15.0)]),
		("1d10", "1d3", vec![(0.0, 27.0), (1.0, 3.0)]),
	] {
		assert_comparison(roll(left).lt(&roll(right)), expected);
	}
}

#[test]
fn less_than_or_equal() {
	for (left, right, expected) in [
		("1", "1", vec![(1.0, 1.0)]),
		("D6", "1", vec![(0.0, 5.0), (1.0, 1.0)]),
		("D6", "2", vec![(0.0, 4.0), (1.0, 2.0)]),
		("D6", "6", vec![(1.0, 6.0)]),
		("D6", "7", vec![(1.0, 6.0)]),
		("D6", "D6", vec![(0.0, 15.0), (1.0, 21.0)]),
		("1d10", "1d3", vec![(0.0, 24.0), (1.0, 6.0)]),
	] {
		assert_comparison(roll(left).le(&roll(right)), expected);
	}
}

#[test]
fn greater_than() {
	for (left, right, expected) in [
		("1", "1", vec![(0.0, 1.0)]),
		("D6", "1", vec![(0.0, 1.0), (1.0, 5.0)]),
		("D6", "2", vec![(0.0, 2.0), (1.0, 4.0)]),
		("D6", "6", vec![(0.0, 6.0)]),
		("D6", "7", vec![(0.0, 6.0)]),
		("D6", "D6", vec![(0.0, 21.0), (1.0, 15.0)]),
		("1d10", "1d3", vec![(0.0, 6.0), (1.0, 24.0)]),
	] {
		assert_comparison(roll(left).gt(&roll(right)), expected);
	}
}

#[test]
fn greater_than_or_equal() {
	for (left, right, expected) in [
		("1", "1", vec![(1.0, 1.0)]),
		("D6", "1", vec![(1.0, 6.0)]),
		("D6", "2", vec![(0.0, 1.0), (1.0, 5.0)]),
		("D6", "6", vec![(0.0, 5.0), (1.0, 1.0)]),
		("D6", "7", vec![(0.0, 6.0)]),
		("D6", "D6", vec![(0.0, 15.0), (1.0, 21.0)]),
		("1d10", "1d3", vec![(0.0, 3.0), (1.0, 27.0)]),
		("1d10", "1d6", vec![(0.0, 15.0), (1.0, 45.0)]),
	] {
		assert_comparison(roll(left).ge(&roll(right)), expected);
	}
}

#[test]
fn equal_and_not_equal_totals() {
	let d6 = roll("d6");
	assert_comparison(d6.eq_to(&d6), vec![(0.0, 30.0), (1.0, 6.0)]);
	assert_comparison(d6.ne_to(&d6), vec![(0.0, 6.0), (1.0, 30.0)]);
	assert_eq!(d6.eq_to(&roll("3")), d6.compare(&roll("3"), Comparison::Eq));
}

#[test]
fn comparison_weights_multiply() {
	let a = roll("2d6+1");
	let b = roll("1d8-1d4");
	for result in [a.lt(&b), a.le(&b), a.gt(&b), a.ge(&b), a.eq_to(&b), a.ne_to(&b)] {
		assert_eq!(result.total_weight(), a.total_weight() * b.total_weight());
	}
}

#[test]
fn chained_comparisons() {
	// Whether at least one of two d6 rolls beats a 4
	let first = roll("d6").gt(&roll("4"));
	let second = roll("d6").gt(&roll("4"));
	let successes = first + second;
	assert_eq!(
		successes.distribution(),
		&Distribution::from([(0.0, 16.0), (1.0, 16.0), (2.0, 4.0)])
	);
	assert_comparison(successes.ge(&Roll::from(1)), vec![(0.0, 16.0), (1.0, 20.0)]);
}

#[test]
fn equality() {
	for (left, right, equal) in [
		("1", "1", true),
		("D6", "D6", true),
		("2D6", "1D6+1D6", true),
		("2D6+1", "1D6+1+1D6", true),
		("D4", "D5", false),
		("D4", "4", false),
	] {
		assert_eq!(roll(left) == roll(right), equal, "{left} == {right}");
		assert_eq!(roll(left) != roll(right), !equal, "{left} != {right}");
	}
}

#[test]
fn operators() {
	let d6 = roll("1d6");
	assert_eq!(&d6 + &d6, roll("2d6"));
	assert_eq!(d6.clone() + &d6, roll("2d6"));
	assert_eq!(d6.sum(&d6), roll("2d6"));
	assert_eq!(&d6 - &d6, roll("1d6-1d6"));
	assert_eq!(d6.difference(&d6), roll("1d6-1d6"));
	assert_eq!(-d6.clone(), roll("-1d6"));
	assert_eq!(-&d6, roll("-d6"));
}

#[test]
fn numeric_operands() {
	let d4 = roll("d4");
	assert_eq!(&d4 + 2, roll("d4+2"));
	assert_eq!(d4.clone() - 1, roll("d4-1"));
	assert_eq!(d4.clone() + 0.5, Roll::from_iter([(1.5, 1.0), (2.5, 1.0), (3.5, 1.0), (4.5, 1.0)]));
	assert_eq!(10 - d4.clone(), roll("10-d4"));
	assert_eq!(1.0 + d4.clone(), roll("1+d4"));
	assert_eq!(Roll::from(3), Roll::constant(3.0));
	assert_eq!(Roll::from(2.5), Roll::constant(2.5));
}

#[test]
fn built_from_events() {
	let mut built = Roll::new();
	for side in 1..=6 {
		built.add_event(f64::from(side), 1.0);
	}
	assert_eq!(built, roll("d6"));

	let literal: Roll = [(2.0, 0.2), (4.0, 0.3), (7.0, 0.5)].into_iter().collect();
	let round_trip: Roll = literal.distribution().iter().collect();
	assert_eq!(round_trip, literal);
}

#[test]
fn rolls_possible_values() {
	let dice = roll("1d4+2");
	let mut sampler = FastRandSampler::with_seed(0x750c38d574400);
	let mut results = Vec::new();
	for _ in 0..200 {
		let val = dice.roll_with(&mut sampler).unwrap();
		assert!((3.0..=6.0).contains(&val));
		if !results.contains(&val) {
			results.push(val);
		}
	}
	results.sort_by(f64::total_cmp);
	assert_eq!(results, vec![3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn rolls_only_known_outcomes() {
	let dice: Roll = [(2.0, 0.2), (4.0, 0.3), (7.0, 0.5)].into_iter().collect();
	for _ in 0..20 {
		let val = dice.roll().unwrap();
		assert!(dice.distribution().get(val).is_some());
	}
}

#[test]
fn rolls_constants() {
	for (input, expected) in [("-2", -2.0), ("0", 0.0)] {
		let dice = roll(input);
		for _ in 0..5 {
			assert_eq!(dice.roll().unwrap(), expected);
		}
	}
	assert_eq!(roll("2d6").roll_with(&mut FixedSampler(0.0)).unwrap(), 2.0);
	assert!(Roll::new().roll().is_err());
}

#[test]
fn figure() {
	let figure = roll("2d4").to_figure(FigureLabels::default()).unwrap();
	assert_eq!(
		figure.labels,
		FigureLabels::new("Roll Distribution", "Outcome", "Probability (%)")
	);
	assert_eq!(
		figure.bars,
		vec![(2.0, 6.25), (3.0, 12.5), (4.0, 18.75), (5.0, 25.0), (6.0, 18.75), (7.0, 12.5), (8.0, 6.25)]
	);

	let labels = FigureLabels::new("6d6 Distribution", "Sum of 6d6", "Probability (%)");
	let figure = roll("6d6").to_figure(labels.clone()).unwrap();
	assert_eq!(figure.labels, labels);
	assert_eq!(figure.bars.len(), 31);
	assert!(figure.bars.windows(2).all(|pair| pair[0].0 < pair[1].0));
	assert!((figure.bars.iter().map(|(_, pct)| pct).sum::<f64>() - 100.0).abs() < 1e-9);

	assert!(Roll::new().to_figure(FigureLabels::default()).is_err());
}

#[test]
fn display() {
	assert_eq!(roll("1d4-1").to_string(), "{0: 1, 1: 1, 2: 1, 3: 1}");
}

fn roll(input: &str) -> Roll {
	input.parse().unwrap()
}

fn assert_comparison(result: Roll, expected: Vec<(f64, f64)>) {
	assert_eq!(result.distribution(), &expected.into_iter().collect::<Distribution>());
}
