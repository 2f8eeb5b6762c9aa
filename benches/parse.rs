#![feature(test)]

extern crate test;

use alea::expr::Expr;
use chumsky::Parser;
use test::Bencher;

const LONG_EXPR: &str = "4d8 + 2d10 - 3d6 + 12 - d4 + 6d6 - 1 + 2D12 - 8 + d20 + d100 - 3";

#[bench]
fn parse_basic(b: &mut Bencher) {
	let parser = alea::parser();
	b.iter(|| parser.parse("4d8 + 4").unwrap());
}

#[bench]
fn parse_long(b: &mut Bencher) {
	let parser = alea::parser();
	b.iter(|| parser.parse(LONG_EXPR).unwrap());
}

#[bench]
fn parser_creation(b: &mut Bencher) {
	b.iter(alea::parser);
}

#[bench]
fn fromstr_basic(b: &mut Bencher) {
	b.iter(|| "4d8 + 4".parse::<Expr>().unwrap());
}

#[bench]
fn fromstr_long(b: &mut Bencher) {
	b.iter(|| LONG_EXPR.parse::<Expr>().unwrap());
}
