#[cfg(all(feature = "std", feature = "parse", feature = "fastrand"))]
mod roll;
