use lazy_static::lazy_static;
use regex::Regex;
use std::{cmp::Ordering, fmt};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SemanticVersionError {
	#[error("'{0}' is not a valid semantic version")]
	Malformed(String),
}

/// Numeric components beyond this many digits are rejected outright rather
/// than risked against `u32::from_str`'s own overflow error.
const MAX_NUMERIC_DIGITS: usize = 50;

/// A `major.minor.patch` version, optionally carrying a `-pre-release` and/or
/// `+build` suffix (either may appear, in either order), as accepted by the
/// `min`/`max` arguments of the `deprecate` directive and by module version
/// declarations. Ordering and equality consider only `major.minor.patch` —
/// build metadata never affects precedence, and this vocabulary has no use
/// for pre-release precedence rules beyond accepting and preserving the tag.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
	pub major: u32,
	pub minor: u32,
	pub patch: u32,
	pub pre_release: Option<String>,
	pub build: Option<String>,
}

impl PartialEq for SemanticVersion {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for SemanticVersion {}

impl SemanticVersion {
	pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
		Self { major, minor, patch, pre_release: None, build: None }
	}

	pub fn parse(input: &str) -> Result<Self, SemanticVersionError> {
		lazy_static! {
			static ref CORE: Regex = Regex::new(r"^(\d{1,50})\.(\d{1,50})\.(\d{1,50})((?:[-+][0-9A-Za-z.]+){0,2})$").unwrap();
		}

		let malformed = || SemanticVersionError::Malformed(input.to_string());
		let trimmed = input.trim();
		let caps = CORE.captures(trimmed).ok_or_else(malformed)?;

		let get = |i: usize| -> Result<u32, SemanticVersionError> {
			let text = caps.get(i).unwrap().as_str();
			if text.len() > MAX_NUMERIC_DIGITS {
				return Err(malformed());
			}
			text.parse::<u32>().map_err(|_| malformed())
		};

		let mut pre_release = None;
		let mut build = None;
		// The suffix tail is `(-pre-release)?(+build)?` or `(+build)?(-pre-release)?`.
		// Each tag's own alphabet excludes `-`/`+`, so splitting on those sigils
		// unambiguously recovers each piece regardless of which order it came in.
		let tail = caps.get(4).unwrap().as_str();
		for piece in split_suffix_tail(tail) {
			let (sigil, tag) = piece.split_at(1);
			match sigil {
				"-" if pre_release.is_none() => pre_release = Some(tag.to_string()),
				"+" if build.is_none() => build = Some(tag.to_string()),
				_ => return Err(malformed()),
			}
		}

		Ok(Self { major: get(1)?, minor: get(2)?, patch: get(3)?, pre_release, build })
	}
}

/// Splits a `(-pre-release)?(+build)?`-shaped tail (in either order) into its
/// up-to-two `-`/`+`-led pieces.
fn split_suffix_tail(tail: &str) -> Vec<&str> {
	if tail.is_empty() {
		return Vec::new();
	}
	let second_marker = tail[1..].find(['-', '+']).map(|i| i + 1);
	match second_marker {
		Some(at) => vec![&tail[..at], &tail[at..]],
		None => vec![tail],
	}
}

impl fmt::Display for SemanticVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
		if let Some(pre) = &self.pre_release {
			write!(f, "-{pre}")?;
		}
		if let Some(build) = &self.build {
			write!(f, "+{build}")?;
		}
		Ok(())
	}
}

impl PartialOrd for SemanticVersion {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for SemanticVersion {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
	}
}

/// Whether `version` falls within an inclusive `[min, max]` window, treating
/// a missing bound as unconstrained on that side.
pub fn in_range(version: SemanticVersion, min: Option<SemanticVersion>, max: Option<SemanticVersion>) -> bool {
	if let Some(min) = min {
		if version.cmp(&min) == Ordering::Less {
			return false;
		}
	}
	if let Some(max) = max {
		if version.cmp(&max) == Ordering::Greater {
			return false;
		}
	}
	true
}
