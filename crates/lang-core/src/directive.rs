//! The directive vocabulary recognized between `[[` and `]]`, and the
//! small option grammars those directives' arguments are parsed with.
//! Grounded on the original's `ParserDirectiveTypes.h` option enums.

use lang_abstractions::SemanticVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
	Yes,
	No,
}

impl YesNo {
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"yes" => Some(Self::Yes),
			"no" => Some(Self::No),
			_ => None,
		}
	}

	pub fn as_bool(self) -> bool {
		matches!(self, Self::Yes)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNoAlwaysNever {
	Yes,
	No,
	Always,
	Never,
}

impl YesNoAlwaysNever {
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"yes" => Some(Self::Yes),
			"no" => Some(Self::No),
			"always" => Some(Self::Always),
			"never" => Some(Self::Never),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushPop {
	Push,
	Pop,
}

impl PushPop {
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"push" => Some(Self::Push),
			"pop" => Some(Self::Pop),
			_ => None,
		}
	}
}

/// The argument vocabulary for `[[error=...]]`/`[[warning=...]]`/`[[panic=...]]`:
/// a fault category name, a push/pop of the whole table, or a lock/unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultOption {
	Yes,
	No,
	Always,
	Never,
	Error,
	Default,
	Lock,
	Unlock,
	Push,
	Pop,
}

impl FaultOption {
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"yes" => Some(Self::Yes),
			"no" => Some(Self::No),
			"always" => Some(Self::Always),
			"never" => Some(Self::Never),
			"error" => Some(Self::Error),
			"default" => Some(Self::Default),
			"lock" => Some(Self::Lock),
			"unlock" => Some(Self::Unlock),
			"push" => Some(Self::Push),
			"pop" => Some(Self::Pop),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceAssetRequired {
	Yes,
	No,
	Warn,
}

impl SourceAssetRequired {
	pub fn parse(s: &str) -> Option<Self> {
		match s {
			"yes" => Some(Self::Yes),
			"no" => Some(Self::No),
			"warn" => Some(Self::Warn),
			_ => None,
		}
	}
}

/// A single `name=value` (or bare `name`) entry inside a directive body.
#[derive(Debug, Clone)]
pub struct DirectiveOption {
	pub name: String,
	pub value: Option<String>,
}

/// One `[[ name(=value)?, option, option=value, ... ]]` form. The leading
/// entry plays double duty as the directive's name and, when it carries a
/// `=value` of its own (`[[tab-stop=4]]`), as a primary argument — the same
/// `ident(=value)?` shape every later entry has.
#[derive(Debug, Clone)]
pub struct RawDirective {
	pub name: String,
	pub primary_value: Option<String>,
	pub options: Vec<DirectiveOption>,
}

impl RawDirective {
	pub fn option(&self, name: &str) -> Option<&DirectiveOption> {
		self.options.iter().find(|o| o.name == name)
	}

	pub fn value_of(&self, name: &str) -> Option<&str> {
		self.option(name).and_then(|o| o.value.as_deref())
	}

	pub fn has_flag(&self, name: &str) -> bool {
		self.option(name).is_some()
	}

	/// The directive's primary argument: either its own `=value`, or (for
	/// directives whose argument is a bare following entry, like
	/// `[[source, main.zx]]`) the first option's name.
	pub fn primary_argument(&self) -> Option<&str> {
		self.primary_value.as_deref().or_else(|| self.options.first().map(|o| o.name.as_str()))
	}
}

fn parse_entry(entry: &str) -> DirectiveOption {
	match entry.split_once('=') {
		Some((key, value)) => DirectiveOption { name: key.trim().to_string(), value: Some(unquote(value.trim())) },
		None => DirectiveOption { name: entry.to_string(), value: None },
	}
}

/// Splits the literal text between `[[` and `]]` into a `RawDirective`.
/// The grammar here is deliberately minimal: comma-separated
/// `ident(=value)?` entries, where `value` is either a bare word or a
/// `"quoted"` string. Anything richer belongs to the statement grammar
/// that directives are explicitly carved out of.
pub fn parse_raw_directive(body: &str) -> Option<RawDirective> {
	let mut parts = body.split(',').map(str::trim).filter(|s| !s.is_empty());
	let head = parse_entry(parts.next()?);
	let options = parts.map(|entry| parse_entry(entry.trim())).collect();

	Some(RawDirective { name: head.name, primary_value: head.value, options })
}

fn unquote(value: &str) -> String {
	let trimmed = value.trim();
	let quoted = (trimmed.starts_with('"') && trimmed.ends_with('"')) || (trimmed.starts_with('\'') && trimmed.ends_with('\''));
	if trimmed.len() >= 2 && quoted {
		trimmed[1..trimmed.len() - 1].to_string()
	} else {
		trimmed.to_string()
	}
}

pub fn parse_semver_option(raw: &RawDirective, name: &str) -> Option<SemanticVersion> {
	raw.value_of(name).and_then(|v| SemanticVersion::parse(v).ok())
}
