use crate::file_id::FileId;

/// Mirrors the four severities the original diagnostic tables distinguish:
/// plain information, a hint, a warning, and a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	Info,
	Hint,
	Warning,
	Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
	pub file: FileId,
	pub line: u32,
	pub column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub location: SourceLocation,
	pub severity: Severity,
	/// The hyphenated category name, e.g. "source-not-found" or "bad-style".
	pub category: &'static str,
	pub message: String,
}

impl Diagnostic {
	pub fn new(location: SourceLocation, severity: Severity, category: &'static str, message: impl Into<String>) -> Self {
		Self { location, severity, category, message: message.into() }
	}
}
