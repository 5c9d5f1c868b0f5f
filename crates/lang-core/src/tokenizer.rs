//! Component D: a lazy, streaming tokenizer over UTF-8 source text.
//!
//! Unlike a generated lexer, this tokenizer is a plain iterator over a
//! mutable cursor: every `next()` call re-enters `prime_next`, which tries
//! each scanner in priority order and advances the cursor only as far as
//! the winning scanner consumed. That re-entrancy is what lets a directive
//! handler or the splice-capable token list pause iteration mid-stream,
//! inspect or rewrite already-emitted tokens, and resume without the
//! tokenizer having committed to reading ahead.

use std::rc::Rc;

use lang_abstractions::{
	diagnostic::{Diagnostic, Severity, SourceLocation},
	file_id::FileId,
};

use crate::{
	compile_state::CompileState,
	faults::{Error, Warning},
	operator_lut::{Operator, OperatorLut},
	token::{Token, TokenKind},
};

const UTF8_BOM: &str = "\u{feff}";

/// Tracks byte offset plus UTF-8-aware line/column position, including
/// tab-stop rounding for `column`, plus an independent "actual" line/column
/// that tracks true physical position even when `line`/`column` have been
/// retargeted by a `[[file=...]]`/`[[line=...]]` directive.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
	pub pos: usize,
	pub line: u32,
	pub column: u32,
	pub actual_line: u32,
	pub actual_column: u32,
	pub tab_stop_width: u32,
	pub line_skip: u32,
}

impl Cursor {
	pub fn new(tab_stop_width: u32) -> Self {
		Self { pos: 0, line: 1, column: 1, actual_line: 1, actual_column: 1, tab_stop_width: tab_stop_width.max(1), line_skip: 1 }
	}

	/// Mirrors the original's per-byte `count()` cursor-advance rules for
	/// `\r \n \f \v \t \b`, specialized to whole `char`s since Rust's UTF-8
	/// string iteration already gives us one step per codepoint instead of
	/// one per byte.
	fn advance_for_char(&mut self, ch: char) {
		self.pos += ch.len_utf8();
		match ch {
			'\r' => {
				self.column = 1;
				self.actual_column = self.column;
			}
			'\n' | '\u{c}' => {
				self.line += self.line_skip;
				self.column = 1;
				self.actual_column = self.column;
				self.actual_line += 1;
			}
			'\u{b}' => {
				self.line += self.line_skip;
				self.actual_line += 1;
			}
			'\t' => {
				let width = self.tab_stop_width;
				self.column += width - ((self.column - 1) % width);
				self.actual_column = self.column;
			}
			'\u{8}' => {
				self.column = self.column.saturating_sub(1).max(1);
				self.actual_column = self.column;
			}
			_ if ch.is_control() => {}
			_ => {
				self.column += 1;
				self.actual_column = self.column;
			}
		}
	}
}

pub struct Tokenizer<'a> {
	source: &'a str,
	file: FileId,
	cursor: Cursor,
	compile_state: Rc<CompileState>,
	operators: Rc<OperatorLut>,
	bom_checked: bool,
	/// Lines/errors raised by the scanners themselves (unterminated
	/// comments/quotes, illegal bytes, continuation misuse) rather than by
	/// the directive-driven grammar above it.
	pub diagnostics: Vec<Diagnostic>,
}

/// What the continuation-mode loop consumed before deciding whether a
/// newline intervened.
struct ContinuationScan {
	contained_newline: bool,
}

impl<'a> Tokenizer<'a> {
	pub fn new(source: &'a str, file: FileId, compile_state: Rc<CompileState>, operators: Rc<OperatorLut>) -> Self {
		let tab_stop_width = compile_state.tab_stop_width;
		Self { source, file, cursor: Cursor::new(tab_stop_width), compile_state, operators, bom_checked: false, diagnostics: Vec::new() }
	}

	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	pub fn set_compile_state(&mut self, state: Rc<CompileState>) {
		self.cursor.tab_stop_width = state.tab_stop_width.max(1);
		self.compile_state = state;
	}

	fn remainder(&self) -> &'a str {
		&self.source[self.cursor.pos..]
	}

	fn location(&self) -> SourceLocation {
		SourceLocation { file: self.file, line: self.cursor.line, column: self.cursor.column }
	}

	fn report(&mut self, severity: Severity, category: &'static str, message: impl Into<String>, location: SourceLocation) {
		self.diagnostics.push(Diagnostic::new(location, severity, category, message));
	}

	fn advance(&mut self, bytes: usize) {
		let chunk = &self.remainder()[..bytes];
		for ch in chunk.chars() {
			self.cursor.advance_for_char(ch);
		}
	}

	/// Reads raw text up to (not including) the next occurrence of
	/// `closing`, advancing the cursor past both the read text and
	/// `closing` itself. Directive bodies have their own comma-separated
	/// grammar and are never re-tokenized with the general scanners above,
	/// so the parser driver calls this directly once it sees a
	/// `DirectiveOpen` token.
	pub fn read_raw_until(&mut self, closing: &str) -> Option<String> {
		let rest = self.remainder();
		let idx = rest.find(closing)?;
		let body = rest[..idx].to_string();
		self.advance(idx + closing.len());
		Some(body)
	}

	fn consume_bom_once(&mut self) {
		if !self.bom_checked {
			self.bom_checked = true;
			if self.source[self.cursor.pos..].starts_with(UTF8_BOM) {
				self.advance(UTF8_BOM.len());
			}
		}
	}

	fn consume_whitespace(&self, rest: &str) -> Option<(usize, bool)> {
		let mut len = 0;
		let mut newline = false;
		for ch in rest.chars() {
			if ch == '\n' || ch == '\r' {
				newline = true;
				len += ch.len_utf8();
				break;
			}
			if !ch.is_whitespace() {
				break;
			}
			len += ch.len_utf8();
		}
		(len > 0).then_some((len, newline))
	}

	/// `//` line comments, `/* */` flat block comments, and `/** **/`
	/// nested block comments (counting nesting depth to zero) are each
	/// distinct scanners, tried in that order.
	fn consume_comment(&self, rest: &str) -> Option<(TokenKind, usize, bool, bool)> {
		if !rest.starts_with('/') {
			return None;
		}

		if rest.starts_with("//") {
			let len = rest.find(['\n', '\r']).unwrap_or(rest.len());
			return Some((TokenKind::Comment, len, false, true));
		}

		if let Some(after_open) = rest.strip_prefix("/**") {
			let mut depth = 1usize;
			let mut idx = 0;
			let mut newline = false;
			let bytes = after_open;
			while idx < bytes.len() {
				if bytes[idx..].starts_with("/**") {
					depth += 1;
					idx += 3;
					continue;
				}
				if bytes[idx..].starts_with("**/") {
					depth -= 1;
					idx += 3;
					if depth == 0 {
						break;
					}
					continue;
				}
				let ch = bytes[idx..].chars().next().unwrap();
				if ch == '\n' {
					newline = true;
				}
				idx += ch.len_utf8();
			}
			let found_ending = depth == 0;
			return Some((TokenKind::Comment, 3 + idx, newline, found_ending));
		}

		if let Some(after_open) = rest.strip_prefix("/*") {
			let mut idx = 0;
			let mut newline = false;
			let mut found_ending = false;
			while idx < after_open.len() {
				if after_open[idx..].starts_with("*/") {
					idx += 2;
					found_ending = true;
					break;
				}
				let ch = after_open[idx..].chars().next().unwrap();
				if ch == '\n' {
					newline = true;
				}
				idx += ch.len_utf8();
			}
			return Some((TokenKind::Comment, 2 + idx, newline, found_ending));
		}

		None
	}

	fn consume_quote(&self, rest: &str) -> Option<(usize, bool)> {
		let quote = rest.chars().next()?;
		if quote != '"' && quote != '\'' {
			return None;
		}
		let mut escape = false;
		let mut len = quote.len_utf8();
		for ch in rest[len..].chars() {
			if escape {
				escape = false;
				len += ch.len_utf8();
				continue;
			}
			match ch {
				'\\' => {
					escape = true;
					len += ch.len_utf8();
				}
				c if c == quote => return Some((len + ch.len_utf8(), true)),
				'\n' | '\r' | '\u{b}' => return Some((len, false)),
				_ => len += ch.len_utf8(),
			}
		}
		Some((len, false))
	}

	/// Identifiers and keyword spellings are indistinguishable at this
	/// layer: both are emitted as `Literal`. Resolving a keyword spelling
	/// against an alias override is deferred to `Context::lookup_keyword`.
	fn consume_literal(&self, rest: &str) -> Option<usize> {
		let first = rest.chars().next()?;
		if first.is_ascii_digit() || !(first.is_alphanumeric() || first == '_') {
			return None;
		}
		Some(rest.chars().take_while(|ch| ch.is_alphanumeric() || *ch == '_').map(char::len_utf8).sum())
	}

	fn consume_numeric(&self, rest: &str) -> Option<usize> {
		let first = rest.chars().next()?;
		if !first.is_ascii_digit() {
			return None;
		}
		Some(rest.chars().take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '.').map(char::len_utf8).sum())
	}

	fn consume_operator(&self, rest: &str) -> Option<(Operator, usize)> {
		let (spelling, ops) = self.operators.lookup(rest)?;
		Some((ops[0], spelling.len()))
	}

	fn consume_known_illegal(&self, rest: &str) -> usize {
		let first = rest.chars().next();
		let Some(first) = first else { return 0 };
		rest.chars().take_while(|ch| *ch == first).map(char::len_utf8).sum()
	}

	/// After a `Continuation` (`\`) operator, swallows trailing comments and
	/// whitespace (without emitting tokens for either) until a newline is
	/// found, in which case the continuation silently joins the next
	/// physical line onto this one, or same-line content remains, in which
	/// case the caller raises `NewlineAfterContinuation`.
	fn scan_continuation(&mut self) -> ContinuationScan {
		loop {
			if let Some((_, len, newline, _)) = self.consume_comment(self.remainder()) {
				self.advance(len);
				if newline {
					return ContinuationScan { contained_newline: true };
				}
				continue;
			}
			if let Some((len, newline)) = self.consume_whitespace(self.remainder()) {
				self.advance(len);
				if newline {
					return ContinuationScan { contained_newline: true };
				}
				continue;
			}
			return ContinuationScan { contained_newline: false };
		}
	}

	/// Tries each scanner in priority order: whitespace/newline, then
	/// comments, then quotes, then literals, then numerics, then operators,
	/// falling back to a single illegal byte so the stream always makes
	/// forward progress.
	fn prime_next(&mut self) -> Option<(TokenKind, bool, usize, SourceLocation)> {
		self.consume_bom_once();

		loop {
			let rest = self.remainder();
			if rest.is_empty() {
				return None;
			}

			if rest.starts_with('\n') || rest.starts_with('\r') {
				let location = self.location();
				let len = rest.chars().next().unwrap().len_utf8();
				self.advance(len);
				return Some((TokenKind::Separator, false, len, location));
			}

			if let Some((len, newline)) = self.consume_whitespace(rest) {
				self.advance(len);
				if newline {
					// The newline was swallowed along with trailing
					// whitespace on the same scan; re-enter so it's
					// reported as its own Separator token next time.
					continue;
				}
				continue;
			}

			if let Some((kind, len, newline, found_ending)) = self.consume_comment(rest) {
				let location = self.location();
				self.advance(len);
				if !found_ending {
					self.report(Severity::Error, Error::MissingEndOfComments.slug(), "comment is missing its closing delimiter", location);
				}
				let _ = newline;
				return Some((kind, false, len, location));
			}

			if let Some((len, found_ending)) = self.consume_quote(rest) {
				let location = self.location();
				self.advance(len);
				if !found_ending {
					self.report(Severity::Error, Error::LiteralContainsInvalidSequence.slug(), "quote is missing its closing delimiter", location);
				}
				return Some((TokenKind::Quote, false, len, location));
			}

			if let Some(len) = self.consume_literal(rest) {
				let location = self.location();
				self.advance(len);
				return Some((TokenKind::Literal, false, len, location));
			}

			if let Some(len) = self.consume_numeric(rest) {
				let location = self.location();
				self.advance(len);
				return Some((TokenKind::Number, false, len, location));
			}

			if let Some((op, len)) = self.consume_operator(rest) {
				if op == Operator::Continuation {
					let location = self.location();
					self.advance(len);
					let scan = self.scan_continuation();
					if !scan.contained_newline {
						self.report(Severity::Warning, Warning::NewlineAfterContinuation.slug(), "content follows a line continuation on the same line", location);
					}
					continue;
				}

				let location = self.location();
				self.advance(len);
				if op == Operator::StatementSeparator {
					return Some((TokenKind::Separator, true, len, location));
				}
				return Some((TokenKind::Operator(op), false, len, location));
			}

			let location = self.location();
			let len = self.consume_known_illegal(rest);
			self.advance(len);
			self.report(Severity::Error, Error::LiteralContainsInvalidSequence.slug(), "unrecognized input", location);
			return Some((TokenKind::Literal, false, len, location));
		}
	}
}

impl<'a> Iterator for Tokenizer<'a> {
	type Item = Rc<Token>;

	fn next(&mut self) -> Option<Self::Item> {
		let start = self.cursor.pos;
		let (kind, forced_separator, _len, location) = self.prime_next()?;
		let text = self.source[start..self.cursor.pos].to_string();
		Some(Rc::new(Token::new(kind, text, location, Rc::clone(&self.compile_state)).with_forced_separator(forced_separator)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use lang_abstractions::file_id::FileTable;

	fn lex(source: &str) -> Vec<Rc<Token>> {
		let files = FileTable::new();
		let file = files.intern(std::path::Path::new("a.zx"));
		let operators = Rc::new(OperatorLut::new());
		Tokenizer::new(source, file, CompileState::new(), operators).collect()
	}

	#[test]
	fn whitespace_is_silent_but_newlines_emit_a_separator() {
		let tokens = lex("  // comment\nfoo");
		assert_eq!(tokens.len(), 3);
		assert_eq!(tokens[0].kind, TokenKind::Comment);
		assert_eq!(tokens[1].kind, TokenKind::Separator);
		assert!(!tokens[1].forced_separator);
		assert_eq!(tokens[2].text, "foo");
	}

	#[test]
	fn longest_operator_match_wins_over_shorter_prefixes() {
		let tokens = lex("C--E&&G+++++J");
		let spellings: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
		assert!(spellings.contains(&"--"));
		assert!(spellings.contains(&"&&"));
		assert!(spellings.contains(&"+++"));
	}

	#[test]
	fn unterminated_quote_is_still_a_single_quote_token_with_a_diagnostic() {
		let files = FileTable::new();
		let file = files.intern(std::path::Path::new("a.zx"));
		let operators = Rc::new(OperatorLut::new());
		let mut tokenizer = Tokenizer::new("\"abc", file, CompileState::new(), operators);
		let tokens: Vec<_> = tokenizer.by_ref().collect();
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Quote);
		assert!(tokenizer.diagnostics.iter().any(|d| d.category == Error::LiteralContainsInvalidSequence.slug()));
	}

	#[test]
	fn tab_advances_column_to_the_next_stop() {
		let files = FileTable::new();
		let file = files.intern(std::path::Path::new("a.zx"));
		let operators = Rc::new(OperatorLut::new());
		let mut state = CompileState::default();
		state.tab_stop_width = 4;
		let mut tokenizer = Tokenizer::new("\tfoo", file, Rc::new(state), operators);
		let token = tokenizer.next().unwrap();
		assert_eq!(token.location.column, 5);
	}

	#[test]
	fn keyword_spellings_are_emitted_as_literal_not_keyword() {
		let tokens = lex("if");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Literal);
	}

	#[test]
	fn semicolon_is_a_forced_separator() {
		let tokens = lex(";");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Separator);
		assert!(tokens[0].forced_separator);
	}

	#[test]
	fn nested_block_comment_closes_only_at_matching_depth() {
		let tokens = lex("/** /* inner */ **/ foo");
		assert_eq!(tokens.len(), 2);
		assert_eq!(tokens[0].kind, TokenKind::Comment);
		assert_eq!(tokens[1].text, "foo");
	}

	#[test]
	fn continuation_swallows_the_newline_and_emits_no_token() {
		let tokens = lex("a\\\nb");
		let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
		assert_eq!(texts, vec!["a", "b"]);
	}

	#[test]
	fn continuation_followed_by_same_line_content_warns() {
		let files = FileTable::new();
		let file = files.intern(std::path::Path::new("a.zx"));
		let operators = Rc::new(OperatorLut::new());
		let mut tokenizer = Tokenizer::new("a\\b", file, CompileState::new(), operators);
		let tokens: Vec<_> = tokenizer.by_ref().collect();
		let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
		assert_eq!(texts, vec!["a", "b"]);
		assert!(tokenizer.diagnostics.iter().any(|d| d.category == Warning::NewlineAfterContinuation.slug()));
	}

	#[test]
	fn utf8_bom_is_consumed_before_the_first_token() {
		let tokens = lex("\u{feff}foo");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].text, "foo");
		assert_eq!(tokens[0].location.column, 1);
	}
}
