//! Component G: the directive-driven parser driver. Walks a token stream
//! looking for `[[ ... ]]` forms and dispatches each recognized directive
//! name to a handler that mutates the active `Context`'s compile state.

use std::{
	path::{Path, PathBuf},
	rc::Rc,
};

use lang_abstractions::{
	diagnostic::{Diagnostic, Severity, SourceLocation},
	file_id::{FileId, FileTable},
	host_fs::HostFs,
};

use crate::{
	compile_state::CompileState,
	context::Context,
	directive::{parse_raw_directive, parse_semver_option, FaultOption, RawDirective, SourceAssetRequired},
	faults::{Error, Informational, Panic, Warning},
	operator_lut::{Operator, OperatorLut},
	source_manager::{self, IncludeSet},
	token::TokenKind,
	token_list::TokenList,
	tokenizer::Tokenizer,
};

/// The eleven directive names the driver understands natively, matching
/// spec.md §4.7's external directive surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
	Asset,
	Source,
	TabStop,
	File,
	Line,
	Panic,
	Warning,
	Error,
	Deprecate,
	Export,
	Declare,
}

impl DirectiveKind {
	fn from_name(name: &str) -> Option<Self> {
		match name {
			"asset" => Some(Self::Asset),
			"source" => Some(Self::Source),
			"tab-stop" => Some(Self::TabStop),
			"file" => Some(Self::File),
			"line" => Some(Self::Line),
			"panic" => Some(Self::Panic),
			"warning" => Some(Self::Warning),
			"error" => Some(Self::Error),
			"deprecate" => Some(Self::Deprecate),
			"export" => Some(Self::Export),
			"variables" | "types" | "functions" => Some(Self::Declare),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclareTarget {
	Variables,
	Types,
	Functions,
}

/// The effect a single directive had, for callers that want to react (the
/// source manager needs to know about `asset`/`source`; the CLI harness
/// just wants the accumulated diagnostics).
#[derive(Debug, Clone)]
pub enum DirectiveEffect {
	RequestSource { path: String, required: crate::directive::SourceAssetRequired },
	RequestAsset { path: String, rename: Option<String> },
	None,
}

pub struct ParserDriver {
	pub context: Rc<Context>,
	pub diagnostics: Vec<Diagnostic>,
}

impl ParserDriver {
	pub fn new(context: Rc<Context>) -> Self {
		Self { context, diagnostics: Vec::new() }
	}

	fn report(&mut self, location: SourceLocation, severity: Severity, category: &'static str, message: impl Into<String>) {
		self.diagnostics.push(Diagnostic::new(location, severity, category, message));
	}

	/// Raises a warning the driver notices directly (as opposed to one
	/// relayed through `handle_fault`'s option loop), consulting the active
	/// `CompileState`'s warning table first: disabled warnings are dropped,
	/// and a category force-promoted to error via `[[warning=...,error]]`
	/// is raised at `Severity::Error` instead.
	fn report_warning(&mut self, location: SourceLocation, warning: Warning, message: impl Into<String>) {
		let index = warning as usize;
		let table = &self.context.state().warnings;
		if !table.is_enabled(index) {
			return;
		}
		let severity = if table.is_error(index) { Severity::Error } else { Severity::Warning };
		self.report(location, severity, warning.slug(), message);
	}

	fn current_state(&self) -> Rc<CompileState> {
		self.context.state()
	}

	fn replace_state(&self, mutate: impl FnOnce(&mut CompileState)) {
		let mut next = (*self.current_state()).clone();
		mutate(&mut next);
		self.context.set_state(Rc::new(next));
	}

	/// Parses and dispatches the text found between a `[[` and its matching
	/// `]]`, at `location`. Returns the directive's externally-visible
	/// effect, if any, so a caller like the source manager can act on it.
	pub fn dispatch(&mut self, body: &str, location: SourceLocation) -> DirectiveEffect {
		let Some(raw) = parse_raw_directive(body) else {
			self.report(location, Severity::Error, Error::MissingArgument.slug(), "directive body is empty");
			return DirectiveEffect::None;
		};

		if let Some(ext) = raw.name.strip_prefix("x-") {
			self.report(location, Severity::Info, Informational::ToDo.slug(), format!("extension directive 'x-{ext}' noted"));
			return DirectiveEffect::None;
		}

		match DirectiveKind::from_name(&raw.name) {
			Some(kind) => self.dispatch_known(kind, &raw, location),
			None => {
				self.report(
					location,
					Severity::Warning,
					Warning::UnknownDirective.slug(),
					format!("unknown directive '{}'", raw.name),
				);
				DirectiveEffect::None
			}
		}
	}

	fn dispatch_known(&mut self, kind: DirectiveKind, raw: &RawDirective, location: SourceLocation) -> DirectiveEffect {
		match kind {
			DirectiveKind::TabStop => {
				self.handle_tab_stop(raw, location);
				DirectiveEffect::None
			}
			DirectiveKind::Export => {
				self.handle_export(raw);
				DirectiveEffect::None
			}
			DirectiveKind::Deprecate => {
				self.handle_deprecate(raw, location);
				DirectiveEffect::None
			}
			DirectiveKind::Panic => {
				self.handle_fault::<11>(raw, location, |state| &mut state.panics, |s| Panic::from_slug(s).map(|e| e as usize))
			}
			DirectiveKind::Warning => {
				self.handle_fault::<39>(raw, location, |state| &mut state.warnings, |s| Warning::from_slug(s).map(|e| e as usize))
			}
			DirectiveKind::Error => {
				self.handle_error(raw, location);
				DirectiveEffect::None
			}
			DirectiveKind::Source => self.handle_source(raw, location),
			DirectiveKind::Asset => self.handle_asset(raw, location),
			DirectiveKind::File | DirectiveKind::Line => {
				// File/line overrides affect the tokenizer's source-location
				// bookkeeping, owned by the caller driving the token stream;
				// the driver only validates the arguments are well-formed.
				if raw.primary_argument().and_then(|v| v.parse::<u32>().ok()).is_none() && kind == DirectiveKind::Line {
					self.report(location, Severity::Error, Error::LineDirectiveWithoutFile.slug(), "line directive requires a numeric line argument");
				}
				DirectiveEffect::None
			}
			DirectiveKind::Declare => {
				self.handle_declare(raw);
				DirectiveEffect::None
			}
		}
	}

	fn handle_tab_stop(&mut self, raw: &RawDirective, location: SourceLocation) {
		let width = raw.primary_argument().and_then(|v| v.parse::<u32>().ok());
		match width {
			Some(width) if width > 0 => self.replace_state(|state| state.tab_stop_width = width),
			_ => self.report(location, Severity::Error, Error::MissingArgument.slug(), "tab-stop requires a positive integer width"),
		}
	}

	fn handle_export(&mut self, raw: &RawDirective) {
		let visible = raw.primary_argument().and_then(crate::directive::YesNo::parse).map(|v| v.as_bool()).unwrap_or(true);
		self.replace_state(|state| state.export.export = visible);
	}

	fn handle_deprecate(&mut self, raw: &RawDirective, location: SourceLocation) {
		use crate::compile_state::{Deprecate, DeprecateContext};

		let context = match raw.value_of("context") {
			Some("import") => DeprecateContext::Import,
			Some("local") => DeprecateContext::Local,
			Some("all") | None => DeprecateContext::All,
			Some(_) => {
				self.report(location, Severity::Error, Error::DeprecateDirective.slug(), "unrecognized deprecate context");
				DeprecateContext::All
			}
		};
		let force_error = raw.has_flag("force-error");
		let min = parse_semver_option(raw, "min");
		let max = parse_semver_option(raw, "max");
		self.replace_state(|state| state.deprecate = Some(Deprecate { context, force_error, min, max }));
	}

	/// `[[panic|warning=ACTION, category, category, ...]]`: `ACTION` is the
	/// directive's own value, the trailing bare options name which
	/// categories it applies to (every category when none are named).
	/// `push`/`pop` checkpoint the whole table as a unit and ignore any
	/// category list, matching `FaultTable::push`/`pop`'s own shape.
	fn handle_fault<const N: usize>(
		&mut self,
		raw: &RawDirective,
		location: SourceLocation,
		table_of: impl Fn(&mut CompileState) -> &mut crate::faults::FaultTable<N>,
		index_of: impl Fn(&str) -> Option<usize>,
	) -> DirectiveEffect {
		let Some(action) = raw.primary_value.as_deref().and_then(FaultOption::parse) else {
			self.report(location, Severity::Error, Error::MissingArgument.slug(), "fault directive requires a recognized action");
			return DirectiveEffect::None;
		};

		let mut next = (*self.current_state()).clone();
		let mut diagnostics = Vec::new();

		match action {
			FaultOption::Push => table_of(&mut next).push(),
			FaultOption::Pop => {
				if !table_of(&mut next).pop() {
					diagnostics.push((Severity::Warning, Warning::DirectiveNotUnderstood.slug(), "pop with no matching push".to_string()));
				}
			}
			_ => {
				let categories: Vec<usize> = if raw.options.is_empty() {
					(0..N).collect()
				} else {
					raw.options
						.iter()
						.filter_map(|option| match index_of(&option.name) {
							Some(index) => Some(index),
							None => {
								diagnostics.push((Severity::Warning, Warning::UnknownDirectiveArgument.slug(), format!("unrecognized fault category '{}'", option.name)));
								None
							}
						})
						.collect()
				};

				for index in categories {
					let table = table_of(&mut next);
					let applied = match action {
						FaultOption::Yes | FaultOption::Always => table.enable(index),
						FaultOption::No | FaultOption::Never => table.disable(index),
						FaultOption::Error => table.enable_force_error(index),
						FaultOption::Default => table.reset_to_default(index),
						FaultOption::Lock => table.lock(index, crate::faults::Puid::new()),
						// Unlocking via a text directive has no locker identity to
						// check against, so it is accepted as a no-op.
						FaultOption::Unlock => true,
						FaultOption::Push | FaultOption::Pop => unreachable!("handled above"),
					};
					if !applied {
						diagnostics.push((Severity::Warning, Warning::DirectiveNotUnderstood.slug(), format!("fault category {index} is locked and could not be changed")));
					}
				}
			}
		}

		self.context.set_state(Rc::new(next));
		for (severity, category, message) in diagnostics {
			self.report(location, severity, category, message);
		}
		DirectiveEffect::None
	}

	/// `[[error=...]]` is not a fault-registry toggle like `panic`/`warning`:
	/// it unconditionally raises a diagnostic right where it appears. A
	/// category name raises that error; anything else is taken as a literal
	/// message under the generic `error-directive` category.
	fn handle_error(&mut self, raw: &RawDirective, location: SourceLocation) {
		match raw.primary_argument() {
			Some(arg) => match Error::from_slug(arg) {
				Some(err) => self.report(location, Severity::Error, err.slug(), format!("'{arg}' raised by error directive")),
				None => self.report(location, Severity::Error, Error::ErrorDirective.slug(), arg.to_string()),
			},
			None => self.report(location, Severity::Error, Error::ErrorDirective.slug(), "error directive raised"),
		}
	}

	fn handle_source(&mut self, raw: &RawDirective, location: SourceLocation) -> DirectiveEffect {
		let Some(path) = raw.primary_argument().map(str::to_string) else {
			self.report(location, Severity::Error, Error::MissingArgument.slug(), "source directive requires a path");
			return DirectiveEffect::None;
		};
		let required = raw.value_of("required").and_then(crate::directive::SourceAssetRequired::parse).unwrap_or(crate::directive::SourceAssetRequired::Yes);
		DirectiveEffect::RequestSource { path, required }
	}

	fn handle_asset(&mut self, raw: &RawDirective, location: SourceLocation) -> DirectiveEffect {
		let Some(path) = raw.primary_argument().map(str::to_string) else {
			self.report(location, Severity::Error, Error::MissingArgument.slug(), "asset directive requires a path");
			return DirectiveEffect::None;
		};
		let rename = raw.value_of("rename").map(str::to_string);
		DirectiveEffect::RequestAsset { path, rename }
	}

	/// The §4.7 main loop: tokenizes `source` lazily, popping leading
	/// `Separator` tokens (warning on a redundant forced `;` once one
	/// separator has already closed the statement, and resetting any
	/// single-line-scoped state at the first separator seen), recognizing
	/// a `[[ ... ]]` directive wherever one opens and dispatching it, and
	/// otherwise handing every other token to `output` — the out-of-scope
	/// statement grammar this driver doesn't implement. A `source`/`asset`
	/// directive's effect is resolved immediately through `source_manager`:
	/// an included file's own tokens (recursively run through this same
	/// loop) are spliced into `output` at the point the directive appeared.
	pub fn run(
		&mut self,
		source: &str,
		file: FileId,
		base_dir: &Path,
		files: &FileTable,
		fs: &dyn HostFs,
		operators: &Rc<OperatorLut>,
		includes: &mut IncludeSet,
	) -> TokenList {
		let mut forced_okay = true;
		self.run_inner(source, file, base_dir, files, fs, operators, includes, &mut forced_okay)
	}

	/// The recursive half of `run`: `forced_okay` is threaded through (rather
	/// than reset per call) so a `[[source=...]]` splice carries the
	/// redundant-separator state across the file boundary — an included
	/// file's trailing forced separator makes the including file's next one
	/// redundant too.
	fn run_inner(
		&mut self,
		source: &str,
		file: FileId,
		base_dir: &Path,
		files: &FileTable,
		fs: &dyn HostFs,
		operators: &Rc<OperatorLut>,
		includes: &mut IncludeSet,
		forced_okay: &mut bool,
	) -> TokenList {
		let mut tokenizer = Tokenizer::new(source, file, self.context.state(), Rc::clone(operators));
		let mut output = TokenList::new();

		while let Some(token) = tokenizer.next() {
			tokenizer.set_compile_state(self.context.state());

			match token.kind {
				TokenKind::Separator => {
					if !*forced_okay && token.forced_separator {
						self.report_warning(token.location, Warning::StatementSeparatorOperatorRedundant, "this statement separator is redundant");
					}
					*forced_okay = false;
					self.context.set_single_line_state(None);
				}
				TokenKind::Operator(Operator::DirectiveOpen) => {
					let Some(body) = tokenizer.read_raw_until("]]") else {
						self.report(token.location, Severity::Error, Error::MissingArgument.slug(), "unterminated directive, missing ']]'");
						continue;
					};
					let effect = self.dispatch(&body, token.location);
					self.apply_effect(effect, token.location, &mut output, base_dir, files, fs, operators, includes, forced_okay);
				}
				_ => {
					*forced_okay = true;
					output.push_back(token);
				}
			}
		}

		self.diagnostics.extend(tokenizer.diagnostics.drain(..));
		output
	}

	#[allow(clippy::too_many_arguments)]
	fn apply_effect(
		&mut self,
		effect: DirectiveEffect,
		location: SourceLocation,
		output: &mut TokenList,
		base_dir: &Path,
		files: &FileTable,
		fs: &dyn HostFs,
		operators: &Rc<OperatorLut>,
		includes: &mut IncludeSet,
		forced_okay: &mut bool,
	) {
		match effect {
			DirectiveEffect::RequestSource { path, required } => {
				self.splice_source(&path, required, location, output, base_dir, files, fs, operators, includes, forced_okay);
			}
			DirectiveEffect::RequestAsset { path, rename } => {
				self.copy_assets(&path, rename.as_deref(), location, base_dir, fs);
			}
			DirectiveEffect::None => {}
		}
	}

	#[allow(clippy::too_many_arguments)]
	fn splice_source(
		&mut self,
		path: &str,
		required: SourceAssetRequired,
		location: SourceLocation,
		output: &mut TokenList,
		base_dir: &Path,
		files: &FileTable,
		fs: &dyn HostFs,
		operators: &Rc<OperatorLut>,
		includes: &mut IncludeSet,
		forced_okay: &mut bool,
	) {
		let Some(found) = source_manager::locate_file(fs, base_dir, path) else {
			match required {
				SourceAssetRequired::Yes => self.report(location, Severity::Error, Error::SourceNotFound.slug(), format!("'{path}' was not found")),
				SourceAssetRequired::Warn => self.report_warning(location, Warning::SourceNotFound, format!("'{path}' was not found")),
				SourceAssetRequired::No => {}
			}
			return;
		};

		let canonical = fs.canonicalize(&found).unwrap_or_else(|_| found.clone());
		if !includes.mark_seen(&canonical) {
			return;
		}

		let text = match fs.read_to_string(&found) {
			Ok(text) => text,
			Err(err) => {
				self.report(location, Severity::Error, Error::SourceNotFound.slug(), format!("'{path}' could not be read: {err}"));
				return;
			}
		};

		let included_file = files.intern(&found);
		let included_base = found.parent().map(Path::to_path_buf).unwrap_or_else(|| base_dir.to_path_buf());
		let included = self.run_inner(&text, included_file, &included_base, files, fs, operators, includes, forced_okay);
		for token in included.iter() {
			output.push_back(Rc::clone(token));
		}
	}

	fn copy_assets(&mut self, pattern: &str, rename: Option<&str>, location: SourceLocation, base_dir: &Path, fs: &dyn HostFs) {
		let matches = source_manager::locate_wild_card_files(fs, base_dir, pattern);
		if matches.is_empty() {
			self.report_warning(location, Warning::AssetNotFound, format!("no asset matched '{pattern}'"));
			return;
		}

		for found in matches {
			let destination = match rename {
				Some(template) => apply_rename_template(template, &found.captures),
				None => found.path.clone(),
			};
			if let Err(err) = source_manager::copy_asset(fs, &base_dir.join(&found.path), &base_dir.join(&destination)) {
				self.report(location, Severity::Error, Error::AssetNotFound.slug(), format!("{err}"));
			}
		}
	}

	fn handle_declare(&mut self, raw: &RawDirective) {
		let target = match raw.name.as_str() {
			"variables" => DeclareTarget::Variables,
			"types" => DeclareTarget::Types,
			_ => DeclareTarget::Functions,
		};
		let varies = raw.value_of("varies").and_then(crate::directive::YesNo::parse).map(|v| v.as_bool());
		let mutable = raw.value_of("mutable").and_then(crate::directive::YesNo::parse).map(|v| v.as_bool());
		let constant = raw.value_of("constant").and_then(crate::directive::YesNo::parse).map(|v| v.as_bool());

		self.replace_state(|state| match target {
			DeclareTarget::Variables => {
				if let Some(v) = varies {
					state.variable_default.varies = v;
				}
				if let Some(m) = mutable {
					state.variable_default.mutable = m;
				}
			}
			DeclareTarget::Types => {
				if let Some(m) = mutable {
					state.type_default.mutable = m;
				}
				if let Some(c) = constant {
					state.type_default.constant = c;
				}
			}
			DeclareTarget::Functions => {
				if let Some(c) = constant {
					state.function_default.constant = c;
				}
			}
		});
	}
}

/// Substitutes a wildcard asset match's `*`/`?` captures, in order, for the
/// corresponding placeholder characters in a `rename=` template (e.g.
/// `"bee?op/*_fruit.txt"` matching into `"out/?op/*_food.txt"`).
fn apply_rename_template(template: &str, captures: &[String]) -> PathBuf {
	let mut out = String::new();
	let mut next = captures.iter();
	for ch in template.chars() {
		match ch {
			'*' | '?' => out.push_str(next.next().map(String::as_str).unwrap_or("")),
			c => out.push(c),
		}
	}
	PathBuf::from(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::context::ContextKind;
	use lang_abstractions::file_id::FileTable;

	fn location() -> SourceLocation {
		let files = FileTable::new();
		let file = files.intern(std::path::Path::new("a.zx"));
		SourceLocation { file, line: 1, column: 1 }
	}

	#[test]
	fn tab_stop_directive_updates_state() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let mut driver = ParserDriver::new(root);
		driver.dispatch("tab-stop=4", location());
		assert_eq!(driver.context.state().tab_stop_width, 4);
		assert!(driver.diagnostics.is_empty());
	}

	#[test]
	fn unknown_directive_emits_a_warning() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let mut driver = ParserDriver::new(root);
		driver.dispatch("frobnicate", location());
		assert_eq!(driver.diagnostics.len(), 1);
		assert_eq!(driver.diagnostics[0].category, "unknown-directive");
	}

	#[test]
	fn source_directive_reports_its_effect_for_the_caller() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let mut driver = ParserDriver::new(root);
		let effect = driver.dispatch("source, main.zx, required=yes", location());
		match effect {
			DirectiveEffect::RequestSource { path, required } => {
				assert_eq!(path, "main.zx");
				assert_eq!(required, crate::directive::SourceAssetRequired::Yes);
			}
			other => panic!("unexpected effect: {other:?}"),
		}
	}

	#[test]
	fn warning_directive_can_force_promote_a_category_to_error() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let mut driver = ParserDriver::new(root);
		driver.dispatch("warning=error,bad-style", location());
		assert!(driver.context.state().warnings.is_error(Warning::BadStyle as usize));
	}

	#[test]
	fn x_extension_directives_are_informational_not_errors() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let mut driver = ParserDriver::new(root);
		driver.dispatch("x-vendor-hint=foo", location());
		assert_eq!(driver.diagnostics[0].severity, Severity::Info);
	}

	#[test]
	fn error_directive_with_a_known_slug_raises_that_category() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let mut driver = ParserDriver::new(root);
		driver.dispatch("error=source-not-found", location());
		assert_eq!(driver.diagnostics.len(), 1);
		assert_eq!(driver.diagnostics[0].severity, Severity::Error);
		assert_eq!(driver.diagnostics[0].category, Error::SourceNotFound.slug());
	}

	#[test]
	fn error_directive_with_an_unrecognized_argument_raises_a_literal_message() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let mut driver = ParserDriver::new(root);
		driver.dispatch("error=something went wrong", location());
		assert_eq!(driver.diagnostics.len(), 1);
		assert_eq!(driver.diagnostics[0].category, Error::ErrorDirective.slug());
		assert_eq!(driver.diagnostics[0].message, "something went wrong");
	}

	fn run_fixture() -> (ParserDriver, FileTable, lang_abstractions::host_fs::NativeFs, Rc<OperatorLut>, IncludeSet) {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let driver = ParserDriver::new(root);
		(driver, FileTable::new(), lang_abstractions::host_fs::NativeFs, Rc::new(OperatorLut::new()), IncludeSet::new())
	}

	#[test]
	fn run_drops_separators_and_warns_on_a_redundant_forced_one() {
		let (mut driver, files, fs, operators, mut includes) = run_fixture();
		let file = files.intern(Path::new("a.zx"));
		let output = driver.run("a;;\nb", file, Path::new("."), &files, &fs, &operators, &mut includes);

		assert!(output.iter().all(|t| !matches!(t.kind, TokenKind::Separator)));
		assert_eq!(driver.diagnostics.len(), 1);
		assert_eq!(driver.diagnostics[0].category, Warning::StatementSeparatorOperatorRedundant.slug());
	}

	#[test]
	fn run_reads_a_directive_body_with_hyphenated_identifiers_without_splitting_it() {
		let (mut driver, files, fs, operators, mut includes) = run_fixture();
		let file = files.intern(Path::new("a.zx"));
		let output = driver.run("[[tab-stop=2]]", file, Path::new("."), &files, &fs, &operators, &mut includes);

		assert!(driver.diagnostics.is_empty());
		assert_eq!(driver.context.state().tab_stop_width, 2);
		assert!(output.is_empty());
	}

	#[test]
	fn run_splices_an_included_file_s_tokens_at_the_directive_point() {
		let dir = std::env::temp_dir().join(format!("lang-core-driver-test-{}", std::process::id()));
		std::fs::create_dir_all(&dir).unwrap();
		std::fs::write(dir.join("other.zx"), "included").unwrap();

		let (mut driver, files, fs, operators, mut includes) = run_fixture();
		let file = files.intern(&dir.join("main.zx"));
		let output = driver.run("before [[source=other.zx]] after", file, &dir, &files, &fs, &operators, &mut includes);

		let texts: Vec<_> = output.iter().map(|t| t.text.clone()).collect();
		assert_eq!(texts, vec!["before", "included", "after"]);

		std::fs::remove_dir_all(&dir).ok();
	}
}
