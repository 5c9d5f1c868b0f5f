use std::rc::Rc;

use lang_abstractions::{
	diagnostic::{Severity, SourceLocation},
	file_id::FileTable,
	host_fs::NativeFs,
};
use lang_core::{
	compile_state::CompileState,
	context::{Context, ContextKind},
	driver::{DirectiveEffect, ParserDriver},
	faults::{Error, Puid, Warning},
	operator_lut::{Operator, OperatorLut},
	source_manager::IncludeSet,
	token::{AliasTarget, TokenKind},
	tokenizer::Tokenizer,
	Keyword, Token,
};

fn file() -> lang_abstractions::FileId {
	let files = FileTable::new();
	files.intern(std::path::Path::new("scenario.zx"))
}

fn loc() -> SourceLocation {
	SourceLocation { file: file(), line: 1, column: 1 }
}

/// S1: `"A 1.1 C--E&&G+++++J"` tokenizes to the longest match at each
/// position. Pre/post disambiguation of a shared spelling (`--`, `++`) is
/// left to the downstream grammar, so either member of the conflict set is
/// accepted here.
#[test]
fn scenario_1_longest_match_operator_tokenization() {
	let operators = Rc::new(OperatorLut::new());
	let tokens: Vec<_> = Tokenizer::new("A 1.1 C--E&&G+++++J", file(), CompileState::new(), operators).collect();

	let shapes: Vec<_> = tokens
		.iter()
		.map(|t| match t.kind {
			TokenKind::Literal => format!("Literal({})", t.text),
			TokenKind::Number => format!("Number({})", t.text),
			TokenKind::Operator(op) => format!("Operator({op:?})"),
			other => format!("{other:?}"),
		})
		.collect();

	assert_eq!(shapes[0], "Literal(A)");
	assert_eq!(shapes[1], "Number(1.1)");
	assert_eq!(shapes[2], "Literal(C)");
	assert!(matches!(tokens[3].kind, TokenKind::Operator(Operator::MinusMinusPostUnary) | TokenKind::Operator(Operator::MinusMinusPreUnary)));
	assert_eq!(shapes[4], "Literal(E)");
	assert_eq!(shapes[5], "Operator(And)");
	assert_eq!(shapes[6], "Literal(G)");
	assert_eq!(shapes[7], "Operator(Constructor)");
	assert!(matches!(tokens[8].kind, TokenKind::Operator(Operator::PlusPlusPostUnary) | TokenKind::Operator(Operator::PlusPlusPreUnary)));
	assert_eq!(shapes[9], "Literal(J)");
}

/// S2: `[[warning=never,statement-separator-operator-redundant]]` silences
/// the redundancy warning for both `;`; `[[warning=error,...]]` instead
/// promotes it to `Severity::Error` for both.
#[test]
fn scenario_2_warning_directive_can_silence_or_promote_a_category() {
	let run = |body: &str| {
		let root = Context::new_root(ContextKind::Source, CompileState::new());
		let mut driver = ParserDriver::new(root);
		let files = FileTable::new();
		let file = files.intern(std::path::Path::new("s2.zx"));
		let mut includes = IncludeSet::new();
		let source = format!("[[{body}]]\n\t;\n\t;\n");
		driver.run(&source, file, std::path::Path::new("."), &files, &NativeFs, &Rc::new(OperatorLut::new()), &mut includes);
		driver.diagnostics
	};

	assert!(run("warning=never,statement-separator-operator-redundant").is_empty());

	let promoted = run("warning=error,statement-separator-operator-redundant");
	assert_eq!(promoted.len(), 2);
	for diagnostic in &promoted {
		assert_eq!(diagnostic.severity, Severity::Error);
		assert_eq!(diagnostic.category, Warning::StatementSeparatorOperatorRedundant.slug());
	}
}

/// S3: a continuation (`\`) not followed by a newline still warns
/// (`NewlineAfterContinuation`), and the forced-separator redundancy state
/// it leaves behind crosses a `[[source=...]]` splice boundary: the
/// including file's next `;` is flagged redundant too.
#[test]
fn scenario_3_continuation_and_redundancy_state_cross_a_splice_boundary() {
	let dir = std::env::temp_dir().join(format!("lang-core-scenario3-{}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap();
	std::fs::write(dir.join("b.zx"), "\\;\n").unwrap();

	let root = Context::new_root(ContextKind::Source, CompileState::new());
	let mut driver = ParserDriver::new(root);
	let files = FileTable::new();
	let file = files.intern(&dir.join("a.zx"));
	let mut includes = IncludeSet::new();

	driver.run("[[source='b.zx']];\n", file, &dir, &files, &NativeFs, &Rc::new(OperatorLut::new()), &mut includes);

	assert_eq!(driver.diagnostics.len(), 2);
	assert_eq!(driver.diagnostics[0].category, Warning::NewlineAfterContinuation.slug());
	assert_eq!(driver.diagnostics[1].category, Warning::StatementSeparatorOperatorRedundant.slug());

	std::fs::remove_dir_all(&dir).ok();
}

/// S4: `[[asset='bee?op/*_fruit.txt', rename='out/?op/*_food.txt']]`
/// resolves every matching source file and copies it to its renamed
/// destination, substituting `?`/`*` captures in order.
#[test]
fn scenario_4_asset_directive_copies_every_wildcard_match_renamed() {
	let dir = std::env::temp_dir().join(format!("lang-core-scenario4-{}", std::process::id()));
	std::fs::create_dir_all(dir.join("beebop")).unwrap();
	std::fs::create_dir_all(dir.join("beecop")).unwrap();
	std::fs::write(dir.join("beebop/apple_fruit.txt"), "apple").unwrap();
	std::fs::write(dir.join("beecop/banana_fruit.txt"), "banana").unwrap();

	let root = Context::new_root(ContextKind::Source, CompileState::new());
	let mut driver = ParserDriver::new(root);
	let files = FileTable::new();
	let file = files.intern(&dir.join("a.zx"));
	let mut includes = IncludeSet::new();

	driver.run("[[asset='bee?op/*_fruit.txt', rename='out/?op/*_food.txt']]", file, &dir, &files, &NativeFs, &Rc::new(OperatorLut::new()), &mut includes);

	assert!(driver.diagnostics.is_empty());
	assert_eq!(std::fs::read_to_string(dir.join("out/bop/apple_food.txt")).unwrap(), "apple");
	assert_eq!(std::fs::read_to_string(dir.join("out/cop/banana_food.txt")).unwrap(), "banana");

	std::fs::remove_dir_all(&dir).ok();
}

/// S5: `[[deprecate=always,context=local,min='1.2.3',error]]` installs a
/// deprecate window that every later token's `CompileState` carries.
#[test]
fn scenario_5_deprecate_directive_is_visible_on_later_tokens() {
	let root = Context::new_root(ContextKind::Source, CompileState::new());
	let mut driver = ParserDriver::new(root);
	let files = FileTable::new();
	let file = files.intern(std::path::Path::new("s5.zx"));
	let mut includes = IncludeSet::new();

	driver.run("[[deprecate=always,context=local,min='1.2.3',error]]\n\t;\n", file, std::path::Path::new("."), &files, &NativeFs, &Rc::new(OperatorLut::new()), &mut includes);

	let deprecate = driver.context.state().deprecate.clone().expect("deprecate window installed");
	assert_eq!(deprecate.context, lang_core::compile_state::DeprecateContext::Local);
	assert!(deprecate.force_error);
	assert_eq!(deprecate.min.unwrap().to_string(), "1.2.3");
	assert!(deprecate.max.is_none());
}

/// S6: a `[[warning=push]]` / `[[warning=pop]]` pair brackets a
/// `[[warning=never,X]]` override, restoring the warning after the pop.
#[test]
fn scenario_6_fault_push_and_pop_restores_the_overridden_category() {
	let root = Context::new_root(ContextKind::Source, CompileState::new());
	let mut driver = ParserDriver::new(root);
	let files = FileTable::new();
	let file = files.intern(std::path::Path::new("s6.zx"));
	let mut includes = IncludeSet::new();

	let source = "[[warning=push]]\n[[warning=never,statement-separator-operator-redundant]]\n\t;\n[[warning=pop]]\n\t;\n";
	driver.run(source, file, std::path::Path::new("."), &files, &NativeFs, &Rc::new(OperatorLut::new()), &mut includes);

	assert_eq!(driver.diagnostics.len(), 1);
	assert_eq!(driver.diagnostics[0].category, Warning::StatementSeparatorOperatorRedundant.slug());
}

/// Forcing an error on a category whose table is locked has no effect,
/// whichever directive tries it.
#[test]
fn locked_fault_category_rejects_force_error() {
	let mut state = CompileState::default();
	let locker = Puid::new();
	state.errors.lock(Error::BadAlignment as usize, locker);
	assert!(!state.errors.enable_force_error(Error::BadAlignment as usize));
}

/// A child context's alias lookup finds an alias registered on an ancestor,
/// and caches it on the token so the walk only happens once.
#[test]
fn alias_lookup_resolves_through_ancestor_scopes() {
	let root = Context::new_root(ContextKind::Parser, CompileState::new());
	root.insert_keyword_alias("eventually", Keyword::Defer);
	let mid = root.fork_child(ContextKind::Source);
	let leaf = mid.fork_child(ContextKind::Expression);

	let token = Token::new(TokenKind::Literal, "eventually", loc(), CompileState::new());

	let found = leaf.alias_lookup(&token);
	assert_eq!(found, Some(AliasTarget::Keyword(Keyword::Defer)));
	assert!(token.has_searched_alias());
}

/// An unrecognized directive name produces a warning, not a hard error, and
/// a later directive in the same stream still takes effect.
#[test]
fn unknown_directive_is_non_fatal() {
	let root = Context::new_root(ContextKind::Parser, CompileState::new());
	let mut driver = ParserDriver::new(root);
	driver.dispatch("made-up-directive", loc());
	driver.dispatch("tab-stop=2", loc());

	assert_eq!(driver.diagnostics.len(), 1);
	assert_eq!(driver.diagnostics[0].category, Warning::UnknownDirective.slug());
	assert_eq!(driver.context.state().tab_stop_width, 2);
}

/// A `[[source=...]]` directive is reported back to the caller as an effect
/// for directives that only name a path with no on-disk resolution
/// attempted yet (exercised directly through `dispatch`, bypassing `run`).
#[test]
fn source_directive_reports_its_effect_for_the_caller() {
	let root = Context::new_root(ContextKind::Parser, CompileState::new());
	let mut driver = ParserDriver::new(root);
	let effect = driver.dispatch("source, models/*.zx, required=warn", loc());
	match effect {
		DirectiveEffect::RequestSource { path, required } => {
			assert_eq!(path, "models/*.zx");
			assert_eq!(required, lang_core::directive::SourceAssetRequired::Warn);
		}
		other => panic!("expected a source request, got {other:?}"),
	}
}
