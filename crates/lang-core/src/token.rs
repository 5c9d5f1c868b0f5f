//! Token shape shared by the tokenizer (component D), the token list
//! (component E), and the directive-driven parser driver (component G).

use std::{
	cell::{Cell, RefCell},
	rc::Rc,
	sync::atomic::{AtomicU32, Ordering},
};

use lang_abstractions::diagnostic::SourceLocation;

use crate::{compile_state::CompileState, operator_lut::Operator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
	Aos,
	Alias,
	Atomic,
	Await,
	Break,
	Build,
	Case,
	Channel,
	Continue,
	Collect,
	Constant,
	Deep,
	Default,
	Defer,
	Discard,
	Each,
	Else,
	Extension,
	Except,
	Export,
	False,
	For,
	Forever,
	Handle,
	Hidden,
	Hint,
	If,
	In,
	Is,
	Immutable,
	Import,
	Inconstant,
	KeywordKw,
	Lazy,
	Managed,
	Mutable,
	Mutator,
	Once,
	OperatorKw,
	Override,
	Own,
	Private,
	Promise,
	Redo,
	Return,
	Requires,
	Scope,
	Soa,
	Suspend,
	Switch,
	Task,
	True,
	Type,
	Union,
	Until,
	Using,
	Varies,
	Void,
	Weak,
	While,
	Yield,
}

pub const KEYWORD_COUNT: usize = 61;

const KEYWORD_TABLE: [(Keyword, &str); KEYWORD_COUNT] = [
	(Keyword::Aos, "aos"),
	(Keyword::Alias, "alias"),
	(Keyword::Atomic, "atomic"),
	(Keyword::Await, "await"),
	(Keyword::Break, "break"),
	(Keyword::Build, "build"),
	(Keyword::Case, "case"),
	(Keyword::Channel, "channel"),
	(Keyword::Continue, "continue"),
	(Keyword::Collect, "collect"),
	(Keyword::Constant, "constant"),
	(Keyword::Deep, "deep"),
	(Keyword::Default, "default"),
	(Keyword::Defer, "defer"),
	(Keyword::Discard, "discard"),
	(Keyword::Each, "each"),
	(Keyword::Else, "else"),
	(Keyword::Extension, "extension"),
	(Keyword::Except, "except"),
	(Keyword::Export, "export"),
	(Keyword::False, "false"),
	(Keyword::For, "for"),
	(Keyword::Forever, "forever"),
	(Keyword::Handle, "handle"),
	(Keyword::Hidden, "hidden"),
	(Keyword::Hint, "hint"),
	(Keyword::If, "if"),
	(Keyword::In, "in"),
	(Keyword::Is, "is"),
	(Keyword::Immutable, "immutable"),
	(Keyword::Import, "import"),
	(Keyword::Inconstant, "inconstant"),
	(Keyword::KeywordKw, "keyword"),
	(Keyword::Lazy, "lazy"),
	(Keyword::Managed, "managed"),
	(Keyword::Mutable, "mutable"),
	(Keyword::Mutator, "mutator"),
	(Keyword::Once, "once"),
	(Keyword::OperatorKw, "operator"),
	(Keyword::Override, "override"),
	(Keyword::Own, "own"),
	(Keyword::Private, "private"),
	(Keyword::Promise, "promise"),
	(Keyword::Redo, "redo"),
	(Keyword::Return, "return"),
	(Keyword::Requires, "requires"),
	(Keyword::Scope, "scope"),
	(Keyword::Soa, "soa"),
	(Keyword::Suspend, "suspend"),
	(Keyword::Switch, "switch"),
	(Keyword::Task, "task"),
	(Keyword::True, "true"),
	(Keyword::Type, "type"),
	(Keyword::Union, "union"),
	(Keyword::Until, "until"),
	(Keyword::Using, "using"),
	(Keyword::Varies, "varies"),
	(Keyword::Void, "void"),
	(Keyword::Weak, "weak"),
	(Keyword::While, "while"),
	(Keyword::Yield, "yield"),
];

pub fn keyword_from_spelling(spelling: &str) -> Option<Keyword> {
	KEYWORD_TABLE.iter().find(|(_, s)| *s == spelling).map(|(kw, _)| *kw)
}

pub fn keyword_spelling(kw: Keyword) -> &'static str {
	KEYWORD_TABLE.iter().find(|(k, _)| *k == kw).map(|(_, s)| *s).unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Separator,
	Keyword(Keyword),
	/// Identifiers, keyword spellings (reclassification is deferred to
	/// `Context::lookup_keyword`), and illegal byte runs all land here.
	Literal,
	Number,
	Quote,
	Comment,
	Operator(Operator),
}

/// Resolution of a name through an alias chain, memoized on first lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasTarget {
	Keyword(Keyword),
	Operator(Operator),
}

static NEXT_TOKEN_ID: AtomicU32 = AtomicU32::new(1);

/// A single lexical unit, immutable once emitted except for the memoized
/// alias-lookup cache (spec.md §9: interior mutability only, never a
/// mutation of the token's core fields).
#[derive(Debug)]
pub struct Token {
	pub id: u32,
	pub kind: TokenKind,
	pub text: String,
	pub forced_separator: bool,
	pub location: SourceLocation,
	pub compile_state: Rc<CompileState>,
	alias_searched: Cell<bool>,
	alias: RefCell<Option<AliasTarget>>,
}

impl Token {
	pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation, compile_state: Rc<CompileState>) -> Self {
		Self {
			id: NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed),
			kind,
			text: text.into(),
			forced_separator: false,
			location,
			compile_state,
			alias_searched: Cell::new(false),
			alias: RefCell::new(None),
		}
	}

	/// Marks a `Separator` token as emitted from `;` rather than `\n`, so
	/// the redundant-separator warning can tell a forced separator from an
	/// incidental newline.
	pub fn with_forced_separator(mut self, forced: bool) -> Self {
		self.forced_separator = forced;
		self
	}

	pub fn alias_cached(&self) -> Option<AliasTarget> {
		if self.alias_searched.get() {
			self.alias.borrow().clone()
		} else {
			None
		}
	}

	pub fn has_searched_alias(&self) -> bool {
		self.alias_searched.get()
	}

	/// Records the result of an alias-chain walk so later lookups for the
	/// same token are O(1). Called at most once per token.
	pub fn cache_alias(&self, target: Option<AliasTarget>) {
		self.alias_searched.set(true);
		*self.alias.borrow_mut() = target;
	}
}
