//! Component F: a parent-linked scope tree carrying per-scope compile
//! state overrides and keyword/operator alias maps.

use std::{
	cell::RefCell,
	collections::HashMap,
	rc::{Rc, Weak},
};

use crate::{
	compile_state::CompileState,
	operator_lut::Operator,
	token::{keyword_from_spelling, AliasTarget, Keyword, Token},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
	Parser,
	Source,
	Expression,
}

#[derive(Default)]
struct Aliasing {
	keywords: HashMap<String, Keyword>,
	operators: HashMap<String, Operator>,
}

/// A scope in the context tree. Every context owns a strong reference to
/// its parent (so the parent cannot be dropped while any descendant can
/// still reach it) and hands out weak references to itself so a
/// grandchild's parent chain doesn't keep the whole tree alive longer than
/// the owning driver needs it to.
pub struct Context {
	self_weak: RefCell<Weak<Context>>,
	pub kind: ContextKind,
	pub parent: Option<Rc<Context>>,
	/// Overrides that apply only within the current source line (e.g. a
	/// `[[warning=push]]` directive scoped by `EndOfLine`).
	single_line_state: RefCell<Option<Rc<CompileState>>>,
	state: RefCell<Rc<CompileState>>,
	aliasing: RefCell<Aliasing>,
}

impl Context {
	pub fn new_root(kind: ContextKind, state: Rc<CompileState>) -> Rc<Self> {
		let ctx = Rc::new(Self {
			self_weak: RefCell::new(Weak::new()),
			kind,
			parent: None,
			single_line_state: RefCell::new(None),
			state: RefCell::new(state),
			aliasing: RefCell::new(Aliasing::default()),
		});
		*ctx.self_weak.borrow_mut() = Rc::downgrade(&ctx);
		ctx
	}

	/// Forks a child scope: a fresh `CompileState` snapshot descended from
	/// this scope's current state, linked back to `self` as parent.
	pub fn fork_child(self: &Rc<Self>, kind: ContextKind) -> Rc<Self> {
		let forked_state = CompileState::fork(&self.state.borrow());
		let child = Rc::new(Self {
			self_weak: RefCell::new(Weak::new()),
			kind,
			parent: Some(Rc::clone(self)),
			single_line_state: RefCell::new(None),
			state: RefCell::new(forked_state),
			aliasing: RefCell::new(Aliasing::default()),
		});
		*child.self_weak.borrow_mut() = Rc::downgrade(&child);
		child
	}

	pub fn weak(&self) -> Weak<Context> {
		self.self_weak.borrow().clone()
	}

	/// The effective compile state: a single-line override if one is in
	/// force, otherwise this scope's own state, otherwise the nearest
	/// ancestor's.
	pub fn state(&self) -> Rc<CompileState> {
		if let Some(single_line) = self.single_line_state.borrow().as_ref() {
			return Rc::clone(single_line);
		}
		Rc::clone(&self.state.borrow())
	}

	pub fn set_state(&self, state: Rc<CompileState>) {
		*self.state.borrow_mut() = state;
	}

	pub fn set_single_line_state(&self, state: Option<Rc<CompileState>>) {
		*self.single_line_state.borrow_mut() = state;
	}

	pub fn find_parent(self: &Rc<Self>, kind: ContextKind) -> Option<Rc<Context>> {
		let mut cursor = self.parent.clone();
		while let Some(ctx) = cursor {
			if ctx.kind == kind {
				return Some(ctx);
			}
			cursor = ctx.parent.clone();
		}
		None
	}

	pub fn insert_keyword_alias(&self, alias: impl Into<String>, target: Keyword) {
		self.aliasing.borrow_mut().keywords.insert(alias.into(), target);
	}

	pub fn insert_operator_alias(&self, alias: impl Into<String>, target: Operator) {
		self.aliasing.borrow_mut().operators.insert(alias.into(), target);
	}

	fn local_alias_lookup(&self, name: &str) -> Option<AliasTarget> {
		let aliasing = self.aliasing.borrow();
		if let Some(kw) = aliasing.keywords.get(name) {
			return Some(AliasTarget::Keyword(*kw));
		}
		if let Some(op) = aliasing.operators.get(name) {
			return Some(AliasTarget::Operator(*op));
		}
		None
	}

	/// Walks this scope and its ancestors looking for an alias registered
	/// for `token`'s text, caching the (possibly absent) result on the
	/// token so repeat lookups are O(1).
	pub fn alias_lookup(self: &Rc<Self>, token: &Token) -> Option<AliasTarget> {
		if token.has_searched_alias() {
			return token.alias_cached();
		}

		let mut cursor = Some(Rc::clone(self));
		let result = loop {
			match cursor {
				Some(ctx) => {
					if let Some(found) = ctx.local_alias_lookup(&token.text) {
						break Some(found);
					}
					cursor = ctx.parent.clone();
				}
				None => break None,
			}
		};

		token.cache_alias(result.clone());
		result
	}

	/// The tokenizer emits every identifier-shaped token, keyword spellings
	/// included, as `kind=Literal`; this is the deferred resolution step
	/// upstream grammar code calls to find out what it actually is. An
	/// alias registered for the token's text wins over the built-in
	/// keyword table, so `[[alias=finally,defer]]` can repurpose a plain
	/// word without the tokenizer needing to know about it. Shares the same
	/// memoized cache slot as `alias_lookup`, so either may be called first.
	pub fn lookup_keyword(self: &Rc<Self>, token: &Token) -> Option<AliasTarget> {
		if token.has_searched_alias() {
			return token.alias_cached();
		}

		let mut cursor = Some(Rc::clone(self));
		let alias = loop {
			match cursor {
				Some(ctx) => {
					if let Some(found) = ctx.local_alias_lookup(&token.text) {
						break Some(found);
					}
					cursor = ctx.parent.clone();
				}
				None => break None,
			}
		};

		let result = alias.or_else(|| keyword_from_spelling(&token.text).map(AliasTarget::Keyword));
		token.cache_alias(result.clone());
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fork_child_inherits_but_does_not_share_state() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		root.set_state({
			let mut s = CompileState::default();
			s.tab_stop_width = 2;
			Rc::new(s)
		});
		let child = root.fork_child(ContextKind::Source);
		assert_eq!(child.state().tab_stop_width, 2);

		root.set_state(CompileState::new());
		assert_eq!(child.state().tab_stop_width, 2, "child state is independent of later parent mutation");
	}

	#[test]
	fn find_parent_walks_up_to_matching_kind() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let source = root.fork_child(ContextKind::Source);
		let expr = source.fork_child(ContextKind::Expression);
		assert!(Rc::ptr_eq(&expr.find_parent(ContextKind::Parser).unwrap(), &root));
		assert!(expr.find_parent(ContextKind::Expression).is_none());
	}

	#[test]
	fn single_line_state_overrides_scope_state_until_cleared() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		let mut overridden = CompileState::default();
		overridden.tab_stop_width = 99;
		root.set_single_line_state(Some(Rc::new(overridden)));
		assert_eq!(root.state().tab_stop_width, 99);
		root.set_single_line_state(None);
		assert_eq!(root.state().tab_stop_width, 8);
	}

	#[test]
	fn alias_lookup_is_memoized_and_walks_ancestors() {
		let root = Context::new_root(ContextKind::Parser, CompileState::new());
		root.insert_keyword_alias("finally", Keyword::Defer);
		let child = root.fork_child(ContextKind::Source);

		let files = lang_abstractions::file_id::FileTable::new();
		let file = files.intern(std::path::Path::new("a.zx"));
		let token = Token::new(
			crate::token::TokenKind::Separator,
			"finally",
			lang_abstractions::diagnostic::SourceLocation { file, line: 1, column: 1 },
			CompileState::new(),
		);

		assert_eq!(child.alias_lookup(&token), Some(AliasTarget::Keyword(Keyword::Defer)));
		assert!(token.has_searched_alias());
		assert_eq!(child.alias_lookup(&token), Some(AliasTarget::Keyword(Keyword::Defer)));
	}
}
