//! Component E: a splice-capable token list.
//!
//! The original implementation backs this with a custom random-access
//! iterator over `std::list` so tokens can be extracted from one list and
//! spliced into another without copying. `VecDeque<Rc<Token>>` gives the
//! same O(1) push/pop at both ends and O(1) indexed access that dominate
//! this component's usage, and splicing an `Rc` handle is already a pure
//! pointer move, so no content is copied either way.

use std::{collections::VecDeque, rc::Rc};

use crate::token::Token;

#[derive(Default)]
pub struct TokenList {
	tokens: VecDeque<Rc<Token>>,
}

impl TokenList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn push_back(&mut self, token: Rc<Token>) {
		self.tokens.push_back(token);
	}

	pub fn push_front(&mut self, token: Rc<Token>) {
		self.tokens.push_front(token);
	}

	pub fn get(&self, index: usize) -> Option<&Rc<Token>> {
		self.tokens.get(index)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Rc<Token>> {
		self.tokens.iter()
	}

	pub fn front(&self) -> Option<&Rc<Token>> {
		self.tokens.front()
	}

	pub fn back(&self) -> Option<&Rc<Token>> {
		self.tokens.back()
	}

	pub fn pop_front(&mut self) -> Option<Rc<Token>> {
		self.tokens.pop_front()
	}

	pub fn pop_back(&mut self) -> Option<Rc<Token>> {
		self.tokens.pop_back()
	}

	pub fn clear(&mut self) {
		self.tokens.clear();
	}

	/// Whether there is at least one more token beyond `index`.
	pub fn has_ahead(&self, index: usize) -> bool {
		index + 1 < self.tokens.len()
	}

	/// Whether there is at least one token before `index`.
	pub fn has_behind(&self, index: usize) -> bool {
		index > 0 && index <= self.tokens.len()
	}

	/// Removes the half-open range `[from, to)` from this list, returning it
	/// as an independent list that retains every token's identity (no
	/// cloning of `Token` contents — only the `Rc` handles move).
	pub fn extract_range(&mut self, from: usize, to: usize) -> TokenList {
		assert!(from <= to && to <= self.tokens.len(), "extract range out of bounds");
		let mut rest = self.tokens.split_off(to);
		let extracted = self.tokens.split_off(from);
		self.tokens.append(&mut rest);
		TokenList { tokens: extracted }
	}

	pub fn extract_from_start_to(&mut self, to: usize) -> TokenList {
		self.extract_range(0, to)
	}

	pub fn extract_from_to_end(&mut self, from: usize) -> TokenList {
		let len = self.tokens.len();
		self.extract_range(from, len)
	}

	/// Inserts `other`'s tokens before `index`, consuming `other`.
	pub fn insert_before(&mut self, index: usize, mut other: TokenList) {
		let tail = self.tokens.split_off(index);
		self.tokens.append(&mut other.tokens);
		self.tokens.extend(tail);
	}

	/// Inserts `other`'s tokens after `index`, consuming `other`.
	pub fn insert_after(&mut self, index: usize, other: TokenList) {
		self.insert_before(index + 1, other);
	}

	pub fn erase_range(&mut self, from: usize, to: usize) {
		let _ = self.extract_range(from, to);
	}

	/// Inserts clones of `other`'s `Rc<Token>` handles before `index`,
	/// leaving `other` untouched (the two-list splice variant of
	/// `insert_before` — the same tokens can end up living in both lists,
	/// which `insert_before`'s consuming form can't express).
	pub fn insert_copy_before(&mut self, index: usize, other: &TokenList) {
		let tail = self.tokens.split_off(index);
		self.tokens.extend(other.tokens.iter().cloned());
		self.tokens.extend(tail);
	}

	pub fn insert_copy_after(&mut self, index: usize, other: &TokenList) {
		self.insert_copy_before(index + 1, other);
	}
}
