//! Component C: a byte-length-bucketed lookup table mapping operator
//! spellings to `Operator` values, with "conflict sets" for spellings that
//! more than one operator shares (e.g. prefix `+` vs. binary `+`).

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	PlusPreUnary,
	MinusPreUnary,
	PlusBinary,
	MinusBinary,
	PlusPlusPreUnary,
	MinusMinusPreUnary,
	PlusPlusPostUnary,
	MinusMinusPostUnary,
	Multiply,
	Divide,
	Modulus,
	Assign,
	XorBitwise,
	AndBitwise,
	OrBitwise,
	LeftShift,
	RightShift,
	LeftRotate,
	RightRotate,
	OnesCompliment,
	ParityBitwise,
	ClearBitwise,
	Not,
	And,
	Or,
	Xor,
	AddAssign,
	MinusAssign,
	MultiplyAssign,
	DivideAssign,
	ModulusAssign,
	Equals,
	NotEquals,
	ThreeWayCompare,
	LessThan,
	GreaterThan,
	LessThanEquals,
	GreaterThanEquals,
	OnesComplimentBitwiseAssign,
	XorBitwiseAssign,
	OrBitwiseAssign,
	ParityBitwiseAssign,
	ClearBitwiseAssign,
	LeftShiftAssign,
	RightShiftAssign,
	LeftRotateAssign,
	RightRotateAssign,
	Dereference,
	As,
	OpenParenthesis,
	CloseParenthesis,
	OpenSquare,
	CloseSquare,
	CountOf,
	Overhead,
	OverheadOf,
	AllocatorOf,
	PointerType,
	ReferenceCapture,
	ReferenceDeclare,
	Allocate,
	ParallelAllocate,
	SequentialAllocate,
	NameResolution,
	Comma,
	SubStatementSeparator,
	TypeDeclare,
	MetaDeclare,
	MetaDereference,
	Optional,
	Ternary,
	UninitializedData,
	FunctionComposition,
	FunctionInvocationChaining,
	Combine,
	Split,
	Continuation,
	Cast,
	OuterCast,
	CopyCast,
	LifetimeCast,
	OuterOf,
	LifetimeOf,
	SizeOf,
	AlignOf,
	OffsetOf,
	Templated,
	VariadicValues,
	VariadicTypes,
	ScopeOpen,
	ScopeClose,
	ValueInitializeOpen,
	ValueInitializeClose,
	DirectiveOpen,
	DirectiveClose,
	SelfRef,
	ContextRef,
	Constructor,
	Destructor,
	StatementSeparator,
}

/// 99 transcribed from the original operator table plus `StatementSeparator`
/// (`;`), which has no entry there — the original only has `;;`
/// (`SubStatementSeparator`). Required by the forced-separator/redundant-`;`
/// warning machinery.
pub const OPERATOR_COUNT: usize = 100;

const TABLE: [(Operator, &str); OPERATOR_COUNT] = [
	(Operator::PlusPreUnary, "+"),
	(Operator::MinusPreUnary, "-"),
	(Operator::PlusBinary, "+"),
	(Operator::MinusBinary, "-"),
	(Operator::PlusPlusPreUnary, "++"),
	(Operator::MinusMinusPreUnary, "--"),
	(Operator::PlusPlusPostUnary, "++"),
	(Operator::MinusMinusPostUnary, "--"),
	(Operator::Multiply, "*"),
	(Operator::Divide, "/"),
	(Operator::Modulus, "%"),
	(Operator::Assign, "="),
	(Operator::XorBitwise, "^"),
	(Operator::AndBitwise, "&"),
	(Operator::OrBitwise, "|"),
	(Operator::LeftShift, "<<"),
	(Operator::RightShift, ">>"),
	(Operator::LeftRotate, "<<<"),
	(Operator::RightRotate, ">>>"),
	(Operator::OnesCompliment, "~"),
	(Operator::ParityBitwise, "~|"),
	(Operator::ClearBitwise, "~&"),
	(Operator::Not, "!"),
	(Operator::And, "&&"),
	(Operator::Or, "||"),
	(Operator::Xor, "^^"),
	(Operator::AddAssign, "+="),
	(Operator::MinusAssign, "-="),
	(Operator::MultiplyAssign, "*="),
	(Operator::DivideAssign, "/="),
	(Operator::ModulusAssign, "%="),
	(Operator::Equals, "=="),
	(Operator::NotEquals, "!="),
	(Operator::ThreeWayCompare, "<=>"),
	(Operator::LessThan, "<"),
	(Operator::GreaterThan, ">"),
	(Operator::LessThanEquals, "<="),
	(Operator::GreaterThanEquals, ">="),
	(Operator::OnesComplimentBitwiseAssign, "~="),
	(Operator::XorBitwiseAssign, "^="),
	(Operator::OrBitwiseAssign, "|="),
	(Operator::ParityBitwiseAssign, "~|="),
	(Operator::ClearBitwiseAssign, "~&="),
	(Operator::LeftShiftAssign, "<<="),
	(Operator::RightShiftAssign, ">>="),
	(Operator::LeftRotateAssign, "<<<="),
	(Operator::RightRotateAssign, ">>>="),
	(Operator::Dereference, "."),
	(Operator::As, "as"),
	(Operator::OpenParenthesis, "("),
	(Operator::CloseParenthesis, ")"),
	(Operator::OpenSquare, "["),
	(Operator::CloseSquare, "]"),
	(Operator::CountOf, "countof"),
	(Operator::Overhead, "overhead"),
	(Operator::OverheadOf, "overheadof"),
	(Operator::AllocatorOf, "allocatorof"),
	(Operator::PointerType, "*"),
	(Operator::ReferenceCapture, "&"),
	(Operator::ReferenceDeclare, "&"),
	(Operator::Allocate, "@"),
	(Operator::ParallelAllocate, "@@"),
	(Operator::SequentialAllocate, "@!"),
	(Operator::NameResolution, "."),
	(Operator::Comma, ","),
	(Operator::SubStatementSeparator, ";;"),
	(Operator::TypeDeclare, ":"),
	(Operator::MetaDeclare, "::"),
	(Operator::MetaDereference, "::."),
	(Operator::Optional, "?"),
	(Operator::Ternary, "??"),
	(Operator::UninitializedData, "???"),
	(Operator::FunctionComposition, ">>"),
	(Operator::FunctionInvocationChaining, "|>"),
	(Operator::Combine, "->"),
	(Operator::Split, "<-"),
	(Operator::Continuation, "\\"),
	(Operator::Cast, "cast"),
	(Operator::OuterCast, "outercast"),
	(Operator::CopyCast, "copycast"),
	(Operator::LifetimeCast, "lifetimecast"),
	(Operator::OuterOf, "outerof"),
	(Operator::LifetimeOf, "lifetimeof"),
	(Operator::SizeOf, "sizeof"),
	(Operator::AlignOf, "aligneof"),
	(Operator::OffsetOf, "offsetof"),
	(Operator::Templated, "$"),
	(Operator::VariadicValues, "..."),
	(Operator::VariadicTypes, "$..."),
	(Operator::ScopeOpen, "{"),
	(Operator::ScopeClose, "}"),
	(Operator::ValueInitializeOpen, "{{"),
	(Operator::ValueInitializeClose, "}}"),
	(Operator::DirectiveOpen, "[["),
	(Operator::DirectiveClose, "]]"),
	(Operator::SelfRef, "_"),
	(Operator::ContextRef, "___"),
	(Operator::Constructor, "+++"),
	(Operator::Destructor, "---"),
	(Operator::StatementSeparator, ";"),
];

/// Operators whose canonical spelling is shared with at least one other
/// operator (e.g. prefix vs. binary `+`). Disambiguating between them is a
/// grammar-level concern (out of scope here); the lut just reports the set.
pub struct OperatorLut {
	by_length: Vec<HashMap<&'static str, Vec<Operator>>>,
	canonical: HashMap<Operator, &'static str>,
}

impl Default for OperatorLut {
	fn default() -> Self {
		Self::new()
	}
}

impl OperatorLut {
	pub fn new() -> Self {
		let max_len = TABLE.iter().map(|(_, spelling)| spelling.len()).max().unwrap_or(0);
		let mut by_length = vec![HashMap::new(); max_len + 1];
		let mut canonical = HashMap::new();

		for &(op, spelling) in TABLE.iter() {
			by_length[spelling.len()].entry(spelling).or_insert_with(Vec::new).push(op);
			canonical.entry(op).or_insert(spelling);
		}

		Self { by_length, canonical }
	}

	/// Finds the longest operator spelling that prefixes `input`, returning
	/// every operator that shares that spelling (a conflict set of size 1
	/// when the spelling is unambiguous).
	pub fn lookup(&self, input: &str) -> Option<(&'static str, &[Operator])> {
		for len in (1..self.by_length.len()).rev() {
			if input.len() < len {
				continue;
			}
			let prefix = &input[..len];
			if let Some(ops) = self.by_length[len].get(prefix) {
				return Some((prefix, ops));
			}
		}
		None
	}

	pub fn canonical_spelling(&self, op: Operator) -> &'static str {
		self.canonical[&op]
	}

	pub fn has_conflicts(&self, spelling: &str) -> bool {
		self.by_length.get(spelling.len()).and_then(|m| m.get(spelling)).map(|ops| ops.len() > 1).unwrap_or(false)
	}
}
