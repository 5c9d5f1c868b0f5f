//! Component B: the immutable, reference-counted diagnostic-policy snapshot
//! attached to every token at the moment it is emitted.

use std::rc::Rc;

use lang_abstractions::SemanticVersion;

use crate::faults::{ErrorTable, InformationalTable, PanicTable, Warning, WarningTable};

#[derive(Debug, Clone, Copy)]
pub struct VariableDefaults {
	pub varies: bool,
	pub mutable: bool,
}

impl Default for VariableDefaults {
	fn default() -> Self {
		Self { varies: true, mutable: true }
	}
}

#[derive(Debug, Clone, Copy)]
pub struct TypeDefaults {
	pub mutable: bool,
	pub constant: bool,
}

impl Default for TypeDefaults {
	fn default() -> Self {
		Self { mutable: true, constant: false }
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionDefaults {
	pub constant: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeprecateContext {
	Import,
	All,
	Local,
}

#[derive(Debug, Clone)]
pub struct Deprecate {
	pub context: DeprecateContext,
	pub force_error: bool,
	pub min: Option<SemanticVersion>,
	pub max: Option<SemanticVersion>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Export {
	pub export: bool,
}

impl Export {
	pub fn visible(&self) -> bool {
		self.export
	}
}

/// A fully self-contained compile-time policy: the fault tables plus every
/// declaration default the directive surface (§4.7) can override. Tokens
/// carry an `Rc<CompileState>` snapshot rather than a reference, so later
/// mutation of a `Context`'s live state never retroactively changes the
/// policy a token was emitted under.
#[derive(Clone)]
pub struct CompileState {
	pub errors: ErrorTable,
	pub warnings: WarningTable,
	pub panics: PanicTable,
	pub informationals: InformationalTable,
	pub tab_stop_width: u32,
	pub variable_default: VariableDefaults,
	pub type_default: TypeDefaults,
	pub function_default: FunctionDefaults,
	pub deprecate: Option<Deprecate>,
	pub export: Export,
}

impl Default for CompileState {
	fn default() -> Self {
		Self {
			errors: ErrorTable::new(),
			warnings: WarningTable::new(),
			panics: PanicTable::new(),
			informationals: InformationalTable::new(),
			tab_stop_width: 8,
			variable_default: VariableDefaults::default(),
			type_default: TypeDefaults::default(),
			function_default: FunctionDefaults::default(),
			deprecate: None,
			export: Export::default(),
		}
	}
}

impl CompileState {
	pub fn new() -> Rc<Self> {
		Rc::new(Self::default())
	}

	/// Clones the current policy into an independent snapshot with empty
	/// push/pop stacks, the way a child `Context` forks its parent's state.
	pub fn fork(original: &Rc<Self>) -> Rc<Self> {
		let original = &**original;
		Rc::new(Self {
			errors: original.errors.forked(),
			warnings: original.warnings.forked(),
			panics: original.panics.forked(),
			informationals: original.informationals.forked(),
			tab_stop_width: original.tab_stop_width,
			variable_default: original.variable_default,
			type_default: original.type_default,
			function_default: original.function_default,
			deprecate: original.deprecate.clone(),
			export: original.export,
		})
	}

	pub fn is_warning_an_error(&self, warning: Warning) -> bool {
		self.warnings.is_error(warning as usize)
	}
}
