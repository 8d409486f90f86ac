#![forbid(unsafe_code)]

//! Compiles a [`rayforge_domain::Document`] into a Rayfield Lua script.

pub mod compiler;
pub mod literal;
pub mod widgets;

use rayforge_domain::{DocumentError, WidgetId, WidgetKind};
use thiserror::Error;

pub use compiler::{CompileOptions, DEFAULT_LIBRARY_URL, MAX_TAB_LOCALS, compile, compile_with, tab_local_name, tab_slot_name};
pub use literal::LiteralError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
	#[error("{kind} widget {widget}: field `{field}` is not a finite number")]
	NonFiniteNumber {
		widget: WidgetId,
		kind: WidgetKind,
		field: &'static str,
	},

	#[error("invalid document: {0}")]
	InvalidDocument(#[from] DocumentError),
}
