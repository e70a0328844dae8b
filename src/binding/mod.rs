//! Binding from loop-range expressions to their resolved iteration calls.
//!
//! The frontend resolves each `for` loop's range expression to a concrete
//! `next()` call before code generation starts. This module carries that
//! binding across to the backend and answers the one question it has:
//! what element type does the loop iterate over.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::descriptors::{Callable, TypeRef};
use crate::InternalError;

/// Identifies an expression in the frontend's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExprId(pub u32);

impl std::fmt::Display for ExprId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The part of a resolved `for` statement the backend consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForLoopHeader {
    /// The loop-range expression. Absent only when the frontend recovered
    /// from a syntax error, in which case codegen must not run at all.
    pub loop_range: Option<ExprId>,
}

/// Resolver state mapping loop-range expressions to their `next()` calls.
#[derive(Debug, Default)]
pub struct BindingContext {
    next_calls: HashMap<ExprId, Callable>,
}

impl BindingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the resolved `next()` call for a loop-range expression.
    pub fn record_next_call(&mut self, expr: ExprId, call: Callable) {
        self.next_calls.insert(expr, call);
    }

    pub fn next_call(&self, expr: ExprId) -> Option<&Callable> {
        self.next_calls.get(&expr)
    }
}

/// Element type a `for` loop iterates over: the declared return type of the
/// range expression's resolved `next()` call.
///
/// The caller has already validated the loop's shape, so a missing range
/// expression or binding means an invariant broke upstream. That aborts
/// compilation of the unit instead of guessing a type.
pub fn loop_element_type<'a>(
    binding: &'a BindingContext,
    for_loop: &ForLoopHeader,
) -> Result<&'a TypeRef, InternalError> {
    let expr = for_loop.loop_range.ok_or(InternalError::MissingLoopRange)?;
    match binding.next_call(expr) {
        Some(call) => Ok(&call.return_type),
        None => {
            debug!(expr = expr.0, "loop range has no resolved next() call");
            Err(InternalError::MissingNextCall(expr))
        }
    }
}
