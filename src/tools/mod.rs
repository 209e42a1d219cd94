//! Tool invocation boundary for rosterdb
//!
//! Callers select a query operation by name and pass JSON arguments. This
//! layer owns argument validation and result presentation; the query engine
//! behind it assumes well-typed input.

mod arguments;
mod catalog;
mod errors;
mod invocation;
mod render;

pub use arguments::Arguments;
pub use catalog::{catalog, ParamDefault, ParamKind, ParamSpec, Tool, ToolSpec};
pub use errors::{InvocationError, InvocationResult};
pub use invocation::{Invocation, Invoker, ToolCall};
pub use render::{error_envelope, invocation_error_envelope, render_text, success_envelope};
