use crate::value::Value;
use std::fmt;

/// Marker prepended to the write form of quoted data (symbols, lists).
pub const QUOTE_MARKER: char = '\'';

/// The contract every runtime value variant satisfies.
///
/// Implementors are immutable once built, so the bounds let generic runtime
/// code (printer, evaluator, `equal?`) hold and share any of them across threads.
pub trait Primitive: fmt::Debug + Send + Sync {
    /// Name used in type errors, e.g. `"symbol"`.
    fn type_name(&self) -> &'static str;

    /// Type predicate: true iff `value` is this variant.
    fn check(value: &Value) -> bool
    where
        Self: Sized;

    /// Human facing form, used by `display`.
    fn render_display(&self) -> String;

    /// Read-back form, used by `write`. Re-reading it yields an equal value.
    fn render_write(&self) -> String;

    /// Structural equality against any runtime value.
    ///
    /// Implementors narrow `other` to their own variant first; a value of a
    /// different variant is never equal and never an error.
    fn structural_equals(&self, other: &Value) -> bool;

    fn into_value(self) -> Value
    where
        Self: Sized;
}
