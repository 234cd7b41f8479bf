/// Runtime value layer for the Racket core
///
/// - primitive: the contract every runtime value variant satisfies
/// - value: the closed set of variants (symbols, numbers, strings, pairs, ...)
/// - printer: display and write rendering to an output sink
/// - error: the error taxonomy shared by this layer
pub mod error;
pub mod primitive;
pub mod printer;
pub mod value;

pub use error::{CoreError, CoreResult};
pub use primitive::{Primitive, QUOTE_MARKER};
pub use printer::{render, Printer, RenderMode};
pub use value::{
    is_boolean, is_null, is_number, is_pair, is_string, is_symbol, is_void, make_symbol, Number, Pair, PairIter, Str,
    Symbol, Value,
};
