/// Runtime values
///
/// `Value` is the closed set of variants the runtime knows about. Every
/// dispatch site (rendering, equality, truthiness) matches on it exhaustively.
/// - symbol: named identifiers
/// - number, string: atoms with a payload
/// - pair: cons cells and lists
mod number;
mod pair;
mod string;
mod symbol;

pub use number::{is_number, Number};
pub use pair::{is_pair, Pair, PairIter};
pub use string::{is_string, Str};
pub use symbol::{is_symbol, make_symbol, Symbol};

use crate::error::{CoreError, CoreResult};
use crate::primitive::{Primitive, QUOTE_MARKER};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Symbol(Symbol),
    Number(Number),
    Str(Str),
    Boolean(bool),
    Empty,
    Pair(Pair),
    Void,
}

impl Value {
    pub fn cons(car: Value, cdr: Value) -> Value {
        Value::Pair(Pair::new(car, cdr))
    }

    /// Builds a proper list, `Value::Empty` for no items.
    pub fn list<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: DoubleEndedIterator,
    {
        items.into_iter().rev().fold(Value::Empty, |tail, item| Value::cons(item, tail))
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&Str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Value::Pair(pair) => Some(pair),
            _ => None,
        }
    }

    pub fn expect_symbol(&self) -> CoreResult<&Symbol> {
        self.as_symbol().ok_or_else(|| self.type_error("symbol"))
    }

    pub fn expect_number(&self) -> CoreResult<Number> {
        self.as_number().ok_or_else(|| self.type_error("number"))
    }

    pub fn expect_str(&self) -> CoreResult<&Str> {
        self.as_str().ok_or_else(|| self.type_error("string"))
    }

    pub fn expect_pair(&self) -> CoreResult<&Pair> {
        self.as_pair().ok_or_else(|| self.type_error("pair"))
    }

    fn type_error(&self, expected: &'static str) -> CoreError {
        CoreError::TypeError { expected, got: self.type_name() }
    }

    /// Only `#f` is false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Symbol(_) | Value::Number(_) | Value::Str(_) | Value::Empty | Value::Pair(_) | Value::Void => true,
        }
    }

    pub(crate) fn display_into(&self, out: &mut String) {
        match self {
            Value::Symbol(sym) => out.push_str(sym.name()),
            Value::Number(n) => out.push_str(&n.render_display()),
            Value::Str(s) => out.push_str(s.as_str()),
            Value::Boolean(b) => out.push_str(boolean_literal(*b)),
            Value::Empty => out.push_str("()"),
            Value::Pair(pair) => pair.write_list(out, Value::display_into),
            Value::Void => out.push_str(VOID_LITERAL),
        }
    }

    /// Write form without the leading quote marker, used inside quoted lists.
    pub(crate) fn datum_into(&self, out: &mut String) {
        match self {
            Value::Symbol(sym) => out.push_str(sym.name()),
            Value::Number(n) => out.push_str(&n.render_write()),
            Value::Str(s) => s.write_escaped(out),
            Value::Boolean(b) => out.push_str(boolean_literal(*b)),
            Value::Empty => out.push_str("()"),
            Value::Pair(pair) => pair.write_list(out, Value::datum_into),
            Value::Void => out.push_str(VOID_LITERAL),
        }
    }
}

const VOID_LITERAL: &str = "#<void>";

fn boolean_literal(b: bool) -> &'static str {
    if b {
        "#t"
    } else {
        "#f"
    }
}

impl Primitive for Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Symbol(sym) => sym.type_name(),
            Value::Number(n) => n.type_name(),
            Value::Str(s) => s.type_name(),
            Value::Boolean(_) => "boolean",
            Value::Empty => "null",
            Value::Pair(pair) => pair.type_name(),
            Value::Void => "void",
        }
    }

    /// Every runtime value is a `Value`.
    fn check(_value: &Value) -> bool {
        true
    }

    fn render_display(&self) -> String {
        match self {
            Value::Symbol(sym) => sym.render_display(),
            Value::Number(n) => n.render_display(),
            Value::Str(s) => s.render_display(),
            Value::Pair(pair) => pair.render_display(),
            Value::Boolean(_) | Value::Empty | Value::Void => {
                let mut out = String::new();
                self.display_into(&mut out);
                out
            }
        }
    }

    fn render_write(&self) -> String {
        match self {
            Value::Symbol(sym) => sym.render_write(),
            Value::Number(n) => n.render_write(),
            Value::Str(s) => s.render_write(),
            Value::Pair(pair) => pair.render_write(),
            Value::Empty => format!("{}()", QUOTE_MARKER),
            Value::Boolean(_) | Value::Void => {
                let mut out = String::new();
                self.datum_into(&mut out);
                out
            }
        }
    }

    fn structural_equals(&self, other: &Value) -> bool {
        match self {
            Value::Symbol(sym) => sym.structural_equals(other),
            Value::Number(n) => n.structural_equals(other),
            Value::Str(s) => s.structural_equals(other),
            Value::Pair(pair) => pair.structural_equals(other),
            Value::Boolean(b) => matches!(other, Value::Boolean(o) if o == b),
            Value::Empty => matches!(other, Value::Empty),
            Value::Void => matches!(other, Value::Void),
        }
    }

    fn into_value(self) -> Value {
        self
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_display())
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Str> for Value {
    fn from(s: Str) -> Self {
        Value::Str(s)
    }
}

impl From<Pair> for Value {
    fn from(pair: Pair) -> Self {
        Value::Pair(pair)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

pub fn is_boolean(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Boolean(_)))
}

pub fn is_null(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Empty))
}

pub fn is_void(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Void))
}
