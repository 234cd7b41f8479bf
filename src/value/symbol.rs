use super::Value;
use crate::error::{CoreError, CoreResult};
use crate::primitive::{Primitive, QUOTE_MARKER};
use smol_str::SmolStr;
use std::any::Any;

const DELIMITERS: &[char] = &['(', ')', '[', ']', '{', '}', '"', ',', '\'', '`', ';', '|'];

/// A named identifier. Compared by name, never by identity, and never interned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    name: SmolStr,
}

impl Symbol {
    /// Wraps `name` as-is. Any text is accepted, including the empty string.
    pub fn new(name: impl Into<SmolStr>) -> Symbol {
        Symbol { name: name.into() }
    }

    /// Like [`Symbol::new`], but rejects names the reader could not produce.
    pub fn parse(name: &str) -> CoreResult<Symbol> {
        match unreadable_reason(name) {
            Some(reason) => {
                log::trace!("rejecting symbol name {:?}: {}", name, reason);
                Err(CoreError::InvalidSymbolName { name: name.to_string(), reason })
            }
            None => Ok(Symbol::new(name)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type check over arbitrary data, runtime value or not.
    pub fn check_any(value: &dyn Any) -> bool {
        if value.is::<Symbol>() {
            return true;
        }
        value.downcast_ref::<Value>().map_or(false, Symbol::check)
    }
}

fn unreadable_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("empty name")
    } else if name.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else if name.contains(DELIMITERS) {
        Some("contains a delimiter")
    } else if name == "." {
        Some("bare dot")
    } else if name.starts_with('#') {
        Some("starts with '#'")
    } else {
        None
    }
}

impl Primitive for Symbol {
    fn type_name(&self) -> &'static str {
        "symbol"
    }

    fn check(value: &Value) -> bool {
        matches!(value, Value::Symbol(_))
    }

    fn render_display(&self) -> String {
        self.name.to_string()
    }

    fn render_write(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 1);
        out.push(QUOTE_MARKER);
        out.push_str(&self.render_display());
        out
    }

    fn structural_equals(&self, other: &Value) -> bool {
        other.as_symbol().map_or(false, |other| other.name == self.name)
    }

    fn into_value(self) -> Value {
        Value::Symbol(self)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol::new(name)
    }
}

/// Free-standing constructor used by builtins such as `string->symbol`.
pub fn make_symbol(name: impl Into<SmolStr>) -> Value {
    Value::Symbol(Symbol::new(name))
}

pub fn is_symbol(value: Option<&Value>) -> bool {
    value.map_or(false, Symbol::check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn display_is_the_bare_name() {
        assert_eq!(Symbol::new("foo").render_display(), "foo");
        assert_eq!(Symbol::new("hello world").render_display(), "hello world");
    }

    #[test]
    fn write_prefixes_quote_marker() {
        assert_eq!(Symbol::new("foo").render_write(), "'foo");
        assert_eq!(Symbol::new("").render_write(), "'");
    }

    #[test]
    fn empty_name_is_accepted() {
        let sym = Symbol::new("");
        assert_eq!(sym.name(), "");
        assert_eq!(sym.render_display(), "");
    }

    #[test]
    fn equality_is_by_name() {
        assert!(Symbol::new("a").structural_equals(&make_symbol("a")));
        assert!(!Symbol::new("a").structural_equals(&make_symbol("b")));
    }

    #[test]
    fn equality_against_other_variants_is_false() {
        let sym = Symbol::new("abc");
        assert!(!sym.structural_equals(&Value::Str("abc".into())));
        assert!(!sym.structural_equals(&Value::Number(Number::new(3))));
        assert!(!sym.structural_equals(&Value::Empty));
        assert!(!sym.structural_equals(&Value::Void));
    }

    #[test]
    fn check_only_accepts_symbols() {
        assert!(Symbol::check(&make_symbol("x")));
        assert!(!Symbol::check(&Value::Str("x".into())));
        assert!(!Symbol::check(&Value::Boolean(false)));
        assert!(!is_symbol(None));
        assert!(is_symbol(Some(&make_symbol("x"))));
    }

    #[test]
    fn check_any_rejects_non_runtime_data() {
        assert!(Symbol::check_any(&Symbol::new("x")));
        assert!(Symbol::check_any(&make_symbol("x")));
        assert!(!Symbol::check_any(&"x"));
        assert!(!Symbol::check_any(&String::from("x")));
        assert!(!Symbol::check_any(&42_i64));
        assert!(!Symbol::check_any(&Option::<Value>::None));
    }

    #[test]
    fn parse_accepts_readable_names() {
        let sym = Symbol::parse("list->vector").expect("readable name");
        assert_eq!(sym.name(), "list->vector");
        assert!(Symbol::parse("+").is_ok());
        assert!(Symbol::parse("a#b").is_ok());
        assert!(Symbol::parse("...").is_ok());
    }

    #[test]
    fn parse_rejects_unreadable_names() {
        for name in ["", "a b", "tab\there", "(x", "x)", "a'b", "semi;colon", "|pipe|", "#t", "back`tick", "."] {
            let err = Symbol::parse(name).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidSymbolName { name: ref n, .. } if n.as_str() == name),
                "expected rejection for {:?}",
                name
            );
        }
    }

    #[test]
    fn rendering_is_stable_across_calls() {
        let sym = Symbol::new("stable");
        assert_eq!(sym.render_display(), sym.render_display());
        assert_eq!(sym.render_write(), sym.render_write());
    }
}
