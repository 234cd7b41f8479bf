use super::Value;
use crate::primitive::Primitive;
use smol_str::SmolStr;

/// Immutable string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Str(SmolStr);

impl Str {
    pub fn new(text: impl Into<SmolStr>) -> Str {
        Str(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn write_escaped(&self, out: &mut String) {
        out.push('"');
        for c in self.0.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\r"),
                c => out.push(c),
            }
        }
        out.push('"');
    }
}

impl Primitive for Str {
    fn type_name(&self) -> &'static str {
        "string"
    }

    fn check(value: &Value) -> bool {
        matches!(value, Value::Str(_))
    }

    fn render_display(&self) -> String {
        self.0.to_string()
    }

    fn render_write(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 2);
        self.write_escaped(&mut out);
        out
    }

    fn structural_equals(&self, other: &Value) -> bool {
        other.as_str().map_or(false, |other| other.0 == self.0)
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl From<&str> for Str {
    fn from(text: &str) -> Self {
        Str::new(text)
    }
}

impl From<String> for Str {
    fn from(text: String) -> Self {
        Str::new(text)
    }
}

pub fn is_string(value: Option<&Value>) -> bool {
    value.map_or(false, Str::check)
}
