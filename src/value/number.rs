use super::Value;
use crate::primitive::Primitive;

/// Exact integer. Only the fixnum corner of the numeric tower lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Number(i64);

impl Number {
    pub fn new(n: i64) -> Number {
        Number(n)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Primitive for Number {
    fn type_name(&self) -> &'static str {
        "number"
    }

    fn check(value: &Value) -> bool {
        matches!(value, Value::Number(_))
    }

    fn render_display(&self) -> String {
        self.0.to_string()
    }

    fn render_write(&self) -> String {
        self.render_display()
    }

    fn structural_equals(&self, other: &Value) -> bool {
        other.as_number().map_or(false, |other| other == *self)
    }

    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number(n)
    }
}

pub fn is_number(value: Option<&Value>) -> bool {
    value.map_or(false, Number::check)
}
