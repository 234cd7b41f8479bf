use super::Value;
use crate::primitive::{Primitive, QUOTE_MARKER};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::sync::Arc;

/// Immutable cons cell. Both halves are shared, so cloning a list is O(1).
///
/// Everything that walks the cdr chain (drop, equality, hashing, rendering)
/// loops instead of recursing, so list length is bounded by memory, not stack.
#[derive(Clone)]
pub struct Pair {
    car: Arc<Value>,
    cdr: Arc<Value>,
}

impl Pair {
    pub fn new(car: Value, cdr: Value) -> Pair {
        Pair { car: Arc::new(car), cdr: Arc::new(cdr) }
    }

    pub fn car(&self) -> &Value {
        &self.car
    }

    pub fn cdr(&self) -> &Value {
        &self.cdr
    }

    /// Elements of the list headed by this pair. An improper tail is not yielded;
    /// see [`PairIter::tail`].
    pub fn iter(&self) -> PairIter<'_> {
        PairIter { next: Some(self), tail: None }
    }

    /// True when the chain of cdrs ends in the empty list.
    pub fn is_list(&self) -> bool {
        let mut iter = self.iter();
        for _ in iter.by_ref() {}
        iter.tail().is_none()
    }

    /// Walks both cdr chains in lockstep, comparing cars with `eq` and finally the two tails.
    fn zip_eq(&self, other: &Pair, eq: fn(&Value, &Value) -> bool) -> bool {
        let (mut left, mut right) = (self, other);
        loop {
            if !eq(left.car(), right.car()) {
                return false;
            }
            match (left.cdr(), right.cdr()) {
                (Value::Pair(l), Value::Pair(r)) => {
                    left = l;
                    right = r;
                }
                (l, r) => return eq(l, r),
            }
        }
    }

    pub(crate) fn write_list(&self, out: &mut String, element: fn(&Value, &mut String)) {
        out.push('(');
        let mut iter = self.iter();
        let mut first = true;
        for item in iter.by_ref() {
            if !first {
                out.push(' ');
            }
            first = false;
            element(item, out);
        }
        if let Some(tail) = iter.tail() {
            out.push_str(" . ");
            element(tail, out);
        }
        out.push(')');
    }
}

/// Detaches `cdr` when this is its last owner and it holds another pair.
fn take_tail(cdr: &mut Arc<Value>, empty: &Arc<Value>) -> Option<Pair> {
    if !matches!(**cdr, Value::Pair(_)) {
        return None;
    }
    match Arc::try_unwrap(mem::replace(cdr, Arc::clone(empty))) {
        Ok(Value::Pair(pair)) => Some(pair),
        _ => None,
    }
}

impl Drop for Pair {
    fn drop(&mut self) {
        if !matches!(*self.cdr, Value::Pair(_)) {
            return;
        }
        let empty = Arc::new(Value::Empty);
        let mut next = take_tail(&mut self.cdr, &empty);
        while let Some(mut pair) = next {
            next = take_tail(&mut pair.cdr, &empty);
        }
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Pair) -> bool {
        self.zip_eq(other, |a, b| a == b)
    }
}

impl Eq for Pair {}

impl Hash for Pair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut iter = self.iter();
        for item in iter.by_ref() {
            item.hash(state);
        }
        iter.tail().hash(state);
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        let mut list = f.debug_list();
        list.entries(iter.by_ref());
        if let Some(tail) = iter.tail() {
            list.entry(&format_args!(". {:?}", tail));
        }
        list.finish()
    }
}

pub struct PairIter<'a> {
    next: Option<&'a Pair>,
    tail: Option<&'a Value>,
}

impl<'a> PairIter<'a> {
    /// The non-empty, non-pair value terminating an improper list, once iteration is done.
    pub fn tail(&self) -> Option<&'a Value> {
        self.tail
    }
}

impl<'a> Iterator for PairIter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.next.take()?;
        match pair.cdr() {
            Value::Pair(next) => self.next = Some(next),
            Value::Empty => {}
            tail => self.tail = Some(tail),
        }
        Some(pair.car())
    }
}

impl Primitive for Pair {
    fn type_name(&self) -> &'static str {
        "pair"
    }

    fn render_display(&self) -> String {
        let mut out = String::new();
        self.write_list(&mut out, Value::display_into);
        out
    }

    fn render_write(&self) -> String {
        let mut out = String::new();
        out.push(QUOTE_MARKER);
        self.write_list(&mut out, Value::datum_into);
        out
    }

    fn check(value: &Value) -> bool {
        matches!(value, Value::Pair(_))
    }

    fn structural_equals(&self, other: &Value) -> bool {
        other.as_pair().map_or(false, |other| self.zip_eq(other, |a, b| a.structural_equals(b)))
    }

    fn into_value(self) -> Value {
        Value::Pair(self)
    }
}

pub fn is_pair(value: Option<&Value>) -> bool {
    value.map_or(false, Pair::check)
}
