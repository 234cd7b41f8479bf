use racket_core::{is_symbol, make_symbol, Number, Primitive, Str, Symbol, Value};
use std::sync::Arc;
use std::thread;

const NAMES: &[&str] = &["foo", "", " ", "define", "λ", "a-very-long-symbol-name-that-is-heap-allocated", "'quoted", "1+"];

#[test]
fn display_returns_constructed_name() {
    for name in NAMES {
        assert_eq!(Symbol::new(*name).render_display(), *name);
    }
}

#[test]
fn write_is_quote_plus_display() {
    for name in NAMES {
        let sym = Symbol::new(*name);
        assert_eq!(sym.render_write(), format!("'{}", name));
        assert_eq!(sym.render_write(), format!("'{}", sym.render_display()));
    }
}

#[test]
fn equality_follows_name_equality() {
    for left in NAMES {
        for right in NAMES {
            let equal = Symbol::new(*left).structural_equals(&make_symbol(*right));
            assert_eq!(equal, left == right, "{:?} vs {:?}", left, right);
        }
    }
}

#[test]
fn type_check_accepts_only_symbols() {
    for name in NAMES {
        assert!(is_symbol(Some(&make_symbol(*name))));
    }

    let others = vec![
        Value::Number(Number::new(1)),
        Value::Str(Str::new("foo")),
        Value::Boolean(true),
        Value::Empty,
        Value::Void,
        Value::list(vec![make_symbol("foo")]),
    ];
    for value in &others {
        assert!(!Symbol::check(value), "{:?} is not a symbol", value);
    }
    assert!(!is_symbol(None));
    assert!(!Symbol::check_any(&1.5_f64));
    assert!(!Symbol::check_any(&"foo"));
}

#[test]
fn construction_does_not_deduplicate() {
    let name = "a-very-long-symbol-name-that-is-heap-allocated";
    let a = Symbol::new(name);
    let b = Symbol::new(name);
    assert_ne!(a.name().as_ptr(), b.name().as_ptr());
    assert!(a.structural_equals(&b.clone().into_value()));
    assert_eq!(a, b);
}

#[test]
fn foo_scenario() {
    let sym = Symbol::new("foo");
    assert_eq!(sym.render_display(), "foo");
    assert_eq!(sym.render_write(), "'foo");
    assert!(Symbol::check(&sym.into_value()));
}

#[test]
fn empty_name_scenario() {
    let sym = Symbol::new("");
    assert_eq!(sym.render_display(), "");
    assert_eq!(sym.render_write(), "'");
}

#[test]
fn distinct_names_are_unequal() {
    assert!(!Symbol::new("a").structural_equals(&make_symbol("b")));
}

#[test]
fn symbols_are_shared_across_threads() {
    let shared = Arc::new(make_symbol("shared"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let value = Arc::clone(&shared);
            thread::spawn(move || (value.render_display(), value.render_write()))
        })
        .collect();
    for handle in handles {
        let (display, write) = handle.join().expect("thread completes");
        assert_eq!(display, "shared");
        assert_eq!(write, "'shared");
    }
}
