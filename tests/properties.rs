// Property tests for the symbol table, scope stack and evaluator
use borg::{
    error::RuntimeError,
    interpreter::{evaluator::core::Context, scope::ScopeStack, symbol_table::SymbolTable},
};
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,11}"
}

proptest! {
    #[test]
    fn define_then_lookup_round_trips(n in name(), v in any::<i64>(), buckets in 1usize..32) {
        let mut table = SymbolTable::with_buckets(buckets);
        table.define(&n, v);

        prop_assert_eq!(table.lookup(&n), Some(v));
    }

    #[test]
    fn redefinition_leaves_one_binding(n in name(), v1 in any::<i64>(), v2 in any::<i64>()) {
        let mut table = SymbolTable::new();
        table.define(&n, v1);
        table.define(&n, v2);

        prop_assert_eq!(table.len(), 1);
        prop_assert_eq!(table.lookup(&n), Some(v2));
    }

    #[test]
    fn names_do_not_interfere(names in proptest::collection::hash_set(name(), 1..40)) {
        let mut table = SymbolTable::with_buckets(3);
        for (i, n) in names.iter().enumerate() {
            table.define(n, i64::try_from(i).unwrap());
        }

        prop_assert_eq!(table.len(), names.len());
        for (i, n) in names.iter().enumerate() {
            prop_assert_eq!(table.lookup(n), Some(i64::try_from(i).unwrap()));
        }
    }

    #[test]
    fn scope_teardown_removes_bindings(n in name(), v in any::<i64>()) {
        let mut context = Context::new();
        context.enter_scope().unwrap();
        context.define_in_scope(&n, v);
        context.exit_scope();

        prop_assert_eq!(context.lookup(&n), None);
    }

    #[test]
    fn global_scope_survives_exit(n in name(), v in any::<i64>(), finishes in 1usize..5) {
        let mut table = SymbolTable::new();
        let mut scopes = ScopeStack::default();
        table.define(&n, v);
        scopes.record(&n);

        for _ in 0..finishes {
            prop_assert!(scopes.exit_scope(&mut table).is_empty());
        }

        prop_assert_eq!(scopes.depth(), 0);
        prop_assert_eq!(table.lookup(&n), Some(v));
    }

    #[test]
    fn increment_updates_bound_variable(n in name(), v in -1_000_000i64..1_000_000) {
        let mut context = Context::new();
        context.define_in_scope(&n, v);

        prop_assert_eq!(context.evaluate_unary("++", &n), Ok(v + 1));
        prop_assert_eq!(context.lookup(&n), Some(v + 1));
        prop_assert_eq!(context.evaluate_unary("--", &n), Ok(v));
        prop_assert_eq!(context.lookup(&n), Some(v));
    }

    #[test]
    fn unary_on_literal_binds_nothing(v in -1_000_000i64..1_000_000) {
        let mut context = Context::new();
        let literal = v.to_string();

        prop_assert_eq!(context.evaluate_unary("++", &literal), Ok(v + 1));
        prop_assert_eq!(context.evaluate_unary("--", &literal), Ok(v - 1));
        prop_assert!(context.symbols.is_empty());
    }

    #[test]
    fn arithmetic_matches_integer_semantics(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let context = Context::new();
        let (left, right) = (a.to_string(), b.to_string());

        prop_assert_eq!(context.evaluate_binary(&left, "+", &right), Ok(a + b));
        prop_assert_eq!(context.evaluate_binary(&left, "-", &right), Ok(a - b));
        prop_assert_eq!(context.evaluate_binary(&left, "*", &right), Ok(a * b));
        if b == 0 {
            prop_assert_eq!(context.evaluate_binary(&left, "/", &right), Err(RuntimeError::DivisionByZero));
            prop_assert_eq!(context.evaluate_binary(&left, "%", &right), Err(RuntimeError::DivisionByZero));
        } else {
            prop_assert_eq!(context.evaluate_binary(&left, "/", &right), Ok(a / b));
            prop_assert_eq!(context.evaluate_binary(&left, "%", &right), Ok(a % b));
        }
    }

    #[test]
    fn variables_and_literals_resolve_alike(a in any::<i32>(), b in 0i64..8) {
        let mut context = Context::new();
        context.define_in_scope("A", i64::from(a));
        context.define_in_scope("B", b);

        prop_assert_eq!(context.evaluate_binary("A", "^", "B"),
                        context.evaluate_binary(&a.to_string(), "^", &b.to_string()));
    }
}

#[test]
fn concrete_binary_cases() {
    let context = Context::new();

    assert_eq!(context.evaluate_binary("7", "+", "3"), Ok(10));
    assert_eq!(context.evaluate_binary("7", "/", "2"), Ok(3));
    assert_eq!(context.evaluate_binary("7", "%", "0"), Err(RuntimeError::DivisionByZero));
    assert_eq!(context.evaluate_binary("2", "^", "5"), Ok(32));
}

#[test]
fn undefined_operands_are_reported_by_name() {
    let context = Context::new();

    assert_eq!(context.lookup("GANDALF"), None);
    assert_eq!(context.evaluate_binary("BORAMIR", "*", "2"),
               Err(RuntimeError::UndefinedVariable { name: "BORAMIR".to_string() }));
    assert_eq!(context.evaluate_binary("2", "*", "BORAMIR"),
               Err(RuntimeError::UndefinedVariable { name: "BORAMIR".to_string() }));
}

#[test]
fn operator_is_checked_before_operands() {
    let context = Context::new();

    assert_eq!(context.evaluate_binary("A", "PLUS", "B"),
               Err(RuntimeError::invalid("'PLUS' is not an operator")));

    let mut context = Context::new();
    assert_eq!(context.evaluate_unary("+", "X"),
               Err(RuntimeError::invalid("'+' is not a unary operator")));
}

#[test]
fn scope_records_each_name_once() {
    let mut context = Context::new();
    context.enter_scope().unwrap();
    context.define_in_scope("X", 1);
    context.define_in_scope("Y", 2);
    context.define_in_scope("X", 3);

    assert_eq!(context.scopes.current_names(), ["X", "Y"]);
    assert_eq!(context.exit_scope(), ["Y", "X"]);
    assert!(context.symbols.is_empty());
}

#[test]
fn inner_definition_of_outer_name_is_torn_down() {
    let mut context = Context::new();
    context.define_in_scope("X", 1);
    context.enter_scope().unwrap();
    context.define_in_scope("X", 2);

    assert_eq!(context.lookup("X"), Some(2));
    context.exit_scope();
    assert_eq!(context.lookup("X"), None);
}

#[test]
fn outer_exit_skips_names_already_torn_down() {
    let mut context = Context::new();
    context.enter_scope().unwrap();
    context.define_in_scope("X", 1);
    context.define_in_scope("Y", 2);
    context.enter_scope().unwrap();
    context.define_in_scope("X", 3);

    assert_eq!(context.exit_scope(), ["X"]);
    assert_eq!(context.exit_scope(), ["Y"]);
    assert!(context.symbols.is_empty());
}
