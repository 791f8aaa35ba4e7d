use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use quill_ir::StringInterner;

fn names() -> (StringInterner, Name, Name) {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    (interner, x, y)
}

#[test]
fn test_define_and_get() {
    let (_interner, x, y) = names();
    let mut scope = Scope::new();
    scope.define(x, Value::Int(1));
    assert_eq!(scope.get(x), Some(&Value::Int(1)));
    assert_eq!(scope.get(y), None);
}

#[test]
fn test_define_twice_overwrites() {
    let (_interner, x, _) = names();
    let mut scope = Scope::new();
    scope.define(x, Value::Int(1));
    scope.define(x, Value::Int(2));
    assert_eq!(scope.get(x), Some(&Value::Int(2)));
}

#[test]
fn test_inner_binding_gone_after_pop() {
    let (_interner, x, y) = names();
    let mut outer = Scope::new();
    outer.define(x, Value::Int(1));

    let mut inner = outer.push();
    inner.define(x, Value::Int(10));
    inner.define(y, Value::Int(20));
    assert_eq!(inner.get(x), Some(&Value::Int(10)));

    let outer = inner.pop().unwrap();
    assert_eq!(outer.get(x), Some(&Value::Int(1)));
    assert_eq!(outer.get(y), None);
}

#[test]
fn test_assign_updates_innermost_owner() {
    let (_interner, x, _) = names();
    let mut outer = Scope::new();
    outer.define(x, Value::Int(1));
    let mut inner = outer.push().push();

    assert_eq!(inner.assign(x, Value::Int(5)), Ok(Value::Int(5)));
    assert_eq!(inner.get(x), Some(&Value::Int(5)));

    let outer = inner.pop().and_then(Scope::pop).unwrap();
    assert_eq!(outer.get(x), Some(&Value::Int(5)));
}

#[test]
fn test_assign_hits_shadowing_binding_only() {
    let (_interner, x, _) = names();
    let mut outer = Scope::new();
    outer.define(x, Value::Int(1));
    let mut inner = outer.push();
    inner.define(x, Value::Int(2));

    inner.assign(x, Value::Int(3)).unwrap();

    assert_eq!(inner.get(x), Some(&Value::Int(3)));
    assert_eq!(inner.pop().unwrap().get(x), Some(&Value::Int(1)));
}

#[test]
fn test_assign_unbound_fails_without_binding() {
    let (_interner, x, y) = names();
    let mut scope = Scope::new();
    scope.define(y, Value::Int(1));
    let mut scope = scope.push();

    assert_eq!(
        scope.assign(x, Value::Int(9)),
        Err(UnboundVariable { name: x })
    );
    assert_eq!(scope.get(x), None);
    assert_eq!(scope.get(y), Some(&Value::Int(1)));
}

#[test]
fn test_pop_root() {
    assert!(Scope::new().pop().is_none());
}

#[test]
fn test_depth() {
    let scope = Scope::new();
    assert_eq!(scope.depth(), 1);
    assert!(scope.is_root());
    let scope = scope.push().push();
    assert_eq!(scope.depth(), 3);
    assert!(!scope.is_root());
}

#[test]
fn test_environment_push_pop() {
    let (_interner, x, _) = names();
    let mut env = Environment::new();
    env.define(x, Value::Int(1));

    env.push_scope();
    env.define(x, Value::Int(2));
    assert_eq!(env.depth(), 2);
    assert_eq!(env.lookup(x), Some(&Value::Int(2)));

    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup(x), Some(&Value::Int(1)));
}

#[test]
fn test_environment_pop_at_root_keeps_bindings() {
    let (_interner, x, _) = names();
    let mut env = Environment::new();
    env.define(x, Value::Int(1));
    env.pop_scope();
    env.pop_scope();
    assert_eq!(env.depth(), 1);
    assert_eq!(env.lookup(x), Some(&Value::Int(1)));
}

#[test]
fn test_environment_round_trips_scope() {
    let (_interner, x, _) = names();
    let mut scope = Scope::new();
    scope.define(x, Value::string("kept"));
    let env = Environment::from_scope(scope.push());
    assert_eq!(env.depth(), 2);

    let scope = env.into_scope();
    assert_eq!(scope.get(x), Some(&Value::string("kept")));
}

/// Operations on a scope chain, for checking it against a plain stack of maps.
#[derive(Clone, Debug)]
enum Op {
    Define(u32, i64),
    Assign(u32, i64),
    Push,
    Pop,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..4u32, any::<i64>()).prop_map(|(n, v)| Op::Define(n, v)),
        (0..4u32, any::<i64>()).prop_map(|(n, v)| Op::Assign(n, v)),
        Just(Op::Push),
        Just(Op::Pop),
    ]
}

proptest! {
    #[test]
    fn prop_chain_matches_stack_model(ops in prop::collection::vec(op(), 0..64)) {
        let interner = StringInterner::new();
        let names: Vec<Name> = (0..4).map(|n| interner.intern(&format!("v{n}"))).collect();

        let mut env = Environment::new();
        let mut model: Vec<FxHashMap<u32, i64>> = vec![FxHashMap::default()];

        for op in ops {
            match op {
                Op::Define(n, v) => {
                    env.define(names[n as usize], Value::Int(v));
                    if let Some(frame) = model.last_mut() {
                        frame.insert(n, v);
                    }
                }
                Op::Assign(n, v) => {
                    let result = env.assign(names[n as usize], Value::Int(v));
                    match model.iter_mut().rev().find(|frame| frame.contains_key(&n)) {
                        Some(frame) => {
                            frame.insert(n, v);
                            prop_assert_eq!(result, Ok(Value::Int(v)));
                        }
                        None => {
                            prop_assert_eq!(result, Err(UnboundVariable { name: names[n as usize] }));
                        }
                    }
                }
                Op::Push => {
                    env.push_scope();
                    model.push(FxHashMap::default());
                }
                Op::Pop => {
                    env.pop_scope();
                    if model.len() > 1 {
                        model.pop();
                    }
                }
            }

            prop_assert_eq!(env.depth(), model.len());
            for (n, &name) in (0u32..).zip(&names) {
                let expected = model
                    .iter()
                    .rev()
                    .find_map(|frame| frame.get(&n))
                    .map(|&v| Value::Int(v));
                prop_assert_eq!(env.lookup(name), expected.as_ref());
            }
        }
    }
}
