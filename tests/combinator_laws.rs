//! Property-based tests for the combinator laws.
//!
//! - **Identity Law**: `fa.map(|x| x) == fa`
//! - **Composition Law**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//! - **Short-circuit**: on failure, `map`/`bind` callbacks never run and the
//!   payload comes back unchanged
//! - **Fallback laziness**: a fallback factory runs only on failure
//! - **Accumulation order**: `Validation` keeps every error, left to right

use lambars_adt::combinator::{Combinators, Sequence};
use lambars_adt::control::{Either2, NonEmpty, Validation};
use proptest::prelude::*;
use std::cell::Cell;

fn validation_strategy() -> impl Strategy<Value = Validation<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Validation::success),
        prop::collection::vec(any::<String>(), 1..4).prop_map(|errors| {
            Validation::try_failures(errors).unwrap_or_else(|| Validation::failure(String::new()))
        }),
    ]
}

fn either2_strategy() -> impl Strategy<Value = Either2<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either2::First),
        any::<i32>().prop_map(Either2::Last),
    ]
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(Combinators::map(value, |x| x), value);
    }

    #[test]
    fn prop_result_composition_law(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = Combinators::map(Combinators::map(value.clone(), function1), function2);
        let right = Combinators::map(value, |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_validation_identity_law(value in validation_strategy()) {
        prop_assert_eq!(Combinators::map(value.clone(), |x| x), value);
    }

    #[test]
    fn prop_either2_composition_law(value in either2_strategy()) {
        let function1 = |n: i32| i64::from(n);
        let function2 = |n: i64| n - 1;

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Short-circuit
// =============================================================================

proptest! {
    #[test]
    fn prop_result_bind_short_circuits(error in any::<String>()) {
        let calls = Cell::new(0);
        let failed: Result<i32, String> = Err(error.clone());
        let bound = failed.bind(|value| {
            calls.set(calls.get() + 1);
            Ok::<i32, String>(value)
        });
        prop_assert_eq!(bound, Err(error));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn prop_either2_map_moves_failure_through(payload in any::<String>()) {
        let calls = Cell::new(0);
        let failed: Either2<String, i32> = Either2::First(payload.clone());
        let mapped = failed.map(|value| {
            calls.set(calls.get() + 1);
            value
        });
        prop_assert_eq!(mapped, Either2::First(payload));
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn prop_sequence_fail_fast_pulls_up_to_first_failure(
        values in prop::collection::vec(prop::option::of(any::<u8>()), 0..16)
    ) {
        let pulled = Cell::new(0_usize);
        let collected = Option::sequence(values.iter().copied().inspect(|_| pulled.set(pulled.get() + 1)));

        match values.iter().position(Option::is_none) {
            Some(position) => {
                prop_assert_eq!(collected, None);
                prop_assert_eq!(pulled.get(), position + 1);
            }
            None => {
                prop_assert_eq!(collected, Some(values.iter().flatten().copied().collect::<Vec<_>>()));
                prop_assert_eq!(pulled.get(), values.len());
            }
        }
    }
}

// =============================================================================
// Fallback Laziness
// =============================================================================

proptest! {
    #[test]
    fn prop_fallback_factory_runs_only_on_failure(value in any::<Option<i32>>(), replacement in any::<i32>()) {
        let calls = Cell::new(0);
        let recovered = value.fallback_to_with(|()| {
            calls.set(calls.get() + 1);
            Some(replacement)
        });

        prop_assert_eq!(calls.get(), usize::from(value.is_none()));
        prop_assert_eq!(recovered, Some(value.unwrap_or(replacement)));
    }
}

// =============================================================================
// Accumulation Order
// =============================================================================

proptest! {
    #[test]
    fn prop_validation_sequence_concatenates_errors_in_order(
        inputs in prop::collection::vec(validation_strategy(), 0..8)
    ) {
        let expected: Vec<String> = inputs
            .iter()
            .filter_map(|input| input.errors().cloned())
            .flat_map(NonEmpty::into_vec)
            .collect();

        let collected = Validation::sequence(inputs);

        match collected.into_result() {
            Ok(values) => prop_assert!(expected.is_empty() && values.len() <= 8),
            Err(errors) => prop_assert_eq!(errors.into_vec(), expected),
        }
    }
}
