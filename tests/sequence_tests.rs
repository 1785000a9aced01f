//! `Sequence` over every outcome type.
//!
//! Fail-fast types must not pull items past the first failure; the
//! accumulating `Validation` must pull all of them.

use lambars_adt::Error;
use lambars_adt::combinator::Sequence;
use lambars_adt::control::{Either2, Validation};
use rstest::rstest;
use std::cell::RefCell;

fn recorded<'a, T: 'a>(
    items: Vec<T>,
    pulled: &'a RefCell<Vec<usize>>,
) -> impl Iterator<Item = T> + 'a {
    items.into_iter().enumerate().map(move |(position, item)| {
        pulled.borrow_mut().push(position);
        item
    })
}

#[rstest]
fn option_all_present() {
    let pulled = RefCell::new(Vec::new());
    let collected = Option::sequence(recorded(vec![Some('a'), Some('b')], &pulled));
    assert_eq!(collected, Some(vec!['a', 'b']));
    assert_eq!(pulled.into_inner(), vec![0, 1]);
}

#[rstest]
#[case(vec![Err("e0"), Ok(1), Ok(2)], "e0", vec![0])]
#[case(vec![Ok(0), Err("e1"), Err("e2")], "e1", vec![0, 1])]
#[case(vec![Ok(0), Ok(1), Err("e2")], "e2", vec![0, 1, 2])]
fn result_stops_after_first_error(
    #[case] items: Vec<Result<i32, &'static str>>,
    #[case] expected_error: &str,
    #[case] expected_pulls: Vec<usize>,
) {
    let pulled = RefCell::new(Vec::new());
    let collected = Result::sequence(recorded(items, &pulled));
    assert_eq!(collected, Err(expected_error));
    assert_eq!(pulled.into_inner(), expected_pulls);
}

#[rstest]
fn either2_stops_after_first_failure() {
    let pulled = RefCell::new(Vec::new());
    let items: Vec<Either2<&str, i32>> = vec![Either2::First("stop"), Either2::Last(1)];
    let collected = Either2::sequence(recorded(items, &pulled));
    assert_eq!(collected, Either2::First("stop"));
    assert_eq!(pulled.into_inner(), vec![0]);
}

#[rstest]
fn validation_pulls_everything() {
    let pulled = RefCell::new(Vec::new());
    let items: Vec<Validation<i32>> = vec![
        Validation::failure(Error::from_message("first")),
        Validation::success(1),
        Validation::failure(Error::from_message("second")),
        Validation::success(3),
    ];
    let collected = Validation::sequence(recorded(items, &pulled));

    let messages: Vec<String> = collected
        .errors()
        .map(|errors| errors.iter().map(|error| error.message().to_string()).collect())
        .unwrap_or_default();
    assert_eq!(messages, vec!["first", "second"]);
    assert_eq!(pulled.into_inner(), vec![0, 1, 2, 3]);
}

#[rstest]
fn unbounded_iterator_is_cut_at_first_failure() {
    let pulled = RefCell::new(0_usize);
    let collected = Result::sequence((0_u32..).map(|index| {
        *pulled.borrow_mut() += 1;
        if index < 3 { Ok(index) } else { Err(format!("stopped at {index}")) }
    }));
    assert_eq!(collected, Err("stopped at 3".to_string()));
    assert_eq!(pulled.into_inner(), 4);
}

#[rstest]
fn result_traverse_parses_in_order() {
    let parsed = Result::traverse(["3", "1", "2"], str::parse::<u8>);
    assert_eq!(parsed, Ok(vec![3, 1, 2]));
}

#[rstest]
fn empty_sequence_succeeds_for_every_type() {
    assert_eq!(Option::sequence(Vec::<Option<u8>>::new()), Some(vec![]));
    assert_eq!(Result::sequence(Vec::<Result<u8, ()>>::new()), Ok(vec![]));
    assert_eq!(
        Validation::sequence(Vec::<Validation<u8, ()>>::new()),
        Validation::success(vec![])
    );
}
