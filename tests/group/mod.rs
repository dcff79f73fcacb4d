use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use error_trail::{classify, has, Error, ErrorKind, Group, SharedError};

use crate::support::plain;

/// Runs one task per entry, each sleeping a little before returning it.
fn run(errors: Vec<Option<SharedError>>) -> Option<Vec<SharedError>> {
    let group = Group::new();
    for (i, error) in errors.into_iter().enumerate() {
        group.go(move || {
            thread::sleep(Duration::from_millis((i as u64 * 7) % 23));
            match error {
                Some(error) => Err(error),
                None => Ok(()),
            }
        });
    }
    group.wait().map(|list| list.into_iter().collect())
}

fn same_elements(actual: &[SharedError], expected: &[&SharedError]) -> bool {
    actual.len() == expected.len()
        && expected
            .iter()
            .all(|wanted| actual.iter().any(|error| Arc::ptr_eq(error, *wanted)))
}

#[test]
fn no_subtasks() {
    assert!(run(vec![]).is_none());
}

#[test]
fn only_successes() {
    assert!(run(vec![None]).is_none());
    assert!(run(vec![None, None, None]).is_none());
}

#[test]
fn one_error() {
    let err1: SharedError = Error::new("err1").into_shared();
    let errors = run(vec![Some(Arc::clone(&err1))]);
    assert!(errors.is_some_and(|errors| same_elements(&errors, &[&err1])));
}

#[test]
fn one_error_among_successes() {
    let err1: SharedError = Error::new("err1").into_shared();
    let errors = run(vec![None, Some(Arc::clone(&err1))]);
    assert!(errors.is_some_and(|errors| same_elements(&errors, &[&err1])));
}

#[test]
fn multiple_errors_in_any_order() {
    let err1: SharedError = Error::new("err1").into_shared();
    let err2: SharedError = Arc::new(plain("err2"));

    let errors = run(vec![Some(Arc::clone(&err1)), Some(Arc::clone(&err2))]);
    assert!(errors.is_some_and(|errors| same_elements(&errors, &[&err1, &err2])));

    let errors = run(vec![
        Some(Arc::clone(&err1)),
        None,
        None,
        Some(Arc::clone(&err2)),
        None,
    ]);
    assert!(errors.is_some_and(|errors| same_elements(&errors, &[&err2, &err1])));
}

#[test]
fn every_task_runs_without_fail_fast() {
    let finished = Arc::new(AtomicUsize::new(0));
    let group = Group::new();
    for i in 0..8 {
        let finished = Arc::clone(&finished);
        group.go(move || {
            thread::sleep(Duration::from_millis(i * 3));
            finished.fetch_add(1, Ordering::SeqCst);
            if i == 0 {
                return Err(Error::builder().kind(ErrorKind::CLIENT).msg("first").build());
            }
            Ok(())
        });
    }

    let errors = group.wait();
    assert_eq!(finished.load(Ordering::SeqCst), 8);
    assert_eq!(errors.map(|errors| errors.len()), Some(1));
}

#[test]
fn panicking_task_is_recorded() {
    let group = Group::new();
    group.go(|| -> Result<(), Error> { panic!("worker exploded") });
    group.go(|| Ok::<(), Error>(()));

    let errors = group.wait();
    let errors = errors.as_ref();
    assert!(errors.is_some_and(|errors| has(errors, ErrorKind::SERVER)));
    let msg = errors.and_then(|errors| classify::find::<Error>(errors)).map(|err| err.to_string());
    assert_eq!(msg.as_deref(), Some("task panicked: worker exploded"));
}

#[test]
fn group_result_is_classifiable() {
    let group = Group::new();
    group.go(|| Err(Error::builder().kind(ErrorKind::TRANSIENT).msg("timeout").build()));
    group.go(|| Err(plain("disk")));

    let errors = group.wait();
    assert!(errors.as_ref().is_some_and(|errors| has(errors, ErrorKind::TRANSIENT)));
    assert_eq!(errors.map(|errors| errors.len()), Some(2));
}
