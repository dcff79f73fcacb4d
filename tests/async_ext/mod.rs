//! Integration tests for async extensions.

use std::time::Duration;

use error_trail::async_ext::AsyncGroup;
use error_trail::{classify, has, Error, ErrorKind};
use tokio::task::JoinError;

use crate::support::plain;

#[tokio::test]
async fn empty_group_has_no_errors() {
    let group = AsyncGroup::new();
    assert!(group.is_empty());
    assert!(group.wait().await.is_none());
}

#[tokio::test]
async fn successes_produce_no_errors() {
    let mut group = AsyncGroup::new();
    for _ in 0..4 {
        group.spawn(async { Ok::<(), Error>(()) });
    }
    assert_eq!(group.len(), 4);
    assert!(group.wait().await.is_none());
}

#[tokio::test]
async fn errors_are_collected_in_completion_order() {
    let mut group = AsyncGroup::new();
    group.spawn(async {
        tokio::time::sleep(Duration::from_millis(40)).await;
        Err(Error::builder().kind(ErrorKind::SERVER).msg("slow").build())
    });
    group.spawn(async { Ok::<(), Error>(()) });
    group.spawn(async {
        Err(Error::builder().kind(ErrorKind::CLIENT).msg("fast").build())
    });

    let errors = group.wait().await;
    let messages: Vec<String> = errors
        .iter()
        .flat_map(|list| list.iter().map(|error| error.to_string()))
        .collect();
    assert_eq!(messages, ["fast", "slow"]);
}

#[tokio::test]
async fn foreign_errors_are_accepted() {
    let mut group = AsyncGroup::new();
    group.spawn(async { Err(plain("disk")) });

    let errors = group.wait().await;
    assert_eq!(errors.map(|list| list.to_string()).as_deref(), Some("disk"));
}

#[tokio::test]
async fn panicking_task_contributes_a_join_error() {
    let mut group = AsyncGroup::new();
    group.spawn(async { Ok::<(), Error>(()) });
    group.spawn(async {
        if true {
            panic!("worker exploded");
        }
        Ok::<(), Error>(())
    });

    let errors = group.wait().await;
    let errors = errors.as_ref();
    assert_eq!(errors.map(|list| list.len()), Some(1));
    assert!(errors.is_some_and(|list| has(list, ErrorKind::SERVER)));
    assert!(errors.and_then(|list| classify::find::<JoinError>(list)).is_some_and(JoinError::is_panic));
}
