use std::io;

use error_trail::traits::{ResultExt, TransientError};
use error_trail::{classify, Error, ErrorCode, ErrorKind, ErrorList, Op};

use crate::support::plain;

#[inline(never)]
fn read_settings() -> Result<String, Error> {
    Err::<String, _>(plain("permission denied")).op("settings.read")
}

#[test]
fn op_wraps_the_error() {
    let err = read_settings().unwrap_err();
    assert_eq!(classify::ops(&err).as_slice(), [Op::new("settings.read")]);
    assert_eq!(err.to_string(), "permission denied");
    assert!(classify::find::<io::Error>(&err).is_some());
}

#[test]
fn op_leaves_successes_alone() {
    let ok: Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.op("noop").ok(), Some(7));
}

#[test]
fn wrapping_trace_starts_at_the_caller() {
    let err = read_settings().unwrap_err();
    let first = err.stack().and_then(|stack| stack.frames().first().map(|frame| frame.short_name()));
    assert_eq!(first.as_deref(), Some("read_settings"));
}

#[test]
fn classify_sets_facets_around_the_error() {
    let err = "x"
        .parse::<u16>()
        .classify(|b| b.op("port.parse").kind(ErrorKind::CLIENT).code(ErrorCode::INVALID).msg("bad port"))
        .unwrap_err();

    assert_eq!(classify::client_msg(&err), "bad port");
    assert_eq!(classify::code(&err), ErrorCode::INVALID);
    assert!(err.to_string().starts_with("bad port: "));
}

#[test]
#[should_panic(expected = "multiple causes")]
fn classify_rejects_a_second_cause() {
    let _ = Err::<(), _>(plain("a")).classify(|b| b.cause(plain("b")));
}

#[test]
fn transient_classification_follows_the_kind() {
    let transient = Error::builder().kind(ErrorKind::SERVER | ErrorKind::TRANSIENT).build();
    assert!(transient.is_transient());
    assert!(!transient.is_permanent());

    let wrapped = Error::builder().msg("retry later").cause(transient.clone()).build();
    assert!(wrapped.is_transient());

    let permanent = Error::builder().kind(ErrorKind::CLIENT).build();
    assert!(permanent.is_permanent());
    assert!(Error::new("unclassified").is_permanent());
}

#[test]
fn list_is_transient_if_any_element_is() {
    let mut list = ErrorList::new();
    list.add(Error::builder().kind(ErrorKind::CLIENT).build());
    assert!(list.is_permanent());

    list.add(Error::builder().kind(ErrorKind::TRANSIENT).build());
    assert!(list.is_transient());
}

#[test]
fn io_errors_are_classified_by_kind() {
    assert!(io::Error::new(io::ErrorKind::TimedOut, "slow").is_transient());
    assert!(io::Error::new(io::ErrorKind::ConnectionReset, "reset").is_transient());
    assert!(io::Error::new(io::ErrorKind::NotFound, "missing").is_permanent());
}
