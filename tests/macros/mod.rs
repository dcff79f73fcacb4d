use error_trail::{classify, e, Error, ErrorCode, ErrorKind, Op};

use crate::support::{plain, ERR_CLOSED};

const OP: Op = Op::new("db.findUser");

#[test]
fn e_builds_with_every_facet() {
    let id = 1;
    let err = e!(op(OP), kind(ErrorKind::CLIENT), code(ErrorCode::NOT_FOUND), msg("user not found: {}", id));

    assert_eq!(err.op(), Some(&OP));
    assert_eq!(err.kind(), ErrorKind::CLIENT);
    assert_eq!(err.code(), ErrorCode::NOT_FOUND);
    assert_eq!(err.msg(), "user not found: 1");
    assert!(err.stack().is_some());
}

#[test]
fn e_accepts_facets_in_any_order() {
    let err = e!(cause(ERR_CLOSED), kind(ErrorKind::SERVER), kind(ErrorKind::TRANSIENT), msg("flush"));
    assert_eq!(err.kind(), ErrorKind::SERVER | ErrorKind::TRANSIENT);
    assert_eq!(err.to_string(), "flush: file already closed");
}

#[test]
fn e_passes_message_expressions_through() {
    let msg = String::from("prepared");
    let err = e!(msg(msg));
    assert_eq!(err.msg(), "prepared");
}

#[test]
fn e_wraps_without_capturing_again() {
    let inner = e!(op("inner"), code(ErrorCode::IO));
    let outer = e!(op("outer"), cause(inner));
    assert!(outer.stack().is_none());
    assert_eq!(classify::code(&outer), ErrorCode::IO);
}

#[test]
fn e_with_absent_cause_is_none() {
    let absent: Option<std::io::Error> = None;
    assert!(e!(op(OP), msg("lookup"), maybe_cause(absent)).is_none());

    let present = Some(plain("disk"));
    let err: Option<Error> = e!(op(OP), maybe_cause(present));
    assert_eq!(err.map(|err| err.to_string()).as_deref(), Some("disk"));

    assert!(e!(nil()).is_none());
}

#[test]
fn e_without_facets_is_blank() {
    let err = e!();
    assert_eq!(err.to_string(), "");
    assert!(err.kind().is_empty());
}

#[test]
#[should_panic(expected = "multiple messages")]
fn e_panics_on_duplicate_messages() {
    let _ = e!(msg("a"), msg("b"));
}
