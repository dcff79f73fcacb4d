use std::error::Error as StdError;
use std::sync::Arc;

use error_trail::classify::{self, same_error, Target};
use error_trail::{Error, ErrorCode, ErrorKind, Op, SharedError};

use crate::support::{buff_user, find_user, plain, OtherError, SomeError, ERR_CLOSED};


#[test]
fn kind_of_foreign_and_kindless_errors_is_empty() {
    assert!(classify::kind(&plain("")).is_empty());
    assert!(classify::kind(&Error::new("kindless")).is_empty());
}

#[test]
fn kind_is_decided_by_the_outermost_classified_node() {
    let err = Error::builder().kind(ErrorKind::CLIENT).build();
    assert_eq!(classify::kind(&err), ErrorKind::CLIENT);

    let inner = Error::builder().kind(ErrorKind::SERVER).build();
    let outer = Error::builder().msg("wrapped").cause(inner).build();
    assert_eq!(classify::kind(&outer), ErrorKind::SERVER);

    let inner = Error::builder().msg("1").kind(ErrorKind::SERVER).build();
    let outer = Error::builder().msg("2").kind(ErrorKind::CLIENT).cause(inner).build();
    assert_eq!(classify::kind(&outer), ErrorKind::CLIENT);
    assert!(classify::is(&outer, ErrorKind::CLIENT));
    assert!(!classify::is(&outer, ErrorKind::SERVER));
}

#[test]
fn code_recurses_and_defaults_to_unexpected() {
    assert_eq!(classify::code(&plain("")), ErrorCode::UNEXPECTED);
    assert_eq!(classify::code(&Error::builder().build()), ErrorCode::UNEXPECTED);

    let err = Error::builder()
        .kind(ErrorKind::SERVER | ErrorKind::TRANSIENT)
        .code(ErrorCode::IO)
        .build();
    assert_eq!(classify::code(&err), ErrorCode::IO);

    let inner = Error::builder().code(ErrorCode::NOT_FOUND).build();
    let outer = Error::builder().msg("wrapped").cause(inner).build();
    assert_eq!(classify::code(&outer), ErrorCode::NOT_FOUND);
}

#[test]
fn ops_are_listed_outermost_first() {
    assert!(classify::ops(&plain("msg1")).is_empty());
    assert!(classify::ops(&Error::new("msg1")).is_empty());

    let err = Error::builder().op("op1").msg("msg1").build();
    assert_eq!(classify::ops(&err).as_slice(), [Op::new("op1")]);

    let err = Error::builder().op("op2").msg("msg2").cause(plain("msg1")).build();
    assert_eq!(classify::ops(&err).as_slice(), [Op::new("op2")]);

    let inner = Error::builder().op("op1").msg("msg1").build();
    let outer = Error::builder().op("op2").msg("msg2").cause(inner).build();
    assert_eq!(classify::ops(&outer).as_slice(), [Op::new("op2"), Op::new("op1")]);
}

#[test]
fn ops_stop_at_foreign_causes() {
    let inner = Error::builder().op("hidden").build();
    let foreign = SomeError { code: 1, cause: Some(Box::new(inner)) };
    let outer = Error::builder().op("visible").cause(foreign).build();
    assert_eq!(classify::ops(&outer).as_slice(), [Op::new("visible")]);
}

#[test]
fn client_msg_comes_from_the_first_client_node() {
    assert_eq!(classify::client_msg(&plain("msg1")), "");

    let err = Error::builder().msg("msg1").kind(ErrorKind::CLIENT).build();
    assert_eq!(classify::client_msg(&err), "msg1");

    let err = Error::builder().msg("msg2").cause(plain("msg1")).build();
    assert_eq!(classify::client_msg(&err), "");

    let inner = Error::builder().msg("msg1").kind(ErrorKind::CLIENT).build();
    let outer = Error::builder().msg("msg2").cause(inner).build();
    assert_eq!(classify::client_msg(&outer), "msg1");
}

#[test]
fn unwrap_returns_the_direct_cause() {
    assert!(classify::unwrap(&plain("err1")).is_none());
    assert!(classify::unwrap(&Error::new("err2")).is_none());

    let wrapped = Error::wrap(ERR_CLOSED);
    let cause = classify::unwrap(&wrapped).map(|cause| cause.to_string());
    assert_eq!(cause.as_deref(), Some("file already closed"));

    let inner: SharedError = Error::new("err2").into_shared();
    let outer = Error::builder().msg("err").cause(Arc::clone(&inner)).build();
    let cause = classify::unwrap(&outer).map(|cause| same_error(cause, &*inner));
    assert_eq!(cause, Some(true));
}

#[test]
fn trace_belongs_to_the_deepest_node() {
    let err = buff_user(1, "a").unwrap_err();
    let inner = classify::unwrap(&err).and_then(|cause| cause.downcast_ref::<Error>());

    let deepest = inner.and_then(Error::stack).map(|stack| stack as *const _);
    let traced = classify::trace(&err).map(|stack| stack as *const _);
    assert!(err.stack().is_none());
    assert!(deepest.is_some());
    assert_eq!(traced, deepest);

    assert!(classify::trace(&plain("foreign")).is_none());
}

#[test]
fn layered_service_errors() {
    let err = buff_user(1, "a").unwrap_err();
    assert!(classify::is(&err, ErrorKind::CLIENT));
    assert!(classify::is(&err, ErrorCode::NOT_FOUND));
    assert!(!classify::is(&err, ErrorKind::TRANSIENT));
    assert_eq!(classify::client_msg(&err), "user not found: 1");
    assert_eq!(err.to_string(), "user not found: 1");
    assert_eq!(
        classify::ops(&err).as_slice(),
        [Op::new("svc.buffUser"), Op::new("db.findUser")]
    );

    let err = buff_user(2, "a").unwrap_err();
    assert!(classify::is(&err, ErrorKind::TRANSIENT));
    assert!(classify::is(&err, ErrorCode::IO));
    assert_eq!(classify::client_msg(&err), "");

    assert!(buff_user(3, "a").is_ok());

    let err = buff_user(3, "b").unwrap_err();
    assert!(classify::is(&err, ErrorKind::CLIENT));
    assert!(classify::is(&err, ErrorCode::INVALID));
    assert!(!classify::is(&err, ErrorKind::TRANSIENT));
    assert_eq!(classify::client_msg(&err), "unknown buff: b");
}

#[test]
fn find_locates_typed_errors_in_the_chain() {
    let err = plain("err1");
    assert!(classify::find::<std::io::Error>(&err).is_some());
    assert!(classify::find::<Error>(&err).is_none());

    let err = Error::builder()
        .op("op1")
        .kind(ErrorKind::CLIENT)
        .cause(SomeError::new(1234))
        .build();
    let found = classify::find::<Error>(&err);
    assert_eq!(found.map(Error::kind), Some(ErrorKind::CLIENT));
    assert_eq!(found.and_then(Error::op), Some(&Op::new("op1")));
    assert_eq!(classify::find::<SomeError>(&err).map(|e| e.code), Some(1234));
    assert!(classify::find::<OtherError>(&err).is_none());
}

#[test]
fn find_follows_foreign_sources() {
    let deep = SomeError::new(7);
    let foreign = SomeError { code: 1, cause: Some(Box::new(Error::wrap(deep))) };
    let err = Error::wrap(foreign);

    let codes: Vec<u32> = classify::find::<SomeError>(&err).map(|e| e.code).into_iter().collect();
    assert_eq!(codes, [1]);

    let inner = classify::find::<SomeError>(&err)
        .and_then(|e| e.source())
        .and_then(|source| classify::find::<SomeError>(source));
    assert_eq!(inner.map(|e| e.code), Some(7));
}

#[test]
fn targets_convert_from_kinds_codes_and_errors() {
    assert!(matches!(Target::from(ErrorKind::CLIENT), Target::Kind(_)));
    assert!(matches!(Target::from(ErrorCode::IO), Target::Code(_)));
    assert!(matches!(Target::from(&ERR_CLOSED), Target::Error(_)));

    let boxed: Box<dyn StdError + Send + Sync> = Box::new(plain("boxed"));
    assert!(matches!(Target::from(&*boxed), Target::Error(_)));
}

#[test]
fn find_user_fixture_captures_a_trace() {
    let err = find_user(1).unwrap_err();
    assert!(err.stack().is_some_and(|stack| !stack.is_empty()));
}

#[test]
fn shared_error_nodes_stay_visible_as_causes() {
    let inner = Arc::new(find_user(1).unwrap_err());
    let outer = Error::builder().op("svc.load").cause(Arc::clone(&inner)).build();

    assert!(outer.stack().is_none());
    assert_eq!(classify::kind(&outer), ErrorKind::CLIENT);
    assert_eq!(classify::code(&outer), ErrorCode::NOT_FOUND);
    assert_eq!(classify::ops(&outer).as_slice(), [Op::new("svc.load"), Op::new("db.findUser")]);
    assert!(classify::unwrap(&outer).is_some_and(|cause| cause.is::<Error>()));
    assert!(classify::is(&outer, &*inner));
    assert!(classify::is(&outer, &inner));

    assert_eq!(classify::kind(&inner), ErrorKind::CLIENT);
    assert_eq!(classify::ops(&inner).as_slice(), [Op::new("db.findUser")]);
}
