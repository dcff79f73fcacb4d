use error_trail::{ErrorCode, ErrorKind, Op};

#[test]
fn kind_set_operations() {
    let kind = ErrorKind::SERVER | ErrorKind::TRANSIENT;
    assert!(kind.intersects(ErrorKind::TRANSIENT | ErrorKind::CLIENT));
    assert!(!kind.contains(ErrorKind::TRANSIENT | ErrorKind::CLIENT));
    assert_eq!(kind & ErrorKind::SERVER, ErrorKind::SERVER);
    assert!(ErrorKind::default().is_empty());
}

#[test]
fn kind_display_names_flags() {
    assert_eq!(ErrorKind::empty().to_string(), "unclassified");
    assert_eq!((ErrorKind::CLIENT | ErrorKind::TRANSIENT).to_string(), "client|transient");

    const THROTTLED: ErrorKind = ErrorKind::from_bits(1 << 8);
    assert_eq!((ErrorKind::SERVER | THROTTLED).to_string(), "server|0x100");
}

#[test]
fn code_names_and_custom_codes() {
    assert_eq!(ErrorCode::default(), ErrorCode::UNEXPECTED);
    assert_eq!(ErrorCode::ALREADY_EXISTS.to_string(), "already_exists");
    assert_eq!(ErrorCode::NOT_FOUND.value(), 6);

    const QUOTA: ErrorCode = ErrorCode::new(100);
    assert_eq!(QUOTA.name(), None);
    assert_eq!(QUOTA.to_string(), "code(100)");
}

#[test]
fn op_compares_with_strings() {
    let op = Op::new("db.findUser");
    assert_eq!(op, "db.findUser");
    assert_eq!(Op::from(String::from("db.findUser")), op);
    assert!(Op::default().is_empty());
}
