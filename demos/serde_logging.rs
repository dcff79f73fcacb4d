//! Example: Structured Logging with Serde
//!
//! This example shows how an `Error` chain serializes into a structured JSON
//! record, with the stack trace rendered as `"<function> <file>:<line>"`
//! strings. This is useful for sending error reports to logging
//! infrastructure (e.g., ELK stack, Splunk, CloudWatch).

use error_trail::{classify, Error, ErrorCode, ErrorKind, ErrorList, Op};
use serde::Serialize;

#[derive(Debug)]
struct PoolError {
    details: String,
}

impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl std::error::Error for PoolError {}

/// Log record combining the node itself with values computed over its chain.
#[derive(Serialize)]
struct Report<'a> {
    ops: Vec<&'a str>,
    client_msg: &'a str,
    error: &'a Error,
}

fn load_profile(user_id: u64) -> Result<(), Error> {
    const OP: Op = Op::new("db.loadProfile");
    let cause = PoolError { details: "Database connection timeout".to_string() };
    Err(Error::builder()
        .op(OP)
        .kind(ErrorKind::SERVER | ErrorKind::TRANSIENT)
        .code(ErrorCode::IO)
        .msg(format!("loading profile {}", user_id))
        .cause(cause)
        .build())
}

fn main() {
    // 1. Produce an error two layers deep
    let error = match load_profile(42) {
        Ok(()) => return,
        Err(err) => Error::builder().op(Op::new("api.getProfile")).cause(err).build(),
    };

    // 2. Serialize the chain with its classification
    let ops = classify::ops(&error);
    let report = Report {
        ops: ops.iter().map(Op::as_str).collect(),
        client_msg: classify::client_msg(&error),
        error: &error,
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("Structured Error Log:\n{}", json),
        Err(e) => eprintln!("Failed to serialize error: {}", e),
    }

    // 3. Lists serialize as their messages
    let mut batch = ErrorList::new();
    batch.add(error);
    batch.add(Error::builder().kind(ErrorKind::CLIENT).msg("invalid page size").build());
    match serde_json::to_string(&batch) {
        Ok(json) => println!("Batch:\n{}", json),
        Err(e) => eprintln!("Failed to serialize batch: {}", e),
    }
}
