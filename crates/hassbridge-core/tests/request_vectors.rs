//! Service call payload -> statsd line vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]


use hassbridge_core::protocol::request::MetricRequest;
use hassbridge_core::Result;

use vector_loader::TestVector;

fn run(v: &TestVector) -> Result<String> {
    let req = MetricRequest::from_data(&v.data)?;
    let gauge = req.into_gauge(&v.prefix, v.sample_rate)?;
    Ok(String::from_utf8(gauge.encode().to_vec()).unwrap())
}

fn check_all(file: &str) {
    let vectors = vector_loader::load(file);
    assert!(!vectors.is_empty(), "{file} has no vectors");
    for v in &vectors {
        match (&v.expect, &v.expect_error) {
            (Some(exp), None) => {
                let line = run(v).unwrap_or_else(|e| panic!("{}: unexpected error {e}", v.description));
                assert_eq!(line, exp.line, "{}", v.description);
            }
            (None, Some(exp)) => {
                let err = run(v).expect_err(&v.description);
                assert_eq!(err.error_code().as_str(), exp.code, "{}", v.description);
            }
            _ => panic!("{}: vector needs exactly one of expect/expect_error", v.description),
        }
    }
}

#[test]
fn accepted_requests() {
    check_all("accepted.json");
}

#[test]
fn rejected_requests() {
    check_all("rejected.json");
}
