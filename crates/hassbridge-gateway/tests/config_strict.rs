#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use hassbridge_gateway::config;

#[test]
fn empty_document_uses_defaults() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    let r = cfg.statsd.resolve().unwrap();
    assert_eq!(r.host, "localhost");
    assert_eq!(r.port, 8125);
    assert_eq!(r.prefix, "hass");
    assert_eq!(r.sample_rate, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
}

#[test]
fn overrides_and_rate_alias() {
    let ok = r#"
version: 1
gateway:
  listen: "127.0.0.1:9000"
statsd:
  host: "dd-agent"
  port: 9125
  prefix: "home"
  rate: 4
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let r = cfg.statsd.resolve().unwrap();
    assert_eq!(r.host, "dd-agent");
    assert_eq!(r.port, 9125);
    assert_eq!(r.prefix, "home");
    assert_eq!(r.sample_rate, 4);
    assert_eq!(cfg.gateway.listen_addr().unwrap().port(), 9000);
}

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
statsd:
  hots: "typo"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.error_code().as_str(), "CONFIG");
}

#[test]
fn invalid_values_are_fatal() {
    for bad in [
        "statsd: { port: 0 }",
        "statsd: { port: 70000 }",
        "statsd: { port: -1 }",
        "statsd: { sample_rate: 0 }",
        "statsd: { sample_rate: -2 }",
        "statsd: { host: \"\" }",
        "statsd: { prefix: \"\" }",
        "statsd: { prefix: \"a|b\" }",
        "gateway: { listen: \"nowhere\" }",
        "version: 2",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.error_code().as_str(), "CONFIG", "{bad}");
    }
}
