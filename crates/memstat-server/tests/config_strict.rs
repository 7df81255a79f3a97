#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::net::SocketAddr;

use memstat_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  lisen: "0.0.0.0:9090" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(
        cfg.server.listen_addr().unwrap(),
        "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
    );
}

#[test]
fn custom_listen() {
    let cfg = config::load_from_str(
        r#"
version: 1
server:
  listen: "127.0.0.1:9100"
"#,
    )
    .expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9100);
}

#[test]
fn reject_bad_version_and_listen() {
    assert!(config::load_from_str("version: 2\n").is_err());
    assert!(config::load_from_str("version: 1\nserver:\n  listen: \"localhost\"\n").is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("definitely/not/here/memstat.yaml").expect("defaults");
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");

    // the strict loader still reports the missing file
    assert!(config::load_from_file("definitely/not/here/memstat.yaml").is_err());
}
