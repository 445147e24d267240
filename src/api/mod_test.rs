use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::{ApiError, Config};

#[test]
fn test_config_default_binds_localhost_1997() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, 1997);
    assert_eq!(config.addr(), "127.0.0.1:1997".parse::<SocketAddr>().unwrap());
}

#[test]
fn test_config_addr_uses_overrides() {
    let config = Config {
        host: "0.0.0.0".parse().unwrap(),
        port: 8080,
    };
    assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn test_bind_error_names_the_address() {
    let addr: SocketAddr = "127.0.0.1:1997".parse().unwrap();
    let source = std::io::Error::from(std::io::ErrorKind::AddrInUse);
    let err = ApiError::Bind { addr, source };

    assert!(err.to_string().starts_with("Failed to bind 127.0.0.1:1997:"));
}
