use super::{load_settings_from, parse_bind_addr, Settings};

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn parses_plain_socket_address() {
    let addr = parse_bind_addr("127.0.0.1:3000").expect("addr");
    assert_eq!(addr.port(), 3000);
    assert!(addr.ip().is_loopback());
}

#[test]
fn port_only_binds_all_interfaces() {
    let addr = parse_bind_addr(":8080").expect("addr");
    assert_eq!(addr.to_string(), "0.0.0.0:8080");
}

#[test]
fn strips_http_scheme_from_bind_address() {
    let addr = parse_bind_addr(" http://127.0.0.1:4000 ").expect("addr");
    assert_eq!(addr.port(), 4000);
}

#[test]
fn rejects_garbage_bind_address() {
    assert!(parse_bind_addr("localhost").is_err());
}

#[test]
fn file_values_override_defaults() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("colors_server_config_test_{suffix}.toml"));
    fs::write(&path, "bind_addr = \"127.0.0.1:4100\"\nmax_body_bytes = \"512\"\n")
        .expect("write config");

    let settings = load_settings_from(&path);
    fs::remove_file(&path).expect("cleanup");

    if env::var("SERVER_BIND").is_err() && env::var("APP__BIND_ADDR").is_err() {
        assert_eq!(settings.server_bind, "127.0.0.1:4100");
    }
    if env::var("APP__MAX_BODY_BYTES").is_err() {
        assert_eq!(settings.max_body_bytes, 512);
    }
}

#[test]
fn default_bind_is_local_port_3000() {
    let settings = Settings::default();
    assert_eq!(settings.server_bind, "127.0.0.1:3000");
}

fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("colors_server_{name}_{suffix}.toml"));
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn integer_body_limit_keeps_other_file_values() {
    let path = write_temp_config(
        "integer_limit",
        "bind_addr = \"127.0.0.1:4100\"\nmax_body_bytes = 512\n",
    );

    let settings = load_settings_from(&path);
    fs::remove_file(&path).expect("cleanup");

    if env::var("SERVER_BIND").is_err() && env::var("APP__BIND_ADDR").is_err() {
        assert_eq!(settings.server_bind, "127.0.0.1:4100");
    }
    if env::var("APP__MAX_BODY_BYTES").is_err() {
        assert_eq!(settings.max_body_bytes, 512);
    }
}

#[test]
fn invalid_body_limit_falls_back_to_default_only_for_that_key() {
    let path = write_temp_config(
        "negative_limit",
        "bind_addr = \"127.0.0.1:4200\"\nmax_body_bytes = -1\n",
    );

    let settings = load_settings_from(&path);
    fs::remove_file(&path).expect("cleanup");

    if env::var("SERVER_BIND").is_err() && env::var("APP__BIND_ADDR").is_err() {
        assert_eq!(settings.server_bind, "127.0.0.1:4200");
    }
    if env::var("APP__MAX_BODY_BYTES").is_err() {
        assert_eq!(settings.max_body_bytes, Settings::default().max_body_bytes);
    }
}
