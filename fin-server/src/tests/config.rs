use crate::Config;
use crate::tests::EnvGuard;

use googletest::prelude::*;
use serial_test::serial;

#[test]
#[serial]
fn given_clean_environment_when_loaded_then_defaults_apply() {
    let _bind = EnvGuard::remove("BIND_ADDR");
    let _db = EnvGuard::remove("DATABASE_PATH");
    let _secret = EnvGuard::remove("JWT_SECRET");
    let _key = EnvGuard::remove("JWT_PUBLIC_KEY_PATH");
    let _level = EnvGuard::remove("LOG_LEVEL");

    let config = Config::from_env().unwrap();

    assert_that!(config.bind_addr.to_string(), eq("0.0.0.0:8080"));
    assert_that!(config.database_path.to_str().unwrap(), eq("farofino.db"));
    assert_that!(config.log_level, eq(log::LevelFilter::Info));
    assert_that!(config.auth_enabled(), eq(false));
}

#[test]
#[serial]
fn given_bind_addr_when_loaded_then_it_is_used() {
    let _bind = EnvGuard::set("BIND_ADDR", "127.0.0.1:9999");

    let config = Config::from_env().unwrap();

    assert_that!(config.bind_addr.to_string(), eq("127.0.0.1:9999"));
}

#[test]
#[serial]
fn given_invalid_bind_addr_when_loaded_then_fails() {
    let _bind = EnvGuard::set("BIND_ADDR", "not-an-address");

    let result = Config::from_env();

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_jwt_secret_when_loaded_then_auth_is_enabled() {
    let _bind = EnvGuard::remove("BIND_ADDR");
    let _secret = EnvGuard::set("JWT_SECRET", "test-secret-key-at-least-32-bytes");

    let config = Config::from_env().unwrap();

    assert_that!(config.auth_enabled(), eq(true));
}

#[test]
#[serial]
fn given_invalid_log_level_when_loaded_then_fails() {
    let _bind = EnvGuard::remove("BIND_ADDR");
    let _level = EnvGuard::set("LOG_LEVEL", "chatty");

    let result = Config::from_env();

    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_log_level_when_loaded_then_parsed_case_insensitively() {
    let _bind = EnvGuard::remove("BIND_ADDR");
    let _level = EnvGuard::set("LOG_LEVEL", "DEBUG");

    let config = Config::from_env().unwrap();

    assert_that!(config.log_level, eq(log::LevelFilter::Debug));
}
