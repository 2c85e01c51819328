use fluentgate::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("FLUENTGATE_SERVER__PORT");
        env::remove_var("FLUENTGATE_SECURITY__SESSION_SECRET");
        env::remove_var("FLUENTGATE_SECURITY__COOKIE_NAME");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("SESSION_SECRET");
        env::remove_var("COOKIE_SECURE");
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env_vars();

    let config = AppConfig::load_from_args(["fluentgate"]).expect("Failed to load config");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.security.session_ttl_secs, 604_800);
    assert_eq!(config.security.cookie_name, "fluentgate_session");
    assert!(config.security.cookie_secure);
    assert!(config.security.session_secret.is_none());
    assert!(config.directory.admins.is_empty());
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("FLUENTGATE_SERVER__PORT", "9090");
        env::set_var("FLUENTGATE_SECURITY__SESSION_SECRET", "env-secret");
    }

    let config = AppConfig::load_from_args(["fluentgate"]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.security.session_secret.as_deref(), Some("env-secret"));

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_override_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("FLUENTGATE_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args(["fluentgate", "--port", "7071"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 7071);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load_with_admins() {
    clear_env_vars();

    let config_content = r#"
server:
  port: 7070
security:
  session_secret: file-secret
  cookie_secure: false
directory:
  admins:
    - email: admin@example.com
      password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$placeholder"
      role: admin
    "#;

    let file_path = "test_config.yaml";
    fs::write(file_path, config_content).expect("Failed to write temp config");

    let config = AppConfig::load_from_args(["fluentgate", "--config", file_path])
        .expect("Failed to load config from file");

    fs::remove_file(file_path).unwrap();

    assert_eq!(config.server.port, 7070);
    assert_eq!(config.security.session_secret.as_deref(), Some("file-secret"));
    assert!(!config.security.cookie_secure);
    assert_eq!(config.directory.admins.len(), 1);
    assert_eq!(config.directory.admins[0].email, "admin@example.com");
    assert_eq!(config.directory.admins[0].role.as_deref(), Some("admin"));
}
