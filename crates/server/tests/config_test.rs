//! # Configuration Tests
//!
//! Startup configuration comes from environment variables; both API
//! credentials are required and the process must refuse to start without
//! them. The assertions run in a single test because they mutate the
//! process environment.

use lexibridge_server::config::get_config;
use std::env;

#[test]
fn test_get_config_requires_both_tokens() {
    env::remove_var("NOTION_TOKEN");
    env::remove_var("DEEPSEEK_API_KEY");

    let err = get_config().expect_err("expected missing NOTION_TOKEN to fail");
    assert!(err.to_string().contains("NOTION_TOKEN"));

    env::set_var("NOTION_TOKEN", "secret_notion_token");
    let err = get_config().expect_err("expected missing DEEPSEEK_API_KEY to fail");
    assert!(err.to_string().contains("DEEPSEEK_API_KEY"));

    // An empty value is treated the same as an absent one.
    env::set_var("DEEPSEEK_API_KEY", "");
    let err = get_config().expect_err("expected empty DEEPSEEK_API_KEY to fail");
    assert!(err.to_string().contains("DEEPSEEK_API_KEY"));

    env::set_var("DEEPSEEK_API_KEY", "secret_api_key");
    env::set_var("PORT", "8123");
    env::set_var("NOTION_API_URL", "http://127.0.0.1:9999");

    let config = get_config().expect("expected config to load");
    assert_eq!(config.port, 8123);
    assert_eq!(config.notion_token, "secret_notion_token");
    assert_eq!(config.deepseek_api_key, "secret_api_key");
    assert_eq!(
        config.notion_api_url.as_deref(),
        Some("http://127.0.0.1:9999")
    );
    assert!(config.deepseek_api_url.is_none());

    env::remove_var("NOTION_TOKEN");
    env::remove_var("DEEPSEEK_API_KEY");
    env::remove_var("PORT");
    env::remove_var("NOTION_API_URL");
}
