use pizza_bot::config::{API_BASE, Config, DEFAULT_DATASET_PATH, MODEL_NAME};

mod common;

#[ctor::ctor]
fn _init() {
    common::init();
}

#[test]
fn constants_values() {
    assert_eq!(API_BASE, "https://api.groq.com/openai/v1");
    assert_eq!(MODEL_NAME, "llama3-8b-8192");
    assert_eq!(DEFAULT_DATASET_PATH, "pizza_dataset.csv");
}

// Env mutation lives in one test so nothing in this binary races on it.
#[test]
fn from_env_reads_key_and_applies_defaults() {
    unsafe {
        std::env::set_var("GROQ_API_KEY", "test-key");
        std::env::remove_var("PIZZA_DATASET");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test-key");
    assert_eq!(config.api_base, API_BASE);
    assert_eq!(config.model, MODEL_NAME);
    assert_eq!(config.max_tokens, 1024);
    assert_eq!(config.dataset_path, DEFAULT_DATASET_PATH);

    unsafe {
        std::env::set_var("PIZZA_DATASET", "menus/custom.csv");
    }
    let config = Config::from_env().unwrap();
    assert_eq!(config.dataset_path, "menus/custom.csv");

    unsafe {
        std::env::remove_var("GROQ_API_KEY");
        std::env::remove_var("PIZZA_DATASET");
    }
    let missing = Config::from_env();
    assert!(missing.is_err());
    assert!(missing.unwrap_err().to_string().contains("GROQ_API_KEY"));
}

#[test]
fn client_builds_from_config() {
    let config = Config {
        api_key: "test-key".to_string(),
        api_base: API_BASE.to_string(),
        model: MODEL_NAME.to_string(),
        max_tokens: 1024,
        dataset_path: DEFAULT_DATASET_PATH.to_string(),
    };
    // Construction must not touch the network.
    let _client = config.client();
}
