use agricheck::config::{Config, API_KEY_VAR};
use agricheck::{load_credential, ConfigurationError, Credential, GeminiModel};

// The only test in this binary that touches the process environment.
#[test]
fn credential_is_read_from_environment() {
    std::env::remove_var(API_KEY_VAR);
    assert!(matches!(
        load_credential(),
        Err(ConfigurationError::MissingCredential(API_KEY_VAR))
    ));
    assert!(Config::from_env().is_err());

    for blank in ["", "   ", "\t\n"] {
        std::env::set_var(API_KEY_VAR, blank);
        assert!(
            matches!(load_credential(), Err(ConfigurationError::MissingCredential(_))),
            "{blank:?}"
        );
        assert!(Config::from_env().is_err(), "{blank:?}");
    }

    std::env::set_var(API_KEY_VAR, "  AIzaSyExample \n");
    assert_eq!(load_credential().unwrap().expose(), "AIzaSyExample");
    assert_eq!(Config::from_env().unwrap().credential.expose(), "AIzaSyExample");

    std::env::remove_var(API_KEY_VAR);
}

#[test]
fn empty_key_stops_startup() {
    let err = Config::from_lookup(|var| (var == API_KEY_VAR).then(String::new)).unwrap_err();
    assert!(matches!(err, ConfigurationError::MissingCredential(_)));
    assert!(err.to_string().contains(API_KEY_VAR));
}

#[test]
fn malformed_key_stops_client_creation() {
    let config =
        Config::from_lookup(|var| (var == API_KEY_VAR).then(|| "bad key".to_string())).unwrap();
    let err = GeminiModel::create(&config.credential, &config.model).unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidCredential(_)));
}

#[test]
fn valid_key_builds_client_without_network() {
    let model = GeminiModel::create(&Credential::new("AIzaSyExample"), "gemini-2.0-flash");
    assert!(model.is_ok());
}
