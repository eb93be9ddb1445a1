use super::*;

#[test]
fn dom_error_messages_name_the_element() {
    assert_eq!(DomError::MissingElement(Target::SearchDialog).to_string(), "element not bound: SearchDialog");
    assert_eq!(
        DomError::WrongElement { target: Target::MainContent, expected: "HtmlElement" }.to_string(),
        "element MainContent is not a HtmlElement"
    );
    assert_eq!(DomError::Js("boom".into()).to_string(), "js exception: boom");
}

#[test]
fn config_error_wraps_json_failure() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ConfigError::from(json_err);
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("config parse failed:"));
}

#[test]
fn config_error_validation_messages() {
    assert_eq!(ConfigError::EmptyStorageKey.to_string(), "storage_key must not be empty");
    assert_eq!(ConfigError::EmptySelector("search_dialog").to_string(), "selector search_dialog must not be empty");
}
