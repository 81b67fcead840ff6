use std::str::FromStr;

use docrelay::domain::{ConversationTurn, TurnRole};

#[test]
fn given_valid_role_strings_when_parsing_then_returns_roles() {
    assert_eq!(TurnRole::from_str("user").unwrap(), TurnRole::User);
    assert_eq!(TurnRole::from_str("assistant").unwrap(), TurnRole::Assistant);
}

#[test]
fn given_unknown_role_string_when_parsing_then_returns_error() {
    assert!(TurnRole::from_str("system").is_err());
    assert!(TurnRole::from_str("User").is_err());
}

#[test]
fn given_role_when_displayed_then_round_trips() {
    assert_eq!(TurnRole::User.to_string(), "user");
    assert_eq!(TurnRole::Assistant.to_string(), "assistant");
}

#[test]
fn given_json_turn_when_deserializing_then_lowercase_roles_accepted() {
    let turn: ConversationTurn =
        serde_json::from_str(r#"{"role": "assistant", "content": "hi"}"#).unwrap();
    assert_eq!(turn.role, TurnRole::Assistant);
    assert_eq!(turn.content, "hi");
}

#[test]
fn given_whitespace_content_when_checking_emptiness_then_turn_is_empty() {
    assert!(ConversationTurn::new(TurnRole::User, "   \n\t").is_empty());
    assert!(!ConversationTurn::new(TurnRole::User, " x ").is_empty());
}
