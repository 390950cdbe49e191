use super::matcher::{match_identifier, match_identity, match_name};
use super::types::MatchMode;

#[test]
fn test_match_name_olat_export() {
    assert_eq!(
        match_name("ita_Assignment_3/Gurney_Halleck_cswh1234/main.c"),
        Some("Gurney_Halleck".to_string())
    );
}

#[test]
fn test_match_name_first_occurrence() {
    assert_eq!(
        match_name("Duncan_Idaho/Gurney_Halleck/main.c"),
        Some("Duncan_Idaho".to_string())
    );
}

#[test]
fn test_match_name_rejects_lowercase_and_single_letters() {
    assert_eq!(match_name("gurney_halleck/main.c"), None);
    assert_eq!(match_name("G_Halleck/main.c"), None);
    assert_eq!(match_name("GURNEY_HALLECK/main.c"), None);
    assert_eq!(match_name(""), None);
}

#[test]
fn test_match_identifier() {
    assert_eq!(
        match_identifier("Gurney_Halleck_cswh1234/main.c"),
        Some("cswh1234".to_string())
    );
    assert_eq!(
        match_identifier("submissions/csab1_csxy99/x"),
        Some("csab1".to_string())
    );
}

#[test]
fn test_match_identifier_is_case_sensitive() {
    assert_eq!(match_identifier("CSWH1234/main.c"), None);
    assert_eq!(match_identifier("csWH1234/main.c"), None);
    assert_eq!(match_identifier("cswh/main.c"), None);
}

#[test]
fn test_match_identity_dispatches_on_mode() {
    let path = "Gurney_Halleck_cswh1234/main.c";
    assert_eq!(
        match_identity(path, MatchMode::ByName),
        Some("Gurney_Halleck".to_string())
    );
    assert_eq!(
        match_identity(path, MatchMode::ByIdentifier),
        Some("cswh1234".to_string())
    );
    assert_eq!(match_identity("misc/readme.txt", MatchMode::ByName), None);
}

#[test]
fn test_match_extracts_embedded_token_exactly() {
    let names = ["Paul_Atreides", "Chani_Kynes", "Liet_Kynes"];
    for name in names {
        let path = format!("batch_7/{name}_cszz42/src/lib.rs");
        assert_eq!(match_name(&path).as_deref(), Some(name));
        assert_eq!(match_identifier(&path).as_deref(), Some("cszz42"));
    }
}
