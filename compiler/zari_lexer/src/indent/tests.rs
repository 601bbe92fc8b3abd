use super::*;

#[test]
fn detect_prefers_four_spaces() {
    assert_eq!(IndentMode::detect("    x"), IndentMode::FourSpaces);
    assert_eq!(IndentMode::detect("        x"), IndentMode::FourSpaces);
    assert_eq!(IndentMode::detect("   x"), IndentMode::TwoSpaces);
    assert_eq!(IndentMode::detect("  x"), IndentMode::TwoSpaces);
}

#[test]
fn detect_tabs_and_unindented() {
    assert_eq!(IndentMode::detect("\tx"), IndentMode::Tabs);
    assert_eq!(IndentMode::detect(" x"), IndentMode::Unset);
    assert_eq!(IndentMode::detect("x"), IndentMode::Unset);
    assert_eq!(IndentMode::detect(""), IndentMode::Unset);
}

#[test]
fn units() {
    assert_eq!(IndentMode::Unset.unit(), None);
    assert_eq!(IndentMode::Tabs.unit(), Some("\t"));
    assert_eq!(IndentMode::TwoSpaces.unit(), Some("  "));
    assert_eq!(IndentMode::FourSpaces.unit(), Some("    "));
    assert_eq!(IndentMode::default(), IndentMode::Unset);
}
