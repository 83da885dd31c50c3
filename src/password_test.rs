use super::*;

#[test]
fn empty_password_scores_zero_and_is_unrated() {
    assert_eq!(score(""), 0);
    let strength = Strength::of("");
    assert_eq!(strength, Strength::Unrated);
    assert_eq!(strength.label(), "");
    assert_eq!(strength.color(), None);
    assert_eq!(strength.badge_class(), "badge");
}

#[test]
fn single_class_scores_one() {
    assert_eq!(score("abc"), 1);
    assert_eq!(Strength::of("abc"), Strength::VeryWeak);
    assert_eq!(Strength::of("abc").label(), "Very Weak");
}

#[test]
fn eleven_characters_miss_the_length_point() {
    assert_eq!("Abc12345678".len(), 11);
    assert_eq!(score("Abc12345678"), 3);
    assert_eq!(Strength::of("Abc12345678").label(), "Fair");
}

#[test]
fn twelve_characters_with_every_class_is_strong() {
    assert_eq!(score("Ab3!xxxxxxxx"), 5);
    let strength = Strength::of("Ab3!xxxxxxxx");
    assert_eq!(strength.label(), "Strong");
    assert_eq!(strength.badge_class(), "badge bg-success");
}

#[test]
fn each_predicate_adds_exactly_one_point() {
    assert_eq!(score("aaaa"), 1);
    assert_eq!(score("aaaA"), 2);
    assert_eq!(score("aaA1"), 3);
    assert_eq!(score("aA1!"), 4);
    assert_eq!(score("aA1!aaaaaaaa"), 5);
    assert_eq!(score("aaaaaaaaaaaa"), 2);
}

#[test]
fn non_ascii_letters_count_as_other_characters() {
    assert_eq!(score("é"), 1);
    assert_eq!(score(" "), 1);
    // Length counts UTF-16 units, not bytes.
    assert_eq!(score("ééééééééééé"), 1);
    assert_eq!(score("éééééééééééé"), 2);
}

#[test]
fn meter_length_counts_utf16_units() {
    // Each emoji is two UTF-16 units, so eight characters reach twelve units.
    assert_eq!(score("Aa1\u{1F600}\u{1F600}\u{1F600}\u{1F600}\u{1F600}"), 5);
    assert_eq!(score("Aa1\u{1F600}\u{1F600}\u{1F600}\u{1F600}"), 4);
}

#[test]
fn policy_length_counts_characters() {
    // Eight characters fail the policy even though the meter grants length.
    assert_eq!(check_policy("Aa1!\u{1F600}\u{1F600}\u{1F600}\u{1F600}"), Err(PolicyViolation::TooShort));
}

#[test]
fn policy_digit_rule_is_decimal_only() {
    assert_eq!(check_policy("Abcdefghijk\u{b2}!"), Err(PolicyViolation::MissingDigit));
    assert_eq!(check_policy("Abcdefghijk\u{bd}!"), Err(PolicyViolation::MissingDigit));
    assert_eq!(check_policy("Abcdefghijk\u{216b}!"), Err(PolicyViolation::MissingDigit));
    assert_eq!(check_policy("Abcdefghijk7!"), Ok(()));
}

#[test]
fn label_and_color_tables_line_up() {
    let rows: Vec<_> = (0..=5).map(|s| (Strength::from_score(s).label(), Strength::from_score(s).color())).collect();
    assert_eq!(
        rows,
        vec![
            ("", None),
            ("Very Weak", Some("danger")),
            ("Weak", Some("warning")),
            ("Fair", Some("info")),
            ("Good", Some("primary")),
            ("Strong", Some("success")),
        ]
    );
}

#[test]
fn out_of_range_score_saturates() {
    assert_eq!(Strength::from_score(9), Strength::Strong);
}

#[test]
fn policy_reports_first_failing_rule() {
    assert_eq!(check_policy("Short1!"), Err(PolicyViolation::TooShort));
    assert_eq!(check_policy("lowercase1!xx"), Err(PolicyViolation::MissingUppercase));
    assert_eq!(check_policy("UPPERCASE1!XX"), Err(PolicyViolation::MissingLowercase));
    assert_eq!(check_policy("NoDigitsHere!"), Err(PolicyViolation::MissingDigit));
    assert_eq!(check_policy("NoSpecial1234"), Err(PolicyViolation::MissingSpecial));
    assert_eq!(check_policy("Valid1!Password"), Ok(()));
}

#[test]
fn policy_special_set_is_narrower_than_meter() {
    // Tilde earns a meter point but is not a policy special character.
    assert_eq!(score("Tilde~123456"), 5);
    assert_eq!(check_policy("Tilde~123456"), Err(PolicyViolation::MissingSpecial));
}

#[test]
fn policy_hint_text() {
    assert_eq!(policy_hint("Valid1!Password"), "");
    assert_eq!(policy_hint("short"), "Password must be at least 12 characters long");
    assert_eq!(
        policy_hint("NoSpecial1234"),
        "Password must contain at least one special character (!@#$%^&*(),.?\":{}|<>)"
    );
}
