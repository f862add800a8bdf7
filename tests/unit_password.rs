use roster_core::{DEFAULT_PASSWORD_LENGTH, PASSWORD_ALPHABET, generate_password, is_alphabet_password};

#[test]
fn test_generate_password_default_length() {
    let password = generate_password(DEFAULT_PASSWORD_LENGTH);

    assert_eq!(password.len(), 10);
    assert!(is_alphabet_password(&password));
}

#[test]
fn test_generate_password_custom_length() {
    let password = generate_password(32);

    assert_eq!(password.chars().count(), 32);
    assert!(is_alphabet_password(&password));
}

#[test]
fn test_generate_password_varies() {
    let passwords: std::collections::HashSet<String> =
        (0..50).map(|_| generate_password(10)).collect();

    assert!(passwords.len() > 1);
}

#[test]
fn test_alphabet_has_no_csv_delimiters() {
    assert!(!PASSWORD_ALPHABET.contains(&b','));
    assert!(!PASSWORD_ALPHABET.contains(&b'"'));
}

#[test]
fn test_is_alphabet_password_rejects_foreign_chars() {
    assert!(is_alphabet_password("Ab3!Ab3!Ab"));
    assert!(!is_alphabet_password("Ab3!Ab3!A,"));
    assert!(!is_alphabet_password("pass word1"));
}
