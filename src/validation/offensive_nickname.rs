//! Offensive Nickname Check

/// Nicknames rejected regardless of case
pub const OFFENSIVE_NICKNAMES: [&str; 7] = [
    "swearword",
    "badword",
    "offensive",
    "hate",
    "dummy",
    "idiot",
    "stupid",
];

/// Message reported when a nickname is denylisted
pub const OFFENSIVE_NICKNAME_MESSAGE: &str = "Account nickname contains offensive language";

/// Returns true if the nickname is acceptable.
///
/// Absent and blank nicknames pass. Otherwise the nickname is rejected only if
/// it equals a denylisted word ignoring case; containing one is fine.
pub fn is_acceptable_nickname(nickname: Option<&str>) -> bool {
    match nickname {
        None => true,
        Some(nickname) if nickname.trim().is_empty() => true,
        Some(nickname) => !OFFENSIVE_NICKNAMES
            .iter()
            .any(|offensive| equals_ignore_case(nickname, offensive)),
    }
}

/// Char-by-char comparison under Unicode case mapping, so dotless `ı` matches
/// `i` and long `ſ` matches `s`.
fn equals_ignore_case(left: &str, right: &str) -> bool {
    left.chars().count() == right.chars().count()
        && left
            .chars()
            .zip(right.chars())
            .all(|(a, b)| chars_equal_ignore_case(a, b))
}

fn chars_equal_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (a.to_uppercase(), b.to_uppercase());
    if upper_a.clone().eq(upper_b.clone()) {
        return true;
    }
    // Some scripts only agree once lowered back
    upper_a
        .flat_map(char::to_lowercase)
        .eq(upper_b.flat_map(char::to_lowercase))
}
