use std::sync::OnceLock;

use regex::Regex;

use crate::models::Field;
use crate::models::FieldErrors;
use crate::models::GameOption;
use crate::models::Registration;
use crate::models::Submission;

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX.get_or_init(|| Regex::new(r"^\d{10,15}$").unwrap())
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Checks a candidate submission against the form rules and the already-known
/// records. Pure: no side effects, never fails. An empty map means the
/// submission may be sent to the store.
///
/// `existing` is a best-effort snapshot; when the fetch failed it is simply
/// empty and the duplicate check degrades to "no known duplicates".
pub fn validate(submission: &Submission, existing: &[Registration]) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let team_name = submission.team_name.trim();
    if team_name.is_empty() {
        errors.insert(Field::TeamName, "Team name is required");
    } else if is_team_name_taken(team_name, existing) {
        errors.insert(Field::TeamName, "This team name is already taken");
    }

    if GameOption::from_label(&submission.game_name).is_none() {
        errors.insert(Field::GameName, "Please select a game");
    }

    if submission.leader_name.trim().is_empty() {
        errors.insert(Field::LeaderName, "Leader name is required");
    }

    let phone = submission.leader_phone.trim();
    if phone.is_empty() {
        errors.insert(Field::LeaderPhone, "Phone number is required");
    } else if !phone_regex().is_match(&strip_non_digits(phone)) {
        errors.insert(Field::LeaderPhone, "Invalid phone number format");
    }

    if let Some(email) = submission.leader_email.as_deref() {
        if !email.is_empty() && !email_regex().is_match(email) {
            errors.insert(Field::LeaderEmail, "Invalid email address");
        }
    }

    if submission.player1.trim().is_empty() {
        errors.insert(Field::Player1, "Player 1 (Leader) is required");
    }
    if submission.player2.trim().is_empty() {
        errors.insert(Field::Player2, "Player 2 is required");
    }
    if submission.player3.trim().is_empty() {
        errors.insert(Field::Player3, "Player 3 is required");
    }
    if submission.player4.trim().is_empty() {
        errors.insert(Field::Player4, "Player 4 is required");
    }

    if submission.payment_method.is_empty() {
        errors.insert(Field::PaymentMethod, "Payment method is required");
    }

    if submission.transaction_id.trim().is_empty() {
        errors.insert(Field::TransactionId, "Transaction ID is required");
    }

    if !submission.agreed_to_rules {
        errors.insert(Field::AgreedToRules, "You must agree to the rules");
    }

    errors
}

// Comparison is on trimmed values, case-insensitively, so "phantom " and
// " PHANTOM" collide.
fn is_team_name_taken(candidate: &str, existing: &[Registration]) -> bool {
    let candidate = candidate.to_lowercase();
    existing
        .iter()
        .any(|r| r.team_name.trim().to_lowercase() == candidate)
}

fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
