use crate::models::Field;
use crate::models::FieldErrors;
use crate::models::Submission;

/// One edit to the registration form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    TeamName(String),
    GameName(String),
    LeaderName(String),
    LeaderPhone(String),
    LeaderEmail(String),
    Player2(String),
    Player3(String),
    Player4(String),
    DiscordUsername(String),
    IngameId(String),
    PaymentMethod(String),
    TransactionId(String),
    AgreedToRules(bool),
}

impl FieldChange {
    // Discord and in-game id never carry validation errors, so they have no
    // error slot to clear.
    fn field(&self) -> Option<Field> {
        match self {
            FieldChange::TeamName(_) => Some(Field::TeamName),
            FieldChange::GameName(_) => Some(Field::GameName),
            FieldChange::LeaderName(_) => Some(Field::LeaderName),
            FieldChange::LeaderPhone(_) => Some(Field::LeaderPhone),
            FieldChange::LeaderEmail(_) => Some(Field::LeaderEmail),
            FieldChange::Player2(_) => Some(Field::Player2),
            FieldChange::Player3(_) => Some(Field::Player3),
            FieldChange::Player4(_) => Some(Field::Player4),
            FieldChange::DiscordUsername(_) => None,
            FieldChange::IngameId(_) => None,
            FieldChange::PaymentMethod(_) => Some(Field::PaymentMethod),
            FieldChange::TransactionId(_) => Some(Field::TransactionId),
            FieldChange::AgreedToRules(_) => Some(Field::AgreedToRules),
        }
    }
}

/// The form's working state: the draft submission plus whatever errors the
/// last validation pass left behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub submission: Submission,
    pub errors: FieldErrors,
}

impl FormState {
    /// Blank form, as after "clear form".
    pub fn reset() -> Self {
        FormState::default()
    }
}

/// Pure transition function. Applies one field edit, re-derives `player1`
/// whenever the leader name changes (there is no direct `player1` edit), and
/// drops the edited field's stale error.
pub fn apply(state: &FormState, change: FieldChange) -> FormState {
    let mut next = state.clone();
    if let Some(field) = change.field() {
        next.errors.remove(&field);
    }

    match change {
        FieldChange::TeamName(value) => next.submission.team_name = value,
        FieldChange::GameName(value) => next.submission.game_name = value,
        FieldChange::LeaderName(value) => {
            next.submission.player1 = value.clone();
            next.submission.leader_name = value;
        }
        FieldChange::LeaderPhone(value) => next.submission.leader_phone = value,
        FieldChange::LeaderEmail(value) => next.submission.leader_email = Some(value),
        FieldChange::Player2(value) => next.submission.player2 = value,
        FieldChange::Player3(value) => next.submission.player3 = value,
        FieldChange::Player4(value) => next.submission.player4 = value,
        FieldChange::DiscordUsername(value) => next.submission.discord_username = Some(value),
        FieldChange::IngameId(value) => next.submission.ingame_id = Some(value),
        FieldChange::PaymentMethod(value) => next.submission.payment_method = value,
        FieldChange::TransactionId(value) => next.submission.transaction_id = value,
        FieldChange::AgreedToRules(value) => next.submission.agreed_to_rules = value,
    }

    next
}
