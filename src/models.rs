use std::collections::BTreeMap;
use std::fmt;

use chrono::SecondsFormat;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// A stored team registration, as kept by the remote collection endpoint.
///
/// Deserialization is lenient (missing fields become their defaults): rows
/// served by the spreadsheet backend are not guaranteed to carry every
/// column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub id: String,
    pub timestamp: String,

    pub team_name: String,
    pub game_name: String,

    pub leader_name: String,
    pub leader_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_email: Option<String>,

    pub player1: String,
    pub player2: String,
    pub player3: String,
    pub player4: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingame_id: Option<String>,
    pub payment_method: String,
    pub transaction_id: String,

    pub agreed_to_rules: bool,
}

impl Registration {
    /// Stamps a submission with a fresh id and a UTC ISO-8601 timestamp.
    pub fn from_submission(submission: Submission) -> Self {
        Registration {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            team_name: submission.team_name,
            game_name: submission.game_name,
            leader_name: submission.leader_name,
            leader_phone: submission.leader_phone,
            leader_email: submission.leader_email,
            player1: submission.player1,
            player2: submission.player2,
            player3: submission.player3,
            player4: submission.player4,
            discord_username: submission.discord_username,
            ingame_id: submission.ingame_id,
            payment_method: submission.payment_method,
            transaction_id: submission.transaction_id,
            agreed_to_rules: submission.agreed_to_rules,
        }
    }
}

/// What the form collects: a registration minus id and timestamp.
///
/// `player1` mirrors `leader_name`; the form reducer keeps it in sync and the
/// register flow never edits it directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), default)]
pub struct Submission {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub leader_name: String,
    #[serde(default)]
    pub leader_phone: String,
    #[serde(default)]
    pub leader_email: Option<String>,
    #[serde(default)]
    pub player1: String,
    #[serde(default)]
    pub player2: String,
    #[serde(default)]
    pub player3: String,
    #[serde(default)]
    pub player4: String,
    #[serde(default)]
    pub discord_username: Option<String>,
    #[serde(default)]
    pub ingame_id: Option<String>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub agreed_to_rules: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOption {
    Valorant,
    Cs2,
    LeagueOfLegends,
    Dota2,
    PubgMobile,
    FreeFire,
    Other,
}

impl GameOption {
    pub const ALL: [GameOption; 7] = [
        GameOption::Valorant,
        GameOption::Cs2,
        GameOption::LeagueOfLegends,
        GameOption::Dota2,
        GameOption::PubgMobile,
        GameOption::FreeFire,
        GameOption::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GameOption::Valorant => "Valorant",
            GameOption::Cs2 => "Counter-Strike 2",
            GameOption::LeagueOfLegends => "League of Legends",
            GameOption::Dota2 => "Dota 2",
            GameOption::PubgMobile => "PUBG Mobile",
            GameOption::FreeFire => "Free Fire",
            GameOption::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<GameOption> {
        GameOption::ALL
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for GameOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Bkash,
    Nagad,
    Rocket,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Bkash,
        PaymentMethod::Nagad,
        PaymentMethod::Rocket,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Bkash => "Bkash",
            PaymentMethod::Nagad => "Nagad",
            PaymentMethod::Rocket => "Rocket",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Form fields the validator can attach an error to, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    TeamName,
    GameName,
    LeaderName,
    LeaderPhone,
    LeaderEmail,
    Player1,
    Player2,
    Player3,
    Player4,
    PaymentMethod,
    TransactionId,
    AgreedToRules,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::TeamName => "teamName",
            Field::GameName => "gameName",
            Field::LeaderName => "leaderName",
            Field::LeaderPhone => "leaderPhone",
            Field::LeaderEmail => "leaderEmail",
            Field::Player1 => "player1",
            Field::Player2 => "player2",
            Field::Player3 => "player3",
            Field::Player4 => "player4",
            Field::PaymentMethod => "paymentMethod",
            Field::TransactionId => "transactionId",
            Field::AgreedToRules => "agreedToRules",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-field error messages. At most one message per field; an empty map means
/// the submission is acceptable.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Case-insensitive substring filter over team name, leader name and game, as
/// used by the admin views. An empty term matches everything.
pub fn filter_by_term<'a>(records: &'a [Registration], term: &str) -> Vec<&'a Registration> {
    let term = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.team_name.to_lowercase().contains(&term)
                || r.leader_name.to_lowercase().contains(&term)
                || r.game_name.to_lowercase().contains(&term)
        })
        .collect()
}
