use std::fs::File;
use std::path::Path;

use crate::app::App;
use crate::errors::Result;
use crate::errors::UserError;
use crate::form;
use crate::form::FieldChange;
use crate::form::FormState;
use crate::models::Registration;
use crate::models::Submission;
use crate::validation;

impl App {
    /// Submits the registration described by a YAML file. The file carries
    /// the form fields except `player1`, which is always derived from the
    /// leader name.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub async fn register(&self, path: &Path) -> Result<()> {
        let submission: Submission = serde_yaml::from_reader(File::open(path)?)?;

        // Best effort: an unreachable store yields an empty snapshot and the
        // duplicate check degrades to "no known duplicates".
        let existing = self.store.list().await;

        let state = changes_from(submission)
            .into_iter()
            .fold(FormState::default(), |state, change| {
                form::apply(&state, change)
            });

        let errors = validation::validate(&state.submission, &existing);
        if !errors.is_empty() {
            for (field, message) in &errors {
                println!("{}: {}", field, message);
            }
            return Err(UserError::RejectedSubmission.into());
        }

        let record = Registration::from_submission(state.submission);
        self.store.create(&record).await.map_err(|err| {
            tracing::error!(?err, "create request failed");
            UserError::SubmissionFailed
        })?;

        print_receipt(&record);
        Ok(())
    }
}

fn changes_from(submission: Submission) -> Vec<FieldChange> {
    let mut changes = vec![
        FieldChange::GameName(submission.game_name),
        FieldChange::TeamName(submission.team_name),
        FieldChange::LeaderName(submission.leader_name),
        FieldChange::LeaderPhone(submission.leader_phone),
        FieldChange::Player2(submission.player2),
        FieldChange::Player3(submission.player3),
        FieldChange::Player4(submission.player4),
        FieldChange::PaymentMethod(submission.payment_method),
        FieldChange::TransactionId(submission.transaction_id),
    ];

    if let Some(email) = submission.leader_email {
        changes.push(FieldChange::LeaderEmail(email));
    }
    if let Some(discord) = submission.discord_username {
        changes.push(FieldChange::DiscordUsername(discord));
    }
    if let Some(ingame_id) = submission.ingame_id {
        changes.push(FieldChange::IngameId(ingame_id));
    }

    changes.push(FieldChange::AgreedToRules(submission.agreed_to_rules));
    changes
}

fn print_receipt(record: &Registration) {
    println!("Registration Successful!");
    println!("  Team Name:      {}", record.team_name);
    println!("  Game:           {}", record.game_name);
    println!("  Leader:         {}", record.leader_name);
    println!("  Transaction ID: {}", record.transaction_id);
    println!("  Reference:      {}", record.id);
}
