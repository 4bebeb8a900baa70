use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use regdesk::models::Registration;
use regdesk::models::SubmissionBuilder;
use regdesk::services::auth::StaticPassphrase;
use regdesk::services::clipboard::FakeClipboard;
use regdesk::services::namegen::LocalNameSuggester;
use regdesk::services::store::FakeRegistrationStore;
use regdesk::services::store::RegistrationStore;
use regdesk::App;
use regdesk::Error;
use regdesk::UserError;

const PASSPHRASE: &str = "mahatab";

struct Harness {
    app: App,
    store: Arc<FakeRegistrationStore>,
    clipboard: Arc<FakeClipboard>,
    export_dir: tempfile::TempDir,
}

fn harness_with(records: Vec<Registration>) -> Harness {
    let store = Arc::new(FakeRegistrationStore::with_records(records));
    let clipboard = Arc::new(FakeClipboard::default());
    let export_dir = tempfile::tempdir().unwrap();
    let app = App::with_services(
        PathBuf::from(export_dir.path()),
        store.clone(),
        clipboard.clone(),
        Arc::new(StaticPassphrase::new(PASSPHRASE.to_string())),
        Arc::new(LocalNameSuggester),
    );
    Harness {
        app,
        store,
        clipboard,
        export_dir,
    }
}

fn stored_record(team: &str) -> Registration {
    Registration::from_submission(
        SubmissionBuilder::default()
            .team_name(team)
            .game_name("Free Fire")
            .leader_name("Rafi")
            .leader_phone("01712345678")
            .player1("Rafi")
            .player2("Karim")
            .player3("Sajid")
            .player4("Tanvir")
            .payment_method("Bkash")
            .transaction_id("TX1")
            .agreed_to_rules(true)
            .build()
            .unwrap(),
    )
}

fn submission_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const VALID_SUBMISSION: &str = r#"
teamName: Phantom
gameName: Free Fire
leaderName: Rafi
leaderPhone: "01712345678"
leaderEmail: rafi@example.com
player2: Karim
player3: Sajid
player4: Tanvir
paymentMethod: Bkash
transactionId: 8J2K9L1M
agreedToRules: true
"#;

#[tokio::test]
async fn register_persists_a_valid_submission_and_derives_player1() {
    let harness = harness_with(vec![]);
    let file = submission_file(VALID_SUBMISSION);

    harness.app.register(file.path()).await.unwrap();

    let records = harness.store.list().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].team_name, "Phantom");
    assert_eq!(records[0].player1, "Rafi");
    assert!(!records[0].id.is_empty());
    assert!(records[0].timestamp.ends_with('Z'));
}

#[tokio::test]
async fn register_rejects_a_duplicate_team_name_without_persisting() {
    let harness = harness_with(vec![stored_record("phantom ")]);
    let file = submission_file(VALID_SUBMISSION);

    let err = harness.app.register(file.path()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::UserError(UserError::RejectedSubmission)
    ));
    assert_eq!(harness.store.list().await.len(), 1);
}

#[tokio::test]
async fn register_rejects_unagreed_rules() {
    let harness = harness_with(vec![]);
    let file = submission_file(&VALID_SUBMISSION.replace(
        "agreedToRules: true",
        "agreedToRules: false",
    ));

    let err = harness.app.register(file.path()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::UserError(UserError::RejectedSubmission)
    ));
    assert!(harness.store.list().await.is_empty());
}

#[tokio::test]
async fn admin_commands_reject_a_wrong_passphrase() {
    let harness = harness_with(vec![stored_record("Phantom")]);

    let err = harness.app.list("wrong", None).await.unwrap_err();
    assert!(matches!(err, Error::UserError(UserError::AccessDenied)));

    let err = harness.app.copy("wrong").await.unwrap_err();
    assert!(matches!(err, Error::UserError(UserError::AccessDenied)));

    // Nothing was copied or deleted along the way.
    assert_eq!(harness.clipboard.contents(), None);
    assert_eq!(harness.store.list().await.len(), 1);
}

#[tokio::test]
async fn copy_puts_tab_delimited_rows_on_the_clipboard() {
    let harness = harness_with(vec![stored_record("Phantom")]);

    harness.app.copy(PASSPHRASE).await.unwrap();

    let contents = harness.clipboard.contents().unwrap();
    let mut lines = contents.lines();
    assert!(lines.next().unwrap().starts_with("ID\tTimestamp\tTeam Name"));
    assert!(lines.next().unwrap().contains("Phantom"));
}

#[tokio::test]
async fn copy_reports_failure_for_an_empty_collection() {
    let harness = harness_with(vec![]);

    let err = harness.app.copy(PASSPHRASE).await.unwrap_err();
    assert!(matches!(err, Error::UserError(UserError::NothingToCopy)));
    assert_eq!(harness.clipboard.contents(), None);
}

#[tokio::test]
async fn export_writes_the_dated_csv_file() {
    let harness = harness_with(vec![stored_record("Phantom")]);

    harness.app.export(PASSPHRASE, None, None).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(harness.export_dir.path())
        .unwrap()
        .map(|e| e.unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].file_name().into_string().unwrap();
    assert!(name.starts_with("tournament_registrations_"));
    assert!(name.ends_with(".csv"));

    let contents = std::fs::read_to_string(entries[0].path()).unwrap();
    assert!(contents.starts_with("ID,Timestamp,Team Name"));
    assert!(contents.contains("Phantom"));
}

#[tokio::test]
async fn export_of_an_empty_collection_writes_nothing() {
    let harness = harness_with(vec![]);

    harness.app.export(PASSPHRASE, None, None).await.unwrap();

    assert_eq!(
        std::fs::read_dir(harness.export_dir.path()).unwrap().count(),
        0
    );
}

#[tokio::test]
async fn export_respects_the_search_filter() {
    let harness = harness_with(vec![stored_record("Phantom"), stored_record("Night Owls")]);

    harness
        .app
        .export(PASSPHRASE, Some("night"), None)
        .await
        .unwrap();

    let entry = std::fs::read_dir(harness.export_dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap();
    let contents = std::fs::read_to_string(entry.path()).unwrap();
    assert!(contents.contains("Night Owls"));
    assert!(!contents.contains("Phantom"));
}

#[tokio::test]
async fn delete_removes_one_record() {
    let first = stored_record("Phantom");
    let second = stored_record("Night Owls");
    let id = first.id.clone();
    let harness = harness_with(vec![first, second]);

    harness.app.delete(PASSPHRASE, &id).await.unwrap();

    let remaining = harness.store.list().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].team_name, "Night Owls");
}

#[tokio::test]
async fn clear_requires_confirmation() {
    let harness = harness_with(vec![stored_record("Phantom")]);

    let err = harness.app.clear(PASSPHRASE, false).await.unwrap_err();
    assert!(matches!(
        err,
        Error::UserError(UserError::ClearNotConfirmed)
    ));
    assert_eq!(harness.store.list().await.len(), 1);

    harness.app.clear(PASSPHRASE, true).await.unwrap();
    assert!(harness.store.list().await.is_empty());
}

#[tokio::test]
async fn suggest_name_requires_a_game() {
    let harness = harness_with(vec![]);

    let err = harness.app.suggest_name("  ").unwrap_err();
    assert!(matches!(err, Error::UserError(UserError::GameRequired)));
    assert!(harness.app.suggest_name("Free Fire").is_ok());
}
