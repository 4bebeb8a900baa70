use std::fs;
use std::path::Path;
use std::path::PathBuf;

use chrono::NaiveDate;
use chrono::Utc;

use crate::models::Registration;

pub const COLUMNS: [&str; 15] = [
    "ID",
    "Timestamp",
    "Team Name",
    "Game",
    "Leader Name",
    "Leader Phone",
    "Leader Email",
    "Player 1",
    "Player 2",
    "Player 3",
    "Player 4",
    "Discord",
    "In-Game ID",
    "Payment",
    "Trx ID",
];

/// Renders the collection as comma-delimited text for file export, or `None`
/// for an empty collection (the caller then performs no write at all).
///
/// Free-text fields are quoted when they contain a comma, quote or newline,
/// with embedded quotes doubled. `id`, `timestamp`, `game_name` and
/// `payment_method` are machine-generated or enum values and go out verbatim.
pub fn to_csv(records: &[Registration]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut lines = vec![COLUMNS.join(",")];
    for r in records {
        let row = [
            r.id.clone(),
            r.timestamp.clone(),
            escape_csv(&r.team_name),
            r.game_name.clone(),
            escape_csv(&r.leader_name),
            escape_csv(&r.leader_phone),
            escape_csv(r.leader_email.as_deref().unwrap_or_default()),
            escape_csv(&r.player1),
            escape_csv(&r.player2),
            escape_csv(&r.player3),
            escape_csv(&r.player4),
            escape_csv(r.discord_username.as_deref().unwrap_or_default()),
            escape_csv(r.ingame_id.as_deref().unwrap_or_default()),
            r.payment_method.clone(),
            escape_csv(&r.transaction_id),
        ];
        lines.push(row.join(","));
    }

    Some(lines.join("\n"))
}

/// Renders the collection as tab-delimited text for pasting into spreadsheet
/// software, or `None` for an empty collection (the copy operation then
/// reports failure).
///
/// Tabs and newlines inside free-text fields become single spaces and values
/// are trimmed; the tab-delimited target needs no quote escaping.
pub fn to_tsv(records: &[Registration]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut lines = vec![COLUMNS.join("\t")];
    for r in records {
        let row = [
            r.id.clone(),
            r.timestamp.clone(),
            clean_tsv(&r.team_name),
            r.game_name.clone(),
            clean_tsv(&r.leader_name),
            clean_tsv(&r.leader_phone),
            clean_tsv(r.leader_email.as_deref().unwrap_or_default()),
            clean_tsv(&r.player1),
            clean_tsv(&r.player2),
            clean_tsv(&r.player3),
            clean_tsv(&r.player4),
            clean_tsv(r.discord_username.as_deref().unwrap_or_default()),
            clean_tsv(r.ingame_id.as_deref().unwrap_or_default()),
            r.payment_method.clone(),
            clean_tsv(&r.transaction_id),
        ];
        lines.push(row.join("\t"));
    }

    Some(lines.join("\n"))
}

fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn clean_tsv(value: &str) -> String {
    value.replace(['\t', '\n'], " ").trim().to_string()
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("tournament_registrations_{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the CSV export into `dir`, named after today's UTC date. Returns
/// `Ok(None)` without touching the filesystem when there is nothing to export.
pub fn write_csv_file(records: &[Registration], dir: &Path) -> std::io::Result<Option<PathBuf>> {
    let Some(csv) = to_csv(records) else {
        return Ok(None);
    };

    let path = dir.join(export_filename(Utc::now().date_naive()));
    fs::write(&path, csv)?;
    Ok(Some(path))
}
