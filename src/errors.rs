use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    UserError(#[from] UserError),
    #[error("unexpected IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("couldn't parse the submission file: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Errors whose messages go to the operator verbatim.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Access Denied: Invalid Credentials")]
    AccessDenied,
    #[error("The submission was rejected; fix the fields listed above and try again.")]
    RejectedSubmission,
    #[error("Failed to submit registration. Please try again or contact the admin.")]
    SubmissionFailed,
    #[error("Select a game first to generate a relevant name")]
    GameRequired,
    #[error("There are no registrations to copy.")]
    NothingToCopy,
    #[error("Clipboard Error")]
    ClipboardError,
    #[error("Delete failed.")]
    DeleteFailed,
    #[error("Purge failed.")]
    PurgeFailed,
    #[error("Clearing the database is irreversible; pass --yes to confirm.")]
    ClearNotConfirmed,
}
