use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudioError {
    #[error("{0}")] Validation(String),
    #[error("provider error: {0}")] Provider(String),
    #[error("schema error: {0}")] Schema(String),
    #[error("{0}")] EmptyResult(String),
    #[error("{0}")] Generation(String),
    #[error("download failed: {0}")] Download(String),
}

impl StudioError {
    /// Message shown to the user in a notice.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
