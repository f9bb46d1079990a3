use std::fmt;
use std::fmt::Formatter;
use actix_session::SessionInsertError;

#[derive(Debug)]
pub struct HistoryError(pub String);

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "HistoryError: {}", self.0)
    }
}
impl From<SessionInsertError> for HistoryError {
    fn from(err: SessionInsertError) -> Self { HistoryError(err.to_string()) }
}
impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self { HistoryError(err.to_string()) }
}
