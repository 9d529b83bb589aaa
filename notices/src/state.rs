use crate::Error;
use models::Notice;

/// Progress of a notice fetch as seen by the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(Vec<Notice>),
    Failed(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Fetched notices, empty while loading or after a failure.
    pub fn data(&self) -> &[Notice] {
        match self {
            FetchState::Loaded(notices) => notices,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl From<Result<Vec<Notice>, Error>> for FetchState {
    fn from(result: Result<Vec<Notice>, Error>) -> Self {
        match result {
            Ok(notices) => FetchState::Loaded(notices),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_has_no_data_and_no_error() {
        let state = FetchState::default();
        assert!(state.is_loading());
        assert!(state.data().is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_keeps_message_and_drops_data() {
        let state = FetchState::from(Err::<Vec<Notice>, _>(Error::Status(503)));
        assert!(!state.is_loading());
        assert!(state.data().is_empty());
        assert_eq!(state.error(), Some("HTTP 503"));
    }
}
