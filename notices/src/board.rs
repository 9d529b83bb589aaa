use crate::FetchState;
use models::Notice;

const LOADING_TEXT: &str = "불러오는 중…";
const EMPTY_TEXT: &str = "등록된 공지가 없습니다.";
const FAILURE_PREFIX: &str = "공지 불러오기 실패: ";

/// Status line shown above the notice cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Banner<'a> {
    Loading,
    Warning(&'a str),
    Empty,
}

impl Banner<'_> {
    pub fn text(&self) -> String {
        match self {
            Banner::Loading => LOADING_TEXT.to_string(),
            Banner::Warning(message) => format!("{FAILURE_PREFIX}{message}"),
            Banner::Empty => EMPTY_TEXT.to_string(),
        }
    }
}

/// What the notice section displays for a given fetch state.
#[derive(Debug, PartialEq)]
pub struct Board<'a> {
    pub banner: Option<Banner<'a>>,
    pub cards: &'a [Notice],
}

impl<'a> From<&'a FetchState> for Board<'a> {
    fn from(state: &'a FetchState) -> Self {
        let banner = match state {
            FetchState::Loading => Some(Banner::Loading),
            FetchState::Failed(message) => Some(Banner::Warning(message)),
            FetchState::Loaded(notices) if notices.is_empty() => Some(Banner::Empty),
            FetchState::Loaded(_) => None,
        };

        Self {
            banner,
            cards: state.data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Canned, TWO_NOTICES};
    use futures::executor::block_on;
    use models::NoticeId;

    fn load(status: u16, body: &str) -> FetchState {
        let transport = Canned::status(status, body);
        FetchState::from(block_on(crate::fetch(&transport, "/notices")))
    }

    #[test]
    fn empty_list_shows_info_not_warning() {
        let state = load(200, "[]");
        let board = Board::from(&state);

        assert_eq!(board.banner, Some(Banner::Empty));
        assert_eq!(board.banner.unwrap().text(), "등록된 공지가 없습니다.");
        assert!(board.cards.is_empty());
    }

    #[test]
    fn one_card_per_notice_in_server_order() {
        let state = load(200, TWO_NOTICES);
        let board = Board::from(&state);

        assert_eq!(board.banner, None);
        assert_eq!(board.cards.len(), 2);
        assert_eq!(board.cards[0].id, NoticeId::Number(2));
        assert_eq!(board.cards[1].id, NoticeId::Number(1));
    }

    #[test]
    fn server_error_shows_warning() {
        let state = load(500, "");
        let board = Board::from(&state);

        assert_eq!(board.banner, Some(Banner::Warning("HTTP 500")));
        assert_eq!(board.banner.unwrap().text(), "공지 불러오기 실패: HTTP 500");
        assert!(board.cards.is_empty());
    }

    #[test]
    fn network_error_message_is_displayed_verbatim() {
        let transport = Canned::failing("NetworkError when attempting to fetch resource.");
        let state = FetchState::from(block_on(crate::fetch(&transport, "/notices")));

        assert_eq!(
            Board::from(&state).banner,
            Some(Banner::Warning("NetworkError when attempting to fetch resource."))
        );
    }

    #[test]
    fn loading_shows_spinner_only() {
        let state = FetchState::Loading;
        let board = Board::from(&state);

        assert_eq!(board.banner, Some(Banner::Loading));
        assert!(board.cards.is_empty());
    }
}
