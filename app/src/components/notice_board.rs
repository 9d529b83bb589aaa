use crate::components::{Alert, NoticeCard, Severity};
use crate::hooks::use_notices;
use notices::{Banner, Board};
use yew::prelude::*;

fn banner(banner: Option<Banner<'_>>) -> Html {
    match banner {
        Some(Banner::Loading) => html! {
            <div class="flex items-center gap-3 text-gray-500">
                <span class="h-5 w-5 animate-spin rounded-full border-2 border-indigo-600 border-t-transparent"></span>
                { Banner::Loading.text() }
            </div>
        },
        Some(warning @ Banner::Warning(_)) => html! {
            <Alert severity={Severity::Warning}>{ warning.text() }</Alert>
        },
        Some(Banner::Empty) => html! {
            <Alert severity={Severity::Info}>{ Banner::Empty.text() }</Alert>
        },
        None => html! {},
    }
}

/// Notice cards backed by the notices API, with loading and failure states.
#[function_component(NoticeBoard)]
pub fn notice_board() -> Html {
    let state = use_notices();
    let board = Board::from(&state);

    let cards = board
        .cards
        .iter()
        .map(|notice| {
            html! {
                <NoticeCard key={notice.id.to_string()} notice={notice.clone()} />
            }
        })
        .collect::<Html>();

    html! {
        <div class="rounded-2xl bg-white p-6 shadow-sm">
            { banner(board.banner) }
            <div class="grid gap-4 sm:grid-cols-2">
                { cards }
            </div>
        </div>
    }
}
