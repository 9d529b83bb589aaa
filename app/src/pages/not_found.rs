use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="mx-auto max-w-3xl px-5 py-16">
            <h1 class="mb-4 text-3xl font-extrabold">{ "404" }</h1>
            <Link<Route> to={Route::Home} classes={classes!("text-indigo-600", "underline")}>
                { "← 설명 페이지로 돌아가기" }
            </Link<Route>>
        </div>
    }
}
