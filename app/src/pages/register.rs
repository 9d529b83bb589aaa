use crate::components::{Alert, Severity};
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

/// Placeholder until the registration form exists.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    html! {
        <div class="mx-auto max-w-3xl px-5 py-16">
            <h1 class="mb-4 text-3xl font-extrabold">{ "참석 신청" }</h1>
            <div class="mb-6">
                <Alert severity={Severity::Info}>
                    { "여기는 신청 폼 자리입니다. 다음 단계에서 입력 폼을 붙여 드릴게요." }
                </Alert>
            </div>
            <Link<Route> to={Route::Home} classes={classes!("text-indigo-600", "underline")}>
                { "← 설명 페이지로 돌아가기" }
            </Link<Route>>
        </div>
    }
}
