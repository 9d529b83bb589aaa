use crate::components::PrimaryButton;
use crate::content::SITE;
use crate::Route;
use yew::prelude::*;

fn chip(label: &str) -> Html {
    html! {
        <span class="inline-flex items-center rounded-full bg-white px-3 py-1 text-sm font-semibold text-indigo-700">
            { label }
        </span>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="bg-gradient-to-r from-indigo-600 to-blue-600 text-white">
            <div class="mx-auto max-w-6xl px-5 py-10 sm:py-16">
                <div class="flex flex-col items-start gap-6 sm:flex-row sm:items-center sm:justify-between">
                    <div>
                        <div class="mb-3 inline-flex items-center gap-2 rounded-full bg-white/15 px-3 py-1 text-sm">
                            <span>{ "학교 주최 공식 행사" }</span>
                        </div>
                        <h1 class="text-3xl font-extrabold sm:text-5xl">{ SITE.title }</h1>
                        <p class="mt-3 text-white/90">
                            { format!("{} 주최, 선착순 {}. 아래에서 일정과 공지를 확인하세요.", SITE.host, SITE.capacity) }
                        </p>
                        <div class="mt-4 flex flex-wrap gap-2">
                            { chip(SITE.date_text) }
                            { chip(SITE.location_text) }
                        </div>
                    </div>
                    <PrimaryButton to={Route::Register}>{ "신청하기" }</PrimaryButton>
                </div>
            </div>
        </header>
    }
}
