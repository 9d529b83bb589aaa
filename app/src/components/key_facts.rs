use crate::content::SITE;
use yew::prelude::*;

fn card(label: &str, value: &str) -> Html {
    html! {
        <div class="rounded-2xl bg-white p-5 shadow-sm">
            <div class="mb-2 flex items-center gap-2 text-indigo-600">
                <span class="font-bold">{ label }</span>
            </div>
            <div class="text-gray-800">{ value }</div>
        </div>
    }
}

#[function_component(KeyFacts)]
pub fn key_facts() -> Html {
    html! {
        <section class="mx-auto max-w-6xl px-5 -mt-8">
            <div class="grid gap-4 sm:grid-cols-3">
                { card("일시", SITE.date_text) }
                { card("장소", SITE.location_text) }
                { card("정원", SITE.capacity) }
            </div>
        </section>
    }
}
