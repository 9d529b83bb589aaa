use crate::content::{AgendaItem, AGENDA};
use yew::prelude::*;

fn entry(item: &AgendaItem) -> Html {
    html! {
        <li class="mb-6 last:mb-0">
            <span class="absolute -start-2.5 mt-1.5 inline-flex h-4 w-4 items-center justify-center rounded-full bg-indigo-600"></span>
            <div class="flex flex-wrap items-baseline gap-3">
                <span class="inline-flex items-center gap-1 rounded-full bg-indigo-50 px-2 py-1 text-xs font-semibold text-indigo-700">
                    { item.time }
                </span>
                <span class="text-lg font-semibold">{ item.title }</span>
            </div>
            <div class="ps-0.5 text-gray-600">{ item.description }</div>
        </li>
    }
}

#[function_component(Agenda)]
pub fn agenda() -> Html {
    html! {
        <section class="mx-auto mt-10 max-w-6xl px-5">
            <h2 class="mb-4 text-2xl font-bold">{ "진행 일정" }</h2>
            <div class="rounded-2xl bg-white p-6 shadow-sm">
                <ol class="relative border-s-2 border-dashed border-indigo-200 ps-6">
                    { for AGENDA.iter().map(entry) }
                </ol>
            </div>
        </section>
    }
}
