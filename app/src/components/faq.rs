use crate::content::FAQS;
use yew::prelude::*;

#[function_component(Faq)]
pub fn faq() -> Html {
    let entries = FAQS.iter().map(|faq| {
        html! {
            <details class="group border-b last:border-none">
                <summary class="flex cursor-pointer list-none items-center justify-between py-4">
                    <div class="flex items-center gap-2 font-semibold">{ faq.question }</div>
                    <span class="text-indigo-600 transition group-open:rotate-180">{ "⌄" }</span>
                </summary>
                <div class="pb-4 text-gray-700">{ faq.answer }</div>
            </details>
        }
    });

    html! {
        <section class="mx-auto mt-10 max-w-6xl px-5">
            <h2 class="mb-4 text-2xl font-bold">{ "자주 묻는 질문" }</h2>
            <div class="rounded-2xl bg-white p-6 shadow-sm">
                { for entries }
            </div>
        </section>
    }
}
