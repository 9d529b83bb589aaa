use crate::content::SITE;
use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section class="mx-auto mt-10 max-w-6xl px-5">
            <h2 class="mb-2 text-2xl font-bold">{ "문의" }</h2>
            <div class="rounded-2xl bg-white p-6 shadow-sm">
                <div class="flex flex-wrap items-center gap-4 text-gray-700">
                    <a class="inline-flex items-center gap-2" href={format!("tel:{}", SITE.contact.phone)}>
                        { SITE.contact.phone }
                    </a>
                    <span class="h-5 border-s border-gray-200"></span>
                    <span class="inline-flex items-center gap-2">
                        { format!("담당: {}", SITE.contact.person) }
                    </span>
                </div>
            </div>
        </section>
    }
}
