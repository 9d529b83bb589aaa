use crate::content::SITE;
use yew::prelude::*;

#[function_component(Location)]
pub fn location() -> Html {
    let map = match SITE.map_src() {
        Some(src) => html! {
            <iframe
                src={src}
                width="100%"
                height="360"
                loading="lazy"
                allowfullscreen={true}
                referrerpolicy="no-referrer-when-downgrade"
                title="map"
            />
        },
        None => html! {
            <div class="p-6 text-gray-600">
                { "지도 임베드 URL을 설정하면 이 영역에 지도가 표시됩니다." }
            </div>
        },
    };

    html! {
        <section class="mx-auto mt-10 max-w-6xl px-5">
            <h2 class="mb-4 text-2xl font-bold">{ "오시는 길" }</h2>
            <div class="overflow-hidden rounded-2xl bg-white shadow-sm">
                { map }
            </div>
        </section>
    }
}
