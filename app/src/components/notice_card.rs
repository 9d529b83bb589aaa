use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub notice: models::Notice,
}

#[function_component(NoticeCard)]
pub fn notice_card(Props { notice }: &Props) -> Html {
    let pinned = if notice.pinned {
        html! {
            <span class="inline-flex items-center gap-1 rounded-full bg-amber-50 px-2 py-0.5 text-xs font-semibold text-amber-700">
                { "상단 고정" }
            </span>
        }
    } else {
        html! {}
    };

    html! {
        <article class="rounded-xl border border-gray-100 p-4 hover:shadow-sm transition">
            <div class="mb-2 flex items-center gap-2">
                { pinned }
                <span class="text-sm text-gray-500">{ notice.created_at_local() }</span>
            </div>
            <h3 class="mb-1 text-lg font-bold">{ notice.title.clone() }</h3>
            <p class="text-gray-700 whitespace-pre-line">{ notice.content.clone() }</p>
        </article>
    }
}
