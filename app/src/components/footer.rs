use crate::content::SITE;
use chrono::{Datelike, Local};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="mt-12 border-t bg-white/60">
            <div class="mx-auto max-w-6xl px-5 py-6 text-sm text-gray-500">
                { format!("© {year} {}. All rights reserved.", SITE.host) }
            </div>
        </footer>
    }
}
