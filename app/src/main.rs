#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

mod components;
mod config;
mod content;
mod hooks;
mod pages;
mod transport;

use config::AppConfig;
use yew::context::ContextProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: &Route) -> Html {
    match routes {
        Route::Home => html! { <pages::InfoPage/> },
        Route::Register => html! { <pages::RegisterPage/> },
        Route::NotFound => html! { <pages::NotFound/> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(AppConfig::from_build_env);

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Switch<Route> render={Switch::render(switch)} />
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Notices API at {}", AppConfig::from_build_env().api_base);

    yew::start_app::<App>();
}
