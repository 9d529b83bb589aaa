use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const BUTTON_CLASSES: &str = "inline-flex items-center gap-2 rounded-xl bg-indigo-600 px-5 py-3 \
                              font-semibold text-white shadow hover:bg-indigo-700 transition";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub to: Route,
    pub children: Children,
}

#[function_component(PrimaryButton)]
pub fn primary_button(props: &Props) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes={Classes::from(BUTTON_CLASSES)}>
            { for props.children.iter() }
        </Link<Route>>
    }
}
