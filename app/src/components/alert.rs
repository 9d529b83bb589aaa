use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    fn palette(self) -> &'static str {
        match self {
            Severity::Info => "border-sky-200 bg-sky-50 text-sky-800",
            Severity::Warning => "border-amber-200 bg-amber-50 text-amber-800",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub severity: Severity,
    pub children: Children,
}

#[function_component(Alert)]
pub fn alert(props: &Props) -> Html {
    let class = format!("rounded-lg border px-4 py-3 {}", props.severity.palette());

    html! {
        <div role="alert" class={class}>
            { for props.children.iter() }
        </div>
    }
}
