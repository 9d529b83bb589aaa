use crate::components::{
    Agenda, Contact, Faq, Footer, Hero, KeyFacts, Location, NoticeBoard, PrimaryButton,
};
use crate::Route;
use yew::prelude::*;

#[function_component(InfoPage)]
pub fn info_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <Hero/>
            <KeyFacts/>
            <Agenda/>
            <section class="mx-auto mt-10 max-w-6xl px-5">
                <div class="mb-4 flex items-center justify-between">
                    <h2 class="text-2xl font-bold">{ "공지사항" }</h2>
                    <PrimaryButton to={Route::Register}>{ "신청하기" }</PrimaryButton>
                </div>
                <NoticeBoard/>
            </section>
            <Faq/>
            <Location/>
            <Contact/>
            <Footer/>
        </div>
    }
}
