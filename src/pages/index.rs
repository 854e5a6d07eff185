use crate::components::{
    catalog::Catalog, footer::Footer, header::Header, hero::Hero, reviews_panel::ReviewsPanel,
};
use leptos::*;
use leptos_meta::Title;

/// Public storefront.
#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <Title text="Sword Master Story · маркетплейс аккаунтов"/>
        <div class="page">
            <Header/>
            <Hero/>
            <Catalog/>
            <ReviewsPanel/>
            <Footer/>
        </div>
    }
}
