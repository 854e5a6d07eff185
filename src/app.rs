/// Root component: provides endpoint configuration and document metadata,
/// and routes between the storefront and the admin console.
use crate::config::ApiConfig;
use crate::pages::{admin::AdminPage, index::IndexPage};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/gamevault.css"/>
        <Title text="Sword Master Story"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=IndexPage/>
                    <Route path="/admin" view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}
