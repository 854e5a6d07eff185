use leptos::*;
use leptos_router::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-row">
                <A href="/" class="brand">{ "Sword Master Story" }</A>
                <nav class="header-nav">
                    <a href="#catalog">{ "Каталог" }</a>
                    <a href="#reviews">{ "Отзывы" }</a>
                </nav>
                <div class="header-actions">
                    <button type="button" class="button outline">{ "Войти" }</button>
                    <A href="/admin" class="button primary">{ "Продать аккаунт" }</A>
                </div>
            </div>
        </header>
    }
}
