use leptos::*;

const HERO_STATS: [(&str, &str); 4] = [
    ("5000+", "Активных пользователей"),
    ("1200+", "Продано аккаунтов"),
    ("4.9", "Средний рейтинг"),
    ("100%", "Гарантия безопасности"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-tagline">{ "Безопасные сделки • Проверенные продавцы" }</div>
                <h1 class="hero-title">
                    { "Маркетплейс аккаунтов" }
                    <br/>
                    <span class="gold-text">{ "Sword Master Story" }</span>
                </h1>
                <p class="hero-lead">
                    { "Покупай и продавай игровые аккаунты с прокачанными персонажами, редкими предметами и достижениями" }
                </p>
                <div class="hero-actions">
                    <a href="#catalog" class="button primary">{ "Найти аккаунт" }</a>
                    <a href="/admin" class="button outline">{ "Продать свой" }</a>
                </div>
                <div class="hero-stats">
                    {HERO_STATS.iter().map(|(value, label)| view! {
                        <div class="hero-stat">
                            <div class="hero-stat-value gold-text">{ *value }</div>
                            <div class="hero-stat-label">{ *label }</div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
