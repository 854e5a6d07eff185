use leptos::*;

const FOOTER_COLUMNS: [(&str, [&str; 4]); 2] = [
    ("Разделы", ["Каталог", "О нас", "FAQ", "Контакты"]),
    ("Поддержка", ["Помощь", "Правила", "Безопасность", "Гарантии"]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">{ "Sword Master" }</div>
                {FOOTER_COLUMNS.iter().map(|(heading, links)| view! {
                    <div class="footer-column">
                        <h4>{ *heading }</h4>
                        <ul>
                            {links.iter().map(|link| view! { <li><a href="#">{ *link }</a></li> }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                }).collect::<Vec<_>>()}
                <div class="footer-column">
                    <h4>{ "Социальные сети" }</h4>
                </div>
            </div>
            <div class="container footer-bottom">
                <span>{ "© 2024 Sword Master Story Marketplace. Все права защищены." }</span>
                <a href="#">{ "Политика конфиденциальности" }</a>
                <a href="#">{ "Условия использования" }</a>
            </div>
        </footer>
    }
}
