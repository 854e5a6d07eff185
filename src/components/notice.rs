use crate::admin::{Notice, NoticeKind};
use leptos::*;

#[component]
pub fn NoticeBanner(
    #[prop(into)] notice: Signal<Option<Notice>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Error => "notice error",
            };
            view! {
                <div class=class role="alert">
                    <strong>{ notice.title }</strong>
                    <span>{ notice.message }</span>
                    <button type="button" class="notice-close" on:click=move |_| on_dismiss.call(())>
                        { "×" }
                    </button>
                </div>
            }
        })
    }
}
