use crate::admin::AdminState;
use crate::models::listing::Rarity;
use leptos::logging::log;
use leptos::*;

/// Create form bound to the admin page state. Submission is handled by the
/// page so the request lifecycle stays in one place.
#[component]
pub fn ListingFormPanel(state: RwSignal<AdminState>, on_submit: Callback<()>) -> impl IntoView {
    let submitting = move || state.with(|s| s.submitting);

    let on_rarity_change = move |event: ev::Event| match event_target_value(&event).parse::<Rarity>() {
        Ok(rarity) => state.update(|s| s.form.rarity = rarity),
        Err(err) => log!("[ADMIN] Ignoring rarity selection: {}", err),
    };

    view! {
        <form
            class="card listing-form"
            on:submit=move |event: ev::SubmitEvent| {
                event.prevent_default();
                on_submit.call(());
            }
        >
            <h2 class="card-title">{ "Новое объявление" }</h2>

            <label>
                <span>{ "Название *" }</span>
                <input
                    type="text"
                    name="title"
                    placeholder="Легендарный аккаунт"
                    prop:value=move || state.with(|s| s.form.title.clone())
                    on:input=move |event| state.update(|s| s.form.title = event_target_value(&event))
                />
            </label>

            <label>
                <span>{ "Описание" }</span>
                <textarea
                    name="description"
                    placeholder="Описание аккаунта..."
                    prop:value=move || state.with(|s| s.form.description.clone())
                    on:input=move |event| state.update(|s| s.form.description = event_target_value(&event))
                ></textarea>
            </label>

            <div class="form-row">
                <label>
                    <span>{ "Уровень *" }</span>
                    <input
                        type="number"
                        name="level"
                        placeholder="85"
                        prop:value=move || state.with(|s| s.form.level.clone())
                        on:input=move |event| state.update(|s| s.form.level = event_target_value(&event))
                    />
                </label>
                <label>
                    <span>{ "Мощность *" }</span>
                    <input
                        type="text"
                        name="power"
                        placeholder="1.2M"
                        prop:value=move || state.with(|s| s.form.power.clone())
                        on:input=move |event| state.update(|s| s.form.power = event_target_value(&event))
                    />
                </label>
            </div>

            <div class="form-row">
                <label>
                    <span>{ "Цена (₽) *" }</span>
                    <input
                        type="number"
                        name="price"
                        placeholder="15000"
                        prop:value=move || state.with(|s| s.form.price.clone())
                        on:input=move |event| state.update(|s| s.form.price = event_target_value(&event))
                    />
                </label>
                <label>
                    <span>{ "Редкость *" }</span>
                    <select name="rarity" on:change=on_rarity_change>
                        {Rarity::ALL.into_iter().map(|rarity| view! {
                            <option
                                value=rarity.as_str()
                                selected=move || state.with(|s| s.form.rarity == rarity)
                            >
                                { rarity.label() }
                            </option>
                        }).collect::<Vec<_>>()}
                    </select>
                </label>
            </div>

            <label>
                <span>{ "URL изображения" }</span>
                <input
                    type="text"
                    name="image_url"
                    placeholder="https://..."
                    prop:value=move || state.with(|s| s.form.image_url.clone())
                    on:input=move |event| state.update(|s| s.form.image_url = event_target_value(&event))
                />
            </label>

            <button type="submit" class="button primary wide" prop:disabled=submitting>
                {move || if submitting() { "Создание..." } else { "Создать объявление" }}
            </button>
        </form>
    }
}
