use freeplay_core::{CatalogEvent, Category, Platform, SortKey, ViewState};
use leptos::prelude::*;
use web_sys::console;
use crate::app::Dispatch;
use crate::components::Pagination;

#[component]
pub fn Toolbar(state: ReadSignal<ViewState>, dispatch: Dispatch) -> impl IntoView {
    let search_enabled = state.with_untracked(|s| s.config().capabilities.search);
    let search_query = move || state.with(|s| s.filters().search.clone());

    view! {
        <div class="filters">
            <Show when=move || search_enabled>
                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Search games..."
                        prop:value=search_query
                        on:input=move |ev| {
                            dispatch.send(CatalogEvent::SetSearch(event_target_value(&ev)));
                        }
                    />
                    <Show when=move || !search_query().is_empty()>
                        <button
                            class="search-clear"
                            on:click=move |_| dispatch.send(CatalogEvent::SetSearch(String::new()))
                            title="Clear search"
                        >
                            "×"
                        </button>
                    </Show>
                </div>
            </Show>
            <select
                class="platform-filter"
                prop:value=move || state.with(|s| s.filters().platform.as_param())
                on:change=move |ev| { match event_target_value(&ev).parse::<Platform>() {
                    Ok(platform) => dispatch.send(CatalogEvent::SetPlatform(platform)),
                    Err(e) => console::error_1(&e.to_string().into()),
                } }
            >
                {Platform::ALL
                    .iter()
                    .map(|p| view! { <option value=p.as_param()>{p.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="category-filter"
                prop:value=move || state.with(|s| s.filters().category.as_param())
                on:change=move |ev| { match event_target_value(&ev).parse::<Category>() {
                    Ok(category) => dispatch.send(CatalogEvent::SetCategory(category)),
                    Err(e) => console::error_1(&e.to_string().into()),
                } }
            >
                {Category::ALL
                    .iter()
                    .map(|c| view! { <option value=c.as_param()>{c.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="sort-filter"
                prop:value=move || state.with(|s| s.filters().sort.as_param())
                on:change=move |ev| { match event_target_value(&ev).parse::<SortKey>() {
                    Ok(sort) => dispatch.send(CatalogEvent::SetSort(sort)),
                    Err(e) => console::error_1(&e.to_string().into()),
                } }
            >
                {SortKey::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_param()>{s.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <Pagination state=state dispatch=dispatch />
            <button
                class="reset-button"
                on:click=move |_| dispatch.send(CatalogEvent::ResetFilters)
            >
                "Reset filters"
            </button>
        </div>
    }
}
