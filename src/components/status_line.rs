//! Loading, error and empty-state messages above the grid

use freeplay_core::ViewState;
use leptos::prelude::*;

#[component]
pub fn StatusLine(state: ReadSignal<ViewState>) -> impl IntoView {
    move || {
        state.with(|s| {
            if s.is_loading() {
                view! { <p class="loader">"Loading..."</p> }.into_any()
            } else if let Some(error) = s.error() {
                view! { <p class="error">{error.to_string()}</p> }.into_any()
            } else if s.games().is_empty() {
                view! { <p class="no-games">"No games to display"</p> }.into_any()
            } else if s.total_pages() == 0 {
                let message = format!("No games match \"{}\"", s.filters().search);
                view! { <p class="no-games">{message}</p> }.into_any()
            } else {
                ().into_any()
            }
        })
    }
}
