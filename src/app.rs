use freeplay_core::{CatalogConfig, CatalogEvent, Variant, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::{self, BUILD_HASH, BUILD_TIMESTAMP};
use crate::components::{GameGrid, StatusLine, Toolbar};

fn catalog_config() -> CatalogConfig {
    let variant = if cfg!(feature = "compact") { Variant::Compact } else { Variant::Full };
    CatalogConfig::new(variant).with_api_base(api::api_base())
}

/// Sends events through the reducer and runs the requests it issues.
///
/// Completions come back as `FetchCompleted` events; the reducer drops any
/// whose sequence number has been superseded.
#[derive(Clone, Copy)]
pub struct Dispatch(RwSignal<ViewState>);

impl Dispatch {
    pub fn send(self, event: CatalogEvent) {
        let mut request = None;
        self.0.update(|state| {
            let (next, issued) = std::mem::take(state).apply(event);
            *state = next;
            request = issued;
        });

        if let Some(request) = request {
            spawn_local(async move {
                let result = api::fetch_games(&request).await;
                self.send(CatalogEvent::FetchCompleted { seq: request.seq, result });
            });
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ViewState::new(catalog_config()));
    let dispatch = Dispatch(state);
    let view_state = state.read_only();

    // Initial load
    dispatch.send(CatalogEvent::Mounted);

    view! {
        <div class="app">
            <h1 class="app-title">"Free-to-play games"</h1>
            <Toolbar state=view_state dispatch=dispatch />
            <StatusLine state=view_state />
            <GameGrid state=view_state />
            <footer class="app-footer">
                <span class="game-count">
                    {move || format!("{} games", view_state.with(|s| s.filtered().len()))}
                </span>
                <span class="build-info">{format!("{} ({})", BUILD_HASH, BUILD_TIMESTAMP)}</span>
            </footer>
        </div>
    }
}
