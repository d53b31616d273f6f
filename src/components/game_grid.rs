//! Paged card grid with hover-to-preview video

use freeplay_core::{Game, ViewState};
use leptos::prelude::*;

#[component]
pub fn GameGrid(state: ReadSignal<ViewState>) -> impl IntoView {
    let preview = state.with_untracked(|s| s.config().capabilities.hover_preview);
    // Only one card previews at a time
    let hovered = RwSignal::new(None::<i64>);

    let visible_games = move || {
        state.with(|s| s.visible().into_iter().cloned().collect::<Vec<Game>>())
    };

    view! {
        <div class="games-grid">
            <For
                each=visible_games
                key=|game| game.id
                children=move |game| view! { <GameCard game=game preview=preview hovered=hovered /> }
            />
        </div>
    }
}

#[component]
fn GameCard(game: Game, preview: bool, hovered: RwSignal<Option<i64>>) -> impl IntoView {
    let id = game.id;
    let title = game.title.clone();
    let thumbnail = game.thumbnail.clone();
    let sources = game.preview_sources();
    let details = [
        game.genre.clone().map(|g| ("Genre", g)),
        game.publisher.clone().map(|p| ("Publisher", p)),
    ];

    let on_enter = move |_: web_sys::MouseEvent| {
        if preview {
            hovered.set(Some(id));
        }
    };
    let on_leave = move |_: web_sys::MouseEvent| {
        if preview {
            hovered.set(None);
        }
    };

    view! {
        <div class="game-card" on:mouseenter=on_enter on:mouseleave=on_leave>
            {move || {
                if preview && hovered.get() == Some(id) {
                    let [webm, mp4] = sources.clone();
                    view! {
                        <video class="game-preview" autoplay muted loop playsinline>
                            <source src=webm.src type=webm.mime />
                            <source src=mp4.src type=mp4.mime />
                        </video>
                    }.into_any()
                } else {
                    view! {
                        <img
                            src=thumbnail.clone()
                            alt=title.clone()
                            class="game-thumbnail"
                            loading="lazy"
                        />
                    }.into_any()
                }
            }}
            <a class="game-link-button" href=game.game_url target="_blank" rel="noopener noreferrer">
                <h3 class="game-title">{game.title}</h3>
            </a>
            <p class="game-description">{game.short_description}</p>
            <p class="game-platform"><b>"Platform: "</b>{game.platform}</p>
            {details
                .into_iter()
                .flatten()
                .map(|(label, value)| view! {
                    <p class="game-meta"><b>{format!("{}: ", label)}</b>{value}</p>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
