use freeplay_core::{CatalogEvent, ViewState};
use leptos::prelude::*;
use crate::app::Dispatch;

/// Previous / numbered / Next buttons. Renders nothing for a single page.
#[component]
pub fn Pagination(state: ReadSignal<ViewState>, dispatch: Dispatch) -> impl IntoView {
    move || {
        state.with(|s| s.pagination()).map(|model| {
            view! {
                <div class="pagination">
                    <button
                        class="page-btn"
                        disabled={!model.prev_enabled}
                        on:click=move |_| dispatch.send(CatalogEvent::PrevPage)
                    >
                        "Previous"
                    </button>
                    {model
                        .pages
                        .into_iter()
                        .map(|button| {
                            let page = button.page;
                            view! {
                                <button
                                    class="page-btn"
                                    class:active=button.active
                                    on:click=move |_| dispatch.send(CatalogEvent::GoToPage(page))
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button
                        class="page-btn"
                        disabled={!model.next_enabled}
                        on:click=move |_| dispatch.send(CatalogEvent::NextPage)
                    >
                        "Next"
                    </button>
                </div>
            }
        })
    }
}
