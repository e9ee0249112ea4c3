//! Filter Bar Component
//!
//! Three mutually exclusive visibility filters. The active one carries
//! the `active` class; switching filters never touches the task list.

use leptos::prelude::*;

use crate::controller::{use_controller, Action};
use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

/// Available filters, in display order
const FILTERS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let controller = use_controller();

    view! {
        <div class="filter-bar">
            {FILTERS
                .iter()
                .map(|filter| {
                    let filter = *filter;
                    view! {
                        <button
                            class=move || {
                                if store.filter().get() == filter {
                                    "filter-btn active"
                                } else {
                                    "filter-btn"
                                }
                            }
                            on:click=move |_| controller.dispatch(Action::SetFilter(filter))
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
