pub mod api;
pub mod components;
pub mod config;
pub mod controller;
#[cfg(feature = "csr")]
pub mod dom;
pub mod error;
pub mod results_view;

use crate::components::search_box::*;
use crate::config::SearchConfig;
use leptos::prelude::*;
use leptos_meta::*;

pub use crate::config::Ordering;
pub use crate::controller::SearchBoxController;
pub use crate::error::{AppError, AppResult};

#[component]
pub fn App(#[prop(optional)] config: Option<SearchConfig>) -> impl IntoView {
    provide_meta_context();
    provide_context(config.unwrap_or_default());

    view! {
        <Title text="Search" />
        <main>
            <SearchBox />
        </main>
    }
}
