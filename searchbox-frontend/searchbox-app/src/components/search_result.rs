use leptos::prelude::*;
use searchbox_api_types::SearchResult;

/// A single hit: the path followed by a line break.
#[component]
pub fn SearchResultItem(result: SearchResult) -> impl IntoView {
    view! {
        <span class="search-result">{result.path}<br/></span>
    }
}
