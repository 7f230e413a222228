use crate::{
    api::HttpSearchService, components::search_result::*, config::SearchConfig,
    controller::SearchBoxController, results_view::SignalResultsView,
};
use leptos::{prelude::*, task::spawn_local};
use searchbox_api_types::SearchResult;
use send_wrapper::SendWrapper;

/// Text input plus the list of results for whatever is typed into it.
///
/// Uses the `config` prop if given, then a `SearchConfig` from context, then the defaults.
#[component]
pub fn SearchBox(#[prop(optional)] config: Option<SearchConfig>) -> impl IntoView {
    let config = config
        .or_else(use_context::<SearchConfig>)
        .unwrap_or_default();
    let results = RwSignal::new(Vec::<SearchResult>::new());
    // the controller is Rc based and only ever touched from the UI thread
    let controller = SendWrapper::new(SearchBoxController::new(
        HttpSearchService::new(config.endpoint.clone()),
        SignalResultsView(results),
        config.controller_options(),
    ));

    let SearchConfig {
        input_id,
        results_id,
        ..
    } = config;

    let on_input = move |ev| {
        spawn_local(controller.on_input_changed(event_target_value(&ev)));
    };

    view! {
        <div class="search-box">
            <input id=input_id class="input" type="text" on:input=on_input />
            <div id=results_id class="search-results">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|result| view! { <SearchResultItem result=result /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
