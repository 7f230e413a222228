//! Attaches a controller to markup that is already on the page,
//! `<input id="query">` and `<div id="results">` by default.

use crate::{
    api::HttpSearchService,
    config::SearchConfig,
    controller::SearchBoxController,
    error::{AppError, AppResult},
    results_view::ResultsView,
};
use leptos::task::spawn_local;
use searchbox_api_types::SearchResult;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlInputElement};

/// Draws results straight into a container element, one `<span>path<br></span>` per hit.
#[derive(Clone, Debug)]
pub struct DomResultsView {
    document: Document,
    container: Element,
}

impl DomResultsView {
    pub fn new(document: Document, container: Element) -> Self {
        Self {
            document,
            container,
        }
    }
}

impl ResultsView for DomResultsView {
    fn clear(&self) {
        self.container.set_inner_html("");
    }

    fn append(&self, result: &SearchResult) {
        let item = match self.document.create_element("span") {
            Ok(item) => item,
            Err(e) => {
                log::error!("Failed to create result item: {e:?}");
                return;
            }
        };
        let text = self.document.create_text_node(&result.path);
        let appended = item
            .append_child(&text)
            .and_then(|_| self.document.create_element("br"))
            .and_then(|br| item.append_child(&br))
            .and_then(|_| self.container.append_child(&item));
        if let Err(e) = appended {
            log::error!("Failed to render {}: {e:?}", result.path);
        }
    }
}

pub type DomSearchBox = SearchBoxController<HttpSearchService, DomResultsView>;

/// Finds the configured input and results elements and starts searching on every `input` event.
pub fn bind(config: &SearchConfig) -> AppResult<DomSearchBox> {
    let document = leptos::leptos_dom::helpers::document();
    let input = element_by_id(&document, &config.input_id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| AppError::WrongElement(config.input_id.clone()))?;
    let container = element_by_id(&document, &config.results_id)?;

    let controller = SearchBoxController::new(
        HttpSearchService::new(config.endpoint.clone()),
        DomResultsView::new(document, container),
        config.controller_options(),
    );

    let on_input = {
        let controller = controller.clone();
        let input = input.clone();
        Closure::wrap(Box::new(move || {
            spawn_local(controller.on_input_changed(input.value()));
        }) as Box<dyn FnMut()>)
    };
    input
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("could not listen for input on #{}: {e:?}", config.input_id))?;
    // the listener lives as long as the page does
    on_input.forget();

    log::info!("search box bound to #{} and #{}", config.input_id, config.results_id);
    Ok(controller)
}

/// True when the page already carries the configured input element.
pub fn markup_present(config: &SearchConfig) -> bool {
    leptos::leptos_dom::helpers::document()
        .get_element_by_id(&config.input_id)
        .is_some()
}

fn element_by_id(document: &Document, id: &str) -> AppResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AppError::MissingElement(id.to_string()))
}
