use leptos::prelude::*;
use searchbox_api_types::SearchResult;
use std::rc::Rc;

/// The container search results are drawn into.
pub trait ResultsView {
    /// Drop every rendered item.
    fn clear(&self);
    /// Add one item after the ones already drawn.
    fn append(&self, result: &SearchResult);
}

impl<T: ResultsView + ?Sized> ResultsView for Rc<T> {
    fn clear(&self) {
        (**self).clear()
    }

    fn append(&self, result: &SearchResult) {
        (**self).append(result)
    }
}

/// Replaces whatever the view shows with `results`, keeping server order.
pub fn render(view: &impl ResultsView, results: &[SearchResult]) {
    view.clear();
    for result in results {
        view.append(result);
    }
}

/// Backs the `<SearchBox/>` component: the list lives in a signal and the component draws it.
#[derive(Clone, Copy, Debug)]
pub struct SignalResultsView(pub RwSignal<Vec<SearchResult>>);

impl ResultsView for SignalResultsView {
    fn clear(&self) {
        self.0.set(Vec::new());
    }

    fn append(&self, result: &SearchResult) {
        let result = result.clone();
        self.0.update(|results| results.push(result));
    }
}
