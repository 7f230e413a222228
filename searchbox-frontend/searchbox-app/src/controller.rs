//! Turns keystrokes into searches and search replies into a rendered list.
//!
//! Everything here runs on the browser's single UI thread, so state is kept in
//! `Rc`/`Cell`/`RefCell` and the futures handed out are `!Send`. The caller is
//! expected to drive them with `spawn_local`.

use crate::{
    api::SearchService,
    config::{ControllerOptions, Ordering},
    error::AppResult,
    results_view::{self, ResultsView},
};
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use searchbox_api_types::SearchResult;
use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};

type PendingSearch = Shared<LocalBoxFuture<'static, ()>>;

pub struct SearchBoxController<S, V> {
    inner: Rc<Inner<S, V>>,
}

impl<S, V> Clone for SearchBoxController<S, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct Inner<S, V> {
    service: S,
    view: V,
    options: ControllerOptions,
    /// The most recently queued search. New searches chain behind it and take its place.
    pending: RefCell<PendingSearch>,
    /// Ticket of the most recently issued search.
    issued: Cell<u64>,
    last_good: RefCell<Vec<SearchResult>>,
}

impl<S, V> SearchBoxController<S, V>
where
    S: SearchService + 'static,
    V: ResultsView + 'static,
{
    pub fn new(service: S, view: V, options: ControllerOptions) -> Self {
        Self {
            inner: Rc::new(Inner {
                service,
                view,
                options,
                pending: RefCell::new(futures::future::ready(()).boxed_local().shared()),
                issued: Cell::new(0),
                last_good: RefCell::default(),
            }),
        }
    }

    pub fn options(&self) -> ControllerOptions {
        self.inner.options
    }

    pub fn view(&self) -> &V {
        &self.inner.view
    }

    /// Called with the input's value on every `input` event.
    ///
    /// The returned future finishes once this search has been applied (or dropped as stale).
    /// In [`Ordering::Chain`] mode the search is queued even if the future is never polled,
    /// since the next search drives it.
    pub fn on_input_changed(&self, current_text: impl Into<String>) -> LocalBoxFuture<'static, ()> {
        let query = current_text.into();
        match self.inner.options.ordering {
            Ordering::Chain => {
                let previous = self.inner.pending.borrow().clone();
                let controller = self.clone();
                let next = async move {
                    previous.await;
                    let _ = controller.search(query).await;
                }
                .boxed_local()
                .shared();
                self.inner.pending.replace(next.clone());
                next.boxed_local()
            }
            Ordering::LatestWins => {
                let search = self.search(query);
                async move {
                    let _ = search.await;
                }
                .boxed_local()
            }
        }
    }

    /// Sends `query` right away, bypassing the chain.
    ///
    /// The view is cleared as soon as this is called. Once the reply lands it is rendered,
    /// unless the controller runs [`Ordering::LatestWins`] and a newer search was issued meanwhile.
    /// Failures are logged here; the caller only gets them back for inspection.
    pub fn search(
        &self,
        query: impl Into<String>,
    ) -> impl Future<Output = AppResult<Vec<SearchResult>>> + 'static {
        let query = query.into();
        let inner = self.inner.clone();
        let ticket = inner.issued.get() + 1;
        inner.issued.set(ticket);
        inner.view.clear();
        async move {
            let outcome = inner.service.search(&query).await;
            if inner.options.ordering == Ordering::LatestWins && inner.issued.get() != ticket {
                log::debug!("dropping reply for {query:?}, a newer search was issued");
                return outcome;
            }
            match &outcome {
                Ok(results) => {
                    results_view::render(&inner.view, results);
                    *inner.last_good.borrow_mut() = results.clone();
                }
                Err(e) => {
                    log::error!("Search for {query:?} failed: {e}");
                    if inner.options.restore_on_error {
                        results_view::render(&inner.view, &inner.last_good.borrow());
                    }
                }
            }
            outcome
        }
    }

    pub fn render(&self, results: &[SearchResult]) {
        results_view::render(&self.inner.view, results);
    }
}
