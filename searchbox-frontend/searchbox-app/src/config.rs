use serde::{Deserialize, Serialize};

/// How overlapping searches are kept from clobbering each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ordering {
    /// Each search waits for the previous one to finish before it is sent.
    /// At most one request is in flight and responses apply in the order they were issued.
    #[default]
    Chain,
    /// Searches are sent right away and carry a ticket. A response is only
    /// applied if no newer search has been issued since.
    LatestWins,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerOptions {
    pub ordering: Ordering,
    /// Put the last good results back up when a search fails instead of leaving the list blank.
    pub restore_on_error: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub endpoint: String,
    pub input_id: String,
    pub results_id: String,
    pub ordering: Ordering,
    pub restore_on_error: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/search".to_string(),
            input_id: "query".to_string(),
            results_id: "results".to_string(),
            ordering: Ordering::default(),
            restore_on_error: false,
        }
    }
}

impl SearchConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_input_id(mut self, input_id: impl Into<String>) -> Self {
        self.input_id = input_id.into();
        self
    }

    pub fn with_results_id(mut self, results_id: impl Into<String>) -> Self {
        self.results_id = results_id.into();
        self
    }

    pub fn with_ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_restore_on_error(mut self, restore_on_error: bool) -> Self {
        self.restore_on_error = restore_on_error;
        self
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            ordering: self.ordering,
            restore_on_error: self.restore_on_error,
        }
    }
}
