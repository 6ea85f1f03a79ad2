//! Application state for the leave engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::catalog::RuleCatalog;

/// Shared application state.
///
/// Contains the rule catalog, the only process-wide resource the engine
/// has; everything else is computed per request.
#[derive(Clone)]
pub struct AppState {
    /// The immutable rule-profile catalog.
    catalog: Arc<RuleCatalog>,
}

impl AppState {
    /// Creates a new application state with the given rule catalog.
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns a reference to the rule catalog.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }
}
