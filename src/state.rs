//! Application state management.

use crate::contract::{Contract, ContractError, Interaction};
use crate::models::RecordedRequest;
use parking_lot::RwLock;
use std::collections::VecDeque;
use tracing::info;

/// Default number of requests kept in the journal.
pub const DEFAULT_JOURNAL_LIMIT: usize = 10_000;

/// Application state shared across all handlers.
///
/// Locks are only held for the duration of a lookup or a push.
#[derive(Debug)]
pub struct AppState {
    /// Consumer named by the contract.
    pub consumer: String,
    /// Provider named by the contract.
    pub provider: String,
    interactions: RwLock<Vec<Interaction>>,
    journal: RwLock<VecDeque<RecordedRequest>>,
    journal_limit: usize,
}

impl AppState {
    /// Creates a new application state serving `contract`.
    #[must_use]
    pub fn new(contract: Contract) -> Self {
        info!(
            "Serving {} interactions for {} -> {}",
            contract.interactions.len(),
            contract.consumer,
            contract.provider
        );

        Self {
            consumer: contract.consumer,
            provider: contract.provider,
            interactions: RwLock::new(contract.interactions),
            journal: RwLock::new(VecDeque::new()),
            journal_limit: DEFAULT_JOURNAL_LIMIT,
        }
    }

    /// Sets how many requests the journal keeps; older entries are dropped
    /// first. A limit of zero is raised to one.
    #[must_use]
    pub fn with_journal_limit(mut self, limit: usize) -> Self {
        self.journal_limit = limit.max(1);
        self
    }

    /// Returns the first interaction matching `request`.
    #[must_use]
    pub fn find(&self, request: &RecordedRequest) -> Option<Interaction> {
        self.interactions
            .read()
            .iter()
            .find(|interaction| interaction.request.matches(request))
            .cloned()
    }

    /// Registers an interaction ahead of all existing ones.
    ///
    /// # Errors
    /// Returns error if the interaction is invalid.
    pub fn register(&self, interaction: Interaction) -> Result<(), ContractError> {
        interaction.validate()?;
        info!("Registered interaction: {}", interaction.description);
        self.interactions.write().insert(0, interaction);
        Ok(())
    }

    /// Returns the interactions in match order.
    #[must_use]
    pub fn interactions(&self) -> Vec<Interaction> {
        self.interactions.read().clone()
    }

    /// Appends a request to the journal, evicting the oldest entry once
    /// the journal limit is reached.
    pub fn record(&self, request: RecordedRequest) {
        let mut journal = self.journal.write();
        if journal.len() >= self.journal_limit {
            journal.pop_front();
        }
        journal.push_back(request);
    }

    /// Returns recorded requests, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.journal.read().iter().cloned().collect()
    }

    /// Clears the journal.
    pub fn clear_requests(&self) {
        self.journal.write().clear();
    }
}
