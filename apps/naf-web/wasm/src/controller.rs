//! Cascading selection: sector → division → group → class
//!
//! Choosing an option loads the next tier's fragment, keyed by the chosen
//! code, and applies a fixed enable/disable matrix to the four selectors.
//! Choosing a class ends the cascade with a confirmation.
//!
//! Requests are never cancelled. Each one takes a ticket from a per-tier
//! counter instead, and a response is applied only while its ticket is still
//! the latest for that tier, so a slow stale response cannot overwrite a
//! newer one.

use std::cell::Cell;

use naf_types::{fragment_url, leaf_confirmation, Tier, ERROR_FRAGMENT};
use tracing::Level;

use crate::config::SelectConfig;
use crate::source::FragmentSource;
use crate::view::{ChosenOption, SelectorView};

/// Result of a fragment load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fragment replaced the target's content
    Applied,
    /// The error fragment replaced the target's content
    Failed,
    /// A newer request for the same tier was issued meanwhile; nothing changed
    Superseded,
    /// The chosen option does not lead to another tier
    Ignored,
}

/// Enable/disable matrix applied after each kind of choice, in tier order
/// (`true` = disabled)
const AFTER_READY: [bool; 4] = [false, true, true, true];
const AFTER_SECTOR: [bool; 4] = [false, false, true, true];
const AFTER_DIVISION: [bool; 4] = [false, false, false, true];
const AFTER_GROUP: [bool; 4] = [false, false, false, false];

pub struct CascadingSelectController<V, S> {
    view: V,
    source: S,
    config: SelectConfig,
    tickets: [Cell<u64>; 4],
}

impl<V: SelectorView, S: FragmentSource> CascadingSelectController<V, S> {
    pub fn new(view: V, source: S, config: SelectConfig) -> Self {
        Self {
            view,
            source,
            config,
            tickets: Default::default(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Load the sectors and leave only the sector selector enabled
    pub async fn initialize(&self) -> LoadOutcome {
        self.apply_matrix(AFTER_READY);
        let url = self.config.sectors_file.clone();
        self.load_fragment(Tier::Sector, &url).await
    }

    /// React to a change in any selector
    ///
    /// `tier` is the selector that fired; the option's own `data-type`
    /// decides what happens next.
    pub async fn on_selection_change(&self, tier: Tier, chosen: &ChosenOption) -> LoadOutcome {
        let (matrix, target) = match chosen.tier() {
            Some(Tier::Sector) => (AFTER_SECTOR, Tier::Division),
            Some(Tier::Division) => (AFTER_DIVISION, Tier::Group),
            Some(Tier::Group) => (AFTER_GROUP, Tier::Class),
            _ => {
                self.view.log(
                    Level::DEBUG,
                    &format!(
                        "No cascade for {:?} option {:?} in {} selector",
                        chosen.data_type, chosen.value, tier
                    ),
                );
                return LoadOutcome::Ignored;
            }
        };

        let Some(folder) = self.config.folder(target) else {
            return LoadOutcome::Ignored;
        };
        let url = fragment_url(folder, &chosen.value);

        self.apply_matrix(matrix);
        self.load_fragment(target, &url).await
    }

    /// Confirm a class choice; the empty placeholder value shows nothing
    ///
    /// Returns whether a notification was shown.
    pub fn on_leaf_selection(&self, chosen: &ChosenOption) -> bool {
        if chosen.value.is_empty() {
            return false;
        }
        self.view
            .notify(&leaf_confirmation(&chosen.text, &chosen.value));
        true
    }

    /// Apply the disabled state of every selector, in tier order
    pub fn set_disabled(&self, sector: bool, division: bool, group: bool, class: bool) {
        self.apply_matrix([sector, division, group, class]);
    }

    /// Add or remove `disabled` on one selector, only if it has to change
    pub fn disable(&self, tier: Tier, disabled: bool) {
        let current = self.view.is_disabled(tier);
        if current != disabled {
            self.view.set_disabled_attribute(tier, disabled);
        }
    }

    pub fn set_loading(&self, tier: Tier, loading: bool) {
        self.view.set_loading(tier, loading);
    }

    /// Fetch `url` into the selector of `tier`
    ///
    /// A non-2xx status or a failed request puts the error fragment in place;
    /// this never fails.
    pub async fn load_fragment(&self, tier: Tier, url: &str) -> LoadOutcome {
        let ticket = self.next_ticket(tier);
        self.set_loading(tier, true);

        let (markup, outcome) = match self.source.get(url).await {
            Ok(response) if response.is_success() => (response.body, LoadOutcome::Applied),
            Ok(response) => {
                self.view.log(
                    Level::WARN,
                    &format!("Fragment {} answered {}", url, response.status),
                );
                (ERROR_FRAGMENT.to_string(), LoadOutcome::Failed)
            }
            Err(e) => {
                self.view
                    .log(Level::WARN, &format!("Fragment {} failed: {}", url, e));
                (ERROR_FRAGMENT.to_string(), LoadOutcome::Failed)
            }
        };

        if !self.is_latest(tier, ticket) {
            self.view
                .log(Level::DEBUG, &format!("Dropping stale {} fragment {}", tier, url));
            return LoadOutcome::Superseded;
        }

        self.view.replace_options(tier, &markup);
        self.set_loading(tier, false);
        outcome
    }

    fn apply_matrix(&self, matrix: [bool; 4]) {
        for (tier, disabled) in Tier::ALL.into_iter().zip(matrix) {
            self.disable(tier, disabled);
        }
    }

    fn next_ticket(&self, tier: Tier) -> u64 {
        let counter = &self.tickets[tier.ordinal()];
        let ticket = counter.get() + 1;
        counter.set(ticket);
        ticket
    }

    fn is_latest(&self, tier: Tier, ticket: u64) -> bool {
        self.tickets[tier.ordinal()].get() == ticket
    }
}
