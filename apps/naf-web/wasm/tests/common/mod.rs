//! In-memory page and fragment host for controller tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use naf_types::Tier;
use naf_web_wasm::{FetchError, FetchResponse, FragmentSource, SelectorView};
use tokio::sync::oneshot;
use tracing::Level;

/// Selectors held in memory; counts every attribute mutation
#[derive(Default)]
pub struct FakeView {
    disabled: RefCell<[bool; 4]>,
    content: RefCell<[String; 4]>,
    loading: RefCell<[bool; 4]>,
    notifications: RefCell<Vec<String>>,
    logs: RefCell<Vec<(Level, String)>>,
    attribute_mutations: Cell<usize>,
}

impl FakeView {
    pub fn disabled(&self) -> [bool; 4] {
        *self.disabled.borrow()
    }

    pub fn content(&self, tier: Tier) -> String {
        self.content.borrow()[tier.ordinal()].clone()
    }

    pub fn is_loading(&self, tier: Tier) -> bool {
        self.loading.borrow()[tier.ordinal()]
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }

    /// Logged messages at exactly `level`
    pub fn logs(&self, level: Level) -> Vec<String> {
        self.logs
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn attribute_mutations(&self) -> usize {
        self.attribute_mutations.get()
    }
}

impl SelectorView for FakeView {
    fn is_disabled(&self, tier: Tier) -> bool {
        self.disabled.borrow()[tier.ordinal()]
    }

    fn set_disabled_attribute(&self, tier: Tier, disabled: bool) {
        self.disabled.borrow_mut()[tier.ordinal()] = disabled;
        self.attribute_mutations.set(self.attribute_mutations.get() + 1);
    }

    fn replace_options(&self, tier: Tier, markup: &str) {
        self.content.borrow_mut()[tier.ordinal()] = markup.to_string();
    }

    fn set_loading(&self, tier: Tier, loading: bool) {
        self.loading.borrow_mut()[tier.ordinal()] = loading;
    }

    fn notify(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }

    fn log(&self, level: Level, message: &str) {
        self.logs.borrow_mut().push((level, message.to_string()));
    }
}

/// Serves fixed responses; unknown URLs answer 404
#[derive(Default)]
pub struct StaticSource {
    responses: HashMap<String, Result<FetchResponse, FetchError>>,
    requests: RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), Ok(FetchResponse::new(200, body)));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), Ok(FetchResponse::new(status, "")));
        self
    }

    pub fn with_network_error(mut self, url: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            Err(FetchError::Network("connection refused".to_string())),
        );
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FragmentSource for StaticSource {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Ok(FetchResponse::new(404, "")))
    }
}

/// Responses are released by the test, in any order
#[derive(Default)]
pub struct GatedSource {
    gates: RefCell<HashMap<String, oneshot::Receiver<FetchResponse>>>,
    requests: RefCell<Vec<String>>,
}

impl GatedSource {
    /// Register a URL; the returned sender resolves its request
    pub fn gate(&self, url: &str) -> oneshot::Sender<FetchResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(url.to_string(), rx);
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FragmentSource for GatedSource {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        let gate = self.gates.borrow_mut().remove(url);
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| FetchError::Network("gate dropped".to_string())),
            None => Ok(FetchResponse::new(404, "")),
        }
    }
}
