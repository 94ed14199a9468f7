//! What the controller needs from the page

use naf_types::Tier;
use tracing::Level;

/// The option chosen in a selector, as read from the page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChosenOption {
    pub value: String,
    pub text: String,
    /// Raw `data-type` attribute, if any
    pub data_type: Option<String>,
}

impl ChosenOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>, data_type: Option<&str>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            data_type: data_type.map(str::to_string),
        }
    }

    /// Tier named by the option's `data-type`, if it is a known one
    pub fn tier(&self) -> Option<Tier> {
        self.data_type.as_deref().and_then(Tier::from_data_type)
    }
}

/// The four selectors of the page
///
/// Methods take `&self`: implementations either hold DOM handles (which are
/// reference types) or use interior mutability.
pub trait SelectorView {
    /// Whether the selector currently carries the `disabled` attribute
    fn is_disabled(&self, tier: Tier) -> bool;

    /// Add (`true`) or remove (`false`) the `disabled` attribute
    fn set_disabled_attribute(&self, tier: Tier, disabled: bool);

    /// Replace the selector's content wholesale
    fn replace_options(&self, tier: Tier, markup: &str);

    /// Toggle the loading class on the selector's container
    fn set_loading(&self, tier: Tier, loading: bool);

    /// Blocking, modal notification
    fn notify(&self, message: &str);

    /// Developer diagnostic (browser console)
    fn log(&self, level: Level, message: &str);
}
