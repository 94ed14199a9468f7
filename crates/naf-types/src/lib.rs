//! Shared model for the NAF/NAFA cascading selector
//!
//! Both sides of the system speak the same vocabulary:
//! - the extractor renders option fragments into the `/data` tree
//! - the browser controller fetches those fragments and reads the
//!   `data-type` of the chosen option to decide which tier comes next

pub mod code;
pub mod error;
pub mod fragment;
pub mod option;
pub mod tier;

pub use code::NafCode;
pub use error::NafError;
pub use fragment::{parse_fragment, Fragment};
pub use option::{title_case, Nomenclature, SelectOption};
pub use tier::Tier;

/// Markup injected in place of a fragment whose fetch did not succeed
pub const ERROR_FRAGMENT: &str = r#"<div class="alert alert-danger"><strong>Error!</strong> Une erreur est survenue, veuillez réessayer plus tard.</div>"#;

/// Build the URL of a child fragment: `base + code + ".htm"`
pub fn fragment_url(base: &str, code: &str) -> String {
    format!("{}{}.htm", base, code)
}

/// Message shown when a class (leaf) option is chosen
pub fn leaf_confirmation(label: &str, value: &str) -> String {
    format!("Votre code NAF/NAFA {} ({})", label, value)
}
