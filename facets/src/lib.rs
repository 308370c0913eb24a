//! Models Hub filter facets
//!
//! Filter records for the model listing, their query string encoding, and a
//! typed model of the sidebar controls that produce them.

pub mod config;
pub mod error;
pub mod params;
pub mod query;
pub mod sidebar;

pub use config::Config;
pub use error::{Error, Result};
pub use params::{is_falsy, is_truthy, stringify, FilterParams};
pub use query::{decode, encode, QueryDecoder, QueryEncoder, RuleTable, Strategy};
pub use sidebar::{search_url, Aggregations, FilterUpdate, ModelKind, SidebarState, SortOrder};
