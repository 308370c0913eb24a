//! Query string codec for filter records.
//!
//! # Field rules
//!
//! - **`_type`**: reserved, never serialized
//! - **`supported`**: `supported=1` when truthy
//! - **`tags`, `predicted_entities`**: one pair per element
//! - **`sort`**: omitted when `date` (the default)
//! - **`recommended`**: only the falsy form, as `recommended=0`
//! - **anything else**: `key=value` when truthy
//!
//! Output is `""` or `?` followed by form-urlencoded pairs.

mod decoder;
mod encoder;
mod rules;

pub use decoder::{decode, QueryDecoder};
pub use encoder::{encode, QueryEncoder};
pub use rules::{RuleTable, Strategy, DEFAULT_SORT, MULTI_VALUE_FIELDS, RESERVED_FIELD};
