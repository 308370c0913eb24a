//! Typed model of the listing's filter sidebar.
//!
//! Each control reports a single-field [`FilterUpdate`]; the update is merged
//! into the current [`FilterParams`] and the merged record is encoded into the
//! navigation URL.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::params::{is_truthy, stringify, FilterParams};
use crate::query::encode;
use crate::{Error, Result};

/// Listing type radio group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModelKind {
    #[default]
    All,
    Model,
    Pipeline,
}

impl ModelKind {
    /// Value carried in the `type` field. `All` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::All => "",
            ModelKind::Model => "model",
            ModelKind::Pipeline => "pipeline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::All => "All",
            ModelKind::Model => "Models",
            ModelKind::Pipeline => "Pipelines",
        }
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | "all" => Ok(ModelKind::All),
            "model" => Ok(ModelKind::Model),
            "pipeline" => Ok(ModelKind::Pipeline),
            other => Err(Error::InvalidParams(format!(
                "unknown type '{}' (expected all, model or pipeline)",
                other
            ))),
        }
    }
}

/// Sort radio group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Date,
    Views,
    Downloads,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Date => "date",
            SortOrder::Views => "views",
            SortOrder::Downloads => "downloads",
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "date" => Ok(SortOrder::Date),
            "views" => Ok(SortOrder::Views),
            "downloads" => Ok(SortOrder::Downloads),
            other => Err(Error::InvalidParams(format!(
                "unknown sort order '{}' (expected date, views or downloads)",
                other
            ))),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A change reported by one sidebar control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Type(ModelKind),
    Tags(Vec<String>),
    PredictedEntities(Vec<String>),
    /// `None` clears the selection.
    Annotator(Option<String>),
    Sort(SortOrder),
    Recommended(bool),
}

impl FilterUpdate {
    /// Field this update writes.
    pub fn field(&self) -> &'static str {
        match self {
            FilterUpdate::Type(_) => "type",
            FilterUpdate::Tags(_) => "tags",
            FilterUpdate::PredictedEntities(_) => "predicted_entities",
            FilterUpdate::Annotator(_) => "annotator",
            FilterUpdate::Sort(_) => "sort",
            FilterUpdate::Recommended(_) => "recommended",
        }
    }

    /// Value this update writes.
    pub fn value(&self) -> Value {
        match self {
            FilterUpdate::Type(kind) => Value::from(kind.as_str()),
            FilterUpdate::Tags(items) | FilterUpdate::PredictedEntities(items) => {
                Value::from(items.clone())
            }
            FilterUpdate::Annotator(Some(name)) => Value::from(name.as_str()),
            FilterUpdate::Annotator(None) => Value::Null,
            FilterUpdate::Sort(order) => Value::from(order.as_str()),
            FilterUpdate::Recommended(flag) => Value::Bool(*flag),
        }
    }
}

impl FilterParams {
    /// Merge a control change into the record.
    pub fn apply(&mut self, update: FilterUpdate) {
        tracing::debug!(field = update.field(), ?update, "applying filter update");
        self.set(update.field(), update.value());
    }

    /// Builder-style [`FilterParams::apply`].
    pub fn applied(mut self, update: FilterUpdate) -> Self {
        self.apply(update);
        self
    }
}

/// Current selection of every sidebar control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub kind: ModelKind,
    pub tags: Vec<String>,
    pub predicted_entities: Vec<String>,
    pub annotator: Option<String>,
    pub sort: SortOrder,
    pub recommended: bool,
}

impl SidebarState {
    /// Read the selection from a record. Unknown `type`/`sort` values fall
    /// back to the control defaults.
    pub fn from_params(params: &FilterParams) -> Self {
        let kind: ModelKind = params
            .get("type")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let sort: SortOrder = params
            .get("sort")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let annotator = params
            .get("annotator")
            .filter(|v| is_truthy(v))
            .map(stringify);

        Self {
            kind,
            tags: string_list(params.get("tags")),
            predicted_entities: string_list(params.get("predicted_entities")),
            annotator,
            sort,
            recommended: params.get("recommended").is_some_and(is_truthy),
        }
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(stringify).collect(),
        Some(v) if is_truthy(v) => vec![stringify(v)],
        _ => Vec::new(),
    }
}

/// Option lists for the tag, entity and annotator controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregations {
    pub tags: Vec<String>,
    pub predicted_entities: Vec<String>,
    pub annotators: Vec<String>,
}

impl Aggregations {
    /// Extract `aggregations.{tags,predictedEntities,annotators}` from listing
    /// metadata. All three lists stay empty unless all three are arrays.
    pub fn from_meta(meta: &Value) -> Self {
        let aggregations = meta.get("aggregations");
        let list = |name: &str| aggregations.and_then(|a| a.get(name)).and_then(Value::as_array);

        match (list("tags"), list("predictedEntities"), list("annotators")) {
            (Some(tags), Some(entities), Some(annotators)) => Self {
                tags: tags.iter().map(stringify).collect(),
                predicted_entities: entities.iter().map(stringify).collect(),
                annotators: annotators.iter().map(stringify).collect(),
            },
            _ => {
                tracing::debug!("listing metadata has no complete aggregations");
                Self::default()
            }
        }
    }
}

/// Join a search origin and the encoded record, e.g. `http://host/?sort=views`.
pub fn search_url(origin: &str, params: &FilterParams) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), encode(params))
}
