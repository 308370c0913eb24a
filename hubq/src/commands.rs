//! CLI command implementations.

use std::io::{self, Read};

use facets::{
    Aggregations, Config, FilterParams, FilterUpdate, ModelKind, SidebarState, SortOrder,
};

/// Sidebar selections passed on the command line.
pub struct Selection {
    pub kind: Option<String>,
    pub tags: Vec<String>,
    pub clear_tags: bool,
    pub entities: Vec<String>,
    pub clear_entities: bool,
    pub annotator: Option<String>,
    pub sort: Option<String>,
    pub recommended: Option<bool>,
}

impl Selection {
    /// Updates in control order: type, tags, entities, annotator, sort, recommended.
    fn updates(self) -> facets::Result<Vec<FilterUpdate>> {
        let mut updates = Vec::new();
        if let Some(kind) = self.kind {
            updates.push(FilterUpdate::Type(kind.parse::<ModelKind>()?));
        }
        if self.clear_tags || !self.tags.is_empty() {
            updates.push(FilterUpdate::Tags(self.tags));
        }
        if self.clear_entities || !self.entities.is_empty() {
            updates.push(FilterUpdate::PredictedEntities(self.entities));
        }
        if let Some(annotator) = self.annotator {
            // Empty string clears the select
            let annotator = Some(annotator).filter(|a| !a.is_empty());
            updates.push(FilterUpdate::Annotator(annotator));
        }
        if let Some(sort) = self.sort {
            updates.push(FilterUpdate::Sort(sort.parse::<SortOrder>()?));
        }
        if let Some(recommended) = self.recommended {
            updates.push(FilterUpdate::Recommended(recommended));
        }
        Ok(updates)
    }
}

/// Read a JSON filter record from the argument, or stdin when absent.
fn read_params(arg: Option<&str>) -> facets::Result<FilterParams> {
    let input = match arg {
        Some(s) => s.to_string(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if input.trim().is_empty() {
        return Ok(FilterParams::new());
    }
    FilterParams::from_json_str(&input)
}

/// Write the default config file.
pub fn init(force: bool) -> facets::Result<()> {
    let config = Config::default_location()?;
    config.init(force)?;
    println!("Wrote config to {}", config.config_path().display());
    Ok(())
}

/// Encode a JSON record as a query string.
pub fn encode(params: Option<&str>) -> facets::Result<()> {
    let params = read_params(params)?;
    println!("{}", facets::encode(&params));
    Ok(())
}

/// Decode a query string and print the record as JSON.
pub fn decode(query: &str, format: &str) -> facets::Result<()> {
    let params = facets::decode(query);
    let output = match format {
        "pretty" => serde_json::to_string_pretty(&params)?,
        _ => serde_json::to_string(&params)?,
    };
    println!("{}", output);
    Ok(())
}

/// Print the full search URL for a JSON record.
pub fn url(params: Option<&str>, origin: Option<&str>) -> facets::Result<()> {
    let params = read_params(params)?;
    let url = match origin {
        Some(origin) => facets::search_url(origin, &params),
        None => Config::load()?.search_url(&params),
    };
    println!("{}", url);
    Ok(())
}

/// Apply sidebar selections and print the resulting query string or URL.
pub fn select(
    params: Option<&str>,
    selection: Selection,
    as_url: bool,
    show_state: bool,
) -> facets::Result<()> {
    let mut params = match params {
        Some(json) => FilterParams::from_json_str(json)?,
        None => FilterParams::new(),
    };

    for update in selection.updates()? {
        params.apply(update);
    }

    if as_url {
        println!("{}", Config::load()?.search_url(&params));
    } else {
        println!("{}", facets::encode(&params));
    }

    if show_state {
        print_state(&SidebarState::from_params(&params));
    }
    Ok(())
}

fn print_state(state: &SidebarState) {
    println!("{:<16} {}", "Type:", state.kind);
    println!("{:<16} {}", "Assigned tags:", state.tags.join(", "));
    println!("{:<16} {}", "Entities:", state.predicted_entities.join(", "));
    println!("{:<16} {}", "Annotator class:", state.annotator.as_deref().unwrap_or("-"));
    println!("{:<16} {}", "Sort by:", state.sort);
    println!("{:<16} {}", "Recommended:", if state.recommended { "first" } else { "off" });
}

/// List the option values found in listing metadata.
pub fn options(meta_path: &str, format: &str) -> facets::Result<()> {
    let contents = if meta_path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(meta_path)?
    };
    let meta: serde_json::Value = serde_json::from_str(&contents)?;
    let aggregations = Aggregations::from_meta(&meta);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&aggregations)?);
        }
        _ => {
            print_section("Assigned tags", &aggregations.tags);
            print_section("Entities", &aggregations.predicted_entities);
            print_section("Annotator class", &aggregations.annotators);
        }
    }
    Ok(())
}

fn print_section(label: &str, items: &[String]) {
    println!("{} ({}):", label, items.len());
    for item in items {
        println!("  {}", item);
    }
}
