use super::write_output;
use crate::layout::{Element, NamingConvention};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(
        &self,
        layout: &str,
        elements: &mut [Element],
        convention: NamingConvention,
    ) -> Result<()> {
        let report = JsonReport::from_elements(layout, elements, convention);
        let mut json = serde_json::to_string_pretty(&report).into_diagnostic()?;
        json.push('\n');
        write_output(self.output_path.as_ref(), &json)
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    layout: String,
    convention: NamingConvention,
    total: usize,
    elements: Vec<JsonElement>,
}

#[derive(Serialize)]
struct JsonElement {
    type_name: String,
    id: String,
    full_id: String,
    field_name: String,
    field: bool,
    click_handler: bool,
    /// Included layout the view came from, absent for the root layout
    #[serde(skip_serializing_if = "Option::is_none")]
    included_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
}

impl JsonReport {
    fn from_elements(layout: &str, elements: &mut [Element], convention: NamingConvention) -> Self {
        let elements: Vec<JsonElement> = elements
            .iter_mut()
            .map(|element| JsonElement {
                field_name: element.field_name(convention).to_string(),
                type_name: element.type_name().to_string(),
                id: element.raw_id().to_string(),
                full_id: element.full_id(),
                field: element.include_field_declaration,
                click_handler: element.include_click_handler,
                included_from: element.source().layout.clone(),
                offset: element.source().offset,
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION"),
            layout: layout.to_string(),
            convention,
            total: elements.len(),
            elements,
        }
    }
}
