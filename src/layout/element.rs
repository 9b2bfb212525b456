use super::error::ExtractError;
use super::naming::{derive_field_name, NamingConvention};
use regex::Regex;
use std::sync::OnceLock;

/// Matches `@+id/name`, `@id/name` and `@android:id/name`
fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^@\+?(?:android:)?id/(.+)$").unwrap())
}

/// Where an element was found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTag {
    /// Included layout the tag came from, `None` for the root layout
    pub layout: Option<String>,

    /// Byte offset of the tag in that layout's text, when the tree knows it
    pub offset: Option<usize>,
}

impl SourceTag {
    pub fn new(layout: Option<String>, offset: Option<usize>) -> Self {
        Self { layout, offset }
    }
}

/// A view carrying an id, found while walking a layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    type_name: String,
    raw_id: String,
    field_name: Option<String>,

    /// Emit an `@OnClick` style handler for this view
    pub include_click_handler: bool,

    /// Emit a field declaration for this view
    pub include_field_declaration: bool,

    source: SourceTag,
}

impl Element {
    /// Build an element from a tag name (simple or fully qualified) and the
    /// raw value of its id attribute.
    pub fn new(type_name: &str, id_value: &str, source: SourceTag) -> Result<Self, ExtractError> {
        let raw_id = id_pattern()
            .captures(id_value.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| ExtractError::InvalidIdentifier {
                tag: type_name.to_string(),
                value: id_value.to_string(),
            })?;

        Ok(Self {
            type_name: simple_type_name(type_name).to_string(),
            raw_id,
            field_name: None,
            include_click_handler: false,
            include_field_declaration: true,
            source,
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn raw_id(&self) -> &str {
        &self.raw_id
    }

    /// `R.id.<raw_id>`
    pub fn full_id(&self) -> String {
        format!("R.id.{}", self.raw_id)
    }

    pub fn source(&self) -> &SourceTag {
        &self.source
    }

    /// Field name, derived on first call and cached afterwards.
    ///
    /// Later calls return the cached name whatever convention they pass;
    /// call [`Element::invalidate_field_name`] to derive again.
    pub fn field_name(&mut self, convention: NamingConvention) -> &str {
        let raw_id = &self.raw_id;
        self.field_name
            .get_or_insert_with(|| derive_field_name(raw_id, convention))
    }

    /// The cached field name, if one was derived or set
    pub fn cached_field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    pub fn set_field_name(&mut self, name: impl Into<String>) {
        self.field_name = Some(name.into());
    }

    pub fn invalidate_field_name(&mut self) {
        self.field_name = None;
    }
}

/// `androidx.appcompat.widget.Toolbar` -> `Toolbar`
fn simple_type_name(name: &str) -> &str {
    name.rsplit('.')
        .find(|segment| !segment.is_empty())
        .unwrap_or(name)
}
