use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while extracting view ids from a layout tree
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid view id `{value}` on <{tag}>")]
    #[diagnostic(
        code(layoutbind::invalid_identifier),
        help("ids look like @+id/name, @id/name or @android:id/name; pass --lenient to skip such tags")
    )]
    InvalidIdentifier { tag: String, value: String },

    #[error("included layout `{name}` was not found")]
    #[diagnostic(code(layoutbind::unresolved_include))]
    UnresolvedInclude { name: String },

    #[error("<include> without a usable layout reference (got {reference:?})")]
    #[diagnostic(code(layoutbind::malformed_include))]
    MalformedIncludeReference { reference: Option<String> },

    #[error("include cycle: {}", chain.join(" -> "))]
    #[diagnostic(code(layoutbind::include_cycle))]
    IncludeCycle { chain: Vec<String> },

    #[error("includes nested more than {limit} levels deep at `{name}`")]
    #[diagnostic(
        code(layoutbind::include_depth),
        help("raise extract.max_include_depth in the config file")
    )]
    IncludeDepthExceeded { name: String, limit: usize },

    #[error("failed to parse layout XML: {message}")]
    #[diagnostic(code(layoutbind::xml))]
    Xml { message: String },
}

impl ExtractError {
    /// Include problems only drop the offending node, the pass keeps going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExtractError::UnresolvedInclude { .. } | ExtractError::MalformedIncludeReference { .. }
        )
    }
}
