//! View-id extraction from Android layout trees
//!
//! A layout is walked in document order; every tag carrying an
//! `android:id` becomes an [`Element`], and `<include>` tags are replaced by
//! the contents of the layout they reference.

mod element;
mod error;
mod extractor;
mod naming;
mod reference;
mod tree;

pub use element::{Element, SourceTag};
pub use error::ExtractError;
pub use extractor::{extract, ExtractOptions, Extractor};
pub use naming::{capitalize, derive_field_name, NamingConvention};
pub use reference::{layout_name_in_line, parse_resource_reference, ResourceRef};
pub use tree::{LayoutResolver, TagTree, XmlTag};
