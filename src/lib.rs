//! layoutbind - view binding and data-class generation for Android (Java)
//!
//! This library extracts the views carrying an `android:id` from Android
//! layout XML and turns them into Java field/binding boilerplate.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! 1. **Discovery** - Index the `res/layout*` files of a project
//! 2. **Extraction** - Walk a layout in document order, inlining `<include>`s
//! 3. **Naming** - Derive a field name from each view id
//! 4. **Emission** - Render ButterKnife or `findViewById` code
//!
//! A second, independent generator renders getter/setter data classes from a
//! `name Type` field list.

pub mod codegen;
pub mod config;
pub mod discovery;
pub mod layout;
pub mod report;

pub use codegen::{BindingStyle, Emitter};
pub use config::Config;
pub use discovery::LayoutDirectory;
pub use layout::{
    derive_field_name, extract, Element, ExtractError, ExtractOptions, Extractor,
    LayoutResolver, NamingConvention, TagTree, XmlTag,
};
pub use report::{ReportFormat, Reporter};
