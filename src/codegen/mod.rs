//! Java source generation
//!
//! - [`binding`]: view fields and click handlers for extracted layout views
//! - [`bean`]: a getter/setter data class from a `name Type` field list

pub mod bean;
pub mod binding;

pub use bean::{parse_fields, render_bean, BeanError, BeanSpec, FieldSpec};
pub use binding::{BindingStyle, ButterKnifeEmitter, Emitter, FindViewEmitter};
