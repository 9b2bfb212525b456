mod loader;

pub use loader::{BeanConfig, BindingConfig, Config, NamingConfig};
