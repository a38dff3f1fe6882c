//! Cross-module scenarios driven through `RegistryHandler`.

pub mod flows;
pub mod properties;
