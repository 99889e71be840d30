pub mod api;
pub mod events;
pub mod initializers;
pub mod loader;
pub mod page;
pub mod render;

pub use crate::domain::module::ModuleName;
pub use crate::domain::ports::FragmentSource;
pub use crate::utils::error::Result;
