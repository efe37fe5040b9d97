pub mod assign;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod registry;
pub mod scene;

#[cfg(feature = "cli")]
pub use cli::run;
pub use error::LayoutError;
