pub mod content;

pub use content::load_catalog;
