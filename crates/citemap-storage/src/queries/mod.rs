//! Table query modules: free functions over `&Connection`.

pub mod citations;
pub mod clusters;
pub mod maps;
pub mod reports;
