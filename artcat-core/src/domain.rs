pub mod artwork;
pub mod pagination;
pub mod partial_date;

pub use artwork::*;
pub use pagination::*;
pub use partial_date::*;
