pub mod analysis;
pub mod layout;
pub mod search;
