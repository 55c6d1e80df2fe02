pub mod chart;
mod table;
mod view;

pub use view::Results;
