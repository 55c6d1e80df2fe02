mod station_search;
mod suggestions;

pub use station_search::StationSearch;
