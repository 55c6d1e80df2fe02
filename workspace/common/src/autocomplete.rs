//! Prefix filtering for the station search box.
//!
//! Matching is case-insensitive: both the typed text and the station name are
//! compared in their Unicode upper-case form. Each suggestion remembers where
//! the matched prefix ends in the original station name, so the view can bold
//! it without re-running the comparison.

use crate::Station;

/// Class carried by every suggestion panel container.
pub const PANEL_CLASS: &str = "autocomplete-items";

/// DOM id of the panel attached to the input with id `input_id`.
pub fn panel_id(input_id: &str) -> String {
    format!("{}autocomplete-list", input_id)
}

/// Byte offset in `station` where the prefix matched by `input` ends, or
/// `None` when the station does not start with `input` (ignoring case).
///
/// An empty `input` matches every station with an empty prefix.
pub fn matched_prefix_len(station: &str, input: &str) -> Option<usize> {
    let needle = input.to_uppercase();
    if needle.is_empty() {
        return Some(0);
    }
    if !station.to_uppercase().starts_with(&needle) {
        return None;
    }

    let mut covered = 0;
    for (idx, ch) in station.char_indices() {
        if covered >= needle.len() {
            return Some(idx);
        }
        covered += ch.to_uppercase().map(char::len_utf8).sum::<usize>();
    }
    Some(station.len())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    station: Station,
    prefix_end: usize,
}

impl Suggestion {
    pub fn station(&self) -> &Station {
        &self.station
    }

    /// The part of the name that matched the typed text.
    pub fn prefix(&self) -> &str {
        &self.station.name()[..self.prefix_end]
    }

    pub fn rest(&self) -> &str {
        &self.station.name()[self.prefix_end..]
    }
}

/// Stations matching `input`, in repository order.
pub fn filter_stations(stations: &[Station], input: &str) -> Vec<Suggestion> {
    stations
        .iter()
        .filter_map(|station| {
            matched_prefix_len(station.name(), input).map(|prefix_end| Suggestion {
                station: station.clone(),
                prefix_end,
            })
        })
        .collect()
}

/// The open dropdown under the search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionPanel {
    id: String,
    suggestions: Vec<Suggestion>,
}

impl SuggestionPanel {
    pub fn build(input_id: &str, stations: &[Station], input: &str) -> Self {
        Self {
            id: panel_id(input_id),
            suggestions: filter_stations(stations, input),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stations;

    fn names(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.station().name()).collect()
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let list = stations(&["Central", "North Ave", "Northgate"]);
        let suggestions = filter_stations(&list, "no");

        assert_eq!(names(&suggestions), vec!["North Ave", "Northgate"]);
        for suggestion in &suggestions {
            assert_eq!(suggestion.prefix(), "No");
        }
        assert_eq!(suggestions[0].rest(), "rth Ave");
        assert_eq!(suggestions[1].rest(), "rthgate");
    }

    #[test]
    fn test_empty_input_matches_everything() {
        let list = stations(&["Central", "North Ave", "Northgate"]);
        let suggestions = filter_stations(&list, "");

        assert_eq!(names(&suggestions), vec!["Central", "North Ave", "Northgate"]);
        assert!(suggestions.iter().all(|s| s.prefix().is_empty()));
    }

    #[test]
    fn test_filter_preserves_order_and_subset() {
        let list = stations(&["Zeta", "alpha", "Alphaville", "beta", "ALPS"]);
        for input in ["a", "AL", "alp", "alpha", "x", "Zeta", "zetas", ""] {
            let expected: Vec<&str> = list
                .iter()
                .map(|s| s.name())
                .filter(|name| name.to_uppercase().starts_with(&input.to_uppercase()))
                .collect();
            assert_eq!(names(&filter_stations(&list, input)), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_whole_name_match_has_empty_rest() {
        let list = stations(&["Central"]);
        let suggestions = filter_stations(&list, "CENTRAL");
        assert_eq!(suggestions[0].prefix(), "Central");
        assert_eq!(suggestions[0].rest(), "");
    }

    #[test]
    fn test_prefix_split_on_multibyte_names() {
        assert_eq!(matched_prefix_len("Östra Hamnen", "ös"), Some("Ös".len()));
        assert_eq!(matched_prefix_len("Straße Nord", "STRASSE"), Some("Straße".len()));
        assert_eq!(matched_prefix_len("Straße Nord", "STRAS"), Some("Straß".len()));
        assert_eq!(matched_prefix_len("Central", "north"), None);
    }

    #[test]
    fn test_panel_id_follows_input_id() {
        let panel = SuggestionPanel::build("stationInput", &stations(&["Central"]), "x");
        assert_eq!(panel.id(), "stationInputautocomplete-list");
        assert!(panel.is_empty());
    }
}
