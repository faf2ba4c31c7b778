//! Response DTOs for the location-area endpoints
//!
//! Defines the structure of incoming HTTP response bodies.

use serde::{Deserialize, Serialize};

/// A name plus the URL of the full resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location-area listing (GET /location-area)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    pub count: u32,
    /// URL of the following page, absent on the last page
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail of a single location area (GET /location-area/{name})
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationAreaDetail {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationAreaDetail {
    /// Names of the Pokemon that can be encountered here, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize_first_page() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1089);
        assert!(page.previous.is_none());
        assert_eq!(
            page.next.as_deref(),
            Some("https://pokeapi.co/api/v2/location-area?offset=20&limit=20")
        );
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn test_detail_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "game_index": 1,
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []},
                {"pokemon": {"name": "staryu", "url": "https://pokeapi.co/api/v2/pokemon/120/"}, "version_details": []}
            ]
        }"#;

        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = detail.pokemon_names().collect();
        assert_eq!(names, vec!["tentacool", "staryu"]);
    }

    #[test]
    fn test_detail_without_encounters() {
        let detail: LocationAreaDetail = serde_json::from_str(r#"{"name": "empty-area"}"#).unwrap();
        assert_eq!(detail.pokemon_names().count(), 0);
    }
}
