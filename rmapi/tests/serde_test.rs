//! Integration tests for decoding upstream JSON into the entity and page
//! types.
//!
//! Each test uses a fixture shaped like a real response body and checks the
//! fields the catalog relies on, including renamed and relation fields.

use rmapi::types::*;

// ---------------------------------------------------------------------------
// Character
// ---------------------------------------------------------------------------

const RICK: &str = r#"{
    "id": 1,
    "name": "Rick Sanchez",
    "status": "Alive",
    "species": "Human",
    "type": "",
    "gender": "Male",
    "origin": {
        "name": "Earth (C-137)",
        "url": "https://rickandmortyapi.com/api/location/1"
    },
    "location": {
        "name": "Citadel of Ricks",
        "url": "https://rickandmortyapi.com/api/location/3"
    },
    "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
    "episode": [
        "https://rickandmortyapi.com/api/episode/1",
        "https://rickandmortyapi.com/api/episode/2"
    ],
    "url": "https://rickandmortyapi.com/api/character/1",
    "created": "2017-11-04T18:48:46.250Z"
}"#;

#[test]
fn test_character_decode() {
    let rick: Character = serde_json::from_str(RICK).unwrap();
    assert_eq!(rick.id, 1);
    assert_eq!(rick.name, "Rick Sanchez");
    assert_eq!(rick.status(), CharacterStatus::Alive);
    assert_eq!(rick.kind, "");
    assert_eq!(rick.origin.name, "Earth (C-137)");
    assert_eq!(rick.location.url, "https://rickandmortyapi.com/api/location/3");
    assert_eq!(rick.episode.len(), 2);
    assert_eq!(rick.created.to_rfc3339(), "2017-11-04T18:48:46.250+00:00");
}

#[test]
fn test_character_unknown_origin() {
    let mut value: serde_json::Value = serde_json::from_str(RICK).unwrap();
    value["origin"] = serde_json::json!({ "name": "unknown", "url": "" });

    let rick: Character = serde_json::from_value(value).unwrap();
    assert_eq!(rick.origin.name, "unknown");
    assert_eq!(rick.origin.url, "");
}

#[test]
fn test_character_type_field_renamed() {
    let mut value: serde_json::Value = serde_json::from_str(RICK).unwrap();
    value["type"] = "Fish-Person".into();

    let rick: Character = serde_json::from_value(value).unwrap();
    assert_eq!(rick.kind, "Fish-Person");

    let value = serde_json::to_value(&rick).unwrap();
    assert_eq!(value["type"], "Fish-Person");
    assert!(value.get("kind").is_none());
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

#[test]
fn test_location_decode() {
    let json = r#"{
        "id": 3,
        "name": "Citadel of Ricks",
        "type": "Space station",
        "dimension": "unknown",
        "residents": [
            "https://rickandmortyapi.com/api/character/8",
            "https://rickandmortyapi.com/api/character/14"
        ],
        "url": "https://rickandmortyapi.com/api/location/3",
        "created": "2017-11-10T13:08:13.191Z"
    }"#;

    let citadel: Location = serde_json::from_str(json).unwrap();
    assert_eq!(citadel.id, 3);
    assert_eq!(citadel.kind, "Space station");
    assert_eq!(citadel.dimension, "unknown");
    assert_eq!(citadel.residents.len(), 2);
}

// ---------------------------------------------------------------------------
// Episode
// ---------------------------------------------------------------------------

#[test]
fn test_episode_decode() {
    let json = r#"{
        "id": 28,
        "name": "The Ricklantis Mixup",
        "air_date": "September 10, 2017",
        "episode": "S03E07",
        "characters": [
            "https://rickandmortyapi.com/api/character/1",
            "https://rickandmortyapi.com/api/character/2"
        ],
        "url": "https://rickandmortyapi.com/api/episode/28",
        "created": "2017-11-10T12:56:36.618Z"
    }"#;

    let episode: Episode = serde_json::from_str(json).unwrap();
    assert_eq!(episode.id, 28);
    assert_eq!(episode.air_date, "September 10, 2017");
    assert_eq!(episode.code, "S03E07");
    assert_eq!(episode.characters.len(), 2);
}

#[test]
fn test_episode_missing_field_fails() {
    let json = r#"{ "id": 1, "name": "Pilot" }"#;
    assert!(serde_json::from_str::<Episode>(json).is_err());
}

// ---------------------------------------------------------------------------
// PageInfo
// ---------------------------------------------------------------------------

#[test]
fn test_page_info_decode() {
    let json = r#"{
        "count": 826,
        "pages": 42,
        "next": "https://rickandmortyapi.com/api/character/?page=2",
        "prev": null
    }"#;

    let info: PageInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.total_count, 826);
    assert_eq!(info.total_pages, 42);
    assert_eq!(info.next_page(), Page::new(2));
    assert_eq!(info.prev, None);
    assert!(!info.has_prev());
}

#[test]
fn test_list_result_serializes_camel_case() {
    let list: ListResult<u32> = ListResult {
        items: vec![1, 2],
        page_info: PageInfo {
            total_count: 2,
            total_pages: 1,
            next: None,
            prev: None,
        },
    };
    let value = serde_json::to_value(&list).unwrap();
    assert_eq!(value["items"], serde_json::json!([1, 2]));
    assert_eq!(value["pageInfo"]["count"], 2);
    assert_eq!(value["pageInfo"]["pages"], 1);
    assert!(value["pageInfo"]["next"].is_null());
}
