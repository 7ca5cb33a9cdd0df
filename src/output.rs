use std::io::Write;

use rmapi::{
    Character, CharacterDetail, Episode, EpisodeDetail, ListResult, Location, LocationDetail,
    PageInfo, RelationError, RelationRef, ResolvedRelation,
};
use serde::Serialize;

use crate::error::CatalogError;

/// An entity that renders as one TSV line.
pub trait Row {
    fn id(&self) -> u32;
    fn push_row(&self, buf: &mut String);
}

impl Row for Character {
    fn id(&self) -> u32 {
        self.id
    }


    // TSV: id \t name \t status \t species \t gender \t last location \t origin
    fn push_row(&self, buf: &mut String) {
        push_fields(
            buf,
            &[
                &self.id.to_string(),
                &self.name,
                self.status().as_str(),
                &self.species,
                &self.gender,
                &self.location.name,
                &self.origin.name,
            ],
        );
    }
}

impl Row for Location {
    fn id(&self) -> u32 {
        self.id
    }

    // TSV: id \t name \t type \t dimension \t resident count
    fn push_row(&self, buf: &mut String) {
        push_fields(
            buf,
            &[
                &self.id.to_string(),
                &self.name,
                &self.kind,
                &self.dimension,
                &self.residents.len().to_string(),
            ],
        );
    }
}

impl Row for Episode {
    fn id(&self) -> u32 {
        self.id
    }

    // TSV: id \t code \t name \t air date \t character count
    fn push_row(&self, buf: &mut String) {
        push_fields(
            buf,
            &[
                &self.id.to_string(),
                &self.code,
                &self.name,
                &self.air_date,
                &self.characters.len().to_string(),
            ],
        );
    }
}

/// JSON shape of a resolved relation. `id` is the linked entity's id, the
/// argument of its detail subcommand, or `null` when there is no relation.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum RelationView<'a, T> {
    Resolved { id: u32, entity: &'a T },
    NoRelation { id: Option<u32> },
    Unavailable { id: Option<u32>, url: &'a str, error: String },
}

impl<'a, T: Row> From<&'a ResolvedRelation<T>> for RelationView<'a, T> {
    fn from(relation: &'a ResolvedRelation<T>) -> Self {
        match relation {
            Ok(entity) => RelationView::Resolved {
                id: entity.id(),
                entity,
            },
            Err(RelationError::NoRelation) => RelationView::NoRelation { id: None },
            Err(RelationError::ResolutionFailed { url, source }) => RelationView::Unavailable {
                id: link_id(url),
                url,
                error: source.to_string(),
            },
        }
    }
}

fn link_id(url: &str) -> Option<u32> {
    RelationRef::Link(url.to_string()).id()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListView<'a, T> {
    items: &'a [T],
    page_info: &'a PageInfo,
    prev_page: Option<u32>,
    next_page: Option<u32>,
}

#[derive(Serialize)]
struct CharacterDetailView<'a> {
    character: &'a Character,
    origin: RelationView<'a, Location>,
    location: RelationView<'a, Location>,
}

#[derive(Serialize)]
struct EpisodeDetailView<'a> {
    episode: &'a Episode,
    characters: Vec<RelationView<'a, Character>>,
}

#[derive(Serialize)]
struct LocationDetailView<'a> {
    location: &'a Location,
    residents: Vec<RelationView<'a, Character>>,
}

/// Write one list page: a row per item then a `#` footer with the page
/// metadata, or a single JSON document.
pub fn write_list<T: Row + Serialize, W: Write>(
    list: &ListResult<T>,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CatalogError> {
    let prev = list.page_info.prev_page();
    let next = list.page_info.next_page();

    let mut buf = String::new();
    if json_mode {
        let view = ListView {
            items: &list.items,
            page_info: &list.page_info,
            prev_page: prev.map(|p| p.get()),
            next_page: next.map(|p| p.get()),
        };
        buf.push_str(&serde_json::to_string(&view)?);
        buf.push('\n');
    } else {
        for item in &list.items {
            item.push_row(&mut buf);
            buf.push('\n');
        }
        buf.push_str(&format!(
            "# count={} pages={} prev={} next={}\n",
            list.page_info.total_count,
            list.page_info.total_pages,
            prev.map_or_else(|| "-".to_string(), |p| p.to_string()),
            next.map_or_else(|| "-".to_string(), |p| p.to_string()),
        ));
    }

    emit(&buf, writer)
}

pub fn write_character_detail<W: Write>(
    detail: &CharacterDetail,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CatalogError> {
    let mut buf = String::new();
    if json_mode {
        let view = CharacterDetailView {
            character: &detail.character,
            origin: (&detail.origin).into(),
            location: (&detail.location).into(),
        };
        push_json(&mut buf, &view)?;
    } else {
        detail.character.push_row(&mut buf);
        buf.push('\n');
        push_relation(&mut buf, "origin", &detail.origin);
        push_relation(&mut buf, "location", &detail.location);
    }

    emit(&buf, writer)
}

pub fn write_episode_detail<W: Write>(
    detail: &EpisodeDetail,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CatalogError> {
    let mut buf = String::new();
    if json_mode {
        let view = EpisodeDetailView {
            episode: &detail.episode,
            characters: detail.characters.iter().map(RelationView::from).collect(),
        };
        push_json(&mut buf, &view)?;
    } else {
        detail.episode.push_row(&mut buf);
        buf.push('\n');
        for character in &detail.characters {
            push_relation(&mut buf, "character", character);
        }
    }

    emit(&buf, writer)
}

pub fn write_location_detail<W: Write>(
    detail: &LocationDetail,
    json_mode: bool,
    writer: &mut W,
) -> Result<(), CatalogError> {
    let mut buf = String::new();
    if json_mode {
        let view = LocationDetailView {
            location: &detail.location,
            residents: detail.residents.iter().map(RelationView::from).collect(),
        };
        push_json(&mut buf, &view)?;
    } else {
        detail.location.push_row(&mut buf);
        buf.push('\n');
        for resident in &detail.residents {
            push_relation(&mut buf, "resident", resident);
        }
    }

    emit(&buf, writer)
}

/// `label \t row`, `label \t - \t none` or `label \t id \t unavailable \t url`.
///
/// The second column is always the linked id (rows start with it) or `-`.
fn push_relation<T: Row>(buf: &mut String, label: &str, relation: &ResolvedRelation<T>) {
    buf.push_str(label);
    buf.push('\t');
    match relation {
        Ok(entity) => entity.push_row(buf),
        Err(RelationError::NoRelation) => buf.push_str("-\tnone"),
        Err(RelationError::ResolutionFailed { url, .. }) => {
            match link_id(url) {
                Some(id) => buf.push_str(&id.to_string()),
                None => buf.push('-'),
            }
            buf.push_str("\tunavailable\t");
            push_field(buf, url);
        }
    }
    buf.push('\n');
}

fn push_json<T: Serialize>(buf: &mut String, value: &T) -> Result<(), CatalogError> {
    buf.push_str(&serde_json::to_string(value)?);
    buf.push('\n');
    Ok(())
}

fn push_fields(buf: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            buf.push('\t');
        }
        push_field(buf, field);
    }
}

/// Tabs and line breaks inside a value would break the TSV framing.
fn push_field(buf: &mut String, field: &str) {
    buf.extend(
        field
            .chars()
            .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c }),
    );
}

fn emit<W: Write>(buf: &str, writer: &mut W) -> Result<(), CatalogError> {
    writer.write_all(buf.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmapi::ApiError;
    use serde_json::json;

    fn character(id: u32, name: &str) -> Character {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "status": "Dead",
            "species": "Alien",
            "type": "",
            "gender": "unknown",
            "origin": { "name": "unknown", "url": "" },
            "location": { "name": "Earth (Replacement Dimension)", "url": "https://x/api/location/20" },
            "image": "https://x/api/character/avatar/1.jpeg",
            "episode": [],
            "url": format!("https://x/api/character/{id}"),
            "created": "2017-11-04T18:48:46.250Z"
        }))
        .unwrap()
    }

    fn location(id: u32) -> Location {
        serde_json::from_value(json!({
            "id": id,
            "name": "Earth (Replacement Dimension)",
            "type": "Planet",
            "dimension": "Replacement Dimension",
            "residents": ["https://x/api/character/1"],
            "url": format!("https://x/api/location/{id}"),
            "created": "2017-11-18T19:33:01.173Z"
        }))
        .unwrap()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), CatalogError>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_tsv_with_footer() {
        let list = ListResult {
            items: vec![character(1, "Abadango Cluster Princess")],
            page_info: PageInfo {
                total_count: 21,
                total_pages: 2,
                next: Some("https://x/api/character?page=2&status=dead".into()),
                prev: None,
            },
        };

        let text = render(|w| write_list(&list, false, w));
        assert_eq!(
            text,
            "1\tAbadango Cluster Princess\tdead\tAlien\tunknown\tEarth (Replacement Dimension)\tunknown\n\
             # count=21 pages=2 prev=- next=2\n"
        );
    }

    #[test]
    fn test_empty_list_tsv() {
        let list: ListResult<Episode> = ListResult::empty();
        let text = render(|w| write_list(&list, false, w));
        assert_eq!(text, "# count=0 pages=0 prev=- next=-\n");
    }

    #[test]
    fn test_list_json() {
        let list = ListResult {
            items: vec![location(20)],
            page_info: PageInfo {
                total_count: 126,
                total_pages: 7,
                next: Some("https://x/api/location?page=4".into()),
                prev: Some("https://x/api/location?page=2".into()),
            },
        };

        let text = render(|w| write_list(&list, true, w));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["items"][0]["type"], "Planet");
        assert_eq!(value["pageInfo"]["count"], 126);
        assert_eq!(value["prevPage"], 2);
        assert_eq!(value["nextPage"], 4);
    }

    #[test]
    fn test_field_tabs_are_flattened() {
        let mut buf = String::new();
        push_fields(&mut buf, &["a\tb", "c\nd"]);
        assert_eq!(buf, "a b\tc d");
    }

    #[test]
    fn test_character_detail_tsv() {
        let detail = CharacterDetail {
            character: character(1, "Morty"),
            origin: Err(RelationError::NoRelation),
            location: Ok(location(20)),
        };

        let text = render(|w| write_character_detail(&detail, false, w));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("1\tMorty\t"));
        assert_eq!(lines[1], "origin\t-\tnone");
        assert_eq!(
            lines[2],
            "location\t20\tEarth (Replacement Dimension)\tPlanet\tReplacement Dimension\t1"
        );
    }

    #[test]
    fn test_location_detail_tsv_marks_unavailable_residents() {
        let detail = LocationDetail {
            location: location(20),
            residents: vec![
                Ok(character(1, "Morty")),
                Err(RelationError::ResolutionFailed {
                    url: "https://x/api/character/2".into(),
                    source: ApiError::Upstream {
                        status: 500,
                        message: String::new(),
                    },
                }),
            ],
        };

        let text = render(|w| write_location_detail(&detail, false, w));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("resident\t1\tMorty\t"));
        assert_eq!(lines[2], "resident\t2\tunavailable\thttps://x/api/character/2");
    }

    #[test]
    fn test_episode_detail_json() {
        let episode: Episode = serde_json::from_value(json!({
            "id": 1,
            "name": "Pilot",
            "air_date": "December 2, 2013",
            "episode": "S01E01",
            "characters": ["https://x/api/character/1", ""],
            "url": "https://x/api/episode/1",
            "created": "2017-11-10T12:56:33.798Z"
        }))
        .unwrap();
        let detail = EpisodeDetail {
            episode,
            characters: vec![Ok(character(1, "Rick")), Err(RelationError::NoRelation)],
        };

        let text = render(|w| write_episode_detail(&detail, true, w));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["episode"]["episode"], "S01E01");
        assert_eq!(value["characters"][0]["status"], "resolved");
        assert_eq!(value["characters"][0]["id"], 1);
        assert_eq!(value["characters"][0]["entity"]["name"], "Rick");
        assert_eq!(value["characters"][1]["status"], "no_relation");
        assert!(value["characters"][1]["id"].is_null());
    }

    #[test]
    fn test_character_detail_json_carries_relation_ids() {
        let detail = CharacterDetail {
            character: character(1, "Morty"),
            origin: Err(RelationError::ResolutionFailed {
                url: "https://x/api/location/1".into(),
                source: ApiError::Upstream {
                    status: 503,
                    message: String::new(),
                },
            }),
            location: Ok(location(20)),
        };

        let text = render(|w| write_character_detail(&detail, true, w));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["origin"]["status"], "unavailable");
        assert_eq!(value["origin"]["id"], 1);
        assert_eq!(value["location"]["status"], "resolved");
        assert_eq!(value["location"]["id"], 20);

        let text = render(|w| write_character_detail(&detail, false, w));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "origin\t1\tunavailable\thttps://x/api/location/1");
        assert!(lines[2].starts_with("location\t20\t"));
    }
}
