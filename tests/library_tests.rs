use anyhow::{Result, bail};
use serde_json::json;

use fanart_screensaver::library::{LibraryClient, fetch_displayable};

struct StaticClient(String);

impl LibraryClient for StaticClient {
    fn execute(&self, _request: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

struct FailingClient;

impl LibraryClient for FailingClient {
    fn execute(&self, _request: &str) -> Result<String> {
        bail!("connection refused")
    }
}

fn client(movies: serde_json::Value) -> StaticClient {
    StaticClient(json!({ "result": { "movies": movies } }).to_string())
}

#[test]
fn keeps_records_with_both_art_paths() {
    let client = client(json!([
        { "title": "Dune", "year": 2021, "art": { "fanart": "f.jpg", "poster": "p.jpg" } },
        { "title": "NoPoster", "year": 1999, "art": { "fanart": "f.jpg", "poster": "" } },
        { "title": "NoFanart", "year": 2000, "art": { "poster": "p.jpg" } },
        { "title": "NoArt", "year": 2001 },
    ]));

    let movies = fetch_displayable(&client);
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Dune");
    assert_eq!(movies[0].year, 2021);
    assert_eq!(movies[0].fanart, "f.jpg");
    assert_eq!(movies[0].poster, "p.jpg");
}

#[test]
fn preserves_source_order() {
    let client = client(json!([
        { "title": "B", "art": { "fanart": "bf", "poster": "bp" } },
        { "title": "A", "art": { "fanart": "af", "poster": "ap" } },
        { "title": "C", "art": { "fanart": "cf", "poster": "cp" } },
    ]));

    let titles: Vec<String> = fetch_displayable(&client)
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, ["B", "A", "C"]);
}

#[test]
fn missing_year_means_unknown() {
    let client = client(json!([
        { "title": "Old", "art": { "fanart": "f", "poster": "p" } },
    ]));

    let movies = fetch_displayable(&client);
    assert_eq!(movies[0].year, 0);
}

#[test]
fn malformed_response_yields_empty_set() {
    let client = StaticClient("not json at all".to_string());
    assert!(fetch_displayable(&client).is_empty());
}

#[test]
fn response_without_result_yields_empty_set() {
    let client = StaticClient(json!({ "error": { "code": -32601 } }).to_string());
    assert!(fetch_displayable(&client).is_empty());
}

#[test]
fn response_without_movies_yields_empty_set() {
    let client = StaticClient(json!({ "result": { "limits": {} } }).to_string());
    assert!(fetch_displayable(&client).is_empty());
}

#[test]
fn transport_failure_yields_empty_set() {
    assert!(fetch_displayable(&FailingClient).is_empty());
}
