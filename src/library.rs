use anyhow::Result;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

/// One displayable library entry. `year == 0` means the year is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub year: u32,
    pub fanart: String,
    pub poster: String,
}

/// Transport to the host media library: one JSON document in, one out.
pub trait LibraryClient {
    fn execute(&self, request: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<RpcResult>,
}

#[derive(Debug, Deserialize)]
struct RpcResult {
    #[serde(default)]
    movies: Option<Vec<RawMovie>>,
}

#[derive(Debug, Deserialize)]
struct RawMovie {
    #[serde(default)]
    title: String,
    #[serde(default)]
    year: u32,
    #[serde(default)]
    art: RawArt,
}

#[derive(Debug, Default, Deserialize)]
struct RawArt {
    #[serde(default)]
    fanart: String,
    #[serde(default)]
    poster: String,
}

/// Queries the library once and keeps only records carrying both fanart and
/// poster art, preserving the order the service returned them in. Transport
/// and decode failures yield an empty set; the caller treats that as
/// "nothing to show", never as a crash.
pub fn fetch_displayable(client: &dyn LibraryClient) -> Vec<MovieRecord> {
    let request = json!({
        "jsonrpc": "2.0",
        "method": "VideoLibrary.GetMovies",
        "params": { "properties": ["title", "art", "year"] },
        "id": 1,
    })
    .to_string();

    let response = match client.execute(&request) {
        Ok(response) => response,
        Err(err) => {
            error!("library query failed: {err:#}");
            return Vec::new();
        }
    };

    let parsed: RpcResponse = match serde_json::from_str(&response) {
        Ok(parsed) => parsed,
        Err(err) => {
            error!("malformed library response: {err}");
            return Vec::new();
        }
    };

    // A response without result/movies is a well-formed empty library.
    let movies = parsed.result.and_then(|r| r.movies).unwrap_or_default();
    let total = movies.len();
    let displayable: Vec<MovieRecord> = movies
        .into_iter()
        .filter(|movie| !movie.art.fanart.is_empty() && !movie.art.poster.is_empty())
        .map(|movie| MovieRecord {
            title: movie.title,
            year: movie.year,
            fanart: movie.art.fanart,
            poster: movie.art.poster,
        })
        .collect();
    debug!(total, displayable = displayable.len(), "library query complete");
    displayable
}
