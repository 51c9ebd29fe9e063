//! Concrete host bindings: raw settings from a YAML mapping, a file-backed
//! library catalog, and a presentation surface that narrates primitives
//! through `tracing` for headless runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_yaml::Value;
use tracing::{debug, info};

use crate::layout::Rect;
use crate::library::LibraryClient;
use crate::settings::SettingsSource;
use crate::surface::{ImageOptions, LayerId, PresentationSurface, TextStyle};

/// Raw settings backed by a flat YAML mapping. Every scalar is surfaced in
/// its string form; the resolver owns all validation and defaulting.
#[derive(Debug, Default)]
pub struct YamlSettings {
    values: BTreeMap<String, String>,
}

impl YamlSettings {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        Self::from_yaml_str(&text)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let root: Value = serde_yaml::from_str(text).context("parsing settings YAML")?;
        let mut values = BTreeMap::new();
        if let Value::Mapping(mapping) = root {
            for (key, value) in mapping {
                let Value::String(key) = key else { continue };
                let raw = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => continue,
                };
                values.insert(key, raw);
            }
        }
        Ok(Self { values })
    }
}

impl SettingsSource for YamlSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// File-backed stand-in for the media-center RPC endpoint: the whole
/// `VideoLibrary.GetMovies` response document lives in a JSON file.
#[derive(Debug)]
pub struct CatalogClient {
    path: PathBuf,
}

impl CatalogClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LibraryClient for CatalogClient {
    fn execute(&self, request: &str) -> Result<String> {
        debug!(request, catalog = %self.path.display(), "library request");
        fs::read_to_string(&self.path)
            .with_context(|| format!("reading library catalog from {}", self.path.display()))
    }
}

/// Presentation surface for runs without an attached host toolkit: layer
/// primitives become structured log events.
#[derive(Debug)]
pub struct ConsoleSurface {
    width: u32,
    height: u32,
    next_layer: u32,
    closed: bool,
}

impl ConsoleSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            next_layer: 0,
            closed: false,
        }
    }

    fn next_id(&mut self) -> LayerId {
        let id = LayerId(self.next_layer);
        self.next_layer += 1;
        id
    }
}

impl PresentationSurface for ConsoleSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn add_image_layer(&mut self, rect: Rect, options: ImageOptions) -> Result<LayerId> {
        let id = self.next_id();
        debug!(layer = id.0, ?rect, ?options, "add image layer");
        Ok(id)
    }

    fn add_text_layer(&mut self, rect: Rect, style: TextStyle) -> Result<LayerId> {
        let id = self.next_id();
        debug!(layer = id.0, ?rect, ?style, "add text layer");
        Ok(id)
    }

    fn set_image(&mut self, layer: LayerId, path: &str) -> Result<()> {
        info!(layer = layer.0, path, "set image");
        Ok(())
    }

    fn set_label(&mut self, layer: LayerId, text: &str) -> Result<()> {
        info!(layer = layer.0, text, "set label");
        Ok(())
    }

    fn set_visible(&mut self, layer: LayerId, visible: bool) -> Result<()> {
        info!(layer = layer.0, visible, "set visibility");
        Ok(())
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            info!("surface closed");
        }
    }
}
