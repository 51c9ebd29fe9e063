//! The slideshow engine: movie selection, layer sequencing, and the
//! cancellation-aware timed wait that paces each display cycle.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tokio::select;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::layout::{self, Rect, SHADOW_OFFSET};
use crate::library::{self, LibraryClient, MovieRecord};
use crate::settings::Settings;
use crate::surface::{
    BACKGROUND_DIFFUSE, ImageOptions, LayerId, PresentationSurface, SHADOW_COLOR, TEXT_COLOR,
    TextStyle,
};

/// Cancellation poll quantum for the timed wait. A cancel request is
/// observed within one quantum, never later.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy)]
struct Layers {
    fanart: LayerId,
    poster: LayerId,
    shadow: Option<LayerId>,
    title: LayerId,
}

/// Drives one screensaver run: `initialize` once, `run` until cancelled,
/// `shutdown` to tear the surface down. Owns all mutable slideshow state;
/// the only externally-triggered mutation is the monotonic cancellation
/// token shared with the host adapter.
pub struct Slideshow<S: PresentationSurface> {
    surface: S,
    settings: Settings,
    cancel: CancellationToken,
    movies: Vec<MovieRecord>,
    layers: Option<Layers>,
    rng: StdRng,
    closed: bool,
}

impl<S: PresentationSurface> Slideshow<S> {
    pub fn new(
        surface: S,
        settings: Settings,
        cancel: CancellationToken,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            surface,
            settings,
            cancel,
            movies: Vec::new(),
            layers: None,
            rng,
            closed: false,
        }
    }

    /// Queries the library once and builds the layer stack. Returns
    /// `Ok(false)` when nothing is displayable: no layers are created and
    /// the display loop must not be started.
    pub fn initialize(&mut self, library: &dyn LibraryClient) -> Result<bool> {
        self.movies = library::fetch_displayable(library);
        if self.movies.is_empty() {
            info!("no displayable movies in the library; slideshow will not start");
            return Ok(false);
        }
        info!(movies = self.movies.len(), "slideshow ready");
        self.create_layers().context("building presentation layers")?;
        Ok(true)
    }

    fn create_layers(&mut self) -> Result<()> {
        let (width, height) = self.surface.dimensions();
        let screen = Rect::full_screen(width, height);

        // Back-to-front: backdrop, fanart, poster, shadow, title.
        self.surface.add_image_layer(
            screen,
            ImageOptions {
                color_diffuse: Some(BACKGROUND_DIFFUSE),
                keep_aspect: false,
            },
        )?;
        let fanart = self.surface.add_image_layer(screen, ImageOptions::default())?;
        let poster = self.surface.add_image_layer(
            layout::poster_rect(width, height),
            ImageOptions {
                color_diffuse: None,
                keep_aspect: true,
            },
        )?;

        let title_rect = layout::title_rect(width, height);
        let style = TextStyle {
            font: self.settings.font_size,
            color: TEXT_COLOR,
        };
        let shadow = if self.settings.show_shadow {
            Some(self.surface.add_text_layer(
                title_rect.offset(SHADOW_OFFSET, SHADOW_OFFSET),
                TextStyle {
                    color: SHADOW_COLOR,
                    ..style
                },
            )?)
        } else {
            None
        };
        let title = self.surface.add_text_layer(title_rect, style)?;

        self.surface.set_visible(poster, false)?;
        self.layers = Some(Layers {
            fanart,
            poster,
            shadow,
            title,
        });
        Ok(())
    }

    /// Main display loop. Each iteration shows one randomly selected movie
    /// for up to `interval`; the loop exits within one poll quantum of
    /// cancellation.
    pub async fn run(&mut self) -> Result<()> {
        let layers = match self.layers {
            Some(layers) => layers,
            None => bail!("run() called before initialize()"),
        };
        while !self.cancel.is_cancelled() {
            self.display_cycle(layers).await;
        }
        info!("slideshow cancelled; leaving display loop");
        Ok(())
    }

    async fn display_cycle(&mut self, layers: Layers) {
        // Independent uniform draw each cycle; repeats are intentional.
        let Some(movie) = self.movies.choose(&mut self.rng).cloned() else {
            return;
        };
        debug!(title = %movie.title, year = movie.year, "next movie");

        // Fanart fills the backdrop immediately. A bad path blanks that
        // layer for this cycle only; the cycle still runs its course.
        if let Err(err) = self.surface.set_image(layers.fanart, &movie.fanart) {
            warn!(title = %movie.title, "failed to set fanart: {err:#}");
        }
        // Poster is staged now but stays hidden until the fade delay elapses.
        if let Err(err) = self.surface.set_image(layers.poster, &movie.poster) {
            warn!(title = %movie.title, "failed to set poster: {err:#}");
        }
        if let Err(err) = self.surface.set_visible(layers.poster, false) {
            warn!("failed to hide poster: {err:#}");
        }

        self.update_title(layers, &movie);
        self.wait_with_reveal(layers.poster).await;
    }

    fn update_title(&mut self, layers: Layers, movie: &MovieRecord) {
        let text = if self.settings.show_title {
            title_text(movie, &self.settings)
        } else {
            String::new()
        };
        // Shadow carries the same text so the outline tracks the label.
        if let Some(shadow) = layers.shadow {
            if let Err(err) = self.surface.set_label(shadow, &text) {
                warn!("failed to set title shadow: {err:#}");
            }
        }
        if let Err(err) = self.surface.set_label(layers.title, &text) {
            warn!("failed to set title: {err:#}");
        }
    }

    /// Holds the cycle open for `interval`, checking cancellation once per
    /// poll quantum. The poster becomes visible at the first poll where the
    /// fade delay has elapsed and is never re-hidden within the cycle. If
    /// the fade delay exceeds the interval the poster simply stays hidden.
    async fn wait_with_reveal(&mut self, poster: LayerId) {
        let started = Instant::now();
        let mut poster_revealed = false;

        while started.elapsed() < self.settings.interval {
            if self.cancel.is_cancelled() {
                return;
            }
            if !poster_revealed && started.elapsed() >= self.settings.fade_delay {
                if let Err(err) = self.surface.set_visible(poster, true) {
                    warn!("failed to reveal poster: {err:#}");
                }
                poster_revealed = true;
            }
            select! {
                _ = self.cancel.cancelled() => return,
                _ = sleep(POLL_INTERVAL) => {}
            }
        }
    }

    /// Tears the presentation down. Idempotent and safe to call at any
    /// point in the lifecycle, whether or not `initialize` succeeded.
    pub fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.layers = None;
        self.surface.close();
        debug!("slideshow shut down");
    }
}

/// Overlay text for a movie: the title, with the release year appended when
/// enabled and known (`year == 0` means unknown).
pub fn title_text(movie: &MovieRecord, settings: &Settings) -> String {
    if settings.show_year && movie.year > 0 {
        format!("{} ({})", movie.title, movie.year)
    } else {
        movie.title.clone()
    }
}
