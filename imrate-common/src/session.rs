//! Session state machine
//!
//! One `Session` owns everything a single rating pass needs: the rater's
//! identity, the image catalog, the current position, and the append-only
//! rating log. Every operator action maps to exactly one method here, and
//! each method leaves the session in a fully consistent state before it
//! returns.
//!
//! Position invariant: `0 <= position <= catalog.len()`, where
//! `position == catalog.len()` is the terminal "all images rated" state.

use chrono::{DateTime, Local};
use tracing::info;
use uuid::Uuid;

use crate::catalog::ImageCatalog;
use crate::rating::{AspectScores, RatingRecord};
use crate::{Error, Result};

/// Outcome of a forward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the next image
    Advanced,
    /// The final image was rated; the accumulated log should now be
    /// offered for export
    Completed,
}

/// State for one rating pass over one catalog
#[derive(Debug)]
pub struct Session {
    session_id: Uuid,
    rater: String,
    catalog: ImageCatalog,
    position: usize,
    log: Vec<RatingRecord>,
}

impl Session {
    /// Start a session for `rater` over `catalog`.
    ///
    /// The rater name must be non-empty after trimming and the catalog must
    /// contain at least one image. Both are fixed for the session's life;
    /// there is no rename or rescan.
    pub fn begin(rater: &str, catalog: ImageCatalog) -> Result<Session> {
        let rater = rater.trim();
        if rater.is_empty() {
            return Err(Error::InvalidInput(
                "rater name must not be empty".to_string(),
            ));
        }
        if catalog.is_empty() {
            return Err(Error::InvalidInput(format!(
                "no images found in {}",
                catalog.dir().display()
            )));
        }

        let session_id = Uuid::new_v4();
        info!(%session_id, rater, images = catalog.len(), "session started");

        Ok(Session {
            session_id,
            rater: rater.to_string(),
            catalog,
            position: 0,
            log: Vec::new(),
        })
    }

    /// Identifier used to correlate log lines for this session
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The rater's name as entered at session start
    pub fn rater(&self) -> &str {
        &self.rater
    }

    /// The catalog this session walks through
    pub fn catalog(&self) -> &ImageCatalog {
        &self.catalog
    }

    /// Current position: 0-based index, equal to `catalog().len()` once
    /// every image has been rated
    pub fn position(&self) -> usize {
        self.position
    }

    /// Image at the current position; None once the session is complete
    pub fn current_image(&self) -> Option<&str> {
        self.catalog.get(self.position)
    }

    /// True once the final image has been rated
    pub fn is_complete(&self) -> bool {
        self.position == self.catalog.len()
    }

    /// Fraction of the catalog already passed, for the progress display
    pub fn progress(&self) -> f64 {
        self.position as f64 / self.catalog.len() as f64
    }

    /// All records submitted so far, in submission order
    pub fn log(&self) -> &[RatingRecord] {
        &self.log
    }

    /// Step back one image.
    ///
    /// A no-op at the first image. Stays legal after completion so earlier
    /// ratings can be corrected; corrections append, they never replace.
    pub fn back(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// Record `scores` for the current image, then advance.
    ///
    /// A revisited image gets a second record appended; nothing in the log
    /// is ever replaced or removed. Submitting with the session already
    /// complete is rejected without touching the log.
    pub fn submit(&mut self, scores: AspectScores, timestamp: DateTime<Local>) -> Result<Advance> {
        let image = self
            .current_image()
            .ok_or_else(|| Error::InvalidInput("all images are already rated".to_string()))?
            .to_string();

        self.log
            .push(RatingRecord::new(&self.rater, &image, scores, timestamp));

        if self.position < self.catalog.len() - 1 {
            self.position += 1;
            info!(
                session_id = %self.session_id,
                image = %image,
                position = self.position,
                "rating recorded"
            );
            Ok(Advance::Advanced)
        } else {
            self.position = self.catalog.len();
            info!(
                session_id = %self.session_id,
                image = %image,
                records = self.log.len(),
                "rating recorded, session complete"
            );
            Ok(Advance::Completed)
        }
    }
}
