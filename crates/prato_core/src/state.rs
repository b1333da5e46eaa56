//! Screen state for the single analysis flow, kept apart from any
//! rendering surface so the transitions are testable headless.

use crate::{advisory_message, Concept, PlateItem};
use std::path::{Path, PathBuf};

/// User-visible phase of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// Ephemeral state behind the screen. The controller owns it exclusively;
/// items and the selected image are replaced wholesale on each selection,
/// never merged.
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    phase: Phase,
    items: Vec<PlateItem>,
    selected_image: Option<PathBuf>,
    message: String,
}

impl ScreenState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True only between an accepted selection and the terminal
    /// `complete`/`cancel`/`fail` transition.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Inputs are disabled while a flow is in progress.
    pub fn can_select(&self) -> bool {
        !self.is_loading()
    }

    pub fn items(&self) -> &[PlateItem] {
        &self.items
    }

    pub fn selected_image(&self) -> Option<&Path> {
        self.selected_image.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Select-image action accepted.
    pub fn begin(&mut self) {
        self.phase = Phase::Loading;
    }

    /// Picker dismissed without a choice. Prior results stay visible.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// A transformed copy of the picked photo is ready for preview.
    pub fn image_ready(&mut self, path: PathBuf) {
        self.selected_image = Some(path);
    }

    /// Successful response: replace the result list wholesale and
    /// recompute the tip.
    pub fn complete(&mut self, concepts: Vec<Concept>) {
        self.items = concepts.into_iter().map(PlateItem::from).collect();
        self.message = advisory_message(&self.items);
        self.phase = Phase::Idle;
    }

    /// Transform or classification failed: back to Idle so the action can
    /// be retried, previous results untouched. The caller is expected to
    /// log the error and surface a status line.
    pub fn fail(&mut self) {
        self.phase = Phase::Idle;
    }
}
