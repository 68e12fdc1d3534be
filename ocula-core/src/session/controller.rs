use crate::{
    foundation::{
        core::Viewport,
        math::{RandomSource, Rng64},
    },
    patterns::catalog::roster,
    render::plan::DisplayList,
    session::{
        config::SessionConfig,
        settings::{Palette, Settings, SettingsUpdate},
        trainer::{RepeatTarget, Trainer, TrainerEvent},
    },
};

/// Playback policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// Repeat the current pattern until told otherwise.
    Single,
    /// Run each pattern its configured number of times, then move on.
    Comprehensive,
}

/// Notifications for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Playback started or advanced to a pattern.
    PatternChanged {
        /// Roster index.
        index: usize,
        /// Canonical pattern name.
        name: &'static str,
    },
}

/// Owns the roster and decides which pattern runs.
///
/// At most one trainer is active at a time. The host drives everything
/// through [`Controller::frame`], called once per display refresh.
pub struct Controller {
    trainers: Vec<Trainer>,
    settings: Settings,
    pending: Vec<SettingsUpdate>,
    mode: PlaybackMode,
    current: usize,
    loops: Vec<u32>,
    order: Vec<usize>,
    cursor: Option<usize>,
    destroyed: bool,
    events: Vec<ControllerEvent>,
    rng: Box<dyn RandomSource>,
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("mode", &self.mode)
            .field("current", &self.current)
            .field("cursor", &self.cursor)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl Controller {
    /// Controller over the full roster, idle in single mode at pattern 0.
    pub fn new(config: &SessionConfig) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(Rng64::new(seed)),
            None => Box::new(Rng64::from_clock()),
        };
        let trainers: Vec<Trainer> = roster(&config.images)
            .into_iter()
            .map(|p| Trainer::new(p, RepeatTarget::Unbounded))
            .collect();
        let loops = (0..trainers.len()).map(|i| config.loops_for(i)).collect();
        Self {
            trainers,
            settings: config.settings.clone(),
            pending: Vec::new(),
            mode: PlaybackMode::Single,
            current: 0,
            loops,
            order: config.order(),
            cursor: None,
            destroyed: false,
            events: Vec::new(),
            rng,
        }
    }

    /// Replace the random source used by the random-walk patterns.
    pub fn with_rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Current playback policy.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Roster index of the current pattern.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Canonical name of the current pattern.
    pub fn current_pattern_name(&self) -> &'static str {
        self.trainers.get(self.current).map_or("", Trainer::name)
    }

    /// Roster size.
    pub fn pattern_count(&self) -> usize {
        self.trainers.len()
    }

    /// `true` after [`Controller::destroy`].
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Appearance as of the last frame.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Every trainer, in roster order.
    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    /// Take the queued notifications.
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queue a grid visibility change for the next frame.
    pub fn set_show_grid(&mut self, value: bool) {
        self.pending.push(SettingsUpdate::ShowGrid(value));
    }

    /// Queue a theme change for the next frame.
    pub fn set_dark_mode(&mut self, value: bool) {
        self.pending.push(SettingsUpdate::DarkMode(value));
    }

    /// Queue a palette change for the next frame.
    pub fn set_palette(&mut self, palette: Palette) {
        self.pending.push(SettingsUpdate::Palette(palette));
    }

    /// Single playback of the current pattern.
    pub fn start(&mut self) {
        self.start_single(self.current);
    }

    /// Repeat pattern `index` indefinitely. Out-of-range indices are ignored.
    #[tracing::instrument(skip(self))]
    pub fn start_single(&mut self, index: usize) {
        if self.destroyed || index >= self.trainers.len() {
            return;
        }
        self.set_mode(PlaybackMode::Single);
        self.stop_current();
        self.cursor = None;
        self.start_trainer(index);
    }

    /// Rotate through the traversal order from its first entry.
    #[tracing::instrument(skip(self))]
    pub fn start_comprehensive(&mut self) {
        if self.destroyed {
            return;
        }
        self.set_mode(PlaybackMode::Comprehensive);
        self.stop_current();
        self.cursor = None;
        self.advance_comprehensive();
    }

    /// Advance to the next pattern in the current mode.
    #[tracing::instrument(skip(self))]
    pub fn next(&mut self) {
        if self.destroyed {
            return;
        }
        self.stop_current();
        match self.mode {
            PlaybackMode::Comprehensive => self.advance_comprehensive(),
            PlaybackMode::Single => {
                let index = (self.current + 1) % self.trainers.len().max(1);
                self.start_trainer(index);
            }
        }
    }

    /// Step back to the previous pattern in the current mode.
    #[tracing::instrument(skip(self))]
    pub fn previous(&mut self) {
        if self.destroyed {
            return;
        }
        self.stop_current();
        match self.mode {
            PlaybackMode::Comprehensive => {
                if self.order.is_empty() {
                    return;
                }
                let cursor = match self.cursor {
                    None | Some(0) => self.order.len() - 1,
                    Some(c) => c - 1,
                };
                self.cursor = Some(cursor);
                self.start_trainer(self.order[cursor]);
            }
            PlaybackMode::Single => {
                let len = self.trainers.len();
                if len == 0 {
                    return;
                }
                let index = (self.current + len - 1) % len;
                self.start_trainer(index);
            }
        }
    }

    /// Stop every trainer. All later playback calls and frames are ignored.
    #[tracing::instrument(skip(self))]
    pub fn destroy(&mut self) {
        self.destroyed = true;
        for t in &mut self.trainers {
            t.stop();
        }
        self.pending.clear();
    }

    /// Run one display refresh: apply queued settings, then the active
    /// trainer's pending callback. Returns that frame's display list.
    pub fn frame(&mut self, now_ms: f64, viewport: Viewport) -> Option<DisplayList> {
        if self.destroyed {
            return None;
        }
        for update in self.pending.drain(..) {
            self.settings.apply(update);
        }

        let trainer = self.trainers.get_mut(self.current)?;
        let out = trainer.frame(now_ms, viewport, &self.settings, self.rng.as_mut())?;
        if out.events.contains(&TrainerEvent::Finished) {
            self.on_trainer_finished();
        }
        out.display
    }

    fn on_trainer_finished(&mut self) {
        tracing::debug!(
            index = self.current,
            name = self.current_pattern_name(),
            "pattern finished"
        );
        match self.mode {
            PlaybackMode::Comprehensive => self.advance_comprehensive(),
            PlaybackMode::Single => self.start_trainer(self.current),
        }
    }

    fn set_mode(&mut self, mode: PlaybackMode) {
        self.mode = mode;
        for (i, t) in self.trainers.iter_mut().enumerate() {
            t.set_target(match mode {
                PlaybackMode::Single => RepeatTarget::Unbounded,
                PlaybackMode::Comprehensive => {
                    RepeatTarget::Count(self.loops.get(i).copied().unwrap_or(1))
                }
            });
        }
    }

    fn advance_comprehensive(&mut self) {
        if self.order.is_empty() {
            return;
        }
        let cursor = self.cursor.map_or(0, |c| (c + 1) % self.order.len());
        self.cursor = Some(cursor);
        self.start_trainer(self.order[cursor]);
    }

    fn stop_current(&mut self) {
        if let Some(t) = self.trainers.get_mut(self.current)
            && t.is_running()
        {
            tracing::debug!(index = self.current, name = t.name(), "stopping pattern");
            t.stop();
        }
    }

    fn start_trainer(&mut self, index: usize) {
        let Some(trainer) = self.trainers.get_mut(index) else {
            return;
        };
        self.current = index;
        trainer.start(self.rng.as_mut());
        let name = trainer.name();
        tracing::debug!(index, name, mode = ?self.mode, "pattern started");
        self.events.push(ControllerEvent::PatternChanged { index, name });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controller.rs"]
mod tests;
