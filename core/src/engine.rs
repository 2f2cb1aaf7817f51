use chrono::prelude::*;

use crate::*;

/// Host-facing facade owning the live session, player settings, and aggregate
/// statistics. All operations run synchronously on the caller's thread; the
/// store is only touched on construction and after mutations, best-effort.
pub struct GameEngine<C> {
    catalog: C,
    store: Box<dyn StateStore>,
    settings: Settings,
    stats: SessionStats,
    mode: GameMode,
    session: Option<GameSession>,
}

impl<C: TileCatalog> GameEngine<C> {
    /// Loads settings and stats from the store, defaulting on any failure.
    pub fn new(catalog: C, store: Box<dyn StateStore>) -> Self {
        let settings = load_or_default::<Settings>(store.as_ref());
        let stats = load_or_default::<SessionStats>(store.as_ref());
        Self {
            catalog,
            store,
            settings,
            stats,
            mode: GameMode::default(),
            session: None,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Deal a fresh card, discarding any game in progress without recording it.
    pub fn start_new_game(&mut self) -> Result<()> {
        self.start_with(RandomGridGenerator::from_entropy())
    }

    pub fn start_new_game_with_seed(&mut self, seed: u64) -> Result<()> {
        self.start_with(RandomGridGenerator::new(seed))
    }

    fn start_with(&mut self, generator: RandomGridGenerator) -> Result<()> {
        let cells = generator.generate(&self.catalog)?;
        let session = GameSession::new(cells, self.mode);
        log::debug!(
            "New {:?} game started at {}",
            session.mode(),
            session.started_at()
        );
        self.session = Some(session);
        Ok(())
    }

    /// Flip a cell; on the first winning line, records the win into the stats
    /// synchronously before returning.
    pub fn toggle_tile(&mut self, pos: Pos) -> Result<ToggleOutcome> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveGame)?;
        let outcome = session.toggle(pos)?;
        if matches!(outcome, ToggleOutcome::Won) {
            let elapsed = session.elapsed(Utc::now());
            let score = self.stats.record_win(elapsed);
            log::debug!(
                "Game won after {}s, scored {}",
                elapsed.num_seconds(),
                score
            );
            save_best_effort(self.store.as_ref(), &self.stats);
        }
        Ok(outcome)
    }

    /// Takes effect on the next new game, the current card is untouched.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub fn set_sound(&mut self, enabled: bool) {
        self.settings.sound = enabled;
        self.save_settings();
    }

    pub fn set_haptics(&mut self, enabled: bool) {
        self.settings.haptics = enabled;
        self.save_settings();
    }

    /// The gore level is locked to `Extreme`; other tiers are accepted and
    /// ignored.
    pub fn set_gore_level(&mut self, level: GoreLevel) {
        if level != GoreLevel::Extreme {
            log::debug!("Gore level {:?} requested, keeping extreme", level);
        }
        self.settings.gore_level = GoreLevel::Extreme;
        self.save_settings();
    }

    /// Called by the external capture flow after a successful upload.
    pub fn increment_photos_uploaded(&mut self) {
        self.stats.record_photo_upload();
        save_best_effort(self.store.as_ref(), &self.stats);
    }

    fn save_settings(&self) {
        save_best_effort(self.store.as_ref(), &self.settings);
    }
}
