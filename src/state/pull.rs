//! Pull-to-refresh: the card's touch session restricted to the vertical axis,
//! triggered by distance instead of classification.

use super::touch::{Point, TouchSession};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullConfig {
    /// Distance (after resistance) that triggers a refresh on release.
    pub threshold: f64,
    pub max_pull: f64,
    /// Finger travel to indicator travel.
    pub resistance: f64,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self { threshold: 100.0, max_pull: 150.0, resistance: 0.5 }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PullToRefresh {
    config: PullConfig,
    session: Option<TouchSession>,
    distance: f64,
    refreshing: bool,
}

impl PullToRefresh {
    #[cfg(test)]
    pub fn new(config: PullConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Only arms when the page is scrolled to the very top.
    pub fn on_start(&mut self, point: Point, scroll_top: f64) -> bool {
        if scroll_top != 0.0 || self.refreshing {
            return false;
        }
        self.session = Some(TouchSession::begin(point));
        self.distance = 0.0;
        true
    }

    /// Returns whether the move was consumed, i.e. the browser's own scroll
    /// should be suppressed.
    pub fn on_move(&mut self, point: Point) -> bool {
        let Some(session) = self.session.as_mut() else { return false };
        session.track(point);
        let dy = session.delta().y;
        if dy <= 0.0 {
            return false;
        }
        self.distance = (dy * self.config.resistance).min(self.config.max_pull);
        true
    }

    /// True when the pull went past the threshold and a refresh should begin.
    pub fn on_end(&mut self) -> bool {
        let triggered = self.session.take().is_some() && self.distance > self.config.threshold;
        self.distance = 0.0;
        if triggered {
            self.refreshing = true;
        }
        triggered
    }

    /// `touchcancel`: the pull is abandoned without refreshing.
    pub fn on_cancel(&mut self) {
        self.session = None;
        self.distance = 0.0;
    }

    pub fn finish_refresh(&mut self) {
        self.refreshing = false;
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }
}
