//! Swipeable poem card.
//!
//! Turns one touch session on the card into a [`SwipeOutcome`], producing a
//! live [`DragTransform`] while the finger is down and a [`Settle`] once it
//! lifts. The caller arms a timer for [`Settle::duration_ms`] and then calls
//! [`SwipeRecognizer::finish_settle`] to learn what to do with the outcome.

use super::touch::{Point, Surface, TouchSession};
use crate::services::haptics::{Haptics, Intensity};

/// Tilt at a full-width drag, and the hard limit either way.
pub const MAX_ROTATION_DEG: f64 = 15.0;
/// Share of surface width a drag must exceed to count as a swipe (both axes).
pub const SWIPE_THRESHOLD_RATIO: f64 = 0.15;
/// How far up a swiped-up card flies, as a share of surface height.
pub const SWIPE_UP_EXIT_RATIO: f64 = 0.8;
pub const SETTLE_MS: u32 = 300;

const SETTLE_TRANSITION: &str = "transform 0.3s cubic-bezier(0.2, 1, 0.3, 1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    Left,
    Right,
    Up,
    /// Not far enough in any direction; the card returns to center.
    SnapBack,
}

impl SwipeOutcome {
    /// Where the card animates to once classified.
    pub fn exit_transform(self, surface: Surface) -> DragTransform {
        match self {
            SwipeOutcome::Right => DragTransform {
                offset: Point::new(surface.width, 0.0),
                rotation_deg: MAX_ROTATION_DEG,
            },
            SwipeOutcome::Left => DragTransform {
                offset: Point::new(-surface.width, 0.0),
                rotation_deg: -MAX_ROTATION_DEG,
            },
            SwipeOutcome::Up => DragTransform {
                offset: Point::new(0.0, -surface.height * SWIPE_UP_EXIT_RATIO),
                rotation_deg: 0.0,
            },
            SwipeOutcome::SnapBack => DragTransform::IDENTITY,
        }
    }

    fn haptic(self) -> Option<Intensity> {
        match self {
            SwipeOutcome::Left | SwipeOutcome::Right => Some(Intensity::Medium),
            SwipeOutcome::Up => Some(Intensity::Light),
            SwipeOutcome::SnapBack => None,
        }
    }
}

/// Classifies a finished drag by its final offset.
///
/// Horizontal wins over vertical; only upward vertical drags count. Both
/// thresholds use the surface width.
pub fn classify(offset: Point, surface: Surface) -> SwipeOutcome {
    let threshold = surface.width * SWIPE_THRESHOLD_RATIO;
    if offset.x.abs() > threshold {
        if offset.x > 0.0 { SwipeOutcome::Right } else { SwipeOutcome::Left }
    } else if offset.y < -threshold {
        SwipeOutcome::Up
    } else {
        SwipeOutcome::SnapBack
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTransform {
    pub offset: Point,
    pub rotation_deg: f64,
}

impl DragTransform {
    pub const IDENTITY: DragTransform = DragTransform { offset: Point::ORIGIN, rotation_deg: 0.0 };

    /// Offset follows the finger; tilt is proportional to horizontal travel.
    pub fn from_delta(delta: Point, surface: Surface) -> Self {
        let rotation_deg = if surface.width > 0.0 {
            (delta.x / surface.width * MAX_ROTATION_DEG).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG)
        } else {
            0.0
        };
        Self { offset: delta, rotation_deg }
    }

    pub fn css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotate({}deg)",
            self.offset.x, self.offset.y, self.rotation_deg
        )
    }
}

/// Result of lifting the finger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settle {
    pub outcome: SwipeOutcome,
    pub target: DragTransform,
    pub duration_ms: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardPhase {
    /// Centered, nothing in flight.
    #[default]
    Resting,
    /// Finger down; transform tracks it with no transition.
    Dragging,
    /// Finger up; animating toward the settle target.
    Settling,
}

#[derive(Clone, Debug, Default)]
pub struct SwipeRecognizer {
    session: Option<TouchSession>,
    transform: DragTransform,
    phase: CardPhase,
    pending: Option<SwipeOutcome>,
}

impl SwipeRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session unless the touch landed on an excluded control, a
    /// session is already open, or the last card is still flying out.
    pub fn on_start(&mut self, point: Point, excluded: bool) -> bool {
        if excluded {
            return false;
        }
        if self.session.is_some() {
            log::debug!("swipe: ignoring overlapping touchstart");
            return false;
        }
        if self.phase == CardPhase::Settling {
            return false;
        }
        self.session = Some(TouchSession::begin(point));
        self.transform = DragTransform::IDENTITY;
        self.phase = CardPhase::Dragging;
        true
    }

    pub fn on_move(&mut self, point: Point, surface: Surface) -> Option<DragTransform> {
        let session = self.session.as_mut()?;
        session.track(point);
        self.transform = DragTransform::from_delta(session.delta(), surface);
        Some(self.transform)
    }

    /// Closes the session and classifies the drag. Fires one haptic pulse for
    /// any real swipe.
    pub fn on_end(&mut self, surface: Surface, haptics: &impl Haptics) -> Option<Settle> {
        self.session.take()?;
        let outcome = classify(self.transform.offset, surface);
        if let Some(intensity) = outcome.haptic() {
            haptics.pulse(intensity);
        }
        log::debug!("swipe: classified {outcome:?} at {:?}", self.transform.offset);
        Some(self.settle_to(outcome, surface))
    }

    /// `touchcancel`: drop the session and snap back.
    pub fn on_cancel(&mut self) -> Option<Settle> {
        self.session.take()?;
        Some(self.settle_to(SwipeOutcome::SnapBack, Surface::new(0.0, 0.0)))
    }

    fn settle_to(&mut self, outcome: SwipeOutcome, surface: Surface) -> Settle {
        let target = outcome.exit_transform(surface);
        self.transform = target;
        self.phase = CardPhase::Settling;
        self.pending = Some(outcome);
        Settle { outcome, target, duration_ms: SETTLE_MS }
    }

    /// Settle timer fired: jump back to center without animating and hand out
    /// the outcome, if it was a swipe.
    pub fn finish_settle(&mut self) -> Option<SwipeOutcome> {
        if self.phase != CardPhase::Settling {
            return None;
        }
        self.transform = DragTransform::IDENTITY;
        self.phase = CardPhase::Resting;
        self.pending.take().filter(|o| *o != SwipeOutcome::SnapBack)
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn transform(&self) -> DragTransform {
        self.transform
    }

    pub fn css_transform(&self) -> String {
        self.transform.css()
    }

    pub fn css_transition(&self) -> &'static str {
        match self.phase {
            CardPhase::Settling => SETTLE_TRANSITION,
            CardPhase::Dragging | CardPhase::Resting => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingHaptics(RefCell<Vec<Intensity>>);

    impl Haptics for RecordingHaptics {
        fn pulse(&self, intensity: Intensity) {
            self.0.borrow_mut().push(intensity);
        }
    }

    const SCREEN: Surface = Surface { width: 400.0, height: 800.0 };

    fn drag(rec: &mut SwipeRecognizer, to: Point) {
        assert!(rec.on_start(Point::new(200.0, 400.0), false));
        rec.on_move(Point::new(200.0 + to.x, 400.0 + to.y), SCREEN);
    }

    #[test]
    fn classify_by_final_offset() {
        let w = SCREEN.width;
        assert_eq!(classify(Point::new(0.2 * w, 0.0), SCREEN), SwipeOutcome::Right);
        assert_eq!(classify(Point::new(-0.2 * w, 0.0), SCREEN), SwipeOutcome::Left);
        assert_eq!(classify(Point::new(0.0, -0.2 * w), SCREEN), SwipeOutcome::Up);
        assert_eq!(classify(Point::ORIGIN, SCREEN), SwipeOutcome::SnapBack);
        // downward drags never count
        assert_eq!(classify(Point::new(0.0, 0.5 * w), SCREEN), SwipeOutcome::SnapBack);
        // horizontal wins when both pass
        assert_eq!(classify(Point::new(0.2 * w, -0.5 * w), SCREEN), SwipeOutcome::Right);
        // exactly at the threshold is not a swipe
        assert_eq!(classify(Point::new(0.15 * w, 0.0), SCREEN), SwipeOutcome::SnapBack);
    }

    #[test]
    fn rotation_proportional_and_clamped() {
        let t = DragTransform::from_delta(Point::new(200.0, 10.0), SCREEN);
        assert_eq!(t.offset, Point::new(200.0, 10.0));
        assert!((t.rotation_deg - 7.5).abs() < 1e-9);

        let far = DragTransform::from_delta(Point::new(-1200.0, 0.0), SCREEN);
        assert_eq!(far.rotation_deg, -MAX_ROTATION_DEG);

        let flat = DragTransform::from_delta(Point::new(50.0, 0.0), Surface::new(0.0, 0.0));
        assert_eq!(flat.rotation_deg, 0.0);
    }

    #[test]
    fn excluded_region_never_opens_session() {
        let mut rec = SwipeRecognizer::new();
        assert!(!rec.on_start(Point::new(10.0, 10.0), true));
        assert!(!rec.is_active());
        assert_eq!(rec.on_move(Point::new(300.0, 10.0), SCREEN), None);
        assert_eq!(rec.transform(), DragTransform::IDENTITY);
        assert_eq!(rec.on_end(SCREEN, &RecordingHaptics::default()), None);
    }

    #[test]
    fn move_and_end_without_session_are_noops() {
        let mut rec = SwipeRecognizer::new();
        let haptics = RecordingHaptics::default();
        assert_eq!(rec.on_move(Point::new(1.0, 1.0), SCREEN), None);
        assert_eq!(rec.on_end(SCREEN, &haptics), None);
        assert_eq!(rec.on_cancel(), None);
        assert!(haptics.0.borrow().is_empty());
    }

    #[test]
    fn swipe_right_settles_off_screen_with_medium_pulse() {
        let mut rec = SwipeRecognizer::new();
        let haptics = RecordingHaptics::default();
        drag(&mut rec, Point::new(100.0, 5.0));
        assert_eq!(rec.css_transition(), "none");

        let settle = rec.on_end(SCREEN, &haptics).unwrap();
        assert_eq!(settle.outcome, SwipeOutcome::Right);
        assert_eq!(settle.target.offset, Point::new(400.0, 0.0));
        assert_eq!(settle.target.rotation_deg, 15.0);
        assert_eq!(settle.duration_ms, SETTLE_MS);
        assert_eq!(*haptics.0.borrow(), vec![Intensity::Medium]);
        // session is gone before the animation finishes
        assert!(!rec.is_active());
        assert_eq!(rec.css_transition(), SETTLE_TRANSITION);

        assert_eq!(rec.finish_settle(), Some(SwipeOutcome::Right));
        assert_eq!(rec.transform(), DragTransform::IDENTITY);
        assert_eq!(rec.css_transition(), "none");
        assert_eq!(rec.finish_settle(), None);
    }

    #[test]
    fn swipe_up_uses_light_pulse_and_height_exit() {
        let mut rec = SwipeRecognizer::new();
        let haptics = RecordingHaptics::default();
        drag(&mut rec, Point::new(20.0, -100.0));
        let settle = rec.on_end(SCREEN, &haptics).unwrap();
        assert_eq!(settle.outcome, SwipeOutcome::Up);
        assert_eq!(settle.target, DragTransform { offset: Point::new(0.0, -640.0), rotation_deg: 0.0 });
        assert_eq!(*haptics.0.borrow(), vec![Intensity::Light]);
    }

    #[test]
    fn short_drag_snaps_back_silently() {
        let mut rec = SwipeRecognizer::new();
        let haptics = RecordingHaptics::default();
        drag(&mut rec, Point::new(30.0, -30.0));
        let settle = rec.on_end(SCREEN, &haptics).unwrap();
        assert_eq!(settle.outcome, SwipeOutcome::SnapBack);
        assert_eq!(settle.target, DragTransform::IDENTITY);
        assert!(haptics.0.borrow().is_empty());
        assert_eq!(rec.finish_settle(), None);
        assert_eq!(rec.phase(), CardPhase::Resting);
    }

    #[test]
    fn tap_without_move_is_snap_back() {
        let mut rec = SwipeRecognizer::new();
        assert!(rec.on_start(Point::new(5.0, 5.0), false));
        let settle = rec.on_end(SCREEN, &RecordingHaptics::default()).unwrap();
        assert_eq!(settle.outcome, SwipeOutcome::SnapBack);
    }

    #[test]
    fn overlapping_and_mid_settle_starts_ignored() {
        let mut rec = SwipeRecognizer::new();
        drag(&mut rec, Point::new(120.0, 0.0));
        assert!(!rec.on_start(Point::new(0.0, 0.0), false));
        assert_eq!(rec.transform().offset, Point::new(120.0, 0.0));

        rec.on_end(SCREEN, &RecordingHaptics::default());
        assert!(!rec.on_start(Point::new(0.0, 0.0), false));
        rec.finish_settle();
        assert!(rec.on_start(Point::new(0.0, 0.0), false));
    }

    #[test]
    fn cancel_snaps_back() {
        let mut rec = SwipeRecognizer::new();
        drag(&mut rec, Point::new(300.0, 0.0));
        let settle = rec.on_cancel().unwrap();
        assert_eq!(settle.outcome, SwipeOutcome::SnapBack);
        assert!(!rec.is_active());
        assert_eq!(rec.finish_settle(), None);
    }

    #[test]
    fn css_transform_format() {
        let t = DragTransform { offset: Point::new(12.5, -4.0), rotation_deg: 3.0 };
        assert_eq!(t.css(), "translate3d(12.5px, -4px, 0) rotate(3deg)");
    }
}
