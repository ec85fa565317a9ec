// Touch geometry shared by the card swipe and pull-to-refresh gestures.
use std::ops::Sub;
use web_sys::TouchEvent;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Size of the interactive region, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Current viewport size. Read on every gesture callback so rotation and
    /// resizes are picked up mid-session.
    pub fn from_window() -> Option<Self> {
        let win = web_sys::window()?;
        let width = win.inner_width().ok()?.as_f64()?;
        let height = win.inner_height().ok()?.as_f64()?;
        Some(Self { width, height })
    }
}

/// One finger-down..finger-up interaction. Lives only while the finger is down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSession {
    pub origin: Point,
    pub current: Point,
}

impl TouchSession {
    pub fn begin(point: Point) -> Self {
        Self { origin: point, current: point }
    }

    pub fn track(&mut self, point: Point) {
        self.current = point;
    }

    pub fn delta(&self) -> Point {
        self.current - self.origin
    }
}

/// First active touch in client coordinates.
pub fn first_touch(event: &TouchEvent) -> Option<Point> {
    let t = event.touches().item(0)?;
    Some(Point::new(t.client_x() as f64, t.client_y() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_tracks_latest_point() {
        let mut s = TouchSession::begin(Point::new(100.0, 200.0));
        assert_eq!(s.delta(), Point::ORIGIN);
        s.track(Point::new(130.0, 150.0));
        s.track(Point::new(90.0, 260.0));
        assert_eq!(s.delta(), Point::new(-10.0, 60.0));
    }
}
