//! Pointer and scroll driven motion math
//!
//! Pure functions behind the cursor trail, magnetic buttons, ripples, card
//! tilt, parallax and navbar effects. Geometry comes in as [`Rect`] and
//! [`Point`] values taken from `getBoundingClientRect()` and mouse events.

/// Default fraction of the remaining distance the trail covers per frame
pub const DEFAULT_TRAIL_SMOOTHING: f64 = 0.1;

/// Half the trail dot's size; its top-left is offset by this much (px)
pub const DEFAULT_TRAIL_OFFSET_PX: f64 = 8.0;

/// Fraction of the pointer offset a magnetic button follows
pub const DEFAULT_MAGNET_STRENGTH: f64 = 0.1;

/// Maximum card rotation at the edges (degrees)
pub const DEFAULT_TILT_DEGREES: f64 = 10.0;

/// Scroll offset past which the navbar turns solid (px)
pub const DEFAULT_NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;

/// Final diameter of a click ripple (px)
pub const RIPPLE_SIZE_PX: u32 = 300;

/// Ripple animation length (ms)
pub const RIPPLE_DURATION_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Element box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the box's top-left corner
    pub fn local(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.left, pointer.y - self.top)
    }

    /// Pointer position relative to the box's center
    pub fn from_center(&self, pointer: Point) -> Point {
        let local = self.local(pointer);
        Point::new(local.x - self.width / 2.0, local.y - self.height / 2.0)
    }
}

/// Trail dot that eases toward the pointer every animation frame
#[derive(Debug, Clone, Copy)]
pub struct TrailFollower {
    position: Point,
    target: Point,
    smoothing: f64,
}

impl TrailFollower {
    pub fn new(smoothing: f64) -> Self {
        Self {
            position: Point::default(),
            target: Point::default(),
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Advance one frame and return the new position
    pub fn step(&mut self) -> Point {
        let dx = self.target.x - self.position.x;
        let dy = self.target.y - self.position.y;

        self.position.x += dx * self.smoothing;
        self.position.y += dy * self.smoothing;

        // Snap when close enough so the loop stops producing sub-pixel writes
        if dx.abs() < 0.1 && dy.abs() < 0.1 {
            self.position = self.target;
        }

        self.position
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target
    }
}

impl Default for TrailFollower {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_SMOOTHING)
    }
}

/// CSS `transform` pulling a button toward the pointer
pub fn magnetic_transform(rect: Rect, pointer: Point, strength: f64) -> String {
    let offset = rect.from_center(pointer);
    format!(
        "translate({}px, {}px) scale(1.05)",
        offset.x * strength,
        offset.y * strength
    )
}

/// Transform that puts a magnetic button back in place
pub const MAGNET_RESET: &str = "translate(0, 0) scale(1)";

/// 3D rotation of a card under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for `pointer` over `rect`: pointer above center tips the top
    /// edge away, pointer right of center turns the card right
    pub fn for_pointer(rect: Rect, pointer: Point, max_degrees: f64) -> Self {
        let cx = rect.width / 2.0;
        let cy = rect.height / 2.0;
        if cx <= 0.0 || cy <= 0.0 {
            return Self::default();
        }

        let local = rect.local(pointer);
        Self {
            rotate_x: (local.y - cy) / cy * -max_degrees,
            rotate_y: (local.x - cx) / cx * max_degrees,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.05, 1.05, 1.05)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Transform that flattens a tilted card
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)";

/// Vertical drift of the `index`th floating element at `scroll_y`
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    let speed = 0.5 + index as f64 * 0.1;
    scroll_y * speed * 0.1
}

/// Navbar look depending on how far the page is scrolled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Translucent,
    Solid,
}

impl NavbarStyle {
    /// Solid once the page is scrolled strictly past `threshold`
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Translucent
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarStyle::Solid => "rgba(0, 0, 0, 0.9)",
            NavbarStyle::Translucent => "rgba(0, 0, 0, 0.5)",
        }
    }

    pub fn backdrop_filter(&self) -> &'static str {
        match self {
            NavbarStyle::Solid => "blur(20px)",
            NavbarStyle::Translucent => "blur(12px)",
        }
    }
}

/// Opacity of the background grid at time `now_ms`
pub fn grid_opacity(now_ms: f64) -> f64 {
    0.1 + (now_ms * 0.001).sin() * 0.05
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_trail_moves_ten_percent_per_frame() {
        let mut trail = TrailFollower::default();
        trail.set_target(Point::new(100.0, 50.0));

        let p = trail.step();
        assert!((p.x - 10.0).abs() < EPS);
        assert!((p.y - 5.0).abs() < EPS);

        let p = trail.step();
        assert!((p.x - 19.0).abs() < EPS);
        assert!((p.y - 9.5).abs() < EPS);
    }

    #[test]
    fn test_trail_settles_on_target() {
        let mut trail = TrailFollower::default();
        trail.set_target(Point::new(40.0, -20.0));
        for _ in 0..200 {
            trail.step();
        }
        assert!(trail.is_settled());
        assert_eq!(trail.position(), Point::new(40.0, -20.0));
    }

    #[test]
    fn test_trail_smoothing_is_clamped() {
        let mut trail = TrailFollower::new(3.0);
        trail.set_target(Point::new(10.0, 10.0));
        assert_eq!(trail.step(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_magnetic_transform() {
        let rect = Rect::new(100.0, 100.0, 200.0, 50.0);
        // Center of the button
        assert_eq!(
            magnetic_transform(rect, Point::new(200.0, 125.0), DEFAULT_MAGNET_STRENGTH),
            "translate(0px, 0px) scale(1.05)"
        );
        // Right edge, vertically centered
        assert_eq!(
            magnetic_transform(rect, Point::new(300.0, 125.0), DEFAULT_MAGNET_STRENGTH),
            "translate(10px, 0px) scale(1.05)"
        );
    }

    #[test]
    fn test_tilt_is_flat_at_center() {
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        let tilt = Tilt::for_pointer(rect, Point::new(100.0, 50.0), DEFAULT_TILT_DEGREES);
        assert!(tilt.rotate_x.abs() < EPS);
        assert!(tilt.rotate_y.abs() < EPS);
    }

    #[test]
    fn test_tilt_at_top_left_corner() {
        let rect = Rect::new(50.0, 50.0, 200.0, 100.0);
        let tilt = Tilt::for_pointer(rect, Point::new(50.0, 50.0), DEFAULT_TILT_DEGREES);
        assert!((tilt.rotate_x - 10.0).abs() < EPS);
        assert!((tilt.rotate_y + 10.0).abs() < EPS);
    }

    #[test]
    fn test_tilt_on_empty_rect() {
        let tilt = Tilt::for_pointer(Rect::default(), Point::new(5.0, 5.0), DEFAULT_TILT_DEGREES);
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn test_tilt_css() {
        let tilt = Tilt {
            rotate_x: 5.0,
            rotate_y: -2.5,
        };
        assert_eq!(
            tilt.to_css(),
            "perspective(1000px) rotateX(5deg) rotateY(-2.5deg) scale3d(1.05, 1.05, 1.05)"
        );
    }

    #[test]
    fn test_parallax_speed_grows_with_index() {
        assert!((parallax_offset(1000.0, 0) - 50.0).abs() < EPS);
        assert!((parallax_offset(1000.0, 2) - 70.0).abs() < EPS);
        assert_eq!(parallax_offset(0.0, 5), 0.0);
    }

    #[test]
    fn test_navbar_threshold_is_exclusive() {
        let threshold = DEFAULT_NAVBAR_SCROLL_THRESHOLD;
        assert_eq!(NavbarStyle::for_scroll(100.0, threshold), NavbarStyle::Translucent);
        assert_eq!(NavbarStyle::for_scroll(101.0, threshold), NavbarStyle::Solid);
        assert_eq!(NavbarStyle::Solid.backdrop_filter(), "blur(20px)");
        assert_eq!(NavbarStyle::Translucent.background(), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_grid_opacity_range() {
        for t in (0..20_000).step_by(250) {
            let opacity = grid_opacity(t as f64);
            assert!((0.05 - EPS..=0.15 + EPS).contains(&opacity));
        }
        assert!((grid_opacity(0.0) - 0.1).abs() < EPS);
    }

    #[test]
    fn test_ripple_origin_is_local() {
        let rect = Rect::new(20.0, 30.0, 100.0, 40.0);
        assert_eq!(rect.local(Point::new(25.0, 50.0)), Point::new(5.0, 20.0));
    }
}
