use glam::Vec2;

use crate::api::NarrowphaseApi;
use crate::types::*;

/// Narrowphase primitive tests.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn overlap_rect_rect(a: Rect, b: Rect) -> bool {
        a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
    }

    fn overlap_x(a: Rect, b: Rect) -> bool {
        a.right() > b.left() && a.left() < b.right()
    }

    fn sweep_landing(a: Rect, vel: Vec2, b: Rect) -> Option<Vec2> {
        if !Self::overlap_x(a, b) {
            return None;
        }
        let bottom = a.bottom();
        let prev_bottom = bottom - vel.y;
        if prev_bottom <= b.top() && bottom >= b.top() {
            Some(Vec2::new(a.pos.x, b.top() - a.size.y))
        } else {
            None
        }
    }

    fn sweep_ceiling(a: Rect, vel: Vec2, b: Rect) -> Option<Vec2> {
        if !Self::overlap_x(a, b) {
            return None;
        }
        let top = a.top();
        let prev_top = top - vel.y;
        if prev_top >= b.bottom() && top <= b.bottom() {
            Some(Vec2::new(a.pos.x, b.bottom()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_rect_rect_basic() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert!(Narrowphase::overlap_rect_rect(a, Rect::new(1.5, 0.0, 2.0, 2.0)));
        assert!(Narrowphase::overlap_rect_rect(a, Rect::new(-1.0, 1.9, 2.0, 2.0)));
        // Containment counts
        assert!(Narrowphase::overlap_rect_rect(Rect::new(-5.0, -5.0, 20.0, 20.0), a));
    }

    #[test]
    fn test_overlap_rect_rect_separated() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(3.1, 0.0, 2.0, 2.0);
        assert!(!Narrowphase::overlap_rect_rect(a, b));
    }

    #[test]
    fn test_overlap_rect_rect_touching_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(2.0, 0.0, 2.0, 2.0);
        assert!(!Narrowphase::overlap_rect_rect(a, b));
        let c = Rect::new(0.0, 2.0, 2.0, 2.0);
        assert!(!Narrowphase::overlap_rect_rect(a, c));
    }

    #[test]
    fn test_overlap_x_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(Narrowphase::overlap_x(a, Rect::new(9.0, 100.0, 5.0, 5.0)));
        assert!(!Narrowphase::overlap_x(a, Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!Narrowphase::overlap_x(a, Rect::new(-5.0, 0.0, 5.0, 5.0)));
    }

    // --- Sweeps ------------------------------------------------------------

    #[test]
    fn test_sweep_landing_snaps_to_top() {
        let platform = Rect::new(0.0, 100.0, 50.0, 10.0);
        // Bottom moved from 98 to 104 this tick
        let a = Rect::new(10.0, 74.0, 10.0, 30.0);
        let pos = Narrowphase::sweep_landing(a, Vec2::new(0.0, 6.0), platform).unwrap();
        assert_eq!(pos, Vec2::new(10.0, 70.0));
    }

    #[test]
    fn test_sweep_landing_fast_fall_through_thin_platform() {
        let platform = Rect::new(0.0, 100.0, 50.0, 10.0);
        // Bottom moved from 80 to 130, entirely past the platform
        let a = Rect::new(10.0, 100.0, 10.0, 30.0);
        let pos = Narrowphase::sweep_landing(a, Vec2::new(0.0, 50.0), platform).unwrap();
        assert_eq!(pos.y, 70.0);
    }

    #[test]
    fn test_sweep_landing_misses_when_already_below() {
        let platform = Rect::new(0.0, 100.0, 50.0, 10.0);
        let a = Rect::new(10.0, 90.0, 10.0, 30.0);
        assert!(Narrowphase::sweep_landing(a, Vec2::new(0.0, 5.0), platform).is_none());
    }

    #[test]
    fn test_sweep_landing_needs_horizontal_overlap() {
        let platform = Rect::new(0.0, 100.0, 50.0, 10.0);
        let a = Rect::new(50.0, 74.0, 10.0, 30.0);
        assert!(Narrowphase::sweep_landing(a, Vec2::new(0.0, 6.0), platform).is_none());
    }

    #[test]
    fn test_sweep_ceiling_from_below() {
        let platform = Rect::new(0.0, 100.0, 50.0, 10.0);
        // Top moved from 115 to 105 this tick
        let a = Rect::new(10.0, 105.0, 10.0, 30.0);
        let pos = Narrowphase::sweep_ceiling(a, Vec2::new(0.0, -10.0), platform).unwrap();
        assert_eq!(pos, Vec2::new(10.0, 110.0));
    }

    #[test]
    fn test_sweep_ceiling_ignores_falling_body() {
        let platform = Rect::new(0.0, 100.0, 50.0, 10.0);
        let a = Rect::new(10.0, 105.0, 10.0, 30.0);
        assert!(Narrowphase::sweep_ceiling(a, Vec2::new(0.0, 3.0), platform).is_none());
    }
}
