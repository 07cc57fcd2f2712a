use duoslide_ui::{Axis, Point, Rect};

use crate::numeric::{CanonicalDomain, CanonicalScalar};

/// Gap between the frame edge and the grabs.
pub(super) const GRAB_PADDING: f32 = 2.0;
/// Fraction of the grab size the connector is inset by across the axis.
const CONNECTOR_INSET: f32 = 0.3;

/// Resolved geometry of one range slider for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderGeometry {
    /// Frame rectangle of the track.
    pub frame: Rect,
    /// Direction of travel.
    pub axis: Axis,
    /// Extent of one grab along the axis.
    pub grab_size: f32,
    /// Axis coordinate of a grab center at ratio 0 (ratio 1 when vertical).
    pub usable_min: f32,
    /// Axis coordinate of a grab center at ratio 1 (ratio 0 when vertical).
    pub usable_max: f32,
    /// Grab rectangles of the first and second handle.
    pub handles: [Rect; 2],
    /// Bar between the two grabs, empty when they overlap.
    pub connector: Rect,
}

impl SliderGeometry {
    /// Travel available to a grab center.
    pub fn usable_size(&self) -> f32 {
        self.usable_max - self.usable_min
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TrackLayout {
    frame: Rect,
    axis: Axis,
    track: f32,
    grab_size: f32,
    usable_min: f32,
    usable_max: f32,
}

impl TrackLayout {
    pub fn new<C: CanonicalScalar>(
        frame: Rect,
        axis: Axis,
        domain: &CanonicalDomain<C>,
        grab_min_size: f32,
    ) -> Self {
        let track = frame.extent(axis) - GRAB_PADDING * 2.0;
        let range = domain.span();
        let mut grab_size = grab_min_size;
        if !C::IS_FLOAT && range >= 0.0 {
            grab_size = ((f64::from(track) / (range + 1.0)) as f32).max(grab_min_size);
        }
        grab_size = grab_size.min(track.max(0.0));

        let half = grab_size * 0.5;
        Self {
            frame,
            axis,
            track,
            grab_size,
            usable_min: frame.min.along(axis) + GRAB_PADDING + half,
            usable_max: frame.max.along(axis) - GRAB_PADDING - half,
        }
    }

    /// Too short to travel: grabs collapse and input is ignored.
    pub fn is_degenerate(&self) -> bool {
        self.track < 1.0
    }

    pub fn usable_size(&self) -> f32 {
        self.usable_max - self.usable_min
    }

    pub fn ratio_at(&self, pos: Point) -> f32 {
        let usable = self.usable_size();
        let ratio = if usable > 0.0 {
            ((pos.along(self.axis) - self.usable_min) / usable).clamp(0.0, 1.0)
        } else {
            0.0
        };
        match self.axis {
            Axis::X => ratio,
            Axis::Y => 1.0 - ratio,
        }
    }

    pub fn handle_rect(&self, ratio: f32) -> Rect {
        if self.is_degenerate() {
            return Rect::from_points(self.frame.min, self.frame.min);
        }
        let t = match self.axis {
            Axis::X => ratio,
            Axis::Y => 1.0 - ratio,
        };
        let center = self.usable_min + (self.usable_max - self.usable_min) * t;
        let half = self.grab_size * 0.5;
        let cross = self.axis.cross();
        let min = Point::ZERO
            .with_along(self.axis, center - half)
            .with_along(cross, self.frame.min.along(cross) + GRAB_PADDING);
        let max = Point::ZERO
            .with_along(self.axis, center + half)
            .with_along(cross, self.frame.max.along(cross) - GRAB_PADDING);
        Rect::from_points(min, max)
    }

    pub fn geometry(&self, first_ratio: f32, second_ratio: f32) -> SliderGeometry {
        let handles = [self.handle_rect(first_ratio), self.handle_rect(second_ratio)];
        SliderGeometry {
            frame: self.frame,
            axis: self.axis,
            grab_size: if self.is_degenerate() { 0.0 } else { self.grab_size },
            usable_min: self.usable_min,
            usable_max: self.usable_max,
            handles,
            connector: self.connector(handles),
        }
    }

    fn connector(&self, [a, b]: [Rect; 2]) -> Rect {
        if self.is_degenerate() {
            return Rect::from_points(self.frame.min, self.frame.min);
        }
        let (low, high) = if a.min.along(self.axis) <= b.min.along(self.axis) {
            (a, b)
        } else {
            (b, a)
        };
        let start = low.max.along(self.axis);
        let end = high.min.along(self.axis);
        if end <= start {
            return Rect::from_points(low.max, low.max);
        }
        let cross = self.axis.cross();
        let inset = self.grab_size * CONNECTOR_INSET;
        let min = Point::ZERO
            .with_along(self.axis, start)
            .with_along(cross, low.min.along(cross) + inset);
        let max = Point::ZERO
            .with_along(self.axis, end)
            .with_along(cross, low.max.along(cross) - inset);
        Rect::from_points(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain_f(min: f64, max: f64) -> CanonicalDomain<f64> {
        CanonicalDomain {
            min,
            max,
            power: 1.0,
            power_curve: false,
        }
    }

    fn domain_i(min: i32, max: i32) -> CanonicalDomain<i32> {
        CanonicalDomain {
            min,
            max,
            power: 1.0,
            power_curve: false,
        }
    }

    #[test]
    fn float_track_uses_min_grab_size() {
        let layout = TrackLayout::new(
            Rect::new(0.0, 0.0, 104.0, 20.0),
            Axis::X,
            &domain_f(0.0, 1.0),
            10.0,
        );
        assert_eq!(layout.usable_min, 7.0);
        assert_eq!(layout.usable_max, 97.0);
        assert_eq!(layout.handle_rect(0.0), Rect::new(2.0, 2.0, 12.0, 18.0));
        assert_eq!(layout.handle_rect(1.0), Rect::new(92.0, 2.0, 102.0, 18.0));
    }

    #[test]
    fn integer_grab_covers_one_unit() {
        let layout = TrackLayout::new(
            Rect::new(0.0, 0.0, 104.0, 20.0),
            Axis::X,
            &domain_i(0, 3),
            10.0,
        );
        assert_eq!(layout.grab_size, 25.0);
        let wide = TrackLayout::new(
            Rect::new(0.0, 0.0, 104.0, 20.0),
            Axis::X,
            &domain_i(0, 1000),
            10.0,
        );
        assert_eq!(wide.grab_size, 10.0);
    }

    #[test]
    fn grab_is_capped_at_track_length() {
        let layout = TrackLayout::new(
            Rect::new(0.0, 0.0, 10.0, 20.0),
            Axis::X,
            &domain_f(0.0, 1.0),
            50.0,
        );
        assert_eq!(layout.grab_size, 6.0);
        assert_eq!(layout.usable_size(), 0.0);
        assert_eq!(layout.ratio_at(Point::new(100.0, 5.0)), 0.0);
    }

    #[test]
    fn pointer_ratio_is_clamped() {
        let layout = TrackLayout::new(
            Rect::new(0.0, 0.0, 104.0, 20.0),
            Axis::X,
            &domain_f(0.0, 1.0),
            10.0,
        );
        assert_eq!(layout.ratio_at(Point::new(52.0, 0.0)), 0.5);
        assert_eq!(layout.ratio_at(Point::new(-40.0, 0.0)), 0.0);
        assert_eq!(layout.ratio_at(Point::new(400.0, 0.0)), 1.0);
    }

    #[test]
    fn vertical_axis_is_inverted() {
        let layout = TrackLayout::new(
            Rect::new(0.0, 0.0, 20.0, 104.0),
            Axis::Y,
            &domain_f(0.0, 1.0),
            10.0,
        );
        assert_eq!(layout.ratio_at(Point::new(5.0, 97.0)), 0.0);
        assert_eq!(layout.ratio_at(Point::new(5.0, 7.0)), 1.0);
        assert_eq!(layout.handle_rect(1.0), Rect::new(2.0, 2.0, 18.0, 12.0));
        assert_eq!(layout.handle_rect(0.0), Rect::new(2.0, 92.0, 18.0, 102.0));
    }

    #[test]
    fn connector_spans_gap_between_grabs() {
        let layout = TrackLayout::new(
            Rect::new(0.0, 0.0, 104.0, 20.0),
            Axis::X,
            &domain_f(0.0, 1.0),
            10.0,
        );
        let geometry = layout.geometry(0.0, 1.0);
        assert_eq!(geometry.connector, Rect::new(12.0, 5.0, 92.0, 15.0));
        let swapped = layout.geometry(1.0, 0.0);
        assert_eq!(swapped.connector, geometry.connector);
        assert!(layout.geometry(0.5, 0.5).connector.is_empty());
    }

    #[test]
    fn vertical_connector() {
        let layout = TrackLayout::new(
            Rect::new(0.0, 0.0, 20.0, 104.0),
            Axis::Y,
            &domain_f(0.0, 1.0),
            10.0,
        );
        let geometry = layout.geometry(0.0, 1.0);
        assert_eq!(geometry.connector, Rect::new(5.0, 12.0, 15.0, 92.0));
    }

    #[test]
    fn degenerate_track_collapses_grabs() {
        let frame = Rect::new(30.0, 40.0, 34.0, 60.0);
        let layout = TrackLayout::new(frame, Axis::X, &domain_f(0.0, 1.0), 10.0);
        assert!(layout.is_degenerate());
        let geometry = layout.geometry(0.2, 0.8);
        assert_eq!(geometry.handles, [Rect::from_points(frame.min, frame.min); 2]);
        assert!(geometry.connector.is_empty());
    }
}
