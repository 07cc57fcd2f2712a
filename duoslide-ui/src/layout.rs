//! Flow layout cursor.
//!
//! Items are placed top to bottom. [`LayoutCursor::same_line`] continues on
//! the line of the previous item instead, and groups let a composite widget
//! report its whole bounding box as a single item.

use smallvec::SmallVec;

use crate::geometry::{Point, Rect, Size};

#[derive(Debug, Clone)]
struct GroupFrame {
    start: Point,
    origin_x: f32,
    line_height: f32,
    bounds: Option<Rect>,
}

/// Position of the next item plus the width and group stacks.
#[derive(Debug, Clone, Default)]
pub struct LayoutCursor {
    origin_x: f32,
    pos: Point,
    line_height: f32,
    prev_line_height: f32,
    last_item: Rect,
    item_widths: SmallVec<[f32; 8]>,
    groups: SmallVec<[GroupFrame; 4]>,
}

impl LayoutCursor {
    /// Restarts layout at `origin`, dropping any pushed widths and groups.
    pub fn reset(&mut self, origin: Point) {
        *self = Self {
            origin_x: origin.x,
            pos: origin,
            last_item: Rect::from_points(origin, origin),
            ..Self::default()
        };
    }

    /// Where the next item will be placed.
    pub fn cursor(&self) -> Point {
        self.pos
    }

    /// Rectangle of the most recently placed item.
    pub fn last_item(&self) -> Rect {
        self.last_item
    }

    /// Claims `size` at the cursor and moves to the next line.
    pub fn item_size(&mut self, size: Size, spacing_y: f32) -> Rect {
        let rect = Rect::from_min_size(self.pos, size);
        self.line_height = self.line_height.max(size.height);
        self.prev_line_height = self.line_height;
        self.last_item = rect;
        if let Some(group) = self.groups.last_mut() {
            group.bounds = Some(match group.bounds {
                Some(bounds) => bounds.union(&rect),
                None => rect,
            });
        }
        self.pos = Point::new(self.origin_x, self.pos.y + self.line_height + spacing_y);
        self.line_height = 0.0;
        rect
    }

    /// Places the next item to the right of the previous one.
    pub fn same_line(&mut self, spacing_x: f32) {
        self.pos = Point::new(self.last_item.max.x + spacing_x, self.last_item.min.y);
        self.line_height = self.prev_line_height;
    }

    /// Width for the next item: the innermost pushed width, or `default`.
    pub fn item_width(&self, default: f32) -> f32 {
        self.item_widths.last().copied().unwrap_or(default)
    }

    /// Pushes an explicit item width.
    pub fn push_item_width(&mut self, width: f32) {
        self.item_widths.push(width);
    }

    /// Pops the innermost item width.
    pub fn pop_item_width(&mut self) -> bool {
        self.item_widths.pop().is_some()
    }

    /// Splits `full_width` between `count` items separated by `spacing`.
    ///
    /// Pushes `count` widths: each item pops one after it is drawn, and the
    /// last item absorbs the rounding remainder.
    pub fn push_multi_items_widths(&mut self, count: usize, full_width: f32, spacing: f32) {
        if count == 0 {
            return;
        }
        let gaps = (count - 1) as f32;
        let one = ((full_width - spacing * gaps) / count as f32).floor().max(1.0);
        let last = (full_width - (one + spacing) * gaps).floor().max(1.0);
        self.item_widths.push(last);
        for _ in 1..count {
            self.item_widths.push(one);
        }
    }

    /// Starts a group at the cursor.
    pub fn begin_group(&mut self) {
        self.groups.push(GroupFrame {
            start: self.pos,
            origin_x: self.origin_x,
            line_height: self.line_height,
            bounds: None,
        });
        self.origin_x = self.pos.x;
    }

    /// Ends the innermost group and places its bounding box as one item.
    pub fn end_group(&mut self, spacing_y: f32) -> Option<Rect> {
        let group = self.groups.pop()?;
        self.origin_x = group.origin_x;
        self.pos = group.start;
        self.line_height = group.line_height;
        let bounds = group
            .bounds
            .unwrap_or_else(|| Rect::from_points(group.start, group.start));
        let size = Size::new(
            bounds.max.x - group.start.x,
            bounds.max.y - group.start.y,
        );
        Some(self.item_size(size, spacing_y))
    }

    /// Depth of the item width stack.
    pub fn item_width_depth(&self) -> usize {
        self.item_widths.len()
    }

    /// Depth of the group stack.
    pub fn group_depth(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_items_vertically() {
        let mut layout = LayoutCursor::default();
        layout.reset(Point::new(8.0, 8.0));
        let a = layout.item_size(Size::new(100.0, 19.0), 4.0);
        let b = layout.item_size(Size::new(50.0, 10.0), 4.0);
        assert_eq!(a, Rect::new(8.0, 8.0, 108.0, 27.0));
        assert_eq!(b.min, Point::new(8.0, 31.0));
        assert_eq!(layout.cursor(), Point::new(8.0, 45.0));
    }

    #[test]
    fn same_line_continues_previous_line() {
        let mut layout = LayoutCursor::default();
        layout.reset(Point::ZERO);
        layout.item_size(Size::new(100.0, 19.0), 4.0);
        layout.same_line(4.0);
        let b = layout.item_size(Size::new(30.0, 13.0), 4.0);
        assert_eq!(b.min, Point::new(104.0, 0.0));
        assert_eq!(layout.cursor(), Point::new(0.0, 23.0));
    }

    #[test]
    fn multi_item_widths_fill_the_row() {
        let mut layout = LayoutCursor::default();
        layout.push_multi_items_widths(3, 200.0, 4.0);
        let mut widths = Vec::new();
        while layout.item_width_depth() > 0 {
            widths.push(layout.item_width(0.0));
            layout.pop_item_width();
        }
        assert_eq!(widths, vec![64.0, 64.0, 64.0]);

        layout.push_multi_items_widths(2, 101.0, 4.0);
        assert_eq!(layout.item_width(0.0), 48.0);
        layout.pop_item_width();
        assert_eq!(layout.item_width(0.0), 49.0);
    }

    #[test]
    fn group_reports_bounding_box() {
        let mut layout = LayoutCursor::default();
        layout.reset(Point::ZERO);
        layout.begin_group();
        layout.item_size(Size::new(60.0, 19.0), 4.0);
        layout.same_line(4.0);
        layout.item_size(Size::new(60.0, 19.0), 4.0);
        layout.same_line(4.0);
        layout.item_size(Size::new(20.0, 13.0), 4.0);
        let group = layout.end_group(4.0);
        assert_eq!(group, Some(Rect::new(0.0, 0.0, 148.0, 19.0)));
        assert_eq!(layout.cursor(), Point::new(0.0, 23.0));
        assert_eq!(layout.group_depth(), 0);
    }
}
