use duoslide_ui::{Point, Rect, Style};

/// Height of a popup showing `rows` rows.
pub(super) fn popup_height(style: &Style, rows: usize) -> f32 {
    (style.font_size + style.item_spacing.y) * rows as f32 - style.item_spacing.y
        + style.window_padding.y * 2.0
}

/// Placement of the popup below a select frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PopupLayout {
    pub rect: Rect,
    /// Rows that fit at once.
    pub capacity: usize,
    /// Total rows, including the placeholder.
    pub rows: usize,
    row_origin: Point,
    row_height: f32,
    row_stride: f32,
}

impl PopupLayout {
    pub fn new(style: &Style, frame: Rect, rows: usize, max_visible: usize) -> Self {
        let rows = rows.max(1);
        let capacity = rows.min(max_visible.max(1));
        let rect = Rect::new(
            frame.min.x,
            frame.max.y,
            frame.max.x,
            frame.max.y + popup_height(style, capacity),
        );
        Self {
            rect,
            capacity,
            rows,
            row_origin: Point::new(
                rect.min.x + style.frame_padding.x,
                rect.min.y + style.window_padding.y,
            ),
            row_height: style.font_size,
            row_stride: style.font_size + style.item_spacing.y,
        }
    }

    /// Largest useful scroll offset.
    pub fn max_scroll(&self) -> usize {
        self.rows - self.capacity
    }

    /// Rectangle of the `slot`-th visible row, spanning the popup width and
    /// half the item spacing above and below the text.
    pub fn row_rect(&self, slot: usize) -> Rect {
        let top = self.row_origin.y + self.row_stride * slot as f32;
        let gap = (self.row_stride - self.row_height) * 0.5;
        Rect::new(self.rect.min.x, top - gap, self.rect.max.x, top + self.row_height + gap)
    }

    /// Where the text of the `slot`-th visible row starts.
    pub fn row_text_pos(&self, slot: usize) -> Point {
        Point::new(
            self.row_origin.x,
            self.row_origin.y + self.row_stride * slot as f32,
        )
    }
}
