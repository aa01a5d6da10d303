use crate::config::{PickerConfig, SelectorStyle};

/// Rectangle in picker-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Pixel-space layout of the picker: cell height derived from the viewport,
/// the selector band, and the previous/next tap zones.
///
/// The scrollable content is modelled as a column of children: a leading
/// space band of `space_cell_count` cells, one cell per item, and a trailing
/// space band (one cell shorter when the shown item count is even). The
/// spaces let the first and last item reach the centered selector.
#[derive(Debug, Clone, Copy)]
pub struct PickerGeometry {
    viewport_width: i32,
    viewport_height: i32,
    shown_item_count: i32,
    space_cell_count: i32,
    cell_height: i32,
    selector_rect: Rect,
    select_previous_rect: Rect,
    select_next_rect: Rect,
}

impl PickerGeometry {
    pub fn new(shown_item_count: i32) -> Self {
        Self {
            viewport_width: 0,
            viewport_height: 0,
            shown_item_count,
            space_cell_count: shown_item_count / 2,
            cell_height: 0,
            selector_rect: Rect::default(),
            select_previous_rect: Rect::default(),
            select_next_rect: Rect::default(),
        }
    }

    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn set_shown_item_count(&mut self, count: i32) {
        self.shown_item_count = count;
        self.space_cell_count = count / 2;
    }

    /// Re-derive cell height and all rectangles from the current viewport.
    /// Skipped while the viewport or shown item count is non-positive; these
    /// occur transiently during layout passes and are not errors.
    pub fn recompute(&mut self, config: &PickerConfig) {
        if self.viewport_height <= 0 || self.shown_item_count <= 0 {
            return;
        }
        self.cell_height = self.viewport_height / self.shown_item_count;
        if self.cell_height <= 0 {
            return;
        }
        self.selector_rect = self.selector_rect_for(config);
        self.select_previous_rect = Rect::new(
            0,
            0,
            self.viewport_width,
            self.cell_height * self.space_cell_count,
        );
        self.select_next_rect = Rect::new(
            0,
            self.selector_rect.bottom(),
            self.viewport_width,
            self.viewport_height - self.selector_rect.bottom(),
        );
    }

    /// The selector band is the middle cell. Its vertical placement uses the
    /// ceiling of the division so the band stays visually centered when the
    /// viewport height is not divisible by the shown item count.
    fn selector_rect_for(&self, config: &PickerConfig) -> Rect {
        let inset = selector_inset(config);
        let cell_ceiling = ceil_div(self.viewport_height, self.shown_item_count);
        Rect::new(
            inset,
            cell_ceiling * self.space_cell_count,
            self.viewport_width - 2 * inset,
            cell_ceiling,
        )
    }

    /// True once a usable cell height has been derived.
    pub fn is_ready(&self) -> bool {
        self.cell_height > 0
    }

    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    pub fn viewport_width(&self) -> i32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    pub fn shown_item_count(&self) -> i32 {
        self.shown_item_count
    }

    pub fn space_cell_count(&self) -> i32 {
        self.space_cell_count
    }

    pub fn selector_rect(&self) -> Rect {
        self.selector_rect
    }

    /// Tap zone above the selector band: a tap here selects the previous item.
    pub fn select_previous_rect(&self) -> Rect {
        self.select_previous_rect
    }

    /// Tap zone below the selector band: a tap here selects the next item.
    pub fn select_next_rect(&self) -> Rect {
        self.select_next_rect
    }

    /// Height of the leading space band.
    pub fn leading_space_height(&self) -> i32 {
        self.space_cell_count * self.cell_height
    }

    /// Height of the trailing space band. One cell shorter than the leading
    /// band for even shown item counts, where the selector sits below center.
    pub fn trailing_space_height(&self) -> i32 {
        let mut height = self.leading_space_height();
        if self.shown_item_count % 2 == 0 {
            height -= self.cell_height;
        }
        height
    }

    /// Total scrollable content height for `item_count` items.
    pub fn content_height(&self, item_count: usize) -> i32 {
        self.leading_space_height()
            + item_count as i32 * self.cell_height
            + self.trailing_space_height()
    }

    /// Largest valid scroll offset for `item_count` items; equals the offset
    /// that centers the last item.
    pub fn max_scroll(&self, item_count: usize) -> i32 {
        (item_count.max(1) as i32 - 1) * self.cell_height
    }

    /// Index of the content child straddling the viewport top. Child 0 is the
    /// leading space band; child `k >= 1` is item `k - 1`.
    pub fn first_visible_child(&self, scroll_y: i32) -> i32 {
        let cell_count = scroll_y / self.cell_height;
        if scroll_y > self.leading_space_height() {
            cell_count - (self.space_cell_count - 1)
        } else {
            0
        }
    }

    fn child_bottom(&self, child: i32) -> i32 {
        self.leading_space_height() + child * self.cell_height
    }

    /// On-screen clipped height of the first visible child, reduced modulo
    /// the cell height when the child is the multi-cell space band.
    pub fn visible_height_at(&self, scroll_y: i32) -> i32 {
        let child = self.first_visible_child(scroll_y);
        let visible = self.child_bottom(child) - scroll_y;
        if visible > self.cell_height {
            visible % self.cell_height
        } else {
            visible
        }
    }

    /// Corrective scroll delta for a settle. Visible heights up to half a
    /// cell (inclusive) snap back to reveal the straddling item; anything
    /// past the midpoint snaps forward to the next boundary.
    pub fn snap_delta(&self, visible_height: i32) -> i32 {
        if visible_height.abs() <= self.cell_height / 2 {
            visible_height
        } else {
            visible_height - self.cell_height
        }
    }
}

fn selector_inset(config: &PickerConfig) -> i32 {
    let line_width = config.selector_line_width as i32;
    match config.selector_style {
        // Filled rectangle: pull in by half the stroke so it stays inside.
        SelectorStyle::RectangleFilled => line_width / 2,
        // Outlined rectangle: pull the left and right sides in a little.
        SelectorStyle::Rectangle => line_width * 2,
        // Classic two-line style spans the full width, lines only.
        SelectorStyle::Classic => -(line_width / 2),
    }
}

fn ceil_div(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}
