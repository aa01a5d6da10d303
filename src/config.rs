use std::time::Duration;

/// Plain RGB color for selector and text styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Display style for the selector band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorStyle {
    /// Colored filled rectangle behind the selected item.
    RectangleFilled,
    /// Colored rectangle outline around the selected item.
    Rectangle,
    /// Two colored lines above and below the selected item.
    #[default]
    Classic,
}

/// Picker configuration, passed at construction.
///
/// Defaults match the classic appearance: 3 shown items, 16pt text, a
/// 4-pixel classic selector, a 20 ms settle check interval and a 120 ms
/// snap animation.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// How many items are visible at a time.
    pub shown_item_count: i32,
    /// Touch displacement below which a gesture counts as a tap.
    pub touch_slop: f32,
    /// Delay between settle polls after a scroll gesture ends.
    pub settle_check_interval: Duration,
    /// Duration of the corrective snap animation.
    pub snap_duration: Duration,
    pub selector_style: SelectorStyle,
    /// Stroke width of the selector. Zero disables drawing it.
    pub selector_line_width: f32,
    pub selector_color: Rgb,
    pub text_size: f32,
    /// Falls back to `text_size` when unset.
    pub selected_text_size: Option<f32>,
    pub text_color: Rgb,
    /// Falls back to `text_color` when unset.
    pub selected_text_color: Option<Rgb>,
    pub disabled_text_color: Rgb,
    pub text_bold: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            shown_item_count: 3,
            touch_slop: 8.0,
            settle_check_interval: Duration::from_millis(20),
            snap_duration: Duration::from_millis(120),
            selector_style: SelectorStyle::default(),
            selector_line_width: 4.0,
            selector_color: Rgb::new(0x64, 0x95, 0xed),
            text_size: 16.0,
            selected_text_size: None,
            text_color: Rgb::new(0xee, 0xee, 0xee),
            selected_text_color: None,
            disabled_text_color: Rgb::new(0x80, 0x80, 0x80),
            text_bold: false,
        }
    }
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown_item_count(mut self, count: i32) -> Self {
        self.shown_item_count = count;
        self
    }

    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    pub fn settle_check_interval(mut self, interval: Duration) -> Self {
        self.settle_check_interval = interval;
        self
    }

    pub fn snap_duration(mut self, duration: Duration) -> Self {
        self.snap_duration = duration;
        self
    }

    pub fn selector_style(mut self, style: SelectorStyle) -> Self {
        self.selector_style = style;
        self
    }

    pub fn selector_line_width(mut self, width: f32) -> Self {
        self.selector_line_width = width;
        self
    }

    pub fn selector_color(mut self, color: Rgb) -> Self {
        self.selector_color = color;
        self
    }

    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn selected_text_size(mut self, size: f32) -> Self {
        self.selected_text_size = Some(size);
        self
    }

    pub fn text_color(mut self, color: Rgb) -> Self {
        self.text_color = color;
        self
    }

    pub fn selected_text_color(mut self, color: Rgb) -> Self {
        self.selected_text_color = Some(color);
        self
    }

    pub fn text_bold(mut self, bold: bool) -> Self {
        self.text_bold = bold;
        self
    }

    /// Effective text size of the selected item.
    pub fn effective_selected_text_size(&self) -> f32 {
        self.selected_text_size.unwrap_or(self.text_size)
    }

    /// Effective text color of the selected item.
    pub fn effective_selected_text_color(&self) -> Rgb {
        self.selected_text_color.unwrap_or(self.text_color)
    }
}
