use std::fmt;
use std::time::Instant;

use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::event::{TouchEvent, TouchPhase};
use crate::geometry::PickerGeometry;
use crate::items::{Items, PickerItem};
use crate::scroll::ScrollView;

const SELECTED_INDEX_DEFAULT: usize = 0;

/// Identifies a registered value-change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type OnValueChange = Box<dyn FnMut(i32)>;

/// The picker core: owns the selected index and the scroll target, detects
/// when a touch-driven scroll has come to rest, snaps to the nearest item
/// boundary and keeps selection consistent with both touch-driven and
/// programmatic changes.
///
/// The host feeds it [`TouchEvent`]s and pumps [`ScrollPicker::tick`] from
/// its event loop; all mutation happens on that single thread. "Waiting for
/// the scroll to stop" is a deadline (`poll_due`) rather than a timer
/// thread: each tick at or past the deadline either finishes the settle or
/// re-arms itself. A new touch-down deliberately does not clear a pending
/// deadline; a stale poll re-reads the live offset and re-arms, so it
/// self-corrects instead of leaving the picker without settle detection.
pub struct ScrollPicker {
    config: PickerConfig,
    geometry: PickerGeometry,
    items: Option<Items>,
    selected_index: usize,
    /// Canonical scroll destination, `selected_index * cell_height` at rest.
    /// Shared by the settle snap and the discrete step operations.
    scroll_target: i32,
    start_y: Option<i32>,
    last_scroll_y: i32,
    poll_due: Option<Instant>,
    /// Suppresses listener notification while a change originates from a
    /// programmatic `set_value` rather than user touch.
    external_change: bool,
    /// A value set before the item list was configured, replayed by
    /// `set_items`.
    stored_value: Option<i32>,
    enabled: bool,
    listeners: Vec<(ListenerId, OnValueChange)>,
    next_listener_id: u64,
}

impl ScrollPicker {
    pub fn new(config: PickerConfig) -> Self {
        let geometry = PickerGeometry::new(config.shown_item_count);
        Self {
            config,
            geometry,
            items: None,
            selected_index: SELECTED_INDEX_DEFAULT,
            scroll_target: 0,
            start_y: None,
            last_scroll_y: 0,
            poll_due: None,
            external_change: false,
            stored_value: None,
            enabled: true,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// The selected item's value: the item itself for integer lists, the
    /// selected index for label lists. Zero before a list is configured.
    pub fn value(&self) -> i32 {
        match &self.items {
            Some(items) => items.value_for_index(self.selected_index),
            None => 0,
        }
    }

    /// Select an item by value. Does not notify listeners.
    ///
    /// Called before `set_items`, the value is stored and replayed once the
    /// list is configured. A value that identifies no item is an error.
    pub fn set_value(&mut self, value: i32, view: &mut dyn ScrollView) -> Result<(), PickerError> {
        let Some(items) = &self.items else {
            self.stored_value = Some(value);
            return Ok(());
        };
        if value == items.value_for_index(self.selected_index) {
            return Ok(());
        }
        let index = items.index_of_value(value)?;
        self.external_change = true;
        self.select_item(index);
        if self.geometry.is_ready() {
            view.animate_to(self.scroll_target, self.config.snap_duration);
        }
        self.external_change = false;
        Ok(())
    }

    /// Replace the displayed list. The kind (integer or label) is inferred
    /// from the first element. Selection resets to the first item, or to a
    /// previously stored value, without notifying listeners.
    pub fn set_items(
        &mut self,
        items: Vec<PickerItem>,
        view: &mut dyn ScrollView,
    ) -> Result<(), PickerError> {
        self.items = Some(Items::from_items(items)?);
        self.external_change = true;
        self.select_new_item(SELECTED_INDEX_DEFAULT);
        self.external_change = false;
        self.resync_view(view);
        if let Some(value) = self.stored_value.take() {
            self.set_value(value, view)?;
        }
        Ok(())
    }

    /// Reconfigure how many items are visible at a time. Non-positive counts
    /// are ignored.
    pub fn set_shown_item_count(&mut self, count: i32, view: &mut dyn ScrollView) {
        if count <= 0 {
            return;
        }
        self.geometry.set_shown_item_count(count);
        self.geometry.recompute(&self.config);
        self.resync_view(view);
    }

    /// Report a viewport size change. Non-positive sizes occur transiently
    /// during layout and are ignored.
    pub fn set_viewport(&mut self, width: i32, height: i32, view: &mut dyn ScrollView) {
        if width <= 0 || height <= 0 {
            return;
        }
        self.geometry.set_viewport(width, height);
        self.geometry.recompute(&self.config);
        self.resync_view(view);
    }

    /// Select the next item unless the currently selected is the last one.
    pub fn select_next_item(&mut self, view: &mut dyn ScrollView) {
        let Some(items) = &self.items else {
            return;
        };
        if self.selected_index < items.last_index() && self.geometry.is_ready() {
            self.scroll_y_by(self.geometry.cell_height(), view);
        }
    }

    /// Select the previous item unless the currently selected is the first one.
    pub fn select_previous_item(&mut self, view: &mut dyn ScrollView) {
        if self.selected_index > 0 && self.geometry.is_ready() {
            self.scroll_y_by(-self.geometry.cell_height(), view);
        }
    }

    /// Register a listener for user-driven value changes. Listeners run in
    /// registration order and are never invoked for programmatic
    /// `set_value` calls.
    pub fn add_on_value_changed(&mut self, listener: impl FnMut(i32) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener. Removing an id twice is
    /// harmless.
    pub fn remove_on_value_changed(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Whether the picker processes touch input. A disabled picker still
    /// accepts programmatic changes.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Display text of the selected item, once a list is configured.
    pub fn selected_item_text(&self) -> Option<String> {
        self.items
            .as_ref()
            .map(|items| items.display(self.selected_index))
    }

    pub fn items(&self) -> Option<&Items> {
        self.items.as_ref()
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn geometry(&self) -> &PickerGeometry {
        &self.geometry
    }

    /// True while a settle poll is pending. Hosts can use this to pick a
    /// short event-loop timeout.
    pub fn is_settling(&self) -> bool {
        self.poll_due.is_some()
    }

    /// Feed a raw touch event. A release within the slop threshold is a tap
    /// and is routed to the previous/next hit zones; a larger displacement
    /// starts settle polling.
    pub fn handle_touch(&mut self, event: TouchEvent, now: Instant, view: &mut dyn ScrollView) {
        if !self.enabled {
            return;
        }
        match event.phase {
            TouchPhase::Down => self.start_y = Some(event.y),
            TouchPhase::Move => {}
            TouchPhase::Up | TouchPhase::Cancel => {
                let Some(start_y) = self.start_y.take() else {
                    return;
                };
                let displacement = (event.y - start_y).abs() as f32;
                if displacement < self.config.touch_slop {
                    self.handle_tap(event.x, event.y, view);
                } else {
                    self.last_scroll_y = view.scroll_y();
                    self.poll_due = Some(now + self.config.settle_check_interval);
                }
            }
        }
    }

    /// Run the settle poll if it is due. If the offset has not moved since
    /// the previous reading the scroll has stopped: momentum is halted and
    /// the nearest item boundary is snapped to. Otherwise the new offset is
    /// recorded and the poll re-armed.
    pub fn tick(&mut self, now: Instant, view: &mut dyn ScrollView) {
        let Some(due) = self.poll_due else {
            return;
        };
        if now < due {
            return;
        }
        let position = view.scroll_y();
        if position == self.last_scroll_y {
            self.poll_due = None;
            view.stop();
            self.scroll_target = self.last_scroll_y;
            log::debug!("scroll settled at {}", self.last_scroll_y);
            self.select_nearest_item(view);
        } else {
            self.last_scroll_y = position;
            self.poll_due = Some(now + self.config.settle_check_interval);
        }
    }

    fn handle_tap(&mut self, x: i32, y: i32, view: &mut dyn ScrollView) {
        if self.geometry.select_previous_rect().contains(x, y) {
            self.select_previous_item(view);
        }
        if self.geometry.select_next_rect().contains(x, y) {
            self.select_next_item(view);
        }
    }

    /// Snap to the nearest valid item boundary after a settle.
    fn select_nearest_item(&mut self, view: &mut dyn ScrollView) {
        if !self.geometry.is_ready() || self.items.is_none() {
            return;
        }
        let visible_height = self.geometry.visible_height_at(self.scroll_target);
        let delta = self.geometry.snap_delta(visible_height);
        log::debug!("snap correction: visible {visible_height}, delta {delta}");
        self.scroll_y_by(delta, view);
    }

    /// The shared "scroll by" primitive behind both the settle snap and the
    /// discrete previous/next steps: advances the scroll target, re-derives
    /// the selected index from it, then issues one animated correction.
    fn scroll_y_by(&mut self, delta: i32, view: &mut dyn ScrollView) {
        self.scroll_target += delta;
        let last_index = self.items.as_ref().map_or(0, Items::last_index) as i32;
        let index = (self.scroll_target / self.geometry.cell_height()).clamp(0, last_index);
        self.select_item(index as usize);
        view.animate_to(self.scroll_target, self.config.snap_duration);
    }

    fn select_item(&mut self, new_index: usize) {
        if self.selected_index != new_index {
            self.select_new_item(new_index);
        }
    }

    /// Selection update: records the index, notifies listeners unless the
    /// change is external, and resyncs the scroll target canonically so
    /// incremental snap deltas cannot accumulate drift.
    fn select_new_item(&mut self, new_index: usize) {
        self.selected_index = new_index;
        let value = self
            .items
            .as_ref()
            .map(|items| items.value_for_index(new_index));
        if let (false, Some(value)) = (self.external_change, value) {
            // Listeners are moved out for the calls; they cannot re-enter the
            // picker while it is mutably borrowed.
            let mut listeners = std::mem::take(&mut self.listeners);
            for (_, listener) in &mut listeners {
                listener(value);
            }
            self.listeners = listeners;
        }
        self.scroll_target = new_index as i32 * self.geometry.cell_height();
    }

    /// Reposition the view at the selected item without animation, after a
    /// list swap or geometry change.
    fn resync_view(&mut self, view: &mut dyn ScrollView) {
        if self.geometry.is_ready() && self.items.is_some() {
            self.scroll_target = self.selected_index as i32 * self.geometry.cell_height();
            view.scroll_to(self.scroll_target);
        }
    }
}

impl fmt::Debug for ScrollPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollPicker")
            .field("selected_index", &self.selected_index)
            .field("scroll_target", &self.scroll_target)
            .field("poll_due", &self.poll_due)
            .field("enabled", &self.enabled)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
