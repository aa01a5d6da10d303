pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod items;
pub mod picker;
pub mod scroll;
pub mod text;

pub use config::{PickerConfig, Rgb, SelectorStyle};
pub use error::PickerError;
pub use event::{TouchEvent, TouchPhase};
pub use geometry::{PickerGeometry, Rect};
pub use items::{Items, PickerItem};
pub use picker::{ListenerId, ScrollPicker};
pub use scroll::{LinearScroll, ScrollView};
