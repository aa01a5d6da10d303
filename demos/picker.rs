use std::fs::File;
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode};
use crossterm::style::Print;
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use simplelog::{Config, LevelFilter, WriteLogger};

use scroll_picker::{
    text, LinearScroll, PickerConfig, PickerItem, ScrollPicker, ScrollView, SelectorStyle,
    TouchEvent, TouchPhase,
};

const VIEWPORT_WIDTH: i32 = 24;
const VIEWPORT_HEIGHT: i32 = 15;
const ITEM_COUNT: usize = 21;

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("picker.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = PickerConfig::new()
        .shown_item_count(5)
        .selector_style(SelectorStyle::Classic);
    let mut picker = ScrollPicker::new(config);
    let mut scroll = LinearScroll::new(0);

    picker
        .set_items((0..ITEM_COUNT as i32).map(PickerItem::from).collect(), &mut scroll)
        .expect("non-empty item list");
    picker.set_viewport(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, &mut scroll);
    scroll.set_max_offset(picker.geometry().max_scroll(ITEM_COUNT));
    picker.add_on_value_changed(|value| log::info!("value changed: {value}"));

    terminal::enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
    let result = run(&mut picker, &mut scroll);
    execute!(stdout(), Show, DisableMouseCapture, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(picker: &mut ScrollPicker, scroll: &mut LinearScroll) -> std::io::Result<()> {
    let mut drag_last_y: Option<i32> = None;

    loop {
        let now = Instant::now();
        scroll.tick(now);
        picker.tick(now, scroll);
        draw(picker, scroll)?;

        // Short timeout while settling or animating, relaxed otherwise.
        let timeout = if picker.is_settling() || scroll.is_animating() {
            Duration::from_millis(10)
        } else {
            Duration::from_millis(250)
        };
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => picker.select_previous_item(scroll),
                KeyCode::Down => picker.select_next_item(scroll),
                _ => {}
            },
            Event::Mouse(mouse) => {
                if let Some(touch) = TouchEvent::from_mouse(&mouse) {
                    // Dragging moves the surface directly, standing in for
                    // the platform scroller.
                    match touch.phase {
                        TouchPhase::Down => drag_last_y = Some(touch.y),
                        TouchPhase::Move => {
                            if let Some(last_y) = drag_last_y {
                                scroll.scroll_to(scroll.scroll_y() + (last_y - touch.y));
                                drag_last_y = Some(touch.y);
                            }
                        }
                        TouchPhase::Up | TouchPhase::Cancel => drag_last_y = None,
                    }
                    picker.handle_touch(touch, Instant::now(), scroll);
                }
            }
            _ => {}
        }
    }
}

fn draw(picker: &ScrollPicker, scroll: &LinearScroll) -> std::io::Result<()> {
    let geometry = picker.geometry();
    let cell = geometry.cell_height();
    let space = geometry.leading_space_height();
    let scroll_y = scroll.scroll_y();
    let width = VIEWPORT_WIDTH as usize;
    let selector = geometry.selector_rect();

    let mut out = stdout();
    queue!(out, Clear(ClearType::All))?;

    for row in 0..VIEWPORT_HEIGHT {
        let content_y = scroll_y + row;
        let line = if row == selector.top() || row == selector.bottom() - 1 {
            "─".repeat(width)
        } else if content_y >= space && (content_y - space) % cell == cell / 2 {
            let index = ((content_y - space) / cell) as usize;
            match picker.items() {
                Some(items) if index < items.len() => text::center(&items.display(index), width),
                _ => String::new(),
            }
        } else {
            String::new()
        };
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }

    let status = format!(
        "value: {}  (drag, tap above/below, ↑/↓, q quits)",
        picker.value()
    );
    queue!(out, MoveTo(0, VIEWPORT_HEIGHT as u16 + 1), Print(status))?;
    out.flush()
}
