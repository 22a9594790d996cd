// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotator state machine.
//!
//! The [`Annotator`] owns the canvas together with every piece of mutable
//! input state: the drag in progress, the three color channels and the
//! shape mode. The UI layer translates toolkit input into calls on these
//! handlers; nothing here knows about windows or textures.

use super::canvas::Canvas;
use super::shape::{Point, Shape, ShapeMode};

/// One of the three trackbar channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    pub fn label(self) -> &'static str {
        match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
        }
    }
}

/// Trackbar values. Stored and reported, not used for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorChannels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorChannels {
    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::R => self.r,
            Channel::G => self.g,
            Channel::B => self.b,
        }
    }

    fn set(&mut self, channel: Channel, value: u8) {
        match channel {
            Channel::R => self.r = value,
            Channel::G => self.g = value,
            Channel::B => self.b = value,
        }
    }
}

/// Drag tracking between button-down and button-up.
///
/// The anchor exists exactly while the button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    anchor: Option<Point>,
}

impl PointerState {
    pub fn pressed(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }
}

/// Keys the annotator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub toggle: egui::Key,
    pub quit: egui::Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle: egui::Key::M,
            quit: egui::Key::Escape,
        }
    }
}

/// What the render loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Canvas plus all input-driven state.
pub struct Annotator {
    canvas: Canvas,
    pointer: PointerState,
    channels: ColorChannels,
    mode: ShapeMode,
    foreground: u8,
    keys: KeyBindings,
    last_shape: Option<Shape>,
}

impl Annotator {
    /// Create an annotator around a freshly created canvas.
    pub fn new(canvas: Canvas, foreground: u8, keys: KeyBindings) -> Self {
        Self {
            canvas,
            pointer: PointerState::default(),
            channels: ColorChannels::default(),
            mode: ShapeMode::default(),
            foreground,
            keys,
            last_shape: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn channels(&self) -> ColorChannels {
        self.channels
    }

    pub fn mode(&self) -> ShapeMode {
        self.mode
    }

    pub fn keys(&self) -> KeyBindings {
        self.keys
    }

    /// The shape drawn by the most recent pressed move, if any.
    pub fn last_shape(&self) -> Option<Shape> {
        self.last_shape
    }

    /// Start a drag at `point`.
    pub fn on_pointer_down(&mut self, point: Point) {
        log::info!("Left button down at {}", point);
        self.pointer.anchor = Some(point);
    }

    /// End the current drag. The last drawn shape stays on the canvas.
    pub fn on_pointer_up(&mut self, point: Point) {
        log::info!("Left button up at {}", point);
        self.pointer.anchor = None;
    }

    /// Redraw the live shape if a drag is in progress.
    pub fn on_pointer_move(&mut self, point: Point) {
        let Some(anchor) = self.pointer.anchor else {
            return;
        };

        let shape = Shape::from_drag(self.mode, anchor, point);
        log::debug!("Mouse move at {}, drawing {:?}", point, shape);

        self.canvas.clear();
        self.canvas.draw(&shape, self.foreground);
        self.last_shape = Some(shape);
    }

    /// Record a trackbar change.
    pub fn on_channel_change(&mut self, channel: Channel, value: u8) {
        self.channels.set(channel, value);
        log::info!("{}:{}", channel.label(), value);
    }

    /// React to a key press: toggle the shape mode or request quit.
    pub fn on_key_press(&mut self, key: egui::Key) -> KeyOutcome {
        if key == self.keys.quit {
            log::info!("Quit requested");
            KeyOutcome::Quit
        } else if key == self.keys.toggle {
            self.mode = self.mode.toggled();
            log::info!("Shape mode: {:?}", self.mode);
            KeyOutcome::Continue
        } else {
            KeyOutcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: u8 = 255;

    fn annotator() -> Annotator {
        Annotator::new(Canvas::new(512, 512, 0), FG, KeyBindings::default())
    }

    #[test]
    fn test_moves_without_press_leave_canvas_blank() {
        let mut annotator = annotator();
        for x in (0..512).step_by(37) {
            for y in (0..512).step_by(41) {
                annotator.on_pointer_move(Point::new(x, y));
            }
        }
        assert!(annotator.canvas().is_blank());
        assert_eq!(annotator.last_shape(), None);
    }

    #[test]
    fn test_press_and_release_do_not_draw() {
        let mut annotator = annotator();
        annotator.on_pointer_down(Point::new(10, 10));
        assert!(annotator.pointer().pressed());
        assert_eq!(annotator.pointer().anchor(), Some(Point::new(10, 10)));
        assert!(annotator.canvas().is_blank());

        annotator.on_pointer_up(Point::new(50, 50));
        assert!(!annotator.pointer().pressed());
        assert_eq!(annotator.pointer().anchor(), None);
        assert!(annotator.canvas().is_blank());
    }

    #[test]
    fn test_rectangle_drag() {
        let mut annotator = annotator();
        annotator.on_pointer_down(Point::new(10, 10));
        annotator.on_pointer_move(Point::new(30, 10));

        assert_eq!(
            annotator.last_shape(),
            Some(Shape::Rectangle {
                corner: Point::new(10, 10),
                opposite: Point::new(30, 10),
            })
        );
        assert_eq!(annotator.canvas().pixel(10, 10), Some(FG));
        assert_eq!(annotator.canvas().pixel(30, 10), Some(FG));
    }

    #[test]
    fn test_circle_drag() {
        let mut annotator = annotator();
        assert_eq!(annotator.on_key_press(egui::Key::M), KeyOutcome::Continue);
        assert_eq!(annotator.mode(), ShapeMode::Circle);

        annotator.on_pointer_down(Point::new(0, 0));
        annotator.on_pointer_move(Point::new(10, 0));

        assert_eq!(
            annotator.last_shape(),
            Some(Shape::Circle {
                center: Point::new(5, 0),
                radius: 5,
            })
        );
        assert_eq!(annotator.canvas().pixel(10, 0), Some(FG));
        assert_eq!(annotator.canvas().pixel(0, 0), Some(FG));
        assert_eq!(annotator.canvas().pixel(5, 0), Some(0));
    }

    #[test]
    fn test_each_move_replaces_previous_shape() {
        let mut annotator = annotator();
        annotator.on_pointer_down(Point::new(100, 100));
        annotator.on_pointer_move(Point::new(300, 300));
        assert_eq!(annotator.canvas().pixel(300, 300), Some(FG));

        annotator.on_pointer_move(Point::new(150, 150));
        assert_eq!(annotator.canvas().pixel(300, 300), Some(0));
        assert_eq!(annotator.canvas().pixel(150, 150), Some(FG));
    }

    #[test]
    fn test_shape_survives_release_and_later_idle_moves() {
        let mut annotator = annotator();
        annotator.on_pointer_down(Point::new(20, 20));
        annotator.on_pointer_move(Point::new(40, 40));
        annotator.on_pointer_up(Point::new(40, 40));
        annotator.on_pointer_move(Point::new(200, 200));

        assert_eq!(annotator.canvas().pixel(40, 40), Some(FG));
        assert_eq!(annotator.canvas().pixel(200, 200), Some(0));
    }

    #[test]
    fn test_mode_persists_across_drags() {
        let mut annotator = annotator();
        annotator.on_key_press(egui::Key::M);
        annotator.on_pointer_down(Point::new(0, 0));
        annotator.on_pointer_up(Point::new(0, 0));
        annotator.on_pointer_down(Point::new(0, 0));
        annotator.on_pointer_move(Point::new(20, 0));

        assert!(matches!(annotator.last_shape(), Some(Shape::Circle { .. })));
    }

    #[test]
    fn test_even_toggles_restore_mode() {
        let mut annotator = annotator();
        let original = annotator.mode();
        for _ in 0..6 {
            annotator.on_key_press(egui::Key::M);
        }
        assert_eq!(annotator.mode(), original);
    }

    #[test]
    fn test_channel_change_does_not_affect_drawing() {
        let mut annotator = annotator();
        annotator.on_channel_change(Channel::R, 200);
        annotator.on_channel_change(Channel::B, 17);

        assert_eq!(annotator.channels(), ColorChannels { r: 200, g: 0, b: 17 });
        assert_eq!(annotator.channels().get(Channel::R), 200);

        annotator.on_pointer_down(Point::new(10, 10));
        annotator.on_pointer_move(Point::new(30, 30));
        assert_eq!(annotator.canvas().pixel(10, 10), Some(FG));
    }

    #[test]
    fn test_quit_and_unbound_keys() {
        let mut annotator = annotator();
        assert_eq!(annotator.on_key_press(egui::Key::Escape), KeyOutcome::Quit);
        assert_eq!(annotator.on_key_press(egui::Key::A), KeyOutcome::Continue);
        assert_eq!(annotator.mode(), ShapeMode::Rectangle);
    }

    #[test]
    fn test_custom_key_bindings() {
        let keys = KeyBindings {
            toggle: egui::Key::Space,
            quit: egui::Key::Q,
        };
        let mut annotator = Annotator::new(Canvas::new(8, 8, 0), FG, keys);

        assert_eq!(annotator.on_key_press(egui::Key::M), KeyOutcome::Continue);
        assert_eq!(annotator.mode(), ShapeMode::Rectangle);
        assert_eq!(annotator.on_key_press(egui::Key::Space), KeyOutcome::Continue);
        assert_eq!(annotator.mode(), ShapeMode::Circle);
        assert_eq!(annotator.on_key_press(egui::Key::Escape), KeyOutcome::Continue);
        assert_eq!(annotator.on_key_press(egui::Key::Q), KeyOutcome::Quit);
    }
}
