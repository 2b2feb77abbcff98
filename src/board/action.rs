// Logical buttons and per-cycle input sampling.
//
// Screens never see physical buttons.  The mapping layer (profile,
// ladder decoding, debounce) feeds ButtonEvents into an InputFrame,
// and each logic cycle reads the frame through InputSource: edge
// queries for "was pressed" / "was released" plus how long the most
// recent press has been held.

use embassy_time::{Duration, Instant};

/// Logical buttons seen by screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Confirm,
    Back,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Confirm,
        Button::Back,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Button::Confirm => "Confirm",
            Button::Back => "Back",
            Button::Up => "Up",
            Button::Down => "Down",
            Button::Left => "Left",
            Button::Right => "Right",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Debounced edge on a logical button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Press(Button),
    Release(Button),
}

impl ButtonEvent {
    pub fn button(self) -> Button {
        match self {
            Self::Press(b) | Self::Release(b) => b,
        }
    }
}

/// What a screen may ask of the input layer once per logic cycle.
pub trait InputSource {
    fn was_pressed(&self, button: Button) -> bool;
    fn was_released(&self, button: Button) -> bool;
    /// Duration of the most recent press; measured up to the release
    /// once the button is let go.
    fn held_time(&self) -> Duration;
}

/// Edges collected during one logic cycle.
#[derive(Debug, Clone, Copy)]
pub struct InputFrame {
    pressed: u8,
    released: u8,
    down: Option<(Button, Instant)>,
    held: Duration,
}

impl Default for InputFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl InputFrame {
    pub const fn new() -> Self {
        Self {
            pressed: 0,
            released: 0,
            down: None,
            held: Duration::from_ticks(0),
        }
    }

    /// Drop last cycle's edges; a button still held keeps its press time.
    pub fn begin_cycle(&mut self) {
        self.pressed = 0;
        self.released = 0;
    }

    pub fn apply(&mut self, event: ButtonEvent, at: Instant) {
        match event {
            ButtonEvent::Press(b) => {
                self.pressed |= b.bit();
                self.down = Some((b, at));
                self.held = Duration::from_ticks(0);
            }
            ButtonEvent::Release(b) => {
                self.released |= b.bit();
                if let Some((held_btn, since)) = self.down
                    && held_btn == b
                {
                    self.held = at.saturating_duration_since(since);
                    self.down = None;
                }
            }
        }
    }

    /// Refresh the running hold time of a button that is still down.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, since)) = self.down {
            self.held = now.saturating_duration_since(since);
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pressed == 0 && self.released == 0
    }
}

impl InputSource for InputFrame {
    fn was_pressed(&self, button: Button) -> bool {
        self.pressed & button.bit() != 0
    }

    fn was_released(&self, button: Button) -> bool {
        self.released & button.bit() != 0
    }

    fn held_time(&self) -> Duration {
        self.held
    }
}
