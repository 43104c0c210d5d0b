//! Animation lifecycle, input dispatch and frame pacing.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    animation::{AnimationId, AnimationSlot},
    control::StripControl,
    input::{InputEvent, InputReceiver},
};

/// Minimum interval between draw/present cycles (~60 fps)
///
/// Logic updates run every loop iteration regardless; only the visual
/// refresh and the bus write are paced by this gate, bounding hardware
/// traffic while keeping blend math responsive.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Configuration for the animation manager
#[derive(Debug, Clone, Copy)]
pub struct ManagerConfig {
    /// Brightness applied once startup completes
    pub brightness: u8,
    /// Upper bound for any later brightness request
    pub brightness_cap: u8,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            brightness: 100,
            brightness_cap: 255,
        }
    }
}

/// Owns the strip and exactly one active animation
///
/// Construction installs the blank [`AnimationId::Initial`] animation so
/// the buffer holds black before anything is presented;
/// [`LedManager::begin`] pushes that black frame out, raises brightness and
/// switches to the first real animation. Mirrors the strip's power-up
/// sequence that avoids a visible flash.
pub struct LedManager<'a, const N: usize, const INPUT_QUEUE: usize> {
    strip: StripControl<N>,
    animation: AnimationSlot,
    current: AnimationId,
    brightness: u8,
    input: InputReceiver<'a, INPUT_QUEUE>,
    last_draw: Option<Instant>,
}

impl<'a, const N: usize, const INPUT_QUEUE: usize> LedManager<'a, N, INPUT_QUEUE> {
    pub fn new(input: InputReceiver<'a, INPUT_QUEUE>, config: &ManagerConfig) -> Self {
        let mut manager = Self {
            strip: StripControl::new(config.brightness_cap),
            animation: AnimationSlot::default(),
            current: AnimationId::Initial,
            brightness: config.brightness,
            input,
            last_draw: None,
        };
        manager.animation.begin(&mut manager.strip);
        manager
    }

    /// Complete startup: present the blank frame, then hand the strip to
    /// the first real animation
    pub fn begin<O: OutputDriver>(&mut self, output: &mut O) {
        self.strip.set_brightness(0);
        self.strip.present(output);

        self.strip.set_brightness(self.brightness);
        self.select(AnimationId::Solid);
    }

    /// Access the frame buffer control (request-layer seam)
    pub const fn control(&self) -> &StripControl<N> {
        &self.strip
    }

    /// Mutable access to the frame buffer control (request-layer seam)
    pub const fn control_mut(&mut self) -> &mut StripControl<N> {
        &mut self.strip
    }

    /// Id of the active animation
    pub const fn current_animation(&self) -> AnimationId {
        self.current
    }

    pub fn animation_name(&self) -> &'static str {
        self.animation.name()
    }

    /// Swap to the given animation
    ///
    /// The outgoing instance is ended strictly before the incoming one
    /// begins, and dropped only once the incoming one is fully installed;
    /// the strip never has two animations attached at once.
    pub fn select(&mut self, id: AnimationId) {
        let mut next = id.build();
        #[cfg(feature = "esp32-log")]
        println!("[LedManager.select] {}", next.name());

        self.animation.end();
        next.begin(&mut self.strip);
        self.animation = next;
        self.current = id;
    }

    /// Swap by raw selector
    ///
    /// An unknown selector keeps the current animation active; nothing
    /// fails.
    pub fn select_raw(&mut self, raw: u8) {
        match AnimationId::from_raw(raw) {
            Some(id) => self.select(id),
            None => {
                #[cfg(feature = "esp32-log")]
                println!("[LedManager.select_raw] unknown selector {}", raw);
            }
        }
    }

    /// Forward a short press to the active animation
    pub fn on_click(&mut self) {
        self.animation.click();
    }

    /// Advance the animation rotation (long press)
    pub fn on_long_click(&mut self) {
        self.next_effect();
    }

    /// Swap to the next animation in the rotation
    pub fn next_effect(&mut self) {
        self.select(self.current.next());
    }

    /// Per-iteration update and paced draw/present
    ///
    /// The active animation's `tick` runs unconditionally at the loop
    /// rate. `draw` and the bus write happen only once [`FRAME_INTERVAL`]
    /// has elapsed since the previous draw, measured on the injected
    /// monotonic clock.
    pub fn tick<O: OutputDriver>(&mut self, now: Instant, output: &mut O) {
        self.animation.tick(now, &mut self.strip);

        let due = match self.last_draw {
            None => true,
            Some(last) => now.duration_since(last) >= FRAME_INTERVAL,
        };
        if due {
            self.animation.draw(now, &mut self.strip);
            self.strip.present(output);
            self.last_draw = Some(now);
        }
    }

    /// One full control-loop iteration
    ///
    /// Drains pending input events first, so the frame rendered by this
    /// call reflects a consistent input snapshot.
    pub fn service<O: OutputDriver>(&mut self, now: Instant, output: &mut O) {
        while let Ok(event) = self.input.try_receive() {
            match event {
                InputEvent::Click => self.on_click(),
                InputEvent::LongClick => self.on_long_click(),
            }
        }
        self.tick(now, output);
    }
}
