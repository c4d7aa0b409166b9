// src/controllers/clock_controller.rs
//
// The ClockController is the main updating entity in the visualisation.
// It reads the wall clock on a fixed tick, feeds digit patterns into the
// six displays, and advances every in-flight hand animation each frame.

use nannou::prelude::*;

use crate::config::Config;
use crate::models::{TimeDigits, DIGIT_COLS, DIGIT_ROWS};
use crate::views::DigitDisplay;

// hour tens/ones, minute tens/ones, second tens/ones
pub const DISPLAY_COUNT: usize = 6;

pub struct ClockController {
    displays: Vec<DigitDisplay>,
    tick_timer: f32,
    tick_interval: f32,
    transition_duration: f32,
    pub always_animate: bool,
    pub debug: bool,
}

impl ClockController {
    pub fn new(config: &Config) -> Self {
        Self {
            displays: Self::build_displays(config),
            tick_timer: 0.0,
            tick_interval: config.timing.tick_interval,
            transition_duration: config.animation.transition_duration,
            always_animate: false,
            debug: false,
        }
    }

    // Lays the six digit blocks out in a centred row, with a wider gap
    // between the hour, minute and second pairs.
    fn build_displays(config: &Config) -> Vec<DigitDisplay> {
        let style = &config.style;
        let digit_width = DIGIT_COLS as f32 * style.cell_size;
        let digit_height = DIGIT_ROWS as f32 * style.cell_size;
        let total_width =
            DISPLAY_COUNT as f32 * digit_width + 3.0 * style.digit_gap + 2.0 * style.group_gap;

        let top = digit_height / 2.0;
        let mut x = -total_width / 2.0;
        let mut displays = Vec::with_capacity(DISPLAY_COUNT);
        for i in 0..DISPLAY_COUNT {
            if i > 0 {
                x += if i % 2 == 0 {
                    style.group_gap
                } else {
                    style.digit_gap
                };
            }
            displays.push(DigitDisplay::new(
                pt2(x, top),
                config.animation.resting_angle,
            ));
            x += digit_width;
        }
        displays
    }

    /// Per-frame entry point: maybe tick, then advance all animations.
    pub fn update(&mut self, time: f32, dt: f32) {
        if self.should_tick(dt) {
            self.tick(time);
        }
        for display in &mut self.displays {
            display.update(time);
        }
    }

    /// Applies the current wall-clock time immediately.
    pub fn tick(&mut self, time: f32) {
        let digits = TimeDigits::now();
        if self.debug {
            println!("{}", digits);
        }
        self.apply(digits, time);
    }

    /// Pushes a set of digit values into the displays, one per display in
    /// order. Unchanged cells are skipped unless `always_animate` is on.
    pub fn apply(&mut self, digits: TimeDigits, time: f32) {
        for (display, digit) in self.displays.iter_mut().zip(digits.iter()) {
            display.set_digit(digit, self.always_animate, time, self.transition_duration);
        }
    }

    fn should_tick(&mut self, dt: f32) -> bool {
        self.tick_timer += dt;
        if self.tick_timer >= self.tick_interval {
            self.tick_timer -= self.tick_interval;
            true
        } else {
            false
        }
    }

    pub fn displays(&self) -> &[DigitDisplay] {
        &self.displays
    }

    pub fn is_animating(&self) -> bool {
        self.displays.iter().any(|display| display.is_animating())
    }
}
