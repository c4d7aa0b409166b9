// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use clockvis::{
    config::Config,
    controllers::ClockController,
    draw::{draw_display, CellStyle},
};

struct Model {
    // Core components:
    controller: ClockController,

    // Style
    style: CellStyle,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().expect("Failed to load config file");

    app.new_window()
        .title(config.window.title.clone())
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let style = CellStyle::from_config(&config.style).expect("Invalid color in config file");
    let controller = ClockController::new(&config);

    Model {
        controller,
        style,
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // re-apply the current time without waiting for the next tick
        Key::Space => model.controller.tick(app.time),
        Key::A => {
            model.controller.always_animate = !model.controller.always_animate;
            println!("always_animate: {}", model.controller.always_animate);
        }
        Key::D => {
            model.debug_flag = !model.debug_flag;
            model.controller.debug = model.debug_flag;
        }
        Key::Q => app.quit(),
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    model.controller.update(app.time, duration.as_secs_f32());
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    for display in model.controller.displays() {
        draw_display(&draw, display, &model.style);
    }

    // Visualize FPS (Optional)
    if model.debug_flag {
        let win = app.window_rect();
        draw.text(&format!("FPS: {:.1}", model.fps))
            .x_y(win.left() + 60.0, win.bottom() + 20.0)
            .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
