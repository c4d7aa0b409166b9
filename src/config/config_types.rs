// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub cell_size: f32,
    pub border_size: f32,
    pub hand_thickness: f32,
    pub background_color: String,
    pub border_color: String,
    pub hand_color: String,
    pub digit_gap: f32,
    pub group_gap: f32,
}

#[derive(Debug, Deserialize)]
pub struct TimingConfig {
    pub tick_interval: f32, // seconds between wall-clock reads
}

#[derive(Debug, Deserialize)]
pub struct AnimationConfig {
    pub transition_duration: f32, // seconds per hand transition
    pub resting_angle: f32,       // where hands park before the first tick
}
