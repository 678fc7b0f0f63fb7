pub const SITE_CONTENT: &str = include_str!("../content/site.json");

pub const TESTIMONIAL_INTERVAL_MS: u32 = 5000;
pub const TESTIMONIAL_FADE_MS: u32 = 200;

pub const FRAMEWORK_REVEAL_THRESHOLD: f64 = 0.2;
pub const FRAMEWORK_REVEAL_MARGIN_PX: i32 = -50;
pub const SERVICES_REVEAL_THRESHOLD: f64 = 0.3;

pub const COUNT_UP_DURATION_MS: u32 = 2000;
pub const COUNT_UP_FRAMES: u32 = 60;

pub const CONTACT_RESET_MS: u32 = 3000;

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug  // Controller transitions are worth seeing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
