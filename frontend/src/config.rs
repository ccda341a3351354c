use log::Level;

use crate::viewport::ObserverOptions;

#[cfg(debug_assertions)]
pub fn get_booking_endpoint() -> &'static str {
    "http://localhost:3001/api/booking"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_booking_endpoint() -> &'static str {
    "/api/booking"  // Production URL
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const REVEAL_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.15,
    root_margin_px: 0,
};

pub const LAZY_IMAGE_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.0,
    root_margin_px: 200,
};

pub const NOTICE_DURATION_MS: u32 = 5_000;

pub const BOOK_CALL_CLICK_EVENT: &str = "book_call_click";
pub const BOOKING_SUBMITTED_EVENT: &str = "booking_submitted";
