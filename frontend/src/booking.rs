use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;
use web_sys::FormData;

use crate::config;

pub const SUCCESS_MESSAGE: &str = "Thanks! Your call is booked. We'll be in touch shortly.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("booking endpoint answered with status {0}")]
    Rejected(u16),
    #[error("booking request failed: {0}")]
    Transport(String),
}

impl BookingError {
    pub fn user_message(&self) -> &'static str {
        match self {
            BookingError::Rejected(_) => "Sorry, we couldn't book your call. Please try again later.",
            BookingError::Transport(_) => "Network error. Please check your connection and try again.",
        }
    }
}

pub fn check_status(status: u16) -> Result<(), BookingError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(BookingError::Rejected(status))
    }
}

pub async fn submit(form: FormData) -> Result<(), BookingError> {
    let response = Request::post(config::get_booking_endpoint())
        .header("Accept", "application/json")
        .body(form)
        .send()
        .await
        .map_err(|e| BookingError::Transport(e.to_string()))?;

    match check_status(response.status()) {
        Ok(()) => {
            info!("Booking submitted");
            Ok(())
        }
        Err(e) => {
            warn!("{}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_hundreds_are_success() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
    }

    #[test]
    fn other_statuses_are_rejections() {
        for status in [199, 301, 400, 422, 500] {
            assert_eq!(check_status(status), Err(BookingError::Rejected(status)));
        }
    }

    #[test]
    fn each_outcome_has_its_own_message() {
        let rejected = BookingError::Rejected(500).user_message();
        let transport = BookingError::Transport("offline".into()).user_message();
        assert_ne!(rejected, transport);
        assert_ne!(rejected, SUCCESS_MESSAGE);
        assert_ne!(transport, SUCCESS_MESSAGE);
    }

    #[test]
    fn error_display_keeps_detail() {
        assert_eq!(
            BookingError::Transport("connection refused".into()).to_string(),
            "booking request failed: connection refused"
        );
    }
}
