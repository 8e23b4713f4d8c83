/// Value of the `event` announce parameter.
pub mod announce_event;

/// Internal failures of the tracker core.
pub mod tracker_error;
