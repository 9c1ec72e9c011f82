use crate::config::SECONDS_PER_MINUTE;

/// Left-pad a clock field with a single `"0"` when it is a single digit.
///
/// Values above 9 are printed as-is; clock fields are always 0-59 except for
/// minutes on limits of 100 minutes or more, which keep their natural width.
pub fn pad_clock_field(value: u32) -> String {
    if value > 9 {
        value.to_string()
    } else {
        format!("0{}", value)
    }
}

/// Format the time left before the limit as `MM:SS`.
///
/// # Examples
/// ```
/// use digital_timer::utils::format_remaining;
/// assert_eq!(format_remaining(25, 0), "25:00");
/// assert_eq!(format_remaining(25, 1), "24:59");
/// assert_eq!(format_remaining(1, 60), "00:00");
/// ```
pub fn format_remaining(limit_minutes: u32, elapsed_seconds: u32) -> String {
    let remaining = remaining_seconds(limit_minutes, elapsed_seconds);
    let minutes = remaining / SECONDS_PER_MINUTE;
    let seconds = remaining % SECONDS_PER_MINUTE;

    format!("{}:{}", pad_clock_field(minutes), pad_clock_field(seconds))
}

/// Seconds left before the limit, clamped at zero.
pub fn remaining_seconds(limit_minutes: u32, elapsed_seconds: u32) -> u32 {
    limit_seconds(limit_minutes).saturating_sub(elapsed_seconds)
}

/// Total length of the countdown in seconds.
pub fn limit_seconds(limit_minutes: u32) -> u32 {
    limit_minutes.saturating_mul(SECONDS_PER_MINUTE)
}
