/// Render an age as `"{hours}h {minutes}m"`; leftover seconds are dropped.
pub fn format_duration(seconds: i64) -> String {
    let hours = seconds / (60 * 60);
    let minutes = seconds / 60 % 60;
    format!("{}h {}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_seconds() {
        assert_eq!(format_duration(0), "0h 0m");
        assert_eq!(format_duration(59), "0h 0m");
        assert_eq!(format_duration(100), "0h 1m");
        assert_eq!(format_duration(8000), "2h 13m");
        assert_eq!(format_duration(90061), "25h 1m");
    }
}
