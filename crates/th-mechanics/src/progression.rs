//! Experience curve, play-time formatting and id generation.

use chrono::Utc;
use rand::Rng;
use rand::rngs::StdRng;

/// Experience required to advance past `level`.
pub fn exp_for_level(level: u32) -> u32 {
    level.saturating_mul(100)
}

/// Render a duration in seconds as `HH:MM:SS`.
///
/// Each field is zero-padded to two digits. Hours do not wrap at 24 and
/// grow past two digits when needed.
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Generate a probabilistically unique identifier.
///
/// The id is the current Unix time in milliseconds followed by a random
/// component, both in base 36. Collisions are unlikely, not impossible,
/// and the value is not fit for use as a secret.
pub fn generate_id(rng: &mut StdRng) -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let noise: u64 = rng.random();
    format!("{}{}", to_base36(millis), to_base36(noise))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn exp_curve() {
        assert_eq!(exp_for_level(1), 100);
        assert_eq!(exp_for_level(2), 200);
        assert_eq!(exp_for_level(15), 1500);
    }

    #[test]
    fn format_time_pads_fields() {
        assert_eq!(format_time(0), "00:00:00");
        assert_eq!(format_time(65), "00:01:05");
        assert_eq!(format_time(3661), "01:01:01");
    }

    #[test]
    fn format_time_hours_do_not_wrap() {
        assert_eq!(format_time(25 * 3600), "25:00:00");
        assert_eq!(format_time(100 * 3600 + 59), "100:00:59");
    }

    #[test]
    fn base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn ids_are_distinct() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = generate_id(&mut rng);
        let b = generate_id(&mut rng);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    proptest! {
        #[test]
        fn format_time_round_trips(secs in 0u64..1_000_000) {
            let s = format_time(secs);
            let parts: Vec<u64> = s.split(':').map(|p| p.parse().unwrap()).collect();
            prop_assert_eq!(parts.len(), 3);
            prop_assert!(parts[1] < 60 && parts[2] < 60);
            prop_assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], secs);
        }
    }
}
