//! Seeded placeholder artwork for avatars and thumbnails.
//!
//! The same seed always yields the same gradient, so a user keeps their
//! colours across reloads.

/// 31-multiplier string hash seeded with 7, wrapping at `u32`.
///
/// Every character keeps contributing, so long seeds such as e-mail
/// addresses still spread across the hue wheel.
fn hash_string(text: &str) -> u32 {
    text.chars()
        .fold(7u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32))
}

/// Two hues at least 25° apart and an angle, all in `0..360`.
fn hues(base: &str) -> (u32, u32, u32) {
    let first = hash_string(&format!("{base}|h1")) % 360;
    let mut second = hash_string(&format!("{base}|h2")) % 360;
    let angle = hash_string(&format!("{base}|a")) % 360;
    if first.abs_diff(second) < 25 {
        second = (second + 120) % 360;
    }
    (first, second, angle)
}

fn gradient(base: &str) -> String {
    let (first, second, angle) = hues(base);
    format!("linear-gradient({angle}deg, hsl({first}, 78%, 56%), hsl({second}, 78%, 44%))")
}

/// CSS background for `seed`. A blank seed gets a random gradient.
pub fn placeholder_color(seed: &str) -> String {
    let seed = seed.trim();
    if seed.is_empty() {
        gradient(&js_sys::Math::random().to_string())
    } else {
        gradient(seed)
    }
}

/// First character of `seed`, uppercased, or `?` when blank.
pub fn placeholder_text(seed: &str) -> String {
    seed.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_string() {
        assert_eq!(hash_string(""), 7);
        assert_eq!(hash_string("a"), 7 * 31 + 97);
        assert_eq!(hash_string("ab"), (7 * 31 + 97) * 31 + 98);
    }

    #[test]
    fn test_color_is_deterministic() {
        assert_eq!(placeholder_color("alice"), placeholder_color("alice"));
        assert_eq!(placeholder_color("  alice "), placeholder_color("alice"));
        assert_ne!(placeholder_color("alice"), placeholder_color("bob"));
    }

    #[test]
    fn test_long_seeds_differ() {
        let seeds = [
            "alice@example.com",
            "bob@example.com",
            "carol.danvers@example.com",
            "Quarterly revenue report",
        ];
        let colors: Vec<_> = seeds.iter().map(|s| placeholder_color(s)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(hues("alice@example.com"), (231, 352, 83));
    }

    #[test]
    fn test_color_format() {
        let color = placeholder_color("alice");
        assert!(color.starts_with("linear-gradient("), "{color}");
        assert!(color.contains("deg, hsl("), "{color}");
        assert!(color.ends_with("78%, 44%))"), "{color}");
    }

    #[test]
    fn test_hues_are_separated() {
        for i in 0..500 {
            let (first, second, angle) = hues(&format!("user-{i}"));
            assert!(first < 360 && second < 360 && angle < 360);
            assert!(first.abs_diff(second) >= 25, "user-{i}: {first} vs {second}");
        }
    }

    #[test]
    fn test_placeholder_text() {
        assert_eq!(placeholder_text("alice"), "A");
        assert_eq!(placeholder_text("  bob"), "B");
        assert_eq!(placeholder_text("écrit"), "É");
        assert_eq!(placeholder_text("访客"), "访");
        assert_eq!(placeholder_text(""), "?");
        assert_eq!(placeholder_text("   "), "?");
    }
}
