use chrono::Utc;
use rand::Rng;

/// Human-facing receipt identifier handed back after an admission
/// submission: `FORM-{epoch millis}-{0..999}`.
pub fn generate_form_no() -> String {
    let suffix = rand::rng().random_range(0..1000);
    format!("FORM-{}-{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_no_pattern() {
        let form_no = generate_form_no();
        let parts: Vec<&str> = form_no.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "FORM");
        assert!(parts[1].parse::<i64>().unwrap() > 0);
        assert!(parts[2].parse::<u32>().unwrap() < 1000);
    }

    #[test]
    fn test_form_no_varies() {
        // Random suffix plus millisecond timestamp should not collide over
        // a handful of draws.
        let a = generate_form_no();
        let b = generate_form_no();
        let c = generate_form_no();
        assert!(a != b || b != c);
    }
}
