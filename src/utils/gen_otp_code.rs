use crate::config::OTP_CODE_LENGTH;
use crate::utils::random::generate_random_digits;

/// Expiry is owned by the OTP store's TTL; this only draws the code.
pub fn gen_code() -> String {
    generate_random_digits(OTP_CODE_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_digits() {
        let code = gen_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}
