pub mod form_no;
pub mod gen_otp_code;
pub mod random;
pub mod tracing;
