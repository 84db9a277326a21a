pub mod upload;

pub use upload::{
    is_protected_folder, save_upload, signed_document_url, verify_signed_token,
};
