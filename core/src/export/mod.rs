pub mod fingerprint;
pub mod render;
