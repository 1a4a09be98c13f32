// Library exports for the generate-icon binary and tests
pub mod constants;
pub mod export;
pub mod icon;
