// Build-time identity from Cargo.toml, served on GET /version and logged at startup

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `name/version`, e.g. `stepcount/0.1.0`.
pub fn banner() -> String {
    format!("{}/{}", NAME, VERSION)
}
