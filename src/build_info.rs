//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("SCREENKIT_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("SCREENKIT_BUILD_TIMESTAMP");

/// Version block used by `screenkit --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("SCREENKIT_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("SCREENKIT_BUILD_TIMESTAMP")
);

/// Help trailer block that surfaces build metadata in `screenkit --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("SCREENKIT_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("SCREENKIT_BUILD_TIMESTAMP")
);

/// One-line metadata shown under the demo title.
pub fn metadata_line() -> String {
    format!("v{VERSION} ({GIT_COMMIT}, built {BUILD_TIMESTAMP})")
}
