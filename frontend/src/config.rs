/// Configuration for the frontend application

/// Base URL for static assets
/// - For local development: "/"
/// - For GitHub Pages: "/newsroom/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/newsroom/";

/// Simulated provider latency before sample data is handed to the pages.
pub const SAMPLE_LATENCY_MS: u32 = 600;

/// How long the "link copied" confirmation stays on the share button.
pub const COPIED_FEEDBACK_MS: u32 = 1800;

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

/// Resolve an avatar or attachment reference. Absolute URLs pass through.
pub fn resolve_url(url: &str) -> String {
    const ABSOLUTE: [&str; 4] = ["http://", "https://", "//", "data:"];
    if ABSOLUTE.iter().any(|prefix| url.starts_with(prefix)) {
        url.to_string()
    } else {
        asset_path(url)
    }
}
