/// Result alias used across bake.
///
/// Domain failures are `BakeError` values wrapped in `anyhow::Error`, so callers
/// can still `downcast_ref` to pick an exit code.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
