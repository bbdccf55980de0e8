#![forbid(unsafe_code)]

//! Widget configuration embedded in the page.
//!
//! Any widget root may carry a `data-config` attribute holding a JSON
//! object. Missing keys take their defaults; malformed JSON is logged at
//! `warn` and the widget mounts with defaults instead of being skipped.

use serde::de::DeserializeOwned;
use vitrine_core::markers::DEFAULT_BREAKPOINT;

/// Parse a `data-config` value, falling back to `T::default()`.
pub fn parse_config<T>(raw: Option<&str>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                message = "config.invalid",
                error = %err,
                target_type = core::any::type_name::<T>()
            );
            T::default()
        }
    }
}

/// Media query selecting the wide layout, from a `data-breakpoint` value.
#[must_use]
pub fn breakpoint_query(raw: Option<&str>) -> &str {
    raw.map(str::trim)
        .filter(|query| !query.is_empty())
        .unwrap_or(DEFAULT_BREAKPOINT)
}
