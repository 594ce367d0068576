//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Name and version, as shown in run headers.
#[must_use]
pub fn full_version() -> String {
    format!("folio {}", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_names_binary() {
        assert!(full_version().starts_with("folio "));
        assert!(full_version().ends_with(version()));
    }
}
