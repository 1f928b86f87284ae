//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn base_path() -> String {
        "/".into()
    }
}

// ============================================================================
// [i18n] Section Defaults
// ============================================================================

pub mod i18n {
    pub fn locales() -> Vec<String> {
        vec!["en".into()]
    }

    pub fn default() -> String {
        "en".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "src/content".into()
    }

    pub fn posts() -> PathBuf {
        "posts".into()
    }

    pub fn spec() -> PathBuf {
        "spec".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }

        pub fn pages() -> Vec<String> {
            vec!["/".into(), "/archive/".into()]
        }
    }
}
