//! Release index lookup and asset selection.
//!
//! The index is a GitHub-style releases endpoint: a GET returns a JSON array
//! of releases, newest first, each carrying a tag and a list of downloadable
//! assets.

use serde::Deserialize;

use zserio_util::errors::ZserioError;

/// A downloadable asset attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

/// A single entry of the release index.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub assets: Vec<Asset>,
}

impl Release {
    /// The release version: the tag with its leading `v` stripped.
    pub fn version(&self) -> &str {
        self.tag_name.strip_prefix('v').unwrap_or(&self.tag_name)
    }

    /// The compiler bundle asset (`zserio-<version>-bin.zip`).
    ///
    /// Assets are matched by name pattern; if no name matches, the first
    /// listed asset is used as a fallback to the historical positional
    /// contract.
    pub fn compiler_asset(&self) -> Result<&Asset, ZserioError> {
        self.select_asset(|name| name.ends_with("-bin.zip"), 0, "compiler bundle")
    }

    /// The runtime library bundle asset (`zserio-<version>-runtime-libs.zip`).
    ///
    /// Matched by name pattern, falling back to the second listed asset.
    pub fn runtime_asset(&self) -> Result<&Asset, ZserioError> {
        self.select_asset(|name| name.contains("runtime-libs"), 1, "runtime bundle")
    }

    fn select_asset(
        &self,
        matches: impl Fn(&str) -> bool,
        fallback_index: usize,
        what: &str,
    ) -> Result<&Asset, ZserioError> {
        if let Some(asset) = self.assets.iter().find(|a| matches(&a.name)) {
            return Ok(asset);
        }

        match self.assets.get(fallback_index) {
            Some(asset) => {
                tracing::warn!(
                    "no asset of release {} matches the {what} name pattern, \
                     falling back to position {fallback_index} ({})",
                    self.tag_name,
                    asset.name
                );
                Ok(asset)
            }
            None => Err(ZserioError::Release {
                message: format!(
                    "release {} has no asset usable as the {what}",
                    self.tag_name
                ),
            }),
        }
    }
}

/// Fetch the most recent release from the index at `index_url`.
///
/// Fails with [`ZserioError::Release`] if the index is unreachable, returns a
/// non-success status, cannot be parsed, or lists no releases.
pub fn fetch_latest(index_url: &str) -> Result<Release, ZserioError> {
    tracing::info!("Fetching release index {index_url}");

    let resp = reqwest::blocking::Client::builder()
        .user_agent("zserio-dist")
        .build()
        .map_err(|e| ZserioError::Release {
            message: format!("Failed to build HTTP client: {e}"),
        })?
        .get(index_url)
        .send()
        .map_err(|e| ZserioError::Release {
            message: format!("Failed to query {index_url}: {e}"),
        })?;

    if !resp.status().is_success() {
        return Err(ZserioError::Release {
            message: format!("HTTP {} for {index_url}", resp.status()),
        });
    }

    let releases: Vec<Release> = resp.json().map_err(|e| ZserioError::Release {
        message: format!("Malformed release index at {index_url}: {e}"),
    })?;

    releases.into_iter().next().ok_or_else(|| ZserioError::Release {
        message: format!("Release index at {index_url} lists no releases"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    {
        "tag_name": "v2.14.1",
        "assets": [
            { "name": "zserio-2.14.1-bin.zip",
              "browser_download_url": "https://example.com/zserio-2.14.1-bin.zip" },
            { "name": "zserio-2.14.1-runtime-libs.zip",
              "browser_download_url": "https://example.com/zserio-2.14.1-runtime-libs.zip" }
        ]
    }"#;

    #[test]
    fn parses_release_json() {
        let release: Release = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(release.tag_name, "v2.14.1");
        assert_eq!(release.assets.len(), 2);
    }

    #[test]
    fn version_strips_tag_prefix() {
        let release: Release = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(release.version(), "2.14.1");
    }

    #[test]
    fn version_without_prefix_is_unchanged() {
        let release = Release {
            tag_name: "2.14.1".to_string(),
            assets: vec![],
        };
        assert_eq!(release.version(), "2.14.1");
    }

    #[test]
    fn assets_selected_by_name_pattern() {
        // Deliberately reversed order: pattern matching must still pick
        // the right asset.
        let release: Release = serde_json::from_str(
            r#"
            {
                "tag_name": "v2.14.1",
                "assets": [
                    { "name": "zserio-2.14.1-runtime-libs.zip",
                      "browser_download_url": "https://example.com/runtime" },
                    { "name": "zserio-2.14.1-bin.zip",
                      "browser_download_url": "https://example.com/bin" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            release.compiler_asset().unwrap().browser_download_url,
            "https://example.com/bin"
        );
        assert_eq!(
            release.runtime_asset().unwrap().browser_download_url,
            "https://example.com/runtime"
        );
    }

    #[test]
    fn unmatched_names_fall_back_to_position() {
        let release: Release = serde_json::from_str(
            r#"
            {
                "tag_name": "v9.9.9",
                "assets": [
                    { "name": "first.zip", "browser_download_url": "https://example.com/a" },
                    { "name": "second.zip", "browser_download_url": "https://example.com/b" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(release.compiler_asset().unwrap().name, "first.zip");
        assert_eq!(release.runtime_asset().unwrap().name, "second.zip");
    }

    #[test]
    fn missing_assets_are_a_release_error() {
        let release = Release {
            tag_name: "v1.0.0".to_string(),
            assets: vec![],
        };
        assert!(matches!(
            release.compiler_asset(),
            Err(ZserioError::Release { .. })
        ));
        assert!(matches!(
            release.runtime_asset(),
            Err(ZserioError::Release { .. })
        ));
    }
}
