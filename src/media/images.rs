//! Pose image resolution
//!
//! An optional JSON file maps pose names to image file names inside a local
//! image directory. Absent mapping file, absent entry, or missing image file
//! all resolve to "no image" and are logged for diagnostics.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the optional pose-name-to-image mapping file
pub const IMAGE_MAP_FILE: &str = "names_to_image.json";

/// Directory the mapped image file names are resolved against
pub const IMAGE_DIR: &str = "images";

#[derive(Debug, Deserialize)]
struct RawMap(HashMap<String, String>);

/// Resolves pose names to image paths
#[derive(Debug, Clone)]
pub struct PoseImageMap {
    mapping: HashMap<String, String>,
    image_dir: PathBuf,
}

impl PoseImageMap {
    /// Load the mapping from the default locations in the working directory
    pub fn load() -> Self {
        Self::load_from(Path::new(IMAGE_MAP_FILE), Path::new(IMAGE_DIR))
    }

    /// Load the mapping from explicit paths (test seam). Any failure yields
    /// an empty map.
    pub fn load_from(map_path: &Path, image_dir: &Path) -> Self {
        let mapping = match std::fs::read_to_string(map_path) {
            Ok(json) => match serde_json::from_str::<RawMap>(&json) {
                Ok(raw) => {
                    info!(
                        "Loaded {} pose image mapping(s) from {}",
                        raw.0.len(),
                        map_path.display()
                    );
                    raw.0
                }
                Err(e) => {
                    warn!("Failed to parse {}: {e}, pose images disabled", map_path.display());
                    HashMap::new()
                }
            },
            Err(e) => {
                info!(
                    "No pose image mapping at {} ({e}), pose images disabled",
                    map_path.display()
                );
                HashMap::new()
            }
        };

        Self {
            mapping,
            image_dir: image_dir.to_path_buf(),
        }
    }

    /// An empty map (no images ever resolve)
    pub fn empty() -> Self {
        Self {
            mapping: HashMap::new(),
            image_dir: PathBuf::from(IMAGE_DIR),
        }
    }

    /// Resolve a pose name to an existing image path, if any
    pub fn resolve(&self, pose_name: &str) -> Option<PathBuf> {
        let file_name = self.mapping.get(pose_name)?;
        let path = self.image_dir.join(file_name);
        if path.exists() {
            Some(path)
        } else {
            debug!(
                "No image for {pose_name:?} at {}, skipping visual update",
                path.display()
            );
            None
        }
    }
}
