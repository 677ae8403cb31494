// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session and style preset serialization.
//!
//! Sessions and presets are stored as YAML or JSON; the format follows the
//! file extension.

use crate::models::{project::ProjectData, style::DrawingStyle};
use anyhow::{bail, Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// File formats understood by the importers and exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

fn export<T: Serialize>(data: &T, path: &Path, format: Format) -> Result<()> {
    let text = match format {
        Format::Yaml => serde_yaml::to_string(data)?,
        Format::Json => serde_json::to_string_pretty(data)?,
    };
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

fn import<T: DeserializeOwned>(path: &Path, format: Format) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let data = match format {
        Format::Yaml => serde_yaml::from_str(&text)?,
        Format::Json => serde_json::from_str(&text)?,
    };
    Ok(data)
}

/// Export session data to YAML format.
pub fn export_yaml(data: &ProjectData, path: &Path) -> Result<()> {
    export(data, path, Format::Yaml)
}

/// Export session data to JSON format.
pub fn export_json(data: &ProjectData, path: &Path) -> Result<()> {
    export(data, path, Format::Json)
}

/// Import session data from YAML format.
pub fn import_yaml(path: &Path) -> Result<ProjectData> {
    import(path, Format::Yaml)
}

/// Import session data from JSON format.
pub fn import_json(path: &Path) -> Result<ProjectData> {
    import(path, Format::Json)
}

/// Export session data, choosing the format from the extension.
pub fn export_project(data: &ProjectData, path: &Path) -> Result<()> {
    match Format::from_path(path)? {
        Format::Yaml => export_yaml(data, path),
        Format::Json => export_json(data, path),
    }
}

/// Import session data, choosing the format from the extension.
pub fn import_project(path: &Path) -> Result<ProjectData> {
    match Format::from_path(path)? {
        Format::Yaml => import_yaml(path),
        Format::Json => import_json(path),
    }
}

/// Export a style preset, choosing the format from the extension.
pub fn export_preset(preset: &DrawingStyle, path: &Path) -> Result<()> {
    export(preset, path, Format::from_path(path)?)
}

/// Import a style preset, choosing the format from the extension.
pub fn import_preset(path: &Path) -> Result<DrawingStyle> {
    import(path, Format::from_path(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::overlay::GridOverlayState;
    use crate::models::style::{GridStyle, StyleValue, KEY_THIRDS};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("framegrid-{}-{}", std::process::id(), name))
    }

    fn sample_project() -> ProjectData {
        ProjectData::new(
            "frame.png".to_string(),
            1920,
            1080,
            GridOverlayState {
                visible: false,
                style: GridStyle {
                    color: [0, 0, 255],
                    frame: true,
                    ..GridStyle::default()
                },
            },
        )
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a.yml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.yaml")).unwrap(), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("a.json")).unwrap(), Format::Json);
        assert!(Format::from_path(Path::new("a.xml")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_project_yaml_and_json() {
        let project = sample_project();
        for name in ["session.yaml", "session.json"] {
            let path = temp_path(name);
            export_project(&project, &path).unwrap();
            let loaded = import_project(&path).unwrap();
            std::fs::remove_file(&path).unwrap();
            assert_eq!(loaded, project);
        }
    }

    #[test]
    fn test_preset_file() {
        let mut preset = DrawingStyle::test_grid_template();
        preset.set(KEY_THIRDS, StyleValue::Toggle(true));

        let path = temp_path("preset.yaml");
        export_preset(&preset, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let loaded = import_preset(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(text.contains("Toggles/Thirds"));
        assert_eq!(loaded, preset);
    }

    #[test]
    fn test_import_missing_file() {
        assert!(import_project(&temp_path("missing.json")).is_err());
    }
}
