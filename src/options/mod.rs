//! Controller configuration with TOML preset support.
//!
//! Every tweakable setting (input gating, speeds, damping, distance limits)
//! lives here. The controller reads these at the start of each computation,
//! so hosts and UI layers may mutate them at any time without setters.
//! Options serialize to/from TOML for presets.

mod damping;
mod distance;
mod interaction;
mod speed;

use std::path::Path;

pub use damping::DampingOptions;
pub use distance::DistanceOptions;
pub use interaction::{InteractionOptions, RotationTarget};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use speed::SpeedOptions;

use crate::error::TrackballError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[speed]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Input gating and rotation target.
    pub interaction: InteractionOptions,
    /// Gesture sensitivity.
    pub speed: SpeedOptions,
    /// Inertia and reset fade.
    pub damping: DampingOptions,
    /// Orbit distance limits.
    pub distance: DistanceOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Pretty-printed JSON Schema, for handing to a UI layer.
    pub fn json_schema_string() -> Result<String, TrackballError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, TrackballError> {
        let content = std::fs::read_to_string(path).map_err(TrackballError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        if options.distance.min > options.distance.max {
            log::warn!(
                "{}: distance.min {} exceeds distance.max {}, bounds will be \
                 swapped",
                path.display(),
                options.distance.min,
                options.distance.max
            );
        }
        Ok(options)
    }

    /// Write options as pretty TOML, creating missing parent directories.
    pub fn save(&self, path: &Path) -> Result<(), TrackballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)?,
            _ => {}
        }
        std::fs::write(path, content)?;
        log::debug!("saved trackball options to {}", path.display());
        Ok(())
    }

    /// Sorted stems of the `.toml` presets in `dir`. An unreadable
    /// directory yields no presets.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[interaction]
rotation_target = "camera"

[distance]
min = 240.0
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.interaction.rotation_target, RotationTarget::Camera);
        assert!(opts.interaction.moves_camera());
        assert_eq!(opts.distance.min, 240.0);
        // Everything else should be default
        assert!(opts.distance.max.is_infinite());
        assert_eq!(opts.speed.zoom, 1.2);
        assert_eq!(opts.damping.object, 0.08);
        assert!(opts.interaction.enabled);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("trackball-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.speed.rotate = 2.5;
        opts.damping.static_moving = true;
        opts.save(&dir.join("fast.toml")).unwrap();
        Options::default().save(&dir.join("calm.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("fast.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["calm", "fast"]);
        assert!(Options::list_presets(&dir.join("missing")).is_empty());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("trackball-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[speed]\nrotate = \"fast\"\n").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, TrackballError::OptionsParse(_)));
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(TrackballError::Io(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("interaction"));
        assert!(props.contains_key("speed"));
        assert!(props.contains_key("damping"));
        assert!(props.contains_key("distance"));

        let speed = &props["speed"]["properties"];
        assert!(speed.get("rotate").is_some());
        assert!(speed.get("pan").is_some());
        assert!(Options::json_schema_string().unwrap().contains("Zoom Speed"));
    }
}
