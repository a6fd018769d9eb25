use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

use crate::greeting::cycler::CycleTimings;

/// Reference greeting sequence (8 languages). Any ordered list works; this
/// is the default when no config overrides `greetings`.
pub const DEFAULT_GREETINGS: [&str; 8] = [
    "Hello",
    "नमस्ते",
    "Bonjour",
    "Hola",
    "你好",
    "Konnichiwa",
    "Guten Tag",
    "Olá",
];

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Neon Folio".into(),
            auto_close: 0.0,
        }
    }
}

/// Delays (seconds) driving the loading -> greeting -> ready sequence.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SequenceConfig {
    /// Preloader dwell before the greeting cycle starts.
    pub loading_delay: f32,
    /// Time each greeting stays fully visible.
    pub display_delay: f32,
    /// Fade-out duration between greetings.
    pub fade_delay: f32,
    /// Final overlay fade before the main view is revealed.
    pub exit_delay: f32,
    /// One-shot reveal transition of the main content.
    pub reveal_duration: f32,
}
impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            loading_delay: 0.8,
            display_delay: 0.5,
            fade_delay: 0.3,
            exit_delay: 0.5,
            reveal_duration: 0.7,
        }
    }
}

impl SequenceConfig {
    pub fn cycle_timings(&self) -> CycleTimings {
        CycleTimings {
            display: Duration::from_secs_f32(self.display_delay.max(0.0)),
            fade: Duration::from_secs_f32(self.fade_delay.max(0.0)),
            exit: Duration::from_secs_f32(self.exit_delay.max(0.0)),
        }
    }
}

/// Particle backdrop tuning. Defaults mirror the reference visuals.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
    /// One particle per this many square pixels of viewport.
    pub area_per_particle: f32,
    /// Hard cap on the particle count regardless of viewport size.
    pub max_particles: usize,
    /// Grid cell size in pixels.
    pub grid_cell: f32,
    /// Pointer repulsion radius in pixels.
    pub pointer_radius: f32,
    /// Peak repulsion velocity delta at zero distance.
    pub pointer_force: f32,
    /// Per-tick exponential velocity decay factor.
    pub damping: f32,
    /// Opacity falloff per pixel of |depth|.
    pub depth_fade: f32,
    /// Fixed RNG seed for deterministic fields; omitted = entropy.
    pub seed: Option<u64>,
}
impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 20_000.0,
            max_particles: 100,
            grid_cell: 50.0,
            pointer_radius: 150.0,
            pointer_force: 0.3,
            damping: 0.99,
            depth_fade: 0.005,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub sequence: SequenceConfig,
    pub greetings: Vec<String>,
    pub background: BackgroundConfig,
}
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            sequence: Default::default(),
            greetings: DEFAULT_GREETINGS.iter().map(|s| s.to_string()).collect(),
            background: Default::default(),
        }
    }
}

impl AppConfig {
    // Single-file helpers retained for tools & tests; the layered loader is
    // the production startup path.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load a stack of config layers, later files overriding earlier ones
    /// field by field. Unreadable or unparsable layers are skipped and
    /// reported; returns (config, layer_paths_used, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;

        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        for p in paths {
            let path = p.as_ref();
            let layer = fs::read_to_string(path)
                .map_err(|e| format!("{}: read error: {e}", path.display()))
                .and_then(|txt| {
                    ron::from_str::<Value>(&txt)
                        .map_err(|e| format!("{}: parse error: {e}", path.display()))
                });
            match layer {
                Ok(value) => {
                    merged = Some(match merged.take() {
                        Some(base) => merge_layers(base, value),
                        None => value,
                    });
                    used.push(path.display().to_string());
                }
                Err(e) => errors.push(e),
            }
        }

        let cfg = match merged {
            Some(value) => match value.into_rust::<AppConfig>() {
                Ok(cfg) => cfg,
                Err(e) => {
                    errors.push(format!("merged config invalid, using defaults: {e}"));
                    AppConfig::default()
                }
            },
            None => AppConfig::default(),
        };
        (cfg, used, errors)
    }

    /// Validate the configuration returning human-readable warning strings.
    /// Suspicious values, not hard errors; log each with `warn!` at startup.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width * self.window.height > 10_000_000.0 {
            w.push(format!(
                "very large window area: {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        let s = &self.sequence;
        for (label, v) in [
            ("sequence.loading_delay", s.loading_delay),
            ("sequence.display_delay", s.display_delay),
            ("sequence.fade_delay", s.fade_delay),
            ("sequence.exit_delay", s.exit_delay),
            ("sequence.reveal_duration", s.reveal_duration),
        ] {
            if v < 0.0 {
                w.push(format!("{label} {v} negative -> treated as zero"));
            }
            if v > 10.0 {
                w.push(format!("{label} {v} very long; intro will feel stuck"));
            }
        }
        if self.greetings.is_empty() {
            w.push("greetings list empty; intro skips straight to the exit fade".into());
        }
        let b = &self.background;
        if b.area_per_particle <= 0.0 {
            w.push("background.area_per_particle must be > 0; field will be empty".into());
        }
        if b.max_particles > 1000 {
            w.push(format!(
                "background.max_particles {} very high; per-tick cost grows linearly",
                b.max_particles
            ));
        }
        if b.grid_cell <= 0.0 {
            w.push("background.grid_cell must be > 0; grid will be empty".into());
        }
        if b.pointer_radius <= 0.0 {
            w.push("background.pointer_radius <= 0 disables pointer repulsion".into());
        }
        if b.pointer_force < 0.0 {
            w.push("background.pointer_force negative -> pointer attracts instead of repelling".into());
        }
        if !(0.0..=1.0).contains(&b.damping) {
            w.push(format!(
                "background.damping {} outside 0..1; velocities will not decay",
                b.damping
            ));
        }
        if b.depth_fade < 0.0 {
            w.push("background.depth_fade negative -> deep particles brighten".into());
        }
        w
    }
}

/// Recursive overlay of one RON value onto another. Maps merge key by key
/// (overlay wins on scalar conflicts); any other value pair is replaced
/// wholesale, so lists are overridden, not concatenated.
fn merge_layers(base: ron::value::Value, overlay: ron::value::Value) -> ron::value::Value {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(mut base), Value::Map(overlay)) => {
            for (key, value) in overlay.into_iter() {
                let merged = match base.remove(&key) {
                    Some(existing) => merge_layers(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            Value::Map(base)
        }
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test"),
            sequence: (
                loading_delay: 0.8,
                display_delay: 0.5,
                fade_delay: 0.3,
                exit_delay: 0.5,
                reveal_duration: 0.7,
            ),
            greetings: ["Hello", "Bonjour"],
            background: (
                area_per_particle: 10000.0,
                max_particles: 50,
                grid_cell: 40.0,
                pointer_radius: 120.0,
                pointer_force: 0.25,
                damping: 0.98,
                depth_fade: 0.004,
                seed: Some(7),
            ),
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = AppConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.greetings, vec!["Hello".to_string(), "Bonjour".to_string()]);
        assert_eq!(cfg.background.max_particles, 50);
        assert_eq!(cfg.background.seed, Some(7));
        assert!((cfg.sequence.fade_delay - 0.3).abs() < 1e-6);
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config"
        );
    }

    #[test]
    fn defaults_match_reference_tuning() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.greetings.len(), 8);
        assert_eq!(cfg.greetings[0], "Hello");
        assert_eq!(cfg.sequence.loading_delay, 0.8);
        assert_eq!(cfg.sequence.display_delay, 0.5);
        assert_eq!(cfg.sequence.fade_delay, 0.3);
        assert_eq!(cfg.sequence.exit_delay, 0.5);
        assert_eq!(cfg.background.area_per_particle, 20_000.0);
        assert_eq!(cfg.background.max_particles, 100);
        assert_eq!(cfg.background.grid_cell, 50.0);
        assert_eq!(cfg.background.pointer_radius, 150.0);
        assert_eq!(cfg.background.pointer_force, 0.3);
        assert_eq!(cfg.background.damping, 0.99);
        assert_eq!(cfg.background.depth_fade, 0.005);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn validate_detects_warnings() {
        let mut bad = AppConfig::default();
        bad.window.width = -100.0;
        bad.window.auto_close = -5.0;
        bad.sequence.fade_delay = -0.3;
        bad.greetings.clear();
        bad.background.area_per_particle = 0.0;
        bad.background.damping = 1.5;
        bad.background.grid_cell = 0.0;
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("window.autoClose"));
        assert!(joined.contains("sequence.fade_delay"));
        assert!(joined.contains("greetings list empty"));
        assert!(joined.contains("area_per_particle"));
        assert!(joined.contains("damping"));
        assert!(joined.contains("grid_cell"));
        assert!(warnings.len() >= 7, "expected many warnings, got {joined}");
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = AppConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg.window.width, WindowConfig::default().width);
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r#"(
            window: (width: 900.0),
            sequence: (loading_delay: 0.4),
        )"#;
        let override_one = r#"(
            window: (title: "Custom Title"),
            sequence: (loading_delay: 1.2),
        )"#;
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        let mut f2 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(base.as_bytes()).unwrap();
        f2.write_all(override_one.as_bytes()).unwrap();
        let (cfg, used, errors) = AppConfig::load_layered([f1.path(), f2.path()]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 900.0); // from base
        assert_eq!(cfg.window.title, "Custom Title"); // overridden
        assert_eq!(cfg.sequence.loading_delay, 1.2); // overridden
        assert_eq!(cfg.window.height, WindowConfig::default().height);
        // Untouched sections keep defaults, including the greeting list.
        assert_eq!(cfg.greetings.len(), 8);
    }

    #[test]
    fn broken_layer_is_reported_and_skipped() {
        let base = r#"(
            window: (width: 900.0, title: "Base"),
        )"#;
        let broken = "(window: (width: ))";
        let top = r#"(
            window: (title: "Top"),
            background: (max_particles: 10),
        )"#;
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        let mut f2 = tempfile::NamedTempFile::new().unwrap();
        let mut f3 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(base.as_bytes()).unwrap();
        f2.write_all(broken.as_bytes()).unwrap();
        f3.write_all(top.as_bytes()).unwrap();
        let (cfg, used, errors) = AppConfig::load_layered([f1.path(), f2.path(), f3.path()]);
        assert_eq!(used.len(), 2, "good layers still apply");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("parse error"));
        // Deep merge across the surviving layers.
        assert_eq!(cfg.window.width, 900.0);
        assert_eq!(cfg.window.title, "Top");
        assert_eq!(cfg.background.max_particles, 10);
    }

    #[test]
    fn cycle_timings_clamp_negative_delays() {
        let mut s = SequenceConfig::default();
        s.display_delay = -1.0;
        let t = s.cycle_timings();
        assert_eq!(t.display, std::time::Duration::ZERO);
        assert_eq!(t.fade, std::time::Duration::from_millis(300));
    }
}
