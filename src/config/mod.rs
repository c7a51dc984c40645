use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_COMMITTED_COLOR, DEFAULT_DRAFT_COLOR, DEFAULT_MAX_POINTS, DEFAULT_STROKE_WIDTH,
    MAX_MAX_POINTS, MIN_MAX_POINTS, STROKE_WIDTH_RANGE,
};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Polyline tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolylineConfig {
    /// Vertex cap; the click that reaches it finalizes the shape
    pub max_points: usize,
    /// sRGBA color of the polyline under construction
    pub draft_color: [f32; 4],
    /// sRGBA color given to polylines when they are committed
    pub committed_color: [f32; 4],
    /// Stroke width for both layers, in pixels
    pub stroke_width: f32,
    /// Draw markers on committed vertices of the draft
    pub show_vertices: bool,
}

impl Default for PolylineConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            draft_color: DEFAULT_DRAFT_COLOR,
            committed_color: DEFAULT_COMMITTED_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            show_vertices: true,
        }
    }
}

impl PolylineConfig {
    pub fn draft_color(&self) -> Color {
        array_to_color(self.draft_color)
    }

    pub fn committed_color(&self) -> Color {
        array_to_color(self.committed_color)
    }

    /// Clamp out-of-range values in place.
    ///
    /// Returns one message per adjusted field, empty when nothing changed.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut adjustments = Vec::new();

        let max_points = self.max_points.clamp(MIN_MAX_POINTS, MAX_MAX_POINTS);
        if max_points != self.max_points {
            adjustments.push(format!(
                "max_points {} is outside {}..={}, using {}",
                self.max_points, MIN_MAX_POINTS, MAX_MAX_POINTS, max_points
            ));
            self.max_points = max_points;
        }

        let (min_width, max_width) = STROKE_WIDTH_RANGE;
        if !self.stroke_width.is_finite() {
            adjustments.push(format!(
                "stroke_width {} is not a number, using {}",
                self.stroke_width, DEFAULT_STROKE_WIDTH
            ));
            self.stroke_width = DEFAULT_STROKE_WIDTH;
        } else if !(min_width..=max_width).contains(&self.stroke_width) {
            let width = self.stroke_width.clamp(min_width, max_width);
            adjustments.push(format!(
                "stroke_width {} is outside {}..={}, using {}",
                self.stroke_width, min_width, max_width, width
            ));
            self.stroke_width = width;
        }

        for (name, color) in [
            ("draft_color", &mut self.draft_color),
            ("committed_color", &mut self.committed_color),
        ] {
            if color.iter().any(|c| !c.is_finite() || !(0.0..=1.0).contains(c)) {
                adjustments.push(format!("{} has channels outside 0..=1, clamping", name));
                for channel in color.iter_mut() {
                    *channel = if channel.is_finite() {
                        (*channel).clamp(0.0, 1.0)
                    } else {
                        1.0
                    };
                }
            }
        }

        adjustments
    }
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfigData {
    #[serde(default)]
    pub polyline: PolylineConfig,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset or adjusted
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, clamped values)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to change the polyline vertex cap
#[derive(Message)]
pub struct SetMaxPointsRequest {
    pub max_points: usize,
}

pub fn array_to_color(arr: [f32; 4]) -> Color {
    Color::srgba(arr[0], arr[1], arr[2], arr[3])
}

/// Parse config JSON and sanitize it.
///
/// Returns the data plus a user-facing reason when anything had to be reset or adjusted.
fn parse_config(json: &str) -> (AppConfigData, Option<String>) {
    match serde_json::from_str::<AppConfigData>(json) {
        Ok(mut data) => {
            let adjustments = data.polyline.sanitize();
            for adjustment in &adjustments {
                warn!("Config: {}", adjustment);
            }
            let reason = if adjustments.is_empty() {
                None
            } else {
                Some(format!(
                    "Some settings were out of range and were adjusted:\n{}",
                    adjustments.join("\n")
                ))
            };
            (data, reason)
        }
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Configuration file was corrupted: {}", e)),
            )
        }
    }
}

/// Result of loading config from disk
struct LoadConfigResult {
    config: AppConfig,
    /// Message if config was reset to defaults or adjusted
    reset_reason: Option<String>,
}

/// Load configuration from disk
fn load_config() -> LoadConfigResult {
    let config_path = crate::paths::config_file();

    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => {
                let parsed = parse_config(&json);
                info!("Loaded config from {:?}", config_path);
                parsed
            }
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    if let Err(e) = crate::paths::ensure_config_dir() {
        error!("Failed to create config directory: {}", e);
        return;
    }

    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config();
    config.data = result.config.data;
    config.config_path = result.config.config_path;
    config.dirty = result.config.dirty;

    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to update the vertex cap
fn set_max_points_system(
    mut events: MessageReader<SetMaxPointsRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        let max_points = event.max_points.clamp(MIN_MAX_POINTS, MAX_MAX_POINTS);
        if config.data.polyline.max_points == max_points {
            continue;
        }
        config.data.polyline.max_points = max_points;
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!("Set polyline vertex cap to {}", max_points);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<SetMaxPointsRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    set_max_points_system.run_if(on_message::<SetMaxPointsRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
