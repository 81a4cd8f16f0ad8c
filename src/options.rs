use serde_json::{Map, Value};
use slider_core::{ConfigError, SliderConfig};

/// Build the slider config for a mounted root.
///
/// Options the page passes win; `slideCount` and `itemWidth` fall back to
/// the counted `.slider-slide` children and the measured root width.
pub fn resolve_config(
    options_json: Option<&str>,
    slide_count: usize,
    root_width: f64,
) -> Result<SliderConfig, ConfigError> {
    let mut options = match options_json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => match serde_json::from_str::<Value>(json) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(ConfigError::Options(format!(
                    "expected an object, got {other}"
                )))
            }
            Err(e) => return Err(ConfigError::Options(e.to_string())),
        },
        None => Map::new(),
    };
    options
        .entry("slideCount")
        .or_insert_with(|| Value::from(slide_count));
    if !options.contains_key("itemWidth") {
        options.insert("itemWidth".into(), Value::from(root_width));
    }
    SliderConfig::from_json(&Value::Object(options).to_string())
}
