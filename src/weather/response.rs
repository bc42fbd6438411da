use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Response structure for the wttr.in JSON (`format=j1`) endpoint.
/// Keys match regardless of case; missing or `null` fields fall back to empty values,
/// wrongly typed fields fail decoding.
#[derive(Deserialize, Debug, Default)]
pub struct WeatherResponse {
    /// Current weather snapshots; only the first one is meaningful
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_condition: Vec<CurrentCondition>,
}

/// Current weather at the queried location. Temperatures arrive as strings.
#[derive(Deserialize, Debug, Default)]
pub struct CurrentCondition {
    /// Temperature in Celsius
    #[serde(default, deserialize_with = "null_as_default")]
    pub temp_c: String,
    /// Felt temperature in Celsius
    #[serde(rename = "feelslikec", default, deserialize_with = "null_as_default")]
    pub feels_like_c: String,
    #[serde(rename = "weatherdesc", default, deserialize_with = "null_as_default")]
    pub weather_desc: Vec<WeatherDescription>,
}

/// Weather condition description
#[derive(Deserialize, Debug, Default)]
pub struct WeatherDescription {
    /// Human-readable description (e.g., "Partly cloudy")
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

impl WeatherResponse {
    /// Decodes a raw response body, matching object keys case-insensitively.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut value: Value = serde_json::from_slice(body)?;
        lowercase_keys(&mut value);
        serde_json::from_value(value)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// later keys win when two differ only by case
fn lowercase_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            *map = std::mem::take(map)
                .into_iter()
                .map(|(key, mut nested)| {
                    lowercase_keys(&mut nested);
                    (key.to_lowercase(), nested)
                })
                .collect::<Map<String, Value>>();
        }
        Value::Array(items) => items.iter_mut().for_each(lowercase_keys),
        _ => {}
    }
}
