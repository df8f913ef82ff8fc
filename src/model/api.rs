use serde::{Deserialize, Deserializer, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Envelope wrapping every read response: `{ "data": ... }`
#[derive(Serialize, Deserialize, Debug)]
pub struct DataDto<T> {
    pub data: T,
}

/// Body returned by create, update and delete endpoints.
///
/// Some endpoints answer `{ "success": bool }`, some return the affected record
/// under `data`, some do both.
#[derive(Deserialize, Debug)]
pub struct MutationDto<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Status codes arrive as integers or as integer-valued strings depending on
/// the endpoint, so both are accepted before mapping to an enum.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum CodeRepr {
    Int(i64),
    Text(String),
}

impl CodeRepr {
    pub(crate) fn code(self) -> Result<i64, String> {
        match self {
            Self::Int(code) => Ok(code),
            Self::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("expected an integer status code, got {:?}", text)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accept `2`, `2.0` or `"2 years"` for fields the API sends inconsistently.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<TextRepr>::deserialize(deserializer)?;

    Ok(repr.map(|repr| match repr {
        TextRepr::Int(value) => value.to_string(),
        TextRepr::Float(value) => value.to_string(),
        TextRepr::Text(value) => value,
    }))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Accept `true`, `1` or `"1"` for boolean flags.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<FlagRepr>::deserialize(deserializer)?;

    Ok(match repr {
        None => false,
        Some(FlagRepr::Bool(value)) => value,
        Some(FlagRepr::Int(value)) => value != 0,
        Some(FlagRepr::Text(value)) => matches!(value.trim(), "1" | "true" | "TRUE" | "True"),
    })
}
