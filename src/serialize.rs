//! Response-shaping helpers.
//!
//! Every handler picks an explicit [`ExpandDepth`] for the records it
//! renders; nothing about the serialized shape is inferred from request
//! state. Foreign keys render through [`Linked`], which is either the raw
//! id or the full related object depending on the chosen depth.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandDepth {
    /// Foreign keys render as raw ids.
    Flat,
    /// Foreign keys render as full related objects.
    Related,
    /// Related objects additionally expand their own foreign keys.
    Deep,
}

impl ExpandDepth {
    /// The depth applied to objects nested one level down.
    pub fn nested(self) -> ExpandDepth {
        match self {
            ExpandDepth::Deep => ExpandDepth::Related,
            ExpandDepth::Related | ExpandDepth::Flat => ExpandDepth::Flat,
        }
    }

    pub fn expands(self) -> bool {
        !matches!(self, ExpandDepth::Flat)
    }
}

/// A foreign-key field: the raw id when flat, the related object when
/// expanded.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Linked<T> {
    Id(i32),
    Full(Box<T>),
}

/// The `{"bool": ...}` body shared by every status endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    #[serde(rename = "bool")]
    pub status: bool,
}

impl StatusResponse {
    pub fn new(status: bool) -> Self {
        Self { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Probe {
        name: &'static str,
    }

    #[test]
    fn deep_expands_one_level_down() {
        assert_eq!(ExpandDepth::Deep.nested(), ExpandDepth::Related);
        assert_eq!(ExpandDepth::Related.nested(), ExpandDepth::Flat);
        assert_eq!(ExpandDepth::Flat.nested(), ExpandDepth::Flat);
    }

    #[test]
    fn only_flat_keeps_raw_ids() {
        assert!(!ExpandDepth::Flat.expands());
        assert!(ExpandDepth::Related.expands());
        assert!(ExpandDepth::Deep.expands());
    }

    #[test]
    fn linked_serializes_untagged() {
        let id: Linked<Probe> = Linked::Id(7);
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!(7));

        let full: Linked<Probe> = Linked::Full(Box::new(Probe { name: "x" }));
        assert_eq!(
            serde_json::to_value(&full).unwrap(),
            serde_json::json!({"name": "x"})
        );
    }

    #[test]
    fn status_body_uses_bool_key() {
        let body = serde_json::to_value(StatusResponse::new(true)).unwrap();
        assert_eq!(body, serde_json::json!({"bool": true}));
    }
}
