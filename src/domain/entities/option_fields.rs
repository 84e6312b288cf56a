use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidateLength;

/// Represents optional field semantics in PATCH requests.
///
/// - `Unchanged` → field absent from the body
/// - `SetToNull` → explicitly `null`
/// - `SetToValue` → set to provided value
///
/// Structs using it must carry `#[serde(default)]` so that absent fields
/// fall back to `Unchanged`.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::SetToValue(value) => value.length(),
            _ => None,
        }
    }

    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

// ---------------------- Core helpers ----------------------

impl<T> OptionField<T> {
    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// If `SetToValue`, returns a reference to inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Applies the patch to a required field; `SetToNull` keeps the current value.
    pub fn apply_to(self, current: T) -> T {
        match self {
            Self::SetToValue(v) => v,
            Self::Unchanged | Self::SetToNull => current,
        }
    }

    /// Applies the patch to a nullable field.
    pub fn apply_to_option(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Unchanged => current,
            Self::SetToNull => None,
            Self::SetToValue(v) => Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct Patch {
        title: OptionField<String>,
        excerpt: OptionField<String>,
        published: OptionField<bool>,
    }

    #[test]
    fn absent_null_and_value_are_distinguished() {
        let patch: Patch = serde_json::from_str(r#"{"excerpt": null, "published": true}"#).unwrap();
        assert!(patch.title.is_unchanged());
        assert_eq!(patch.excerpt, OptionField::SetToNull);
        assert_eq!(patch.published, OptionField::SetToValue(true));
    }

    #[test]
    fn applying_patches() {
        assert_eq!(OptionField::SetToValue(2).apply_to(1), 2);
        assert_eq!(OptionField::<i32>::SetToNull.apply_to(1), 1);
        assert_eq!(OptionField::<i32>::SetToNull.apply_to_option(Some(1)), None);
        assert_eq!(OptionField::<i32>::Unchanged.apply_to_option(Some(1)), Some(1));
    }
}
