use serde::{Deserialize, Deserializer};

/// Dashboard cells are keyed by an opaque UUID (v7 for newly created cells).
pub type CellId = uuid::Uuid;

/// Organizations are keyed by their opaque string identifier.
pub type OrgId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Legacy payloads send `null` where they mean "empty"; decode it as the
/// type's default instead of failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
