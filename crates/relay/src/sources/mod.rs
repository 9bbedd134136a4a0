pub mod cloudwatch;
pub mod sns;

pub use cloudwatch::{AlarmNotification, AlarmTrigger};
pub use sns::{SnsEnvelope, SnsNotification, SnsRecord};

use serde::{Deserialize, Deserializer};

/// Decodes JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
