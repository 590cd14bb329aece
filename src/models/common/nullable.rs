use serde::{Deserialize, Deserializer};

/// 字段必须出现，但值可以为 null
///
/// 单独的 `Option<T>` 字段缺失时 serde 会默认填 None，这里配合
/// `deserialize_with` 使用后缺失字段会报 `missing field`。
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
