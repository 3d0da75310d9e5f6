//! Serde 反序列化工具
//!
//! 注册数据源常把缺省的文本字段写成 `null`，这里统一折叠为默认值。

use serde::{Deserialize, Deserializer};

/// 反序列化：`null` 视为 `T::default()`，其余值按 `T` 正常解析
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
