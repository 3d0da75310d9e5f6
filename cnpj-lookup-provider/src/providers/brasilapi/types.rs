//! BrasilAPI 类型定义

use serde::Deserialize;

use crate::utils::serde_helpers::null_as_default;

/// `/cnpj/v1/{cnpj}` 响应
///
/// 只声明我们使用的字段，其余字段忽略。`cnpj` 与 `razao_social` 必须存在；
/// 其他文本字段允许缺失或为 `null`，但类型不符时解析失败。
#[derive(Debug, Deserialize)]
pub struct BrasilApiCompany {
    pub cnpj: String,
    pub razao_social: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome_fantasia: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logradouro: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub numero: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bairro: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub municipio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uf: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cep: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ddd_telefone_1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_inicio_atividade: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cnae_fiscal_descricao: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qsa: Vec<BrasilApiPartner>,
}

/// QSA 条目
#[derive(Debug, Deserialize)]
pub struct BrasilApiPartner {
    pub nome_socio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qualificacao_socio: String,
}
