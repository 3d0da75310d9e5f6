//! BrasilAPI RegistryClient trait 实现

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{RegistryError, Result};
use crate::http_client::HttpUtils;
use crate::traits::RegistryClient;
use crate::types::{Address, CompanyRecord, Cnpj, Partner};

use super::{BrasilApiClient, BrasilApiCompany, REGISTRY_NAME};

impl BrasilApiClient {
    /// 查询地址
    pub fn company_url(&self, cnpj: &Cnpj) -> String {
        format!("{}/cnpj/v1/{}", self.base_url, cnpj.digits())
    }

    /// 将状态码与响应体映射为查询结果
    pub(crate) fn interpret_response(
        requested: &Cnpj,
        status_code: u16,
        body: &str,
    ) -> Result<CompanyRecord> {
        if status_code == 404 {
            return Err(RegistryError::NotFound {
                registry: REGISTRY_NAME.to_string(),
                cnpj: requested.digits().to_string(),
            });
        }

        if !HttpUtils::is_success(status_code) {
            log::error!("[{REGISTRY_NAME}] Unexpected HTTP status {status_code}");
            return Err(RegistryError::HttpStatus {
                registry: REGISTRY_NAME.to_string(),
                status: status_code,
                raw_message: (!body.is_empty()).then(|| body.to_string()),
            });
        }

        let company: BrasilApiCompany = HttpUtils::parse_json(body, REGISTRY_NAME)?;
        Self::company_to_record(company, requested)
    }

    /// 将 BrasilAPI 响应转换为 `CompanyRecord`
    ///
    /// 返回的 CNPJ 必须与请求一致，日期必须是 `YYYY-MM-DD`（允许为空）。
    pub(crate) fn company_to_record(
        company: BrasilApiCompany,
        requested: &Cnpj,
    ) -> Result<CompanyRecord> {
        let cnpj = Cnpj::parse(&company.cnpj).map_err(|e| invalid_field("cnpj", e))?;
        if &cnpj != requested {
            return Err(invalid_field(
                "cnpj",
                format!("response is for {cnpj}, requested {requested}"),
            ));
        }

        let activity_start = match company.data_inicio_atividade.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|e| invalid_field("data_inicio_atividade", format!("{raw}: {e}")))?,
            ),
        };

        let partners = company
            .qsa
            .into_iter()
            .map(|p| Partner {
                name: p.nome_socio,
                role: p.qualificacao_socio,
            })
            .collect();

        Ok(CompanyRecord {
            cnpj,
            legal_name: company.razao_social,
            trade_name: company.nome_fantasia,
            address: Address {
                street: company.logradouro,
                number: company.numero,
                district: company.bairro,
                municipality: company.municipio,
                state: company.uf,
                postal_code: company.cep,
            },
            phone: company.ddd_telefone_1,
            activity_start,
            primary_activity: company.cnae_fiscal_descricao,
            partners,
        })
    }
}

fn invalid_field(field: &str, detail: impl ToString) -> RegistryError {
    RegistryError::InvalidResponse {
        registry: REGISTRY_NAME.to_string(),
        field: field.to_string(),
        detail: detail.to_string(),
    }
}

#[async_trait]
impl RegistryClient for BrasilApiClient {
    fn id(&self) -> &'static str {
        REGISTRY_NAME
    }

    async fn fetch_company(&self, cnpj: &Cnpj) -> Result<CompanyRecord> {
        let url = self.company_url(cnpj);
        let request = self
            .client
            .get(&url)
            .header("Accept", "application/json");

        let (status_code, body) =
            HttpUtils::execute_request(request, REGISTRY_NAME, "GET", &url).await?;

        Self::interpret_response(cnpj, status_code, &body)
    }
}
