//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 预设的 HTTP 响应
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub reason: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl CannedResponse {
    pub fn json(status: u16, reason: &'static str, body: &str) -> Self {
        Self {
            status,
            reason,
            headers: vec![("Content-Type", "application/json".to_string())],
            body: body.to_string(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }
}

/// 只应答一次的本地 HTTP 服务，记录收到的请求行
#[derive(Debug)]
pub struct OneShotServer {
    pub base_url: String,
    pub request_lines: Arc<Mutex<Vec<String>>>,
}

impl OneShotServer {
    /// 启动服务；第一个连接收到 `response` 后服务退出
    pub async fn start(response: CannedResponse) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let request_lines = Arc::new(Mutex::new(Vec::new()));
        let lines = Arc::clone(&request_lines);

        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };

            let mut buf = Vec::new();
            let mut chunk = [0_u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }

            let request = String::from_utf8_lossy(&buf);
            if let Some(line) = request.lines().next() {
                if let Ok(mut guard) = lines.lock() {
                    guard.push(line.to_string());
                }
            }

            let mut raw = format!("HTTP/1.1 {} {}\r\n", response.status, response.reason);
            for (name, value) in &response.headers {
                raw.push_str(&format!("{name}: {value}\r\n"));
            }
            raw.push_str(&format!(
                "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                response.body.len(),
                response.body
            ));
            let _ = socket.write_all(raw.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        Ok(Self {
            base_url: format!("http://{addr}/api"),
            request_lines,
        })
    }

    pub fn requests(&self) -> Vec<String> {
        self.request_lines
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

/// BrasilAPI 风格的成功响应
pub fn company_body(cnpj: &str, partners: usize) -> String {
    let qsa: Vec<String> = (0..partners)
        .map(|i| {
            format!(r#"{{"nome_socio": "SOCIO {i}", "qualificacao_socio": "Sócio"}}"#)
        })
        .collect();
    format!(
        r#"{{
            "cnpj": "{cnpj}",
            "razao_social": "EMPRESA TESTE LTDA",
            "nome_fantasia": "",
            "logradouro": "RUA DAS FLORES",
            "numero": "10",
            "bairro": "CENTRO",
            "municipio": "CURITIBA",
            "uf": "PR",
            "cep": "80010000",
            "ddd_telefone_1": "4132221111",
            "data_inicio_atividade": "1999-01-31",
            "cnae_fiscal_descricao": "Desenvolvimento de software",
            "qsa": [{}]
        }}"#,
        qsa.join(",")
    )
}
