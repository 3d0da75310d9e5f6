//! 文件日志
//!
//! 终端被 UI 占用，日志写入 `{cache_dir}/cnpj-lookup/cnpj-lookup.log`。
//! 级别默认 info，可用 `RUST_LOG` 覆盖。库里的 `log` 记录经
//! tracing-subscriber 的 tracing-log 桥接进入同一个文件。

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{Builder, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "cnpj-lookup.log";

/// 初始化日志
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
/// 日志文件无法创建时不记录日志，返回 `None`。
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = dirs::cache_dir()?.join("cnpj-lookup");
    let appender = Builder::new()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(&dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .ok()?;

    tracing::info!(
        "Starting CNPJ Lookup v{}, logging to {}",
        env!("CARGO_PKG_VERSION"),
        dir.join(LOG_FILE).display()
    );
    Some(guard)
}
