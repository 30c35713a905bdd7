use anyhow::{Context, Result};
use clap::Parser;
use registry::Registry;
use server::{app::ApplicationServer, services::Services};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use utils::{AppConfig, EnvLoader, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    let tracker = BusTracker::new()?;
    tracker.run().await
}

pub struct BusTracker {
    services: Services,
    config: Arc<AppConfig>,
    // 必须存活到进程退出，否则缓冲中的日志会丢失
    _log_guard: WorkerGuard,
}

impl BusTracker {
    pub fn new() -> Result<Self> {
        let config = BusTracker::with_config()?;
        let log_guard = Logger::new(&config);
        let services = BusTracker::with_services(&config)?;

        Ok(Self {
            services,
            config,
            _log_guard: log_guard,
        })
    }

    pub async fn run(self) -> Result<()> {
        info!(
            "🚌 Starting bus-tracker (env={:?}, port={})",
            self.config.cargo_env, self.config.app_port
        );

        ApplicationServer::serve(self.config.clone(), self.services.clone())
            .await
            .context("🔴 Failed to start server")
    }
}

impl BusTracker {
    fn with_config() -> Result<Arc<AppConfig>> {
        // 根据 CARGO_ENV 加载对应的环境配置文件
        EnvLoader::load_env_file().context("🔴 Failed to load env file")?;
        Ok(Arc::new(AppConfig::parse()))
    }

    fn with_services(config: &AppConfig) -> Result<Services> {
        let registry = Registry::new(config)?;
        Ok(Services::new(registry))
    }
}
