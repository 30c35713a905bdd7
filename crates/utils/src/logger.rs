use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{AppConfig, CargoEnv};

pub struct Logger;
impl Logger {
    /// 初始化全局日志，返回的 guard 必须存活到进程退出，否则缓冲区中的日志会丢失
    pub fn new(config: &AppConfig) -> WorkerGuard {
        let (non_blocking, guard) = match config.cargo_env {
            CargoEnv::Development | CargoEnv::Test => tracing_appender::non_blocking(std::io::stdout()),
            CargoEnv::Production => {
                let log_directory = Self::prepare_log_directory(config.log_dir.clone());
                let file_logger = tracing_appender::rolling::daily(&log_directory, "log");
                tracing_appender::non_blocking(file_logger)
            }
        };

        // env var `RUST_LOG` 优先，其次是配置里的默认级别
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Self::default_directive(&config.rust_log)));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(false),
            )
            .init();

        guard
    }

    fn default_directive(level: &str) -> String {
        format!("{level},tower_http=debug")
    }

    /// 创建日志目录，失败时回退到当前目录下的 logs
    fn prepare_log_directory(log_dir: Option<PathBuf>) -> PathBuf {
        let log_directory = Self::get_log_directory(log_dir);

        if let Err(e) = std::fs::create_dir_all(&log_directory) {
            eprintln!("⚠️ 无法创建日志目录 {:?}: {}，回退到 ./logs", log_directory, e);
            let fallback = PathBuf::from("logs");
            std::fs::create_dir_all(&fallback).ok();
            return fallback;
        }

        println!("✅ 日志将输出到目录: {:?}", log_directory);
        log_directory
    }

    fn get_log_directory(log_dir: Option<PathBuf>) -> PathBuf {
        if let Some(dir) = log_dir {
            return dir;
        }

        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                return exe_dir.join("logs");
            }
        }

        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("logs")
    }
}
