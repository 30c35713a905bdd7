use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq)]
#[clap(rename_all = "lowercase")]
pub enum CargoEnv {
    #[value(alias = "dev")]
    Development,
    #[value(alias = "prod")]
    Production,
    Test,
}

/// 环境配置加载器
pub struct EnvLoader;

impl EnvLoader {
    /// 根据 CARGO_ENV 加载对应的环境配置文件
    ///
    /// 此时日志系统尚未初始化，所以这里直接输出到标准输出。
    pub fn load_env_file() -> Result<(), dotenvy::Error> {
        let cargo_env = std::env::var("CARGO_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = Self::env_file_for(&cargo_env);

        if !std::path::Path::new(env_file).exists() {
            // 回退到默认的 .env 文件
            if std::path::Path::new(".env").exists() {
                dotenvy::from_filename(".env")?;
                println!("✅ 已加载默认配置文件: .env");
            } else {
                println!("⚠️  未找到 {} 或 .env，使用命令行参数和默认配置", env_file);
            }
            return Ok(());
        }

        dotenvy::from_filename(env_file)?;
        println!("✅ 已加载环境配置文件: {} (CARGO_ENV={})", env_file, cargo_env);

        Ok(())
    }

    /// 与 `CargoEnv` 的解析保持一致，不区分大小写
    fn env_file_for(cargo_env: &str) -> &'static str {
        match cargo_env.to_ascii_lowercase().as_str() {
            "production" | "prod" => ".env.production",
            "test" => ".env.test",
            _ => ".env.development",
        }
    }
}

#[derive(clap::Parser, Clone, Debug)]
#[clap(name = "bus-tracker", about = "Real-time bus position registry")]
pub struct AppConfig {
    #[clap(long, env, value_enum, ignore_case = true, default_value = "development")]
    pub cargo_env: CargoEnv,

    #[clap(long, env, default_value = "0.0.0.0")]
    pub app_host: String,

    /// 监听端口，部署平台通常通过 PORT 注入
    #[clap(long = "port", env = "PORT", default_value = "10000")]
    pub app_port: u16,

    #[clap(long, env, default_value = "info")]
    pub rust_log: String,

    /// 生产环境日志目录
    #[clap(long, env)]
    pub log_dir: Option<PathBuf>,

    /// 公交线路 GeoJSON 文件 (FeatureCollection)
    #[clap(long, env)]
    pub lines_geojson: Option<PathBuf>,

    #[clap(long, env, default_value = "30")]
    pub http_timeout_secs: u64,
}

impl AppConfig {
    /// 手动创建配置实例（用于测试）
    pub fn new_for_test() -> Self {
        Self {
            cargo_env: CargoEnv::Development,
            app_host: "127.0.0.1".to_string(),
            app_port: 0,
            rust_log: "debug".to_string(),
            log_dir: None,
            lines_geojson: None,
            http_timeout_secs: 30,
        }
    }
}
