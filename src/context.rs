//! Render context construction.
//! Turns settings into the single set of variables every template reads from.

use cruet::Inflector;
use serde_json::json;

use crate::settings::{Database, Logger, Router, Settings};

/// Builds the render context for a generation run.
///
/// Enum choices are flattened into `use_*` booleans so templates can branch
/// on their own variant without knowing the full set of options. Templates
/// read only the keys they need.
///
/// # Arguments
/// * `settings` - Settings of the current run
///
/// # Returns
/// * `serde_json::Value` - JSON object with string and boolean bindings
pub fn build_context(settings: &Settings) -> serde_json::Value {
    let name = settings.project_name.as_str();

    json!({
        "module": name,
        "module_upper": name.to_uppercase(),
        "package_name": name.to_snake_case(),
        "use_gokit_logger": settings.logger == Logger::GoKit,
        "use_zap_logger": settings.logger == Logger::Zap,
        "use_database": settings.database != Database::None,
        "use_clickhouse": settings.database == Database::Clickhouse,
        "use_postgresql": settings.database == Database::Postgresql,
        "use_gorilla_mux": settings.router == Router::GorillaMux,
        "use_gin": settings.router == Router::Gin,
        "use_consul": settings.use_consul,
        "use_consul_for_configuration": settings.sync_config_with_consul,
        "use_jaeger": settings.use_jaeger,
        "use_prometheus": settings.use_prometheus,
        "with_dependencies": settings.with_dependencies,
    })
}
