use skeleton::context::build_context;
use skeleton::settings::{Database, Logger, Router, Settings};

#[test]
fn test_enum_predicates() {
    let settings = Settings {
        logger: Logger::Zap,
        database: Database::Clickhouse,
        router: Router::Gin,
        ..Settings::new("svc", "out")
    };
    let context = build_context(&settings);

    assert_eq!(context["use_zap_logger"], true);
    assert_eq!(context["use_gokit_logger"], false);
    assert_eq!(context["use_database"], true);
    assert_eq!(context["use_clickhouse"], true);
    assert_eq!(context["use_postgresql"], false);
    assert_eq!(context["use_gin"], true);
    assert_eq!(context["use_gorilla_mux"], false);
}

#[test]
fn test_no_database() {
    let context = build_context(&Settings::new("svc", "out"));

    assert_eq!(context["use_database"], false);
    assert_eq!(context["use_clickhouse"], false);
    assert_eq!(context["use_postgresql"], false);
}

#[test]
fn test_feature_flags() {
    let settings = Settings {
        use_consul: true,
        sync_config_with_consul: true,
        use_jaeger: true,
        use_prometheus: false,
        with_dependencies: true,
        ..Settings::new("svc", "out")
    };
    let context = build_context(&settings);

    assert_eq!(context["use_consul"], true);
    assert_eq!(context["use_consul_for_configuration"], true);
    assert_eq!(context["use_jaeger"], true);
    assert_eq!(context["use_prometheus"], false);
    assert_eq!(context["with_dependencies"], true);
}

#[test]
fn test_name_variants() {
    let context = build_context(&Settings::new("billing-api", "out"));

    assert_eq!(context["module"], "billing-api");
    assert_eq!(context["module_upper"], "BILLING-API");
    assert_eq!(context["package_name"], "billing_api");
}

#[test]
fn test_context_is_pure() {
    let settings = Settings { use_jaeger: true, ..Settings::new("svc", "out") };
    assert_eq!(build_context(&settings), build_context(&settings));
}
