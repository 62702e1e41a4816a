//! Architecture contract tests.

mod support;

use support::architecture::{find_lines_containing, path_exists, read_relative};

#[test]
fn cli_has_no_direct_infrastructure_imports() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["use crate::infrastructure", "crate::infrastructure::"],
    );

    assert!(
        hits.is_empty(),
        "found direct infrastructure imports in inbound CLI adapters: {hits:#?}"
    );
}

#[test]
fn cli_does_not_reach_outbound_adapters() {
    let hits = find_lines_containing(
        "src/adapter/inbound/cli",
        &["crate::adapter::outbound", "mongodb::", "quick_xml::"],
    );

    assert!(
        hits.is_empty(),
        "CLI handlers should go through the operator port: {hits:#?}"
    );
}

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "mongodb::",
            "bson::",
            "quick_xml::",
            "scraper::",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "mongodb::"],
    );
    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn ports_depend_only_on_domain() {
    let hits = find_lines_containing(
        "src/port",
        &[
            "crate::adapter",
            "crate::application",
            "crate::infrastructure",
        ],
    );
    assert!(hits.is_empty(), "ports should depend only on domain: {hits:#?}");
}

#[test]
fn operator_ports_are_transport_agnostic() {
    let hits = find_lines_containing("src/port/inbound/operator", &["std::path::Path", "PathBuf"]);
    assert!(
        hits.is_empty(),
        "operator inbound ports should not expose filesystem path types: {hits:#?}"
    );
}

#[test]
fn operator_port_combines_every_capability() {
    let source = read_relative("src/port/inbound/operator/port.rs");
    for capability in [
        "ConfigurationOperator",
        "DiagnosticOperator",
        "ImportOperator",
        "ProvisionOperator",
    ] {
        assert!(
            source.contains(capability),
            "OperatorPort should include {capability}"
        );
    }
}

#[test]
fn mongo_access_is_confined_to_its_adapter() {
    let hits: Vec<_> = find_lines_containing("src", &["use mongodb::"])
        .into_iter()
        .filter(|(path, _, _)| {
            !path.starts_with("src/adapter/outbound/mongo/") && path != "src/error.rs"
        })
        .collect();
    assert!(
        hits.is_empty(),
        "MongoDB driver used outside its adapter: {hits:#?}"
    );
}

#[test]
fn config_template_is_shipped() {
    assert!(
        path_exists("stockroom.toml.example"),
        "config init embeds stockroom.toml.example"
    );
}
