//! Integration tests for manifest-driven detection and reflection hints output

use std::fs;
use tempfile::tempdir;
use webmode_core::detector::{ReflectionHints, WebApplicationTypeDetector};
use webmode_core::models::{ApplicationMode, ModuleContext, REACTIVE_INDICATOR};
use webmode_core::oracle::{ManifestError, ModuleManifest};

#[test]
fn test_detect_from_toml_manifest() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("modules.toml");
    fs::write(
        &path,
        r#"
present = [
    "jakarta.servlet.Servlet",
    "org.springframework.web.context.ConfigurableWebApplicationContext",
    "org.springframework.web.servlet.DispatcherServlet",
]
"#,
    )
    .unwrap();

    let oracle = ModuleManifest::load(&path).unwrap().into_module_set();
    let detector = WebApplicationTypeDetector::new(oracle);
    assert_eq!(detector.deduce(), ApplicationMode::Servlet);
}

#[test]
fn test_detect_from_yaml_manifest() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("modules.yaml");
    fs::write(
        &path,
        "present:\n  - org.springframework.web.reactive.DispatcherHandler\n",
    )
    .unwrap();

    let oracle = ModuleManifest::load(&path).unwrap().into_module_set();
    assert_eq!(
        WebApplicationTypeDetector::new(oracle).deduce(),
        ApplicationMode::Reactive
    );
}

#[test]
fn test_context_only_modules_affect_hints_not_mode() {
    let temp_dir = tempdir().unwrap();
    let manifest_path = temp_dir.path().join("modules.toml");
    fs::write(
        &manifest_path,
        r#"
[contexts.aot]
present = ["org.springframework.web.reactive.DispatcherHandler"]
"#,
    )
    .unwrap();

    let oracle = ModuleManifest::load(&manifest_path).unwrap().into_module_set();
    let detector = WebApplicationTypeDetector::new(oracle);
    assert_eq!(detector.deduce(), ApplicationMode::None);

    let mut hints = ReflectionHints::new();
    let aot = ModuleContext::new("aot");
    assert_eq!(detector.register_hints(&mut hints, Some(&aot)), 1);
    assert!(hints.contains(&REACTIVE_INDICATOR));

    let hints_path = temp_dir.path().join("reflect-config.json");
    hints.write_to_file(&hints_path).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&hints_path).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!([{ "name": "org.springframework.web.reactive.DispatcherHandler" }])
    );
}

#[test]
fn test_missing_manifest_is_io_error() {
    let temp_dir = tempdir().unwrap();
    let err = ModuleManifest::load(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ManifestError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_unsupported_extension_rejected_before_reading() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("modules.json");
    let err = ModuleManifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::UnsupportedFormat { .. }));
}
