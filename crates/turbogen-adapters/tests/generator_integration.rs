//! End-to-end generation runs: real `GeneratorService` wired to the
//! adapters in this crate.

use std::path::{Path, PathBuf};

use turbogen_adapters::{BuiltinTemplates, LocalFilesystem, MemoryFilesystem, MemoryTemplates};
use turbogen_core::{
    application::{GeneratorService, validate_workspace_context},
    domain::EntityKind,
};

fn memory_service(fs: &MemoryFilesystem) -> GeneratorService {
    GeneratorService::new(Box::new(fs.clone()), Box::new(BuiltinTemplates::new()))
}

#[test]
fn service_under_apps_lands_in_src_services() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs);

    let report = service
        .create_entity(
            EntityKind::Service,
            "checkout",
            Path::new("/repo/apps/orders"),
        )
        .unwrap();

    let expected = PathBuf::from("/repo/apps/orders/src/services/checkout/checkout.service.ts");
    assert_eq!(report.resolve(&report.files[0]), expected);

    let content = fs.read_file(&expected).unwrap();
    assert!(content.contains("checkout"), "name not substituted");
    assert!(!content.contains("{{"), "placeholder left in output");
}

#[test]
fn app_at_root_produces_all_ten_files() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs);

    let report = service
        .create_entity(EntityKind::App, "payments", Path::new("/repo"))
        .unwrap();

    assert_eq!(report.output_dir, PathBuf::from("/repo/apps/payments"));
    assert_eq!(report.file_count(), 10);

    let expected = [
        "src/routes/v1/router.ts",
        "src/index.ts",
        "Dockerfile",
        "eslint.config.js",
        "package.json",
        "sonar-project.properties",
        "tsconfig.json",
        "vitest.config.ts",
        "src/controllers/payments/payments.controller.ts",
        "src/services/payments/payments.service.ts",
    ];
    for rel in expected {
        let path = report.output_dir.join(rel);
        let content = fs
            .read_file(&path)
            .unwrap_or_else(|| panic!("missing output file: {rel}"));
        assert!(!content.is_empty(), "empty output file: {rel}");
        assert!(!content.contains("{{"), "placeholder left in {rel}");
    }
}

#[test]
fn package_gets_index_ts_under_src() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs);

    let report = service
        .create_entity(EntityKind::Package, "logger", Path::new("/repo"))
        .unwrap();

    assert_eq!(
        report.output_dir,
        PathBuf::from("/repo/packages/logger/src")
    );
    assert_eq!(report.files, vec![PathBuf::from("index.ts")]);
    assert!(
        fs.read_file(Path::new("/repo/packages/logger/src/index.ts"))
            .unwrap()
            .contains("logger")
    );
}

#[test]
fn name_is_lowercased_before_any_path_decision() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs);

    let report = service
        .create_entity(EntityKind::Controller, "Billing", Path::new("/repo/apps/x"))
        .unwrap();

    assert_eq!(report.name, "billing");
    assert!(
        fs.read_file(
            &report.output_dir.join("billing.controller.ts")
        )
        .is_some()
    );
}

#[test]
fn rerun_with_same_inputs_overwrites() {
    let fs = MemoryFilesystem::new();
    let service = memory_service(&fs);

    service
        .create_entity(EntityKind::Middleware, "auth", Path::new("/repo/apps/x"))
        .unwrap();
    let first_count = fs.file_count();

    service
        .create_entity(EntityKind::Middleware, "auth", Path::new("/repo/apps/x"))
        .unwrap();
    assert_eq!(fs.file_count(), first_count, "rerun must not add files");
}

#[test]
fn failure_is_immediate_and_leaves_no_partial_files_for_missing_template() {
    // A provider with no resources fails on the very first read.
    let fs = MemoryFilesystem::new();
    let service = GeneratorService::new(Box::new(fs.clone()), Box::new(MemoryTemplates::new()));

    let err = service
        .create_entity(EntityKind::App, "shop", Path::new("/repo"))
        .unwrap_err();

    assert!(err.to_string().contains("router.ts.tmpl"));
    assert_eq!(fs.file_count(), 0, "no file may be written after a failure");
}

#[test]
fn context_validation_blocks_before_creation() {
    let fs = MemoryFilesystem::new();

    // Bare directory: neither markers nor path substrings.
    let err =
        validate_workspace_context(EntityKind::App, Path::new("/home/me/scratch"), &fs).unwrap_err();
    assert!(err.to_string().contains("monorepo root"));
    assert_eq!(fs.file_count(), 0);

    // Root marker file makes the same directory acceptable.
    let fs = MemoryFilesystem::new().with_file("/home/me/scratch/turbo.json", "{}");
    assert!(validate_workspace_context(EntityKind::App, Path::new("/home/me/scratch"), &fs).is_ok());
}

// ── real filesystem ───────────────────────────────────────────────────────────

#[test]
fn app_scaffold_on_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let service = GeneratorService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplates::new()),
    );

    let report = service
        .create_entity(EntityKind::App, "shop", tmp.path())
        .unwrap();

    for rel in &report.files {
        let path = report.resolve(rel);
        let meta = std::fs::metadata(&path)
            .unwrap_or_else(|_| panic!("missing file: {}", path.display()));
        assert!(meta.len() > 0, "empty file: {}", path.display());
    }

    let package_json =
        std::fs::read_to_string(tmp.path().join("apps/shop/package.json")).unwrap();
    assert!(package_json.contains("\"@shop/shop\""));
}

#[test]
fn service_scaffold_on_disk_inside_apps_path() {
    let tmp = tempfile::tempdir().unwrap();
    let app_dir = tmp.path().join("apps/orders");
    std::fs::create_dir_all(&app_dir).unwrap();

    let service = GeneratorService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplates::new()),
    );

    let report = service
        .create_entity(EntityKind::Service, "checkout", &app_dir)
        .unwrap();

    let file = report.resolve(&report.files[0]);
    assert!(file.ends_with("src/services/checkout/checkout.service.ts"));
    let content = std::fs::read_to_string(&file).unwrap();
    assert!(content.contains("CheckoutService"));
}
