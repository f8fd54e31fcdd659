//! Batch upgrades of files on disk.

use std::path::PathBuf;

use smithy_upgrade::model::{Model, ShapeType, Trait, TraitKind};
use smithy_upgrade::upgrade::{UpgradeError, resolve_model_files, upgrade_files};
use smithy_upgrade::{SourceLocation, UpgradeOptions, upgrade};
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use crate::helpers::*;

struct Workspace {
    _dir: TempDir,
    good: PathBuf,
    desync: PathBuf,
    json: PathBuf,
    model: Model,
}

fn path_str(path: &PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

/// Two IDL files and a JSON model file. The model's locations for
/// `desync.smithy` point past the end of its text.
fn workspace() -> Workspace {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.smithy");
    let desync = dir.path().join("desync.smithy");
    let json = dir.path().join("model.json");

    let (good_fx, good_model) = mixed_model(&path_str(&good));
    std::fs::write(&good, &good_fx.text).unwrap();

    let desync_text = "namespace smithy.example\n\n@box\ninteger Short\n";
    std::fs::write(&desync, desync_text).unwrap();
    std::fs::write(&json, "{}").unwrap();

    let desync_file = path_str(&desync);
    let broken = smithy_upgrade::model::Shape::new(
        id("smithy.example#Short"),
        ShapeType::Integer,
        SourceLocation::new(desync_file.as_str(), 40, 1),
    )
    .with_trait(Trait::annotation(
        TraitKind::Box,
        SourceLocation::new(desync_file.as_str(), 39, 1),
    ));
    let from_json = smithy_upgrade::model::Shape::new(
        id("smithy.example#FromJson"),
        ShapeType::String,
        SourceLocation::new(path_str(&json).as_str(), 1, 1),
    );
    let from_jar = smithy_upgrade::model::Shape::new(
        id("smithy.example#FromJar"),
        ShapeType::String,
        SourceLocation::new("jar:file:/deps.jar!/META-INF/smithy/a.smithy", 1, 1),
    );

    let model = Model::builder()
        .add_shapes(good_model.shapes().cloned())
        .add_shape(broken)
        .add_shape(from_json)
        .add_shape(from_jar)
        .build();

    Workspace {
        _dir: dir,
        good,
        desync,
        json,
        model,
    }
}

#[test]
fn test_resolve_model_files() {
    let ws = workspace();
    let root = ws.good.parent().unwrap().to_path_buf();

    let files = resolve_model_files(&ws.model, &[root]);
    assert_eq!(files, vec![ws.desync.clone(), ws.good.clone()]);
    assert!(!files.contains(&ws.json));

    let elsewhere = resolve_model_files(&ws.model, &[PathBuf::from("/nonexistent")]);
    assert!(elsewhere.is_empty());
}

#[test]
fn test_desynchronized_file_does_not_stop_its_siblings() {
    let ws = workspace();
    let files = vec![ws.good.clone(), ws.desync.clone()];

    let report = upgrade_files(
        &ws.model,
        &files,
        UpgradeOptions::default(),
        &CancellationToken::new(),
    );

    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files[0].path, ws.good);
    assert_eq!(report.files[0].result.as_ref().unwrap().text, MIXED_V2);
    assert!(report.files[1].result.as_ref().unwrap_err().is_desync());
    assert!(!report.is_success());

    let summary = report.summary();
    assert_eq!(summary.upgraded, vec![ws.good.clone()]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, ws.desync);
    assert!(summary.cancelled.is_empty());

    // Nothing is written back.
    assert_eq!(std::fs::read_to_string(&ws.good).unwrap(), MIXED_V1);
}

#[test]
fn test_cancelled_batch_starts_no_files() {
    let ws = workspace();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let report = upgrade_files(
        &ws.model,
        &[ws.good.clone(), ws.desync.clone()],
        UpgradeOptions::default(),
        &cancel,
    );

    assert!(
        report
            .files
            .iter()
            .all(|f| matches!(f.result, Err(UpgradeError::Cancelled { .. })))
    );
    assert_eq!(report.summary().cancelled.len(), 2);
}

#[test]
fn test_upgrade_reads_the_file() {
    let ws = workspace();
    assert_eq!(upgrade(&ws.model, &ws.good).unwrap(), MIXED_V2);

    let missing = ws.good.with_file_name("missing.smithy");
    assert!(matches!(
        upgrade(&ws.model, &missing),
        Err(UpgradeError::Io { .. })
    ));
}
