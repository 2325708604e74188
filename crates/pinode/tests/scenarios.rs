mod common;

use common::{Project, RecordingManager};
use pinode::{FileAction, Operation, PinError, exit_code};

fn install(version: &str) -> Operation {
    Operation::Install {
        node_version: version.to_string(),
    }
}

fn switch(version: &str) -> Operation {
    Operation::Use {
        node_version: version.to_string(),
    }
}

#[tokio::test]
async fn install_creates_nvmrc_and_runs_install_then_use() {
    let manager = RecordingManager::available();
    let project = Project::new(&manager);
    let operation = install("18.20.0");

    let result = project.controller.execute(&operation).await;

    assert_eq!(exit_code(&operation, &result), 0);
    assert_eq!(project.read_nvmrc(), "v18.20.0");
    assert_eq!(manager.calls(), vec!["install 18.20.0", "use 18.20.0"]);
    assert_eq!(manager.probes(), 1);
}

#[tokio::test]
async fn install_without_manager_touches_nothing() {
    let manager = RecordingManager::default();
    let project = Project::new(&manager);
    let operation = install("18.20.0");

    let result = project.controller.execute(&operation).await;

    assert!(matches!(result, Err(PinError::ManagerUnavailable { .. })));
    assert_eq!(exit_code(&operation, &result), 1);
    assert!(!project.nvmrc().exists());
    assert!(manager.calls().is_empty());
}

#[tokio::test]
async fn install_failure_exits_one() {
    let manager = RecordingManager {
        fail_install: true,
        ..RecordingManager::available()
    };
    let project = Project::new(&manager);
    let operation = install("99.0.0");

    let result = project.controller.execute(&operation).await;

    assert_eq!(exit_code(&operation, &result), 1);
    assert_eq!(manager.calls(), vec!["install 99.0.0"]);
}

#[tokio::test]
async fn use_overwrites_nvmrc_and_switches() {
    let manager = RecordingManager::default();
    let project = Project::new(&manager);
    std::fs::write(project.nvmrc(), "v16.0.0").expect("seed .nvmrc");
    let operation = switch("20.0.0");

    let result = project.controller.execute(&operation).await;

    assert_eq!(exit_code(&operation, &result), 0);
    assert_eq!(project.read_nvmrc(), "v20.0.0");
    assert_eq!(manager.calls(), vec!["install 20.0.0", "use 20.0.0"]);
    assert_eq!(manager.probes(), 0);
}

#[tokio::test]
async fn use_with_unwritable_pin_stops_quietly() {
    let manager = RecordingManager::default();
    let project = Project::new(&manager);
    std::fs::create_dir(project.nvmrc()).expect("directory in place of .nvmrc");
    let operation = switch("20.0.0");

    let result = project.controller.execute(&operation).await;

    assert!(matches!(result, Err(PinError::FileAccess { .. })));
    assert_eq!(exit_code(&operation, &result), 0);
    assert!(manager.calls().is_empty());
}

#[tokio::test]
async fn auto_without_nvmrc_exits_one_without_delegate() {
    let manager = RecordingManager::available();
    let project = Project::new(&manager);

    let result = project.controller.execute(&Operation::Auto).await;

    assert!(matches!(result, Err(PinError::PinFileMissing { .. })));
    assert_eq!(exit_code(&Operation::Auto, &result), 1);
    assert!(manager.calls().is_empty());
}

#[tokio::test]
async fn auto_with_blank_nvmrc_exits_one_without_delegate() {
    let manager = RecordingManager::available();
    let project = Project::new(&manager);
    std::fs::write(project.nvmrc(), " \n").expect("seed .nvmrc");

    let result = project.controller.execute(&Operation::Auto).await;

    assert!(matches!(result, Err(PinError::EmptyVersion { .. })));
    assert_eq!(exit_code(&Operation::Auto, &result), 1);
    assert!(manager.calls().is_empty());
}

#[tokio::test]
async fn auto_with_unreadable_pin_reports_and_exits_zero() {
    let manager = RecordingManager::available();
    let project = Project::new(&manager);
    std::fs::create_dir(project.nvmrc()).expect("directory in place of .nvmrc");

    let result = project.controller.execute(&Operation::Auto).await;

    assert!(matches!(
        result,
        Err(PinError::FileAccess {
            action: FileAction::Read,
            ..
        })
    ));
    assert_eq!(exit_code(&Operation::Auto, &result), 0);
    assert!(manager.calls().is_empty());
}

#[tokio::test]
async fn auto_installs_pinned_version() {
    let manager = RecordingManager::available();
    let project = Project::new(&manager);
    std::fs::write(project.nvmrc(), "v18.20.0\n").expect("seed .nvmrc");

    let result = project.controller.execute(&Operation::Auto).await;

    assert_eq!(exit_code(&Operation::Auto, &result), 0);
    assert_eq!(manager.calls(), vec!["install v18.20.0", "use v18.20.0"]);
}
