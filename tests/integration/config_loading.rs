use launchpick::{
    config::{load_from_path, LaunchEntry},
    lib::{errors::LaunchFileError, jsonc::strip_line_comments},
};

use crate::common::project_with_launch_file;

#[test]
fn absent_launch_file_fails_before_any_prompt() {
    let temp = tempfile::TempDir::new().expect("can create temporary project");
    let path = temp.path().join(".vscode/launch.json");

    let error = load_from_path(&path).expect_err("missing file should fail");
    assert!(matches!(error, LaunchFileError::NotFound { .. }));
}

#[test]
fn zero_configurations_fail_before_any_prompt() {
    let (_temp, path) = project_with_launch_file(r#"{"configurations": []}"#);

    let error = load_from_path(&path).expect_err("empty list should fail");
    assert!(matches!(error, LaunchFileError::EmptyConfigurations { .. }));
}

#[test]
fn comment_strip_matches_manual_comment_removal() {
    let commented = "{\"name\": \"X\", // comment\n \"runtimeExecutable\": \"y\"}";
    let plain = "{\"name\": \"X\", \n \"runtimeExecutable\": \"y\"}";

    let from_commented: LaunchEntry =
        serde_json::from_str(&strip_line_comments(commented)).expect("stripped text parses");
    let from_plain: LaunchEntry = serde_json::from_str(plain).expect("plain text parses");
    assert_eq!(from_commented, from_plain);
}

#[test]
fn reloading_an_unchanged_file_is_idempotent() {
    let (_temp, path) = project_with_launch_file(
        concat!(
            "{\n",
            "  \"configurations\": [\n",
            "    {\"name\": \"Dev\", \"runtimeExecutable\": \"npm\", \"runtimeArgs\": [\"run\", \"dev\"]}, // default\n",
            "    {\"runtimeExecutable\": \"cargo\", \"env\": {\"RUST_BACKTRACE\": \"1\"}}\n",
            "  ]\n",
            "}\n",
        ),
    );

    let first = load_from_path(&path).expect("first load succeeds");
    let second = load_from_path(&path).expect("second load succeeds");
    assert_eq!(first, second);
    assert_eq!(first.configurations.len(), 2);
    assert_eq!(first.configurations[1].display_name(), "Unnamed");
}
