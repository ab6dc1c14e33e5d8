#![cfg(unix)]

use launchpick::launcher::{launch, LaunchOutcome};

use crate::common::entry;

#[tokio::test]
async fn successful_child_reports_exit_code_zero() {
    let outcome = launch(&entry("echo", &["hi"], &[]))
        .await
        .expect("spawn precondition holds");
    assert_eq!(outcome, LaunchOutcome::Exited(0));
}

#[tokio::test]
async fn non_zero_exit_code_is_reported_not_raised() {
    let outcome = launch(&entry("exit", &["7"], &[]))
        .await
        .expect("spawn precondition holds");
    assert_eq!(outcome, LaunchOutcome::Exited(7));
}

#[tokio::test]
async fn shell_operators_in_the_configuration_are_honored() {
    let outcome = launch(&entry("true", &["&&", "exit", "5"], &[]))
        .await
        .expect("spawn precondition holds");
    assert_eq!(outcome, LaunchOutcome::Exited(5));
}

#[tokio::test]
async fn entry_env_overrides_reach_the_child() {
    let outcome = launch(&entry(
        "test",
        &["\"$LAUNCHPICK_OVERRIDE\"", "=", "from-entry"],
        &[("LAUNCHPICK_OVERRIDE", "from-entry")],
    ))
    .await
    .expect("spawn precondition holds");
    assert_eq!(outcome, LaunchOutcome::Exited(0));
}

#[tokio::test]
async fn inherited_environment_passes_through_unchanged() {
    std::env::set_var("LAUNCHPICK_INHERITED", "from-parent");
    let outcome = launch(&entry(
        "test",
        &["\"$LAUNCHPICK_INHERITED\"", "=", "from-parent"],
        &[],
    ))
    .await
    .expect("spawn precondition holds");
    std::env::remove_var("LAUNCHPICK_INHERITED");
    assert_eq!(outcome, LaunchOutcome::Exited(0));
}

#[tokio::test]
async fn unknown_command_surfaces_through_the_shell_exit_code() {
    // The shell itself starts fine, so a bad executable is a `close` with the
    // shell's command-not-found code rather than a spawn failure.
    let outcome = launch(&entry("launchpick-no-such-command-462193", &[], &[]))
        .await
        .expect("spawn precondition holds");
    assert_eq!(outcome, LaunchOutcome::Exited(127));
}
