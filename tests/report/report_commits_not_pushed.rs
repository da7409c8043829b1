use crate::common::RECENT_DATE;
use crate::common::command::{
    Playground, commit_generated_files, pushed_repository, run_gas_command, run_git_command,
};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn print_nothing_when_everything_is_pushed(pushed_repository: Playground) {
    run_gas_command(&pushed_repository.work(), &[])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[rstest]
fn print_pushed_branches_when_asked_for_all(
    pushed_repository: Playground,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected = format!(r"^repo/\n  master     origin/master {RECENT_DATE} Add files\n$");

    run_gas_command(&pushed_repository.work(), &["--all"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(expected)?);

    Ok(())
}

#[rstest]
fn report_commits_ahead_of_upstream(
    pushed_repository: Playground,
) -> Result<(), Box<dyn std::error::Error>> {
    commit_generated_files(&pushed_repository.work().join("repo"), "Add more files");
    let expected =
        format!(r"^repo/\n  master  ↑  origin/master {RECENT_DATE} Add more files\n$");

    run_gas_command(&pushed_repository.work(), &[])
        .assert()
        .success()
        .stdout(predicate::str::is_match(expected)?);

    Ok(())
}

#[rstest]
fn print_nothing_once_commits_are_pushed(
    pushed_repository: Playground,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = pushed_repository.work().join("repo");
    commit_generated_files(&repo, "Add more files");
    let expected =
        format!(r"^repo/\n  master  ↑  origin/master {RECENT_DATE} Add more files\n$");

    run_gas_command(&pushed_repository.work(), &["-e"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_match(expected)?);

    run_git_command(&repo, &["push", "--quiet"])
        .assert()
        .success();

    run_gas_command(&pushed_repository.work(), &["-e"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}
