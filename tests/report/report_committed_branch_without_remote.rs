use crate::common::RECENT_DATE;
use crate::common::command::{
    Playground, committed_repository, init_repository, playground, run_gas_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_committed_branch_without_remote(
    committed_repository: Playground,
) -> Result<(), Box<dyn std::error::Error>> {
    let expected = format!(r"^repo/\n  master     <none> {RECENT_DATE} Add files\n$");

    run_gas_command(&committed_repository.work(), &[])
        .assert()
        .success()
        .stdout(predicate::str::is_match(expected)?)
        .stderr("");

    Ok(())
}

#[rstest]
fn report_repository_without_commits(playground: Playground) {
    init_repository(&playground.work().join("repo"));

    let actual = stdout_of(&mut run_gas_command(&playground.work(), &[]));

    assert_eq!(actual, "repo/\n  master     <none>  \n");
}

#[rstest]
fn report_repository_without_commits_but_with_untracked_files(playground: Playground) {
    let repo = playground.work().join("repo");
    init_repository(&repo);
    write_file(FileSpec::new(repo.join("1.txt"), "one".to_string()));

    let actual = stdout_of(&mut run_gas_command(&playground.work(), &[]));

    assert_eq!(actual, "repo/\n  master M   <none>  \n");
}

#[rstest]
fn report_scan_root_itself_as_current_directory(
    committed_repository: Playground,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = committed_repository.work().join("repo");
    let expected = format!(r"^\./\n  master     <none> {RECENT_DATE} Add files\n$");

    run_gas_command(&repo, &[])
        .assert()
        .success()
        .stdout(predicate::str::is_match(expected)?);

    Ok(())
}
