use crate::common::RECENT_DATE;
use crate::common::command::{
    Playground, pushed_repository, run_gas_command, run_git_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_untracked_file_as_uncommitted_change(
    pushed_repository: Playground,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = pushed_repository.work().join("repo");
    write_file(FileSpec::new(repo.join("untracked.txt"), "new".to_string()));
    let expected = format!(r"^repo/\n  master M   origin/master {RECENT_DATE} Add files\n$");

    run_gas_command(&pushed_repository.work(), &[])
        .assert()
        .success()
        .stdout(predicate::str::is_match(expected)?);

    Ok(())
}

#[rstest]
fn report_staged_file_as_uncommitted_change(
    pushed_repository: Playground,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = pushed_repository.work().join("repo");
    write_file(FileSpec::new(repo.join("staged.txt"), "staged".to_string()));
    run_git_command(&repo, &["add", "staged.txt"])
        .assert()
        .success();
    let expected = format!(r"^repo/\n  master M   origin/master {RECENT_DATE} Add files\n$");

    run_gas_command(&pushed_repository.work(), &[])
        .assert()
        .success()
        .stdout(predicate::str::is_match(expected)?);

    Ok(())
}

#[rstest]
fn mark_only_the_checked_out_branch_as_modified(pushed_repository: Playground) {
    let repo = pushed_repository.work().join("repo");
    run_git_command(&repo, &["branch", "side"])
        .assert()
        .success();
    write_file(FileSpec::new(repo.join("untracked.txt"), "new".to_string()));

    let actual = stdout_of(&mut run_gas_command(&pushed_repository.work(), &[]));
    let rows = actual.lines().skip(1).collect::<Vec<_>>();

    assert_eq!(rows.len(), 2);
    let master = rows.iter().find(|row| row.starts_with("  master ")).expect("master row");
    let side = rows.iter().find(|row| row.starts_with("  side ")).expect("side row");
    assert!(master.starts_with("  master M   origin/master "));
    assert!(side.starts_with("  side       <none>"));
}
