//! Contract tests for the `tempo` and `doctor` subcommands.
//!
//! Regular files stand in for the scripting pipe pair: the command channel
//! accumulates everything the driver writes, and the response channel is
//! preloaded with one line per expected command.

mod common;

use common::TestContext;
use predicates::prelude::*;

const OK: &str = "BatchCommand finished: OK";

fn write_pipe_config(ctx: &TestContext, to: &std::path::Path, from: &std::path::Path) {
    ctx.write_config(&format!(
        r#"
[tempo]
input_dir = "in"
output_dir = "out"
to_pipe = "{}"
from_pipe = "{}"
"#,
        to.display(),
        from.display()
    ));
}

#[test]
fn tempo_drives_the_full_batch_over_the_pipes() {
    let ctx = TestContext::new();
    ctx.create_dir_with_files("in", &["tak_90_high.flac"]);
    // Open, SelectAll, three ChangeTempo/Export2 pairs, Close.
    let (to, from) = ctx.create_fake_pipes(&[OK; 9]);
    write_pipe_config(&ctx, &to, &from);

    ctx.cli()
        .arg("tempo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 1 loops (0 skipped, 3 exports)"));

    let sent = ctx.sent_commands(&to);
    assert!(sent.contains("Open: Filename="));
    assert!(sent.contains("SelectAll:\n"));
    assert!(sent.contains("ChangeTempo: Percentage=5.56\n"));
    assert!(sent.contains("ChangeTempo: Percentage=11.11\n"));
    assert!(sent.contains("ChangeTempo: Percentage=16.67\n"));
    assert!(sent.contains("tak_95_high.flac"));
    assert!(sent.contains("tak_100_high.flac"));
    assert!(sent.contains("tak_105_high.flac"));
    assert!(sent.contains("Close: Save=0\n"));
    assert!(ctx.work_dir().join("out").is_dir());
}

#[test]
fn tempo_aborts_when_pipe_is_unavailable() {
    let ctx = TestContext::new();
    ctx.create_dir_with_files("in", &["tak_90_high.flac"]);
    let missing = ctx.work_dir().join("no_such_pipe");
    write_pipe_config(&ctx, &missing, &missing);

    ctx.cli()
        .arg("tempo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mod-script-pipe"));

    // The run never got past connecting.
    assert!(!ctx.work_dir().join("out").exists());
}

#[test]
fn tempo_skips_files_without_a_parsable_bpm() {
    let ctx = TestContext::new();
    ctx.create_dir_with_files("in", &["tak.flac"]);
    let (to, from) = ctx.create_fake_pipes(&[]);
    write_pipe_config(&ctx, &to, &from);

    ctx.cli()
        .arg("tempo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 0 loops (1 skipped, 0 exports)"))
        .stderr(predicate::str::contains("Skipping 'tak.flac'"));

    assert_eq!(ctx.sent_commands(&to), "", "no commands may be issued for a skipped file");
}

#[test]
fn tempo_logs_a_failed_export_and_continues() {
    let ctx = TestContext::new();
    ctx.create_dir_with_files("in", &["tak_90_high.flac"]);
    let (to, from) =
        ctx.create_fake_pipes(&[OK, OK, OK, "export refused", OK, OK, OK, OK, OK]);
    write_pipe_config(&ctx, &to, &from);

    ctx.cli()
        .arg("tempo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 1 loops (0 skipped, 2 exports)"))
        .stderr(predicate::str::contains("Failed to export"));
}

#[test]
fn doctor_reports_a_reachable_console() {
    let ctx = TestContext::new();
    let (to, from) = ctx.create_fake_pipes(&[OK]);
    write_pipe_config(&ctx, &to, &from);

    ctx.cli()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scripting console is reachable"));

    assert_eq!(ctx.sent_commands(&to), "Help:\n");
}

#[test]
fn doctor_fails_when_console_is_unreachable() {
    let ctx = TestContext::new();
    let missing = ctx.work_dir().join("no_such_pipe");
    write_pipe_config(&ctx, &missing, &missing);

    ctx.cli()
        .arg("doctor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is unavailable"));
}
