//! Contract tests for the `fetch` subcommand, served by a local HTTP mock.

mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

fn write_fetch_config(ctx: &TestContext, base_url: &str) {
    ctx.write_config(&format!(
        r#"
[fetch]
base_url = "{}"
sounds_dir = "sounds"
timeout_secs = 5
"#,
        base_url
    ));
}

#[test]
fn fetch_downloads_the_whole_table() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", mockito::Matcher::Regex(r"^/\d+_693224-lq\.ogg$".to_string()))
        .with_status(200)
        .with_header("content-type", "audio/ogg")
        .with_body(b"OggS preview bytes")
        .expect(10)
        .create();

    let ctx = TestContext::new();
    write_fetch_config(&ctx, &server.url());

    ctx.cli()
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded 10 of 10 samples"));

    for name in ["Dha", "Dhin", "Ge", "Ke", "Na", "Re", "Ta", "Te", "Tin", "Tun"] {
        let path = ctx.work_dir().join("sounds").join(format!("{}.ogg", name));
        assert_eq!(fs::read(&path).unwrap(), b"OggS preview bytes", "{} content", name);
    }
}

#[test]
fn fetch_failure_for_one_entry_never_blocks_the_rest() {
    let mut server = mockito::Server::new();
    // Only Dha's file is served; every other request falls through to the
    // mock server's 501 default.
    let _m = server
        .mock("GET", "/56144_693224-lq.ogg")
        .with_status(200)
        .with_body(b"dha bytes")
        .create();

    let ctx = TestContext::new();
    write_fetch_config(&ctx, &server.url());

    ctx.cli()
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloaded 1 of 10 samples"))
        .stderr(predicate::str::contains("Failed to download Dhin.ogg"));

    assert_eq!(fs::read(ctx.work_dir().join("sounds/Dha.ogg")).unwrap(), b"dha bytes");
    assert!(!ctx.work_dir().join("sounds/Dhin.ogg").exists());
}

#[test]
fn fetch_honors_the_sounds_dir_flag() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", mockito::Matcher::Regex(r"\.ogg$".to_string()))
        .with_status(200)
        .with_body(b"x")
        .create();

    let ctx = TestContext::new();
    write_fetch_config(&ctx, &server.url());

    ctx.cli().args(["fetch", "--sounds-dir", "elsewhere"]).assert().success();

    assert!(ctx.work_dir().join("elsewhere/Dha.ogg").exists());
    assert!(!ctx.work_dir().join("sounds").exists());
}
