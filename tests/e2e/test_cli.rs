use crate::e2e::helpers;

use helpers::TestContext;
use predicates::prelude::*;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test(flavor = "multi_thread")]
async fn it_should_print_help_and_exit_0(ctx: &TestContext) {
    ctx.command()
        .arg("-help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--voice"));
}

#[test_context(TestContext)]
#[tokio::test(flavor = "multi_thread")]
async fn it_should_print_version_and_exit_0(ctx: &TestContext) {
    ctx.command()
        .arg("--version")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test_context(TestContext)]
#[tokio::test(flavor = "multi_thread")]
async fn it_should_exit_1_when_output_flag_missing(ctx: &TestContext) {
    ctx.command()
        .args(["-text", "Hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error parsing flags"));

    ctx.assert_no_network_calls().await;
}

#[test_context(TestContext)]
#[tokio::test(flavor = "multi_thread")]
async fn it_should_exit_1_for_non_numeric_rate(ctx: &TestContext) {
    ctx.command()
        .args(["-text", "Hello", "-rate", "fast", "-o", "out.mp3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error parsing flags"));

    ctx.assert_no_network_calls().await;
}

#[test_context(TestContext)]
#[tokio::test(flavor = "multi_thread")]
async fn it_should_exit_3_for_invalid_configuration(ctx: &TestContext) {
    ctx.command()
        .env("REQUEST_TIMEOUT_SECS", "never")
        .args(["-text", "Hello", "-o", "out.mp3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error loading configuration"));

    ctx.assert_no_network_calls().await;
}

#[test_context(TestContext)]
#[tokio::test(flavor = "multi_thread")]
async fn it_should_log_json_to_stderr_only(ctx: &TestContext) {
    ctx.mock_translation("Привет", 1).await;
    ctx.mock_synthesis(&[1], 1).await;

    ctx.command()
        .env("LOG_FORMAT", "json")
        .env("RUST_LOG", "en2ru_speech=info")
        .args(["-text", "Hello", "-o", "out.mp3"])
        .assert()
        .code(0)
        .stdout("Speech synthesis completed successfully.\n")
        .stderr(predicate::str::contains("\"level\":\"INFO\""));
}
