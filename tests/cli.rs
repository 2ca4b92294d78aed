mod common;

use std::io::Write;

use common::{ago, closed_port, cmd, serve_once, status_body};
use predicates::prelude::*;
use predicates::str::{contains, starts_with};

#[test]
fn help_exits_cleanly() {
    cmd().arg("--help").assert().success().stdout(contains("cores"));
    cmd()
        .args(["cores", "--help"])
        .assert()
        .success()
        .stdout(contains("--docs-critical"));
}

#[test]
fn missing_host_is_unknown() {
    cmd()
        .arg("cores")
        .assert()
        .code(3)
        .stdout(starts_with("UNKNOWN - "));
}

#[test]
fn bad_time_unit_is_unknown() {
    cmd()
        .args(["cores", "localhost", "--time", "fortnights"])
        .assert()
        .code(3)
        .stdout(starts_with("UNKNOWN - "));
}

#[test]
fn bad_regex_is_unknown() {
    cmd()
        .args(["cores", "localhost", "--regex", "(unclosed"])
        .assert()
        .code(3)
        .stdout(starts_with("UNKNOWN - invalid core name regex"));
}

#[test]
fn healthy_cores_are_ok() {
    let body = status_body(0, &[("books", 1250, ago(3 * 3_600)), ("authors", 40, ago(600))]);
    let port = serve_once("200 OK", &body);

    cmd()
        .args(["cores", "127.0.0.1", "-p", &port.to_string()])
        .assert()
        .code(0)
        .stdout(starts_with(
            "OK - Oldest core is 3 hours old. Smallest core has 40 docs. Request completed in ",
        ))
        .stdout(contains(" | authors.numDocs=40;;;0 authors.age="))
        .stdout(contains(" books.numDocs=1250;;;0 books.age="));
}

#[test]
fn low_doc_count_is_critical() {
    let body = status_body(0, &[("books", 1250, ago(60))]);
    let port = serve_once("200 OK", &body);

    cmd()
        .args([
            "cores",
            "127.0.0.1",
            "-p",
            &port.to_string(),
            "--docs-critical",
            "5000",
        ])
        .assert()
        .code(2)
        .stdout(starts_with("CRITICAL - Solr core books has 1,250 docs. | "));
}

#[test]
fn stale_index_is_warning() {
    let body = status_body(0, &[("books", 1250, ago(2 * 3_600))]);
    let port = serve_once("200 OK", &body);

    cmd()
        .args([
            "cores",
            "127.0.0.1",
            "-p",
            &port.to_string(),
            "-t",
            "hours",
            "--age-warning",
            "1",
            "--age-critical",
            "6",
        ])
        .assert()
        .code(1)
        .stdout(starts_with("WARNING - Solr core books is 2 hours old."))
        .stdout(contains("books.age=2"));
}

#[test]
fn nonzero_solr_status_is_critical() {
    let body = status_body(1, &[("books", 1250, ago(60))]);
    let port = serve_once("200 OK", &body);

    cmd()
        .args(["cores", "127.0.0.1", "-p", &port.to_string()])
        .assert()
        .code(2)
        .stdout(starts_with(
            "CRITICAL - Unexpected solr status. Solr status 1 returned.",
        ));
}

#[test]
fn regex_excluding_every_core_finds_none() {
    let body = status_body(0, &[("books", 1250, ago(60))]);
    let port = serve_once("200 OK", &body);

    cmd()
        .args(["cores", "127.0.0.1", "-p", &port.to_string(), "-r", "^authors"])
        .assert()
        .code(2)
        .stdout("CRITICAL - No cores found.\n");
}

#[test]
fn http_error_is_critical() {
    let port = serve_once("500 Internal Server Error", "{}");

    cmd()
        .args(["cores", "127.0.0.1", "-p", &port.to_string()])
        .assert()
        .code(2)
        .stdout("CRITICAL - Unexpected status code. HTTP 500 returned.\n");
}

#[test]
fn malformed_body_is_critical() {
    let port = serve_once("200 OK", "<html>oops</html>");

    cmd()
        .args(["cores", "127.0.0.1", "-p", &port.to_string()])
        .assert()
        .code(2)
        .stdout(starts_with("CRITICAL - Unexpected solr response. "));
}

#[test]
fn unreachable_host_is_critical() {
    let port = closed_port();

    cmd()
        .args(["cores", "127.0.0.1", "-p", &port.to_string()])
        .assert()
        .code(2)
        .stdout(starts_with("CRITICAL - "))
        .stdout(contains("|").not());
}

#[test]
fn config_file_supplies_thresholds() {
    let body = status_body(0, &[("books", 3, ago(60))]);
    let port = serve_once("200 OK", &body);

    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "port = {}\ndocs_warning = 10", port).expect("write config");

    cmd()
        .args(["--config"])
        .arg(config.path())
        .args(["cores", "127.0.0.1"])
        .assert()
        .code(1)
        .stdout(starts_with("WARNING - Solr core books has 3 docs."));
}

#[test]
fn flags_override_config_file() {
    let body = status_body(0, &[("books", 3, ago(60))]);
    let port = serve_once("200 OK", &body);

    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "port = 1\ndocs_warning = 10").expect("write config");

    cmd()
        .arg("--config")
        .arg(config.path())
        .args(["cores", "127.0.0.1", "-p", &port.to_string(), "--docs-critical", "5"])
        .assert()
        .code(2)
        .stdout(starts_with("CRITICAL - Solr core books has 3 docs."));
}

#[test]
fn environment_supplies_thresholds() {
    let body = status_body(0, &[("books", 3, ago(60))]);
    let port = serve_once("200 OK", &body);

    cmd()
        .args(["cores", "127.0.0.1", "-p", &port.to_string()])
        .env("SOLRWATCH_DOCS_CRITICAL", "5")
        .assert()
        .code(2)
        .stdout(starts_with("CRITICAL - Solr core books has 3 docs."));
}

#[test]
fn environment_overrides_config_file() {
    let body = status_body(0, &[("books", 3, ago(60))]);
    let port = serve_once("200 OK", &body);

    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "port = 1\ndocs_warning = 10\ndocs_critical = 1").expect("write config");

    cmd()
        .arg("--config")
        .arg(config.path())
        .args(["cores", "127.0.0.1"])
        .env("SOLRWATCH_PORT", port.to_string())
        .env("SOLRWATCH_DOCS_CRITICAL", "5")
        .assert()
        .code(2)
        .stdout(starts_with("CRITICAL - Solr core books has 3 docs."));
}

#[test]
fn flags_override_environment() {
    let body = status_body(0, &[("books", 3, ago(60))]);
    let port = serve_once("200 OK", &body);

    cmd()
        .args(["cores", "127.0.0.1", "-p", &port.to_string(), "--docs-critical", "1"])
        .env("SOLRWATCH_PORT", "1")
        .env("SOLRWATCH_DOCS_CRITICAL", "5")
        .assert()
        .code(0)
        .stdout(starts_with("OK - Oldest core is "));
}

#[test]
fn logs_stay_off_stdout() {
    let port = closed_port();

    cmd()
        .args(["-vv", "cores", "127.0.0.1", "-p", &port.to_string()])
        .env_remove("RUST_LOG")
        .assert()
        .code(2)
        .stdout(predicate::str::is_match("^CRITICAL - [^\n]*\n$").unwrap());
}
