// jsqueeze/tests/cli_integration_tests.rs
//! End-to-end tests for the `jsqueeze` binary.
//!
//! Every test points the cache at its own temporary directory, either with
//! `--cache-dir` or through `JSQUEEZE_CACHE_DIR`, so runs never touch the
//! user's real cache and never see each other's entries.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, NamedTempFile};
use test_log::test;

const SOURCE: &str = "// greeting\nvar greeting = 'hi';  /* shout */\nalert( greeting );\n";
const MINIFIED: &str = "var greeting='hi';alert(greeting);";

fn jsqueeze(cache_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("jsqueeze"));
    cmd.env("RUST_LOG", "warn").env("JSQUEEZE_CACHE_DIR", cache_dir);
    cmd
}

fn cached_outputs(cache_dir: &Path) -> usize {
    let Ok(shards) = fs::read_dir(cache_dir) else {
        return 0;
    };
    shards
        .filter_map(|s| s.ok())
        .filter(|s| s.path().is_dir())
        .flat_map(|s| fs::read_dir(s.path()).into_iter().flatten().filter_map(|f| f.ok()))
        .filter(|f| f.path().extension().is_some_and(|e| e == "js"))
        .count()
}

#[test]
fn test_minify_stdin_to_stdout() -> Result<()> {
    let cache = tempdir()?;
    jsqueeze(cache.path())
        .args(["minify"])
        .write_stdin(SOURCE)
        .assert()
        .success()
        .stdout(MINIFIED);
    assert_eq!(cached_outputs(cache.path()), 1);
    Ok(())
}

#[test]
fn test_minify_file_to_file_without_cache() -> Result<()> {
    let cache = tempdir()?;
    let work = tempdir()?;
    let mut input = NamedTempFile::new()?;
    std::io::Write::write_all(&mut input, SOURCE.as_bytes())?;
    let output = work.path().join("out.min.js");

    jsqueeze(cache.path())
        .args(["minify", "--no-cache", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Minified output written to"));

    assert_eq!(fs::read_to_string(&output)?, MINIFIED);
    assert_eq!(cached_outputs(cache.path()), 0);
    Ok(())
}

#[test]
fn test_quiet_suppresses_informational_messages() -> Result<()> {
    let cache = tempdir()?;
    let work = tempdir()?;
    let output = work.path().join("out.js");
    jsqueeze(cache.path())
        .args(["-q", "minify", "-o"])
        .arg(&output)
        .write_stdin("a = 1")
        .assert()
        .success()
        .stderr("");
    assert_eq!(fs::read_to_string(&output)?, "a=1");
    Ok(())
}

#[test]
fn test_dry_run_passes_input_through_and_skips_cache() -> Result<()> {
    let cache = tempdir()?;
    jsqueeze(cache.path())
        .args(["minify", "--dry-run"])
        .write_stdin(SOURCE)
        .assert()
        .success()
        .stdout(SOURCE);
    assert_eq!(cached_outputs(cache.path()), 0);
    Ok(())
}

#[test]
fn test_second_run_is_served_from_cache() -> Result<()> {
    let cache = tempdir()?;
    let cache_arg = cache.path().join("store");

    jsqueeze(cache.path())
        .args(["minify", "--stats", "--cache-dir"])
        .arg(&cache_arg)
        .write_stdin(SOURCE)
        .assert()
        .success()
        .stdout(MINIFIED)
        .stderr(predicate::str::contains("miss"));

    jsqueeze(cache.path())
        .args(["minify", "--stats", "--cache-dir"])
        .arg(&cache_arg)
        .write_stdin(SOURCE)
        .assert()
        .success()
        .stdout(MINIFIED)
        .stderr(predicate::str::contains("hit").and(predicate::str::contains("Served from cache.")));

    assert_eq!(cached_outputs(&cache_arg), 1);
    assert_eq!(fs::read_dir(cache.path())?.count(), 1, "only `store` should exist under the env dir");
    Ok(())
}

#[test]
fn test_suppress_result_prints_cache_path() -> Result<()> {
    let cache = tempdir()?;
    let assert = jsqueeze(cache.path())
        .args(["minify", "--suppress-result"])
        .write_stdin(SOURCE)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let path = Path::new(stdout.trim_end());
    assert!(path.starts_with(cache.path()));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("js"));
    assert_eq!(fs::read_to_string(path)?, MINIFIED);
    Ok(())
}

#[test]
fn test_suppress_result_without_cache_is_rejected() -> Result<()> {
    let cache = tempdir()?;
    jsqueeze(cache.path())
        .args(["minify", "--suppress-result", "--no-cache"])
        .write_stdin(SOURCE)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("suppress_result"));
    Ok(())
}

#[test]
fn test_unterminated_comment_fails_with_offset() -> Result<()> {
    let cache = tempdir()?;
    jsqueeze(cache.path())
        .args(["minify"])
        .write_stdin("a = 1; /* never closed")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("unterminated comment starting at byte 7"));
    assert_eq!(cached_outputs(cache.path()), 0);
    Ok(())
}

#[test]
fn test_unterminated_string_fails() -> Result<()> {
    let cache = tempdir()?;
    jsqueeze(cache.path())
        .args(["minify", "--no-cache"])
        .write_stdin("say('hello)")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unterminated"));
    Ok(())
}

#[test]
fn test_latin1_file_is_minified_byte_for_byte() -> Result<()> {
    let cache = tempdir()?;
    let mut input = NamedTempFile::new()?;
    std::io::Write::write_all(&mut input, b"var s = '\xe9t\xe9';  // caf\xe9\nx")?;

    jsqueeze(cache.path())
        .args(["minify", "--no-cache", "-i"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(&b"var s='\xe9t\xe9';x"[..]);
    Ok(())
}

#[test]
fn test_missing_input_file_fails() -> Result<()> {
    let cache = tempdir()?;
    let work = tempdir()?;
    jsqueeze(cache.path())
        .args(["minify", "-i"])
        .arg(work.path().join("missing.js"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read input file"));
    Ok(())
}

#[test]
fn test_regex_after_keywords_from_flag_and_config() -> Result<()> {
    let cache = tempdir()?;
    let source = "return / x /.test(s)";

    jsqueeze(cache.path())
        .args(["minify", "--no-cache"])
        .write_stdin(source)
        .assert()
        .success()
        .stdout("return/x/.test(s)");

    jsqueeze(cache.path())
        .args(["minify", "--no-cache", "--regex-after-keywords"])
        .write_stdin(source)
        .assert()
        .success()
        .stdout("return/ x /.test(s)");

    let mut config = NamedTempFile::new()?;
    std::io::Write::write_all(&mut config, b"lexer:\n  regex_after_keywords: true\n")?;
    jsqueeze(cache.path())
        .args(["minify", "--no-cache", "--config"])
        .arg(config.path())
        .write_stdin(source)
        .assert()
        .success()
        .stdout("return/ x /.test(s)");
    Ok(())
}

#[test]
fn test_cache_path_list_and_clear() -> Result<()> {
    let cache = tempdir()?;

    jsqueeze(cache.path())
        .args(["cache", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", cache.path().display()));

    jsqueeze(cache.path())
        .args(["cache", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("is empty"));

    jsqueeze(cache.path()).args(["minify"]).write_stdin(SOURCE).assert().success();
    jsqueeze(cache.path()).args(["minify"]).write_stdin("b = 2").assert().success();

    let listing = jsqueeze(cache.path()).args(["cache", "list"]).assert().success();
    let stdout = String::from_utf8(listing.get_output().stdout.clone())?;
    assert!(stdout.contains("Minified bytes"));
    assert!(stdout.contains(&MINIFIED.len().to_string()));

    jsqueeze(cache.path())
        .args(["cache", "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Cache left untouched."));
    assert_eq!(cached_outputs(cache.path()), 2);

    jsqueeze(cache.path())
        .args(["cache", "clear", "-y"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Removed 2 cached output(s)."));
    assert_eq!(cached_outputs(cache.path()), 0);
    Ok(())
}

#[test]
fn test_no_arguments_prints_help() {
    Command::new(assert_cmd::cargo_bin!("jsqueeze"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
