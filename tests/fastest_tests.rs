//! Integration tests for the fastest command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{sample_feed, trendle_cmd, write_feed};

#[test]
fn test_fastest_picks_highest_ratio() {
    let temp = TempDir::new().unwrap();
    let feed = sample_feed(temp.path());

    trendle_cmd()
        .arg("fastest")
        .arg(&feed)
        .assert()
        .success()
        .stdout(predicate::str::contains("@elonmusk"))
        .stdout(predicate::str::contains("engagements/hour"));
}

#[test]
fn test_fastest_empty_feed_fails() {
    let temp = TempDir::new().unwrap();
    let feed = write_feed(temp.path(), "");

    trendle_cmd()
        .arg("fastest")
        .arg(&feed)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("empty feed"));
}

#[test]
fn test_fastest_zero_age_fails() {
    let temp = TempDir::new().unwrap();
    let feed = write_feed(
        temp.path(),
        r#"
[[posts]]
author = "@fresh"
text = "just posted"
age = 0
engagement_count = 10
"#,
    );

    trendle_cmd()
        .arg("fastest")
        .arg(&feed)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("@fresh"))
        .stderr(predicate::str::contains("non-positive age"));
}

#[test]
fn test_fastest_nan_age_fails() {
    let temp = TempDir::new().unwrap();
    let feed = write_feed(
        temp.path(),
        r#"
[[posts]]
author = "@nan"
text = "broken"
age = nan
engagement_count = 100
"#,
    );

    trendle_cmd()
        .arg("fastest")
        .arg(&feed)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("@nan"))
        .stderr(predicate::str::contains("invalid age"));
}

#[test]
fn test_fastest_missing_feed_file_fails() {
    trendle_cmd()
        .arg("fastest")
        .arg("/no/such/feed.toml")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}
