use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn trendle_cmd() -> Command {
    Command::cargo_bin("trendle").unwrap()
}

/// Write a feed file into `dir` and return its path.
pub fn write_feed(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("feed.toml");
    fs::write(&path, contents).unwrap();
    path
}

/// The three-post sample feed used across the command tests.
pub fn sample_feed(dir: &Path) -> PathBuf {
    write_feed(
        dir,
        r#"
[[posts]]
author = "@realDonaldTrump"
text = "Despite the negative press covfefe #bigsmart"
age = 1249
engagement_count = 54303

[[posts]]
author = "@elonmusk"
text = "Technically, alcohol is a solution #bigsmart"
age = 366.4
engagement_count = 166500

[[posts]]
author = "@CIA"
text = "We can neither confirm nor deny that this is our first tweet. #heart"
age = 2192
engagement_count = 284200
"#,
    )
}
