use std::fs::File;
use std::io::Write;
use std::path::Path;

use console::style;

use crate::aggregate::Changelog;
use crate::error::Result;

/// Write the changelog to its configured sink.
///
/// With a destination path the file is created or truncated and receives
/// plain text. Without one the changelog goes to stdout with the repository
/// label styled green when stdout is a terminal. Diagnostics never pass
/// through here; they stay on stderr so redirecting the changelog captures
/// only changelog content.
pub fn write_changelog(changelog: &Changelog, dest: Option<&Path>) -> Result<()> {
    match dest {
        Some(path) => write_to_file(changelog, path),
        None => {
            write_to_stdout(changelog);
            Ok(())
        }
    }
}

fn write_to_file(changelog: &Changelog, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;

    if let Some(header) = &changelog.header {
        writeln!(file, "{}\n", header)?;
    }
    for entry in &changelog.entries {
        writeln!(file, "{}", entry.render())?;
    }

    Ok(())
}

fn write_to_stdout(changelog: &Changelog) {
    if let Some(header) = &changelog.header {
        println!("{}\n", header);
    }
    for entry in &changelog.entries {
        println!("[{}] {}", style(&entry.repo).green(), entry.line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::ChangelogEntry;
    use std::fs;

    fn sample() -> Changelog {
        Changelog {
            header: Some("~~ Changelog generated Jan 02 2026 [v1.0, v2.0] ~~".to_string()),
            entries: vec![
                ChangelogEntry {
                    repo: "widgets".to_string(),
                    line: "feat: add widget".to_string(),
                },
                ChangelogEntry {
                    repo: "gadgets".to_string(),
                    line: "fix: gadget jam".to_string(),
                },
            ],
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_file_output_has_header_then_entries() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("CHANGELOG");

        write_changelog(&sample(), Some(&path)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines[0], "~~ Changelog generated Jan 02 2026 [v1.0, v2.0] ~~");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "[widgets] feat: add widget");
        assert_eq!(lines[3], "[gadgets] fix: gadget jam");
    }

    #[test]
    fn test_file_output_without_header() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("CHANGELOG");

        let changelog = Changelog {
            header: None,
            ..sample()
        };
        write_changelog(&changelog, Some(&path)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[widgets] "));
    }

    #[test]
    fn test_existing_file_is_truncated() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("CHANGELOG");
        fs::write(&path, "stale contents\nmore stale\n").unwrap();

        write_changelog(&sample(), Some(&path)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let result = write_changelog(&sample(), Some(Path::new("/nonexistent/dir/CHANGELOG")));
        assert!(result.is_err());
    }
}
