//! Path helpers for the directory row of the dialog.

use simpledraw_settings::default_save_directory;
use std::path::{Path, PathBuf};

/// Directory the dialog opens in.
///
/// `previous_path` is the last saved *file*; its parent is used. With no
/// previous save the default save directory is used.
pub fn initial_directory(previous_path: &str) -> PathBuf {
    if previous_path.is_empty() {
        return default_save_directory();
    }

    match Path::new(previous_path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.components().collect(),
        _ => default_save_directory(),
    }
}

/// Shorten `path` for display by replacing the home directory with `~`.
pub fn humanize_path(path: &Path) -> String {
    dirs::home_dir()
        .and_then(|home| shorten_under(path, &home))
        .unwrap_or_else(|| path.display().to_string())
}

fn shorten_under(path: &Path, home: &Path) -> Option<String> {
    let rest = path.strip_prefix(home).ok()?;
    if rest.as_os_str().is_empty() {
        Some("~".to_string())
    } else {
        Some(format!("~/{}", rest.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_directory_uses_parent() {
        assert_eq!(
            initial_directory("/data/drawings/3_P1_Fz.png"),
            PathBuf::from("/data/drawings")
        );
    }

    #[test]
    fn test_initial_directory_trims_trailing_separator() {
        assert_eq!(
            initial_directory("/data/drawings//3_P1_Fz.png"),
            PathBuf::from("/data/drawings")
        );
    }

    #[test]
    fn test_initial_directory_defaults() {
        assert_eq!(initial_directory(""), default_save_directory());
        assert_eq!(initial_directory("bare.png"), default_save_directory());
    }

    #[test]
    fn test_shorten_under_home() {
        let home = Path::new("/home/me");
        assert_eq!(
            shorten_under(Path::new("/home/me/Pictures/Simple Draw"), home),
            Some("~/Pictures/Simple Draw".to_string())
        );
        assert_eq!(shorten_under(home, home), Some("~".to_string()));
        assert_eq!(shorten_under(Path::new("/data/x"), home), None);
    }
}
