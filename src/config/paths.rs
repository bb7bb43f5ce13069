//! Path normalization for user supplied file locations.

use std::env;
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` to the home directory, expand `$VAR` and `${VAR}`
/// from the environment, then lexically clean the result.
///
/// Unset variables expand to the empty string. `~user` forms are left
/// untouched.
pub fn clean_and_expand_path(path: &str) -> PathBuf {
    if path.is_empty() {
        return PathBuf::new();
    }

    let with_home = match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            format!("{}{}", home.display(), rest)
        }
        _ => path.to_string(),
    };

    clean(Path::new(&expand_env(&with_home)))
}

/// Expand `$NAME` and `${NAME}` references.
fn expand_env(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    out.push_str(&env::var(&braced[..end]).unwrap_or_default());
                    rest = &braced[end + 1..];
                }
                None => {
                    out.push_str(&rest[pos..]);
                    rest = "";
                }
            }
            continue;
        }

        let len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        if len == 0 {
            out.push('$');
        } else {
            out.push_str(&env::var(&after[..len]).unwrap_or_default());
        }
        rest = &after[len..];
    }

    out.push_str(rest);
    out
}

/// Remove `.` segments and fold `..` without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
