use crate::Error;
use std::{
    env, fs,
    path::{Component, Path, PathBuf},
};
use tracing::{trace, warn};

/// Symlink hops allowed before giving up on a path, as Linux does.
const MAX_LINK_HOPS: usize = 40;

/// Resolve `path` to an absolute path with every symlink, `.` and `..`
/// resolved, whether or not the final file exists.
///
/// Relative input is taken relative to the current directory. Components
/// that do not exist are kept as written, so a path into a removed
/// installation still comes back in a comparable form. A symlink loop stops
/// link resolution and the rest of the path is appended unresolved.
///
/// The only error is an unreadable current directory for relative input.
pub fn canonicalize(path: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let path = path.as_ref();
    if let Ok(real) = fs::canonicalize(path) {
        return Ok(real);
    }

    let absolute = if path.has_root() {
        path.to_owned()
    } else {
        env::current_dir().map_err(Error::CurrentDir)?.join(path)
    };

    let mut hops = 0;
    let resolved = resolve(PathBuf::from("/"), &absolute, &mut hops);
    trace!(input = %path.display(), resolved = %resolved.display(), "canonicalized");
    Ok(resolved)
}

fn resolve(mut resolved: PathBuf, path: &Path, hops: &mut usize) -> PathBuf {
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::CurDir => {}
            Component::RootDir => resolved = PathBuf::from("/"),
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                let next = resolved.join(name);
                let Ok(target) = fs::read_link(&next) else {
                    // not a symlink, or does not exist
                    resolved = next;
                    continue;
                };

                *hops += 1;
                if *hops > MAX_LINK_HOPS {
                    warn!(path = %path.display(), "too many levels of symbolic links");
                    resolved = next;
                    continue;
                }
                // relative link targets are relative to the link's directory
                resolved = resolve(resolved, &target, hops);
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::symlink;
    use tempfile::tempdir;

    #[test]
    fn existing_path_matches_std() {
        let dir = tempdir().unwrap();
        let real = fs::canonicalize(dir.path()).unwrap();
        assert_eq!(canonicalize(dir.path()).unwrap(), real);
    }

    #[test]
    fn follows_symlink_chain() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        let jre = root.join("jre-17.0.2");
        fs::create_dir_all(jre.join("bin")).unwrap();
        fs::write(jre.join("bin/java"), b"").unwrap();
        symlink(&jre, root.join("jre-17")).unwrap();
        symlink("jre-17", root.join("jre")).unwrap();

        assert_eq!(
            canonicalize(root.join("jre/bin/java")).unwrap(),
            jre.join("bin/java")
        );
    }

    #[test]
    fn missing_tail_is_appended_unresolved() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        fs::create_dir(root.join("real")).unwrap();
        symlink("real", root.join("link")).unwrap();

        assert_eq!(
            canonicalize(root.join("link/gone/./bin/../bin/java")).unwrap(),
            root.join("real/gone/bin/java")
        );
    }

    #[test]
    fn dangling_symlink_resolves_to_its_target() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        symlink(root.join("removed-jre"), root.join("jre")).unwrap();

        assert_eq!(
            canonicalize(root.join("jre/bin/java")).unwrap(),
            root.join("removed-jre/bin/java")
        );
    }

    #[test]
    fn symlink_loop_does_not_fail() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        symlink("b", root.join("a")).unwrap();
        symlink("a", root.join("b")).unwrap();

        let resolved = canonicalize(root.join("a/java")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("java"));
    }

    #[test]
    fn relative_input_becomes_absolute() {
        let resolved = canonicalize("no-such-dir-here/bin/java").unwrap();
        let cwd = fs::canonicalize(env::current_dir().unwrap()).unwrap();
        assert_eq!(resolved, cwd.join("no-such-dir-here/bin/java"));
    }

    #[test]
    fn is_idempotent() {
        let dir = tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        fs::create_dir(root.join("real")).unwrap();
        symlink("real", root.join("link")).unwrap();

        for input in ["link/bin/java", "link/../link/x", "real", "nope/../link"] {
            let once = canonicalize(root.join(input)).unwrap();
            let twice = canonicalize(&once).unwrap();
            assert_eq!(once, twice, "input {input}");
            assert!(once.is_absolute());
        }
    }
}
