use std::path::{Component, Path, PathBuf};

pub const RESULTS_DIR: &str = "Results";

/// `Results` next to the project root containing `base`.
///
/// The root is `base` cut at its first `src` component (any case); when there
/// is none, `base` itself is the root.
pub fn default_output_dir(base: &Path) -> PathBuf {
    let mut root = PathBuf::new();
    for component in base.components() {
        if let Component::Normal(name) = component
            && name.to_string_lossy().eq_ignore_ascii_case("src")
        {
            break;
        }
        root.push(component);
    }
    root.join(RESULTS_DIR)
}

pub fn resolve_output_dir(configured: Option<&Path>, base: &Path) -> PathBuf {
    match configured {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => base.join(dir),
        None => default_output_dir(base),
    }
}
