use std::path::PathBuf;

/// Locate the nvm installation directory that holds `nvm.sh`.
#[must_use]
pub fn detect_nvm_dir() -> Option<PathBuf> {
    let env_dir = std::env::var("NVM_DIR").ok().map(PathBuf::from);
    select_nvm_dir(env_dir, get_nvm_dir_candidates())
}

fn select_nvm_dir(env_dir: Option<PathBuf>, candidates: Vec<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = env_dir.filter(|path| path.exists()) {
        return Some(path);
    }

    candidates
        .iter()
        .find(|candidate| candidate.join("nvm.sh").exists())
        .cloned()
        .or_else(|| candidates.into_iter().find(|candidate| candidate.exists()))
}

fn get_nvm_dir_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(xdg_config).join("nvm"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".nvm"));
    }

    paths
}
