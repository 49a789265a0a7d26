use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub kubeconfig: PathBuf,
    pub context: Option<String>,
    pub display_group: bool,
}

impl Config {
    /// Uses `$HOME/.kube/config` unless a path is given.
    pub fn new(
        kubeconfig: Option<PathBuf>,
        context: Option<String>,
        display_group: bool,
    ) -> Result<Self> {
        let kubeconfig = match kubeconfig {
            Some(path) => path,
            None => default_kubeconfig()?,
        };
        Ok(Self {
            kubeconfig,
            context,
            display_group,
        })
    }
}

pub fn default_kubeconfig() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME is not set, unable to locate kubeconfig")?;
    Ok(kubeconfig_in(Path::new(&home)))
}

fn kubeconfig_in(home: &Path) -> PathBuf {
    home.join(".kube").join("config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kubeconfig_lives_under_home() {
        assert_eq!(
            kubeconfig_in(Path::new("/home/dave")),
            PathBuf::from("/home/dave/.kube/config")
        );
    }

    #[test]
    fn explicit_path_wins() -> Result<()> {
        let config = Config::new(Some(PathBuf::from("/tmp/kind.yaml")), None, false)?;
        assert_eq!(config.kubeconfig, PathBuf::from("/tmp/kind.yaml"));
        assert!(config.context.is_none());
        Ok(())
    }
}
