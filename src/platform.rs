//! Desktop launcher integration.
//!
//! On Linux the install action writes a freedesktop launcher entry so the
//! storefront appears in the application menu. Other platforms have no
//! native prompt, and the banner falls back to manual instructions.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::BoxFuture;
use vegbazar_core::install::DeferredPrompt;
use vegbazar_core::{InstallOutcome, StorefrontResult};

const ENTRY_FILE: &str = "vegbazar.desktop";

/// Installs the launcher entry when the user accepts.
pub struct LauncherPrompt {
    entry_path: PathBuf,
    exec: PathBuf,
}

impl LauncherPrompt {
    pub fn new(entry_path: PathBuf, exec: PathBuf) -> Self {
        Self { entry_path, exec }
    }

    fn entry_contents(&self) -> String {
        format!(
            "[Desktop Entry]\nType=Application\nName=VegBazar\nComment=Fresh groceries, delivered\nExec=\"{}\"\nTerminal=false\nCategories=Office;\n",
            self.exec.display()
        )
    }
}

impl DeferredPrompt for LauncherPrompt {
    fn prompt(&self) -> BoxFuture<'_, StorefrontResult<InstallOutcome>> {
        Box::pin(async move {
            if let Some(parent) = self.entry_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.entry_path, self.entry_contents())?;
            tracing::info!(path = %self.entry_path.display(), "Launcher entry installed");
            Ok(InstallOutcome::Accepted)
        })
    }
}

fn launcher_entry_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("applications").join(ENTRY_FILE))
}

fn entry_exists(path: Option<&Path>) -> bool {
    path.is_some_and(Path::exists)
}

/// Whether a launcher entry from an earlier install is present.
pub fn launcher_installed() -> bool {
    entry_exists(launcher_entry_path().as_deref())
}

/// The native install prompt for this platform, if there is one.
pub fn capture_install_prompt() -> Option<Arc<dyn DeferredPrompt>> {
    if !cfg!(target_os = "linux") {
        return None;
    }
    let entry_path = launcher_entry_path()?;
    let exec = match std::env::current_exe() {
        Ok(exec) => exec,
        Err(e) => {
            tracing::warn!(error = %e, "Cannot resolve executable, launcher install unavailable");
            return None;
        }
    };
    Some(Arc::new(LauncherPrompt::new(entry_path, exec)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use tempfile::TempDir;

    #[test]
    fn accepting_writes_launcher_entry() {
        let dir = TempDir::new().unwrap();
        let entry = dir.path().join("applications").join(ENTRY_FILE);
        let prompt = LauncherPrompt::new(entry.clone(), PathBuf::from("/opt/vegbazar/vegbazar-desktop"));

        assert!(!entry_exists(Some(&entry)));
        assert_eq!(block_on(prompt.prompt()).unwrap(), InstallOutcome::Accepted);
        assert!(entry_exists(Some(&entry)));

        let contents = std::fs::read_to_string(&entry).unwrap();
        assert!(contents.starts_with("[Desktop Entry]\n"));
        assert!(contents.contains("Exec=\"/opt/vegbazar/vegbazar-desktop\"\n"));
    }

    #[test]
    fn unwritable_entry_reports_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("applications");
        std::fs::write(&blocker, "not a directory").unwrap();
        let prompt = LauncherPrompt::new(blocker.join(ENTRY_FILE), PathBuf::from("vegbazar-desktop"));

        assert!(block_on(prompt.prompt()).is_err());
    }

    #[test]
    fn missing_entry_path_is_not_installed() {
        assert!(!entry_exists(None));
    }

    #[test]
    fn captured_prompt_follows_platform() {
        let captured = capture_install_prompt();
        if cfg!(target_os = "linux") && dirs::data_dir().is_some() {
            assert!(captured.is_some());
        } else {
            assert!(captured.is_none());
        }
    }
}
