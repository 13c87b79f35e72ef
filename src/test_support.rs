use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Sets or clears an environment variable, restoring the previous value on drop.
///
/// Callers must be `#[serial]`: the environment is process-global.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var_os(key);
        // SAFETY: tests touching the environment run under #[serial].
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }

    pub(crate) fn unset(key: &'static str) -> Self {
        let previous = std::env::var_os(key);
        // SAFETY: tests touching the environment run under #[serial].
        unsafe { std::env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see EnvGuard::set.
        unsafe {
            match &self.previous {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// A scratch tree shaped like a packaged application:
///
/// ```text
/// root/
///   App/Contents/MacOS/      <- wrapper executable directory
///   App/Contents/Resources/  <- bundled resources
///   work/                    <- working directory
/// ```
pub(crate) struct BundleLayout {
    temp_dir: TempDir,
}

impl BundleLayout {
    pub(crate) fn new() -> Self {
        let layout = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        std::fs::create_dir_all(layout.exe_dir()).unwrap();
        std::fs::create_dir_all(layout.resources_dir()).unwrap();
        std::fs::create_dir_all(layout.cwd()).unwrap();
        layout
    }

    pub(crate) fn root(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    pub(crate) fn exe_dir(&self) -> PathBuf {
        self.root().join("App").join("Contents").join("MacOS")
    }

    pub(crate) fn resources_dir(&self) -> PathBuf {
        self.root().join("App").join("Contents").join("Resources")
    }

    pub(crate) fn cwd(&self) -> PathBuf {
        self.root().join("work")
    }
}

/// Write a shell script that exits with `exit_code`, marked executable.
#[cfg(unix)]
pub(crate) fn write_stub_executable(dir: &Path, name: &str, exit_code: i32) -> PathBuf {
    write_script(dir, name, &format!("#!/bin/sh\nexit {}\n", exit_code))
}

/// Write a shell script that records its arguments, one per line, to `record`.
#[cfg(unix)]
pub(crate) fn write_recording_stub(dir: &Path, name: &str, record: &Path) -> PathBuf {
    let script = format!(
        "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > '{}'\nexit 0\n",
        record.display()
    );
    write_script(dir, name, &script)
}

/// Write a file that is not executable.
pub(crate) fn write_plain_file(dir: &Path, name: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, "not a program\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    }
    path
}

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, contents: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
