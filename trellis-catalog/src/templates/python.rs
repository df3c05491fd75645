use trellis_core::FileSet;

use super::PYTHON_GITIGNORE;

const ENV: &str = "\
APP_NAME={{name}}
DEBUG=False
LOG_LEVEL=INFO
INTERVAL_SECONDS=5
";

pub(super) fn base() -> FileSet {
    FileSet::new()
        .with("app/__init__.py", "")
        .with("app/config/__init__.py", "")
        .with("app/services/__init__.py", "")
        .with_all([
            bundled!("python", "app/main.py"),
            bundled!("python", "app/config/settings.py"),
            bundled!("python", "app/services/worker.py"),
            bundled!("python", "requirements.txt"),
            bundled!("python", "run.py"),
            bundled!("python", "README.md"),
        ])
        .with(".env", ENV)
        .with(".gitignore", PYTHON_GITIGNORE)
}
