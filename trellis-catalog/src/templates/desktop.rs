use trellis_core::FileSet;

use super::PYTHON_GITIGNORE;

const ENV: &str = "\
# Application
APP_NAME={{name}}
DEBUG=False
";

pub(super) fn base() -> FileSet {
    FileSet::new()
        .with("app/__init__.py", "")
        .with("app/config/__init__.py", r#""""Configuration package""""#)
        .with("app/services/__init__.py", r#""""Services package""""#)
        .with("app/utils/__init__.py", r#""""Utility functions""""#)
        .with("app/ui/__init__.py", "")
        .with("app/models/__init__.py", "")
        .with_all([
            bundled!("desktop", "app/main.py"),
            bundled!("desktop", "app/config/settings.py"),
            bundled!("desktop", "app/services/data_service.py"),
            bundled!("desktop", "app/utils/constants.py"),
            bundled!("desktop", "app/utils/helpers.py"),
            bundled!("desktop", "app/ui/main_window.py"),
            bundled!("desktop", "app/models/data_model.py"),
            bundled!("desktop", "requirements.txt"),
            bundled!("desktop", "run.py"),
            bundled!("desktop", "README.md"),
        ])
        .with(".env", ENV)
        .with(".gitignore", PYTHON_GITIGNORE)
}

pub(super) fn features() -> Vec<(&'static str, FileSet)> {
    vec![(
        "API Integration",
        FileSet::new().with("api/__init__.py", "").with_all([
            bundled!("desktop/features/api", "api/main.py"),
            bundled!("desktop/features/api", "run_api.py"),
            bundled!("desktop/features/api", "requirements.txt"),
        ]),
    )]
}
