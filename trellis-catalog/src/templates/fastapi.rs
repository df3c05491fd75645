use trellis_core::FileSet;

use super::PYTHON_GITIGNORE;

const ENV: &str = "\
APP_NAME={{name}}
DEBUG=True
SECRET_KEY=change-me-in-production
LOG_DIR=logs
";

pub(super) fn base() -> FileSet {
    FileSet::new()
        .with("app/__init__.py", "")
        .with("app/api/__init__.py", "")
        .with("app/config/__init__.py", r#""""Configuration package""""#)
        .with("app/core/__init__.py", r#""""Core functionality""""#)
        .with("app/schemas/__init__.py", "")
        .with("app/services/__init__.py", "")
        .with("app/utils/__init__.py", "")
        .with_all([
            bundled!("fastapi", "app/main.py"),
            bundled!("fastapi", "app/api/routes.py"),
            bundled!("fastapi", "app/config/settings.py"),
            bundled!("fastapi", "app/core/logger.py"),
            bundled!("fastapi", "app/core/exceptions.py"),
            bundled!("fastapi", "app/schemas/item.py"),
            bundled!("fastapi", "app/services/item_service.py"),
            bundled!("fastapi", "app/utils/constants.py"),
            bundled!("fastapi", "app/utils/helpers.py"),
            bundled!("fastapi", "requirements.txt"),
            bundled!("fastapi", "run.py"),
            bundled!("fastapi", "README.md"),
        ])
        .with(".env", ENV)
        .with(".gitignore", PYTHON_GITIGNORE)
}

pub(super) fn features() -> Vec<(&'static str, FileSet)> {
    vec![
        (
            "PostgreSQL",
            FileSet::new()
                .with("app/db/__init__.py", "")
                .with("app/models/__init__.py", "")
                .with_all([
                    bundled!("fastapi/features/postgresql", "app/db/database.py"),
                    bundled!("fastapi/features/postgresql", "app/models/item_model.py"),
                    bundled!("fastapi/features/postgresql", "requirements.txt"),
                ]),
        ),
        (
            "MongoDB",
            FileSet::new().with("app/db/__init__.py", "").with_all([
                bundled!("fastapi/features/mongodb", "app/db/database.py"),
                bundled!("fastapi/features/mongodb", "requirements.txt"),
            ]),
        ),
    ]
}
