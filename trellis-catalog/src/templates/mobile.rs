use trellis_core::FileSet;

use super::PYTHON_GITIGNORE;

const ENV: &str = "\
APP_NAME={{name}}
ENVIRONMENT=development
DEBUG=True
JWT_SECRET_KEY=change-me-in-production
UPLOAD_DIR=uploads
LOG_LEVEL=INFO
";

pub(super) fn base() -> FileSet {
    FileSet::new()
        .with("app/__init__.py", "")
        .with("app/models/__init__.py", "")
        .with("app/services/__init__.py", "")
        .with("app/config/__init__.py", "")
        .with("app/core/__init__.py", "")
        .with("app/utils/__init__.py", "")
        .with_all([
            bundled!("mobile", "app/main.py"),
            bundled!("mobile", "app/api/__init__.py"),
            bundled!("mobile", "app/api/users.py"),
            bundled!("mobile", "app/api/auth.py"),
            bundled!("mobile", "app/models/user.py"),
            bundled!("mobile", "app/services/user_service.py"),
            bundled!("mobile", "app/config/settings.py"),
            bundled!("mobile", "app/core/logger.py"),
            bundled!("mobile", "app/core/exceptions.py"),
            bundled!("mobile", "app/utils/constants.py"),
            bundled!("mobile", "app/utils/helpers.py"),
            bundled!("mobile", "requirements.txt"),
            bundled!("mobile", "run.py"),
            bundled!("mobile", "README.md"),
        ])
        .with(".env", ENV)
        .with(".gitignore", PYTHON_GITIGNORE)
}

pub(super) fn features() -> Vec<(&'static str, FileSet)> {
    vec![
        (
            "Push Notifications",
            FileSet::from_iter([
                bundled!("mobile/features/push", "app/services/notification_service.py"),
                bundled!("mobile/features/push", "requirements.txt"),
            ]),
        ),
        (
            "Image Processing",
            FileSet::from_iter([
                bundled!("mobile/features/images", "app/services/image_service.py"),
                bundled!("mobile/features/images", "requirements.txt"),
            ]),
        ),
        (
            "Rate Limiting",
            FileSet::new()
                .with("app/middleware/__init__.py", "")
                .with_all([bundled!(
                    "mobile/features/rate_limit",
                    "app/middleware/rate_limit.py"
                )]),
        ),
        (
            "File Storage",
            FileSet::from_iter([bundled!(
                "mobile/features/storage",
                "app/services/storage_service.py"
            )]),
        ),
    ]
}
