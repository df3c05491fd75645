use trellis_core::FileSet;

use super::NODE_GITIGNORE;

const ENV: &str = "\
PORT=3000
NODE_ENV=development
APP_NAME={{name}}
";

pub(super) fn base() -> FileSet {
    FileSet::from_iter([
        bundled!("node", "package.json"),
        bundled!("node", "src/index.js"),
        bundled!("node", "src/utils/constants.js"),
        bundled!("node", "README.md"),
    ])
    .with(".env", ENV)
    .with(".gitignore", NODE_GITIGNORE)
}

pub(super) fn features() -> Vec<(&'static str, FileSet)> {
    vec![
        (
            "API Integration",
            FileSet::from_iter([
                bundled!("node/features/api", "package.json"),
                bundled!("node/features/api", "src/index.js"),
                bundled!("node/features/api", "src/routes/api.js"),
                bundled!("node/features/api", "src/middlewares/validation.js"),
                bundled!("node/features/api", "src/middlewares/auth.js"),
                bundled!("node/features/api", "src/controllers/itemController.js"),
                bundled!("node/features/api", "src/services/itemService.js"),
            ])
            .with(".env", format!("{ENV}API_KEY=\n")),
        ),
        (
            "WebSocket",
            FileSet::from_iter([
                bundled!("node/features/websocket", "package.json"),
                bundled!("node/features/websocket", "src/websocket/server.js"),
            ]),
        ),
    ]
}
