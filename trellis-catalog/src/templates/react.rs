use trellis_core::FileSet;

use super::NODE_GITIGNORE;

pub(super) fn base() -> FileSet {
    FileSet::from_iter([
        bundled!("react", "package.json"),
        bundled!("react", "tsconfig.json"),
        bundled!("react", "public/index.html"),
        bundled!("react", "src/index.tsx"),
        bundled!("react", "src/index.css"),
        bundled!("react", "src/App.tsx"),
        bundled!("react", "src/App.css"),
        bundled!("react", "src/react-app-env.d.ts"),
        bundled!("react", "README.md"),
    ])
    .with(".env.example", "REACT_APP_API_URL=http://localhost:8000\n")
    .with(".gitignore", NODE_GITIGNORE)
}
