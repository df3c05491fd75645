use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tempfile::TempDir;
use trellis_catalog::{Catalog, Template, TemplateCategory};
use trellis_core::{DatabaseType, FileSet};
use trellis_engine::{
    Error, GenerationOptions, GenerationRequest, Generator, RepositoryStatus, SETUP_GUIDE_PATH,
    VcsError, VersionControl,
};

/// Records the files present when the repository step runs.
#[derive(Default)]
struct RecordingVcs {
    seen: Mutex<Vec<PathBuf>>,
}

impl VersionControl for RecordingVcs {
    fn init_repository(&self, root: &Path) -> Result<(), VcsError> {
        self.seen.lock().unwrap().push(root.to_path_buf());
        assert!(root.join("README.md").exists());
        assert!(!root.join(SETUP_GUIDE_PATH).exists());
        Ok(())
    }
}

struct FailingVcs;

impl VersionControl for FailingVcs {
    fn init_repository(&self, _root: &Path) -> Result<(), VcsError> {
        Err(VcsError {
            message: "git commit failed".into(),
            output: "Author identity unknown".into(),
        })
    }
}

struct NoVcs;

impl VersionControl for NoVcs {
    fn init_repository(&self, _root: &Path) -> Result<(), VcsError> {
        Ok(())
    }
}

/// Every file under `root` with its content, keyed by relative path.
fn read_tree(root: &Path) -> BTreeMap<String, String> {
    fn walk(dir: &Path, root: &Path, out: &mut BTreeMap<String, String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path
                    .strip_prefix(root)
                    .unwrap()
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                out.insert(rel, fs::read_to_string(&path).unwrap());
            }
        }
    }

    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

fn request(out: &Path, template: &str, name: &str) -> GenerationRequest {
    GenerationRequest::new(template, name, out)
}

#[test]
fn test_frontend_project_has_no_python_modules() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let generator = Generator::new(&catalog).with_version_control(NoVcs);

    let project = generator
        .generate(&request(temp.path(), "React Web Dashboard", "demo"))
        .unwrap();

    assert_eq!(project.root, temp.path().join("demo"));
    assert!(!project.files.iter().any(|f| f.contains("core/")));
    assert!(!project.root.join("src/core/logger.py").exists());
    assert!(!project.root.join("src/core/exceptions.py").exists());

    let tree = read_tree(&project.root);
    assert!(tree["package.json"].contains(r#""name": "demo""#));
    for (path, content) in &tree {
        assert!(!content.contains("{{name}}"), "{path} still has a placeholder");
    }
}

#[test]
fn test_placeholders_replaced_everywhere() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let base = catalog.resolve(TemplateCategory::BackendMobile).base().clone();

    let project = Generator::new(&catalog)
        .with_version_control(NoVcs)
        .generate(&request(temp.path(), "Mobile App Backend", "demo"))
        .unwrap();

    for (path, content) in base.iter() {
        let written = fs::read_to_string(project.root.join(path)).unwrap();
        assert_eq!(written, content.replace("{{name}}", "demo"), "{path}");
    }
}

#[test]
fn test_postgresql_configuration() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let options = GenerationOptions::default().with_database(DatabaseType::Postgresql);

    let project = Generator::new(&catalog)
        .with_version_control(NoVcs)
        .generate(&request(temp.path(), "Desktop Application", "demo").with_options(options))
        .unwrap();

    let env = fs::read_to_string(project.root.join(".env")).unwrap();
    assert!(env.contains("DATABASE_URL=postgresql://"));
    assert!(env.contains("APP_NAME=demo\n"));
    assert!(project.root.join("app/db/database.py").is_file());
    assert!(project.root.join("app/db/__init__.py").is_file());
}

#[test]
fn test_written_file_list() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let options = GenerationOptions::default().with_database(DatabaseType::Postgresql);

    let project = Generator::new(&catalog)
        .with_version_control(NoVcs)
        .generate(&request(temp.path(), "Python Core Service", "worker").with_options(options))
        .unwrap();

    insta::assert_snapshot!(project.files.join("\n"), @r"
    architecture/architecture.drawio
    architecture/README.md
    app/__init__.py
    app/config/__init__.py
    app/services/__init__.py
    app/main.py
    app/config/settings.py
    app/services/worker.py
    requirements.txt
    run.py
    README.md
    .env
    .gitignore
    app/core/__init__.py
    app/core/logger.py
    app/core/exceptions.py
    app/db/__init__.py
    app/db/database.py
    SETUP.md
    ");
}

#[test]
fn test_existing_directory_is_replaced() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("demo");
    fs::create_dir_all(root.join("app/legacy")).unwrap();
    fs::write(root.join("app/legacy/old.py"), "stale").unwrap();
    fs::write(root.join("NOTES.txt"), "stale").unwrap();

    let catalog = Catalog::builtin();
    let project = Generator::new(&catalog)
        .with_version_control(NoVcs)
        .generate(&request(temp.path(), "FastAPI Core Service", "demo"))
        .unwrap();

    let tree = read_tree(&project.root);
    let mut expected = project.files.clone();
    expected.sort();
    assert_eq!(tree.keys().cloned().collect::<Vec<_>>(), expected);
    assert!(!root.join("app/legacy").exists());
}

#[test]
fn test_unknown_feature_matches_no_features() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let generator = Generator::new(&catalog).with_version_control(NoVcs);
    let plain_out = temp.path().join("plain");
    let unknown_out = temp.path().join("unknown");

    let plain = generator
        .generate(&request(&plain_out, "Node.js Application", "demo"))
        .unwrap();
    let unknown = generator
        .generate(
            &request(&unknown_out, "Node.js Application", "demo")
                .with_options(GenerationOptions::default().with_feature("does-not-exist")),
        )
        .unwrap();

    assert_eq!(read_tree(&plain.root), read_tree(&unknown.root));
}

#[test]
fn test_concurrent_generation() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let generator = Generator::new(&catalog).with_version_control(NoVcs);
    let jobs = [
        ("React Web Dashboard", "web"),
        ("Node.js Application", "api"),
        ("Mobile App Backend", "mobile"),
        ("Desktop Application", "desktop"),
    ];

    let projects: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = jobs
            .iter()
            .map(|(template, name)| {
                let generator = &generator;
                let out = temp.path();
                scope.spawn(move || generator.generate(&request(out, template, name)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });

    for (project, (template, name)) in projects.iter().zip(jobs) {
        assert_eq!(project.root, temp.path().join(name));
        let readme = fs::read_to_string(project.root.join("README.md")).unwrap();
        assert!(readme.contains(name), "{template} README lacks {name}");
        let setup = fs::read_to_string(project.root.join(SETUP_GUIDE_PATH)).unwrap();
        assert!(setup.contains(&format!("## Template: {template}\n")));
    }
}

#[test]
fn test_repository_failure_is_not_fatal() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();

    let project = Generator::new(&catalog)
        .with_version_control(FailingVcs)
        .generate(&request(temp.path(), "FastAPI Core Service", "demo"))
        .unwrap();

    assert_eq!(
        project.repository,
        RepositoryStatus::Failed("git commit failed: Author identity unknown".into())
    );
    assert!(project.root.join(SETUP_GUIDE_PATH).is_file());
}

#[test]
fn test_repository_runs_before_setup_guide() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let vcs = RecordingVcs::default();

    let project = Generator::new(&catalog)
        .with_version_control(&vcs)
        .generate(&request(temp.path(), "Python Core Service", "demo"))
        .unwrap();

    assert_eq!(project.repository, RepositoryStatus::Initialized);
    assert_eq!(*vcs.seen.lock().unwrap(), vec![project.root.clone()]);
}

#[test]
fn test_repository_skipped() {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::builtin();
    let vcs = RecordingVcs::default();
    let options = GenerationOptions::default().with_init_repo(false);

    let project = Generator::new(&catalog)
        .with_version_control(&vcs)
        .generate(&request(temp.path(), "Python Core Service", "demo").with_options(options))
        .unwrap();

    assert_eq!(project.repository, RepositoryStatus::Skipped);
    assert!(vcs.seen.lock().unwrap().is_empty());
}

#[test]
fn test_invalid_name_leaves_filesystem_untouched() {
    let temp = TempDir::new().unwrap();
    let existing = temp.path().join("my app");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("keep.txt"), "precious").unwrap();

    let catalog = Catalog::builtin();
    let err = Generator::new(&catalog)
        .with_version_control(NoVcs)
        .generate(&request(temp.path(), "FastAPI Core Service", "my app"))
        .unwrap_err();

    assert!(err.is_invalid_request());
    assert!(matches!(*err, Error::InvalidProjectName { .. }));
    assert_eq!(fs::read_to_string(existing.join("keep.txt")).unwrap(), "precious");
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}

#[test]
fn test_relative_output_is_rejected() {
    let catalog = Catalog::builtin();
    let err = Generator::new(&catalog)
        .with_version_control(NoVcs)
        .generate(&GenerationRequest::new("FastAPI Core Service", "demo", "relative"))
        .unwrap_err();

    assert!(matches!(*err, Error::InvalidOutputDirectory { .. }));
    assert!(!Path::new("relative").exists());
}

#[test]
fn test_write_failure_reports_path() {
    let temp = TempDir::new().unwrap();
    let broken = FileSet::new()
        .with("config", "a file")
        .with("config/settings.py", "unreachable");
    let catalog = Catalog::new(Template::new(TemplateCategory::BackendGeneric, broken));

    let err = Generator::new(&catalog)
        .with_version_control(NoVcs)
        .generate(&request(temp.path(), "anything", "demo"))
        .unwrap_err();

    assert!(err.is_file_write());
    match *err {
        Error::WriteFile { path, .. } => {
            assert_eq!(path, temp.path().join("demo").join("config/settings.py"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // The partial tree is left behind.
    assert!(temp.path().join("demo/config").is_file());
    assert!(!temp.path().join("demo").join(SETUP_GUIDE_PATH).exists());
}
