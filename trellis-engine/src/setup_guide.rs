//! The `SETUP.md` file written at the end of generation.

use std::path::{Path, PathBuf};

use trellis_catalog::TemplateCategory;
use trellis_core::GeneratedFile;

use crate::{Blueprint, GenerationOptions};

/// File name of the setup guide, relative to the project root.
pub const SETUP_GUIDE_PATH: &str = "SETUP.md";

const API_INTEGRATION: &str = "API Integration";

const PYTHON_VENV: &str = "\
#### 1. Create a Virtual Environment
```bash
python -m venv venv
source venv/bin/activate  # Windows: venv\\Scripts\\activate
```

#### 2. Install Dependencies
```bash
pip install -r requirements.txt
```

";

const TAIL: &str = "
### Architecture

The `architecture/` folder holds `architecture.drawio`, an empty diagram.
Open it with https://app.diagrams.net/ to document components and data flows.

### Project Structure

See README.md for a description of the project layout.

### Next Steps

1. Review the configuration in `.env`
2. Sketch the system in `architecture/architecture.drawio`
3. Add your business logic
4. Write tests
5. Deploy
";

/// Human-readable instructions for the generated project.
///
/// Derived entirely from the request and the composed blueprint.
pub struct SetupGuide<'a> {
    project_name: &'a str,
    blueprint: &'a Blueprint,
    options: &'a GenerationOptions,
}

impl<'a> SetupGuide<'a> {
    pub fn new(project_name: &'a str, blueprint: &'a Blueprint, options: &'a GenerationOptions) -> Self {
        Self {
            project_name,
            blueprint,
            options,
        }
    }

    fn has_feature(&self, name: &str) -> bool {
        self.blueprint.applied_features().iter().any(|f| f == name)
    }

    fn quick_start(&self) -> String {
        match self.blueprint.category() {
            TemplateCategory::FrontendSpa => "\
#### 1. Install Dependencies
```bash
npm install
```

#### 2. Configure the API URL (optional)
Copy `.env.example` to `.env` and adjust `REACT_APP_API_URL`.

#### 3. Start the Development Server
```bash
npm start
```

The app opens at http://localhost:3000

#### 4. Build for Production
```bash
npm run build
```

"
            .to_string(),
            TemplateCategory::BackendNode => "\
#### 1. Install Dependencies
```bash
npm install
```

#### 2. Configure the Environment
Adjust `PORT` and `NODE_ENV` in `.env`.

#### 3. Start the Development Server
```bash
npm run dev
```

The server listens on http://localhost:3000

#### 4. Run in Production
```bash
npm start
```

"
            .to_string(),
            TemplateCategory::DesktopGui => {
                let mut content = format!(
                    "{PYTHON_VENV}#### 3. Configure the Environment\nSet `APP_NAME={}` in `.env`.\n\n\
                     #### 4. Run the Application\n```bash\npython run.py\n```\n\n",
                    self.project_name
                );
                if self.has_feature(API_INTEGRATION) {
                    content.push_str(
                        "#### 5. Run the API Server (optional)\n\
                         In a separate terminal:\n```bash\npython run_api.py\n```\n\n\
                         Interactive documentation is served at http://localhost:8000/docs\n\n",
                    );
                }
                content
            }
            _ => format!(
                "{PYTHON_VENV}#### 3. Configure the Environment\nEdit `.env` with your settings.\n\n\
                 #### 4. Run the Application\n```bash\npython run.py\n```\n\n"
            ),
        }
    }

    fn included(&self) -> Vec<String> {
        let category = self.blueprint.category();
        let mut items = vec!["Architecture folder with a draw.io diagram".to_string()];

        if category.accepts_python_addons() {
            if self.options.enable_logger {
                items.push("Logger with file rotation".to_string());
            }
            if self.options.enable_exception_handler {
                items.push("Exception handler".to_string());
            }
        }
        items.extend(self.blueprint.applied_features().iter().cloned());
        if category.accepts_python_addons() && self.options.database.is_some() {
            items.push(format!(
                "Database: {}",
                self.options.database.as_str().to_uppercase()
            ));
        }
        items
    }
}

impl GeneratedFile for SetupGuide<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(SETUP_GUIDE_PATH)
    }

    fn render(&self) -> String {
        let mut content = format!(
            "# Setup Instructions\n\n## Project: {}\n## Template: {}\n\n### Quick Start\n\n",
            self.project_name,
            self.blueprint.template()
        );
        content.push_str(&self.quick_start());

        content.push_str("### Included\n\n");
        for item in self.included() {
            content.push_str(&format!("- {}\n", item));
        }
        content.push_str(TAIL);
        content
    }
}

#[cfg(test)]
mod tests {
    use trellis_catalog::Catalog;
    use trellis_core::DatabaseType;

    use super::*;

    fn render(label: &str, options: &GenerationOptions) -> String {
        let blueprint = Blueprint::compose(&Catalog::builtin(), &label.into(), options);
        SetupGuide::new("demo", &blueprint, options).render()
    }

    #[test]
    fn test_react_guide() {
        let content = render("React Web Dashboard", &GenerationOptions::default());
        insta::assert_snapshot!(content.lines().take(8).collect::<Vec<_>>().join("\n"), @r"
        # Setup Instructions

        ## Project: demo
        ## Template: React Web Dashboard

        ### Quick Start

        #### 1. Install Dependencies
        ");
        assert!(content.contains("npm start"));
        assert!(!content.contains("Logger"));
        assert!(content.ends_with("5. Deploy\n"));
    }

    #[test]
    fn test_desktop_guide_with_api() {
        let options = GenerationOptions::default().with_feature("API Integration");
        let content = render("Desktop Application", &options);

        assert!(content.contains("python run_api.py"));
        assert!(content.contains("APP_NAME=demo"));
        assert!(content.contains("- Logger with file rotation\n"));
        assert!(content.contains("- Exception handler\n"));
        assert!(content.contains("- API Integration\n"));
    }

    #[test]
    fn test_desktop_guide_without_api() {
        let content = render("Desktop Application", &GenerationOptions::default());
        assert!(!content.contains("run_api.py"));
    }

    #[test]
    fn test_database_listed_for_python() {
        let options = GenerationOptions::default().with_database(DatabaseType::Postgresql);
        assert!(render("FastAPI Core Service", &options).contains("- Database: POSTGRESQL\n"));
        assert!(!render("Node.js Application", &options).contains("Database:"));
    }

    #[test]
    fn test_included_section() {
        let options = GenerationOptions {
            enable_logger: false,
            ..GenerationOptions::default().with_feature("Rate Limiting")
        };
        let content = render("Mobile App Backend", &options);
        let section = content
            .split("### Included\n\n")
            .nth(1)
            .and_then(|rest| rest.split("\n###").next())
            .unwrap()
            .trim_end();

        insta::assert_snapshot!(section, @r"
        - Architecture folder with a draw.io diagram
        - Exception handler
        - Rate Limiting
        ");
    }
}
