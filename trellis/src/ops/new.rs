//! New operation - project generation and dry-run preview.

use trellis_catalog::Catalog;
use trellis_core::substitute_name;
use trellis_engine::{Blueprint, GenerationRequest, Generator, Result};

use crate::reports::{GenerationResult, NewReport, PreviewFile, PreviewResult, WrittenResult};

/// Generate the project and describe the outcome.
pub fn generate(catalog: &Catalog, request: &GenerationRequest) -> Result<NewReport> {
    let generator = Generator::new(catalog);
    let blueprint = generator.compose(request);
    let project = generator.generate(request)?;

    Ok(report(
        request,
        &blueprint,
        GenerationResult::Written(WrittenResult {
            root: project.root,
            file_count: project.files.len(),
            repository: project.repository,
        }),
    ))
}

/// Compose the project without touching the filesystem.
///
/// The request is validated like a real run, so a preview never succeeds
/// where generation would be rejected.
pub fn preview(catalog: &Catalog, request: &GenerationRequest) -> Result<NewReport> {
    request.validate()?;
    let blueprint = Generator::new(catalog).compose(request);
    let files = blueprint
        .files()
        .iter()
        .map(|(path, content)| PreviewFile {
            path: path.to_string(),
            content: substitute_name(content, &request.project_name),
        })
        .collect();

    Ok(report(
        request,
        &blueprint,
        GenerationResult::Preview(PreviewResult {
            root: request.project_root(),
            files,
        }),
    ))
}

fn report(request: &GenerationRequest, blueprint: &Blueprint, result: GenerationResult) -> NewReport {
    NewReport {
        project_name: request.project_name.clone(),
        template: blueprint.template().to_string(),
        category: blueprint.category().slug().to_string(),
        features: blueprint.applied_features().to_vec(),
        ignored_features: blueprint.ignored_features().to_vec(),
        result,
    }
}
