//! Pipeline run command handler.

use super::RunArgs;
use reelsmith::{
    IoWriteError, IoWriteErrorKind, Pipeline, PipelineConfig, PipelineRequestBuilder,
    PlatformTable, ReelsmithResult,
};

/// Run the pipeline and print the result on stdout.
///
/// The dump file is only written after the whole run succeeded.
#[tracing::instrument(skip_all, fields(scenario = %args.scenario.display(), media = %args.media.display()))]
pub fn run_pipeline(args: &RunArgs) -> ReelsmithResult<()> {
    let config = PipelineConfig::load(args.platform_config.as_deref(), args.publish_config.as_deref())?;
    let pipeline = Pipeline::new(config, PlatformTable::builtin(), args.output_dir.clone());

    let request = PipelineRequestBuilder::default()
        .scenario_path(args.scenario.clone())
        .media_path(args.media.clone())
        .engines(args.engines.clone())
        .platforms(args.platforms.clone())
        .media_extensions(args.extensions.clone())
        .build()
        .map_err(|e| {
            reelsmith::InputError::new(reelsmith::InputErrorKind::MissingField(e.to_string()))
        })?;

    let output = pipeline.run(&request)?;
    let json = output.to_json_pretty()?;

    if let Some(dump) = &args.dump {
        if let Some(parent) = dump.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                IoWriteError::new(IoWriteErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }
        std::fs::write(dump, &json).map_err(|e| {
            IoWriteError::new(IoWriteErrorKind::FileWrite(format!(
                "{}: {}",
                dump.display(),
                e
            )))
        })?;
        tracing::info!(path = %dump.display(), "Wrote result dump");
    }

    println!("{}", json);
    Ok(())
}
