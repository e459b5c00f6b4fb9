use crate::core::loader::{sort_by_age, RecordLoader};
use crate::core::report::render;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{LoadResult, OutputFormat, Person, RosterReport};
use crate::utils::error::{Result, RosterError};
use std::path::Path;

pub struct RosterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RosterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn formats(&self) -> Result<Vec<OutputFormat>> {
        let mut formats = Vec::new();
        for raw in self.config.output_formats() {
            let format = raw
                .parse::<OutputFormat>()
                .map_err(|reason| RosterError::InvalidConfigValueError {
                    field: "output.formats".to_string(),
                    value: raw.clone(),
                    reason,
                })?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Ok(formats)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for RosterPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Person>> {
        let loader = RecordLoader::new(&self.storage).with_policy(self.config.age_policy());
        loader.load(self.config.input_path())
    }

    fn transform(&self, records: Vec<Person>) -> Result<RosterReport> {
        let sorted = sort_by_age(&records);
        let result = LoadResult { records, sorted };

        let mut outputs = Vec::new();
        for format in self.formats()? {
            tracing::debug!("Rendering {:?} output", format);
            outputs.push(render(&result, format)?);
        }

        Ok(RosterReport { result, outputs })
    }

    fn load(&self, report: RosterReport) -> Result<Vec<String>> {
        let Some(output_path) = self.config.output_path() else {
            for output in &report.outputs {
                print!("{}", output.content);
            }
            return Ok(vec!["stdout".to_string()]);
        };

        let mut written = Vec::new();
        for output in &report.outputs {
            let target = Path::new(output_path).join(output.format.file_name());
            let target = target.to_string_lossy().into_owned();
            tracing::debug!("Writing {} bytes to {}", output.content.len(), target);
            self.storage.write_file(&target, output.content.as_bytes())?;
            written.push(target);
        }

        Ok(written)
    }
}
