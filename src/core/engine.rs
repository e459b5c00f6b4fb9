use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RosterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RosterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting roster run");

        // Extract
        let records = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", records.len());

        // Transform
        let report = self.pipeline.transform(records)?;
        tracing::info!(
            "Sorted {} records into {} output(s)",
            report.result.sorted.len(),
            report.outputs.len()
        );

        // Load
        let destinations = self.pipeline.load(report)?;
        for destination in &destinations {
            tracing::info!("Output written to: {}", destination);
        }

        Ok(destinations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LoadResult, Person, RosterReport};
    use crate::utils::error::RosterError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPipeline {
        phases: RefCell<Vec<&'static str>>,
        fail_extract: bool,
    }

    impl Pipeline for RecordingPipeline {
        fn extract(&self) -> Result<Vec<Person>> {
            self.phases.borrow_mut().push("extract");
            if self.fail_extract {
                return Err(RosterError::FileOpenError {
                    path: "ages".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                });
            }
            Ok(vec![Person::new("Alice", 30)])
        }

        fn transform(&self, data: Vec<Person>) -> Result<RosterReport> {
            self.phases.borrow_mut().push("transform");
            Ok(RosterReport {
                result: LoadResult {
                    sorted: data.clone(),
                    records: data,
                },
                outputs: Vec::new(),
            })
        }

        fn load(&self, _report: RosterReport) -> Result<Vec<String>> {
            self.phases.borrow_mut().push("load");
            Ok(vec!["memory".to_string()])
        }
    }

    #[test]
    fn test_run_drives_all_phases_in_order() {
        let engine = RosterEngine::new(RecordingPipeline::default());
        assert_eq!(engine.run().unwrap(), vec!["memory"]);
        assert_eq!(
            *engine.pipeline.phases.borrow(),
            vec!["extract", "transform", "load"]
        );
    }

    #[test]
    fn test_run_stops_on_extract_failure() {
        let engine = RosterEngine::new(RecordingPipeline {
            fail_extract: true,
            ..Default::default()
        });
        assert!(engine.run().is_err());
        assert_eq!(*engine.pipeline.phases.borrow(), vec!["extract"]);
    }
}
