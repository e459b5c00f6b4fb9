use crate::domain::model::{AgePolicy, Person, RosterReport};
use crate::utils::error::Result;
use std::io::BufRead;

pub trait Storage {
    type Reader: BufRead;

    /// The returned reader owns the handle; dropping it releases the file.
    fn open(&self, path: &str) -> Result<Self::Reader>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

impl<S: Storage> Storage for &S {
    type Reader = S::Reader;

    fn open(&self, path: &str) -> Result<Self::Reader> {
        (**self).open(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn output_formats(&self) -> &[String];
    fn age_policy(&self) -> AgePolicy;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Person>>;
    fn transform(&self, data: Vec<Person>) -> Result<RosterReport>;
    fn load(&self, report: RosterReport) -> Result<Vec<String>>;
}
