use std::path::PathBuf;

use pw_page::PageSnapshot;
use pw_validate::{FieldDescriptor, FormReport};

#[derive(Debug)]
pub struct ValidationRun {
    pub source: PathBuf,
    pub fields: Vec<FieldDescriptor>,
    pub report: FormReport,
}

#[derive(Debug)]
pub struct SimulationRun {
    pub steps: usize,
    pub snapshot: PageSnapshot,
}
