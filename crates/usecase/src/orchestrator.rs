// crates/usecase/src/orchestrator.rs
use letter_tally_domain::model::DecodedFile;
use letter_tally_ports::decoding::{DecodePlan, DecodedFileDto, LineDecoder};
use letter_tally_shared_kernel::{ErrorContext, Result};

use crate::dto::AggregateOutput;

pub struct BuildAggregate<'a> {
    decoder: &'a dyn LineDecoder,
}

impl<'a> BuildAggregate<'a> {
    pub fn new(decoder: &'a dyn LineDecoder) -> Self {
        Self { decoder }
    }

    pub fn run(&self, plan: &DecodePlan) -> Result<AggregateOutput> {
        let files = self.decode(plan)?;
        let aggregate = files.iter().map(|file| file.text.as_str()).collect();
        Ok(AggregateOutput { files, aggregate })
    }

    fn decode(&self, plan: &DecodePlan) -> Result<Vec<DecodedFile>> {
        let dtos = self
            .decoder
            .decode(plan)
            .with_context(|| format!("decoding {} input file(s)", plan.paths.len()))?;
        Ok(dtos.into_iter().map(port_to_domain_file).collect())
    }
}

fn port_to_domain_file(dto: DecodedFileDto) -> DecodedFile {
    DecodedFile { path: dto.path, text: dto.text }
}
