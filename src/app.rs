use std::path::PathBuf;

use aws_sdk_ec2::types::Reservation;
use tracing::{debug, info};

use crate::config::TagArgs;
use crate::ec2::InstanceLookup;
use crate::error::{Error, Result};
use crate::output::OutputWriter;

/// Runs the `tag` subcommand against an instance source.
pub struct App<L> {
    lookup: L,
    output_dir: PathBuf,
}

impl<L: InstanceLookup> App<L> {
    pub fn new(lookup: L, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            lookup,
            output_dir: output_dir.into(),
        }
    }

    /// Validate arguments, look instances up and write one file per instance.
    ///
    /// Argument and lookup errors are reported on stderr before being returned.
    pub async fn run(&self, args: &TagArgs) -> Result<()> {
        let search_value = match args.search_value() {
            Ok(value) => value,
            Err(e) => {
                eprintln!("error:{}, args is {:?}", e, args.search);
                return Err(e);
            }
        };

        let reservations = match self.fetch(args).await {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error:{}, search text is '{}'", e, search_value);
                return Err(e);
            }
        };

        info!("Found {} reservation(s)", reservations.len());

        let writer = OutputWriter::new(&self.output_dir, args.tag_key.as_str());
        match writer.write_reservations(&reservations) {
            0 => Ok(()),
            failures => Err(Error::WriteFailed(failures)),
        }
    }

    async fn fetch(&self, args: &TagArgs) -> Result<Vec<Reservation>> {
        let query = args.to_query()?;
        debug!("Resolved query: {:?}", query);
        self.lookup.describe_by_tag(&query).await
    }
}
