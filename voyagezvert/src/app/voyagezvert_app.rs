use super::{AppError, Operation};
use clap::Parser;
use std::{fs::File, io::BufWriter};

/// VoyagezVert command line tool for trip carbon reports and eco-rated offering search.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct VoyagezVertApp {
    #[command(subcommand)]
    pub op: Operation,
    /// write the JSON result to this file instead of stdout
    #[arg(long, global = true)]
    pub output_file: Option<String>,
}

impl VoyagezVertApp {
    pub fn run(&self) -> Result<(), AppError> {
        let result = self.op.run()?;
        match &self.output_file {
            Some(f) => {
                let writer = BufWriter::new(File::create(f)?);
                serde_json::to_writer_pretty(writer, &result)?;
                log::info!("wrote result to {f}");
            }
            None => println!("{}", serde_json::to_string_pretty(&result)?),
        }
        Ok(())
    }
}
