use anyhow::{bail, Context};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const PATH_PROMPT: &str = "File path? > ";

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot a beam solver solution document")]
pub struct Args {
    /// Solution document to plot; prompted for when omitted
    pub path: Option<PathBuf>,
    /// Load viewer settings from YAML
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Start with the unsegmented solution points shown
    #[arg(long, default_value_t = false)]
    pub show_solution: bool,
}

impl Args {
    /// The positional path, or one line read after prompting.
    pub fn resolve_path<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> anyhow::Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => prompt_path(input, output),
        }
    }
}

pub fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<PathBuf> {
    output.write_all(PATH_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("reading file path from stdin")?;
    if read == 0 {
        bail!("end of input while waiting for a file path");
    }
    let trimmed = line
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(&line);
    Ok(PathBuf::from(trimmed))
}
