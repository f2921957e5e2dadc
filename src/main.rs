use anyhow::Result;
use pagebuilder::cli::{App, Args};

fn main() -> Result<()> {
    let args = Args::parse_args();
    let mut app = App::from_args(&args)?;

    app.run(args)?;

    Ok(())
}
