use anyhow::{Context, Result};
use comisiones_muestra::{SpecGenerateOptions, generate_all};
use log::debug;

fn main() -> Result<()> {
    comisiones_log::init().context("failed to install logger")?;

    let options = SpecGenerateOptions::from_env();
    let report = generate_all(&options).with_context(|| {
        format!(
            "failed to generate sample workbooks in {}",
            options.dir_out.display()
        )
    })?;
    debug!("generated {} workbooks", report.files.len());

    println!("\nArchivos generados en: {}/", options.dir_out.display());
    Ok(())
}
