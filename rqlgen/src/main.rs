/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Generates the Java driver sources using the default directory layout.

use rqlgen::prelude::*;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = GeneratorConfig::default();
    info!("Generating Java driver sources into {}", config.package_dir.display());

    let report = Generator::new(config).run()?;
    if report.metadata_updated {
        info!("term metadata was updated");
    }
    Ok(())
}
