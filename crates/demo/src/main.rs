//! Demo binary entry point.

use std::io;

fn main() -> anyhow::Result<()> {
    showroom_observability::init();

    let stdout = io::stdout();
    showroom_demo::run(&mut stdout.lock())?;

    Ok(())
}
