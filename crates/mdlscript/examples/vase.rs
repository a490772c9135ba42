//! Minimal example: print the vase script to stdout.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let generator = mdlscript::generator_from_name("vase")?;
    println!("{}", generator.info());

    for artifact in generator.artifacts() {
        println!("# {}", artifact.path.display());
        print!("{}", artifact.script.render());
    }

    Ok(())
}
