use std::error::Error;

use tracing_subscriber::EnvFilter;

use tintex::{ColorizeConfig, sample_paper_demo, strip_color_directives};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = ColorizeConfig::default();
    let iterations = sample_paper_demo(&cfg)?;

    println!("Colorized the sample paper into {} iteration(s):", iterations.len());
    for iteration in &iterations {
        println!(
            "  iteration {}: {} entities, {} bytes rewritten",
            iteration.index,
            iteration.entities.len(),
            iteration.tex.len()
        );
        for entity in &iteration.entities {
            println!(
                "    entity {} hue {:.4}: {}",
                entity.index,
                entity.hue,
                strip_color_directives(&entity.tex)
            );
        }
    }

    Ok(())
}
