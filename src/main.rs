use anyhow::Result;

use wavplayer_icongen::constants::{output, sizes};
use wavplayer_icongen::export::{self, ContainerWrite};
use wavplayer_icongen::icon;

fn main() -> Result<()> {
    println!("Generating WavPlayer icon artwork...");

    // One render per container resolution, ascending
    let mut renders = Vec::with_capacity(sizes::CONTAINER.len());
    for &size in sizes::CONTAINER.iter() {
        println!("  Rendering {}x{}...", size, size);
        renders.push(icon::render(size));
    }

    match export::write_container_or_fallback(output::ICO, &renders)? {
        ContainerWrite::MultiRes => {
            println!(
                "✓ Generated {} with sizes: {:?}",
                output::ICO,
                sizes::CONTAINER
            );
        }
        ContainerWrite::Fallback => {
            println!(
                "✓ Generated {} ({}x{} fallback only)",
                output::ICO,
                sizes::FALLBACK,
                sizes::FALLBACK
            );
        }
    }

    // Full-resolution preview, rendered above the container's 256px ceiling
    let preview = icon::render(sizes::PREVIEW);
    export::write_png(output::PREVIEW_PNG, &preview)?;
    println!(
        "✓ Generated {} ({}x{} preview)",
        output::PREVIEW_PNG,
        sizes::PREVIEW,
        sizes::PREVIEW
    );

    // Secondary UI surfaces reuse the container renders at those sizes
    for (&size, img) in sizes::CONTAINER.iter().zip(renders.iter()) {
        let name = match size {
            48 => output::PNG_48,
            256 => output::PNG_256,
            _ => continue,
        };
        export::write_png(name, img)?;
        println!("✓ Generated {} ({}x{})", name, size, size);
    }

    Ok(())
}
