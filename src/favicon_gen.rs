use anyhow::{Context, Result};
use image::{
    codecs::ico::{IcoEncoder, IcoFrame},
    imageops::FilterType,
    ColorType, DynamicImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Square PNG sizes covering browser tabs, PWA launchers and hi-dpi bookmarks.
const PNG_SIZES: [u32; 8] = [16, 32, 48, 64, 128, 180, 192, 512];

/// Sizes embedded in favicon.ico, smallest first so 16x16 is the primary entry.
const ICO_SIZES: [u32; 4] = [16, 32, 48, 64];

/// Apple home-screen icons are 180x180.
const TOUCH_ICON_SIZE: u32 = 180;

pub fn generate_favicons(input: &Path, output: &Path) -> Result<()> {
    // Ensure the output directory exists
    create_dir_all(output).context("Can't create output directory")?;

    // Load source image
    let source = load_image(input)?;

    generate_pngs(&source, output)?;
    generate_ico(&source, output)?;
    generate_touch_icon(&source, output)?;

    println!("\nAll favicons saved to '{}/'", output.display());
    Ok(())
}

fn load_image(path: &Path) -> Result<DynamicImage> {
    let source = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?;

    // Normalize to RGBA so every output keeps an alpha channel
    Ok(DynamicImage::ImageRgba8(source.to_rgba8()))
}

fn generate_pngs(source: &DynamicImage, out_dir: &Path) -> Result<()> {
    for size in PNG_SIZES {
        let resized = source.resize_exact(size, size, FilterType::Lanczos3);
        let filename = format!("favicon-{size}x{size}.png");
        save_png(&resized, &out_dir.join(&filename))?;
        println!("Created {filename}");
    }
    Ok(())
}

fn generate_ico(source: &DynamicImage, out_dir: &Path) -> Result<()> {
    let mut frames = Vec::new();

    for size in ICO_SIZES {
        let resized = source.resize_exact(size, size, FilterType::Lanczos3);
        let rgba_image = resized.to_rgba8();

        frames.push(IcoFrame::as_png(
            rgba_image.as_raw(),
            size,
            size,
            ColorType::Rgba8,
        )?);
    }

    let mut out_file = BufWriter::new(File::create(out_dir.join("favicon.ico"))?);
    let encoder = IcoEncoder::new(&mut out_file);
    encoder.encode_images(&frames)?;
    out_file.flush()?;

    println!("Created favicon.ico");
    Ok(())
}

fn generate_touch_icon(source: &DynamicImage, out_dir: &Path) -> Result<()> {
    let resized = source.resize_exact(TOUCH_ICON_SIZE, TOUCH_ICON_SIZE, FilterType::Lanczos3);
    save_png(&resized, &out_dir.join("apple-touch-icon.png"))?;
    println!("Created apple-touch-icon.png");
    Ok(())
}

fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut file = File::create(path).context("Failed to create PNG file")?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    Ok(())
}
