/// Basic example: compose a text banner and densify a generated test image
///
/// Creates a radial gradient image in memory, runs both pipelines, and
/// prints the results to stdout.
use asciigen::{FontTable, compose_styled, densify, render};
use image::{DynamicImage, Rgba, RgbaImage};

#[tokio::main]
async fn main() {
    println!("asciigen - Basic Example");
    println!("========================\n");

    // Text pipeline
    let table = FontTable::builtin();
    let banner = compose_styled("ASCII", "standard", &table).into_text();
    println!("{banner}\n");

    // Build a 200x120 radial gradient test image
    let width = 200;
    let height = 120;
    let mut img = RgbaImage::new(width, height);
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let max_dist = (cx * cx + cy * cy).sqrt();
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let level = (dist / max_dist * 255.0) as u8;
            img.put_pixel(x, y, Rgba([level, level, 255 - level, 255]));
        }
    }

    // Image pipeline
    let art = densify(DynamicImage::ImageRgba8(img), 0.6)
        .await
        .expect("densify failed");
    println!("{}", art.grayscale);

    // Paint the color version onto a PNG canvas
    let prepared = render::prepare(&art.color, 1.0, 1.0);
    let canvas = render::paint(
        &prepared,
        &render::CanvasOptions { color: true, ..Default::default() },
    );
    canvas.save("basic_output.png").expect("Failed to save output");
    println!("\n✓ Saved color rendering to: basic_output.png");
}
