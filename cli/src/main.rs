mod export;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use asciigen::{
    ArtError, AsciiArt, CanvasOptions, DensifyOptions, FontTable, GenerationSettings, InputKind,
    Session, api, densify_path, prepare,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert text or images to ASCII art")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the supported fonts
    Fonts,
    /// Render text through a bitmap font
    Text(TextArgs),
    /// Convert an image to a character grid
    Image(ImageArgs),
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Input text; use \n for multiple lines
    text: String,
    /// Font style name
    #[arg(long, default_value = "standard")]
    font: String,
    /// Cell repeat factor, 1.0 or more
    #[arg(long, default_value_t = 1.0)]
    font_size: f32,
    /// Inter-character blank-column factor
    #[arg(long, default_value_t = 1.0)]
    letter_spacing: f32,
    /// Render the colorized version
    #[arg(long)]
    color: bool,
    #[command(flatten)]
    exports: ExportArgs,
}

#[derive(Args, Debug)]
struct ImageArgs {
    /// Input image path
    input: PathBuf,
    /// Output resolution factor in (0, 1]
    #[arg(long, default_value_t = 0.7)]
    fidelity: f32,
    /// Render the colorized version
    #[arg(long)]
    color: bool,
    /// Give up on image decoding after this many seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
    #[command(flatten)]
    exports: ExportArgs,
}

#[derive(Args, Debug, Clone)]
struct ExportArgs {
    /// Write a 1200x800 PNG rendering to this path
    #[arg(long)]
    png: Option<PathBuf>,
    /// Write the block as a UTF-8 text file to this path
    #[arg(long)]
    txt: Option<PathBuf>,
    /// Copy the block to the system clipboard
    #[arg(long)]
    clipboard: bool,
}

impl ExportArgs {
    fn any(&self) -> bool {
        self.png.is_some() || self.txt.is_some() || self.clipboard
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Fonts => fonts(),
        Commands::Text(args) => text(args),
        Commands::Image(args) => image(args).await,
    }
}

fn fonts() -> Result<()> {
    let table = FontTable::builtin();
    let response = api::list_fonts(&table);
    for font in response.fonts {
        println!("{:<12} {}", font.name, font.display_name);
    }
    Ok(())
}

fn text(args: TextArgs) -> Result<()> {
    let table = FontTable::builtin();
    let mut session = Session::new();
    session.begin();

    let request = api::GenerateRequest::new(args.text.replace("\\n", "\n"), &args.font);
    let ascii = match api::generate_text(&table, &request) {
        Ok(response) => response.ascii,
        Err(err) => {
            session.fail();
            bail!("{} (status {})", err.to_payload().error, err.status());
        }
    };

    // Text mode has no per-cell color data; both versions carry the block.
    let art = AsciiArt::new(
        InputKind::Text,
        ascii.clone(),
        ascii,
        GenerationSettings::for_text(args.color, &args.font, args.font_size, args.letter_spacing),
    );
    session.complete(art);

    let current = session.current_text(args.color).context("no generated art")?;
    let prepared = prepare(current, args.font_size, args.letter_spacing);
    emit(&prepared, args.color, &args.exports)
}

async fn image(args: ImageArgs) -> Result<()> {
    let mut session = Session::new();
    session.begin();

    let options = DensifyOptions {
        fidelity: args.fidelity,
        decode_timeout: Duration::from_secs(args.timeout_secs),
    };
    let densified = match densify_path(&args.input, &options).await {
        Ok(densified) => densified,
        Err(err) => {
            session.fail();
            return Err(match err {
                ArtError::InvalidInput(msg) => anyhow::anyhow!(msg),
                other => anyhow::Error::new(other)
                    .context(format!("failed to convert {}", args.input.display())),
            });
        }
    };

    let art = AsciiArt::new(
        InputKind::Image,
        densified.color.clone(),
        densified.grayscale_text(),
        GenerationSettings::for_image(args.color, args.fidelity),
    );
    session.complete(art);

    let current = session.current_text(args.color).context("no generated art")?;
    let prepared = prepare(current, 1.0, 1.0);
    emit(&prepared, args.color, &args.exports)
}

/// Print the block unless exports were requested, then run each export
/// action independently. A failed export is reported and does not affect
/// the rendered block or the other actions.
fn emit(prepared: &asciigen::Prepared, color: bool, exports: &ExportArgs) -> Result<()> {
    if !exports.any() {
        for line in &prepared.lines {
            println!("{line}");
        }
        return Ok(());
    }

    let mut failures = 0;
    if let Some(path) = &exports.png {
        let options = CanvasOptions { color, ..Default::default() };
        report(export::export_image(prepared, &options, path), &mut failures);
    }
    if let Some(path) = &exports.txt {
        report(export::export_text(&prepared.lines, path), &mut failures);
    }
    if exports.clipboard {
        report(export::copy_to_clipboard(&prepared.lines.join("\n")), &mut failures);
    }
    if failures > 0 {
        bail!("{failures} export action(s) failed");
    }
    Ok(())
}

fn report(result: Result<export::ExportReceipt>, failures: &mut u32) {
    match result {
        Ok(receipt) => println!("✓ {}: {}", receipt.action, receipt.detail),
        Err(err) => {
            eprintln!("✗ export failed: {err:#}");
            *failures += 1;
        }
    }
}
