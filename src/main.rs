use clap::Parser;
use iconsmith::emit::{self, EmitPlan};
use iconsmith::imaging::Compression;
use iconsmith::naming::NamingPolicy;
use iconsmith::output;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iconsmith")]
#[command(about = "Resize a PNG icon into a fixed set of square sizes")]
#[command(long_about = "\
Resize a PNG icon into a fixed set of square sizes

Decodes the source once, then writes one size x size PNG per requested
edge length into the source's directory. Outputs are named from the size:

  iconsmith logo.png                     logo_256x256.png ... logo_16x16.png
  iconsmith logo.png --prefix MyIcon     MyIcon_256.png   ... MyIcon_16.png

A non-.png extension is a warning, not an error: the real format is
sniffed from the file contents. A failure partway through leaves the
icons already written on disk.")]
#[command(version)]
struct Cli {
    /// Source image (PNG expected; any decodable raster works)
    input: PathBuf,

    /// Target edge lengths in pixels, processed in the given order
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = emit::DEFAULT_SIZES.to_vec()
    )]
    sizes: Vec<u32>,

    /// Name outputs {PREFIX}_{size}.png instead of {stem}_{size}x{size}.png
    #[arg(long)]
    prefix: Option<String>,

    /// Spend more time compressing for smaller files
    #[arg(long)]
    optimize: bool,
}

fn main() {
    let cli = Cli::parse();

    let plan = EmitPlan {
        sizes: cli.sizes,
        naming: match cli.prefix {
            Some(prefix) => NamingPolicy::FixedPrefix(prefix),
            None => NamingPolicy::SourceStem,
        },
        compression: if cli.optimize {
            Compression::Best
        } else {
            Compression::Default
        },
    };

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_emit_event(&event);
        }
    });

    let result = emit::emit_icons(&cli.input, &plan, Some(tx));
    printer.join().expect("printer thread panicked");

    match result {
        Ok(report) => output::print_run_summary(&report),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
