use argh::FromArgs;
use std::path::PathBuf;

use pixelkit::{
    imgproc::histogram::{HistogramOptions, Histograms},
    io::ppm,
};

#[derive(FromArgs)]
/// Print the normalized red, green, blue and intensity histograms of a PPM image
struct Args {
    /// path to the input PPM image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// upper bound of the normalized values
    #[argh(option, default = "100")]
    bound: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let image = ppm::read_image_ppm(&args.input)?;
    log::info!("read {} image from {}", image.size(), args.input.display());

    let options = HistogramOptions {
        display_bound: args.bound,
    };
    let histograms = Histograms::from_image(&image).normalize(&options);

    // one line per table: red, green, blue, intensity
    for table in histograms.tables() {
        let line = table
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!("{line}");
    }

    Ok(())
}
