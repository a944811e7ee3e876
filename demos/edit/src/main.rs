use argh::FromArgs;
use std::path::PathBuf;

use pixelkit::{
    imgproc::{mask, Operation},
    io::ppm,
};

#[derive(FromArgs)]
/// Apply an operation to a PPM image, optionally through a clipping mask
struct Args {
    /// path to the input PPM image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to write the result to
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// the operation, e.g. blur, sepia, brighten or downsize
    #[argh(option)]
    op: String,

    /// optional clipping mask, the operation applies where it is black
    #[argh(option)]
    mask: Option<PathBuf>,

    /// the brightness delta for brighten
    #[argh(option)]
    delta: Option<i32>,

    /// the target width for downsize
    #[argh(option)]
    width: Option<usize>,

    /// the target height for downsize
    #[argh(option)]
    height: Option<usize>,
}

fn parse_operation(args: &Args) -> Result<Operation, Box<dyn std::error::Error>> {
    let op = match args.op.to_lowercase().as_str() {
        "brighten" => Operation::Brighten(args.delta.ok_or("brighten requires --delta")?),
        "downsize" => match (args.width, args.height) {
            (Some(width), Some(height)) => Operation::Downsize { width, height },
            _ => return Err("downsize requires --width and --height".into()),
        },
        name => name.parse()?,
    };
    Ok(op)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let op = parse_operation(&args)?;

    let image = ppm::read_image_ppm(&args.input)?;
    log::info!("read {} image from {}", image.size(), args.input.display());

    let out = match &args.mask {
        Some(mask_path) => {
            let clip = ppm::read_image_ppm(mask_path)?;
            log::info!("applying {op} through mask {}", mask_path.display());
            mask::apply_masked(&image, &clip, &op)?
        }
        None => {
            log::info!("applying {op}");
            op.apply(&image)?
        }
    };

    ppm::write_image_ppm(&args.output, &out)?;
    log::info!("wrote {} image to {}", out.size(), args.output.display());

    Ok(())
}
