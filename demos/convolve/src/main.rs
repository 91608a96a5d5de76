use argh::FromArgs;
use std::path::PathBuf;

use kip::imgproc::filter::{convolve, KernelKind};
use kip::imgproc::padding::extend_edge;
use kip::io::{read_image_jpeg_rgb8, write_image_jpeg_rgb8};

#[derive(FromArgs)]
/// Apply a filter kernel to a JPEG image
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the output image
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// kernel kind: box-blur or edge-detection
    #[argh(option, short = 'k', default = "KernelKind::BoxBlur")]
    kernel: KernelKind,

    /// kernel order, an odd positive integer
    #[argh(option, default = "3")]
    order: usize,

    /// jpeg quality of the output, 0-100
    #[argh(option, default = "95")]
    quality: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let image = read_image_jpeg_rgb8(&args.image_path)?;
    log::info!(
        "Image {} loaded from: {}",
        image.size(),
        args.image_path.display()
    );

    let kernel = args.kernel.create(args.order)?;
    log::info!("Kernel \"{}\" {}x{} created", kernel.name(), args.order, args.order);

    let extended = extend_edge(&image, (args.order - 1) / 2)?;
    log::info!("Image extended to {}", extended.size());

    let output = convolve(&extended, &kernel)?;
    log::info!("Image convolved to {}", output.size());

    write_image_jpeg_rgb8(&args.output_path, &output, args.quality)?;
    log::info!(
        "Image {} saved at: {}",
        output.size(),
        args.output_path.display()
    );

    Ok(())
}
