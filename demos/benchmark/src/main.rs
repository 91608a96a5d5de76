use argh::FromArgs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use kip::imgproc::filter::{convolve, KernelKind};
use kip::imgproc::padding::extend_edge;
use kip::io::{read_image_jpeg_rgb8, write_image_jpeg_rgb8};

#[derive(FromArgs)]
/// Batch convolution experiment over kernel kinds and orders
struct Args {
    /// input JPEG images to process
    #[argh(positional)]
    images: Vec<PathBuf>,

    /// kernel kind to benchmark, repeatable (default: box-blur)
    #[argh(option, short = 'k')]
    kernel: Vec<KernelKind>,

    /// kernel order to benchmark, repeatable (default: 7 13 19 25)
    #[argh(option)]
    order: Vec<usize>,

    /// repetitions per measurement
    #[argh(option, default = "3")]
    reps: u32,

    /// path of the CSV report
    #[argh(option, default = "PathBuf::from(\"kip_sequential.csv\")")]
    csv: PathBuf,

    /// directory to save the processed images into (skipped when absent)
    #[argh(option)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let kernel_kinds = if args.kernel.is_empty() {
        vec![KernelKind::BoxBlur]
    } else {
        args.kernel.clone()
    };
    let orders = if args.order.is_empty() {
        vec![7, 13, 19, 25]
    } else {
        args.order.clone()
    };
    // reject even orders before any image work starts
    for &order in &orders {
        if order % 2 == 0 {
            return Err(kip::imgproc::FilterError::EvenKernelOrder(order).into());
        }
    }

    let mut csv = BufWriter::new(File::create(&args.csv)?);
    writeln!(
        csv,
        "ImageName,ImageDimension,KernelName,KernelDimension,NumReps,TotalTime_s,TimePerRep_s"
    )?;

    for image_path in &args.images {
        let image = read_image_jpeg_rgb8(image_path)?;
        let image_name = image_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::info!(
            "Image {image_name} ({}) loaded from: {}",
            image.size(),
            image_path.display()
        );

        for &order in &orders {
            let extended = extend_edge(&image, (order - 1) / 2)?;
            log::info!("Image {image_name} enlarged to {}", extended.size());

            for &kind in &kernel_kinds {
                let kernel = kind.create(order)?;
                log::info!(
                    "Kernel \"{}\" {order}x{order} created",
                    kernel.name()
                );

                let started = Instant::now();
                let mut output = None;
                for _ in 0..args.reps {
                    output = Some(convolve(&extended, &kernel)?);
                }
                let total_time = started.elapsed().as_secs_f64();
                let time_per_rep = total_time / f64::from(args.reps);
                log::info!(
                    "Image processed {} times in {total_time:.3} s with an average of {time_per_rep:.3} s per repetition",
                    args.reps
                );

                if let (Some(output_dir), Some(output)) = (&args.output_dir, &output) {
                    let output_path = output_dir.join(format!(
                        "{image_name}_{}{order}.jpg",
                        kernel.name()
                    ));
                    write_image_jpeg_rgb8(&output_path, output, 95)?;
                    log::info!(
                        "Image {} saved at: {}",
                        output.size(),
                        output_path.display()
                    );
                }

                writeln!(
                    csv,
                    "{image_name},{},{},{order},{},{total_time},{time_per_rep}",
                    image.size(),
                    kernel.name(),
                    args.reps
                )?;
            }
        }
    }

    Ok(())
}
