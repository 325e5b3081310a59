//! Command-line front end for the photo tools.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use framefit::export::{ExportFormat, converted_file_name, framed_file_name, resized_file_name};
use framefit::raster::{self, DecodedImage};
use framefit::{
    AspectRatio, CanvasColor, Driving, FrameSpec, InsetSpec, ResizeSpec, favicon_plan,
    resolve_dimensions,
};
use image::DynamicImage;

#[derive(Parser, Debug)]
#[command(version, about = "Frame, resize and convert photos")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place a photo on a canvas of a fixed aspect ratio
    Frame {
        input: PathBuf,
        /// Canvas aspect ratio: 1:1, 4:5, 5:4, 9:16, 16:9 or 2:1
        #[arg(long, default_value = "1:1")]
        aspect: AspectRatio,
        /// Border as a percentage of the canvas's shorter side, 1 to 20
        #[arg(long, default_value_t = InsetSpec::DEFAULT.percentage())]
        inset: f64,
        /// Canvas color: a name or `#rrggbb`
        #[arg(long, default_value = "white")]
        background: CanvasColor,
        #[arg(long, value_enum, default_value_t = Format::Jpeg)]
        format: Format,
        /// Encoder quality, 0 to 1
        #[arg(long, default_value_t = 0.95)]
        quality: f32,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Change pixel dimensions
    Resize {
        input: PathBuf,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// Scale both sides by a percentage instead
        #[arg(long, conflicts_with_all = ["width", "height"])]
        percent: Option<f64>,
        /// Ratio to lock to: Original, 1:1, 16:9, 4:3, 3:2 or 2:1
        #[arg(long, default_value = "Original")]
        aspect: String,
        /// Use width and height as given
        #[arg(long)]
        unlocked: bool,
        /// Which side drives the locked ratio (defaults to whichever was given)
        #[arg(long, value_enum)]
        driving: Option<DrivingArg>,
        #[arg(long, value_enum, default_value_t = Format::Jpeg)]
        format: Format,
        #[arg(long, default_value_t = ExportFormat::RESIZE_JPEG_QUALITY)]
        quality: f32,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Convert to PNG or WebP
    Convert {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Webp)]
        to: Format,
        #[arg(long, default_value_t = 0.8)]
        quality: f32,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Make a 128x128 ICO favicon
    Favicon {
        input: PathBuf,
        #[arg(long, short, default_value = "favicon.ico")]
        output: PathBuf,
    },
    /// Print dimensions and orientation
    Info { input: PathBuf },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Png,
    Jpeg,
    Webp,
}

impl Format {
    fn export(self, quality: f32) -> Result<ExportFormat> {
        Ok(match self {
            Self::Png => ExportFormat::Png,
            Self::Jpeg => ExportFormat::jpeg(quality)?,
            Self::Webp => ExportFormat::webp(quality)?,
        })
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DrivingArg {
    Width,
    Height,
}

impl From<DrivingArg> for Driving {
    fn from(d: DrivingArg) -> Self {
        match d {
            DrivingArg::Width => Self::Width,
            DrivingArg::Height => Self::Height,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Frame {
            input,
            aspect,
            inset,
            background,
            format,
            quality,
            output,
        } => {
            if !aspect.is_frame_preset() {
                bail!(
                    "unsupported frame ratio {aspect}; use one of {}",
                    presets(&AspectRatio::FRAME_PRESETS)
                );
            }
            let inset = InsetSpec::from_slider(inset).with_context(|| {
                format!(
                    "inset must be between {} and {}",
                    InsetSpec::SLIDER_MIN,
                    InsetSpec::SLIDER_MAX
                )
            })?;
            let source = load(&input)?;
            let format = format.export(quality)?;
            let layout = FrameSpec::new(aspect)
                .inset(inset)
                .background(background)
                .compute(source.dimensions())
                .context("cannot lay out frame")?;
            let framed = DynamicImage::ImageRgba8(raster::render_frame(&source, &layout));
            let out = output.unwrap_or_else(|| sibling(&input, |name| framed_file_name(name, format)));
            write(&framed, format, &out)
        }
        Command::Resize {
            input,
            width,
            height,
            percent,
            aspect,
            unlocked,
            driving,
            format,
            quality,
            output,
        } => {
            let source = load(&input)?;
            let format = format.export(quality)?;
            let spec = match percent {
                Some(p) => ResizeSpec::percentage(p),
                None if width.is_none() && height.is_none() => {
                    bail!("give --width, --height or --percent")
                }
                None => {
                    let lock = (!unlocked).then(|| match driving {
                        Some(d) => d.into(),
                        None if width.is_none() => Driving::Height,
                        None => Driving::Width,
                    });
                    ResizeSpec::Absolute {
                        width,
                        height,
                        lock,
                    }
                }
            };
            let ratio = AspectRatio::parse_choice(&aspect)?;
            if let Some(r) = ratio
                && !r.is_resize_preset()
            {
                bail!(
                    "unsupported resize ratio {r}; use Original or one of {}",
                    presets(&AspectRatio::RESIZE_PRESETS)
                );
            }
            let target = resolve_dimensions(source.dimensions(), spec, ratio)
                .context("cannot resolve output size")?;
            let resized = raster::render_resize(&source, target);
            let out = output.unwrap_or_else(|| sibling(&input, |name| resized_file_name(name, format)));
            write(&resized, format, &out)
        }
        Command::Convert {
            input,
            to,
            quality,
            output,
        } => {
            if matches!(to, Format::Jpeg) {
                bail!("convert writes PNG or WebP");
            }
            let source = load(&input)?;
            let format = to.export(quality)?;
            let out = output.unwrap_or_else(|| sibling(&input, |name| converted_file_name(name, format)));
            write(source.image(), format, &out)
        }
        Command::Favicon { input, output } => {
            let source = load(&input)?;
            let bytes = raster::render_favicon(&source).context("cannot build favicon")?;
            raster::save(&bytes, &output)
                .with_context(|| format!("cannot write {}", output.display()))?;
            log::info!("saved {}", output.display());
            Ok(())
        }
        Command::Info { input } => {
            let source = load(&input)?;
            let dims = source.dimensions();
            let plan = favicon_plan(dims);
            println!("{}", input.display());
            println!("  size:        {}x{}", dims.width(), dims.height());
            println!("  aspect:      {}", AspectRatio::of(dims));
            println!("  orientation: {:?}", source.orientation());
            println!(
                "  favicon crop: {}x{} at ({}, {})",
                plan.crop.width, plan.crop.height, plan.crop.x, plan.crop.y
            );
            Ok(())
        }
    }
}

fn load(path: &Path) -> Result<DecodedImage> {
    raster::open(path).with_context(|| format!("cannot read {}", path.display()))
}

fn write(image: &DynamicImage, format: ExportFormat, out: &Path) -> Result<()> {
    let bytes = raster::encode(image, format).context("cannot encode output")?;
    raster::save(&bytes, out).with_context(|| format!("cannot write {}", out.display()))?;
    log::info!(
        "saved {} ({}x{}, {})",
        out.display(),
        image.width(),
        image.height(),
        format
    );
    Ok(())
}

fn presets(ratios: &[AspectRatio]) -> String {
    ratios
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Output path in the input's directory, named from the input's file name.
fn sibling(input: &Path, name: impl FnOnce(&str) -> String) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(name(&file_name))
}
