// pdfscan - PDF text extraction with OCR fallback
use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

use pdfscan::config;
use pdfscan::output::default_output_path;
use pdfscan::pdf_extraction::{LopdfTextLayer, OcrEngine, Tesseract};
use pdfscan::system_pdf_renderer::SystemPdfRenderer;
use pdfscan::{ExtractionMethod, Extractor, Mode, EXIT_USAGE};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// PDF file to extract text from
    pdf_path: PathBuf,

    /// Where to write the text [default: output.txt next to the PDF]
    output_file: Option<PathBuf>,

    /// Run OCR even when the PDF has a text layer
    #[arg(long, conflicts_with = "no_ocr")]
    force_ocr: bool,

    /// Never run OCR; fail if the text layer is too sparse
    #[arg(long)]
    no_ocr: bool,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.force_ocr {
            Mode::ForceOcr
        } else if self.no_ocr {
            Mode::NoOcr
        } else {
            Mode::Auto
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("pdfscan=info")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => {
                    println!("Usage: pdfscan <pdf_path> [output_file]");
                    ExitCode::from(EXIT_USAGE)
                }
            };
        }
    };

    let tesseract = Tesseract::locate().filter(Tesseract::is_available);
    report_engine(tesseract.as_ref());

    let output_path = args
        .output_file
        .clone()
        .unwrap_or_else(|| default_output_path(&args.pdf_path));

    let text_layer = LopdfTextLayer;
    let renderer = SystemPdfRenderer::new();
    let extractor = Extractor::new(
        &text_layer,
        &renderer,
        tesseract.as_ref().map(|engine| engine as &dyn OcrEngine),
    )
    .with_mode(args.mode());

    match extractor.run(&args.pdf_path, &output_path) {
        Ok(result) => {
            match result.method {
                ExtractionMethod::Direct => println!("Text extraction completed successfully!"),
                ExtractionMethod::Ocr => println!("OCR text extraction completed successfully!"),
            }
            println!(
                "Extracted {} pages in {}ms ({})",
                result.page_count, result.extraction_time_ms, result.method
            );
            println!("Extracted text saved to: {}", output_path.display());
            println!("PDF processing completed successfully!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{}", err);
            ExitCode::from(err.code())
        }
    }
}

fn report_engine(tesseract: Option<&Tesseract>) {
    match tesseract {
        Some(engine) => {
            println!("Tesseract found and available for OCR processing");
            if !engine.on_path() {
                println!("Tesseract path: {}", engine.command().display());
            }
        }
        None => {
            println!("WARNING: Tesseract OCR is not installed or not accessible.");
            println!("To enable OCR functionality, install Tesseract from:");
            println!("https://github.com/UB-Mannheim/tesseract/wiki");
            println!(
                "or point {} at the tesseract binary. Installation paths checked:",
                config::TESSERACT_ENV
            );
            for path in config::common_tesseract_paths() {
                println!("- {}", path.display());
            }
            println!();
        }
    }
}
