use clap::Parser;
use std::env;
use std::path::PathBuf;
use vitae::{ExportError, load_cv_data, write_docx_document, write_print_document};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CV content model as JSON (camelCase, the browser caller's shape)
    #[arg(long, default_value = "data/cv_sample.json")]
    data: PathBuf,

    /// Directory the documents are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Only write the print document
    #[arg(long, default_value_t = false)]
    html_only: bool,

    /// Only write the word-processor document
    #[arg(long, default_value_t = false)]
    docx_only: bool,
}

fn main() -> Result<(), ExportError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vitae=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let data = load_cv_data(&args.data)?;
    println!("✓ Content model loaded for {}", data.name);

    let today = chrono::Local::now().date_naive();

    if !args.docx_only {
        let path = write_print_document(&data, &args.out_dir, today)?;
        println!("✓ Print document: {}", path.display());
    }

    if !args.html_only {
        let path = write_docx_document(&data, &args.out_dir, today)?;
        println!("✓ Word-processor document: {}", path.display());
    }

    Ok(())
}
