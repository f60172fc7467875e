use anyhow::{Context, Result};
use clap::Parser;
use jpeg_squeeze::batch::{collect_image_files, spawn_batch, BatchEvent, CompressionRequest};
use jpeg_squeeze::cli::Args;
use jpeg_squeeze::logger::{init_logging, is_quiet};
use jpeg_squeeze::report::{format_result_block, format_summary_block};
use jpeg_squeeze::utils::create_progress_bar;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.quiet, args.verbose);

    let inputs = collect_image_files(&args.inputs).context("Failed to resolve input files")?;
    let request = CompressionRequest::new(inputs, args.output, args.quality)?;

    run_batch(request)
}

fn run_batch(request: CompressionRequest) -> Result<()> {
    if !is_quiet() {
        println!("Starting compression...\n");
    }

    let progress = create_progress_bar(request.inputs.len() as u64, is_quiet());
    let handle = spawn_batch(request);

    for event in handle.events().iter() {
        match event {
            BatchEvent::File(result) => {
                progress.inc(1);
                progress.set_message(result.file_name.clone());
                if !result.is_success() || !is_quiet() {
                    progress.suspend(|| println!("{}", format_result_block(&result)));
                }
            }
            BatchEvent::Finished(_) => progress.finish_and_clear(),
        }
    }

    let summary = handle.join().context("Batch did not complete")?;
    println!("{}", format_summary_block(&summary));

    Ok(())
}
