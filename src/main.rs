use bytesize::ByteSize;
use clap::Parser;
use clients::api::Error;
use repo_size_app::measure_repo_sizes;
use repo_size_app::Args;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let report = measure_repo_sizes(args).await?;

    println!(
        "Found {} repos for {}, {} total size",
        report.stats.repo_count,
        report.scope,
        ByteSize::b(report.stats.total_size)
    );
    print!("{}", report.stats);

    Ok(())
}
