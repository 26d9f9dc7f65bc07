use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use blog_service::BlogService;
use statistic::{Statistic, OutputFormat};

mod blog_service;
mod statistic;

/// Prints statistics of a blog list exported as a JSON array
#[derive(Parser, Debug)]
#[command(name = "bloglist_stats", version)]
struct Opt
{
    /// JSON file with the blogs
    #[arg(short, long, env = "BLOGLIST_INPUT", default_value = "blogs.json")]
    input: PathBuf,

    /// Statistic to print
    #[arg(short, long, value_enum, default_value_t = Statistic::Summary)]
    statistic: Statistic,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat
}

fn main() -> anyhow::Result<()>
{
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = Opt::parse();

    let service = BlogService::from_file(&opt.input)
        .with_context(|| format!("Failed to load blogs from {}", opt.input.display()))?;

    info!("Computing {:?} over {} blogs", opt.statistic, service.get_blogs().len());

    let output = opt.format.render(opt.statistic, &service).context("Failed to serialize statistic")?;

    println!("{}", output);

    Ok(())
}
