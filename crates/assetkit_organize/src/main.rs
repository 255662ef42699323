use anyhow::Context;

fn main() -> anyhow::Result<()> {
    assetkit_log::init_logger();

    let path_dir_base = std::env::current_dir().context("Failed to resolve working directory")?;
    let report = assetkit_organize::run_organize(&path_dir_base)?;
    assetkit_organize::log_run_summary(&report);
    Ok(())
}
