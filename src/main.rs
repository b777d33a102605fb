use anyhow::Result;

fn main() -> Result<()> {
    vacancy_stats::cli::run()
}
