use pcbdash_vis::html;
use pcbdash_vis::html::DashboardDir;
use pcbdash_vis::html::layout::PageLayout;
use pcbdash_vis::html::page::DashboardPage;
use pcbdash_vis::range::Range;
use pcbdash_vis::sample::SampleSource;

use crate::cli::PathExt;
use crate::cli::SampleArgs;
use crate::error::CliError;

pub(crate) fn sample(args: SampleArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;
    let vis = DashboardDir::init(&output_path)?;
    let mut dashboard = html::dashboard(PageLayout::sample());

    dashboard.show_selection(args.selection);
    // The sample data does not depend on the selected range.
    dashboard.load(&SampleSource, Range::All);

    vis.write(&DashboardPage::new(&dashboard))?;

    println!(
        "The sample dashboard was written to `{}`.",
        vis.index_file_path().display()
    );

    Ok(())
}
