use std::thread;
use std::time::Duration;

use pcbdash_vis::dashboard::LoadOutcome;
use pcbdash_vis::html;
use pcbdash_vis::html::DashboardDir;
use pcbdash_vis::html::HtmlDashboard;
use pcbdash_vis::html::layout::PageLayout;
use pcbdash_vis::html::page::DashboardPage;
use pcbdash_vis::range::Range;
use pcbdash_vis::range::today;

use crate::cli::PathExt;
use crate::cli::ViewArgs;
use crate::error::CliError;
use crate::fetch::client::DashboardClient;

pub(crate) fn view(args: ViewArgs) -> Result<(), CliError> {
    let output_path = args.output_path.or_current_dir()?;
    let client = DashboardClient::new(args.url)?;
    let vis = DashboardDir::init(&output_path)?;
    let mut dashboard = html::dashboard(PageLayout::dashboard());

    tracing::info!(range = %args.range, path = %vis.root_path().display(), "rendering the dashboard");

    let Some(seconds) = args.refresh_every else {
        return match cycle(&mut dashboard, &client, &vis, args.range, None)? {
            LoadOutcome::Rendered => Ok(()),
            outcome => Err(CliError::Aborted(outcome.to_string())),
        };
    };

    let interval = Duration::from_secs(seconds);

    loop {
        // An aborted cycle leaves the previous page in place until the next one.
        cycle(&mut dashboard, &client, &vis, args.range, Some(interval))?;
        thread::sleep(interval);
    }
}

fn cycle(
    dashboard: &mut HtmlDashboard,
    client: &DashboardClient,
    vis: &DashboardDir,
    range: Range,
    interval: Option<Duration>,
) -> Result<LoadOutcome, CliError> {
    let outcome = dashboard.refresh(client, range, today());

    if outcome == LoadOutcome::Rendered {
        let page = DashboardPage::new(dashboard);
        let page = match interval {
            Some(interval) => page.refresh_every(interval),
            None => page,
        };

        vis.write(&page)?;
    }

    tracing::debug!(%outcome, "load cycle completed");
    Ok(outcome)
}
