//! A static HTML rendition of the dashboard.
//!
//! The page is a Chart.js document regenerated after every load cycle:
//! widget contents are written into the markup and every live chart is
//! drawn by an inline script.

pub mod charts;
pub mod layout;
pub mod output;
pub mod page;
pub mod view;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::html::charts::HtmlCharts;
use crate::html::layout::PageLayout;
use crate::html::output::OutputFile;
use crate::html::page::DashboardPage;
use crate::html::page::Render;
use crate::html::view::HtmlView;

pub(crate) const SCRIPT_FILE_NAME: &str = "dashboard.js";

const SCRIPT: &str = include_str!("./html/dashboard.js");

/// A dashboard drawn onto a static HTML page.
pub type HtmlDashboard = Dashboard<HtmlView, HtmlCharts>;

/// Creates a dashboard over a page layout.
pub fn dashboard(layout: PageLayout) -> HtmlDashboard {
    Dashboard::new(HtmlView::new(layout), HtmlCharts::new())
}

/// The dashboard directory is structured as follows:
///
/// ./dashboard/index.html
/// ./dashboard/dashboard.js
///
/// The __index__ file is the page itself and is rewritten after
/// every load cycle. The __dashboard.js__ file draws the charts.
pub struct DashboardDir {
    root_path: PathBuf,
    index_file_path: PathBuf,
}

impl DashboardDir {
    const MAIN_DIR_NAME: &str = "dashboard";
    const INDEX_FILE_NAME: &str = "index.html";

    /// Creates the directory under `path` along with the chart script.
    pub fn init(path: &Path) -> Result<DashboardDir> {
        let root_path = path.join(Self::MAIN_DIR_NAME);
        let index_file_path = root_path.join(Self::INDEX_FILE_NAME);

        fs::create_dir_all(&root_path)?;
        fs::write(root_path.join(SCRIPT_FILE_NAME), SCRIPT)?;

        tracing::debug!(path = %root_path.display(), "initialized the dashboard directory");

        Ok(Self {
            root_path,
            index_file_path,
        })
    }

    /// Writes the page, replacing the previous one.
    pub fn write(&self, page: &DashboardPage<'_>) -> Result<()> {
        let mut output = OutputFile::create(&self.index_file_path)?;
        page.render(&mut output)?;
        output.commit()?;

        tracing::info!(path = %self.index_file_path.display(), "wrote the dashboard page");
        Ok(())
    }

    /// The directory path.
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// The path of the page.
    pub fn index_file_path(&self) -> &Path {
        &self.index_file_path
    }
}
